mod chart_data;
mod chart_style;
mod engine;
mod engine_config;
mod engine_snapshot;
mod frame_builder;
pub mod label_format;
mod redraw;
mod tooltip;

pub use chart_data::{ChartData, LINE_SERIES_TYPE, SeriesMeta};
pub use chart_style::{AxisStyle, ChartStyle, FrameStyle, TooltipStyle};
pub use engine::{ChartEngine, EngineDiagnostics};
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use redraw::{FrameScheduler, ManualFrameScheduler, RedrawScheduler};
pub use tooltip::tooltip_anchor_x;
