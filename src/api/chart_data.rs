use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::{RawColumn, SeriesId, X_COLUMN_ID};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Series type the core knows how to draw.
pub const LINE_SERIES_TYPE: &str = "line";

/// One chart as delivered by the data source.
///
/// Each column is `[id, v0, v1, ...]`; values are numbers or `null`. The
/// column with id `"x"` holds millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub columns: Vec<Vec<Value>>,
    #[serde(default)]
    pub colors: IndexMap<SeriesId, String>,
    #[serde(default)]
    pub names: IndexMap<SeriesId, String>,
    #[serde(default)]
    pub types: IndexMap<SeriesId, String>,
}

/// Display attributes of one data series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMeta {
    pub name: String,
    pub color: Color,
}

impl ChartData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::MalformedInput(format!("failed to parse chart json: {e}")))
    }

    /// Parses a JSON array of charts, the shape of a typical data file.
    pub fn list_from_json_str(input: &str) -> ChartResult<Vec<Self>> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::MalformedInput(format!("failed to parse chart list json: {e}")))
    }

    /// Splits each column into its header id and typed values.
    pub fn raw_columns(&self) -> ChartResult<Vec<RawColumn>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(position, column)| parse_column(position, column))
            .collect()
    }

    /// Name and color for `series_id`, falling back to the id and `fallback`.
    pub fn series_meta(&self, series_id: &str, fallback: Color) -> ChartResult<SeriesMeta> {
        if let Some(kind) = self
            .types
            .get(series_id)
            .filter(|kind| kind.as_str() != LINE_SERIES_TYPE)
        {
            warn!(series_id, kind = %kind, "unsupported series type, drawing as line");
        }

        let name = self
            .names
            .get(series_id)
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| series_id.to_owned());
        let color = self
            .colors
            .get(series_id)
            .map(|hex| Color::from_hex(hex))
            .transpose()?
            .unwrap_or(fallback);

        Ok(SeriesMeta { name, color })
    }
}

fn parse_column(position: usize, column: &[Value]) -> ChartResult<RawColumn> {
    let (header, values) = column
        .split_first()
        .ok_or_else(|| ChartError::MalformedInput(format!("column {position} is empty")))?;
    let id = header.as_str().ok_or_else(|| {
        ChartError::MalformedInput(format!("column {position} header must be a string"))
    })?;

    let values = values
        .iter()
        .enumerate()
        .map(|(row, value)| match value {
            Value::Null => Ok(None),
            Value::Number(number) => number.as_f64().map(Some).ok_or_else(|| {
                ChartError::MalformedInput(format!("column `{id}` row {row} is not representable"))
            }),
            other => Err(ChartError::MalformedInput(format!(
                "column `{id}` row {row} must be a number or null, got {other}"
            ))),
        })
        .collect::<ChartResult<Vec<_>>>()?;

    if id == X_COLUMN_ID && values.iter().any(Option::is_none) {
        return Err(ChartError::MalformedInput(
            "x column must not contain nulls".to_owned(),
        ));
    }

    Ok(RawColumn::new(id, values))
}
