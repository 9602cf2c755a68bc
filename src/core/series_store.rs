use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Column id reserved for the timestamp axis.
pub const X_COLUMN_ID: &str = "x";

pub type SeriesId = String;

/// One input column: an id plus its values in row order.
///
/// `None` marks a missing sample. For the x column every row must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    pub id: SeriesId,
    pub values: Vec<Option<f64>>,
}

impl RawColumn {
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, values: Vec<Option<f64>>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    /// Convenience constructor for fully populated columns.
    #[must_use]
    pub fn dense(id: impl Into<SeriesId>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(id, values.into_iter().map(Some).collect())
    }

    #[must_use]
    pub fn is_x_axis(&self) -> bool {
        self.id == X_COLUMN_ID
    }
}

/// One time-indexed row: a timestamp plus the samples present for that row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Milliseconds since the Unix epoch.
    pub x: i64,
    pub values: IndexMap<SeriesId, f64>,
}

impl Tick {
    #[must_use]
    pub fn value(&self, series_id: &str) -> Option<f64> {
        self.values.get(series_id).copied()
    }
}

/// Running min/max of one series (or of all of them).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub min: f64,
    pub max: f64,
}

impl SeriesBounds {
    /// Bounds are seeded at zero, so an all-positive series still reports `min == 0`.
    pub const SEED: Self = Self { min: 0.0, max: 0.0 };

    fn widen(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl Default for SeriesBounds {
    fn default() -> Self {
        Self::SEED
    }
}

/// Immutable per-tick records and value bounds built once per data load.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore {
    ticks: Vec<Tick>,
    bounds: IndexMap<SeriesId, SeriesBounds>,
    absolute_bounds: SeriesBounds,
}

impl SeriesStore {
    /// Builds ticks and bounds from columnar input.
    ///
    /// Exactly one column must carry the id `"x"`; every other column is a
    /// data series and must have the same number of rows.
    pub fn build(columns: &[RawColumn]) -> ChartResult<Self> {
        let mut x_columns = columns.iter().filter(|column| column.is_x_axis());
        let x_column = x_columns
            .next()
            .ok_or_else(|| ChartError::MalformedInput("no x column present".to_owned()))?;
        if x_columns.next().is_some() {
            return Err(ChartError::MalformedInput(
                "more than one x column present".to_owned(),
            ));
        }

        let mut ticks = Vec::with_capacity(x_column.values.len());
        for (row, value) in x_column.values.iter().enumerate() {
            let x = value
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    ChartError::MalformedInput(format!("x value at row {row} is missing"))
                })?;
            ticks.push(Tick {
                x: x.round() as i64,
                values: IndexMap::new(),
            });
        }

        let mut bounds = IndexMap::new();
        for column in columns.iter().filter(|column| !column.is_x_axis()) {
            if column.values.len() != ticks.len() {
                return Err(ChartError::MalformedInput(format!(
                    "series `{}` has {} values, x column has {}",
                    column.id,
                    column.values.len(),
                    ticks.len()
                )));
            }
            if bounds.contains_key(&column.id) {
                return Err(ChartError::MalformedInput(format!(
                    "series `{}` appears more than once",
                    column.id
                )));
            }

            let mut series_bounds = SeriesBounds::SEED;
            for (tick, value) in ticks.iter_mut().zip(&column.values) {
                // NaN/inf are dropped the same way as nulls.
                if let Some(value) = value.filter(|v| v.is_finite()) {
                    series_bounds.widen(value);
                    tick.values.insert(column.id.clone(), value);
                }
            }
            bounds.insert(column.id.clone(), series_bounds);
        }

        let absolute_bounds = bounds
            .values()
            .fold(SeriesBounds::SEED, |acc, b| acc.union(*b));

        debug!(
            ticks = ticks.len(),
            series = bounds.len(),
            abs_min = absolute_bounds.min,
            abs_max = absolute_bounds.max,
            "built series store"
        );

        Ok(Self {
            ticks,
            bounds,
            absolute_bounds,
        })
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn bounds(&self, series_id: &str) -> Option<SeriesBounds> {
        self.bounds.get(series_id).copied()
    }

    #[must_use]
    pub fn all_bounds(&self) -> &IndexMap<SeriesId, SeriesBounds> {
        &self.bounds
    }

    #[must_use]
    pub fn absolute_bounds(&self) -> SeriesBounds {
        self.absolute_bounds
    }

    /// Data series ids in input order.
    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.bounds.keys().map(String::as_str)
    }
}
