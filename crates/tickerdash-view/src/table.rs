//! Tabular projection of report records.

use serde::Serialize;

use tickerdash_core::{MetricSchema, MetricValue, ReportRecord};

/// Cell text for values that are missing or null.
pub const PLACEHOLDER: &str = "-";

/// Horizontal alignment of a grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellAlign {
    Left,
    Center,
    Right,
}

/// One rendered grid column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridColumn {
    pub label: String,
    pub align: CellAlign,
}

impl GridColumn {
    pub fn new(label: impl Into<String>, align: CellAlign) -> Self {
        Self {
            label: label.into(),
            align,
        }
    }
}

/// Schema-complete renderable grid: a header row plus one body row per
/// source record. Cells are plain text; the render surface applies styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Project records through a schema into a grid.
///
/// The header follows schema order. Every row has exactly one cell per
/// schema column; keys missing from a record render as [`PLACEHOLDER`]
/// rather than shortening the row. The fiscal-period column is
/// center-aligned to stand apart from the numeric columns. Record order is
/// preserved — sorting is the caller's concern.
pub fn project(records: &[ReportRecord], schema: &MetricSchema) -> Grid {
    let columns = schema
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let align = if index == 0 {
                CellAlign::Center
            } else {
                CellAlign::Right
            };
            GridColumn::new(column.label, align)
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            schema
                .columns()
                .iter()
                .map(|column| cell_text(record.get(column.key)))
                .collect()
        })
        .collect();

    Grid { columns, rows }
}

fn cell_text(value: Option<&MetricValue>) -> String {
    match value {
        Some(MetricValue::Number(number)) => format!("{number}"),
        Some(MetricValue::Text(text)) => text.clone(),
        Some(MetricValue::Null) | None => String::from(PLACEHOLDER),
    }
}
