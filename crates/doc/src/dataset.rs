//! ORA dataset loading, schema resolution, and attention-point filtering.
//!
//! Column binding happens once, at load time, so a missing column family
//! surfaces immediately instead of deep inside row processing.

use crate::error::DocError;
use std::path::Path;

/// Column name the category binding falls back to when no `Categorie`
/// column exists (older ORA exports).
const LEGACY_CATEGORY_COLUMN: &str = "Advies mutatie I-ORA & Onderhoud";

/// A tabular ORA export: header row plus string-valued data rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Loads the CSV export that accompanies an ORA workbook.
    pub fn from_csv_path(path: &Path) -> Result<Self, DocError> {
        log::debug!("loading dataset from {path:?}");
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let columns = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { columns, rows })
    }
}

/// Validated column bindings for one dataset.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub category: usize,
    pub finding: usize,
    pub element: usize,
    pub component: usize,
    pub photos: usize,
}

impl Schema {
    /// Binds the expected column families against a header row.
    ///
    /// The category column is the first whose name starts with `Categorie`,
    /// falling back to the legacy advice column. Every other binding is
    /// required as-is; any miss is a load-time error.
    pub fn resolve(columns: &[String]) -> Result<Self, DocError> {
        let find = |predicate: &dyn Fn(&str) -> bool, family: &'static str| {
            columns
                .iter()
                .position(|name| predicate(name))
                .ok_or(DocError::SchemaColumn { family })
        };

        let category = columns
            .iter()
            .position(|name| name.starts_with("Categorie"))
            .or_else(|| columns.iter().position(|name| name == LEGACY_CATEGORY_COLUMN))
            .ok_or(DocError::SchemaColumn { family: "Categorie" })?;

        Ok(Self {
            category,
            finding: find(&|name| name.starts_with("Bevinding"), "Bevinding")?,
            element: find(&|name| name == "Element", "Element")?,
            component: find(&|name| name == "Bouwdeel", "Bouwdeel")?,
            photos: find(&|name| name.contains("Foto"), "Foto")?,
        })
    }
}

/// One filtered row, carrying the fields the table builder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttentionPoint {
    /// Combined finding field, `"<label>: <description>"`.
    pub finding: String,
    /// Element field; only the first comma segment is rendered.
    pub element: String,
    pub component: String,
    /// Category/advice text, rendered verbatim.
    pub category: String,
    /// Raw photo-reference list.
    pub photo_refs: String,
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

/// Selects the rows whose category marks them as attention points for the
/// asset manager: the value contains both "aandachtspunt" and "beheerder",
/// case-insensitively. Row order is preserved.
pub fn attention_points(dataset: &Dataset, schema: &Schema) -> Vec<AttentionPoint> {
    dataset
        .rows
        .iter()
        .filter(|row| {
            let value = cell(row, schema.category).to_lowercase();
            value.contains("aandachtspunt") && value.contains("beheerder")
        })
        .map(|row| AttentionPoint {
            finding: cell(row, schema.finding),
            element: cell(row, schema.element),
            component: cell(row, schema.component),
            category: cell(row, schema.category),
            photo_refs: cell(row, schema.photos),
        })
        .collect()
}
