//! Per-object pipeline: generate "Bijlage 9 - Aandachtspunten Beheerder".

use crate::batch::Outcome;
use crate::config::Config;
use crate::error::RunError;
use rapstel_doc::{Dataset, DocxTableDocument, Schema, attention_points, populate_rows};
use rapstel_source::{collect_photos, most_recent_ora, photo_directory};
use rapstel_traits::DocumentConverter;
use std::path::Path;

/// Template with the two-table scaffold, one slot per attention point.
const TEMPLATE_WITH_POINTS: &str = "FORMAT_Bijlage9_AandachtspuntBeheerder.docx";
/// Variant stating that no attention points exist.
const TEMPLATE_WITHOUT_POINTS: &str = "FORMAT_Bijlage9_GeenAandachtspuntBeheerder.docx";

/// Builds one object's attention-point document and converts it to PDF.
///
/// The ORA dataset is the CSV export next to the workbook. Schema binding
/// happens before any row is touched, so a misshapen export fails the
/// object immediately.
pub fn process_object(
    object_path: &Path,
    object_code: &str,
    config: &Config,
    converter: &mut dyn DocumentConverter,
) -> Result<Outcome, RunError> {
    let dataset_path = most_recent_ora(object_path, &["csv"])?;
    let dataset = Dataset::from_csv_path(&dataset_path)?;
    let schema = Schema::resolve(&dataset.columns)?;
    let points = attention_points(&dataset, &schema);
    log::info!(
        "object [{object_code}] has {} aandachtspunten voor de beheerder",
        points.len()
    );

    let template = if points.is_empty() {
        config.path_templates.join(TEMPLATE_WITHOUT_POINTS)
    } else {
        config.path_templates.join(TEMPLATE_WITH_POINTS)
    };
    let mut document = DocxTableDocument::open(&template)?;

    if !points.is_empty() {
        let photo_dir = photo_directory(object_path)?;
        let candidates = collect_photos(&photo_dir);
        populate_rows(&mut document, &points, &candidates)?;
    }

    let save_dir = config.output_dir(object_path);
    let docx_path =
        save_dir.join(format!("Bijlage 9 - Aandachtspunten Beheerder {object_code}.docx"));
    document.save(&docx_path)?;

    let pdf_path = save_dir.join(format!("Bijlage 9 - {object_code}.pdf"));
    converter.convert_to_pdf(&docx_path, &pdf_path)?;

    log::info!("generated Bijlage 9 for [{object_code}]");
    Ok(Outcome::Succeeded)
}
