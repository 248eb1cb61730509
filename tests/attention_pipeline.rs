//! End-to-end tests of the attention-point document pipeline.

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use rapstel::batch::Outcome;
use rapstel::{Config, attention};
use rapstel_doc::DocxTableDocument;
use rapstel_traits::{ConvertError, DocumentConverter};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const CODE: &str = "24H-001-01";

/// Stands in for the office suite: "conversion" is a byte copy.
struct CopyConverter;

impl DocumentConverter for CopyConverter {
    fn convert_to_pdf(&mut self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        fs::copy(input, output)?;
        Ok(())
    }
}

fn scaffold_table() -> Table {
    let rows = (0..7)
        .map(|_| {
            TableRow::new(vec![
                TableCell::new().add_paragraph(Paragraph::new()),
                TableCell::new().add_paragraph(Paragraph::new()),
                TableCell::new().add_paragraph(Paragraph::new()),
            ])
        })
        .collect();
    Table::new(rows)
}

fn write_templates(dir: &Path) {
    fs::create_dir_all(dir).unwrap();

    let scaffold = Docx::new()
        .add_table(scaffold_table())
        .add_paragraph(Paragraph::new())
        .add_table(scaffold_table());
    let file = fs::File::create(dir.join("FORMAT_Bijlage9_AandachtspuntBeheerder.docx")).unwrap();
    scaffold.build().pack(file).unwrap();

    let empty = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text("Er zijn geen aandachtspunten.")),
    );
    let file =
        fs::File::create(dir.join("FORMAT_Bijlage9_GeenAandachtspuntBeheerder.docx")).unwrap();
    empty.build().pack(file).unwrap();
}

fn object_with_dataset(root: &Path, rows: &str) -> PathBuf {
    let object_path = root.join("batch").join(CODE);
    fs::create_dir_all(object_path.join("05 Output")).unwrap();
    fs::create_dir_all(object_path.join("Inspectiefoto's verkleind")).unwrap();

    let header = "Element,Bouwdeel,Bevinding,Foto's,Categorie mutatie\n";
    fs::write(
        object_path.join(format!("ORA {CODE}.csv")),
        format!("{header}{rows}"),
    )
    .unwrap();

    object_path
}

fn config_for(root: &Path) -> Config {
    Config {
        werkpakket: "WP test".to_string(),
        path_batch: root.to_path_buf(),
        batch: "batch".to_string(),
        save_dir: "05 Output".to_string(),
        path_templates: root.join("templates"),
    }
}

#[test]
fn attention_points_fill_the_scaffold_template() {
    let dir = tempdir().unwrap();
    write_templates(&dir.path().join("templates"));
    let object_path = object_with_dataset(
        dir.path(),
        "\"Brugdek, beton\",Landhoofd,a1: scheurvorming dek,nan,Aandachtspunt beheerder\n\
         Leuning,Hekwerk,b2: corrosie staander,nan,Regulier onderhoud\n",
    );
    let config = config_for(dir.path());

    let outcome =
        attention::process_object(&object_path, CODE, &config, &mut CopyConverter).unwrap();
    assert_eq!(outcome, Outcome::Succeeded);

    let docx_path = object_path
        .join("05 Output")
        .join(format!("Bijlage 9 - Aandachtspunten Beheerder {CODE}.docx"));
    assert!(docx_path.exists());
    assert!(object_path
        .join("05 Output")
        .join(format!("Bijlage 9 - {CODE}.pdf"))
        .exists());

    // One attention point: the clone scaffold is gone, the cells are filled.
    let document = DocxTableDocument::open(&docx_path).unwrap();
    assert_eq!(document.cell_text(0, 0, 0).as_deref(), Some("Aandachtspunt a1"));
    assert_eq!(document.cell_text(0, 1, 1).as_deref(), Some("Brugdek"));
    assert_eq!(document.cell_text(0, 4, 0).as_deref(), Some("scheurvorming dek"));
}

#[test]
fn no_attention_points_use_the_empty_template() {
    let dir = tempdir().unwrap();
    write_templates(&dir.path().join("templates"));
    let object_path = object_with_dataset(
        dir.path(),
        "Leuning,Hekwerk,b2: corrosie staander,nan,Regulier onderhoud\n",
    );
    let config = config_for(dir.path());

    let outcome =
        attention::process_object(&object_path, CODE, &config, &mut CopyConverter).unwrap();
    assert_eq!(outcome, Outcome::Succeeded);

    let docx_path = object_path
        .join("05 Output")
        .join(format!("Bijlage 9 - Aandachtspunten Beheerder {CODE}.docx"));
    assert!(docx_path.exists());
}

#[test]
fn missing_dataset_fails_the_object() {
    let dir = tempdir().unwrap();
    write_templates(&dir.path().join("templates"));
    let object_path = dir.path().join("batch").join(CODE);
    fs::create_dir_all(&object_path).unwrap();
    let config = config_for(dir.path());

    let result = attention::process_object(&object_path, CODE, &config, &mut CopyConverter);
    assert!(result.is_err());
}

#[test]
fn malformed_finding_fails_the_object() {
    let dir = tempdir().unwrap();
    write_templates(&dir.path().join("templates"));
    let object_path = object_with_dataset(
        dir.path(),
        "Brugdek,Landhoofd,geen dubbele punt hier,nan,Aandachtspunt beheerder\n",
    );
    let config = config_for(dir.path());

    let result = attention::process_object(&object_path, CODE, &config, &mut CopyConverter);
    assert!(result.is_err());
}
