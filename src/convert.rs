//! Office automation bridge: docx to PDF via a headless office suite.

use rapstel_traits::{ConvertError, DocumentConverter};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Converts documents by shelling out to LibreOffice.
///
/// Each call starts one `soffice` process and waits for it to exit, so the
/// external application is never shared between two conversions.
pub struct SofficeConverter {
    program: String,
}

impl SofficeConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for SofficeConverter {
    fn default() -> Self {
        Self::new("soffice")
    }
}

impl DocumentConverter for SofficeConverter {
    fn convert_to_pdf(&mut self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let outdir = output.parent().unwrap_or(Path::new("."));
        log::info!("converting {input:?} to PDF");

        let status = Command::new(&self.program)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(outdir)
            .arg(input)
            .status()?;
        if !status.success() {
            return Err(ConvertError::Failed { input: input.to_path_buf(), status });
        }

        // soffice names its output after the input stem; move it to the
        // requested name when they differ.
        let produced = match input.file_stem() {
            Some(stem) => outdir.join(stem).with_extension("pdf"),
            None => return Err(ConvertError::MissingOutput(output.to_path_buf())),
        };
        if produced != output {
            fs::rename(&produced, output)
                .map_err(|_| ConvertError::MissingOutput(produced.clone()))?;
        }
        if !output.exists() {
            return Err(ConvertError::MissingOutput(output.to_path_buf()));
        }
        Ok(())
    }
}
