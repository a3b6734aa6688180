//! Conversion service: mind map file in, case table file out

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::error_ext::IoResultExt;
use crate::application::{table, workbook, ApplicationError, ApplicationResult};
use crate::domain::{CaseExtractor, DomainError};
use crate::infrastructure::traits::{Confirmer, FileSystem};

/// How a conversion run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Table written with this many cases
    Written { cases: usize },
    /// User declined to overwrite the existing output file
    Cancelled,
}

/// Converts one mind map into one case table.
pub struct ConversionService {
    fs: Arc<dyn FileSystem>,
    confirmer: Arc<dyn Confirmer>,
}

impl ConversionService {
    /// Create a new conversion service.
    ///
    /// # Arguments
    /// * `fs` - Filesystem abstraction
    /// * `confirmer` - Overwrite confirmation boundary
    pub fn new(fs: Arc<dyn FileSystem>, confirmer: Arc<dyn Confirmer>) -> Self {
        Self { fs, confirmer }
    }

    /// Run the pipeline: read, decode, extract, confirm overwrite, write.
    ///
    /// A declined overwrite is a clean abort (`Cancelled`), not an error:
    /// nothing is written and the existing file stays untouched.
    pub fn convert(&self, input: &Path, output: &Path) -> ApplicationResult<ConversionOutcome> {
        debug!("convert: {} -> {}", input.display(), output.display());

        let bytes = self.fs.read(input).or_decode_error(input)?;
        let root = workbook::parse_workbook(&bytes, input)?;
        if root.children.is_empty() {
            return Err(ApplicationError::InvalidStructure(
                "root topic has no child topics".to_string(),
            ));
        }

        let cases = CaseExtractor::new().extract(&root);
        info!("extracted {} test cases", cases.len());
        if cases.is_empty() {
            return Err(DomainError::NoTestCases.into());
        }

        if self.fs.exists(output) {
            let prompt = format!("file '{}' already exists, overwrite?", output.display());
            let overwrite = self
                .confirmer
                .confirm(&prompt)
                .with_path_context("confirm overwrite", output)?;
            if !overwrite {
                return Ok(ConversionOutcome::Cancelled);
            }
        }

        let data = table::render_csv(&cases)?;
        self.fs
            .write(output, &data)
            .with_path_context("write case table", output)?;

        Ok(ConversionOutcome::Written {
            cases: cases.len(),
        })
    }
}
