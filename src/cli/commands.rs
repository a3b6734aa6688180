//! Command dispatch: wires the real boundaries and runs the conversion

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ConversionOutcome, ConversionService};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::infrastructure::traits::{AlwaysConfirm, Confirmer, RealFileSystem, StdinConfirmer};

const USAGE: &str = "usage: xmind2case <input.xmind> [output.csv]\n\
                     when no output file is given, the .csv is written next to the input";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(input) = cli.input.as_deref() else {
        return Err(CliError::Usage(USAGE.to_string()));
    };
    convert(input, cli.output.as_deref(), cli.yes)
}

/// Derive the output path when none is given: same directory, same stem,
/// `.csv` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

#[instrument]
fn convert(input: &Path, output: Option<&Path>, assume_yes: bool) -> CliResult<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    debug!("input: {:?}, output: {:?}", input, output);

    let confirmer: Arc<dyn Confirmer> = if assume_yes {
        Arc::new(AlwaysConfirm)
    } else {
        Arc::new(StdinConfirmer)
    };
    let service = ConversionService::new(Arc::new(RealFileSystem), confirmer);

    match service.convert(input, &output)? {
        ConversionOutcome::Written { cases } => {
            output::success(&format!(
                "converted {} test cases to {}",
                cases,
                output.display()
            ));
            Ok(())
        }
        ConversionOutcome::Cancelled => {
            output::info("operation cancelled, existing file left untouched");
            Ok(())
        }
    }
}
