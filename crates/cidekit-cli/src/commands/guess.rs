//! `cidekit guess` — print the project name guessed from a CMakeLists.txt.
//!
//! Exposes the same heuristic `attach` uses for its default, so scripts
//! (and curious users) can see what would be picked.

use tracing::instrument;

use cidekit_core::domain::guess;

use crate::{
    cli::GuessArgs,
    commands::common::absolutize,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(cmake_file = %args.cmake_file.display()))]
pub fn execute(args: GuessArgs, output: OutputManager) -> CliResult<()> {
    let cmake_file = absolutize(&args.cmake_file)?;
    if !cmake_file.is_file() {
        return Err(CliError::AttachTargetMissing { path: cmake_file });
    }

    let bytes = std::fs::read(&cmake_file).map_err(|e| CliError::IoError {
        message: format!("failed to read '{}'", cmake_file.display()),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let name = guess::guess(&cmake_file, &text);
    if name.is_empty() {
        return Err(CliError::NameGuessFailed { path: cmake_file });
    }

    output.print(&name)?;
    Ok(())
}
