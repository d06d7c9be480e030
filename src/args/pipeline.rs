//! Pipeline: ties target resolution and assembly together.

use crate::args::assembler::{assemble, AssembledCommand};
use crate::args::session::Session;
use crate::config::ConfigRegistry;
use crate::target::{DirectoryLister, TargetError, TargetResolver};

/// Build the compiler invocation for already-classified arguments.
///
/// # Arguments
///
/// * `targets` - Target names from the command line, in order
/// * `options` - Compiler options from the command line, in order
/// * `registry` - Loaded compiler entries
/// * `lister` - Directory listing used to infer missing extensions
///
/// Fails before anything is spawned if any target does not resolve.
pub fn build_invocation(
    targets: &[String],
    options: &[String],
    registry: &ConfigRegistry,
    lister: &dyn DirectoryLister,
) -> Result<AssembledCommand, TargetError> {
    let resolver = TargetResolver::new(registry, lister);

    // Stage 1: Resolve targets, bind the compiler
    let session = Session::load(targets, options, &resolver)?;

    // Stage 2: Assemble arguments
    let command = assemble(&session)?;

    tracing::info!(
        program = command.program(),
        args = ?command.args(),
        redirect = ?command.redirect,
        "Assembled compiler invocation"
    );
    Ok(command)
}
