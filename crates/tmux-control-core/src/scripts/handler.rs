use std::path::Path;
use tracing::{debug, info, warn};

use crate::scripts::{errors::ScriptError, operations, types::*};

/// Enumerate the scripts of `directory` in natural order.
///
/// Only regular files directly inside `directory` are considered. When
/// `filter` requires an extension, files whose extension does not contain it
/// are dropped. The result is sorted with the natural ordering of the full
/// absolute path, ties broken by the raw path string.
///
/// An empty result is not an error.
///
/// # Errors
///
/// Returns [`ScriptError::DirectoryNotFound`] if `directory` does not exist
/// or is not a directory, and [`ScriptError::ReadFailed`] if it cannot be
/// listed.
pub fn enumerate(
    directory: &Path,
    filter: &ExtensionFilter,
) -> Result<Vec<ScriptFile>, ScriptError> {
    info!(
        event = "core.scripts.enumerate_started",
        directory = %directory.display(),
        extension = %filter
    );

    let resolved = operations::resolve_directory(directory).inspect_err(|e| {
        warn!(
            event = "core.scripts.enumerate_failed",
            directory = %directory.display(),
            error = %e
        );
    })?;

    let files = operations::list_regular_files(&resolved)?;
    let listed = files.len();
    let files = operations::filter_by_extension(files, filter);

    debug!(
        event = "core.scripts.filter_completed",
        directory = %resolved.display(),
        listed,
        kept = files.len()
    );

    let mut scripts: Vec<ScriptFile> = files.into_iter().map(ScriptFile::new).collect();
    operations::sort_naturally(&mut scripts);

    info!(
        event = "core.scripts.enumerate_completed",
        directory = %resolved.display(),
        count = scripts.len()
    );

    Ok(scripts)
}
