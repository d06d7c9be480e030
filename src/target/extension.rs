//! Extension resolver: guess the extension of a target given without one.

use std::path::{is_separator, Path};

use crate::config::ConfigRegistry;
use crate::target::lister::DirectoryLister;
use crate::target::TargetError;

/// Upper bound on candidate extensions collected for one target.
pub const MAX_CANDIDATES: usize = 5;

/// Outcome of looking for `base.<ext>` files next to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionMatch {
    None,
    One(String),
    /// More than one registered extension matched, in listing order.
    Ambiguous(Vec<String>),
}

/// Split a trailing `.ext` off the last path component.
///
/// Returns the stem and the extension including its dot. A component that
/// only starts with a dot (`.profile`) has no extension.
pub fn split_extension(raw: &str) -> (&str, Option<&str>) {
    let name_start = raw.rfind(is_separator).map_or(0, |i| i + 1);
    match raw[name_start..].rfind('.') {
        None | Some(0) => (raw, None),
        Some(dot) => {
            let (stem, ext) = raw.split_at(name_start + dot);
            (stem, Some(ext))
        }
    }
}

/// Find which registered extensions exist on disk for `base`.
///
/// `base` may carry a directory part; without one the current directory is
/// listed. Only regular files count.
pub fn resolve_extension(
    base: &str,
    registry: &ConfigRegistry,
    lister: &dyn DirectoryLister,
) -> Result<ExtensionMatch, TargetError> {
    let path = Path::new(base);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(stem) = path.file_name().and_then(|s| s.to_str()) else {
        return Ok(ExtensionMatch::None);
    };

    let listing = lister
        .list(dir)
        .map_err(|source| TargetError::DirectoryListing {
            dir: dir.to_path_buf(),
            source,
        })?;

    let mut candidates: Vec<String> = Vec::new();
    for file in listing.iter().filter(|f| f.is_file) {
        if candidates.len() == MAX_CANDIDATES {
            break;
        }
        let (name_stem, Some(ext)) = split_extension(&file.name) else {
            continue;
        };
        if name_stem == stem && registry.contains(ext) && !candidates.iter().any(|c| c == ext) {
            candidates.push(ext.to_string());
        }
    }

    tracing::debug!(base, ?candidates, "Resolved extension candidates");

    Ok(match candidates.len() {
        0 => ExtensionMatch::None,
        1 => ExtensionMatch::One(candidates.remove(0)),
        _ => ExtensionMatch::Ambiguous(candidates),
    })
}
