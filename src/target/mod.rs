//! Target resolution: which file each command-line target names, and which
//! compiler handles it.

mod extension;
mod lister;
mod resolver;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use extension::{resolve_extension, split_extension, ExtensionMatch, MAX_CANDIDATES};
pub use lister::{DirectoryLister, FsLister, ListedFile, StaticLister};
pub use resolver::{ResolvedTarget, TargetResolver};

/// Errors that stop target resolution. None of them are retried.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("no input targets")]
    NoTargets,

    #[error("target '{target}' did not match any existing targetable file")]
    Unresolvable { target: String },

    #[error(
        "target '{target}' ambiguously matches multiple targetable files; \
         suggest explicit file extension: one of: {}",
        .candidates.join(" ")
    )]
    Ambiguous {
        target: String,
        candidates: Vec<String>,
    },

    #[error("target '{target}' does not match any targetable file type")]
    UnknownExtension { target: String },

    #[error("target '{target}' does not have '{expected}' extension")]
    MismatchedExtension { target: String, expected: String },

    #[error("target '{target}' {}", missing_suffix(.mapped))]
    NotFound {
        target: String,
        /// Path tried after appending an inferred extension.
        mapped: Option<String>,
    },

    #[error("permission denied: cannot access target '{target}'")]
    AccessDenied { target: String },

    #[error("target '{target}' is not a regular file")]
    NotRegularFile { target: String },

    #[error("cannot access target '{target}': {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot list directory '{}': {source}", .dir.display())]
    DirectoryListing {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn missing_suffix(mapped: &Option<String>) -> String {
    match mapped {
        Some(path) => format!("mapped to '{path}' which does not exist"),
        None => "does not exist".to_string(),
    }
}
