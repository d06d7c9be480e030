//! Target resolver: command-line target → existing source file + compiler.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::config::{CompilerEntry, ConfigRegistry};
use crate::target::extension::{resolve_extension, split_extension, ExtensionMatch};
use crate::target::lister::DirectoryLister;
use crate::target::TargetError;

/// A target that passed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget<'r> {
    /// Path handed to the compiler (the raw target plus any inferred extension).
    pub path: String,
    /// Compiler handling this target.
    pub compiler: &'r CompilerEntry,
}

/// Resolves targets against the registry and the filesystem.
pub struct TargetResolver<'r> {
    registry: &'r ConfigRegistry,
    lister: &'r dyn DirectoryLister,
}

impl<'r> TargetResolver<'r> {
    pub fn new(registry: &'r ConfigRegistry, lister: &'r dyn DirectoryLister) -> Self {
        Self { registry, lister }
    }

    /// Resolve one target.
    ///
    /// With no compiler bound yet, the target's extension (given or found on
    /// disk) picks one. Once bound, every further target must use the same
    /// extension; targets without one inherit it.
    pub fn resolve(
        &self,
        raw: &str,
        bound: Option<&'r CompilerEntry>,
    ) -> Result<ResolvedTarget<'r>, TargetError> {
        let (_, explicit) = split_extension(raw);

        let compiler = match bound {
            Some(compiler) => {
                if let Some(ext) = explicit {
                    if ext != compiler.extension {
                        return Err(TargetError::MismatchedExtension {
                            target: raw.to_string(),
                            expected: compiler.extension.clone(),
                        });
                    }
                }
                compiler
            }
            None => {
                let ext = match explicit {
                    Some(ext) => ext.to_string(),
                    None => self.infer_extension(raw)?,
                };
                self.registry
                    .lookup(&ext)
                    .ok_or_else(|| TargetError::UnknownExtension {
                        target: raw.to_string(),
                    })?
            }
        };

        let path = match explicit {
            Some(_) => raw.to_string(),
            None => format!("{}{}", raw, compiler.extension),
        };

        check_file(raw, &path, explicit.is_none())?;
        tracing::debug!(raw, path = %path, compiler = %compiler.program, "Resolved target");

        Ok(ResolvedTarget { path, compiler })
    }

    fn infer_extension(&self, raw: &str) -> Result<String, TargetError> {
        match resolve_extension(raw, self.registry, self.lister)? {
            ExtensionMatch::One(ext) => Ok(ext),
            ExtensionMatch::None => Err(TargetError::Unresolvable {
                target: raw.to_string(),
            }),
            ExtensionMatch::Ambiguous(candidates) => Err(TargetError::Ambiguous {
                target: raw.to_string(),
                candidates,
            }),
        }
    }
}

/// The resolved file must exist, be a regular file and be readable.
fn check_file(raw: &str, path: &str, inferred: bool) -> Result<(), TargetError> {
    let classify = |e: io::Error| match e.kind() {
        io::ErrorKind::NotFound => TargetError::NotFound {
            target: raw.to_string(),
            mapped: inferred.then(|| path.to_string()),
        },
        io::ErrorKind::PermissionDenied => TargetError::AccessDenied {
            target: raw.to_string(),
        },
        _ => TargetError::Io {
            target: raw.to_string(),
            source: e,
        },
    };

    let meta = fs::metadata(Path::new(path)).map_err(classify)?;
    if !meta.is_file() {
        return Err(TargetError::NotRegularFile {
            target: raw.to_string(),
        });
    }
    File::open(path).map_err(classify)?;
    Ok(())
}
