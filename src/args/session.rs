//! Session: everything one compiler invocation needs.

use std::path::Path;

use crate::config::CompilerEntry;
use crate::target::{TargetError, TargetResolver};

/// Resolved targets, user options and the compiler they all share.
///
/// The compiler is bound by the first target and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct Session<'r> {
    project: String,
    targets: Vec<String>,
    options: Vec<String>,
    compiler: Option<&'r CompilerEntry>,
}

impl<'r> Session<'r> {
    pub fn new() -> Self {
        Self {
            project: String::new(),
            targets: Vec::new(),
            options: Vec::new(),
            compiler: None,
        }
    }

    /// Resolve all targets and collect options in one pass.
    pub fn load(
        targets: &[String],
        options: &[String],
        resolver: &TargetResolver<'r>,
    ) -> Result<Self, TargetError> {
        if targets.is_empty() {
            return Err(TargetError::NoTargets);
        }

        let mut session = Self::new();
        for raw in targets {
            session.add_target(raw, resolver)?;
        }
        for option in options {
            session.add_option(option.clone());
        }
        Ok(session)
    }

    /// Resolve a target and append it. The first target also sets the
    /// project name and binds the compiler.
    pub fn add_target(
        &mut self,
        raw: &str,
        resolver: &TargetResolver<'r>,
    ) -> Result<(), TargetError> {
        let resolved = resolver.resolve(raw, self.compiler)?;

        if self.compiler.is_none() {
            self.bind(resolved.compiler);
        }
        if self.targets.is_empty() {
            self.project = project_name(&resolved.path);
        }
        self.targets.push(resolved.path);
        Ok(())
    }

    pub fn add_option(&mut self, option: String) {
        self.options.push(option);
    }

    fn bind(&mut self, compiler: &'r CompilerEntry) {
        assert!(
            self.compiler.is_none(),
            "session compiler is bound exactly once"
        );
        tracing::debug!(
            extension = %compiler.extension,
            program = %compiler.program,
            "Bound session compiler"
        );
        self.compiler = Some(compiler);
    }

    pub fn project_name(&self) -> &str {
        &self.project
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn compiler(&self) -> Option<&'r CompilerEntry> {
        self.compiler
    }
}

/// File name of `path` up to its first `.`.
///
/// `src/main.c` → `main`, `app.test.c` → `app`.
pub fn project_name(path: &str) -> String {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.to_string(),
    }
}
