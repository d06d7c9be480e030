//! Compiler registry: extension → compiler entry, parsed from the targets file.

use crate::config::loader::ConfigError;

/// One line of the targets file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerEntry {
    /// File extension, always with a leading `.` (e.g. ".c").
    pub extension: String,
    /// Program to invoke (name looked up on PATH, or a path).
    pub program: String,
    /// Option templates, in invocation order. May contain `$tokens`.
    pub options: Vec<String>,
    /// Output redirect template; `None` leaves stdout/stderr inherited.
    pub redirect: Option<String>,
}

/// Read-only table of compiler entries, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRegistry {
    entries: Vec<CompilerEntry>,
}

/// Result of parsing a targets file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub registry: ConfigRegistry,
    /// Non-fatal problems (duplicate extensions, repeated redirects).
    pub warnings: Vec<String>,
}

/// Prefix `.` onto an extension that lacks one.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

impl ConfigRegistry {
    /// Parse the contents of a targets file.
    ///
    /// Each non-blank, non-comment line reads `ext program [option|>redirect]*`.
    /// Later lines repeating an extension are dropped with a warning.
    pub fn parse(source: &str) -> Result<ParseResult, ConfigError> {
        let mut entries: Vec<CompilerEntry> = Vec::new();
        let mut warnings = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let entry = parse_entry(trimmed, line_no, &mut warnings)?;

            if entries.iter().any(|e| e.extension == entry.extension) {
                let warning = format!(
                    "line {}: duplicate entry for extension '{}' ignored; the first entry is kept",
                    line_no, entry.extension
                );
                tracing::warn!("{}", warning);
                warnings.push(warning);
                continue;
            }

            tracing::debug!(
                extension = %entry.extension,
                program = %entry.program,
                options = entry.options.len(),
                "Loaded compiler entry"
            );
            entries.push(entry);
        }

        Ok(ParseResult {
            registry: ConfigRegistry { entries },
            warnings,
        })
    }

    /// Find the entry for an extension (`"c"` and `".c"` are equivalent).
    pub fn lookup(&self, ext: &str) -> Option<&CompilerEntry> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.entries
            .iter()
            .find(|e| e.extension.strip_prefix('.') == Some(ext))
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.lookup(ext).is_some()
    }

    pub fn entries(&self) -> &[CompilerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn parse_entry(
    line: &str,
    line_no: usize,
    warnings: &mut Vec<String>,
) -> Result<CompilerEntry, ConfigError> {
    let mut tokens = line.split_whitespace();

    // Caller skips blank lines, so there is always a first token.
    let extension = normalize_extension(tokens.next().unwrap_or_default());
    let program = tokens
        .next()
        .ok_or_else(|| ConfigError::MissingProgram {
            line: line_no,
            extension: extension.clone(),
        })?
        .to_string();

    let mut options = Vec::new();
    let mut redirect: Option<String> = None;

    while let Some(token) = tokens.next() {
        let Some(rest) = token.strip_prefix('>') else {
            options.push(token.to_string());
            continue;
        };

        let target = if rest.is_empty() {
            tokens.next().ok_or_else(|| ConfigError::MissingRedirect {
                line: line_no,
                extension: extension.clone(),
            })?
        } else {
            rest
        };

        if let Some(previous) = redirect.replace(target.to_string()) {
            let warning = format!(
                "line {}: redirect for '{}' given more than once; '{}' replaces '{}'",
                line_no, extension, target, previous
            );
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }
    }

    Ok(CompilerEntry {
        extension,
        program,
        options,
        redirect,
    })
}
