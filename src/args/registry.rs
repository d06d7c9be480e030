//! Flag registry: the options `compile` keeps for itself.
//!
//! Everything written with a single dash (or three or more) belongs to the
//! compiler; double-dash options are looked up here.

/// Whether an own option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., --help).
    NoValue,
    /// Requires exactly one value (e.g., --config <PATH>).
    RequiresValue,
}

/// A single own-option definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Long form (e.g., "--config").
    pub long: &'static str,
    /// Does it take a value?
    pub arity: FlagArity,
}

/// Build the own-option registry.
///
/// Must agree with [`crate::cli::Cli`], which does the actual parsing.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        FlagDef {
            long: "--help",
            arity: FlagArity::NoValue,
        },
        FlagDef {
            long: "--version",
            arity: FlagArity::NoValue,
        },
        FlagDef {
            long: "--config",
            arity: FlagArity::RequiresValue,
        },
        FlagDef {
            long: "--timeout",
            arity: FlagArity::RequiresValue,
        },
    ]
}

impl FlagDef {
    /// Check if this definition matches the given argument, either bare or
    /// in `--flag=value` form.
    pub fn matches(&self, arg: &str) -> bool {
        match arg.split_once('=') {
            Some((flag, _)) => flag == self.long,
            None => arg == self.long,
        }
    }

    /// The value is already attached (`--flag=value`).
    pub fn has_inline_value(arg: &str) -> bool {
        arg.contains('=')
    }
}
