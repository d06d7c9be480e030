//! Argument classifier: raw args → targets, compiler options, own options.

use crate::args::registry::{FlagArity, FlagDef};

/// A classified argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// Own option (`--name`), with its value token when one was consumed.
    Own { flag: String, value: Option<String> },
    /// Option forwarded to the compiler (after `---x` → `--x` rewriting).
    CompilerOption(String),
    /// Source file to compile.
    Target(String),
}

/// Result of classifying raw arguments.
#[derive(Debug, Clone, Default)]
pub struct ClassifyResult {
    /// Classified arguments in order.
    pub args: Vec<ClassifiedArg>,
    /// Warnings produced during classification (e.g., missing values).
    pub warnings: Vec<String>,
}

impl ClassifyResult {
    pub fn targets(&self) -> Vec<String> {
        self.args
            .iter()
            .filter_map(|a| match a {
                ClassifiedArg::Target(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn compiler_options(&self) -> Vec<String> {
        self.args
            .iter()
            .filter_map(|a| match a {
                ClassifiedArg::CompilerOption(o) => Some(o.clone()),
                _ => None,
            })
            .collect()
    }

    /// Own options flattened back into tokens, for the option parser.
    pub fn own_tokens(&self) -> Vec<String> {
        self.args
            .iter()
            .filter_map(|a| match a {
                ClassifiedArg::Own { flag, value } => {
                    let mut v = vec![flag.clone()];
                    if let Some(val) = value {
                        v.push(val.clone());
                    }
                    Some(v)
                }
                _ => None,
            })
            .flatten()
            .collect()
    }
}

/// Classify raw args against the own-option registry.
pub fn classify(raw_args: &[String], registry: &[FlagDef]) -> ClassifyResult {
    let mut args = Vec::new();
    let mut warnings = Vec::new();
    let mut iter = raw_args.iter().peekable();

    while let Some(arg) = iter.next() {
        let dashes = arg.chars().take_while(|&c| c == '-').count();

        match dashes {
            0 => args.push(ClassifiedArg::Target(arg.clone())),
            1 => args.push(ClassifiedArg::CompilerOption(arg.clone())),
            2 => {
                let def = registry.iter().find(|d| d.matches(arg));

                let value = match def {
                    Some(def)
                        if def.arity == FlagArity::RequiresValue
                            && !FlagDef::has_inline_value(arg) =>
                    {
                        match iter.next_if(|next| !next.starts_with('-')) {
                            Some(next) => Some(next.clone()),
                            None => {
                                warnings.push(format!("{}: missing required value", def.long));
                                None
                            }
                        }
                    }
                    // Unknown own options are left for the option parser to reject.
                    _ => None,
                };

                args.push(ClassifiedArg::Own {
                    flag: arg.clone(),
                    value,
                });
            }
            // `---name` reaches the compiler as `--name`
            _ => args.push(ClassifiedArg::CompilerOption(arg[dashes - 2..].to_string())),
        }
    }

    ClassifyResult { args, warnings }
}
