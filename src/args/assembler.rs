//! Argument assembler: the compiler command line in one place.

use crate::args::session::Session;
use crate::target::TargetError;

/// Name of the only recognized `$token`.
const PROJECT_TOKEN: &str = "project";

/// Expand `$tokens` in an option or redirect template.
///
/// `$` starts a token made of ASCII letters and digits, matched
/// case-insensitively. The token itself never reaches the output: `$project`
/// becomes the project name, anything else becomes nothing and a warning.
pub fn expand_template(template: &str, project: &str, warnings: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(template.len() + project.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let len = after
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(after.len());
        let name = after[..len].to_ascii_lowercase();

        if name == PROJECT_TOKEN {
            out.push_str(project);
        } else {
            let warning = format!("the special option '{}' is not recognized", name);
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }
        rest = &after[len..];
    }
    out.push_str(rest);
    out
}

/// Final command line plus where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCommand {
    /// `argv[0]` is the compiler program.
    pub argv: Vec<String>,
    /// File receiving the compiler's stdout and stderr.
    pub redirect: Option<String>,
    /// Unrecognized-token warnings.
    pub warnings: Vec<String>,
}

impl AssembledCommand {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

/// Builder for the compiler's argument vector.
#[derive(Debug, Clone)]
pub struct ArgAssembler<'s> {
    project: &'s str,
    args: Vec<String>,
    redirect: Option<String>,
    warnings: Vec<String>,
}

impl<'s> ArgAssembler<'s> {
    /// Start with `[program]`.
    pub fn new(program: &str, project: &'s str) -> Self {
        Self {
            project,
            args: vec![program.to_string()],
            redirect: None,
            warnings: Vec::new(),
        }
    }

    /// Append target paths verbatim.
    pub fn with_targets(mut self, targets: &[String]) -> Self {
        self.args.extend(targets.iter().cloned());
        self
    }

    /// Append options, expanding tokens in each.
    pub fn with_options(mut self, options: &[String]) -> Self {
        for option in options {
            let expanded = expand_template(option, self.project, &mut self.warnings);
            self.args.push(expanded);
        }
        self
    }

    /// Set the output redirect from a template.
    pub fn with_redirect(mut self, template: Option<&str>) -> Self {
        self.redirect =
            template.map(|t| expand_template(t, self.project, &mut self.warnings));
        self
    }

    pub fn build(self) -> AssembledCommand {
        AssembledCommand {
            argv: self.args,
            redirect: self.redirect,
            warnings: self.warnings,
        }
    }
}

/// `[program, targets..., template options..., user options...]`.
///
/// User options come last so that compilers with last-wins flags let them
/// override the template.
pub fn assemble(session: &Session<'_>) -> Result<AssembledCommand, TargetError> {
    let compiler = session.compiler().ok_or(TargetError::NoTargets)?;

    Ok(ArgAssembler::new(&compiler.program, session.project_name())
        .with_targets(session.targets())
        .with_options(&compiler.options)
        .with_options(session.options())
        .with_redirect(compiler.redirect.as_deref())
        .build())
}
