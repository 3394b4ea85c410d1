use std::fmt::{Display, Formatter};

use clap::Args;
use serde::Serialize;
use tracing::debug;
use versioning::Semver;

use crate::commands::parse::Failure;
use crate::commands::{Command, CommandOutput};
use crate::output::{render_output, Output};

#[derive(Args, Debug)]
#[command(about = "Check whether versions are valid")]
pub struct ValidateCommand {
    #[arg(required = true, help = "Versions to validate")]
    pub versions: Vec<String>,
}

impl Command for ValidateCommand {
    fn execute(&self, output: Output) -> anyhow::Result<CommandOutput> {
        let validations = Validations(
            self.versions
                .iter()
                .map(|v| Validation::new(v))
                .collect(),
        );
        let success = validations.0.iter().all(|v| v.valid);

        Ok(CommandOutput {
            body: render_output(output, &validations)?,
            success,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Validation {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Validation {
    fn new(input: &str) -> Self {
        let reason = Semver::parse(input)
            .err()
            .map(|e| Failure::new(input, &e).to_string());
        debug!(input, valid = reason.is_none(), "validated version");

        Self {
            input: input.to_string(),
            valid: reason.is_none(),
            reason,
        }
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "invalid: {reason}"),
            None => write!(f, "valid"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Validations(pub Vec<Validation>);

impl Display for Validations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
