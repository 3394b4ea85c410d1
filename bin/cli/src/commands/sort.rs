use std::fmt::{Display, Formatter};

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::debug;
use versioning::Semver;

use crate::commands::{Command, CommandOutput};
use crate::output::{render_output, Output};

#[derive(Args, Debug)]
#[command(about = "Order versions by precedence, lowest first")]
pub struct SortCommand {
    #[arg(long, short, help = "Highest precedence first")]
    pub reverse: bool,

    #[arg(required = true, help = "Versions to sort")]
    pub versions: Vec<String>,
}

impl Command for SortCommand {
    fn execute(&self, output: Output) -> anyhow::Result<CommandOutput> {
        let mut versions = self
            .versions
            .iter()
            .map(|v| Semver::parse(v).with_context(|| format!("could not parse \"{v}\"")))
            .collect::<anyhow::Result<Vec<Semver>>>()?;

        // sort_by is stable so equal precedence keeps input order
        if self.reverse {
            versions.sort_by(|a, b| b.cmp_precedence(a));
        } else {
            versions.sort_by(Semver::cmp_precedence);
        }
        debug!(count = versions.len(), reverse = self.reverse, "sorted versions");

        Ok(CommandOutput {
            body: render_output(output, &Sorted(versions))?,
            success: true,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Sorted(pub Vec<Semver>);

impl Display for Sorted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
