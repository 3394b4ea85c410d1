use std::fmt::{Display, Formatter};

use clap::Args;
use serde::Serialize;
use tracing::debug;
use versioning::{Semver, VersioningError};

use crate::commands::{Command, CommandOutput};
use crate::output::{render_output, Output};

#[derive(Args, Debug)]
#[command(about = "Break versions down into major, minor, patch, pre-release and build metadata")]
pub struct ParseCommand {
    #[arg(required = true, help = "Versions to parse")]
    pub versions: Vec<String>,
}

impl Command for ParseCommand {
    fn execute(&self, output: Output) -> anyhow::Result<CommandOutput> {
        let reports = Reports(self.versions.iter().map(|v| Report::new(v)).collect());
        let success = reports.0.iter().all(|r| matches!(r, Report::Parsed(_)));

        Ok(CommandOutput {
            body: render_output(output, &reports)?,
            success,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Decomposition {
    pub input: String,
    pub version: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: Vec<String>,
    pub build: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub input: String,
    pub kind: String,
    pub description: String,
}

impl Failure {
    pub fn new(input: &str, error: &VersioningError) -> Self {
        Self {
            input: input.to_string(),
            kind: error.kind().to_string(),
            description: error.to_string(),
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Parsed(Decomposition),
    Failed(Failure),
}

impl Report {
    pub fn new(input: &str) -> Self {
        match Semver::parse(input) {
            Ok(version) => {
                debug!(input, version = %version, "parsed version");
                Report::Parsed(Decomposition {
                    input: input.to_string(),
                    version: version.to_string(),
                    major: version.major().to_string(),
                    minor: version.minor().to_string(),
                    patch: version.patch().to_string(),
                    prerelease: version.prerelease().to_vec(),
                    build: version.build().to_vec(),
                })
            }
            Err(e) => {
                debug!(input, kind = %e.kind(), "rejected version");
                Report::Failed(Failure::new(input, &e))
            }
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Parsed(d) => write!(f, "{}", d.version),
            Report::Failed(failure) => write!(f, "{failure}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Reports(pub Vec<Report>);

impl Display for Reports {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::parse::ParseCommand;
    use crate::commands::Command;
    use crate::output::Output;

    fn parse(versions: &[&str], output: Output) -> (String, bool) {
        let cmd = ParseCommand {
            versions: versions.iter().map(ToString::to_string).collect(),
        };
        let result = cmd.execute(output).unwrap();
        (result.body, result.success)
    }

    #[test]
    fn should_render_text() {
        let (body, success) = parse(&["v1-rc.a", "1.452.368+sha.5114f85"], Output::Text);

        assert!(success);
        insta::assert_snapshot!(body, @r"
        1.0.0-rc.a
        1.452.368+sha.5114f85
        ");
    }

    #[test]
    fn should_report_failures() {
        let (body, success) = parse(&["1.2.3", "0.0.0-+meta"], Output::Text);

        assert!(!success);
        insta::assert_snapshot!(body, @r#"
        1.2.3
        InvalidPrereleaseIdentifier: Invalid pre-release identifier ""
        "#);
    }

    #[test]
    fn should_render_json() {
        let (body, success) = parse(&["v1.2-rc.1+build", "0.a.0"], Output::Json);

        assert!(!success);
        insta::assert_snapshot!(body, @r#"
        [
          {
            "input": "v1.2-rc.1+build",
            "version": "1.2.0-rc.1+build",
            "major": "1",
            "minor": "2",
            "patch": "0",
            "prerelease": [
              "rc",
              "1"
            ],
            "build": [
              "build"
            ]
          },
          {
            "input": "0.a.0",
            "kind": "InvalidNumericIdentifier",
            "description": "Invalid numeric identifier \"a\""
          }
        ]
        "#);
    }
}
