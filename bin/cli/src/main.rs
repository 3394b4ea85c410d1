use clap::Parser;
use tracing::error;

use crate::commands::{Command, Opt};

mod commands;
mod output;

fn main() {
    let opt = Opt::parse();

    let tracing_level = if opt.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // diagnostics go to stderr so stdout only carries results
    tracing_subscriber::fmt::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();

    match opt.cmd.execute(opt.output) {
        Ok(output) => {
            if !output.body.is_empty() {
                println!("{}", output.body);
            }
            std::process::exit(if output.success { 0 } else { 1 });
        }
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };
}
