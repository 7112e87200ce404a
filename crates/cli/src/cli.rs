//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use typeproof_core::PageFormat;

use crate::{commands, parallel::configure_threads};

#[derive(Parser)]
#[command(name = "typeproof")]
#[command(about = "Assemble proof documents for static and variable fonts")]
pub struct Cli {
    /// Worker threads (defaults to one per core)
    #[arg(short, long, global = true)]
    pub jobs: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        configure_threads(self.jobs)?;
        self.command.run()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// Settings JSON; defaults apply when omitted
    #[arg(short, long)]
    pub settings: Option<PathBuf>,
    /// Extra font paths or glob patterns, appended to the settings' list
    #[arg(short, long = "font")]
    pub fonts: Vec<String>,
    /// Write the plan here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Override the page format, e.g. A4Landscape
    #[arg(long)]
    pub page_format: Option<PageFormat>,
    /// Enable a proof by label or id, e.g. "Spacing Proof" (repeatable)
    #[arg(short, long)]
    pub enable: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the proof plan and print it as JSON
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Show identity, axes and features of fonts
    Info {
        #[arg(required = true)]
        fonts: Vec<String>,
    },
    /// Show character categories and the ordered filtered character set
    Charset {
        #[arg(required = true)]
        fonts: Vec<String>,
    },
    /// List the available proofs with their defaults
    Proofs,
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Plan { args } => commands::plan(&args)?,
            Commands::Info { fonts } => commands::info(&fonts)?,
            Commands::Charset { fonts } => commands::charset(&fonts)?,
            Commands::Proofs => commands::proofs(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_flags_parse() {
        let cli = Cli::parse_from([
            "typeproof",
            "-j",
            "2",
            "plan",
            "--settings",
            "proof.json",
            "--font",
            "fonts/*.ttf",
            "--page-format",
            "a5landscape",
            "--enable",
            "Spacing Proof",
        ]);
        assert_eq!(cli.jobs, Some(2));
        let Commands::Plan { args } = cli.command else { panic!("expected plan") };
        assert_eq!(args.fonts, vec!["fonts/*.ttf"]);
        assert_eq!(args.page_format, Some(PageFormat::A5Landscape));
        assert_eq!(args.enable, vec!["Spacing Proof"]);
    }
}
