//! CLI argument definitions using clap.
//!
//! Without a subcommand gopot generates a catalog:
//!
//! ```text
//! gopot -i <project> -o <messages.pot> [-t <ext>]... [-f <field>]... [-v]
//! ```
//!
//! `gopot init [DIR]` writes a default `.gopotrc.json` instead.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        self.command.is_none() && self.generate.verbose
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the Godot project directory (must contain project.godot)
    #[arg(short, long, value_name = "DIR", required = true)]
    pub input: Option<PathBuf>,

    /// Path to the output .pot file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: Option<PathBuf>,

    /// File extension to scan (default: tscn, tres)
    /// Can be specified multiple times: -t tscn -t tres
    #[arg(short = 't', long = "type", value_name = "EXT")]
    pub types: Vec<String>,

    /// Field name to extract (default: text, tooltip, placeholder, label and their hint_ variants)
    /// Can be specified multiple times: -f text -f title
    #[arg(short = 'f', long = "field", value_name = "NAME")]
    pub fields: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            extensions: self.types.clone(),
            fields: self.fields.clone(),
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Project directory to write .gopotrc.json into
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a default .gopotrc.json into a Godot project
    Init(InitCommand),
}
