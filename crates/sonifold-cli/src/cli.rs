use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Worldbuilding Media Lab",
    version,
    about = "Sonifold CLI - Turns protein crystal-structure files into per-residue sonification events, streamed over OSC or exported as JSON.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream the event sequence of a structure file over OSC/UDP for live playback.
    Play(PlayArgs),
    /// Export the per-residue entries of a structure file as JSON.
    Export(ExportArgs),
}

/// Arguments for the `play` subcommand.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the input structure file (plain-text .cif or .pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Host the OSC messages are sent to.
    #[arg(long, default_value = "127.0.0.1", value_name = "HOST")]
    pub host: String,

    /// UDP port of the receiving audio engine.
    #[arg(short, long, default_value_t = 5005, value_name = "PORT")]
    pub port: u16,

    /// Delay between consecutive events, in milliseconds.
    #[arg(long, default_value_t = 400, value_name = "MS")]
    pub interval_ms: u64,

    /// Stop after this many events instead of playing the whole sequence.
    #[arg(long, value_name = "NUM")]
    pub limit: Option<usize>,

    /// Restart playback from the first residue after the sequence ends.
    #[arg(long)]
    pub repeat: bool,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the input structure file (plain-text .cif or .pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output JSON file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
