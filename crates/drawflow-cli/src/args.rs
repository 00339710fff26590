//! Command-line argument definitions for the Drawflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the diagram kind, the input and output
//! paths, configuration file selection, and logging verbosity.

use clap::Parser;

use drawflow::DiagramKind;

/// Command-line arguments for the Drawflow diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the model output to convert
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output .drawio file; derived from the title when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Diagram kind (business, ui, prototype)
    #[arg(short, long, default_value = "business")]
    pub kind: DiagramKind,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Diagram title, written to the document and used for the default file name
    #[arg(short, long)]
    pub title: Option<String>,

    /// Treat the input as a TOML graph instead of model text
    #[arg(long)]
    pub graph: bool,
}
