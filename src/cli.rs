// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `hotrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotrun",
    version,
    about = "Watch source files, rebuild on change, and restart the built binary.",
    long_about = None
)]
pub struct CliArgs {
    /// Name of the output binary to run after each build.
    ///
    /// Default: the base name of the current working directory, which is
    /// what `go build` names its output.
    #[arg(value_name = "APP")]
    pub app_name: Option<String>,

    /// Build command, run through the platform shell in the working directory.
    #[arg(long, value_name = "CMD", default_value = "go build")]
    pub build_cmd: String,

    /// Recognized source file extension. May be given more than once.
    #[arg(short = 'e', long = "ext", value_name = "EXT", default_value = "go")]
    pub extensions: Vec<String>,

    /// Minimum gap in milliseconds between processed changes to the same
    /// file before a fresh rebuild is triggered.
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    pub debounce_ms: u64,

    /// How long to wait for the old instance to exit during a restart
    /// before starting the replacement anyway.
    #[arg(long, value_name = "MS", default_value_t = 5000)]
    pub grace_ms: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HOTRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
