use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Forward (`-`) or inverse (`+`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Forward,
    Inverse,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Which transform to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Burrows-Wheeler transform: 4-byte big-endian key followed by the transformed bytes
    Bwt,
    /// Move-To-Front transform: one rank byte per input byte
    Mtf,
    /// Block-parallel BWT followed by MTF, one framed block per chunk of input
    Pipeline,
}
impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct BwtOpts {
    /// Transform to apply
    pub transform: Transform,
    /// Forward or inverse
    pub op_mode: Mode,
    /// Pipeline block size, in units of 100k
    pub block_size: usize,
    /// File to read, stdin when None
    pub input: Option<PathBuf>,
    /// File to write, stdout when None
    pub output: Option<PathBuf>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl BwtOpts {
    pub fn new() -> Self {
        Self {
            transform: Transform::Bwt,
            op_mode: Mode::Forward,
            block_size: 9,
            input: None,
            output: None,
            verbose: Verbosity::Warnings,
        }
    }

    /// Pipeline block size in bytes.
    pub fn block_bytes(&self) -> usize {
        self.block_size * 100_000
    }
}

impl Default for BwtOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for BwtOpts {
    fn from(args: Args) -> Self {
        Self {
            transform: args.transform,
            op_mode: args.mode,
            block_size: usize::from(args.block_size),
            input: args.input,
            output: args.output,
            verbose: Verbosity::from(args.v),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Burrows-Wheeler and Move-To-Front transforms",
    long_about = "
    Reversible preprocessing stages for block-sorting compression. The forward
    mode ('-') transforms the input; the inverse mode ('+') restores it.

    The pipeline transform splits the input into blocks and runs the
    Burrows-Wheeler transform followed by Move-To-Front on each block in parallel."
)]
pub struct Args {
    /// Transform to run
    #[clap(value_enum)]
    transform: Transform,

    /// '-' for the forward transform, '+' for the inverse
    #[clap(value_parser = parse_mode)]
    mode: Mode,

    /// Read from this file instead of stdin
    #[clap(short = 'i', long = "input", value_parser)]
    input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[clap(short = 'o', long = "output", value_parser)]
    output: Option<PathBuf>,

    /// 1..9 - Set the pipeline block size from 100-900k
    #[clap(short = 'b', long = "block-size", default_value_t = 9, value_parser = clap::value_parser!(u8).range(1..=9))]
    block_size: u8,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2, value_parser)]
    v: u8,
}

/// Mode flag: only `-` and `+` are accepted.
fn parse_mode(s: &str) -> Result<Mode, String> {
    match s {
        "-" => Ok(Mode::Forward),
        "+" => Ok(Mode::Inverse),
        other => Err(format!(
            "illegal mode '{}': use '-' to transform or '+' to invert",
            other
        )),
    }
}

/// Parse the process arguments, set the log level and report the settings.
/// A bad argument prints usage and exits with a non-zero status.
pub fn bwtopts_init() -> BwtOpts {
    let opts = BwtOpts::from(Args::parse());
    set_log_level(opts.verbose);

    // Below we report initialization status to the user
    info!("---- Burrows Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Transform set to {}", opts.transform);
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.input {
        Some(p) => info!("Getting input from the file {}", p.display()),
        None => info!("Getting input from stdin"),
    }
    match &opts.output {
        Some(p) => info!("Sending output to the file {}", p.display()),
        None => info!("Sending output to stdout"),
    }
    if opts.transform == Transform::Pipeline {
        info!("Block size set to {}", opts.block_bytes());
    } else if opts.block_size != 9 {
        warn!("Block size only applies to the pipeline transform; ignoring it");
    }
    info!("---- Burrows Initialization End ----\n");
    opts
}

/// Set the log level
pub fn set_log_level(verbose: Verbosity) {
    match verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };
}
