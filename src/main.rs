//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use burrows::compression::compress::compress;
use burrows::compression::decompress::decompress;
use burrows::tools::cli::{bwtopts_init, Mode};
use burrows::BwtError;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), BwtError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    // Stdout carries the transformed data, so log to stderr.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = bwtopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Forward => compress(&options),
        Mode::Inverse => decompress(&options),
    };

    match &result {
        Ok(()) => info!("Done.\n"),
        Err(e) => error!("{}", e),
    }
    result
}
