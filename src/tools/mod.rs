//! The tools module provides several helper functions for the front end.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - data_io: Whole-buffer input and output on files or stdin/stdout.
//! - freq_count: Frequency count of the symbols in a block.
//! - mtf: Move-To-Front transform.
//!
pub mod cli;
pub mod data_io;
pub mod freq_count;
pub mod mtf;
