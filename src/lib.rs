//! Burrows-Wheeler compression front end.
//!
//! Provides the reversible preprocessing stages that sit in front of an entropy coder:
//! - Circular suffix sorting (three-way radix quicksort over cyclic rotations).
//! - The forward and inverse Burrows-Wheeler Transform (BWT).
//! - The Move-To-Front (MTF) recency transform.
//!
//! Larger inputs can be split into blocks which are transformed in parallel. Each block
//! carries its own key and recency list, so no state crosses block boundaries.
//!
//! Basic usage of the command line tool:
//!
//! `$> burrows bwt - < abra.txt > abra.bwt`
//!
//! `$> burrows bwt + < abra.bwt`
//!
//! Forward mode is `-`, inverse mode is `+`.
//!
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;

pub use error::{BwtError, Result};

/// Number of distinct symbols. Every byte value is a symbol.
pub const ALPHABET_SIZE: usize = 256;
