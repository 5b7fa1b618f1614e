//! The compression module drives the transforms over whole inputs.
//!
//! Forward processing happens in the following steps:
//! - Burrows Wheeler Transform: Sort the rotations of the data to increase the probability of runs of identical bytes.
//! - Move To Front transform: Increase the frequency of lower byte values, and thereby decrease the frequency of other byte values.
//!
//! Each stage can be run on its own (`bwt`, `mtf`), or both together on fixed size blocks (`pipeline`). Pipeline blocks
//! are independent of each other, so they are transformed in parallel.
//!
//! The inverse follows the reverse order.
//! - MTF transform: Convert from the Move-To-Front indecies to the symbols represented by the indecies.
//! - BWT reversal: Restore the original data from the BWT transform.
//!
//! Entropy coding of the result is left to a later stage.
//!

pub mod block;
pub mod compress;
pub mod decompress;
