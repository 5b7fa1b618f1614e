//! The bwt_algorithms module forms the critical sorting subsystem of the front end.
//!
//! The Burrows-Wheeler Transform (BWT) sorts every rotation of a block and keeps the last column of the
//! sorted rotation matrix. Runs of similar bytes become far more likely in that column, which makes the
//! later stages more effective.
//!
//! - suffix_sort: three-way radix quicksort of the circular suffixes, with an insertion sort cutoff.
//! - bwt_sort: the forward transform built on the sorted suffixes, and the inverse transform built on
//!   key-indexed counting (it never sorts).
//!
pub mod bwt_sort;
pub mod suffix_sort;
