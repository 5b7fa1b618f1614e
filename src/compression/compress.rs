use log::{info, warn};
use rayon::prelude::*;

use super::block::{write_bwt, Block, BLOCK_HEADER_BYTES};
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::Result;
use crate::tools::cli::{BwtOpts, Transform};
use crate::tools::data_io::{read_input, write_output};
use crate::tools::mtf::mtf_encode;

/// Run the forward transform chosen in opts over the whole input.
pub fn compress(opts: &BwtOpts) -> Result<()> {
    let data = read_input(opts)?;
    let out = compress_data(&data, opts.transform, opts.block_bytes())?;
    info!(
        "{} transform: {} bytes in, {} bytes out",
        opts.transform,
        data.len(),
        out.len()
    );
    write_output(opts, &out)?;
    Ok(())
}

/// Forward transform of an in-memory buffer. Empty input gives empty output.
pub fn compress_data(data: &[u8], transform: Transform, block_bytes: usize) -> Result<Vec<u8>> {
    if data.is_empty() {
        warn!("No input data; nothing to transform");
        return Ok(vec![]);
    }
    match transform {
        Transform::Bwt => {
            let (key, bwt) = bwt_encode(data)?;
            Ok(write_bwt(key, &bwt))
        }
        Transform::Mtf => Ok(mtf_encode(data)),
        Transform::Pipeline => compress_blocks(data, block_bytes),
    }
}

/// Split the data into blocks, BWT+MTF each block in parallel, and frame them in input order.
pub fn compress_blocks(data: &[u8], block_bytes: usize) -> Result<Vec<u8>> {
    let block_bytes = block_bytes.max(1);
    info!(
        "Splitting {} bytes into {} blocks",
        data.len(),
        (data.len() + block_bytes - 1) / block_bytes
    );

    let blocks = data
        .par_chunks(block_bytes)
        .enumerate()
        .map(|(i, chunk)| Block::encode(i + 1, chunk))
        .collect::<Result<Vec<Block>>>()?;

    let mut out = Vec::with_capacity(data.len() + blocks.len() * BLOCK_HEADER_BYTES);
    for block in &blocks {
        block.write_to(&mut out);
    }
    Ok(out)
}
