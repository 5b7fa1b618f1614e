use log::{info, warn};
use rayon::prelude::*;

use super::block::{read_blocks, read_bwt};
use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::error::Result;
use crate::tools::cli::{BwtOpts, Transform};
use crate::tools::data_io::{read_input, write_output};
use crate::tools::mtf::mtf_decode;

/// Run the inverse transform chosen in opts over the whole input.
pub fn decompress(opts: &BwtOpts) -> Result<()> {
    let data = read_input(opts)?;
    let out = decompress_data(&data, opts.transform)?;
    info!(
        "{} inverse: {} bytes in, {} bytes out",
        opts.transform,
        data.len(),
        out.len()
    );
    write_output(opts, &out)?;
    Ok(())
}

/// Inverse transform of an in-memory buffer. Empty input gives empty output.
pub fn decompress_data(data: &[u8], transform: Transform) -> Result<Vec<u8>> {
    if data.is_empty() {
        warn!("No input data; nothing to restore");
        return Ok(vec![]);
    }
    match transform {
        Transform::Bwt => {
            let (key, bwt) = read_bwt(data)?;
            info!("Key is {}.", key);
            bwt_decode(key, bwt)
        }
        Transform::Mtf => Ok(mtf_decode(data)),
        Transform::Pipeline => decompress_blocks(data),
    }
}

/// Parse the framed blocks, restore each in parallel, and join them in order.
pub fn decompress_blocks(data: &[u8]) -> Result<Vec<u8>> {
    let blocks = read_blocks(data)?;
    let restored = blocks
        .par_iter()
        .enumerate()
        .map(|(i, block)| block.decode(i + 1))
        .collect::<Result<Vec<Vec<u8>>>>()?;
    Ok(restored.concat())
}
