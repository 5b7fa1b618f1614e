use log::{debug, info};

use crate::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
use crate::error::{BwtError, Result};
use crate::tools::mtf::{mtf_decode, mtf_encode};

/// Size of the big-endian key written ahead of the BWT data.
pub const KEY_BYTES: usize = 4;
/// Size of a pipeline block header: length then key.
pub const BLOCK_HEADER_BYTES: usize = 8;

/// One independently transformed chunk of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Row of the unrotated data in the sorted rotation matrix
    pub key: u32,
    /// MTF ranks of the BWT output
    pub data: Vec<u8>,
}

impl Block {
    /// BWT then MTF over one chunk of raw input.
    pub fn encode(seq: usize, raw: &[u8]) -> Result<Self> {
        let (key, bwt) = bwt_encode(raw)?;
        let data = mtf_encode(&bwt);
        debug!("Encoded block {}: {} bytes, key {}", seq, raw.len(), key);
        Ok(Self { key, data })
    }

    /// MTF then BWT reversal, returning the original chunk.
    pub fn decode(&self, seq: usize) -> Result<Vec<u8>> {
        let bwt = mtf_decode(&self.data);
        let out = bwt_decode(self.key, &bwt)?;
        debug!("Decoded block {}: {} bytes, key {}", seq, out.len(), self.key);
        Ok(out)
    }

    /// Append `len`, `key` (both big-endian u32) and the block data to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.key.to_be_bytes());
        out.extend_from_slice(&self.data);
    }
}

/// Serialize a forward transform: big-endian key followed by the BWT bytes.
pub fn write_bwt(key: u32, bwt: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(KEY_BYTES + bwt.len());
    out.extend_from_slice(&key.to_be_bytes());
    out.extend_from_slice(bwt);
    out
}

/// Split a serialized forward transform into its key and BWT bytes.
/// The BWT length is whatever follows the key.
pub fn read_bwt(input: &[u8]) -> Result<(u32, &[u8])> {
    let key = read_u32(input, 0).ok_or(BwtError::Truncated("BWT key"))?;
    Ok((key, &input[KEY_BYTES..]))
}

/// Parse a sequence of pipeline blocks.
pub fn read_blocks(input: &[u8]) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        let len = read_u32(input, pos).ok_or(BwtError::Truncated("block length"))? as usize;
        let key = read_u32(input, pos + KEY_BYTES).ok_or(BwtError::Truncated("block key"))?;
        pos += BLOCK_HEADER_BYTES;

        if len == 0 {
            return Err(BwtError::InvalidArgument(format!(
                "block {} has zero length",
                blocks.len() + 1
            )));
        }
        let data = input
            .get(pos..pos + len)
            .ok_or(BwtError::Truncated("block data"))?;
        pos += len;

        blocks.push(Block {
            key,
            data: data.to_vec(),
        });
    }
    info!("Found {} blocks in {} bytes", blocks.len(), input.len());
    Ok(blocks)
}

fn read_u32(input: &[u8], pos: usize) -> Option<u32> {
    let bytes = input.get(pos..pos + 4)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bwt_layout() {
        let out = write_bwt(3, b"ARD!RCAAAABB");
        assert_eq!(&out[..4], &[0, 0, 0, 3]);
        assert_eq!(&out[4..], b"ARD!RCAAAABB");

        let (key, bwt) = read_bwt(&out).unwrap();
        assert_eq!(key, 3);
        assert_eq!(bwt, b"ARD!RCAAAABB");
    }

    #[test]
    fn short_key() {
        assert!(matches!(read_bwt(&[0, 0, 1]), Err(BwtError::Truncated(_))));
    }

    #[test]
    fn block_layout() {
        let block = Block::encode(1, b"banana").unwrap();
        let mut out = vec![];
        block.write_to(&mut out);
        assert_eq!(&out[..4], &[0, 0, 0, 6]);
        assert_eq!(&out[4..8], &block.key.to_be_bytes());
        assert_eq!(out.len(), BLOCK_HEADER_BYTES + 6);

        let blocks = read_blocks(&out).unwrap();
        assert_eq!(blocks, vec![block]);
        assert_eq!(blocks[0].decode(1).unwrap(), b"banana".to_vec());
    }

    #[test]
    fn truncated_blocks() {
        let block = Block::encode(1, b"mississippi").unwrap();
        let mut out = vec![];
        block.write_to(&mut out);

        assert!(matches!(read_blocks(&out[..6]), Err(BwtError::Truncated(_))));
        assert!(matches!(
            read_blocks(&out[..out.len() - 1]),
            Err(BwtError::Truncated(_))
        ));
        assert!(matches!(
            read_blocks(&[0, 0, 0, 0, 0, 0, 0, 0]),
            Err(BwtError::InvalidArgument(_))
        ));
    }
}
