use log::{debug, trace};

use super::suffix_sort::CircularSuffixArray;
use crate::error::{BwtError, Result};
use crate::tools::freq_count::{freqs, symbol_range};
use crate::ALPHABET_SIZE;

/// Burrows-Wheeler-Transform of a non-empty block.
/// This returns a u32 Key (the row holding the unrotated data) and a u8 vec of the BWT data.
pub fn bwt_encode(data: &[u8]) -> Result<(u32, Vec<u8>)> {
    let csa = CircularSuffixArray::new(data)?;
    let end = data.len();

    let mut key = 0_u32;
    let mut bwt = vec![0; end];
    for (i, &idx) in csa.as_slice().iter().enumerate() {
        if idx == 0 {
            key = i as u32;
            bwt[i] = data[end - 1];
        } else {
            bwt[i] = data[idx as usize - 1];
        }
    }
    debug!("BWT key is {} for {} bytes", key, end);

    Ok((key, bwt))
}

/// Decode a Burrows-Wheeler-Transform.
///
/// The key must be inside the block. A key/data pair that did not come from `bwt_encode`
/// decodes to unspecified bytes rather than an error.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> Result<Vec<u8>> {
    // Calculate end once.
    let end = bwt_in.len();
    if end == 0 {
        return Err(BwtError::InvalidArgument(
            "cannot decode an empty BWT block".to_string(),
        ));
    }
    if key as usize >= end {
        return Err(BwtError::InvalidArgument(format!(
            "key {} is outside a block of {} bytes",
            key, end
        )));
    }

    // Convert frequency count to the first output slot of each symbol, only over the symbols seen
    let freq = freqs(bwt_in);
    let (min, max) = symbol_range(&freq).ok_or_else(|| {
        BwtError::InvalidArgument("cannot decode an empty BWT block".to_string())
    })?;
    trace!("Symbol range is {}..={}", min, max);

    let mut slot = [0_u32; ALPHABET_SIZE];
    let mut sum = 0_u32;
    for sym in min..=max {
        slot[sym] = sum;
        sum += freq[sym];
    }

    // Build the transformation vector to find the next character in the original data
    let mut t_vec = vec![0_u32; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        t_vec[slot[s as usize] as usize] = i as u32;
        slot[s as usize] += 1;
    }

    // Walk the successor chain starting from the key
    let mut data = Vec::with_capacity(end);
    let mut pos = t_vec[key as usize] as usize;
    for _ in 0..end {
        data.push(bwt_in[pos]);
        pos = t_vec[pos] as usize;
    }

    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn basic_encoding_test() {
        let transformed = b"fsrrdkkeaddrrffs,esd?????     eeiiiieeeehrppkllkppttpphppPPIootwppppPPcccccckk      iipp    eeeeeeeeer'ree  ".to_vec();
        let orig_ptr = 24;
        let original = b"If Peter Piper picked a peck of pickled peppers, where's the peck of pickled peppers Peter Piper picked?????".to_vec();
        let res = bwt_encode(&original).unwrap();
        assert_eq!(res, (orig_ptr, transformed.clone()));
        assert_eq!(bwt_decode(orig_ptr, &transformed).unwrap(), original);
    }

    #[test]
    pub fn abracadabra() {
        let (key, bwt) = bwt_encode(b"ABRACADABRA!").unwrap();
        assert_eq!(key, 3);
        assert_eq!(bwt, b"ARD!RCAAAABB".to_vec());
        assert_eq!(bwt_decode(3, b"ARD!RCAAAABB").unwrap(), b"ABRACADABRA!".to_vec());
    }

    #[test]
    pub fn single_byte() {
        assert_eq!(bwt_encode(b"x").unwrap(), (0, b"x".to_vec()));
        assert_eq!(bwt_decode(0, b"x").unwrap(), b"x".to_vec());
    }

    #[test]
    pub fn periodic_round_trip() {
        for text in [&b"ABAB"[..], b"aaaaaaa", b"abcabcabc", b"zz"] {
            let (key, bwt) = bwt_encode(text).unwrap();
            assert_eq!(bwt_decode(key, &bwt).unwrap(), text.to_vec());
        }
        assert_eq!(bwt_encode(b"ABAB").unwrap(), (0, b"BBAA".to_vec()));
    }

    #[test]
    pub fn round_trip_all_byte_values() {
        let mut seed = 0x2545_f491_u32;
        let data = (0..5_000)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                seed as u8
            })
            .chain(0..=255_u8)
            .collect::<Vec<u8>>();
        let (key, bwt) = bwt_encode(&data).unwrap();
        assert_eq!(bwt.len(), data.len());
        assert_eq!(bwt_decode(key, &bwt).unwrap(), data);
    }

    #[test]
    pub fn invalid_arguments() {
        assert!(matches!(bwt_encode(b""), Err(BwtError::InvalidArgument(_))));
        assert!(matches!(bwt_decode(0, b""), Err(BwtError::InvalidArgument(_))));
        assert!(matches!(bwt_decode(4, b"abcd"), Err(BwtError::InvalidArgument(_))));
    }

    #[test]
    pub fn mismatched_input_does_not_panic() {
        // Not a valid transform of anything, but decoding still yields the right length.
        let out = bwt_decode(1, b"zzzyyyaaa").unwrap();
        assert_eq!(out.len(), 9);
    }
}
