use rayon::prelude::*;

use crate::ALPHABET_SIZE;

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u32; ALPHABET_SIZE],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u32; ALPHABET_SIZE],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u32>>(),
            )
    } else {
        let mut freqs = vec![0_u32; ALPHABET_SIZE];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Smallest and largest symbol present in a frequency count, or None if the count is empty.
pub fn symbol_range(freqs: &[u32]) -> Option<(usize, usize)> {
    let min = freqs.iter().position(|&f| f > 0)?;
    let max = freqs.iter().rposition(|&f| f > 0)?;
    Some((min, max))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_counts() {
        let f = freqs(b"ABRACADABRA!");
        assert_eq!(f[b'A' as usize], 5);
        assert_eq!(f[b'B' as usize], 2);
        assert_eq!(f[b'!' as usize], 1);
        assert_eq!(f.iter().sum::<u32>(), 12);
    }

    #[test]
    fn parallel_counts_match_sequential() {
        let data = (0..200_000_u32).map(|i| (i * 7 % 251) as u8).collect::<Vec<u8>>();
        let mut expected = vec![0_u32; ALPHABET_SIZE];
        data.iter().for_each(|&b| expected[b as usize] += 1);
        assert_eq!(freqs(&data), expected);
    }

    #[test]
    fn range_of_symbols() {
        assert_eq!(symbol_range(&freqs(b"mississippi")), Some((b'i' as usize, b's' as usize)));
        assert_eq!(symbol_range(&freqs(b"")), None);
    }
}
