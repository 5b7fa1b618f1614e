use log::trace;

use crate::ALPHABET_SIZE;

/// Move-To-Front recency list. Starts in identity order; every encode or decode moves the
/// symbol it touched to the front.
#[derive(Debug, Clone)]
pub struct MoveToFront {
    symbols: [u8; ALPHABET_SIZE],
}

impl MoveToFront {
    pub fn new() -> Self {
        let mut symbols = [0_u8; ALPHABET_SIZE];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            *symbol = i as u8;
        }
        Self { symbols }
    }

    /// Current recency order, most recent first.
    pub fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.symbols
    }

    /// Replace `symbol` by its position in the list, then move it to the front.
    pub fn encode(&mut self, symbol: u8) -> u8 {
        // Shift each entry back one slot while looking for the symbol. The list is a
        // permutation of the alphabet, so the symbol is always found.
        let mut carried = symbol;
        let mut rank = 0;
        loop {
            std::mem::swap(&mut self.symbols[rank], &mut carried);
            if carried == symbol {
                break;
            }
            rank += 1;
        }
        rank as u8
    }

    /// Return the symbol at position `rank`, then move it to the front.
    pub fn decode(&mut self, rank: u8) -> u8 {
        let idx = usize::from(rank);
        let symbol = self.symbols[idx];
        self.symbols.copy_within(..idx, 1);
        self.symbols[0] = symbol;
        symbol
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using Move To Front transform, starting from a fresh list.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut mtf = MoveToFront::new();
    let out = data.iter().map(|&b| mtf.encode(b)).collect::<Vec<u8>>();
    trace!(
        "MTF encoded {} bytes, {} zero ranks",
        out.len(),
        out.iter().filter(|&&r| r == 0).count()
    );
    out
}

/// Decode Move To Front ranks back to symbols, starting from a fresh list.
pub fn mtf_decode(ranks: &[u8]) -> Vec<u8> {
    let mut mtf = MoveToFront::new();
    ranks.iter().map(|&r| mtf.decode(r)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn move_stuff() {
        let mut mtf = MoveToFront::new();

        for i in 0..=255 {
            assert_eq!(i, usize::from(mtf.symbols()[i]));
        }

        assert_eq!(mtf.decode(0), 0);
        for i in 0..=255 {
            assert_eq!(i, usize::from(mtf.symbols()[i]));
        }

        assert_eq!(mtf.decode(5), 5);
        assert_eq!(mtf.symbols()[..6], [5, 0, 1, 2, 3, 4]);
        for i in 6..=255 {
            assert_eq!(i, usize::from(mtf.symbols()[i]));
        }

        assert_eq!(mtf.encode(4), 5);
        assert_eq!(mtf.symbols()[..6], [4, 5, 0, 1, 2, 3]);
    }

    #[test]
    fn repeated_runs() {
        let ranks = mtf_encode(b"AAABBBCCC");
        assert_eq!(ranks, vec![65, 0, 0, 66, 0, 0, 67, 0, 0]);
        assert_eq!(mtf_decode(&ranks), b"AAABBBCCC".to_vec());
    }

    #[test]
    fn abracadabra() {
        let ranks = mtf_encode(b"ABRACADABRA!");
        assert_eq!(
            ranks,
            vec![0x41, 0x42, 0x52, 0x02, 0x44, 0x01, 0x45, 0x01, 0x04, 0x04, 0x02, 0x26]
        );
        assert_eq!(mtf_decode(&ranks), b"ABRACADABRA!".to_vec());
    }

    #[test]
    fn extreme_symbols() {
        let data = [255, 255, 0, 255, 128, 0];
        let ranks = mtf_encode(&data);
        assert_eq!(ranks, vec![255, 0, 1, 1, 129, 2]);
        assert_eq!(mtf_decode(&ranks), data.to_vec());
    }

    #[test]
    fn duality_on_every_symbol() {
        let data = (0..=255_u8).rev().chain(0..=255).chain([7, 7, 7, 200]).collect::<Vec<u8>>();
        assert_eq!(mtf_decode(&mtf_encode(&data)), data);

        let mut enc = MoveToFront::new();
        let mut dec = MoveToFront::new();
        for &b in &data {
            assert_eq!(dec.decode(enc.encode(b)), b);
            assert_eq!(enc.symbols(), dec.symbols());
        }
    }
}
