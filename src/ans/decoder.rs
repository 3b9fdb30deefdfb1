use crate::ans::model::BitModel;
use crate::ans::{Prelude, B, FRAME_MASK, INTERVAL_LOWER_BOUND, LOG2_FRAME_SIZE};
use crate::{Bit, Result, State};

/// Streaming rANS decoder over bits.
///
/// Bits are decoded in the reverse order of encoding. Since the encoder starts from the bottom
/// of the interval, the decoder knows the sequence is over when its state falls below the
/// lower bound and no byte is left to refill it: from then on [`decode`](Self::decode) returns
/// `None`.
#[derive(Clone, Debug)]
pub struct BitDecoder {
    model: BitModel,

    /// The normalized bits during the encoding process.
    stream: Vec<u8>,

    /// The index right after the next byte of the stream to be read.
    stream_pointer: usize,

    /// Wider than [`State`], so that a corrupted initial state can't overflow.
    state: u32,
}

impl BitDecoder {
    /// Creates a decoder whose model is built from the same frequencies used by the encoder.
    pub fn new(freqs: &[f64], prelude: Prelude) -> Result<Self> {
        Ok(Self::with_model(BitModel::new(freqs)?, prelude))
    }

    pub fn with_model(model: BitModel, prelude: Prelude) -> Self {
        Self {
            model,
            stream_pointer: prelude.stream.len(),
            stream: prelude.stream,
            state: prelude.state as u32,
        }
    }

    /// Decodes a single bit, or returns `None` once every encoded bit has been decoded.
    pub fn decode(&mut self) -> Option<Bit> {
        let slot = (self.state & FRAME_MASK as u32) as State;
        let bit = self.model.bit_for_slot(slot);
        let sym_data = self.model.symbol(bit)?;

        self.state = (self.state >> LOG2_FRAME_SIZE) * sym_data.freq as u32 + slot as u32
            - sym_data.cumul_freq as u32;

        if self.state < INTERVAL_LOWER_BOUND as u32 {
            if self.stream_pointer == 0 {
                return None;
            }
            self.extend_state();
        }

        Some(bit)
    }

    fn extend_state(&mut self) {
        self.stream_pointer -= 1;
        let bits = self.stream[self.stream_pointer];
        self.state = (self.state << B) | bits as u32;
    }

    /// Returns the number of streamed bytes not read yet.
    pub fn remaining(&self) -> usize {
        self.stream_pointer
    }
}

impl Iterator for BitDecoder {
    type Item = Bit;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_stream_is_decoded_in_reverse() {
        let prelude = Prelude::new(339, vec![48, 248]);
        let decoder = BitDecoder::new(&[0.75, 0.25], prelude).unwrap();
        let mut decoded = decoder.collect::<Vec<_>>();
        decoded.reverse();

        assert_eq!(
            decoded,
            vec![0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn empty_sequence_decodes_to_nothing() {
        let prelude = Prelude::new(INTERVAL_LOWER_BOUND, Vec::new());
        let mut decoder = BitDecoder::new(&[0.5, 0.5], prelude).unwrap();

        assert_eq!(decoder.decode(), None);
        assert_eq!(decoder.decode(), None);
    }
}
