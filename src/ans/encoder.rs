use crate::ans::model::BitModel;
use crate::ans::{Prelude, B, INTERVAL_LOWER_BOUND, LOG2_FRAME_SIZE, NORMALIZATION_MASK};
use crate::{Bit, Error, RawSymbol, Result, State};

/// Streaming rANS encoder over bits.
#[derive(Clone, Debug)]
pub struct BitEncoder {
    model: BitModel,

    /// The normalized bits during the encoding process.
    stream: Vec<u8>,

    state: State,
}

impl BitEncoder {
    /// Creates an encoder whose model is built from the frequencies of the 0 and 1 symbols.
    pub fn new(freqs: &[f64]) -> Result<Self> {
        Ok(Self::with_model(BitModel::new(freqs)?))
    }

    /// Creates an encoder with an already built model. The state starts at the bottom of the
    /// interval.
    pub fn with_model(model: BitModel) -> Self {
        Self {
            model,
            stream: Vec::new(),
            state: INTERVAL_LOWER_BOUND,
        }
    }

    /// Encodes a single bit.
    ///
    /// Note that the ANS decodes the sequence in reverse order.
    pub fn encode(&mut self, bit: Bit) -> Result<()> {
        let sym_data = *self
            .model
            .symbol(bit)
            .ok_or(Error::UnknownSymbol(bit as RawSymbol))?;

        if self.state >= sym_data.upperbound {
            self.state = Self::shrink_state(self.state, &mut self.stream);
        }

        let freq = sym_data.freq as State;
        self.state =
            ((self.state / freq) << LOG2_FRAME_SIZE) + (self.state % freq) + sym_data.cumul_freq;

        Ok(())
    }

    /// Encodes the given bits in order.
    pub fn encode_all(&mut self, bits: &[Bit]) -> Result<()> {
        for bit in bits {
            self.encode(*bit)?;
        }
        Ok(())
    }

    fn shrink_state(mut state: State, out: &mut Vec<u8>) -> State {
        let lsb = (state & NORMALIZATION_MASK) as u8;
        out.push(lsb);
        state >>= B;
        state
    }

    /// Returns the current state of the encoder.
    pub fn get_state(&self) -> State {
        self.state
    }

    /// Returns the bytes streamed out so far.
    pub fn stream(&self) -> &[u8] {
        &self.stream
    }

    pub fn model(&self) -> &BitModel {
        &self.model
    }

    pub fn into_prelude(self) -> Prelude {
        Prelude {
            state: self.state,
            stream: self.stream,
        }
    }
}
