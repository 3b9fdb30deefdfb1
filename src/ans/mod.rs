//! Streaming rANS over a two-symbol (bit) alphabet.
//!
//! The state is 16 bits wide and lives in the interval `[INTERVAL_LOWER_BOUND, 2^14)`. Before
//! encoding a symbol whose state would leave the interval, the [encoder](encoder::BitEncoder)
//! streams out the 8 least significant bits; the [decoder](decoder::BitDecoder) pulls them back
//! in reverse order whenever its state falls below the lower bound.

pub mod decoder;
pub mod encoder;
pub mod model;

pub use decoder::BitDecoder;
pub use encoder::BitEncoder;
pub use model::BitModel;

use crate::{Freq, State};

/// Log2 of the frame size, that is the precision of the quantized probabilities.
pub const LOG2_FRAME_SIZE: usize = 6;

/// The sum of the quantized frequencies of the two symbols.
pub const FRAME_SIZE: Freq = 1 << LOG2_FRAME_SIZE;

/// Used to extract, from the state, the frame's slot in which the state falls.
pub const FRAME_MASK: State = FRAME_SIZE - 1;

/// How many bits are extracted/added from/to the state during renormalization.
pub const B: usize = 8;

/// Used to extract the 8 LSB from the state.
pub const NORMALIZATION_MASK: State = 0xFF;

/// The lower bound of the interval in which the state lives.
pub const INTERVAL_LOWER_BOUND: State = 1 << (B - 2);

/// Multiplied by the frequency of a symbol, gives the value starting from which the state has
/// to be shrunk before encoding that symbol.
pub const NORMALIZATION_THRESHOLD: State = (INTERVAL_LOWER_BOUND >> LOG2_FRAME_SIZE) << B;

/// Everything the decoder needs besides the model: the final state of the encoder and the
/// bytes it streamed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prelude {
    /// The state of the encoder after having encoded the last symbol of the input.
    pub state: State,

    /// The normalized bits during the encoding process, in emission order.
    pub stream: Vec<u8>,
}

impl Prelude {
    pub fn new(state: State, stream: Vec<u8>) -> Self {
        Self { state, stream }
    }
}
