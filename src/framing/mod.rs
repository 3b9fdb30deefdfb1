//! Block-framed compression of byte buffers.
//!
//! A [`RansWriter`](writer::RansWriter) buffers the bytes written to it and, on every flush,
//! models them as a sequence of bits (least significant first) with the measured probability
//! of a set bit. The bits are encoded by a [`BitEncoder`](crate::ans::BitEncoder) and written
//! out as a self-contained [`Block`](block::Block):
//!
//! ```text
//! | bit probability: f64 | final state: u16 | payload length: u32 | payload |
//! ```
//!
//! with every integer in little-endian order. A [`RansReader`](reader::RansReader) decodes
//! blocks one after the other until its source is exhausted.

pub mod block;
pub mod reader;
pub mod writer;

pub use block::{Block, BlockHeader};
pub use reader::{RansReader, ReadStatus};
pub use writer::RansWriter;

use crate::ans::FRAME_SIZE;

/// Size in bytes of a block header.
pub const HEADER_LEN: usize = 8 + 2 + 4;

/// The maximum number of bytes a single block can hold.
pub const MAX_BLOCK_SIZE: usize = i32::MAX as usize;

/// The probability of each bit value is kept at least this high in the model, so that blocks
/// made only of zeros, or only of ones, can be encoded too.
pub const MIN_BIT_PROBABILITY: f64 = 1.0 / FRAME_SIZE as f64;

/// Returns the frequencies of the 0 and 1 symbols used to model a block whose bits are set
/// with the given probability.
pub fn bit_frequencies(bit_probability: f64) -> [f64; 2] {
    let p = bit_probability.clamp(MIN_BIT_PROBABILITY, 1.0 - MIN_BIT_PROBABILITY);
    [1.0 - p, p]
}
