//! rANS (range Asymmetric Numeral Systems) entropy coding.
//!
//! The crate is organised bottom-up:
//!
//! - [`big_ans`]: a normalized [symbol table](big_ans::model::SymbolTable) built from
//!   arbitrary-precision counts and a reference codec whose state is an unbounded integer.
//!   It never renormalizes, so it is meant for short sequences and for checking the math.
//! - [`ans`]: a streaming codec specialized to a two-symbol (bit) alphabet, with a 16-bit
//!   state that is kept in range by emitting and consuming whole bytes.
//! - [`framing`]: a [writer](framing::writer::RansWriter) and a
//!   [reader](framing::reader::RansReader) that compress arbitrary byte buffers as
//!   independent blocks, each one modelled by the measured probability of a set bit.
//!
//! Both codecs decode symbols in the reverse order in which they were encoded.

pub mod ans;
pub mod big_ans;
pub mod error;
pub mod framing;

mod utils;

pub use error::{Error, Result};

/// The type representing the symbols of the arbitrary-precision codec.
pub type RawSymbol = u64;

/// The type representing the symbols of the streaming codec: `0` or `1`.
pub type Bit = u8;

/// The type representing the state of the streaming encoder.
pub type State = u16;

/// The type representing the quantized frequencies of the streaming codec.
pub type Freq = u16;
