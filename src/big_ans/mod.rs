//! Arbitrary-precision rANS.
//!
//! The state of the [encoder](encoder::BigEncoder) is an unbounded integer that grows with
//! every encoded symbol, so nothing is ever streamed out: the final state alone is enough to
//! [decode](decoder::BigDecoder) the whole sequence. This makes the codec exact but
//! unsuitable for long inputs; it serves as the reference for the streaming codec in
//! [`crate::ans`].

pub mod decoder;
pub mod encoder;
pub mod model;

pub use decoder::BigDecoder;
pub use encoder::BigEncoder;
pub use model::{SymbolTable, SymbolTableBuilder};
