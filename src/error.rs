//! Error types shared by the models, the codecs and the block framing.

use std::io;

use thiserror::Error;

use crate::RawSymbol;

/// Error variants for rANS operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol was given a count of zero.
    #[error("count for symbol {0} is zero")]
    ZeroCount(RawSymbol),

    /// The same symbol was given more than one count.
    #[error("symbol {0} appears more than once")]
    DuplicateSymbol(RawSymbol),

    /// The model was built without any symbol.
    #[error("cannot build a model without symbols")]
    EmptyModel,

    /// The fixed-precision model only handles two symbols.
    #[error("expected exactly 2 frequencies, found {0}")]
    InvalidSymbolCount(usize),

    /// The frequencies cannot be quantized so that every symbol keeps a positive probability.
    #[error("incompatible frequencies {0:?}: cannot give every symbol a positive probability")]
    IncompatibleFrequencies(Vec<f64>),

    /// The symbol is not part of the model.
    #[error("symbol {0} is not part of the model")]
    UnknownSymbol(RawSymbol),

    /// A block decoded to a number of bits that is not a multiple of 8.
    #[error("decoded {0} bits, which is not on a byte boundary")]
    MisalignedBlock(usize),

    /// The source ended in the middle of a block.
    #[error("truncated block: expected {expected} bytes, found {found}")]
    TruncatedBlock { expected: usize, found: usize },

    /// Buffering the given bytes would not fit in a single block.
    #[error("max encoding size exceeded: {requested} bytes requested, limit is {limit}")]
    CapacityExceeded { requested: usize, limit: usize },

    /// An I/O error occurred while reading or writing blocks.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for rANS operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(inner) => inner,
            capacity @ Error::CapacityExceeded { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, capacity)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
