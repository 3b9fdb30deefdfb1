use num::{BigUint, Integer};

use crate::big_ans::model::SymbolTable;
use crate::RawSymbol;

/// Decoder for the state produced by a [`BigEncoder`](crate::big_ans::encoder::BigEncoder).
///
/// Symbols come back in the reverse order of encoding: the last encoded symbol is the first
/// one decoded. The decoder doesn't know how many symbols were encoded, so [`decode`](Self::decode)
/// has to be called exactly that many times.
#[derive(Clone, Debug)]
pub struct BigDecoder {
    table: SymbolTable,

    state: BigUint,
}

impl BigDecoder {
    /// Creates a decoder from the same table used by the encoder and its final state.
    pub fn new(table: SymbolTable, state: BigUint) -> Self {
        Self { table, state }
    }

    /// Decodes a single symbol.
    pub fn decode(&mut self) -> RawSymbol {
        let (block, slot) = self.state.div_rem(self.table.m());
        let index = self.table.find_index(&slot);

        self.state = block * &self.table.pdf()[index] + slot - &self.table.cdf()[index];

        self.table.symbol_at(index)
    }

    /// Decodes `count` symbols, in the order they come out of the state.
    pub fn decode_many(&mut self, count: usize) -> Vec<RawSymbol> {
        (0..count).map(|_| self.decode()).collect()
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> BigUint {
        self.state.clone()
    }
}
