use num::{BigUint, Zero};

use crate::big_ans::model::SymbolTable;
use crate::{Error, RawSymbol, Result};

/// An rANS encoder whose state is an unbounded integer.
#[derive(Clone, Debug)]
pub struct BigEncoder {
    table: SymbolTable,

    /// `M - pdf[i]` for each rank `i`, so that every step is a single multiply-add.
    comp_freqs: Vec<BigUint>,

    state: BigUint,
}

impl BigEncoder {
    /// Creates an encoder with the given table and a state of zero.
    pub fn new(table: SymbolTable) -> Self {
        let comp_freqs = table
            .pdf()
            .iter()
            .map(|freq| table.m() - freq)
            .collect::<Vec<_>>();

        Self {
            table,
            comp_freqs,
            state: BigUint::zero(),
        }
    }

    /// Encodes a single symbol.
    ///
    /// The state becomes `C(s, x) = M * ⌊x / pdf_s⌋ + (x mod pdf_s) + cdf_s`, computed here as
    /// `x + (M - pdf_s) * ⌊x / pdf_s⌋ + cdf_s`. Note that the sequence is decoded in reverse order.
    pub fn encode(&mut self, symbol: RawSymbol) -> Result<()> {
        let index = self
            .table
            .index_of(symbol)
            .ok_or(Error::UnknownSymbol(symbol))?;

        let block = &self.state / &self.table.pdf()[index];
        self.state += block * &self.comp_freqs[index] + &self.table.cdf()[index];

        Ok(())
    }

    /// Encodes the given symbols in order.
    pub fn encode_all(&mut self, symbols: &[RawSymbol]) -> Result<()> {
        for symbol in symbols {
            self.encode(*symbol)?;
        }
        Ok(())
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> BigUint {
        self.state.clone()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Consumes the encoder returning its final state, the only data needed to decode.
    pub fn into_state(self) -> BigUint {
        self.state
    }
}
