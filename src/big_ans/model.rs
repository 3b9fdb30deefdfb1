use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use num::{BigUint, Zero};

use crate::{Error, RawSymbol, Result};

/// A normalized probability table over an arbitrary alphabet.
///
/// Symbols are ranked by descending count, ties broken by ascending symbol, so the table
/// only depends on the (symbol, count) pairs and never on the order in which they are given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    /// The count of the symbol ranked at each index.
    pdf: Vec<BigUint>,

    /// Exclusive prefix sums of `pdf`: `cdf[0] = 0` and `cdf[len] = m`.
    cdf: Vec<BigUint>,

    /// The precision of the table, that is the sum of all counts.
    m: BigUint,

    symbol_to_index: HashMap<RawSymbol, usize>,

    index_to_symbol: Vec<RawSymbol>,
}

impl SymbolTable {
    /// Builds the table from (symbol, count) pairs.
    ///
    /// Returns an error if no pair is given, if a count is zero or if a symbol appears twice.
    pub fn new<'a, I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a RawSymbol, &'a BigUint)>,
    {
        let mut pairs = Vec::new();

        for (symbol, count) in counts {
            if count.is_zero() {
                return Err(Error::ZeroCount(*symbol));
            }
            pairs.push((*symbol, count));
        }

        if pairs.is_empty() {
            return Err(Error::EmptyModel);
        }

        let ranked = pairs
            .into_iter()
            .sorted_unstable_by(|(sym_1, count_1), (sym_2, count_2)| {
                count_2.cmp(count_1).then(sym_1.cmp(sym_2))
            })
            .collect::<Vec<_>>();

        let mut pdf = Vec::with_capacity(ranked.len());
        let mut cdf = Vec::with_capacity(ranked.len() + 1);
        let mut symbol_to_index = HashMap::with_capacity(ranked.len());
        let mut index_to_symbol = Vec::with_capacity(ranked.len());
        let mut last_covered_freq = BigUint::zero();

        for (index, (symbol, count)) in ranked.into_iter().enumerate() {
            if symbol_to_index.insert(symbol, index).is_some() {
                return Err(Error::DuplicateSymbol(symbol));
            }
            index_to_symbol.push(symbol);
            cdf.push(last_covered_freq.clone());
            last_covered_freq += count;
            pdf.push(count.clone());
        }
        cdf.push(last_covered_freq.clone());

        debug!(
            "Built symbol table with {} symbols and precision {}",
            pdf.len(),
            last_covered_freq
        );

        Ok(Self {
            pdf,
            cdf,
            m: last_covered_freq,
            symbol_to_index,
            index_to_symbol,
        })
    }

    /// The counts, in rank order.
    pub fn pdf(&self) -> &[BigUint] {
        &self.pdf
    }

    /// The cumulative counts, one more entry than [`pdf`](Self::pdf).
    pub fn cdf(&self) -> &[BigUint] {
        &self.cdf
    }

    /// The total precision `M`.
    pub fn m(&self) -> &BigUint {
        &self.m
    }

    /// The number of symbols in the table.
    pub fn len(&self) -> usize {
        self.pdf.len()
    }

    /// Always false: a table holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.pdf.is_empty()
    }

    /// Returns the rank of the given symbol, if it is part of the table.
    #[inline(always)]
    pub fn index_of(&self, symbol: RawSymbol) -> Option<usize> {
        self.symbol_to_index.get(&symbol).copied()
    }

    /// Returns the symbol ranked at the given index.
    #[inline(always)]
    pub fn symbol_at(&self, index: usize) -> RawSymbol {
        self.index_to_symbol[index]
    }

    /// Returns the unique index `i` such that `cdf[i] <= slot < cdf[i + 1]`.
    ///
    /// `slot` must be lower than [`m`](Self::m).
    #[inline(always)]
    pub fn find_index(&self, slot: &BigUint) -> usize {
        self.cdf.partition_point(|cumul_freq| cumul_freq <= slot) - 1
    }
}

/// Collects the statistics of a sequence and builds the related [`SymbolTable`].
#[derive(Clone, Debug, Default)]
pub struct SymbolTableBuilder {
    counts: HashMap<RawSymbol, BigUint>,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of the given symbol.
    pub fn push_symbol(&mut self, symbol: RawSymbol) -> &mut Self {
        *self.counts.entry(symbol).or_insert_with(BigUint::zero) += 1_u32;
        self
    }

    /// Overrides the count of the given symbol.
    pub fn set_count(&mut self, symbol: RawSymbol, count: impl Into<BigUint>) -> &mut Self {
        self.counts.insert(symbol, count.into());
        self
    }

    pub fn build(&self) -> Result<SymbolTable> {
        SymbolTable::new(&self.counts)
    }
}
