use log::debug;

use crate::ans::{FRAME_SIZE, NORMALIZATION_THRESHOLD};
use crate::{Bit, Error, Freq, Result, State};

/// The smallest quantized frequency a symbol with a positive probability can get.
const MIN_FREQ: i64 = 1;

/// The entry containing all the needed data to encode or decode a specific [`Bit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncoderModelEntry {
    /// The quantized frequency of the symbol.
    pub freq: Freq,

    /// The cumulative frequency of the symbol.
    pub cumul_freq: Freq,

    /// The value starting from which the state must be shrunk before encoding this symbol,
    /// so that it doesn't overflow the interval after the encoding step.
    pub upperbound: State,
}

impl EncoderModelEntry {
    fn new(freq: Freq, cumul_freq: Freq) -> Self {
        Self {
            freq,
            cumul_freq,
            upperbound: NORMALIZATION_THRESHOLD * freq,
        }
    }
}

/// Probabilities of the two symbols quantized on a frame of [`FRAME_SIZE`] slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitModel {
    table: [EncoderModelEntry; 2],
}

impl BitModel {
    /// Quantizes the given frequencies, which should sum up to 1.
    ///
    /// Each frequency is rounded to the nearest multiple of `1 / FRAME_SIZE`; a positive
    /// frequency never gets less than one slot. The rounding error is then charged to the symbol
    /// with the biggest quantized frequency (the first one on ties). If that would leave it
    /// without slots, the frame is instead split proportionally between the two symbols.
    ///
    /// # Errors
    /// - [`Error::InvalidSymbolCount`] if `freqs` doesn't contain exactly two frequencies;
    /// - [`Error::IncompatibleFrequencies`] if a symbol ends up with no slot, which happens when
    ///   one of the frequencies is zero, negative or not a number.
    pub fn new(freqs: &[f64]) -> Result<Self> {
        if freqs.len() != 2 {
            return Err(Error::InvalidSymbolCount(freqs.len()));
        }
        let incompatible = || Error::IncompatibleFrequencies(freqs.to_vec());
        let frame_size = FRAME_SIZE as i64;

        let mut pdf = [0_i64; 2];
        let mut max_freq_index = 0;

        for (index, freq) in freqs.iter().enumerate() {
            let mut quantized = (freq * frame_size as f64).round() as i64;

            if *freq > 0.0 && quantized < MIN_FREQ {
                quantized = MIN_FREQ;
            }
            pdf[index] = quantized;

            if quantized > pdf[max_freq_index] {
                max_freq_index = index;
            }
        }

        let total = pdf[0].checked_add(pdf[1]).ok_or_else(incompatible)?;
        let freq_error = frame_size.checked_sub(total).ok_or_else(incompatible)?;
        let corrected = pdf[max_freq_index]
            .checked_add(freq_error)
            .ok_or_else(incompatible)?;

        if corrected > 0 {
            pdf[max_freq_index] = corrected;
        } else {
            // both quantized frequencies exceed the frame here
            let share = (pdf[max_freq_index] as f64 * frame_size as f64 / total as f64).round();
            pdf[max_freq_index] = (share as i64).clamp(MIN_FREQ, frame_size - MIN_FREQ);
            pdf[1 - max_freq_index] = frame_size - pdf[max_freq_index];
        }

        if pdf.iter().any(|freq| *freq < MIN_FREQ) {
            return Err(incompatible());
        }

        debug!(
            "Quantized frequencies {:?} to {:?} over a frame of {}",
            freqs, pdf, FRAME_SIZE
        );

        let first = pdf[0] as Freq;
        Ok(Self {
            table: [
                EncoderModelEntry::new(first, 0),
                EncoderModelEntry::new(pdf[1] as Freq, first),
            ],
        })
    }

    /// Returns the entry of the given symbol, or `None` if it is neither 0 nor 1.
    #[inline(always)]
    pub fn symbol(&self, bit: Bit) -> Option<&EncoderModelEntry> {
        self.table.get(bit as usize)
    }

    /// Returns the symbol owning the given slot of the frame, i.e. the last symbol whose
    /// cumulative frequency is not bigger than `slot`.
    #[inline(always)]
    pub fn bit_for_slot(&self, slot: State) -> Bit {
        self.cdf().partition_point(|cumul_freq| *cumul_freq <= slot) as Bit - 1
    }

    /// The quantized frequencies of the two symbols.
    pub fn pdf(&self) -> [Freq; 2] {
        [self.table[0].freq, self.table[1].freq]
    }

    /// The cumulative frequencies: `[0, pdf[0], FRAME_SIZE]`.
    pub fn cdf(&self) -> [Freq; 3] {
        [0, self.table[1].cumul_freq, FRAME_SIZE]
    }

    /// The quantized probability of each symbol, as a distribution over [`FRAME_SIZE`].
    pub fn distribution(&self) -> [usize; 2] {
        self.pdf().map(|freq| freq as usize)
    }
}
