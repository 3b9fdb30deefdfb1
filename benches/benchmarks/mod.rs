use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Bernoulli;
use rans::Bit;

pub mod decoder;
pub mod encoder;
pub mod framing;

/// Size of the list of bits used to bench.
const BIT_LIST_LENGTH: usize = 1 << 22;

/// Probability that a bit of the list is set.
const BIT_PROBABILITY: f64 = 0.1;

/// Creates a list of [`BIT_LIST_LENGTH`] bits, each one set with [`BIT_PROBABILITY`].
pub fn get_bits() -> Vec<Bit> {
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Bernoulli::new(BIT_PROBABILITY).unwrap();

    (0..BIT_LIST_LENGTH)
        .map(|_| distribution.sample(&mut rng) as Bit)
        .collect()
}

/// Packs the bits returned by [`get_bits`] into bytes, least significant bit first.
pub fn get_bytes() -> Vec<u8> {
    get_bits()
        .chunks(8)
        .map(|bits| {
            bits.iter()
                .enumerate()
                .fold(0_u8, |byte, (offset, bit)| byte | (bit << offset))
        })
        .collect()
}

pub fn frequencies() -> [f64; 2] {
    [1.0 - BIT_PROBABILITY, BIT_PROBABILITY]
}
