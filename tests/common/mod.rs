/*
 * Utility functions and consts used by the tests.
 *
 */
#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution, Zipf};
use rans::{Bit, RawSymbol};

/// Size of the list of symbols used to test the arbitrary-precision codec.
pub const SYMBOL_LIST_LENGTH: usize = 2_000;

/// Maximum value that the zipfian distribution can output.
pub const MAXIMUM_SYMBOL: u64 = 64;

/// Size of the list of bits used to test the streaming codec.
pub const BIT_LIST_LENGTH: usize = 50_000;

/// Lets `RUST_LOG` show the log of the crate while testing.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a sequence of `len` symbols sampled from a Zipfian distribution that can output
/// values up to [`MAXIMUM_SYMBOL`].
pub fn get_symbols(seed: u64, len: usize) -> Vec<RawSymbol> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(MAXIMUM_SYMBOL, 1.0).unwrap();

    (0..len)
        .map(|_| distribution.sample(&mut rng) as RawSymbol)
        .collect()
}

/// Creates a sequence of `len` bits, each one set with probability `p`.
pub fn get_bits(seed: u64, len: usize, p: f64) -> Vec<Bit> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Bernoulli::new(p).unwrap();

    (0..len)
        .map(|_| distribution.sample(&mut rng) as Bit)
        .collect()
}

/// Creates `len` bytes whose bits are set with probability `p`.
pub fn get_bytes(seed: u64, len: usize, p: f64) -> Vec<u8> {
    get_bits(seed, len * 8, p)
        .chunks(8)
        .map(|bits| {
            bits.iter()
                .enumerate()
                .fold(0_u8, |byte, (offset, bit)| byte | (bit << offset))
        })
        .collect()
}

/// Splits `bytes` in chunks of random length, up to `max_len` bytes each.
pub fn random_chunks(seed: u64, bytes: &[u8], max_len: usize) -> Vec<&[u8]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let end = (start + rng.gen_range(1..=max_len)).min(bytes.len());
        chunks.push(&bytes[start..end]);
        start = end;
    }
    chunks
}
