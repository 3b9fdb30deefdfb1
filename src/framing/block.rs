use std::io::{self, Read, Write};

use log::debug;

use crate::ans::{BitDecoder, BitEncoder, Prelude, FRAME_SIZE};
use crate::framing::{bit_frequencies, HEADER_LEN, MAX_BLOCK_SIZE};
use crate::utils::{cross_entropy, entropy};
use crate::{Bit, Error, Result, State};

/// The fixed-size part of a [`Block`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockHeader {
    /// The probability that a bit of the source bytes is set.
    pub bit_probability: f64,

    /// The state of the encoder after having encoded the last bit of the block.
    pub state: State,

    /// The number of payload bytes following the header.
    pub payload_len: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0_u8; HEADER_LEN];
        bytes[..8].copy_from_slice(&self.bit_probability.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.state.to_le_bytes());
        bytes[10..].copy_from_slice(&self.payload_len.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Self {
        let mut probability = [0_u8; 8];
        probability.copy_from_slice(&bytes[..8]);

        Self {
            bit_probability: f64::from_le_bytes(probability),
            state: State::from_le_bytes([bytes[8], bytes[9]]),
            payload_len: u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.to_bytes())
    }

    /// Reads a header from `src`.
    ///
    /// Returns `None` if the source is exhausted before the first byte of the header, and
    /// [`Error::TruncatedBlock`] if it is exhausted in the middle of it.
    pub fn read_from<R: Read>(src: &mut R) -> Result<Option<Self>> {
        let mut bytes = [0_u8; HEADER_LEN];
        let mut filled = 0;

        while filled < HEADER_LEN {
            match src.read(&mut bytes[filled..]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            HEADER_LEN => Ok(Some(Self::from_bytes(&bytes))),
            found => Err(Error::TruncatedBlock {
                expected: HEADER_LEN,
                found,
            }),
        }
    }
}

/// A self-contained unit of the compressed stream: one header and the encoded bits of one
/// flushed buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub header: BlockHeader,

    /// The bytes streamed out by the encoder.
    pub payload: Vec<u8>,
}

impl Block {
    /// Encodes every bit of `bytes`, from the least to the most significant bit of each byte,
    /// with a model built on the proportion of set bits.
    pub fn encode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_BLOCK_SIZE {
            return Err(Error::CapacityExceeded {
                requested: bytes.len(),
                limit: MAX_BLOCK_SIZE,
            });
        }

        let total_bits = bytes.len() * 8;
        let ones = bytes.iter().map(|byte| byte.count_ones() as usize).sum::<usize>();
        let bit_probability = match total_bits {
            0 => 0.0,
            _ => ones as f64 / total_bits as f64,
        };

        let mut encoder = BitEncoder::new(&bit_frequencies(bit_probability))?;
        for byte in bytes {
            for offset in 0..8 {
                encoder.encode((byte >> offset) & 1)?;
            }
        }

        let model = *encoder.model();
        let prelude = encoder.into_prelude();
        let payload_len =
            u32::try_from(prelude.stream.len()).map_err(|_| Error::CapacityExceeded {
                requested: prelude.stream.len(),
                limit: u32::MAX as usize,
            })?;

        if total_bits > 0 {
            let distr = [total_bits - ones, ones];
            debug!(
                "Encoded {} bytes (p = {:.4}) into {} bytes; entropy bound {:.0} B, quantized model bound {:.0} B",
                bytes.len(),
                bit_probability,
                payload_len,
                entropy(&distr, total_bits as f64) * total_bits as f64 / 8.0,
                cross_entropy(&distr, total_bits as f64, &model.distribution(), FRAME_SIZE as f64)
                    * total_bits as f64
                    / 8.0,
            );
        }

        Ok(Self {
            header: BlockHeader {
                bit_probability,
                state: prelude.state,
                payload_len,
            },
            payload: prelude.stream,
        })
    }

    /// Decodes the block back into the original bytes.
    ///
    /// Since the decoder returns bits in reverse order, they are reversed before being packed.
    ///
    /// # Errors
    /// [`Error::MisalignedBlock`] if the number of decoded bits is not a multiple of 8.
    pub fn decode(self) -> Result<Vec<u8>> {
        let prelude = Prelude::new(self.header.state, self.payload);
        let decoder = BitDecoder::new(&bit_frequencies(self.header.bit_probability), prelude)?;
        let bits = decoder.collect::<Vec<Bit>>();

        if bits.len() % 8 != 0 {
            return Err(Error::MisalignedBlock(bits.len()));
        }

        let mut bytes = vec![0_u8; bits.len() / 8];
        for (index, bit) in bits.iter().rev().enumerate() {
            if *bit > 0 {
                bytes[index / 8] |= 1 << (index % 8);
            }
        }

        Ok(bytes)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.header.write_to(out)?;
        out.write_all(&self.payload)
    }

    /// Reads the next block from `src`, or returns `None` if the source is exhausted.
    ///
    /// # Errors
    /// [`Error::TruncatedBlock`] if the source ends before the declared payload length.
    pub fn read_from<R: Read>(src: &mut R) -> Result<Option<Self>> {
        let header = match BlockHeader::read_from(src)? {
            Some(header) => header,
            None => return Ok(None),
        };

        let expected = header.payload_len as usize;
        let mut payload = Vec::new();
        src.by_ref()
            .take(header.payload_len as u64)
            .read_to_end(&mut payload)?;

        if payload.len() != expected {
            return Err(Error::TruncatedBlock {
                expected,
                found: payload.len(),
            });
        }

        Ok(Some(Self { header, payload }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_little_endian() {
        let header = BlockHeader {
            bit_probability: 0.5,
            state: 0x0102,
            payload_len: 0x03040506,
        };
        let bytes = header.to_bytes();

        assert_eq!(&bytes[..8], &0.5_f64.to_le_bytes());
        assert_eq!(&bytes[8..], &[0x02, 0x01, 0x06, 0x05, 0x04, 0x03]);
        assert_eq!(BlockHeader::from_bytes(&bytes), header);
    }

    #[test]
    fn two_bytes_are_encoded_into_a_known_block() {
        // bits, LSB first: 0,1,1,0,0,0,1,0 and 1,1,1,1,0,0,0,0
        let block = Block::encode(&[0x46, 0x0F]).unwrap();

        assert_eq!(block.header.bit_probability, 7.0 / 16.0);
        assert_eq!(block.header.payload_len as usize, block.payload.len());
        assert_eq!(block.decode().unwrap(), vec![0x46, 0x0F]);
    }

    #[test]
    fn bits_not_on_a_byte_boundary_are_rejected() {
        let mut encoder = BitEncoder::new(&bit_frequencies(0.5)).unwrap();
        encoder.encode_all(&[1, 0, 1, 1, 0]).unwrap();
        let prelude = encoder.into_prelude();

        let block = Block {
            header: BlockHeader {
                bit_probability: 0.5,
                state: prelude.state,
                payload_len: prelude.stream.len() as u32,
            },
            payload: prelude.stream,
        };

        assert!(matches!(block.decode(), Err(Error::MisalignedBlock(5))));
    }

    #[test]
    fn truncated_header_is_rejected() {
        let mut src: &[u8] = &[0, 0, 0, 0, 0, 0, 0xE0];

        assert!(matches!(
            BlockHeader::read_from(&mut src),
            Err(Error::TruncatedBlock {
                expected: HEADER_LEN,
                found: 7
            })
        ));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let block = Block::encode(&[0xAB; 64]).unwrap();
        let mut bytes = Vec::new();
        block.write_to(&mut bytes).unwrap();
        bytes.truncate(bytes.len() - 1);

        let result = Block::read_from(&mut bytes.as_slice());
        assert!(matches!(
            result,
            Err(Error::TruncatedBlock { expected, found }) if found + 1 == expected
        ));
    }
}
