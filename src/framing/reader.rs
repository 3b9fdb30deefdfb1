use std::cmp::min;
use std::io::{self, Read};

use log::{debug, trace};

use crate::framing::block::Block;
use crate::Result;

/// The outcome of [`RansReader::read_decoded`]. Each variant carries the number of bytes
/// copied into the caller's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadStatus {
    /// The buffer has been filled and no decoded byte is left over.
    Filled(usize),

    /// The buffer has been filled, but more decoded bytes are waiting for the next read.
    ShortBuffer(usize),

    /// The source is exhausted and fewer bytes than requested were available.
    EndOfData(usize),
}

impl ReadStatus {
    pub fn bytes_read(&self) -> usize {
        match self {
            ReadStatus::Filled(read) | ReadStatus::ShortBuffer(read) | ReadStatus::EndOfData(read) => {
                *read
            }
        }
    }
}

/// Decompresses the [blocks](Block) written by a [`RansWriter`](crate::framing::RansWriter).
///
/// Blocks are read and decoded lazily, only when the decoded bytes at hand are not enough to
/// satisfy a read.
pub struct RansReader<R: Read> {
    src: R,

    /// Decoded bytes not returned to the caller yet.
    decoded: Vec<u8>,
}

impl<R: Read> RansReader<R> {
    pub fn new(src: R) -> Self {
        Self {
            src,
            decoded: Vec::new(),
        }
    }

    /// Fills `out` with decoded bytes, reading as many blocks as needed.
    ///
    /// # Errors
    /// I/O errors of the source are returned unchanged; a corrupted or truncated block makes
    /// the rest of the stream unusable.
    pub fn read_decoded(&mut self, out: &mut [u8]) -> Result<ReadStatus> {
        let mut exhausted = false;

        while self.decoded.len() < out.len() && !exhausted {
            match Block::read_from(&mut self.src)? {
                Some(block) => {
                    let bytes = block.decode()?;
                    debug!("Decoded a block of {} bytes", bytes.len());
                    self.decoded.extend_from_slice(&bytes);
                }
                None => exhausted = true,
            }
        }

        let read = min(out.len(), self.decoded.len());
        out[..read].copy_from_slice(&self.decoded[..read]);
        self.decoded.drain(..read);

        let status = if !self.decoded.is_empty() {
            ReadStatus::ShortBuffer(read)
        } else if exhausted {
            ReadStatus::EndOfData(read)
        } else {
            ReadStatus::Filled(read)
        };
        trace!("Read {:?} out of {} requested bytes", status, out.len());

        Ok(status)
    }

    /// Starts reading from a new source, discarding the decoded bytes not read yet.
    pub fn reset(&mut self, src: R) {
        self.src = src;
        self.decoded.clear();
    }

    /// The number of decoded bytes waiting for the next read.
    pub fn pending(&self) -> usize {
        self.decoded.len()
    }

    pub fn into_inner(self) -> R {
        self.src
    }
}

impl<R: Read> Read for RansReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_decoded(buf)?.bytes_read())
    }
}
