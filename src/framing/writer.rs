use std::cmp::min;
use std::io::{self, Write};
use std::mem;

use log::debug;

use crate::framing::block::{Block, BlockHeader};
use crate::framing::MAX_BLOCK_SIZE;
use crate::{Error, Result};

/// Compresses the bytes written to it into a sequence of [blocks](Block).
///
/// Bytes are only buffered until the writer is flushed: every flush turns the buffered bytes
/// into one block, with its own model, so that flushing periodically lets the model follow the
/// local density of set bits. An empty buffer produces no block.
///
/// Note that dropping the writer discards the buffered bytes: use [`close`](Self::close) to
/// write them out.
pub struct RansWriter<W: Write> {
    output: W,

    buffer: Vec<u8>,

    /// The maximum number of bytes that can be buffered before a flush.
    max_block_size: usize,
}

impl<W: Write> RansWriter<W> {
    pub fn new(output: W) -> Self {
        Self::with_max_block_size(output, MAX_BLOCK_SIZE)
    }

    /// Creates a writer accepting at most `max_block_size` bytes between two flushes. The
    /// limit can't be higher than [`MAX_BLOCK_SIZE`].
    pub fn with_max_block_size(output: W, max_block_size: usize) -> Self {
        Self {
            output,
            buffer: Vec::new(),
            max_block_size: min(max_block_size, MAX_BLOCK_SIZE),
        }
    }

    /// Buffers the given bytes.
    ///
    /// # Errors
    /// [`Error::CapacityExceeded`] if the buffer would exceed the block size limit, in which case
    /// nothing is buffered.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let requested = self.buffer.len().saturating_add(bytes.len());

        if requested > self.max_block_size {
            return Err(Error::CapacityExceeded {
                requested,
                limit: self.max_block_size,
            });
        }

        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Encodes the buffered bytes and writes them out as a single block, returning its header.
    /// Returns `None`, writing nothing, if no byte is buffered.
    ///
    /// The buffer is emptied even if encoding or writing fails.
    pub fn flush_block(&mut self) -> Result<Option<BlockHeader>> {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let bytes = mem::take(&mut self.buffer);
        let block = Block::encode(&bytes)?;
        block.write_to(&mut self.output)?;

        debug!(
            "Flushed a block of {} bytes ({} bytes of payload)",
            bytes.len(),
            block.payload.len()
        );

        Ok(Some(block.header))
    }

    /// The number of bytes waiting for the next flush.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    /// Flushes the remaining bytes and returns the underlying writer.
    pub fn close(mut self) -> Result<W> {
        self.flush_block()?;
        self.output.flush()?;
        Ok(self.output)
    }
}

impl<W: Write> Write for RansWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.push_bytes(buf)?)
    }

    /// Writes out the buffered bytes as a block and flushes the underlying writer.
    fn flush(&mut self) -> io::Result<()> {
        self.flush_block()?;
        self.output.flush()
    }
}
