//! Fixed-capacity byte buffer between the lexer and its byte source.
//!
//! The buffer holds `[index, size)` unread bytes. It is refilled when it runs dry, or when fewer than the low-water
//! mark of bytes remain ahead of `index` and the source may still have more. A refill slides the unread tail to the
//! start of the buffer and appends freshly read bytes after it.
//!
//! Once the source reports end of file (or fails), it is never read again.

use std::io::{self, Read};

use thiserror::Error;

pub const SIZE_1KB: usize = 1 << 10;
pub const SIZE_64KB: usize = 1 << 16;

/// Default buffer capacity: 64 KiB plus 1 KiB of slack.
pub const DEFAULT_CAPACITY: usize = SIZE_64KB + SIZE_1KB;

/// Default low-water mark.
pub const DEFAULT_LOW_WATER: usize = SIZE_1KB;

/// Invalid buffer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("buffer capacity must be non-zero")]
    ZeroCapacity,

    #[error("low-water mark ({low_water} bytes) must be smaller than the buffer capacity ({capacity} bytes)")]
    LowWaterTooLarge { capacity: usize, low_water: usize },
}

/// Sizing of the lexer's input buffer.
///
/// ## Examples
/// ```rust
/// use packal_syntax::lexer::BufferConfig;
///
/// let config = BufferConfig::new(16, 4).unwrap();
/// assert_eq!(config.capacity(), 16);
/// assert!(BufferConfig::new(4, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    capacity: usize,
    low_water: usize,
}

impl BufferConfig {
    pub fn new(capacity: usize, low_water: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if low_water >= capacity {
            return Err(ConfigError::LowWaterTooLarge { capacity, low_water });
        }
        Ok(Self { capacity, low_water })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn low_water(&self) -> usize {
        self.low_water
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            low_water: DEFAULT_LOW_WATER,
        }
    }
}

pub(crate) struct SourceBuffer<R> {
    reader: R,
    buf: Box<[u8]>,
    /// Next unread byte.
    index: usize,
    /// Number of valid bytes in `buf`.
    size: usize,
    low_water: usize,
    exhausted: bool,
}

impl<R: Read> SourceBuffer<R> {
    pub(crate) fn new(reader: R, config: BufferConfig) -> Self {
        Self {
            reader,
            buf: vec![0; config.capacity].into_boxed_slice(),
            index: 0,
            size: 0,
            low_water: config.low_water,
            exhausted: false,
        }
    }

    /// Refill if the buffer is dry or below the low-water mark.
    ///
    /// Bytes read before an I/O error are kept; the source counts as exhausted afterwards.
    pub(crate) fn fetch(&mut self) -> io::Result<()> {
        let remaining = self.size - self.index;
        if remaining == 0 || (!self.exhausted && remaining < self.low_water) {
            self.refill()?;
        }
        Ok(())
    }

    fn refill(&mut self) -> io::Result<()> {
        if self.exhausted {
            return Ok(());
        }

        self.buf.copy_within(self.index..self.size, 0);
        self.size -= self.index;
        self.index = 0;

        while self.size < self.buf.len() {
            match self.reader.read(&mut self.buf[self.size..]) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(n) => self.size += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.exhausted = true;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Return `true` if no unread byte is buffered.
    pub(crate) fn is_drained(&self) -> bool {
        self.index == self.size
    }

    pub(crate) fn current(&self) -> Option<u8> {
        self.buf[..self.size].get(self.index).copied()
    }

    pub(crate) fn bump(&mut self) {
        if self.index < self.size {
            self.index += 1;
        }
    }

    /// Consume the longest buffered prefix whose bytes satisfy `pred`.
    ///
    /// Stops at the end of the buffered bytes; the caller decides whether to refill and continue.
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &[u8] {
        let start = self.index;
        while self.index < self.size && pred(self.buf[self.index]) {
            self.index += 1;
        }
        &self.buf[start..self.index]
    }
}
