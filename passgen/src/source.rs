//! Sources of random bytes for the sampler.
//!
//! Every draw is fallible. A source that runs dry or errors must report it,
//! never hand back zeroed bytes.

use std::io::{self, Read};

use crate::error::{Error, Result};

/// A cryptographically secure byte stream.
pub trait RandomSource {
    /// Fills `buf` completely with random bytes, or fails.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// The operating system CSPRNG, via `getrandom`.
///
/// Stateless, so a single value can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| Error::RandomSource(io::Error::from(e)))
    }
}

/// Adapts any [`Read`] into a [`RandomSource`].
///
/// End of stream before `buf` is full is reported as
/// [`Error::RandomSourceExhausted`]. Mostly useful for feeding scripted bytes
/// in tests, or reading from a device such as `/dev/urandom` directly.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> RandomSource for ReaderSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        // read() may return fewer bytes than asked for, keep going until the
        // buffer is full or the reader has nothing left.
        let mut total = 0usize;
        while total < buf.len() {
            match self.reader.read(&mut buf[total..]) {
                Ok(0) => return Err(Error::RandomSourceExhausted),
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(Error::RandomSourceExhausted);
                }
                Err(e) => return Err(Error::RandomSource(e)),
            }
        }
        Ok(())
    }
}
