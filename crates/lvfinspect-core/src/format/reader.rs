use std::io::{ErrorKind, Read};

use super::error::FormatError;

/// Little-endian field reader over a forward-only byte stream.
///
/// Fixed-width reads fail with `UnexpectedEof` naming the section and the
/// partial byte count. Length-prefixed payload reads are bounded with
/// `Read::take`, so a corrupt length prefix cannot force an allocation
/// larger than what the stream actually yields.
pub struct FieldReader<R> {
    inner: R,
}

impl<R: Read> FieldReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn fill(&mut self, buf: &mut [u8], section: &'static str) -> Result<(), FormatError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(FormatError::UnexpectedEof {
                        section,
                        needed: buf.len(),
                        actual: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FormatError::Io(err)),
            }
        }
        Ok(())
    }

    pub fn read_array<const N: usize>(
        &mut self,
        section: &'static str,
    ) -> Result<[u8; N], FormatError> {
        let mut buf = [0u8; N];
        self.fill(&mut buf, section)?;
        Ok(buf)
    }

    pub fn read_u8(&mut self, section: &'static str) -> Result<u8, FormatError> {
        Ok(self.read_array::<1>(section)?[0])
    }

    pub fn read_u32_le(&mut self, section: &'static str) -> Result<u32, FormatError> {
        Ok(u32::from_le_bytes(self.read_array(section)?))
    }

    pub fn read_i32_le(&mut self, section: &'static str) -> Result<i32, FormatError> {
        Ok(i32::from_le_bytes(self.read_array(section)?))
    }

    pub fn read_f64_le(&mut self, section: &'static str) -> Result<f64, FormatError> {
        Ok(f64::from_le_bytes(self.read_array(section)?))
    }

    /// Read up to `len` bytes. The result is shorter than `len` when the
    /// stream ends early; the caller decides how to classify the shortfall.
    pub fn read_payload(&mut self, len: u64) -> Result<Vec<u8>, FormatError> {
        let mut buf = Vec::new();
        (&mut self.inner).take(len).read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Probe for one more byte, consuming it when present.
    pub fn has_more_data(&mut self) -> Result<bool, FormatError> {
        let mut probe = [0u8; 1];
        loop {
            match self.inner.read(&mut probe) {
                Ok(0) => return Ok(false),
                Ok(_) => return Ok(true),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FormatError::Io(err)),
            }
        }
    }
}
