use std::io::Read;

/// Drops spaces and tabs that directly follow a delimiter outside quotes.
///
/// `csv` only recognizes a quoted field when the quote is the first byte of
/// the field, so `"7C,7D", "8C,KH"` would otherwise split the board on its
/// inner comma. Stripping the padding before the bytes reach the parser lets
/// a padded quote open the field as intended.
pub struct SkipInitialSpace<R> {
    inner: R,
    delimiter: u8,
    quoted: bool,
    skipping: bool,
}

impl<R> SkipInitialSpace<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            quoted: false,
            skipping: false,
        }
    }
}

impl<R> Read for SkipInitialSpace<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                let byte = buf[i];
                if self.skipping && (byte == b' ' || byte == b'\t') {
                    continue;
                }
                self.skipping = !self.quoted && byte == self.delimiter;
                if byte == b'"' {
                    self.quoted = !self.quoted;
                }
                buf[kept] = byte;
                kept += 1;
            }
            // a chunk of pure padding must not look like end of input
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}
