/// Width of one packed value in bits. 2^9 = 512 covers the 0..=299
/// field range.
pub const VALUE_BITS: u32 = 9;

/// Bit writer — MSB-first, packs 9-bit values into a byte buffer.
///
/// Values are shifted into a u32 accumulator and full bytes are flushed
/// off the top as they become available. Between pushes the accumulator
/// holds at most 7 pending bits, so the combine step peaks at 16
/// significant bits and u32 has headroom to spare.
pub struct BitWriter {
    buf: Vec<u8>,
    acc: u32,
    bits: u32,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            acc: 0,
            bits: 0,
        }
    }

    /// Append one value. The caller guarantees `value < 512`.
    #[inline]
    pub fn push(&mut self, value: u16) {
        self.acc = (self.acc << VALUE_BITS) | value as u32;
        self.bits += VALUE_BITS;
        while self.bits >= 8 {
            self.buf.push((self.acc >> (self.bits - 8)) as u8);
            self.bits -= 8;
        }
    }

    /// Flush any trailing partial byte, zero-padded on the low end,
    /// and return the buffer. Total length is ceil(pushed bits / 8).
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits > 0 {
            self.buf.push((self.acc << (8 - self.bits)) as u8);
        }
        self.buf
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit reader — MSB-first, drains 9-bit values from a byte slice.
pub struct BitReader<'a> {
    data: &'a [u8],
    acc: u32,
    bits: u32,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, acc: 0, bits: 0 }
    }

    /// Next value, or `None` once fewer than 9 bits remain. The stream
    /// carries no length field, so trailing bits shorter than one value
    /// are indistinguishable from padding and are dropped.
    pub fn read(&mut self) -> Option<u16> {
        while self.bits < VALUE_BITS {
            let (&byte, rest) = self.data.split_first()?;
            self.data = rest;
            self.acc = (self.acc << 8) | byte as u32;
            self.bits += 8;
        }
        self.bits -= VALUE_BITS;
        Some(((self.acc >> self.bits) & 0x1FF) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_reader_roundtrip() {
        let mut bw = BitWriter::new();
        bw.push(0);
        bw.push(187);
        bw.push(236);
        bw.push(299);

        let bytes = bw.finish();
        assert_eq!(bytes, [0x00, 0x2E, 0xDD, 0x92, 0xB0]);

        let mut br = BitReader::new(&bytes);
        assert_eq!(br.read(), Some(0));
        assert_eq!(br.read(), Some(187));
        assert_eq!(br.read(), Some(236));
        assert_eq!(br.read(), Some(299));
        assert_eq!(br.read(), None);
    }

    #[test]
    fn test_single_value_pads_to_two_bytes() {
        let mut bw = BitWriter::new();
        bw.push(299);
        // 299 = 0b100101011: top 8 bits, then the last bit left-aligned.
        assert_eq!(bw.finish(), [0x95, 0x80]);
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        assert!(BitWriter::new().finish().is_empty());
    }

    #[test]
    fn test_no_partial_byte_after_eight_values() {
        let mut bw = BitWriter::new();
        for v in 0..8 {
            bw.push(v);
        }
        // 72 bits pack into exactly 9 bytes, no padding byte.
        assert_eq!(bw.finish().len(), 9);
    }

    #[test]
    fn test_reader_discards_trailing_padding() {
        // One full value plus 7 spare bits that never form a second one.
        let mut br = BitReader::new(&[0xFF, 0xFF]);
        assert_eq!(br.read(), Some(0x1FF));
        assert_eq!(br.read(), None);
    }

    #[test]
    fn test_reader_ignores_short_input() {
        let mut br = BitReader::new(&[0xAB]);
        assert_eq!(br.read(), None);
    }
}
