//! 9-bit set packing for small integers.
//!
//! Packs a set of integers in `1..=300` into a compact byte stream:
//! each value is stored as a 9-bit field holding `value - 1`, fields are
//! concatenated MSB-first in ascending value order, and the final
//! partial byte is zero-padded. A set of n values packs into
//! ceil(9n / 8) bytes.
//!
//! Encoding canonicalizes its input: duplicates collapse and order is
//! discarded, so `decode(encode(x))` returns the distinct values of `x`
//! sorted ascending, not `x` itself. The stream carries no length field,
//! header, or checksum.

pub mod bitio;

use rustc_hash::FxHashSet;

use bitio::{BitReader, BitWriter};

/// Smallest packable value.
pub const MIN_VALUE: i32 = 1;
/// Largest packable value. `300 - 1 = 299` fits in 9 bits.
pub const MAX_VALUE: i32 = 300;

/// Output of [`encode`]: the packed stream plus every input that was
/// dropped for falling outside `1..=300`.
///
/// Range violations are per-element and non-fatal; encoding continues
/// with the remaining values, so `bytes` may cover fewer values than
/// were passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub rejected: Vec<i32>,
}

/// Pack a collection of integers into a 9-bit-per-value byte stream.
///
/// The input is deduplicated and sorted ascending before packing.
/// Out-of-range numbers land in [`Encoded::rejected`] (also sorted) and
/// do not affect the stream. An empty or all-invalid input produces an
/// empty byte vector.
pub fn encode(numbers: &[i32]) -> Encoded {
    let mut sorted: Vec<i32> = numbers
        .iter()
        .copied()
        .collect::<FxHashSet<_>>()
        .into_iter()
        .collect();
    sorted.sort_unstable();

    let mut bw = BitWriter::new();
    let mut rejected = Vec::new();
    for &num in &sorted {
        if !(MIN_VALUE..=MAX_VALUE).contains(&num) {
            rejected.push(num);
            continue;
        }
        bw.push((num - 1) as u16);
    }

    Encoded {
        bytes: bw.finish(),
        rejected,
    }
}

/// Unpack a byte stream produced by [`encode`].
///
/// Never fails: any byte sequence decodes to *some* list of values
/// (there is no integrity check), though only streams from [`encode`]
/// decode to meaningful numbers in `1..=300`. Trailing bits shorter
/// than one 9-bit field are treated as padding and dropped.
pub fn decode(bytes: &[u8]) -> Vec<i32> {
    let mut br = BitReader::new(bytes);
    let mut numbers = Vec::with_capacity(bytes.len() * 8 / bitio::VALUE_BITS as usize);
    while let Some(value) = br.read() {
        numbers.push(value as i32 + 1);
    }
    numbers
}
