//! Adler-32 arithmetic: plain functions over packed `u32` checksums.
//!
//! A checksum is two 16 bit halves packed as `(b << 16) | a` where `a` is
//! `1 + sum(bytes)` and `b` is the sum of every intermediate `a`, both modulo [`BASE`].

/// Packed Adler-32 value, `b` in the high half and `a` in the low half.
pub type Checksum = u32;

/// Largest prime below 2^16.
pub const BASE: u32 = 65521;

/// Largest n such that 255n(n+1)/2 + (n+1)(BASE-1) <= 2^32-1, i.e. how many bytes can be
/// accumulated in `u32` before `a` and `b` have to be reduced.
pub const NMAX: usize = 5552;

/// Checksum of the empty sequence (`a = 1`, `b = 0`).
pub const SEED: Checksum = 1;

/// How the window moves in [`roll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roll {
    /// Drop the leading `old` byte and append `new` at the end, keeping the length.
    Shift { old: u8, new: u8 },
    /// Drop the leading `old` byte only, the window gets one byte shorter.
    Shrink { old: u8 },
}

impl Roll {
    pub fn old(&self) -> u8 {
        match *self {
            Roll::Shift { old, .. } | Roll::Shrink { old } => old,
        }
    }
}

#[inline]
pub fn pack(a: u32, b: u32) -> Checksum {
    (b << 16) | a
}

#[inline]
pub fn unpack(checksum: Checksum) -> (u32, u32) {
    (checksum & 0xFFFF, checksum >> 16)
}

/// Big-endian digest bytes of a checksum, `b` first.
#[inline]
pub fn to_be_bytes(checksum: Checksum) -> [u8; 4] {
    checksum.to_be_bytes()
}

///
/// Computes the Adler-32 checksum of `bytes`
///
/// ```
/// use rolling_adler32::checksum::sum;
///
/// assert_eq!(sum(b"Wikipedia"), 0x11E6_0398);
/// assert_eq!(sum(b""), 1);
/// ```
pub fn sum(bytes: &[u8]) -> Checksum {
    resume(SEED, bytes)
}

///
/// Continues a checksum previously returned by [`sum`] or [`resume`] over the bytes that follow
///
/// ```
/// use rolling_adler32::checksum::{resume, sum};
///
/// let partial = sum(b"Wiki");
/// assert_eq!(resume(partial, b"pedia"), sum(b"Wikipedia"));
/// ```
pub fn resume(initial: Checksum, bytes: &[u8]) -> Checksum {
    if bytes.is_empty() {
        return initial;
    }

    let (mut a, mut b) = unpack(initial);
    for chunk in bytes.chunks(NMAX) {
        for &byte in chunk {
            a += u32::from(byte);
            b += a;
        }
        a %= BASE;
        b %= BASE;
    }

    pack(a, b)
}

///
/// Checksum of `R1 ++ R2` given `sum(R1)`, `sum(R2)` and the length of `R2`
///
/// Both inputs carry the seed, so one of them is taken back out of `a`, and every byte of `R2`
/// sees `R1`'s bytes (without the seed) once more in `b`.
///
/// ```
/// use rolling_adler32::checksum::{combine, sum};
///
/// assert_eq!(combine(sum(b"Wiki"), sum(b"pedia"), 5), sum(b"Wikipedia"));
/// ```
pub fn combine(first: Checksum, second: Checksum, second_len: u64) -> Checksum {
    let (a1, b1) = unpack(first);
    let (a2, b2) = unpack(second);
    let second_len = (second_len % u64::from(BASE)) as u32;

    // a1 - 1 and second_len are both below BASE, the product fits
    let carried = (second_len * ((a1 + BASE - 1) % BASE)) % BASE;

    let a = (a1 + a2 + BASE - 1) % BASE;
    let b = (b1 + b2 + carried) % BASE;

    pack(a, b)
}

///
/// Moves the checksum of a `window_len` byte window forward by one byte without rescanning it
///
/// `window_len` is the length the incoming checksum covers, before the roll.
///
/// ```
/// use rolling_adler32::checksum::{roll, sum, Roll};
///
/// let data = b"rolling window";
/// let rolled = roll(sum(&data[..7]), 7, Roll::Shift { old: data[0], new: data[7] });
/// assert_eq!(rolled, sum(&data[1..8]));
///
/// let shrunk = roll(sum(&data[..7]), 7, Roll::Shrink { old: data[0] });
/// assert_eq!(shrunk, sum(&data[1..7]));
/// ```
pub fn roll(checksum: Checksum, window_len: u64, step: Roll) -> Checksum {
    let (a, b) = unpack(checksum);
    let old = u32::from(step.old());
    let removed = (((window_len % u64::from(BASE)) as u32) * old) % BASE;

    // every subtraction is offset by BASE so the operands never go negative
    match step {
        Roll::Shift { new, .. } => {
            let a = (a + BASE - old + u32::from(new)) % BASE;
            let b = (b + BASE - removed + a + BASE - 1) % BASE;
            pack(a, b)
        }
        Roll::Shrink { .. } => {
            let a = (a + BASE - old) % BASE;
            let b = (b + 2 * BASE - removed - 1) % BASE;
            pack(a, b)
        }
    }
}
