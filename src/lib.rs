//! Adler-32 checksums that can be resumed, combined and rolled across a sliding window.
//!
//! Adler-32 is not a cryptographic hash, it only catches accidental corruption.

pub mod checksum;
pub mod error;
pub mod parallel;
pub mod registry;
pub mod rolling_checksum;
pub mod streaming;

pub use checksum::{combine, resume, roll, sum, Checksum, Roll, BASE, SEED};
pub use error::{Error, Result};

#[cfg(test)]
mod test {
    use crate::checksum::tests::pseudo_random_bytes;
    use crate::parallel::sum_parallel;
    use crate::rolling_checksum::rolling_adler32::windows;

    use super::*;

    const CONTENT_LEN: usize = 32 * 1024;
    const WINDOW_SIZE: usize = 4096;

    #[test]
    fn test_whole_halves_and_rolled_windows_agree() {
        let content = pseudo_random_bytes(CONTENT_LEN, 0xAD1E);
        let reference = adler32::adler32(content.as_slice()).unwrap();

        let whole = sum(&content);
        assert_eq!(whole, reference);

        let (head, tail) = content.split_at(CONTENT_LEN / 2);
        assert_eq!(resume(sum(head), tail), whole);
        assert_eq!(combine(sum(head), sum(tail), tail.len() as u64), whole);
        assert_eq!(sum_parallel(&content, WINDOW_SIZE), whole);

        let mut window_count = 0;
        for (offset, rolled) in windows(&content, WINDOW_SIZE) {
            let window = &content[offset..offset + WINDOW_SIZE];
            assert_eq!(rolled, sum(window), "window at {}", offset);
            assert_eq!(rolled, adler32::RollingAdler32::from_buffer(window).hash());
            window_count += 1;
        }
        assert_eq!(window_count, CONTENT_LEN - WINDOW_SIZE + 1);

        // stitching every window-sized block back together gives the whole sum
        let stitched = content
            .chunks(WINDOW_SIZE)
            .fold(SEED, |acc, block| combine(acc, sum(block), block.len() as u64));
        assert_eq!(stitched, whole);
    }

    #[test]
    fn test_roll_then_shrink_to_the_end() {
        let content = pseudo_random_bytes(CONTENT_LEN, 0xBEEF);
        let mut checksum = sum(&content[..WINDOW_SIZE]);

        for start in 1..=CONTENT_LEN {
            let end = (start + WINDOW_SIZE).min(CONTENT_LEN);
            let window_len = (start - 1 + WINDOW_SIZE).min(CONTENT_LEN) - (start - 1);
            let step = if start - 1 + WINDOW_SIZE < CONTENT_LEN {
                Roll::Shift {
                    old: content[start - 1],
                    new: content[start - 1 + WINDOW_SIZE],
                }
            } else {
                Roll::Shrink { old: content[start - 1] }
            };
            checksum = roll(checksum, window_len as u64, step);
            assert_eq!(checksum, sum(&content[start..end]), "window at {}", start);
        }
        assert_eq!(checksum, SEED);
    }
}
