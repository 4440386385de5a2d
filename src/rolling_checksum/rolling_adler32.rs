use super::RollingChecksum;
use crate::checksum::{self, Checksum, Roll};

/// Adler-32 over a window that can grow at the back and shrink at the front
#[derive(Debug, Clone, Copy)]
pub struct RollingAdler32 {
    checksum: Checksum,
    window_len: usize,
}

impl RollingAdler32 {
    pub fn window_len(&self) -> usize {
        self.window_len
    }
}

impl RollingChecksum for RollingAdler32 {
    type ChecksumType = Checksum;

    fn new(initial_window: &[u8]) -> Self {
        RollingAdler32 {
            checksum: checksum::sum(initial_window),
            window_len: initial_window.len(),
        }
    }

    fn checksum(&self) -> Self::ChecksumType {
        self.checksum
    }

    fn push_byte(&mut self, new_byte: u8) {
        self.checksum = checksum::resume(self.checksum, &[new_byte]);
        self.window_len += 1;
    }

    fn pop_byte(&mut self, old_byte: u8, bytes_ago: usize) {
        self.checksum = checksum::roll(self.checksum, bytes_ago as u64, Roll::Shrink { old: old_byte });
        self.window_len = self.window_len.saturating_sub(1);
    }

    fn slide_window(&mut self, old_byte: u8, new_byte: u8) {
        self.checksum = checksum::roll(
            self.checksum,
            self.window_len as u64,
            Roll::Shift {
                old: old_byte,
                new: new_byte,
            },
        );
    }
}

/// Iterator over the checksum of every full `window_size` window of some content
pub struct Windows<'a> {
    content: &'a [u8],
    window_size: usize,
    next_start: usize,
    rolling: Option<RollingAdler32>,
}

///
/// Yields `(offset, checksum)` for each window of `window_size` bytes, first computed from
/// scratch and then rolled one byte at a time
///
/// ```
/// use rolling_adler32::checksum::sum;
/// use rolling_adler32::rolling_checksum::rolling_adler32::windows;
///
/// let content = b"abcdefgh";
/// let all: Vec<_> = windows(content, 3).collect();
///
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[5], (5, sum(b"fgh")));
/// // nothing fits
/// assert_eq!(windows(content, 9).count(), 0);
/// ```
pub fn windows(content: &[u8], window_size: usize) -> Windows<'_> {
    Windows {
        content,
        window_size,
        next_start: 0,
        rolling: None,
    }
}

impl<'a> Windows<'a> {
    /// Number of windows left to yield
    fn remaining(&self) -> usize {
        if self.window_size == 0 || self.window_size > self.content.len() {
            return 0;
        }
        (self.content.len() - self.window_size + 1).saturating_sub(self.next_start)
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = (usize, Checksum);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let start = self.next_start;
        let rolling = match self.rolling {
            None => RollingAdler32::new(&self.content[..self.window_size]),
            Some(mut rolling) => {
                rolling.slide_window(
                    self.content[start - 1],
                    self.content[start + self.window_size - 1],
                );
                rolling
            }
        };
        self.rolling = Some(rolling);
        let checksum = rolling.checksum();
        self.next_start += 1;

        Some((start, checksum))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Windows<'a> {}
