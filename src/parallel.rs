use log::debug;
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSlice;

use crate::checksum::{self, Checksum, SEED};

///
/// Checksums `content` in `chunk_size` pieces on the rayon pool and stitches the pieces back
/// together with [`checksum::combine`]
///
/// ```
/// use rolling_adler32::checksum::sum;
/// use rolling_adler32::parallel::sum_parallel;
///
/// let content: Vec<u8> = (0..10_000).map(|x| x as u8).collect();
/// assert_eq!(sum_parallel(&content, 1 << 10), sum(&content));
/// ```
pub fn sum_parallel(content: &[u8], chunk_size: usize) -> Checksum {
    if chunk_size == 0 || content.len() <= chunk_size {
        return checksum::sum(content);
    }

    let partial_sums: Vec<(Checksum, usize)> = content
        .par_chunks(chunk_size)
        .map(|chunk| (checksum::sum(chunk), chunk.len()))
        .collect();
    debug!(
        "content len: {}; combining {} partial sums of chunk size {}",
        content.len(),
        partial_sums.len(),
        chunk_size
    );

    // combining is sequential, order matters
    partial_sums
        .into_iter()
        .fold(SEED, |acc, (partial, len)| checksum::combine(acc, partial, len as u64))
}
