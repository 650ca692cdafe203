//! Row scheduling for kernels
//!
//! Kernels process one block of rows at a time; these helpers hand matching
//! input/output blocks to them, on the rayon pool when the client's
//! threshold is met and sequentially otherwise.

use super::super::CpuClient;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Run `f` over matching blocks of `src` and `dst`
///
/// `src` is split into chunks of `src_block` elements and `dst` into chunks
/// of `dst_block`; the i-th chunks are passed together. Zero block sizes are
/// a no-op.
pub(crate) fn for_each_block<S, D, F>(
    client: &CpuClient,
    src: &[S],
    src_block: usize,
    dst: &mut [D],
    dst_block: usize,
    f: F,
) where
    S: Sync,
    D: Send,
    F: Fn(&[S], &mut [D]) + Sync + Send,
{
    if src_block == 0 || dst_block == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    {
        if client.use_parallel(dst.len() / dst_block) {
            src.par_chunks(src_block)
                .zip(dst.par_chunks_mut(dst_block))
                .for_each(|(s, d)| f(s, d));
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    for (s, d) in src.chunks(src_block).zip(dst.chunks_mut(dst_block)) {
        f(s, d);
    }
}

/// Like [`for_each_block`], with two outputs sharing one block size
pub(crate) fn for_each_block_pair<S, D, E, F>(
    client: &CpuClient,
    src: &[S],
    block: usize,
    dst_a: &mut [D],
    dst_b: &mut [E],
    f: F,
) where
    S: Sync,
    D: Send,
    E: Send,
    F: Fn(&[S], &mut [D], &mut [E]) + Sync + Send,
{
    if block == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    {
        if client.use_parallel(src.len() / block) {
            src.par_chunks(block)
                .zip(dst_a.par_chunks_mut(block))
                .zip(dst_b.par_chunks_mut(block))
                .for_each(|((s, a), b)| f(s, a, b));
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    for ((s, a), b) in src
        .chunks(block)
        .zip(dst_a.chunks_mut(block))
        .zip(dst_b.chunks_mut(block))
    {
        f(s, a, b);
    }
}
