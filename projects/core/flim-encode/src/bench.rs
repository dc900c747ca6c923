//! Re-exports of internal routines for benchmarking.
#![allow(missing_docs)]

pub use crate::channel::ChannelSwap;

#[inline(always)]
pub fn swap_channels(swap: ChannelSwap, data: &mut [u8]) {
    swap.apply(data)
}
