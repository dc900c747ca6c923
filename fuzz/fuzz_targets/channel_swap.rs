#![no_main]

// This fuzz test checks that every red/blue swap is its own inverse.

use flim_encode::channel::ChannelSwap;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub enum Swap {
    Rgb565,
    Rgb5a1,
    Argb4,
    Rgba8,
    Bgr10a2,
}

impl From<Swap> for ChannelSwap {
    fn from(swap: Swap) -> Self {
        match swap {
            Swap::Rgb565 => ChannelSwap::Rgb565,
            Swap::Rgb5a1 => ChannelSwap::Rgb5a1,
            Swap::Argb4 => ChannelSwap::Argb4,
            Swap::Rgba8 => ChannelSwap::Rgba8,
            Swap::Bgr10a2 => ChannelSwap::Bgr10a2,
        }
    }
}

fuzz_target!(|input: (Swap, Vec<u8>)| {
    let (swap, original) = input;
    let swap = ChannelSwap::from(swap);

    let mut data = original.clone();
    swap.apply(&mut data);
    swap.apply(&mut data);

    assert_eq!(data, original, "Applying {swap:?} twice changed the data");
});
