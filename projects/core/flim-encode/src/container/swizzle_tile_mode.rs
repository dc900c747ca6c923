use crate::config::{SwizzleValue, TileMode};
use bitfield::bitfield;

bitfield! {
    /// Packed swizzle and tile mode byte of the image descriptor.
    ///
    /// - Bits 0-4: Tile mode
    /// - Bits 5-7: Swizzle value
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SwizzleTileMode(u8);
    impl Debug;
    u8;

    /// Tile mode (5 bits)
    pub tile_mode_raw, set_tile_mode_raw: 4, 0;
    /// Swizzle value (3 bits)
    pub swizzle_raw, set_swizzle_raw: 7, 5;
}

impl SwizzleTileMode {
    /// Pack a swizzle value and tile mode.
    pub fn new(swizzle: SwizzleValue, tile_mode: TileMode) -> Self {
        let mut packed = Self::default();
        packed.set_tile_mode_raw(tile_mode.to_raw() as u8);
        packed.set_swizzle_raw(swizzle.get());
        packed
    }

    /// The tile mode stored in the byte.
    pub fn tile_mode(&self) -> Option<TileMode> {
        TileMode::from_raw(self.tile_mode_raw() as u32)
    }

    /// The packed byte.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self.0
    }
}
