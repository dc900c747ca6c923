//! Per-conversion settings.

/// GX2 tile mode of the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TileMode {
    /// Driver picks the mode.
    Default = 0,
    /// Linear, pitch aligned.
    LinearAligned = 1,
    /// 1D tiled, thin.
    Tiled1DThin1 = 2,
    /// 1D tiled, thick.
    Tiled1DThick = 3,
    /// 2D tiled, thin.
    #[default]
    Tiled2DThin1 = 4,
    /// 2D tiled, thin2.
    Tiled2DThin2 = 5,
    /// 2D tiled, thin4.
    Tiled2DThin4 = 6,
    /// 2D tiled, thick.
    Tiled2DThick = 7,
    /// 2B tiled, thin.
    Tiled2BThin1 = 8,
    /// 2B tiled, thin2.
    Tiled2BThin2 = 9,
    /// 2B tiled, thin4.
    Tiled2BThin4 = 10,
    /// 2B tiled, thick.
    Tiled2BThick = 11,
    /// 3D tiled, thin.
    Tiled3DThin1 = 12,
    /// 3D tiled, thick.
    Tiled3DThick = 13,
    /// 3B tiled, thin.
    Tiled3BThin1 = 14,
    /// 3B tiled, thick.
    Tiled3BThick = 15,
    /// Linear, no alignment requirements.
    LinearSpecial = 16,
}

impl TileMode {
    /// Convert from a raw GX2 tile mode.
    ///
    /// Returns [`None`] for values above 16.
    pub fn from_raw(value: u32) -> Option<Self> {
        Some(match value {
            0 => Self::Default,
            1 => Self::LinearAligned,
            2 => Self::Tiled1DThin1,
            3 => Self::Tiled1DThick,
            4 => Self::Tiled2DThin1,
            5 => Self::Tiled2DThin2,
            6 => Self::Tiled2DThin4,
            7 => Self::Tiled2DThick,
            8 => Self::Tiled2BThin1,
            9 => Self::Tiled2BThin2,
            10 => Self::Tiled2BThin4,
            11 => Self::Tiled2BThick,
            12 => Self::Tiled3DThin1,
            13 => Self::Tiled3DThick,
            14 => Self::Tiled3BThin1,
            15 => Self::Tiled3BThick,
            16 => Self::LinearSpecial,
            _ => return None,
        })
    }

    /// Like [`TileMode::from_raw`], but out of range values become [`TileMode::default`].
    pub fn from_raw_or_default(value: u32) -> Self {
        Self::from_raw(value).unwrap_or_default()
    }

    /// Convert to the raw GX2 tile mode.
    #[inline]
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    /// Whether the surface swizzle register takes the swizzle value without the 2D/3D bank bits.
    pub fn is_linear_or_1d(self) -> bool {
        matches!(
            self,
            Self::LinearAligned | Self::Tiled1DThin1 | Self::Tiled1DThick | Self::LinearSpecial
        )
    }
}

/// Swizzle value, `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwizzleValue(u8);

impl SwizzleValue {
    /// Largest accepted swizzle value.
    pub const MAX: u8 = 7;

    /// Returns [`None`] if `value` is above [`SwizzleValue::MAX`].
    pub fn new(value: u32) -> Option<Self> {
        (value <= Self::MAX as u32).then_some(Self(value as u8))
    }

    /// Like [`SwizzleValue::new`], but out of range values become 0.
    pub fn from_raw_or_default(value: u32) -> Self {
        Self::new(value).unwrap_or_default()
    }

    /// The raw swizzle value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Settings for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConversionConfig {
    /// Tile mode of the output surface.
    pub tile_mode: TileMode,
    /// Swizzle value stored in the image descriptor.
    pub swizzle: SwizzleValue,
    /// Treat colour data as sRGB. Only consumed by [`crate::SurfaceReader`] implementations.
    pub srgb: bool,
}

impl ConversionConfig {
    /// Build a config from raw values, falling back to defaults for anything out of range.
    pub fn from_raw(tile_mode: u32, swizzle: u32, srgb: bool) -> Self {
        Self {
            tile_mode: TileMode::from_raw_or_default(tile_mode),
            swizzle: SwizzleValue::from_raw_or_default(swizzle),
            srgb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn defaults_are_2d_tiled_thin1_and_swizzle_zero() {
        let config = ConversionConfig::default();
        assert_eq!(config.tile_mode, TileMode::Tiled2DThin1);
        assert_eq!(config.tile_mode.to_raw(), 4);
        assert_eq!(config.swizzle.get(), 0);
        assert!(!config.srgb);
    }

    #[test]
    fn tile_mode_from_raw_covers_whole_range() {
        for raw in 0..=16 {
            assert_eq!(TileMode::from_raw(raw).unwrap().to_raw(), raw);
        }
        assert_eq!(TileMode::from_raw(17), None);
    }

    #[rstest]
    #[case(17, 9, TileMode::Tiled2DThin1, 0)]
    #[case(u32::MAX, 8, TileMode::Tiled2DThin1, 0)]
    #[case(16, 7, TileMode::LinearSpecial, 7)]
    #[case(1, 3, TileMode::LinearAligned, 3)]
    fn from_raw_falls_back_to_defaults(
        #[case] tile_mode: u32,
        #[case] swizzle: u32,
        #[case] expected_mode: TileMode,
        #[case] expected_swizzle: u8,
    ) {
        let config = ConversionConfig::from_raw(tile_mode, swizzle, true);
        assert_eq!(config.tile_mode, expected_mode);
        assert_eq!(config.swizzle.get(), expected_swizzle);
        assert!(config.srgb);
    }

    #[test]
    fn strict_swizzle_rejects_out_of_range() {
        assert_eq!(SwizzleValue::new(8), None);
        assert_eq!(SwizzleValue::new(7).map(SwizzleValue::get), Some(7));
    }

    #[rstest]
    #[case(TileMode::LinearAligned, true)]
    #[case(TileMode::Tiled1DThin1, true)]
    #[case(TileMode::Tiled1DThick, true)]
    #[case(TileMode::LinearSpecial, true)]
    #[case(TileMode::Default, false)]
    #[case(TileMode::Tiled2DThin1, false)]
    #[case(TileMode::Tiled3BThick, false)]
    fn linear_or_1d_modes(#[case] mode: TileMode, #[case] expected: bool) {
        assert_eq!(mode.is_linear_or_1d(), expected);
    }
}
