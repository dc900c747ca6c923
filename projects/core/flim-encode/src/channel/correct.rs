//! Validation of channel selectors against the ordering each FLIM format expects.

use super::{ChannelSelector, ChannelSwap};
use crate::format::FlimFormat;
use thiserror::Error;

use super::ComponentSource::{Alpha, Blue, Green, One, Red};

const L8_PATTERNS: &[ChannelSelector] = &[
    ChannelSelector::new([Red, Red, Red, One]),
    ChannelSelector::new([Red, One, One, One]),
];
const A8_PATTERNS: &[ChannelSelector] = &[ChannelSelector::new([One, One, One, Red])];
const LA_PATTERNS: &[ChannelSelector] = &[
    ChannelSelector::new([Red, Red, Red, Green]),
    ChannelSelector::new([Red, One, One, Green]),
];
const RGBX: ChannelSelector = ChannelSelector::new([Red, Green, Blue, One]);
const BGRX: ChannelSelector = ChannelSelector::new([Blue, Green, Red, One]);
const RGBA: ChannelSelector = ChannelSelector::new([Red, Green, Blue, Alpha]);
const BGRA: ChannelSelector = ChannelSelector::new([Blue, Green, Red, Alpha]);

/// The channel ordering a FLIM format expects from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelExpectation {
    /// The selector must be one of these patterns; there is no automatic fix.
    OneOf(&'static [ChannelSelector]),
    /// The selector must be `expected`; `swapped` is fixed by applying `swap` to the data.
    Swappable {
        /// Pattern accepted as-is.
        expected: ChannelSelector,
        /// Pattern with red and blue exchanged.
        swapped: ChannelSelector,
        /// Data transform that turns `swapped` data into `expected` data.
        swap: ChannelSwap,
    },
    /// The selector is not checked (block-compressed formats).
    Unchecked,
}

impl ChannelExpectation {
    /// Expected channel ordering for a FLIM format.
    pub fn for_format(format: FlimFormat) -> Self {
        match format {
            FlimFormat::L8 => Self::OneOf(L8_PATTERNS),
            FlimFormat::A8 => Self::OneOf(A8_PATTERNS),
            FlimFormat::La4 | FlimFormat::La8 => Self::OneOf(LA_PATTERNS),
            FlimFormat::Rgb565 => Self::Swappable {
                expected: BGRX,
                swapped: RGBX,
                swap: ChannelSwap::Rgb565,
            },
            FlimFormat::Rgb8 => Self::Swappable {
                expected: RGBX,
                swapped: BGRX,
                swap: ChannelSwap::Rgba8,
            },
            FlimFormat::Rgb5a1 => Self::Swappable {
                expected: RGBA,
                swapped: BGRA,
                swap: ChannelSwap::Rgb5a1,
            },
            FlimFormat::Rgba4 => Self::Swappable {
                expected: BGRA,
                swapped: RGBA,
                swap: ChannelSwap::Argb4,
            },
            FlimFormat::Rgba8 | FlimFormat::Rgba8Srgb => Self::Swappable {
                expected: RGBA,
                swapped: BGRA,
                swap: ChannelSwap::Rgba8,
            },
            FlimFormat::Rgb10a2 => Self::Swappable {
                expected: RGBA,
                swapped: BGRA,
                swap: ChannelSwap::Bgr10a2,
            },
            FlimFormat::Etc1
            | FlimFormat::Bc1
            | FlimFormat::Bc2
            | FlimFormat::Bc3
            | FlimFormat::Bc4A
            | FlimFormat::Bc5
            | FlimFormat::Bc1Srgb
            | FlimFormat::Bc2Srgb
            | FlimFormat::Bc3Srgb => Self::Unchecked,
        }
    }
}

/// Non-fatal channel ordering problem; the conversion continues with uncorrected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelWarning {
    /// The selector matches neither the expected ordering nor its red/blue swapped form.
    #[error("Channel selector {observed} does not match what {format:?} expects, colors may be incorrect")]
    ChannelMismatch {
        /// FLIM format being encoded
        format: FlimFormat,
        /// Selector read from the source surface
        observed: ChannelSelector,
    },
}

/// What [`validate_and_correct`] did to the pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCorrection {
    /// The selector matched; data is unchanged.
    Matched,
    /// Red and blue were exchanged using the given swap.
    Swapped(ChannelSwap),
    /// The selector did not match; data is unchanged.
    Mismatch(ChannelWarning),
}

impl ChannelCorrection {
    /// The warning, if the selector did not match.
    pub fn warning(self) -> Option<ChannelWarning> {
        match self {
            Self::Mismatch(warning) => Some(warning),
            _ => None,
        }
    }
}

/// Checks `selector` against the ordering `format` expects, fixing `pixels` in place
/// when red and blue are swapped.
///
/// # Parameters
///
/// - `format`: FLIM format the pixels are being encoded to
/// - `selector`: channel selector of the source surface
/// - `pixels`: base level pixel data, modified in place on a red/blue swap
///
/// # Returns
///
/// - [`ChannelCorrection::Matched`] when the selector is accepted as-is
/// - [`ChannelCorrection::Swapped`] when red and blue were exchanged in `pixels`
/// - [`ChannelCorrection::Mismatch`] when the colors may come out wrong. This is logged at
///   `warn` level, `pixels` are left alone and encoding should still proceed.
pub fn validate_and_correct(
    format: FlimFormat,
    selector: ChannelSelector,
    pixels: &mut [u8],
) -> ChannelCorrection {
    let correction = match ChannelExpectation::for_format(format) {
        ChannelExpectation::Unchecked => ChannelCorrection::Matched,
        ChannelExpectation::OneOf(patterns) if patterns.contains(&selector) => {
            ChannelCorrection::Matched
        }
        ChannelExpectation::Swappable { expected, .. } if expected == selector => {
            ChannelCorrection::Matched
        }
        ChannelExpectation::Swappable { swapped, swap, .. } if swapped == selector => {
            swap.apply(pixels);
            ChannelCorrection::Swapped(swap)
        }
        _ => ChannelCorrection::Mismatch(ChannelWarning::ChannelMismatch {
            format,
            observed: selector,
        }),
    };

    match correction {
        ChannelCorrection::Swapped(swap) => {
            tracing::debug!("Swapped red and blue channels for {format:?} using {swap:?}");
        }
        ChannelCorrection::Mismatch(warning) => tracing::warn!("{warning}"),
        ChannelCorrection::Matched => {}
    }

    correction
}
