//! Channel selectors and red/blue ordering correction.
//!
//! A channel selector describes, for each output component (R, G, B, A), which source
//! channel of the surface feeds it, or whether it is a constant 0 or 1. FLIM images expect
//! a fixed selector per format; [`validate_and_correct`] checks the observed selector
//! against that expectation and, when the only problem is swapped red and blue channels,
//! fixes the pixel data in place.

mod correct;
mod swap;

pub use correct::*;
pub use swap::*;

use core::fmt;

/// Source of a single output component.
///
/// The discriminants follow the GX2 component select convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentSource {
    /// Red channel of the source
    Red = 0,
    /// Green channel of the source
    Green = 1,
    /// Blue channel of the source
    Blue = 2,
    /// Alpha channel of the source
    Alpha = 3,
    /// Constant zero
    Zero = 4,
    /// Constant one
    One = 5,
}

impl ComponentSource {
    /// Convert from a raw component select value.
    ///
    /// Returns [`None`] for values above 5.
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            3 => Some(Self::Alpha),
            4 => Some(Self::Zero),
            5 => Some(Self::One),
            _ => None,
        }
    }

    /// Convert to the raw component select value.
    #[inline]
    pub fn to_raw(self) -> u8 {
        self as u8
    }
}

/// Selector for the four output components, in R, G, B, A order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelSelector(pub [ComponentSource; 4]);

impl ChannelSelector {
    /// `[R, G, B, A]`
    pub const RGBA: Self = Self::new([
        ComponentSource::Red,
        ComponentSource::Green,
        ComponentSource::Blue,
        ComponentSource::Alpha,
    ]);

    /// Create a selector from its four slots.
    pub const fn new(slots: [ComponentSource; 4]) -> Self {
        Self(slots)
    }

    /// Convert from raw component select values.
    ///
    /// Returns [`None`] if any value is out of range.
    pub fn from_raw(raw: [u8; 4]) -> Option<Self> {
        Some(Self([
            ComponentSource::from_raw(raw[0])?,
            ComponentSource::from_raw(raw[1])?,
            ComponentSource::from_raw(raw[2])?,
            ComponentSource::from_raw(raw[3])?,
        ]))
    }

    /// Convert to raw component select values.
    pub fn to_raw(self) -> [u8; 4] {
        self.0.map(ComponentSource::to_raw)
    }

    /// Source of the alpha output component.
    #[inline]
    pub fn alpha(self) -> ComponentSource {
        self.0[3]
    }

    /// Whether any slot is fed by the given source.
    #[inline]
    pub fn contains(self, source: ComponentSource) -> bool {
        self.0.contains(&source)
    }
}

impl fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_raw();
        write!(f, "[{r}, {g}, {b}, {a}]")
    }
}
