//! Encoding of in-memory files.

use alloc::vec::Vec;
use flim_encode::{
    try_encode_surface, ConversionConfig, EncodeError, EncodeOutcome, EncodeResult,
    SurfaceReader, TileEngine,
};

/// Reads the first surface of `data` with `reader` and encodes it into a FLIM file.
///
/// [`ConversionConfig::srgb`] is passed on to the reader.
///
/// # Errors
///
/// [`EncodeError::SourceUnreadable`] if the reader rejects the file, any other
/// [`EncodeError`] from [`try_encode_surface`].
pub fn try_encode_slice<R, E>(
    reader: &R,
    engine: &E,
    data: &[u8],
    config: &ConversionConfig,
) -> EncodeResult<EncodeOutcome>
where
    R: SurfaceReader + ?Sized,
    E: TileEngine + ?Sized,
{
    let surface = reader.read_surface(data, config.srgb).map_err(|error| {
        tracing::warn!("Source file could not be read: {error}");
        EncodeError::SourceUnreadable
    })?;

    try_encode_surface(engine, &surface, config)
}

/// [`try_encode_slice`], returning an empty buffer if the file cannot be encoded.
///
/// The reason is logged at `warn` level.
pub fn encode_slice<R, E>(reader: &R, engine: &E, data: &[u8], config: &ConversionConfig) -> Vec<u8>
where
    R: SurfaceReader + ?Sized,
    E: TileEngine + ?Sized,
{
    match try_encode_slice(reader, engine, data, config) {
        Ok(outcome) => outcome.texture.into_bytes(),
        Err(error) => {
            tracing::warn!("File was not encoded: {error}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    /// RGBA8 file whose header claims `u32::MAX` x `u32::MAX` pixels.
    fn oversized_rgba8_dds() -> Vec<u8> {
        let mut dds = create_rgba8_dds(4, 4);
        dds[0x0C..0x14].fill(0xFF);
        dds
    }

    #[test]
    fn encodes_dds_slice() {
        let dds = create_rgba8_dds(4, 4);
        let outcome =
            try_encode_slice(&DdsSurfaceReader, &IdentityTileEngine, &dds, &ConversionConfig::default())
                .unwrap();

        assert_eq!(outcome.texture.payload(), &dds[DDS_HEADER_SIZE..]);
    }

    #[rstest]
    #[case::empty(Vec::new())]
    #[case::not_a_dds(vec![0xAB; 256])]
    #[case::truncated(create_rgba8_dds(4, 4)[..DDS_HEADER_SIZE + 3].to_vec())]
    #[case::overflowing_dimensions(oversized_rgba8_dds())]
    fn unreadable_input_is_source_unreadable(#[case] data: Vec<u8>) {
        let config = ConversionConfig::default();

        assert_eq!(
            try_encode_slice(&DdsSurfaceReader, &IdentityTileEngine, &data, &config),
            Err(EncodeError::SourceUnreadable)
        );
        assert!(encode_slice(&DdsSurfaceReader, &IdentityTileEngine, &data, &config).is_empty());
    }

    #[test]
    fn srgb_config_reaches_reader() {
        let dds = create_rgba8_dds(4, 4);
        let config = ConversionConfig {
            srgb: true,
            ..ConversionConfig::default()
        };

        let outcome = try_encode_slice(&DdsSurfaceReader, &IdentityTileEngine, &dds, &config).unwrap();

        assert_eq!(outcome.format, flim_encode::FlimFormat::Rgba8Srgb);
    }
}
