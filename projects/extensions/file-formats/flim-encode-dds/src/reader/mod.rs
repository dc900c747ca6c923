//! [`SurfaceReader`] implementation for DDS files.

mod format_conversion;

use crate::dds::parse_dds;
use crate::error::{ReadError, ReadResult};
use format_conversion::{dds_format_channel_selector, dds_format_to_gx2};
use flim_encode::{ChannelSelector, FourCC, SurfaceDescriptor, SurfaceFormat, SurfaceReader};

/// Reads the first surface of a DDS file.
///
/// Supports legacy headers (FourCC and bit mask pixel formats) and DX10 headers. The whole
/// mip chain is returned in [`SurfaceDescriptor::pixel_data`];
/// [`SurfaceDescriptor::base_level_size`] covers mip level 0 only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdsSurfaceReader;

impl DdsSurfaceReader {
    /// Read the first surface of `data`.
    ///
    /// # Parameters
    ///
    /// - `data`: the whole DDS file
    /// - `srgb`: use the sRGB GX2 format where one exists. A DX10 header naming an sRGB
    ///   format sets this as well.
    ///
    /// # Errors
    ///
    /// See [`ReadError`]. A file whose pixel data is shorter than mip level 0 fails with
    /// [`ReadError::InputTooShort`]; one whose mip level 0 size overflows fails with
    /// [`ReadError::DimensionsTooLarge`].
    pub fn read(&self, data: &[u8], srgb: bool) -> ReadResult<SurfaceDescriptor> {
        let info = parse_dds(data)?;
        let srgb = srgb || info.srgb;

        let format_code = dds_format_to_gx2(info.format, srgb);
        let surface_format =
            SurfaceFormat::from_raw(format_code).ok_or(ReadError::UnknownFormat)?;

        let raw_selector = dds_format_channel_selector(info.format);
        let channel_selector = ChannelSelector::from_raw(raw_selector)
            .ok_or(ReadError::InvalidChannelSelector(raw_selector))?;

        let base_level_size = surface_format
            .level_size(info.width, info.height)
            .ok_or(ReadError::DimensionsTooLarge {
                width: info.width,
                height: info.height,
            })?;
        let pixel_data = &data[info.data_offset..];
        if pixel_data.len() < base_level_size {
            return Err(ReadError::InputTooShort {
                expected: info.data_offset.saturating_add(base_level_size),
                actual: data.len(),
            });
        }

        tracing::debug!(
            "Read {}x{} DDS surface: {:?} -> GX2 {format_code:#x}, selector {channel_selector}",
            info.width,
            info.height,
            info.format
        );

        Ok(SurfaceDescriptor {
            width: info.width,
            height: info.height,
            format_code,
            fourcc: FourCC(info.fourcc),
            channel_selector,
            mip_count: info.mip_count,
            base_level_size,
            pixel_data: pixel_data.to_vec(),
        })
    }
}

impl SurfaceReader for DdsSurfaceReader {
    type Error = ReadError;

    fn read_surface(&self, data: &[u8], srgb: bool) -> Result<SurfaceDescriptor, Self::Error> {
        self.read(data, srgb)
    }
}
