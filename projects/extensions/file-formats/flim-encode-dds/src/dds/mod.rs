/// Shared constants between modules.
pub mod constants;

/// Parse the header of a DDS file.
pub mod parse_dds;

pub use parse_dds::*;
