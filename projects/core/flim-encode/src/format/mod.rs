//! Surface format definitions and GX2 → FLIM format translation.

mod flim_format;
mod surface_format;
mod translate;

pub use flim_format::*;
pub use surface_format::*;
pub use translate::*;
