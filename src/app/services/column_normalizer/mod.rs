//! Per-format column normalisation
//!
//! - [`field_transforms`] - lenient single-field transforms
//! - [`recorder`] - CANrecorder V1/V2 rules applied in place
//! - [`analyst`] - CANalyst-II rules deriving canonical columns

pub mod analyst;
pub mod field_transforms;
pub mod recorder;

pub use field_transforms::{Lenient, lenient, lenient_column};
pub use recorder::NormalizeStats;
