//! Infrastructure layer - filesystem and raster adapters.
//!
//! This layer handles all I/O and pixel work.

pub mod artifact_writer;
pub mod config;
pub mod font;
pub mod raster;

pub use artifact_writer::write_artifact;
pub use config::{load_config, load_config_from_file};
pub use font::{system_sans, FontData};
pub use raster::{effective_scale, encode_png, paint_card, paint_card_with, CardLayout};
