//! Application layer - the card's state, rendering and export.
//!
//! This layer owns the profile store, theme engine, card renderer and the
//! two exporters.

pub mod exporter;
pub mod formatter;
pub mod profile_store;
pub mod renderer;
pub mod theme_engine;

pub use exporter::{
    decode_json, export_json, export_raster, raster_background, Artifact, RasterOptions,
};
pub use formatter::{format_card_text, format_themes_table};
pub use profile_store::{IgnoreReason, Mutation, ProfileStore};
pub use renderer::{render, Avatar, CardView, LinkView};
pub use theme_engine::{resolve, StyleScope, ThemeContext, ThemeEngine};
