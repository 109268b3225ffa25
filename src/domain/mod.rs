//! Domain layer - core types for the profile card.
//!
//! This layer contains pure data models, the theme palette table and error
//! types, without any IO.

pub mod config;
pub mod error;
pub mod profile;
pub mod snapshot;
pub mod theme;

pub use config::{AppConfig, ExportConfig, ThemeConfig};
pub use error::{AppError, Result};
pub use profile::{Link, LinkField, Profile, ProfileField};
pub use snapshot::{ExportSnapshot, LinkRecord, ProfileRecord, SCHEMA_VERSION};
pub use theme::{Color, ColorToken, Theme, ThemeId, ThemeTokens, FALLBACK_BACKGROUND, THEMES};
