//! Export of the card as a structured snapshot or a PNG image.
//!
//! The two exports share no state. The JSON export is synchronous and
//! deterministic. The raster export is asynchronous: it clones the view at
//! the moment it is called, paints and encodes on a blocking worker, and
//! either returns the whole artifact or a single error.

use crate::domain::{
    AppError, Color, ExportSnapshot, Profile, Result, FALLBACK_BACKGROUND, SCHEMA_VERSION,
};
use crate::infrastructure::raster::{effective_scale, encode_png, paint_card};

use super::renderer::CardView;
use super::theme_engine::ThemeContext;

pub const JSON_FILE_NAME: &str = "profile-card.json";
pub const PNG_FILE_NAME: &str = "profile-card.png";

/// A produced export, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Replace the default file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

/// Options for the raster export.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterOptions {
    /// Device pixel ratio, if one is known.
    pub pixel_ratio: Option<f32>,
}

/// Serialize the theme key and profile as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn export_json(theme_key: &str, profile: &Profile) -> Result<Artifact> {
    let snapshot = ExportSnapshot::capture(theme_key, profile);
    let bytes = serde_json::to_vec_pretty(&snapshot).map_err(AppError::json)?;

    tracing::info!(
        theme = theme_key,
        links = profile.links.len(),
        bytes = bytes.len(),
        "JSON export created"
    );

    Ok(Artifact {
        file_name: JSON_FILE_NAME.to_string(),
        media_type: "application/json",
        bytes,
    })
}

/// Read a JSON export back.
///
/// Documents without a `version` key are version 1. Newer versions than
/// [`SCHEMA_VERSION`] are refused rather than read partially.
///
/// # Errors
/// Returns error if the bytes are not a valid export document or carry an
/// unsupported version.
pub fn decode_json(bytes: &[u8]) -> Result<ExportSnapshot> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(AppError::json)?;

    let version = match value.get("version") {
        None => 1,
        Some(v) => v.as_u64().ok_or_else(|| AppError::InvalidInput {
            message: format!("export version must be a positive integer, got {v}"),
        })?,
    };
    if version == 0 || version > u64::from(SCHEMA_VERSION) {
        return Err(AppError::InvalidInput {
            message: format!(
                "export version {version} is not supported (this build reads up to {SCHEMA_VERSION})"
            ),
        });
    }

    serde_json::from_value(value).map_err(AppError::json)
}

/// Background used to fill transparent pixels: the live `--sm-bg` variable,
/// or the fixed default when it is missing or unreadable.
#[must_use]
pub fn raster_background(theme: &ThemeContext) -> Color {
    theme
        .scope()
        .get("--sm-bg")
        .and_then(Color::parse_hex)
        .unwrap_or(FALLBACK_BACKGROUND)
}

/// Capture the rendered view as a PNG.
///
/// `view` is `None` when no rendered surface is attached.
///
/// # Errors
/// Returns a raster export error when no view is attached, the surface is
/// too large, or encoding fails. No partial artifact is ever returned.
pub async fn export_raster(
    view: Option<&CardView>,
    theme: &ThemeContext,
    options: RasterOptions,
) -> Result<Artifact> {
    let result = capture(view, theme, options).await;
    if let Err(ref e) = result {
        tracing::error!(error = %e, "PNG export failed");
    }
    result
}

async fn capture(
    view: Option<&CardView>,
    theme: &ThemeContext,
    options: RasterOptions,
) -> Result<Artifact> {
    let view = view
        .cloned()
        .ok_or_else(|| AppError::raster("no rendered surface attached"))?;
    let scale = effective_scale(options.pixel_ratio);
    let background = raster_background(theme);

    let bytes = tokio::task::spawn_blocking(move || {
        let image = paint_card(&view, scale, background)?;
        encode_png(&image)
    })
    .await
    .map_err(|e| AppError::raster_from("capture worker stopped", e))??;

    tracing::info!(scale, bytes = bytes.len(), "PNG export created");

    Ok(Artifact {
        file_name: PNG_FILE_NAME.to_string(),
        media_type: "image/png",
        bytes,
    })
}
