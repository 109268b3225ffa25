//! CLI interface using clap.
//!
//! Flags map one-to-one onto the profile editing and theme selection
//! operations; subcommands preview or export the resulting card.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Profile Card - compose a profile card, preview it and export it as PNG or JSON.
#[derive(Parser, Debug)]
#[command(name = "profile-card")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.profile-card/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available themes and their color tokens.
    Themes {
        /// Theme to mark as active.
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Print a text preview of the card.
    Preview {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Export the card as PNG and/or JSON.
    Export {
        #[command(flatten)]
        card: CardArgs,

        /// What to export: png, json, or all.
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Output directory (overrides the configured one).
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Device pixel ratio for the PNG (defaults to 2 when unknown).
        #[arg(long)]
        pixel_ratio: Option<f32>,
    },
}

/// Card content and theme, applied in order: snapshot, fields, links, removals.
#[derive(Args, Debug, Default)]
pub struct CardArgs {
    /// Start from a previously exported JSON snapshot.
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Theme key (SoftMono, WarmMono, DeepMono).
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Display name, e.g. "Jane Doe".
    #[arg(long)]
    pub name: Option<String>,

    /// Title, e.g. "Product Designer".
    #[arg(long)]
    pub title: Option<String>,

    /// Short bio.
    #[arg(long)]
    pub bio: Option<String>,

    /// Avatar image URL.
    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Append a link as LABEL=URL (repeatable).
    #[arg(short, long = "link", value_parser = parse_link)]
    pub links: Vec<(String, String)>,

    /// Remove the link at INDEX (repeatable, applied in order).
    #[arg(long = "remove-link")]
    pub remove_links: Vec<usize>,
}

/// Which artifacts to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Json,
    #[default]
    All,
}

impl ExportFormat {
    #[must_use]
    pub const fn includes_png(self) -> bool {
        matches!(self, Self::Png | Self::All)
    }

    #[must_use]
    pub const fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::All)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "json" => Ok(Self::Json),
            "all" | "both" => Ok(Self::All),
            _ => Err(format!("Unknown format: {s}. Use: png, json, all")),
        }
    }
}

/// Parse `LABEL=URL`. Without `=`, the whole value is the label.
fn parse_link(value: &str) -> Result<(String, String), String> {
    Ok(value.split_once('=').map_or_else(
        || (value.to_string(), String::new()),
        |(label, url)| (label.to_string(), url.to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link() {
        assert_eq!(
            parse_link("GitHub=https://github.com/jane?tab=repos"),
            Ok(("GitHub".into(), "https://github.com/jane?tab=repos".into()))
        );
        assert_eq!(parse_link("Blog"), Ok(("Blog".into(), String::new())));
        assert_eq!(parse_link("=https://x"), Ok((String::new(), "https://x".into())));
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("PNG".parse::<ExportFormat>(), Ok(ExportFormat::Png));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("all".parse::<ExportFormat>(), Ok(ExportFormat::All));
        assert!("svg".parse::<ExportFormat>().is_err());
        assert!(ExportFormat::All.includes_png() && ExportFormat::All.includes_json());
        assert!(!ExportFormat::Json.includes_png());
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from([
            "profile-card",
            "-vv",
            "export",
            "--name",
            "Jane Doe",
            "--link",
            "GitHub=https://github.com/jane",
            "--link",
            "Blog=https://jane.dev",
            "--remove-link",
            "0",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Export { card, format, .. } => {
                assert_eq!(card.name.as_deref(), Some("Jane Doe"));
                assert_eq!(card.links.len(), 2);
                assert_eq!(card.remove_links, vec![0]);
                assert_eq!(format, "json");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
