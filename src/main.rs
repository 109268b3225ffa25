//! Profile Card - compose a profile card, preview it, export it.
//!
//!   profile-card themes
//!   profile-card preview --name "Jane Doe" --title "Product Designer"
//!   profile-card export --theme DeepMono --link GitHub=https://github.com/jane
//!   profile-card export --from profile-card.json --format png

mod cli;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use profile_card::application::{
    decode_json, export_json, export_raster, format_card_text, format_themes_table, render,
    ProfileStore, RasterOptions, ThemeEngine,
};
use profile_card::domain::{AppConfig, AppError, Profile, ProfileField};
use profile_card::infrastructure::{load_config, load_config_from_file, write_artifact};

use cli::{CardArgs, Cli, Commands, ExportFormat};

/// Notice shown when the PNG export fails; no file was produced.
const RASTER_FAILURE_NOTICE: &str = "Export failed. Please try again.";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        let raster_failed = e
            .downcast_ref::<AppError>()
            .is_some_and(AppError::is_raster);
        if raster_failed {
            eprintln!("{} {}", "Error:".red().bold(), RASTER_FAILURE_NOTICE);
        } else {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
        std::process::exit(1);
    }
}

/// Main application logic.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from_file(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Commands::Themes { theme } => {
            let active = theme.unwrap_or_else(|| config.theme.default.clone());
            println!("{}", format_themes_table(&ThemeEngine::themes(), &active));
        }
        Commands::Preview { card } => {
            let (store, engine) = build_session(&card, &config)?;
            let view = render(store.profile(), engine.context().tokens());
            println!(
                "{} {}\n",
                "Theme:".bold(),
                engine.context().theme().name
            );
            print!("{}", format_card_text(&view));
        }
        Commands::Export {
            card,
            format,
            out_dir,
            pixel_ratio,
        } => {
            let format: ExportFormat = format
                .parse()
                .map_err(|message| AppError::InvalidInput { message })?;
            let (store, engine) = build_session(&card, &config)?;
            let dir = out_dir.unwrap_or_else(|| config.output_dir());

            if format.includes_json() {
                let artifact = export_json(engine.selected_key(), store.profile())?
                    .with_file_name(&config.export.json_file_name);
                let path = write_artifact(&dir, &artifact)?;
                println!("{} Exported JSON to {}", "✓".green().bold(), path.display());
            }

            if format.includes_png() {
                let theme = engine.context();
                let view = render(store.profile(), theme.tokens());
                let options = RasterOptions {
                    pixel_ratio: pixel_ratio.or(config.export.pixel_ratio),
                };
                let artifact = export_raster(Some(&view), &theme, options)
                    .await?
                    .with_file_name(&config.export.png_file_name);
                let path = write_artifact(&dir, &artifact)?;
                println!("{} Exported PNG to {}", "✓".green().bold(), path.display());
            }
        }
    }

    Ok(())
}

/// Build the profile and theme state from a snapshot file and editing flags.
fn build_session(card: &CardArgs, config: &AppConfig) -> anyhow::Result<(ProfileStore, ThemeEngine)> {
    let (profile, snapshot_theme) = match &card.from {
        Some(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| AppError::io(format!("Failed to read {}", path.display()), e))?;
            let snapshot = decode_json(&bytes)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
            (Profile::from(snapshot.profile), Some(snapshot.theme_key))
        }
        None => (Profile::default(), None),
    };

    let theme_key = card
        .theme
        .clone()
        .or(snapshot_theme)
        .unwrap_or_else(|| config.theme.default.clone());
    let mut engine = ThemeEngine::default();
    engine.select(&theme_key);

    let mut store = ProfileStore::with_profile(profile);
    let fields = [
        (ProfileField::Name, &card.name),
        (ProfileField::Title, &card.title),
        (ProfileField::Bio, &card.bio),
        (ProfileField::AvatarUrl, &card.avatar_url),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            store.set_field(field, value.as_str());
        }
    }

    for (label, url) in &card.links {
        store.push_link(label.as_str(), url.as_str());
    }

    for &index in &card.remove_links {
        if !store.remove_link(index).is_applied() {
            tracing::warn!(index, "No link at index, nothing removed");
        }
    }

    Ok((store, engine))
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
