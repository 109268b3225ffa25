//! Terminal output for the live preview and the theme selector.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ColorToken, Theme};

use super::renderer::{Avatar, CardView};

/// Formats a rendered card as plain text.
pub fn format_card_text(view: &CardView) -> String {
    let mut out = String::new();

    let avatar = match &view.avatar {
        Avatar::Initial(letter) => format!("({letter})"),
        Avatar::Image { url, alt } => format!("[{alt}: {url}]"),
    };

    out.push_str(&format!("{} {}\n", avatar, view.name.bold()));
    out.push_str(&format!("{}\n\n", view.title.dimmed()));
    out.push_str(&view.bio);
    out.push('\n');

    if let Some(links) = &view.links {
        out.push('\n');
        for link in links {
            out.push_str(&format!("  • {} → {}\n", link.text.cyan(), link.href));
        }
    }

    out
}

/// Formats the selectable themes, marking the active one.
pub fn format_themes_table(themes: &[&Theme], active_key: &str) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["", "Key", "Name", "Description"];
    header.extend(ColorToken::ALL.iter().map(|t| t.variable_name()));
    table.set_header(header);

    for theme in themes {
        let marker = if theme.id.key() == active_key { "*" } else { "" };
        let mut row = vec![
            marker.to_string(),
            theme.id.key().to_string(),
            theme.name.to_string(),
            theme.description.to_string(),
        ];
        row.extend(
            ColorToken::ALL
                .iter()
                .map(|&t| theme.tokens.get(t).to_string()),
        );
        table.add_row(row);
    }

    table.to_string()
}
