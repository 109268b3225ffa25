//! Theme identifiers and their color token sets.
//!
//! The palette table is static: every identifier maps to a complete set of
//! eight tokens, and anything outside the enumerated set resolves to
//! [`ThemeId::DEFAULT`].

use std::fmt;
use std::str::FromStr;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from its RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (surrounding whitespace ignored).
    #[must_use]
    pub fn parse_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 17;
                }
                Some(Self::rgb(out[0], out[1], out[2]))
            }
            6 | 8 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                let a = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    255
                };
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    /// Pixel representation for raster painting.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// The eight named token slots every theme provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Background,
    Surface,
    Text,
    Primary,
    Secondary,
    Success,
    Error,
    Subtle,
}

impl ColorToken {
    /// All slots, in style-scope order.
    pub const ALL: [Self; 8] = [
        Self::Background,
        Self::Surface,
        Self::Text,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Error,
        Self::Subtle,
    ];

    /// Name of the style variable this slot is published under.
    #[must_use]
    pub const fn variable_name(self) -> &'static str {
        match self {
            Self::Background => "--sm-bg",
            Self::Surface => "--sm-surface",
            Self::Text => "--sm-text",
            Self::Primary => "--sm-primary",
            Self::Secondary => "--sm-secondary",
            Self::Success => "--sm-success",
            Self::Error => "--sm-error",
            Self::Subtle => "--sm-subtle",
        }
    }
}

/// Complete set of color tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub subtle: Color,
}

impl ThemeTokens {
    /// Look up a token by slot.
    #[must_use]
    pub const fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Text => self.text,
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Success => self.success,
            ColorToken::Error => self.error,
            ColorToken::Subtle => self.subtle,
        }
    }
}

/// Enumerated theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    SoftMono,
    WarmMono,
    DeepMono,
}

impl ThemeId {
    /// Identifier used when an unknown key is requested.
    pub const DEFAULT: Self = Self::SoftMono;

    /// All identifiers, in selector order.
    pub const ALL: [Self; 3] = [Self::SoftMono, Self::WarmMono, Self::DeepMono];

    /// The identifier's key string.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SoftMono => "SoftMono",
            Self::WarmMono => "WarmMono",
            Self::DeepMono => "DeepMono",
        }
    }

    /// Map any key to an identifier, falling back to the default.
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or(Self::DEFAULT)
    }

    /// The static theme entry for this identifier.
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        &THEMES[self as usize]
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| format!("Unknown theme: {s}"))
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A theme entry: identity, display metadata and tokens.
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    /// Display name shown by the theme selector.
    pub name: &'static str,
    pub description: &'static str,
    pub tokens: ThemeTokens,
}

/// Fixed color used when no background can be read from a style scope.
pub const FALLBACK_BACKGROUND: Color = Color::from_u32(0x00F9_FAFB);

/// All themes, indexed in [`ThemeId::ALL`] order.
pub static THEMES: [Theme; 3] = [
    Theme {
        id: ThemeId::SoftMono,
        name: "Soft Mono",
        description: "Monochrome with warm touches",
        tokens: ThemeTokens {
            primary: Color::from_u32(0x006B_7280),
            secondary: Color::from_u32(0x009C_A3AF),
            success: Color::from_u32(0x0010_B981),
            error: Color::from_u32(0x00EF_4444),
            background: FALLBACK_BACKGROUND,
            surface: Color::from_u32(0x00FF_FFFF),
            text: Color::from_u32(0x0011_1827),
            subtle: Color::from_u32(0x00E5_E7EB),
        },
    },
    Theme {
        id: ThemeId::WarmMono,
        name: "Warm Mono",
        description: "Softer contrasts, warmer subtle surfaces",
        tokens: ThemeTokens {
            primary: Color::from_u32(0x006B_7280),
            secondary: Color::from_u32(0x00A8_B0BA),
            success: Color::from_u32(0x0010_B981),
            error: Color::from_u32(0x00EF_4444),
            background: Color::from_u32(0x00FA_FAF9),
            surface: Color::from_u32(0x00FF_FFFF),
            text: Color::from_u32(0x0011_1827),
            subtle: Color::from_u32(0x00EC_ECEC),
        },
    },
    Theme {
        id: ThemeId::DeepMono,
        name: "Deep Mono",
        description: "Darker grayscale with crisp text",
        tokens: ThemeTokens {
            primary: Color::from_u32(0x004B_5563),
            secondary: Color::from_u32(0x009C_A3AF),
            success: Color::from_u32(0x0010_B981),
            error: Color::from_u32(0x00EF_4444),
            background: Color::from_u32(0x00F3_F4F6),
            surface: Color::from_u32(0x00FF_FFFF),
            text: Color::from_u32(0x0011_1827),
            subtle: Color::from_u32(0x00E5_E7EB),
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_hex("#F9FAFB"), Some(Color::rgb(0xF9, 0xFA, 0xFB)));
        assert_eq!(Color::parse_hex("  #fff "), Some(Color::rgb(255, 255, 255)));
        assert_eq!(
            Color::parse_hex("#11182780"),
            Some(Color {
                r: 0x11,
                g: 0x18,
                b: 0x27,
                a: 0x80
            })
        );
        assert_eq!(Color::parse_hex("F9FAFB"), None);
        assert_eq!(Color::parse_hex("#GGGGGG"), None);
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex(""), None);
    }

    #[test]
    fn test_color_display_roundtrips_hex() {
        assert_eq!(FALLBACK_BACKGROUND.to_string(), "#F9FAFB");
        assert_eq!(Color::parse_hex("#4B5563").map(|c| c.to_string()).as_deref(), Some("#4B5563"));
    }

    #[test]
    fn test_every_theme_entry_matches_its_id() {
        for id in ThemeId::ALL {
            assert_eq!(id.theme().id, id);
        }
    }

    #[test]
    fn test_theme_id_parse() {
        assert_eq!("DeepMono".parse::<ThemeId>(), Ok(ThemeId::DeepMono));
        assert!("deepmono".parse::<ThemeId>().is_err());
        assert_eq!(ThemeId::from_key_or_default("Neon"), ThemeId::SoftMono);
    }

    #[test]
    fn test_variable_names_are_distinct() {
        let mut names: Vec<_> = ColorToken::ALL.iter().map(|t| t.variable_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
