//! Theme resolution and the style scope published for rendering.
//!
//! Selecting a theme produces a new immutable [`ThemeContext`] whose style
//! scope holds all eight token variables. Consumers receive the context
//! explicitly; nothing reads an ambient global.

use std::sync::Arc;

use crate::domain::{ColorToken, Theme, ThemeId, ThemeTokens};

/// Resolve any identifier to a theme entry. Unknown identifiers give the
/// default theme.
#[must_use]
pub fn resolve(identifier: &str) -> &'static Theme {
    ThemeId::from_key_or_default(identifier).theme()
}

/// Named style variables derived from a theme's tokens.
///
/// A scope is always complete: it is built from a full token set in one step
/// and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleScope {
    vars: Vec<(&'static str, String)>,
}

impl StyleScope {
    /// Build the scope for a token set.
    #[must_use]
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        let vars = ColorToken::ALL
            .iter()
            .map(|&token| (token.variable_name(), tokens.get(token).to_string()))
            .collect();
        Self { vars }
    }

    /// A scope with nothing published, as seen before any theme is applied.
    #[must_use]
    pub const fn empty() -> Self {
        Self { vars: Vec::new() }
    }

    /// Read a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(name, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.vars.iter().map(|(n, v)| (*n, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// The theme state handed to the renderer and exporter.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    key: Arc<str>,
    theme: &'static Theme,
    scope: Arc<StyleScope>,
}

impl ThemeContext {
    fn new(key: &str) -> Self {
        let theme = resolve(key);
        Self {
            key: Arc::from(key),
            theme,
            scope: Arc::new(StyleScope::from_tokens(&theme.tokens)),
        }
    }

    /// Context carrying an arbitrary scope, for callers that publish their
    /// own variables.
    #[must_use]
    pub fn with_scope(key: &str, scope: StyleScope) -> Self {
        Self {
            key: Arc::from(key),
            theme: resolve(key),
            scope: Arc::new(scope),
        }
    }

    /// The identifier as selected, which may be outside the enumerated set.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn theme(&self) -> &'static Theme {
        self.theme
    }

    #[must_use]
    pub const fn tokens(&self) -> &ThemeTokens {
        &self.theme.tokens
    }

    #[must_use]
    pub fn scope(&self) -> &StyleScope {
        &self.scope
    }
}

/// Tracks the selected theme and publishes its context.
#[derive(Debug, Clone)]
pub struct ThemeEngine {
    current: ThemeContext,
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(ThemeId::DEFAULT.key())
    }
}

impl ThemeEngine {
    /// Start with the given identifier selected.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        Self {
            current: ThemeContext::new(identifier),
        }
    }

    /// Select a theme, replacing every style variable at once.
    pub fn select(&mut self, identifier: &str) -> &ThemeContext {
        let next = ThemeContext::new(identifier);
        if next.theme.id.key() != identifier {
            tracing::debug!(
                requested = identifier,
                resolved = %next.theme.id,
                "Unknown theme, using default"
            );
        } else {
            tracing::debug!(theme = identifier, "Theme selected");
        }
        self.current = next;
        &self.current
    }

    /// The currently selected identifier.
    #[must_use]
    pub fn selected_key(&self) -> &str {
        self.current.key()
    }

    /// Snapshot of the current theme state.
    #[must_use]
    pub fn context(&self) -> ThemeContext {
        self.current.clone()
    }

    /// Themes offered by the selector.
    #[must_use]
    pub fn themes() -> Vec<&'static Theme> {
        ThemeId::ALL.iter().map(|id| id.theme()).collect()
    }
}
