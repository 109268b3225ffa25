//! Profile card data model.

use std::fmt;
use std::str::FromStr;

/// A labelled link shown on the card. Neither field is validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    /// Create a link from its label and url.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The card's content. Fresh sessions start from [`Profile::default`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    /// Ordered; duplicates allowed.
    pub links: Vec<Link>,
}

impl Profile {
    /// Current value of a scalar field.
    #[must_use]
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Bio => &self.bio,
            ProfileField::AvatarUrl => &self.avatar_url,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Title => &mut self.title,
            ProfileField::Bio => &mut self.bio,
            ProfileField::AvatarUrl => &mut self.avatar_url,
        }
    }
}

/// Scalar profile fields editable through `set_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Title,
    Bio,
    AvatarUrl,
}

impl ProfileField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Bio => "bio",
            Self::AvatarUrl => "avatarUrl",
        }
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "title" => Ok(Self::Title),
            "bio" => Ok(Self::Bio),
            "avatarUrl" | "avatar_url" | "avatar-url" => Ok(Self::AvatarUrl),
            _ => Err(format!(
                "Unknown profile field: {s}. Use: name, title, bio, avatarUrl"
            )),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link fields editable through `update_link`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkField {
    Label,
    Url,
}

impl LinkField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Url => "url",
        }
    }
}

impl FromStr for LinkField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" => Ok(Self::Label),
            "url" => Ok(Self::Url),
            _ => Err(format!("Unknown link field: {s}. Use: label, url")),
        }
    }
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        let profile = Profile::default();
        assert!(profile.name.is_empty());
        assert!(profile.avatar_url.is_empty());
        assert!(profile.links.is_empty());
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("avatarUrl".parse::<ProfileField>(), Ok(ProfileField::AvatarUrl));
        assert_eq!("avatar-url".parse::<ProfileField>(), Ok(ProfileField::AvatarUrl));
        assert!("links".parse::<ProfileField>().is_err());
        assert_eq!("url".parse::<LinkField>(), Ok(LinkField::Url));
        assert!("href".parse::<LinkField>().is_err());
    }

    #[test]
    fn test_field_accessor() {
        let profile = Profile {
            bio: "Builds things".into(),
            ..Default::default()
        };
        assert_eq!(profile.field(ProfileField::Bio), "Builds things");
        assert_eq!(profile.field(ProfileField::Title), "");
    }
}
