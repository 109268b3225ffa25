//! Derives the card view from a profile snapshot and theme tokens.

use crate::domain::{Profile, ThemeTokens};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const TITLE_PLACEHOLDER: &str = "Your Title";
pub const BIO_PLACEHOLDER: &str = "Short personal bio goes here. Keep it concise and meaningful.";
pub const LINK_PLACEHOLDER: &str = "Link";
pub const HREF_PLACEHOLDER: &str = "#";

/// What occupies the avatar slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image { url: String, alt: String },
    /// Uppercased first character of the name, or `U`.
    Initial(String),
}

/// One rendered link entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub text: String,
    pub href: String,
}

/// A fully derived card, ready to display or rasterize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: Avatar,
    /// `None` when the profile has no links; the list is omitted entirely.
    pub links: Option<Vec<LinkView>>,
    pub tokens: ThemeTokens,
}

/// Render a profile under the given tokens. Pure and total.
#[must_use]
pub fn render(profile: &Profile, tokens: &ThemeTokens) -> CardView {
    let avatar = if profile.avatar_url.is_empty() {
        Avatar::Initial(initial(&profile.name))
    } else {
        let who = or_placeholder(&profile.name, "User");
        Avatar::Image {
            url: profile.avatar_url.clone(),
            alt: format!("{who} avatar"),
        }
    };

    let links = (!profile.links.is_empty()).then(|| {
        profile
            .links
            .iter()
            .map(|l| LinkView {
                text: or_placeholder(&l.label, LINK_PLACEHOLDER).to_string(),
                href: or_placeholder(&l.url, HREF_PLACEHOLDER).to_string(),
            })
            .collect()
    });

    CardView {
        name: or_placeholder(&profile.name, NAME_PLACEHOLDER).to_string(),
        title: or_placeholder(&profile.title, TITLE_PLACEHOLDER).to_string(),
        bio: or_placeholder(&profile.bio, BIO_PLACEHOLDER).to_string(),
        avatar,
        links,
        tokens: *tokens,
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::profile_store::{add_link, set_field, update_link};
    use crate::domain::{Link, LinkField, ProfileField, ThemeId};

    fn tokens() -> ThemeTokens {
        ThemeId::SoftMono.theme().tokens
    }

    #[test]
    fn test_empty_profile_uses_placeholders() {
        let view = render(&Profile::default(), &tokens());
        assert_eq!(view.name, "Your Name");
        assert_eq!(view.title, "Your Title");
        assert_eq!(view.bio, BIO_PLACEHOLDER);
        assert_eq!(view.avatar, Avatar::Initial("U".into()));
        assert_eq!(view.links, None);
    }

    #[test]
    fn test_name_scenario() {
        let p = set_field(&Profile::default(), ProfileField::Name, "Jane Doe");
        let view = render(&p, &tokens());
        assert_eq!(view.name, "Jane Doe");
        assert_eq!(view.title, "Your Title");
        assert_eq!(view.avatar, Avatar::Initial("J".into()));
    }

    #[test]
    fn test_initial_is_uppercased() {
        let p = set_field(&Profile::default(), ProfileField::Name, "émile");
        assert_eq!(render(&p, &tokens()).avatar, Avatar::Initial("É".into()));
    }

    #[test]
    fn test_avatar_image_alt_text() {
        let p = set_field(&Profile::default(), ProfileField::AvatarUrl, "https://x/a.png");
        assert_eq!(
            render(&p, &tokens()).avatar,
            Avatar::Image {
                url: "https://x/a.png".into(),
                alt: "User avatar".into()
            }
        );

        let p = set_field(&p, ProfileField::Name, "Jane");
        assert!(matches!(
            render(&p, &tokens()).avatar,
            Avatar::Image { alt, .. } if alt == "Jane avatar"
        ));
    }

    #[test]
    fn test_links_render_in_order_with_placeholders() {
        let p = Profile {
            links: vec![
                Link::new("GitHub", "https://github.com/jane"),
                Link::new("", ""),
                Link::new("GitHub", "https://github.com/jane"),
            ],
            ..Default::default()
        };
        let links = render(&p, &tokens()).links.unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].text, "GitHub");
        assert_eq!(links[1].text, "Link");
        assert_eq!(links[1].href, "#");
        assert_eq!(links[2], links[0]);
    }

    #[test]
    fn test_single_empty_link_is_still_listed() {
        let p = add_link(&Profile::default());
        let p = update_link(&p, 0, LinkField::Url, "https://jane.dev");
        let links = render(&p, &tokens()).links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://jane.dev");
    }

    #[test]
    fn test_view_carries_tokens() {
        let deep = ThemeId::DeepMono.theme().tokens;
        assert_eq!(render(&Profile::default(), &deep).tokens, deep);
    }
}
