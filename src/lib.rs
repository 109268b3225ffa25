//! Profile Card - compose a personal profile card and export it.
//!
//! The card is an immutable [`domain::Profile`] snapshot edited through
//! [`application::ProfileStore`], themed by [`application::ThemeEngine`],
//! rendered into an [`application::CardView`] and exported either as a JSON
//! snapshot or as a PNG image.

pub mod application;
pub mod domain;
pub mod infrastructure;
