//! Snapshot-producing profile mutations.
//!
//! The free functions are pure: they take a snapshot and return a new one,
//! never touching the input. Mutations are tolerant: an out-of-range link
//! index is a no-op rather than an error, so the card always stays
//! renderable. [`ProfileStore`] wraps the same operations around a current
//! snapshot and reports whether each mutation was applied or ignored.

use std::sync::Arc;

use crate::domain::{Link, LinkField, Profile, ProfileField};

/// Replace one scalar field.
#[must_use]
pub fn set_field(profile: &Profile, field: ProfileField, value: impl Into<String>) -> Profile {
    let mut next = profile.clone();
    *next.field_mut(field) = value.into();
    next
}

/// Append an empty link.
#[must_use]
pub fn add_link(profile: &Profile) -> Profile {
    let mut next = profile.clone();
    next.links.push(Link::default());
    next
}

/// Replace one field of the link at `index`. No-op when out of range.
#[must_use]
pub fn update_link(
    profile: &Profile,
    index: usize,
    field: LinkField,
    value: impl Into<String>,
) -> Profile {
    let mut next = profile.clone();
    if let Some(link) = next.links.get_mut(index) {
        let slot = match field {
            LinkField::Label => &mut link.label,
            LinkField::Url => &mut link.url,
        };
        *slot = value.into();
    }
    next
}

/// Remove the link at `index`, shifting later links left. No-op when out of
/// range.
#[must_use]
pub fn remove_link(profile: &Profile, index: usize) -> Profile {
    let mut next = profile.clone();
    if index < next.links.len() {
        next.links.remove(index);
    }
    next
}

/// Why a mutation left the snapshot untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    IndexOutOfRange { index: usize, len: usize },
}

/// Outcome of a [`ProfileStore`] mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Ignored(IgnoreReason),
}

impl Mutation {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Holds the current profile snapshot for a session.
///
/// Snapshots are shared as `Arc<Profile>`; a snapshot handed out earlier is
/// never affected by later mutations.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    current: Arc<Profile>,
}

impl ProfileStore {
    /// Start a session from an existing profile.
    #[must_use]
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            current: Arc::new(profile),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Profile> {
        Arc::clone(&self.current)
    }

    /// Borrow the current profile.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.current
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> Mutation {
        self.current = Arc::new(set_field(&self.current, field, value));
        Mutation::Applied
    }

    pub fn add_link(&mut self) -> Mutation {
        self.current = Arc::new(add_link(&self.current));
        Mutation::Applied
    }

    pub fn update_link(
        &mut self,
        index: usize,
        field: LinkField,
        value: impl Into<String>,
    ) -> Mutation {
        if let Err(reason) = self.check_index(index) {
            tracing::debug!(index, %field, "Ignoring update of missing link");
            return Mutation::Ignored(reason);
        }
        self.current = Arc::new(update_link(&self.current, index, field, value));
        Mutation::Applied
    }

    pub fn remove_link(&mut self, index: usize) -> Mutation {
        if let Err(reason) = self.check_index(index) {
            tracing::debug!(index, "Ignoring removal of missing link");
            return Mutation::Ignored(reason);
        }
        self.current = Arc::new(remove_link(&self.current, index));
        Mutation::Applied
    }

    /// Append a link and fill in both fields.
    pub fn push_link(&mut self, label: impl Into<String>, url: impl Into<String>) -> Mutation {
        let index = self.current.links.len();
        let mut next = add_link(&self.current);
        next = update_link(&next, index, LinkField::Label, label);
        next = update_link(&next, index, LinkField::Url, url);
        self.current = Arc::new(next);
        Mutation::Applied
    }

    fn check_index(&self, index: usize) -> Result<(), IgnoreReason> {
        let len = self.current.links.len();
        if index < len {
            Ok(())
        } else {
            Err(IgnoreReason::IndexOutOfRange { index, len })
        }
    }
}
