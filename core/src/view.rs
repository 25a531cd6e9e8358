//! Structured view model for the result region.
//!
//! # Design
//! Render functions build these values instead of markup strings, so card
//! content can be asserted on directly. `markup` serializes them to HTML.

use crate::types::{AssociatedItem, Entity};

/// Number of associated items a card shows.
pub const MAX_ITEMS: usize = 5;

/// Content of the root display region. Every variant replaces the previous
/// one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Root {
    #[default]
    Idle,
    Loading,
    Card(ProfileCard),
    Error(ErrorCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub display_name: String,
    pub avatar: Option<Avatar>,
    pub bio: Option<String>,
    pub stats: Vec<Stat>,
    pub items: ItemsSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    pub label: &'static str,
}

/// The addressable area of a card that associated items land in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ItemsSlot {
    /// Card rendered, items not yet arrived.
    #[default]
    Pending,
    Links(Vec<ItemLink>),
    /// Items call failed; the card stays and shows this inline.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLink {
    pub label: String,
    pub href: String,
    pub opens_new_context: bool,
}

impl ItemLink {
    pub fn from_item(item: &AssociatedItem) -> Self {
        Self {
            label: item.name.clone(),
            href: item.html_url.clone(),
            opens_new_context: true,
        }
    }

    /// Links for the first `MAX_ITEMS` items, in the given order.
    pub fn first_of(items: &[AssociatedItem]) -> Vec<Self> {
        items.iter().take(MAX_ITEMS).map(Self::from_item).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub message: String,
}

impl ProfileCard {
    pub fn builder(display_name: impl Into<String>) -> ProfileCardBuilder {
        ProfileCardBuilder::new(display_name)
    }

    /// The card for a freshly fetched entity, items slot empty.
    pub fn from_entity(entity: &Entity) -> Self {
        let display_name = entity.display_name();
        Self::builder(display_name)
            .avatar(&entity.avatar_url, display_name)
            .bio(entity.bio())
            .stat(entity.followers, "Followers")
            .stat(entity.following, "Following")
            .stat(entity.public_repos, "Repositories")
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct ProfileCardBuilder {
    display_name: String,
    avatar: Option<Avatar>,
    bio: Option<String>,
    stats: Vec<Stat>,
}

impl ProfileCardBuilder {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar: None,
            bio: None,
            stats: Vec::new(),
        }
    }

    pub fn avatar(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.avatar = Some(Avatar {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }

    /// Empty text counts as no bio.
    pub fn bio(mut self, bio: Option<&str>) -> Self {
        self.bio = bio.filter(|b| !b.is_empty()).map(str::to_string);
        self
    }

    pub fn stat(mut self, value: u64, label: &'static str) -> Self {
        self.stats.push(Stat { value, label });
        self
    }

    pub fn build(self) -> ProfileCard {
        ProfileCard {
            display_name: self.display_name,
            avatar: self.avatar,
            bio: self.bio,
            stats: self.stats,
            items: ItemsSlot::Pending,
        }
    }
}
