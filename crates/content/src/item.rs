use serde::{Deserialize, Serialize};

/// Stable identifier for one content item within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub u64);

impl ContentId {
    /// Creates a typed content identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Labeled outbound link carried by a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLink {
    pub label: String,
    pub url: String,
}

impl ContentLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Labeled display counter (stars, views, likes, comments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStat {
    pub label: String,
    pub count: u32,
}

impl ContentStat {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One catalog entry: a project or a blog post.
///
/// Records are built by the catalog functions and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: String,
    pub links: Vec<ContentLink>,
    pub stats: Vec<ContentStat>,
    /// Publish label shown next to the item, e.g. "2024".
    pub published: String,
}

impl ContentItem {
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        published: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            category: category.into(),
            links: Vec::new(),
            stats: Vec::new(),
            published: published.into(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(ContentLink::new(label, url));
        self
    }

    pub fn with_stat(mut self, label: impl Into<String>, count: u32) -> Self {
        self.stats.push(ContentStat::new(label, count));
        self
    }
}
