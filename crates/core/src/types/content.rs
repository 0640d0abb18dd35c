//! Blog, article, and page domain types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Image, Seo};

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article title.
    pub title: String,
    /// Full article body as HTML.
    pub content_html: String,
    /// Short excerpt.
    pub excerpt: Option<String>,
    /// SEO metadata override.
    pub seo: Option<Seo>,
    /// Publication timestamp.
    pub published_at: DateTime<FixedOffset>,
    /// Article hero image.
    pub image: Option<Image>,
}

/// A blog (container for articles).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Blog title.
    pub title: String,
    /// SEO metadata override.
    pub seo: Option<Seo>,
}

/// A static content page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// SEO metadata override.
    pub seo: Option<Seo>,
}
