//! Meta-tag descriptors derived from a built payload.
//!
//! The renderer that owns the HTML response consumes these descriptors;
//! this module only decides their content. When a payload is missing or
//! carries empty fields, the site-wide defaults apply, so a failed payload
//! build never loses the page-level metadata entirely.

use serde::Serialize;

use crate::payload::SeoConfig;
use crate::site;

/// A single meta-tag descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaTag {
    /// The document `<title>`.
    Title(String),
    /// A `<meta name=... content=...>` tag.
    Named {
        /// The `name` attribute.
        name: String,
        /// The `content` attribute.
        content: String,
    },
    /// A `<meta property=... content=...>` tag (Open Graph).
    Property {
        /// The `property` attribute.
        property: String,
        /// The `content` attribute.
        content: String,
    },
}

impl MetaTag {
    fn named(name: &str, content: &str) -> Self {
        Self::Named {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    fn property(property: &str, content: &str) -> Self {
        Self::Property {
            property: property.to_string(),
            content: content.to_string(),
        }
    }
}

/// Expand a title template, replacing its `%s` placeholder with the title.
#[must_use]
pub fn render_title(template: &str, title: &str) -> String {
    template.replacen("%s", title, 1)
}

/// Meta-tag descriptors for a page.
///
/// Uses the payload's title and description when present and non-empty,
/// falling back to the site-wide defaults otherwise. A `title_template` on
/// the payload is expanded around the resolved title.
#[must_use]
pub fn meta_tags(seo: Option<&SeoConfig>) -> Vec<MetaTag> {
    let raw_title = seo
        .and_then(|config| config.title.as_deref())
        .filter(|title| !title.is_empty());
    let description = seo
        .and_then(|config| config.description.as_deref())
        .filter(|description| !description.is_empty())
        .unwrap_or(site::DEFAULT_META_DESCRIPTION);

    if raw_title.is_none() {
        tracing::debug!("seo payload has no title, using site default");
    }

    let title = raw_title.map_or_else(
        || site::DEFAULT_META_TITLE.to_string(),
        |title| {
            seo.and_then(|config| config.title_template.as_deref())
                .map_or_else(|| title.to_string(), |template| render_title(template, title))
        },
    );

    vec![
        MetaTag::Title(title.clone()),
        MetaTag::named("description", description),
        MetaTag::property("og:title", &title),
        MetaTag::property("og:description", description),
        MetaTag::named("twitter:card", "summary_large_image"),
        MetaTag::named("twitter:title", &title),
        MetaTag::named("twitter:description", description),
        MetaTag::named("keywords", site::META_KEYWORDS),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn title_of(tags: &[MetaTag]) -> &str {
        tags.iter()
            .find_map(|tag| match tag {
                MetaTag::Title(title) => Some(title.as_str()),
                _ => None,
            })
            .unwrap()
    }

    fn content_of<'a>(tags: &'a [MetaTag], wanted: &str) -> &'a str {
        tags.iter()
            .find_map(|tag| match tag {
                MetaTag::Named { name, content } if name == wanted => Some(content.as_str()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_defaults_without_payload() {
        let tags = meta_tags(None);
        assert_eq!(title_of(&tags), site::DEFAULT_META_TITLE);
        assert_eq!(content_of(&tags, "description"), site::DEFAULT_META_DESCRIPTION);
        assert_eq!(content_of(&tags, "keywords"), site::META_KEYWORDS);
        assert_eq!(content_of(&tags, "twitter:card"), "summary_large_image");
    }

    #[test]
    fn test_defaults_for_empty_fields() {
        let config = SeoConfig {
            title: Some(String::new()),
            description: Some(String::new()),
            ..SeoConfig::default()
        };
        let tags = meta_tags(Some(&config));
        assert_eq!(title_of(&tags), site::DEFAULT_META_TITLE);
        assert_eq!(content_of(&tags, "description"), site::DEFAULT_META_DESCRIPTION);
    }

    #[test]
    fn test_payload_title_expands_template() {
        let config = SeoConfig {
            title: Some("Home".to_string()),
            title_template: Some(site::TITLE_TEMPLATE.to_string()),
            description: Some("Fresh roasts.".to_string()),
            ..SeoConfig::default()
        };
        let tags = meta_tags(Some(&config));
        assert_eq!(
            title_of(&tags),
            "Home | Blackneck Coffee – Yunnan Specialty Coffee"
        );
        assert_eq!(content_of(&tags, "description"), "Fresh roasts.");
        assert_eq!(content_of(&tags, "twitter:title"), title_of(&tags));
    }

    #[test]
    fn test_payload_title_without_template() {
        let config = SeoConfig {
            title: Some("Returns".to_string()),
            ..SeoConfig::default()
        };
        let tags = meta_tags(Some(&config));
        assert_eq!(title_of(&tags), "Returns");
    }

    #[test]
    fn test_render_title_replaces_single_placeholder() {
        assert_eq!(render_title("%s | Shop", "Home"), "Home | Shop");
        assert_eq!(render_title("no placeholder", "Home"), "no placeholder");
    }
}
