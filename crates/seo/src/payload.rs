//! SEO payload builders, one per page type.
//!
//! Each builder takes the already-fetched domain record(s) for its page
//! plus the canonical request URL and returns a [`SeoConfig`]. Builders are
//! pure: they never fetch, never mutate their inputs, and never fail on
//! missing optional data. The only failures are caller contract violations
//! (a price amount or request URL that cannot be parsed), surfaced as
//! [`SeoError`].
//!
//! Title and description resolution always prefers the per-entity SEO
//! override, then the generic field, then an empty string. The fallback
//! rules live in named helpers rather than inline chains so the
//! empty-vs-absent semantics stay auditable in one place.

use blackneck_core::{
    Article, Blog, Collection, CollectionConnection, Image, Money, Page, Product, ProductVariant,
    SelectedOption, Seo, Shop, ShopPolicy,
};
use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;

use crate::error::{Result, SeoError};
use crate::schema::{self, ItemAvailability, JsonLd, SchemaContext, SchemaType, StructuredData};
use crate::site;

// =============================================================================
// Output types
// =============================================================================

/// Robots directives for the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Robots {
    /// Ask crawlers not to index the page.
    pub no_index: bool,
    /// Ask crawlers not to follow links on the page.
    pub no_follow: bool,
}

/// Media discriminator for [`SeoMedia`], serialized as `type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A social-sharing image.
    #[default]
    Image,
}

/// Social-sharing media attached to a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoMedia {
    /// Media kind discriminator.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Image URL.
    pub url: Option<String>,
    /// Image height in pixels.
    pub height: Option<i64>,
    /// Image width in pixels.
    pub width: Option<i64>,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

impl SeoMedia {
    /// Media record for an optional image; all fields absent when the
    /// source has no image.
    #[must_use]
    pub fn from_image(image: Option<&Image>) -> Self {
        image.map_or_else(Self::default, Self::from)
    }
}

impl From<&Image> for SeoMedia {
    fn from(image: &Image) -> Self {
        Self {
            kind: MediaKind::Image,
            url: Some(image.url.clone()),
            height: image.height,
            width: image.width,
            alt_text: image.alt_text.clone(),
        }
    }
}

/// The normalized SEO payload attached to a page response.
///
/// Consumed by the page-metadata renderer, which emits the `<title>`,
/// `<meta>` tags, and one `<script type="application/ld+json">` block per
/// entry in `json_ld`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeoConfig {
    /// Page title before template expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title template with a `%s` placeholder for `title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
    /// Meta description, already truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Social handle for card attribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Canonical page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Social-sharing media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<SeoMedia>,
    /// Robots directives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
    /// Structured data, breadcrumb trail before primary entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<JsonLd>,
}

// =============================================================================
// Page dispatch
// =============================================================================

/// Page-type dispatch for the payload builder.
///
/// The set of page types is closed and known at compile time; each variant
/// borrows the already-fetched domain record(s) it needs.
#[derive(Debug)]
pub enum SeoPage<'a> {
    /// Root layout (shop-wide defaults).
    Root {
        /// Shop-wide information.
        shop: &'a Shop,
    },
    /// Home page.
    Home,
    /// Product detail page.
    Product {
        /// The product, with selected and adjacent variants resolved.
        product: &'a Product,
    },
    /// Collection detail page.
    Collection {
        /// The collection with its current page of products.
        collection: &'a Collection,
    },
    /// Collection index page.
    ListCollections {
        /// The current page of collections.
        collections: &'a CollectionConnection,
    },
    /// Journal article page.
    Article {
        /// The article.
        article: &'a Article,
    },
    /// Blog index page.
    Blog {
        /// The blog.
        blog: &'a Blog,
    },
    /// Static content page.
    Page {
        /// The page.
        page: &'a Page,
    },
    /// Single policy page.
    Policy {
        /// The policy.
        policy: &'a ShopPolicy,
    },
    /// Policy index page.
    Policies {
        /// All shop policies.
        policies: &'a [ShopPolicy],
    },
}

impl SeoPage<'_> {
    /// Build the payload for this page at the given canonical request URL.
    ///
    /// # Errors
    ///
    /// Returns [`SeoError::InvalidPrice`] when a variant price amount is
    /// not a decimal number, and [`SeoError::InvalidUrl`] when a builder
    /// needs to re-parse the request URL and it is not absolute.
    pub fn build(&self, url: &str) -> Result<SeoConfig> {
        match self {
            Self::Root { shop } => Ok(root(shop, url)),
            Self::Home => Ok(home()),
            Self::Product { product: record } => product(record, url),
            Self::Collection { collection: record } => collection(record, url),
            Self::ListCollections {
                collections: record,
            } => Ok(list_collections(record, url)),
            Self::Article { article: record } => Ok(article(record, url)),
            Self::Blog { blog: record } => Ok(blog(record, url)),
            Self::Page { page: record } => Ok(page(record, url)),
            Self::Policy { policy: record } => Ok(policy(record, url)),
            Self::Policies { policies: records } => policies(records, url),
        }
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Payload for the root layout: shop-wide defaults plus the Organization
/// entity with logo, social links, and the site search action.
#[must_use]
pub fn root(shop: &Shop, url: &str) -> SeoConfig {
    let logo = shop
        .brand
        .as_ref()
        .and_then(|brand| brand.logo.as_ref())
        .and_then(|logo| logo.image.as_ref())
        .map(|image| image.url.clone());

    SeoConfig {
        title: Some(non_empty_or(Some(shop.name.as_str()), site::SITE_NAME).to_string()),
        title_template: Some(site::TITLE_TEMPLATE.to_string()),
        description: Some(truncate(
            shop.description
                .as_deref()
                .unwrap_or(site::DEFAULT_SHOP_DESCRIPTION),
        )),
        handle: Some(site::TWITTER_HANDLE.to_string()),
        url: Some(url.to_string()),
        robots: Some(Robots::default()),
        json_ld: Some(
            StructuredData::Organization(schema::Organization {
                schema_type: SchemaType::Organization,
                context: SchemaContext,
                name: shop.name.clone(),
                logo,
                same_as: site::SOCIAL_LINKS.iter().map(ToString::to_string).collect(),
                url: url.to_string(),
                potential_action: schema::SearchAction {
                    schema_type: SchemaType::SearchAction,
                    target: format!("{url}search?q={{search_term}}"),
                    query: "required name='search_term'".to_string(),
                },
            })
            .into(),
        ),
        ..SeoConfig::default()
    }
}

/// Payload for the home page: static title and description.
#[must_use]
pub fn home() -> SeoConfig {
    SeoConfig {
        title: Some("Home".to_string()),
        title_template: Some(site::TITLE_TEMPLATE.to_string()),
        description: Some(site::HOME_DESCRIPTION.to_string()),
        robots: Some(Robots::default()),
        json_ld: Some(
            StructuredData::WebPage(schema::WebPage {
                schema_type: SchemaType::WebPage,
                context: SchemaContext,
                name: "Home page".to_string(),
                description: None,
                url: None,
            })
            .into(),
        ),
        ..SeoConfig::default()
    }
}

/// Payload for a product detail page.
///
/// # Errors
///
/// Returns [`SeoError::InvalidUrl`] when `url` is not absolute, and
/// [`SeoError::InvalidPrice`] when a variant price amount cannot be parsed.
pub fn product(product: &Product, url: &str) -> Result<SeoConfig> {
    let selected = product.selected_or_first_available_variant.as_ref();

    Ok(SeoConfig {
        title: Some(override_or(seo_title(product.seo.as_ref()), &product.title).to_string()),
        description: Some(truncate(override_or(
            seo_description(product.seo.as_ref()),
            &product.description,
        ))),
        media: selected.and_then(|v| v.image.as_ref()).map(SeoMedia::from),
        json_ld: Some(product_json_ld(product, selected, url)?),
        ..SeoConfig::default()
    })
}

fn product_json_ld(
    product: &Product,
    selected: Option<&ProductVariant>,
    url: &str,
) -> Result<JsonLd> {
    let request_url = parse_request_url(url)?;
    let origin = request_url.origin().ascii_serialization();

    // One offer per adjacent variant. The selected variant contributes an
    // offer only when there are no adjacent variants; the two paths never
    // both apply.
    let mut offers = Vec::with_capacity(product.adjacent_variants.len());
    for variant in &product.adjacent_variants {
        let variant_url = with_selected_options(&request_url, &variant.selected_options);
        offers.push(variant_offer(variant, variant_url.to_string())?);
    }
    if offers.is_empty() {
        if let Some(variant) = selected {
            offers.push(variant_offer(variant, url.to_string())?);
        } else {
            tracing::debug!(handle = %product.handle, "product has no variants, emitting no offers");
        }
    }

    let selected_sku = selected
        .and_then(|v| v.sku.as_deref())
        .unwrap_or_default()
        .to_string();
    let selected_image = selected
        .and_then(|v| v.image.as_ref())
        .map(|image| image.url.clone())
        .unwrap_or_default();

    Ok(JsonLd::Many(vec![
        StructuredData::BreadcrumbList(schema::BreadcrumbList {
            schema_type: SchemaType::BreadcrumbList,
            context: SchemaContext,
            item_list_element: vec![
                breadcrumb(1, "Products", Some(format!("{origin}/products"))),
                breadcrumb(2, product.title.clone(), None),
            ],
        }),
        StructuredData::Product(schema::Product {
            schema_type: SchemaType::Product,
            context: SchemaContext,
            brand: schema::Brand {
                schema_type: SchemaType::Brand,
                name: product.vendor.clone(),
            },
            description: truncate(override_or(
                seo_description(product.seo.as_ref()),
                &product.description,
            )),
            image: vec![selected_image],
            name: product.title.clone(),
            offers,
            sku: selected_sku,
            url: url.to_string(),
        }),
    ]))
}

fn variant_offer(variant: &ProductVariant, url: String) -> Result<schema::Offer> {
    Ok(schema::Offer {
        schema_type: SchemaType::Offer,
        availability: ItemAvailability::from_available_for_sale(variant.available_for_sale),
        price: parse_amount(&variant.price)?,
        price_currency: variant.price.currency_code.clone(),
        sku: variant.sku.clone().unwrap_or_default(),
        url,
    })
}

/// Payload for a collection detail page.
///
/// # Errors
///
/// Returns [`SeoError::InvalidUrl`] when `url` is not absolute.
pub fn collection(collection: &Collection, url: &str) -> Result<SeoConfig> {
    Ok(SeoConfig {
        title: seo_title(collection.seo.as_ref()).map(ToString::to_string),
        title_template: Some(site::COLLECTION_TITLE_TEMPLATE.to_string()),
        description: Some(truncate(override_or(
            seo_description(collection.seo.as_ref()),
            &collection.description,
        ))),
        url: Some(url.to_string()),
        media: Some(SeoMedia::from_image(collection.image.as_ref())),
        json_ld: Some(collection_json_ld(collection, url)?),
        ..SeoConfig::default()
    })
}

fn collection_json_ld(collection: &Collection, url: &str) -> Result<JsonLd> {
    let request_url = parse_request_url(url)?;
    let host = request_url.host_str().unwrap_or_default();

    let item_list_element = collection
        .products
        .iter()
        .zip(1..)
        .map(|(product, position)| list_entry(position, format!("/products/{}", product.handle)))
        .collect();

    Ok(JsonLd::Many(vec![
        StructuredData::BreadcrumbList(schema::BreadcrumbList {
            schema_type: SchemaType::BreadcrumbList,
            context: SchemaContext,
            item_list_element: vec![
                breadcrumb(1, "Collections", Some(format!("{host}/collections"))),
                breadcrumb(2, collection.title.clone(), None),
            ],
        }),
        StructuredData::CollectionPage(schema::CollectionPage {
            schema_type: SchemaType::CollectionPage,
            context: SchemaContext,
            name: override_or(seo_title(collection.seo.as_ref()), &collection.title).to_string(),
            description: truncate(override_or(
                seo_description(collection.seo.as_ref()),
                &collection.description,
            )),
            image: collection.image.as_ref().map(|image| image.url.clone()),
            url: format!("/collections/{}", collection.handle),
            main_entity: schema::ItemList {
                schema_type: SchemaType::ItemList,
                item_list_element,
            },
        }),
    ]))
}

/// Payload for the collection index page.
#[must_use]
pub fn list_collections(collections: &CollectionConnection, url: &str) -> SeoConfig {
    let item_list_element = collections
        .collections
        .iter()
        .zip(1..)
        .map(|(collection, position)| {
            list_entry(position, format!("/collections/{}", collection.handle))
        })
        .collect();

    SeoConfig {
        title: Some("Collections".to_string()),
        title_template: Some(site::COLLECTION_TITLE_TEMPLATE.to_string()),
        description: Some(site::COLLECTIONS_DESCRIPTION.to_string()),
        url: Some(url.to_string()),
        json_ld: Some(
            StructuredData::CollectionPage(schema::CollectionPage {
                schema_type: SchemaType::CollectionPage,
                context: SchemaContext,
                name: "Collections".to_string(),
                description: site::COLLECTIONS_JSON_LD_DESCRIPTION.to_string(),
                image: None,
                url: url.to_string(),
                main_entity: schema::ItemList {
                    schema_type: SchemaType::ItemList,
                    item_list_element,
                },
            })
            .into(),
        ),
        ..SeoConfig::default()
    }
}

/// Payload for a journal article page.
#[must_use]
pub fn article(article: &Article, url: &str) -> SeoConfig {
    let seo = article.seo.as_ref();

    SeoConfig {
        title: Some(override_or(seo_title(seo), &article.title).to_string()),
        title_template: Some(site::JOURNAL_TITLE_TEMPLATE.to_string()),
        description: Some(truncate(seo_description(seo).unwrap_or_default())),
        url: Some(url.to_string()),
        media: Some(SeoMedia::from_image(article.image.as_ref())),
        json_ld: Some(
            StructuredData::Article(schema::Article {
                schema_type: SchemaType::Article,
                context: SchemaContext,
                alternative_headline: article.title.clone(),
                article_body: article.content_html.clone(),
                date_published: article.published_at,
                description: truncate(non_empty_or(
                    seo_description(seo),
                    article.excerpt.as_deref().unwrap_or_default(),
                )),
                headline: seo_title(seo).unwrap_or_default().to_string(),
                image: article.image.as_ref().map(|image| image.url.clone()),
                url: url.to_string(),
            })
            .into(),
        ),
        ..SeoConfig::default()
    }
}

/// Payload for a blog index page.
#[must_use]
pub fn blog(blog: &Blog, url: &str) -> SeoConfig {
    let seo = blog.seo.as_ref();

    SeoConfig {
        title: seo_title(seo).map(ToString::to_string),
        title_template: Some(site::BLOG_TITLE_TEMPLATE.to_string()),
        description: Some(truncate(seo_description(seo).unwrap_or_default())),
        url: Some(url.to_string()),
        json_ld: Some(
            StructuredData::Blog(schema::Blog {
                schema_type: SchemaType::Blog,
                context: SchemaContext,
                name: non_empty_or(seo_title(seo), &blog.title).to_string(),
                description: truncate(seo_description(seo).unwrap_or_default()),
                url: url.to_string(),
            })
            .into(),
        ),
        ..SeoConfig::default()
    }
}

/// Payload for a static content page.
#[must_use]
pub fn page(page: &Page, url: &str) -> SeoConfig {
    let seo = page.seo.as_ref();

    SeoConfig {
        title: Some(override_or(seo_title(seo), &page.title).to_string()),
        title_template: Some(site::PAGE_TITLE_TEMPLATE.to_string()),
        description: Some(truncate(seo_description(seo).unwrap_or_default())),
        url: Some(url.to_string()),
        json_ld: Some(
            StructuredData::WebPage(schema::WebPage {
                schema_type: SchemaType::WebPage,
                context: SchemaContext,
                name: page.title.clone(),
                description: None,
                url: None,
            })
            .into(),
        ),
        ..SeoConfig::default()
    }
}

/// Payload for a single policy page. Carries no structured data.
#[must_use]
pub fn policy(policy: &ShopPolicy, url: &str) -> SeoConfig {
    SeoConfig {
        title: Some(policy.title.clone()),
        title_template: Some(site::POLICY_TITLE_TEMPLATE.to_string()),
        description: Some(truncate(&policy.body)),
        url: Some(url.to_string()),
        ..SeoConfig::default()
    }
}

/// Payload for the policy index page.
///
/// # Errors
///
/// Returns [`SeoError::InvalidUrl`] when `url` is not absolute.
pub fn policies(policies: &[ShopPolicy], url: &str) -> Result<SeoConfig> {
    let origin = parse_request_url(url)?.origin().ascii_serialization();

    let item_list_element = policies
        .iter()
        .zip(1..)
        .map(|(policy, position)| {
            breadcrumb(
                position,
                policy.title.clone(),
                Some(format!("{origin}/policies/{}", policy.handle)),
            )
        })
        .collect();

    Ok(SeoConfig {
        title: Some("Policies".to_string()),
        title_template: Some(site::POLICIES_TITLE_TEMPLATE.to_string()),
        description: Some(site::POLICIES_DESCRIPTION.to_string()),
        json_ld: Some(JsonLd::Many(vec![
            StructuredData::BreadcrumbList(schema::BreadcrumbList {
                schema_type: SchemaType::BreadcrumbList,
                context: SchemaContext,
                item_list_element,
            }),
            StructuredData::WebPage(schema::WebPage {
                schema_type: SchemaType::WebPage,
                context: SchemaContext,
                name: "Policies".to_string(),
                description: Some(site::POLICIES_JSON_LD_DESCRIPTION.to_string()),
                url: Some(url.to_string()),
            }),
        ])),
        ..SeoConfig::default()
    })
}

// =============================================================================
// Truncation
// =============================================================================

/// Maximum meta-description length in characters.
const MAX_DESCRIPTION_LENGTH: usize = 155;

/// Truncate a description to at most 155 characters.
///
/// Strings within the limit pass through unchanged; longer strings are cut
/// to 152 characters and suffixed with `...`, so the result is always at
/// most 155 characters and the operation is idempotent.
#[must_use]
pub fn truncate(input: &str) -> String {
    truncate_to(input, MAX_DESCRIPTION_LENGTH)
}

/// Truncate to at most `max` characters, ellipsis included.
///
/// Operates on characters, not bytes, so multi-byte input never splits a
/// code point.
#[must_use]
pub fn truncate_to(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        return input.to_string();
    }
    let kept: String = input.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

// =============================================================================
// Fallback chains
// =============================================================================

/// The title of an SEO override, when one is present at both levels.
fn seo_title(seo: Option<&Seo>) -> Option<&str> {
    seo.and_then(|seo| seo.title.as_deref())
}

/// The description of an SEO override, when one is present at both levels.
fn seo_description(seo: Option<&Seo>) -> Option<&str> {
    seo.and_then(|seo| seo.description.as_deref())
}

/// Nullish-style fallback: the override when present, even if empty.
fn override_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}

/// Falsy-style fallback: the first non-empty value, else the fallback.
fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    }
}

// =============================================================================
// URL and price helpers
// =============================================================================

fn parse_request_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| SeoError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

fn parse_amount(money: &Money) -> Result<Decimal> {
    money.amount.parse().map_err(|source| SeoError::InvalidPrice {
        amount: money.amount.clone(),
        source,
    })
}

/// The request URL with each of the variant's selected options set as a
/// query parameter, replacing any same-named parameter already present.
fn with_selected_options(url: &Url, options: &[SelectedOption]) -> Url {
    let mut out = url.clone();
    for option in options {
        set_query_param(&mut out, &option.name, &option.value);
    }
    out
}

fn set_query_param(url: &mut Url, name: &str, value: &str) {
    let existing: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key.as_ref() != name)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &existing {
        pairs.append_pair(key, value);
    }
    pairs.append_pair(name, value);
}

fn breadcrumb(position: i64, name: impl Into<String>, item: Option<String>) -> schema::ListItem {
    schema::ListItem {
        schema_type: SchemaType::ListItem,
        position,
        name: Some(name.into()),
        item,
        url: None,
    }
}

fn list_entry(position: i64, url: String) -> schema::ListItem {
    schema::ListItem {
        schema_type: SchemaType::ListItem,
        position,
        name: None,
        item: None,
        url: Some(url),
    }
}
