//! Typed schema.org JSON-LD vocabulary.
//!
//! Only the types the storefront actually emits are modeled. Every object
//! carries its `@type` discriminator; objects that appear at the top level
//! of a `<script type="application/ld+json">` block also carry the
//! `@context` IRI. Property names serialize in the vocabulary's camelCase.
//!
//! Fields absent from source data are either omitted from the output
//! (`Option` + `skip_serializing_if`) or degrade to an empty string,
//! matching what search engines tolerate per field.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// The shared vocabulary context IRI.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Marker for the `@context` property, serialized as the schema.org IRI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaContext;

impl Serialize for SchemaContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(SCHEMA_ORG_CONTEXT)
    }
}

/// The `@type` discriminator for every vocabulary type this crate emits.
///
/// The set is closed: adding a page type that needs a new entity means
/// adding a variant here, never emitting a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaType {
    Organization,
    WebPage,
    Product,
    CollectionPage,
    Article,
    Blog,
    BreadcrumbList,
    ItemList,
    ListItem,
    Offer,
    Brand,
    SearchAction,
}

/// Stock status of an offer. Binary: there is no backorder/preorder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemAvailability {
    /// The variant is available for sale.
    #[serde(rename = "https://schema.org/InStock")]
    InStock,
    /// The variant is not available for sale.
    #[serde(rename = "https://schema.org/OutOfStock")]
    OutOfStock,
}

impl ItemAvailability {
    /// Map a variant's `available_for_sale` flag to an availability URI.
    #[must_use]
    pub const fn from_available_for_sale(available: bool) -> Self {
        if available { Self::InStock } else { Self::OutOfStock }
    }
}

// =============================================================================
// Nested entities (no @context)
// =============================================================================

/// A site search action template on the Organization entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAction {
    /// Always `SchemaType::SearchAction`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// URL template containing the `{search_term}` placeholder.
    pub target: String,
    /// Placeholder declaration, e.g. `required name='search_term'`.
    pub query: String,
}

/// A product brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Always `SchemaType::Brand`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Brand name (the product vendor).
    pub name: String,
}

/// A purchasable offer for one product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Always `SchemaType::Offer`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Stock status URI.
    pub availability: ItemAvailability,
    /// Price amount. Serialized as a decimal string, never a float.
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub price_currency: String,
    /// SKU code, empty when the variant has none.
    pub sku: String,
    /// URL selecting this variant.
    pub url: String,
}

/// An entry in a `BreadcrumbList` or `ItemList`.
///
/// Breadcrumb entries carry `name`/`item`; collection list entries carry
/// only a relative `url`. Absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Always `SchemaType::ListItem`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// 1-based position, strictly increasing in listed order.
    pub position: i64,
    /// Display name of the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Link target for breadcrumb entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Link target for item-list entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An ordered list of items (the `mainEntity` of a `CollectionPage`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    /// Always `SchemaType::ItemList`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// The entries, positions 1-based in listed order.
    pub item_list_element: Vec<ListItem>,
}

// =============================================================================
// Top-level entities (carry @context)
// =============================================================================

/// The shop as an organization, emitted on the root payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Always `SchemaType::Organization`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// Shop name.
    pub name: String,
    /// Brand logo URL, omitted when the shop has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Social profile URLs.
    pub same_as: Vec<String>,
    /// Canonical site URL.
    pub url: String,
    /// Site search action template.
    pub potential_action: SearchAction,
}

/// A generic web page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    /// Always `SchemaType::WebPage`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// Page name.
    pub name: String,
    /// Page description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A product with its purchasable offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Always `SchemaType::Product`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// Product brand (the vendor).
    pub brand: Brand,
    /// Truncated product description.
    pub description: String,
    /// Image URLs; a single entry that may be empty when no image exists.
    pub image: Vec<String>,
    /// Product title.
    pub name: String,
    /// One offer per purchasable variant.
    pub offers: Vec<Offer>,
    /// Selected variant SKU, empty when none.
    pub sku: String,
    /// Canonical product URL.
    pub url: String,
}

/// A collection page listing products (or collections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    /// Always `SchemaType::CollectionPage`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// Collection name.
    pub name: String,
    /// Truncated collection description.
    pub description: String,
    /// Collection image URL, omitted when none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Collection URL.
    pub url: String,
    /// The listed entries.
    pub main_entity: ItemList,
}

/// A journal article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Always `SchemaType::Article`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// Secondary headline (the article's generic title).
    pub alternative_headline: String,
    /// Raw article body HTML.
    pub article_body: String,
    /// Publication timestamp, RFC 3339.
    pub date_published: DateTime<FixedOffset>,
    /// Truncated description.
    pub description: String,
    /// Primary headline (the SEO override title, empty when none).
    pub headline: String,
    /// Hero image URL, omitted when none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Canonical article URL.
    pub url: String,
}

/// A blog index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Always `SchemaType::Blog`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// Blog name.
    pub name: String,
    /// Truncated blog description.
    pub description: String,
    /// Canonical blog URL.
    pub url: String,
}

/// A breadcrumb trail from site root to the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    /// Always `SchemaType::BreadcrumbList`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Always the schema.org context.
    #[serde(rename = "@context")]
    pub context: SchemaContext,
    /// The trail entries, positions 1-based in listed order.
    pub item_list_element: Vec<ListItem>,
}

// =============================================================================
// Payload aggregation
// =============================================================================

/// Any top-level structured-data object a payload can carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    /// Organization entity (root payload).
    Organization(Organization),
    /// Generic web page entity.
    WebPage(WebPage),
    /// Product entity with offers.
    Product(Product),
    /// Collection page entity.
    CollectionPage(CollectionPage),
    /// Journal article entity.
    Article(Article),
    /// Blog index entity.
    Blog(Blog),
    /// Breadcrumb trail entity.
    BreadcrumbList(BreadcrumbList),
}

/// One or more structured-data objects attached to a payload.
///
/// Order is significant: a breadcrumb trail precedes the primary entity,
/// and downstream renderers emit one `<script>` block per entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    /// A single structured-data object.
    One(Box<StructuredData>),
    /// An ordered sequence of structured-data objects.
    Many(Vec<StructuredData>),
}

impl From<StructuredData> for JsonLd {
    fn from(data: StructuredData) -> Self {
        Self::One(Box::new(data))
    }
}

impl From<Vec<StructuredData>> for JsonLd {
    fn from(data: Vec<StructuredData>) -> Self {
        Self::Many(data)
    }
}

impl JsonLd {
    /// The structured-data objects in emission order.
    #[must_use]
    pub fn entries(&self) -> &[StructuredData] {
        match self {
            Self::One(data) => std::slice::from_ref(data),
            Self::Many(data) => data,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offer_serialization() {
        let offer = Offer {
            schema_type: SchemaType::Offer,
            availability: ItemAvailability::InStock,
            price: "18.00".parse().unwrap(),
            price_currency: "USD".to_string(),
            sku: "YW-250-WB".to_string(),
            url: "https://blackneckcoffee.com/products/yunnan-washed".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&offer).unwrap(),
            json!({
                "@type": "Offer",
                "availability": "https://schema.org/InStock",
                "price": "18.00",
                "priceCurrency": "USD",
                "sku": "YW-250-WB",
                "url": "https://blackneckcoffee.com/products/yunnan-washed",
            })
        );
    }

    #[test]
    fn test_availability_mapping() {
        assert_eq!(
            ItemAvailability::from_available_for_sale(true),
            ItemAvailability::InStock
        );
        assert_eq!(
            ItemAvailability::from_available_for_sale(false),
            ItemAvailability::OutOfStock
        );
    }

    #[test]
    fn test_web_page_omits_absent_fields() {
        let page = WebPage {
            schema_type: SchemaType::WebPage,
            context: SchemaContext,
            name: "Home page".to_string(),
            description: None,
            url: None,
        };
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "@type": "WebPage",
                "@context": "https://schema.org",
                "name": "Home page",
            })
        );
    }

    #[test]
    fn test_json_ld_one_serializes_as_object() {
        let json_ld = JsonLd::from(StructuredData::WebPage(WebPage {
            schema_type: SchemaType::WebPage,
            context: SchemaContext,
            name: "Policies".to_string(),
            description: None,
            url: None,
        }));
        let value = serde_json::to_value(&json_ld).unwrap();
        assert!(value.is_object());
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(json_ld.entries().len(), 1);
    }

    #[test]
    fn test_json_ld_many_serializes_as_array() {
        let breadcrumbs = StructuredData::BreadcrumbList(BreadcrumbList {
            schema_type: SchemaType::BreadcrumbList,
            context: SchemaContext,
            item_list_element: vec![ListItem {
                schema_type: SchemaType::ListItem,
                position: 1,
                name: Some("Products".to_string()),
                item: Some("https://blackneckcoffee.com/products".to_string()),
                url: None,
            }],
        });
        let page = StructuredData::WebPage(WebPage {
            schema_type: SchemaType::WebPage,
            context: SchemaContext,
            name: "Policies".to_string(),
            description: None,
            url: None,
        });

        let json_ld = JsonLd::from(vec![breadcrumbs, page]);
        let value = serde_json::to_value(&json_ld).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        // Breadcrumb trail precedes the primary entity.
        assert_eq!(entries[0]["@type"], "BreadcrumbList");
        assert_eq!(entries[1]["@type"], "WebPage");
    }

    #[test]
    fn test_list_item_omits_absent_links() {
        let item = ListItem {
            schema_type: SchemaType::ListItem,
            position: 2,
            name: Some("Yunnan Washed".to_string()),
            item: None,
            url: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({ "@type": "ListItem", "position": 2, "name": "Yunnan Washed" })
        );
    }
}
