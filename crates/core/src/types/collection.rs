//! Collection domain types.

use serde::{Deserialize, Serialize};

use super::common::{Image, PageInfo, Seo};
use super::product::Product;

/// A collection of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Collection title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// SEO metadata override.
    pub seo: Option<Seo>,
    /// Collection image.
    pub image: Option<Image>,
    /// Current page of products in this collection.
    pub products: Vec<Product>,
}

/// Paginated list of collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConnection {
    /// Collections in this page.
    pub collections: Vec<Collection>,
    /// Pagination info.
    pub page_info: PageInfo,
}
