//! Shop-level domain types.

use serde::{Deserialize, Serialize};

use super::common::Image;

/// Brand image wrapper (the Storefront API nests the image one level down).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandImage {
    /// The underlying image, if one has been uploaded.
    pub image: Option<Image>,
}

/// Shop brand settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopBrand {
    /// Brand logo.
    pub logo: Option<BrandImage>,
}

/// Shop-wide information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    /// Shop name.
    pub name: String,
    /// Shop description.
    pub description: Option<String>,
    /// Brand settings.
    pub brand: Option<ShopBrand>,
}

/// A shop policy (refunds, privacy, terms of service, shipping).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopPolicy {
    /// Policy ID.
    pub id: String,
    /// Policy title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Full policy text.
    pub body: String,
}
