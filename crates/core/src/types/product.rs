//! Product domain types.

use serde::{Deserialize, Serialize};

use super::common::{Image, Money, Seo};

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Grind").
    pub name: String,
    /// Selected value (e.g., "250g", "Whole Bean").
    pub value: String,
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// Whether this variant is available for sale.
    pub available_for_sale: bool,
    /// SKU code.
    pub sku: Option<String>,
    /// Current price. Required: an offer cannot be constructed without it.
    pub price: Money,
    /// Compare-at price (original price if on sale).
    pub compare_at_price: Option<Money>,
    /// Selected options for this variant.
    pub selected_options: Vec<SelectedOption>,
    /// Variant image.
    pub image: Option<Image>,
}

/// A product in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// Whether any variant is available.
    pub available_for_sale: bool,
    /// Vendor name.
    pub vendor: String,
    /// SEO metadata override.
    pub seo: Option<Seo>,
    /// Featured image.
    pub featured_image: Option<Image>,
    /// All product variants.
    pub variants: Vec<ProductVariant>,
    /// The variant matching the request's selected options, or the first
    /// available variant when none match.
    pub selected_or_first_available_variant: Option<ProductVariant>,
    /// Sibling variants differing by one or more selectable options.
    pub adjacent_variants: Vec<ProductVariant>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_storefront_shape() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "gid://shopify/Product/1",
            "handle": "yunnan-washed",
            "title": "Yunnan Washed",
            "description": "A washed-process lot from Baoshan.",
            "available_for_sale": true,
            "vendor": "Blackneck Coffee",
            "seo": { "title": null, "description": "Bright and floral." },
            "featured_image": null,
            "variants": [],
            "selected_or_first_available_variant": {
                "id": "gid://shopify/ProductVariant/11",
                "title": "250g / Whole Bean",
                "available_for_sale": true,
                "sku": "YW-250-WB",
                "price": { "amount": "18.00", "currency_code": "USD" },
                "compare_at_price": null,
                "selected_options": [
                    { "name": "Size", "value": "250g" },
                    { "name": "Grind", "value": "Whole Bean" }
                ],
                "image": null
            },
            "adjacent_variants": []
        }))
        .unwrap();

        assert_eq!(product.handle, "yunnan-washed");
        let variant = product.selected_or_first_available_variant.unwrap();
        assert_eq!(variant.price.amount, "18.00");
        assert_eq!(variant.selected_options.len(), 2);
        assert!(product.seo.unwrap().title.is_none());
    }
}
