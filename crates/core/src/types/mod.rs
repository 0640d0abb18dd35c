//! Domain types for the Blackneck Coffee storefront.
//!
//! These mirror the Shopify Storefront API objects the storefront consumes,
//! with a clean, ergonomic shape independent of any query-generation layer.

pub mod collection;
pub mod common;
pub mod content;
pub mod product;
pub mod shop;

pub use collection::{Collection, CollectionConnection};
pub use common::{Image, Money, PageInfo, Seo};
pub use content::{Article, Blog, Page};
pub use product::{Product, ProductVariant, SelectedOption};
pub use shop::{BrandImage, Shop, ShopBrand, ShopPolicy};
