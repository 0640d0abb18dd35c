//! Site-wide brand constants.
//!
//! The builder is a pure library, so its configuration is compile-time:
//! brand strings, per-section title templates, and social links. Title
//! templates use `%s` as the page-title placeholder.

/// Brand name used as the site-wide title fallback.
pub const SITE_NAME: &str = "Blackneck Coffee";

/// Twitter/X handle for social card attribution.
pub const TWITTER_HANDLE: &str = "@blackneckcoffee";

/// Social profile URLs for the Organization `sameAs` links.
pub const SOCIAL_LINKS: &[&str] = &["https://instagram.com/blackneckcoffee"];

/// Default title template for the root and home pages.
pub const TITLE_TEMPLATE: &str = "%s | Blackneck Coffee – Yunnan Specialty Coffee";

/// Title template for collection pages.
pub const COLLECTION_TITLE_TEMPLATE: &str = "%s | Blackneck Coffee Collections";

/// Title template for journal articles.
pub const JOURNAL_TITLE_TEMPLATE: &str = "%s | Blackneck Coffee Journal";

/// Title template for blog pages.
pub const BLOG_TITLE_TEMPLATE: &str = "%s | Blackneck Coffee Blog";

/// Title template for static content pages.
pub const PAGE_TITLE_TEMPLATE: &str = "%s | Blackneck Coffee";

/// Title template for a single policy page.
pub const POLICY_TITLE_TEMPLATE: &str = "%s | Blackneck Coffee Policy";

/// Title template for the policy index page.
pub const POLICIES_TITLE_TEMPLATE: &str = "%s | Blackneck Coffee Policies";

/// Shop description fallback when the shop record carries none.
pub const DEFAULT_SHOP_DESCRIPTION: &str =
    "Single-origin Yunnan specialty coffee, ethically sourced from highland farms.";

/// Static description for the home page.
pub const HOME_DESCRIPTION: &str =
    "Discover single-origin Yunnan coffee crafted from high-altitude farms. Freshly roasted, ethically sourced.";

/// Static description for the collection index page.
pub const COLLECTIONS_DESCRIPTION: &str =
    "Browse curated coffee collections from Yunnan’s highland farms.";

/// Static description for the collection index JSON-LD entity.
pub const COLLECTIONS_JSON_LD_DESCRIPTION: &str =
    "Explore coffee collections from Blackneck Coffee.";

/// Static description for the policy index page.
pub const POLICIES_DESCRIPTION: &str = "Store policies for Blackneck Coffee.";

/// Static description for the policy index JSON-LD entity.
pub const POLICIES_JSON_LD_DESCRIPTION: &str = "Blackneck Coffee policy information";

/// Site-wide default meta title, used when a payload carries no title.
pub const DEFAULT_META_TITLE: &str = "Blackneck Coffee | Yunnan Specialty Coffee";

/// Site-wide default meta description.
pub const DEFAULT_META_DESCRIPTION: &str =
    "High-altitude Arabica coffee from Yunnan’s pristine highlands — inspired by the Black-necked Crane, dedicated to purity, craftsmanship, and sustainability.";

/// Meta keywords emitted on every page.
pub const META_KEYWORDS: &str =
    "Blackneck Coffee, Yunnan coffee, specialty coffee, single origin, sustainable coffee, high altitude coffee, Black-necked Crane";
