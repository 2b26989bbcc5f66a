//! # Product Types
//!
//! Product catalog types for the Cosmic Soul Quest store.
//! Products are loaded from `config/products.toml` and are immutable at
//! runtime: the catalog is declared at deployment time, never mutated.

use serde::{Deserialize, Serialize};

/// Billing period for recurring price items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Week,
    Month,
    Year,
}

impl RecurringInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringInterval::Week => "week",
            RecurringInterval::Month => "month",
            RecurringInterval::Year => "year",
        }
    }
}

impl std::fmt::Display for RecurringInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single price attached to a product.
///
/// `amount` is in minor currency units (cents). An absent `interval`
/// means a one-time purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceItem {
    /// Amount in smallest currency unit (cents)
    pub amount: i64,

    /// Billing interval; `None` for one-time purchases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<RecurringInterval>,
}

impl PriceItem {
    /// One-time price in minor units
    pub fn one_time(amount: i64) -> Self {
        Self {
            amount,
            interval: None,
        }
    }

    /// Recurring price in minor units
    pub fn recurring(amount: i64, interval: RecurringInterval) -> Self {
        Self {
            amount,
            interval: Some(interval),
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.interval.is_some()
    }

    /// Format for display (e.g., "$47.00" or "$19.00/month")
    pub fn display(&self) -> String {
        let base = format!("${:.2}", self.amount as f64 / 100.0);
        match self.interval {
            Some(interval) => format!("{}/{}", base, interval),
            None => base,
        }
    }
}

/// A product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (e.g., "academy_warrior")
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// One or more price items
    pub items: Vec<PriceItem>,

    /// Whether this product is active and available for purchase
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create a new one-time purchase product
    pub fn one_time(id: impl Into<String>, name: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            items: vec![PriceItem::one_time(amount)],
            active: true,
        }
    }

    /// Create a new subscription product
    pub fn subscription(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: i64,
        interval: RecurringInterval,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            items: vec![PriceItem::recurring(amount, interval)],
            active: true,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: add a price item
    pub fn with_item(mut self, item: PriceItem) -> Self {
        self.items.push(item);
        self
    }

    /// Check if any price item recurs
    pub fn is_subscription(&self) -> bool {
        self.items.iter().any(|i| i.is_recurring())
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get all active products, in declaration order
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.active)
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_item_display() {
        assert_eq!(PriceItem::one_time(4700).display(), "$47.00");
        assert_eq!(
            PriceItem::recurring(1900, RecurringInterval::Month).display(),
            "$19.00/month"
        );
    }

    #[test]
    fn test_product_builder() {
        let product = Product::one_time("academy_warrior", "Soul Warrior Academy", 4700)
            .with_description("The foundational path");

        assert_eq!(product.id, "academy_warrior");
        assert_eq!(product.items.len(), 1);
        assert_eq!(product.items[0].amount, 4700);
        assert!(!product.is_subscription());
        assert!(product.active);
    }

    #[test]
    fn test_subscription_detection() {
        let product = Product::subscription(
            "cosmic_circle_monthly",
            "Cosmic Circle",
            1900,
            RecurringInterval::Month,
        );
        assert!(product.is_subscription());

        // A bundle with a one-time and a recurring item still counts
        let bundle = Product::one_time("bundle", "Bundle", 9700)
            .with_item(PriceItem::recurring(900, RecurringInterval::Month));
        assert!(bundle.is_subscription());
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = ProductCatalog::new();
        catalog.add(Product::one_time("academy_warrior", "Soul Warrior Academy", 4700));
        catalog.add(Product::subscription(
            "cosmic_circle_monthly",
            "Cosmic Circle",
            1900,
            RecurringInterval::Month,
        ));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("academy_warrior").is_some());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml_str = r#"
            [[products]]
            id = "academy_warrior"
            name = "Soul Warrior Academy"
            items = [{ amount = 4700 }]

            [[products]]
            id = "cosmic_circle_monthly"
            name = "Cosmic Circle"
            active = false
            items = [{ amount = 1900, interval = "month" }]
        "#;

        let catalog = ProductCatalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);

        let warrior = catalog.get("academy_warrior").unwrap();
        assert_eq!(warrior.items[0].amount, 4700);
        assert!(warrior.items[0].interval.is_none());

        let circle = catalog.get("cosmic_circle_monthly").unwrap();
        assert_eq!(circle.items[0].interval, Some(RecurringInterval::Month));

        // Inactive products are excluded from the active listing
        assert_eq!(catalog.active_products().count(), 1);
    }
}
