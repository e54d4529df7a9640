//! Built-in product catalog.

use serde::{Deserialize, Serialize};

/// A product shown in the list and detail panes.
///
/// Products carry no identity: two products with the same fields are the
/// same product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Price with a currency prefix and two decimals, e.g. `$0.16`.
    pub fn formatted_price(&self, currency: &str) -> String {
        format!("{}{:.2}", currency, self.price)
    }
}

/// Ordered, immutable product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The five-fruit demo catalog.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new("Apples", "Red circular fruit", 2.99),
                Product::new("Banana", "Yellow fruit", 0.16),
                Product::new("Orange", "Orange circular fruit", 3.29),
                Product::new("Strawberry", "Red, heart-shaped fruit", 2.85),
                Product::new("Blueberries", "Small, blue, circular fruit", 4.95),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Position of a product in the catalog, by structural equality.
    pub fn position(&self, product: &Product) -> Option<usize> {
        self.products.iter().position(|p| p == product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Apples", "Banana", "Orange", "Strawberry", "Blueberries"]
        );
    }

    #[test]
    fn formatted_price_uses_two_decimals() {
        let banana = Product::new("Banana", "Yellow fruit", 0.16);
        assert_eq!(banana.formatted_price("$"), "$0.16");
        let round = Product::new("Melon", "Big", 3.0);
        assert_eq!(round.formatted_price("€"), "€3.00");
    }

    #[test]
    fn position_uses_structural_equality() {
        let catalog = Catalog::builtin();
        let orange = Product::new("Orange", "Orange circular fruit", 3.29);
        assert_eq!(catalog.position(&orange), Some(2));
        let fake = Product::new("Orange", "Different", 3.29);
        assert_eq!(catalog.position(&fake), None);
    }
}
