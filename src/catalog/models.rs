//! Data models for catalog responses

use serde::{Deserialize, Serialize};

/// Aggregate customer rating for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating on a 0 to 5 scale
    pub rate: f64,
    /// Number of ratings behind the average
    pub count: u32,
}

impl Rating {
    /// Render the rating as five star glyphs
    pub fn stars(&self) -> String {
        let filled = self.rate.round().clamp(0.0, 5.0) as usize;
        let mut stars = "★".repeat(filled);
        stars.push_str(&"☆".repeat(5 - filled));
        stars
    }
}

/// One product record from the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Remote image URL, unused by the terminal renderer but kept for
    /// wire-format fidelity
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Price formatted for display
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn product_deserializes_from_wire_json() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn price_label_formats_two_decimals() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.price_label(), "$109.95");
    }

    #[test]
    fn stars_round_the_average() {
        assert_eq!(Rating { rate: 3.9, count: 1 }.stars(), "★★★★☆");
        assert_eq!(Rating { rate: 0.2, count: 1 }.stars(), "☆☆☆☆☆");
        assert_eq!(Rating { rate: 5.0, count: 1 }.stars(), "★★★★★");
    }

    #[test]
    fn product_list_deserializes() {
        let list = format!("[{SAMPLE},{SAMPLE}]");
        let products: Vec<Product> = serde_json::from_str(&list).unwrap();
        assert_eq!(products.len(), 2);
    }
}
