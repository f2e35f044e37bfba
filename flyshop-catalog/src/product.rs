use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable item held in the catalog store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity_in_stock: i32,
}

impl Product {
    pub fn new(product_id: i32, name: &str, price: Decimal, quantity_in_stock: i32) -> Self {
        Self {
            product_id,
            name: Some(name.to_string()),
            description: None,
            price,
            quantity_in_stock,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(7, "Travel Pillow", Decimal::new(1250, 2), 12)
            .with_description("Memory foam");

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productId"], 7);
        assert_eq!(json["name"], "Travel Pillow");
        assert_eq!(json["description"], "Memory foam");
        assert_eq!(json["price"], 12.5);
        assert_eq!(json["quantityInStock"], 12);
    }

    #[test]
    fn test_product_without_name_deserializes() {
        let json = r#"{"productId":1,"name":null,"description":null,"price":5.5,"quantityInStock":0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, None);
        assert_eq!(product.price, Decimal::new(55, 1));
        assert_eq!(product.quantity_in_stock, 0);
    }
}
