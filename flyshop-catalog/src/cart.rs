use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: i32, quantity: i32 },
}

/// A line in a shopping cart.
///
/// The item keeps its own copy of the product it references; many items may
/// point at the same product. The subtotal is always computed from the
/// current price and quantity, never stored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", into = "CartItemView")]
pub struct CartItem {
    pub item_id: i32,
    pub product: Product,
    quantity: i32,
}

impl CartItem {
    pub fn new(item_id: i32, product: Product, quantity: i32) -> Result<Self, CatalogError> {
        if quantity <= 0 {
            return Err(CatalogError::InvalidQuantity {
                product_id: product.product_id,
                quantity,
            });
        }

        Ok(Self { item_id, product, quantity })
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i32) -> Result<(), CatalogError> {
        if quantity <= 0 {
            return Err(CatalogError::InvalidQuantity {
                product_id: self.product.product_id,
                quantity,
            });
        }
        self.quantity = quantity;
        Ok(())
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartItemView {
    item_id: i32,
    product: Product,
    quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    subtotal: Decimal,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            item_id: item.item_id,
            product: item.product,
            quantity: item.quantity,
            subtotal,
        }
    }
}

/// Ordered collection of cart items with a derived total.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", into = "ShoppingCartView")]
pub struct ShoppingCart {
    pub cart_id: i32,
    #[serde(default)]
    items: Vec<CartItem>,
}

impl ShoppingCart {
    pub fn new(cart_id: i32) -> Self {
        Self { cart_id, items: Vec::new() }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, item_id: i32) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.item_id == item_id)?;
        Some(self.items.remove(index))
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShoppingCartView {
    cart_id: i32,
    items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::float")]
    total_price: Decimal,
}

impl From<ShoppingCart> for ShoppingCartView {
    fn from(cart: ShoppingCart) -> Self {
        let total_price = cart.total_price();
        Self {
            cart_id: cart.cart_id,
            items: cart.items,
            total_price,
        }
    }
}
