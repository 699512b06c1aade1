// ═══════════════════════════════════════════════════════════════════
// Model Tests — Product, CartItem, Cart, StockRecord, Notification
// ═══════════════════════════════════════════════════════════════════

use shopcart_core::models::cart::Cart;
use shopcart_core::models::notification::Notification;
use shopcart_core::models::product::{CartItem, Product};
use shopcart_core::models::stock::StockRecord;

fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        image: format!("https://cdn.example.com/{id}.jpg"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// CartItem
// ═══════════════════════════════════════════════════════════════════

mod cart_item {
    use super::*;

    #[test]
    fn new_starts_at_amount_one() {
        let item = CartItem::new(product(1, "Shoe", 99.9));
        assert_eq!(item.amount, 1);
        assert_eq!(item.id(), 1);
    }

    #[test]
    fn subtotal_is_price_times_amount() {
        let mut item = CartItem::new(product(1, "Shoe", 10.5));
        item.amount = 3;
        assert!((item.subtotal() - 31.5).abs() < 1e-9);
    }

    #[test]
    fn serializes_flat() {
        let mut item = CartItem::new(product(7, "Sandal", 59.9));
        item.amount = 2;

        let value: serde_json::Value = serde_json::to_value(&item).unwrap();
        let obj = value.as_object().unwrap();

        // Product fields sit next to `amount`, with no nested object —
        // the shape the browser storefront keeps in local storage.
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["title"], "Sandal");
        assert_eq!(obj["amount"], 2);
        assert!(!obj.contains_key("product"));
    }

    #[test]
    fn deserializes_a_stored_entry() {
        let json = r#"{"id":1,"title":"Tênis","price":179.9,"image":"x.jpg","amount":4}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), 1);
        assert_eq!(item.amount, 4);
        assert_eq!(item.product.title, "Tênis");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Cart
// ═══════════════════════════════════════════════════════════════════

mod cart {
    use super::*;

    fn sample() -> Cart {
        Cart {
            items: vec![
                CartItem {
                    product: product(1, "A", 10.0),
                    amount: 2,
                },
                CartItem {
                    product: product(2, "B", 5.5),
                    amount: 1,
                },
            ],
        }
    }

    #[test]
    fn lookups() {
        let cart = sample();
        assert_eq!(cart.len(), 2);
        assert!(!cart.is_empty());
        assert!(cart.contains(1));
        assert!(!cart.contains(3));
        assert_eq!(cart.get(2).unwrap().amount, 1);
        assert!(cart.get(3).is_none());
    }

    #[test]
    fn totals() {
        let cart = sample();
        assert_eq!(cart.total_items(), 3);
        assert!((cart.total_price() - 25.5).abs() < 1e-9);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn deserializes_a_legacy_local_storage_payload() {
        let json = r#"[
            {"id":1,"title":"Tênis de Caminhada Leve","price":179.9,"image":"a.jpg","amount":1},
            {"id":2,"title":"Tênis VR Caminhada","price":139.9,"image":"b.jpg","amount":3}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(2).unwrap().amount, 3);
    }

    #[test]
    fn round_trips_through_json() {
        let cart = sample();
        let json = serde_json::to_string(&cart).unwrap();
        let reloaded: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, cart);
    }
}

// ═══════════════════════════════════════════════════════════════════
// StockRecord
// ═══════════════════════════════════════════════════════════════════

mod stock_record {
    use super::*;

    #[test]
    fn deserializes_the_stock_endpoint_payload() {
        let record: StockRecord = serde_json::from_str(r#"{"id":1,"amount":5}"#).unwrap();
        assert_eq!(record, StockRecord { id: 1, amount: 5 });
    }
}

// ═══════════════════════════════════════════════════════════════════
// Notification
// ═══════════════════════════════════════════════════════════════════

mod notification {
    use super::*;

    #[test]
    fn display_texts() {
        assert_eq!(
            Notification::OutOfStock.to_string(),
            "Requested quantity is out of stock"
        );
        assert_eq!(Notification::AddFailed.to_string(), "Failed to add product");
        assert_eq!(
            Notification::RemoveFailed.to_string(),
            "Failed to remove product"
        );
        assert_eq!(
            Notification::UpdateFailed.to_string(),
            "Failed to update product quantity"
        );
    }

    #[test]
    fn is_copy_and_comparable() {
        let n = Notification::OutOfStock;
        let m = n;
        assert_eq!(n, m);
        assert_ne!(n, Notification::AddFailed);
    }
}
