// ═══════════════════════════════════════════════════════════════════
// Error Tests — CartError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use shopcart_core::errors::CartError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn out_of_stock() {
        let err = CartError::OutOfStock {
            product_id: 3,
            requested: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "Requested quantity for product 3 is out of stock (4 requested, 2 available)"
        );
    }

    #[test]
    fn product_not_in_cart() {
        let err = CartError::ProductNotInCart(42);
        assert_eq!(err.to_string(), "Product 42 is not in the cart");
    }

    #[test]
    fn product_not_found() {
        let err = CartError::ProductNotFound(9);
        assert_eq!(err.to_string(), "Product not found in catalog: 9");
    }

    #[test]
    fn api_error() {
        let err = CartError::Api {
            status: 500,
            message: "internal error".into(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog API error (HTTP 500): internal error"
        );
    }

    #[test]
    fn network() {
        let err = CartError::Network("timeout".into());
        assert_eq!(err.to_string(), "Network error: timeout");
    }

    #[test]
    fn storage() {
        let err = CartError::Storage("disk full".into());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn serialization() {
        let err = CartError::Serialization("bad value".into());
        assert_eq!(err.to_string(), "Serialization error: bad value");
    }

    #[test]
    fn deserialization() {
        let err = CartError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── Classification ──────────────────────────────────────────────────

mod classification {
    use super::*;

    #[test]
    fn only_the_stock_gate_is_out_of_stock() {
        let business = CartError::OutOfStock {
            product_id: 1,
            requested: 2,
            available: 1,
        };
        assert!(business.is_out_of_stock());
        assert!(!CartError::ProductNotInCart(1).is_out_of_stock());
        assert!(!CartError::Network("down".into()).is_out_of_stock());
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: CartError = io.into();
        assert!(matches!(err, CartError::Storage(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: CartError = parse_err.into();
        assert!(matches!(err, CartError::Deserialization(_)));
    }
}
