use super::*;

#[test]
fn product_accepts_numeric_id_and_string_price() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "RTX 4070",
        "price": "599.99",
        "category": "gpu"
    }))
    .unwrap();
    assert_eq!(product.id, "42");
    assert!((product.price - 599.99).abs() < f64::EPSILON);
    assert_eq!(product.image, "");
    assert_eq!(product.stock, None);
}

#[test]
fn product_rejects_negative_price() {
    let result: Result<Product, _> = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Broken",
        "price": -1
    }));
    assert!(result.is_err());
}

#[test]
fn product_rejects_object_id() {
    let result: Result<Product, _> = serde_json::from_value(serde_json::json!({
        "id": {"nested": true},
        "name": "Broken",
        "price": 1
    }));
    assert!(result.is_err());
}

#[test]
fn order_request_omits_empty_optionals() {
    let order = OrderRequest {
        company_data: CompanyData {
            name: "Acme".to_owned(),
            email: "buyer@acme.test".to_owned(),
            ..CompanyData::default()
        },
        cart_items: vec![OrderLine { product_id: "p1".to_owned(), quantity: 2 }],
        notes: None,
    };
    assert_eq!(
        serde_json::to_value(&order).unwrap(),
        serde_json::json!({
            "company_data": { "name": "Acme", "email": "buyer@acme.test" },
            "cart_items": [{ "product_id": "p1", "quantity": 2 }]
        })
    );
}

#[test]
fn order_confirmation_accepts_id_alias() {
    let confirmation: OrderConfirmation =
        serde_json::from_value(serde_json::json!({ "id": 77, "status": "pending", "total": "120.50" })).unwrap();
    assert_eq!(confirmation.order_id, "77");
    assert_eq!(confirmation.status.as_deref(), Some("pending"));
    assert_eq!(confirmation.total, Some(120.5));
}

#[test]
fn dashboard_defaults_missing_orders() {
    let dashboard: CompanyDashboard = serde_json::from_value(serde_json::json!({
        "company": { "id": 3, "name": "Acme" }
    }))
    .unwrap();
    assert_eq!(dashboard.company.id, "3");
    assert!(dashboard.orders.is_empty());
}
