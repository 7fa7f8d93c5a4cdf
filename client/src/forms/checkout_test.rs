use super::*;
use crate::state::cart::CartItem;

fn filled() -> CheckoutForm {
    CheckoutForm {
        company_name: "Acme Hardware".to_owned(),
        ruc: "20123456789".to_owned(),
        email: "buyer@acme.test".to_owned(),
        phone: "+51 999 888 777".to_owned(),
        address: "Av. Siempre Viva 742".to_owned(),
        city: String::new(),
        contact_name: "Ana Torres".to_owned(),
        notes: "  ".to_owned(),
        company_id: None,
    }
}

fn cart() -> Cart {
    let mut cart = Cart::default();
    cart.add(CartItem {
        id: "cpu".to_owned(),
        quantity: 2,
        price: 300.0,
        name: "CPU".to_owned(),
        image: String::new(),
        category: "cpu".to_owned(),
    });
    cart
}

#[test]
fn complete_form_validates() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn each_required_field_blocks_with_its_own_message() {
    let cases: [(fn(&mut CheckoutForm), &str, &str); 6] = [
        (|f| f.company_name.clear(), "company_name", "Company name is required."),
        (|f| f.ruc.clear(), "ruc", "RUC is required."),
        (|f| f.email.clear(), "email", "Email is required."),
        (|f| f.phone = "   ".to_owned(), "phone", "Phone is required."),
        (|f| f.address.clear(), "address", "Address is required."),
        (|f| f.contact_name.clear(), "contact_name", "Contact name is required."),
    ];
    for (blank, field, message) in cases {
        let mut form = filled();
        blank(&mut form);
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, field);
        assert_eq!(err.message, message);
    }
}

#[test]
fn first_invalid_field_is_reported() {
    let mut form = filled();
    form.phone.clear();
    form.company_name.clear();
    assert_eq!(form.validate().unwrap_err().field, "company_name");
}

#[test]
fn email_without_at_sign_is_rejected() {
    let mut form = filled();
    form.email = "buyer.acme.test".to_owned();
    assert_eq!(form.validate().unwrap_err().message, "Enter a valid email address.");
}

#[test]
fn empty_cart_is_rejected() {
    let err = filled().to_order_request(&Cart::default()).unwrap_err();
    assert_eq!(err.field, "cart");
}

#[test]
fn order_request_omits_blank_optionals() {
    let order = filled().to_order_request(&cart()).unwrap();
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["cart_items"], serde_json::json!([{ "product_id": "cpu", "quantity": 2 }]));
    assert_eq!(json["company_data"]["ruc"], "20123456789");
    assert!(json["company_data"].get("city").is_none());
    assert!(json["company_data"].get("company_id").is_none());
    assert!(json.get("notes").is_none());
}

#[test]
fn prefilled_form_carries_company_id() {
    let company = Company {
        id: "c-9".to_owned(),
        name: "Acme".to_owned(),
        email: "ops@acme.test".to_owned(),
        phone: "1".to_owned(),
        ruc: "2".to_owned(),
        address: "3".to_owned(),
        city: "Lima".to_owned(),
        country: String::new(),
        contact_name: "Ana".to_owned(),
    };
    let order = CheckoutForm::from_company(&company).to_order_request(&cart()).unwrap();
    assert_eq!(order.company_data.company_id.as_deref(), Some("c-9"));
    assert_eq!(order.company_data.city.as_deref(), Some("Lima"));
}
