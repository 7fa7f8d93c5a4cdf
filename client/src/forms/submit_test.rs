use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::forms::bulk_order::BulkLine;
use crate::net::types::{CompanyDashboard, CompanyRegistration, OrderRequest, Product};
use crate::state::cart::{CART_STORAGE_KEY, CartItem, cart_store};
use crate::state::store::Persisted;
use crate::state::wishlist::{WISHLIST_STORAGE_KEY, Wishlist, WishlistItem, wishlist_store};
use crate::util::storage::MemoryStorage;

/// Records calls and answers with a canned result.
#[derive(Default)]
struct FakeApi {
    order_calls: Cell<usize>,
    company_calls: Cell<usize>,
    last_order: RefCell<Option<OrderRequest>>,
    fail_with: Option<ApiError>,
}

impl FakeApi {
    fn failing(err: ApiError) -> Self {
        Self { fail_with: Some(err), ..Self::default() }
    }
}

#[async_trait(?Send)]
impl StorefrontApi for FakeApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_company(&self, registration: &CompanyRegistration) -> Result<Company, ApiError> {
        self.company_calls.set(self.company_calls.get() + 1);
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(Company {
            id: "c-new".to_owned(),
            name: registration.name.clone(),
            email: registration.email.clone(),
            ..Company::default()
        })
    }

    async fn fetch_company(&self, _id: &str) -> Result<Company, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn fetch_dashboard(&self, _id: &str) -> Result<CompanyDashboard, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        self.order_calls.set(self.order_calls.get() + 1);
        *self.last_order.borrow_mut() = Some(order.clone());
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(OrderConfirmation { order_id: "o-1".to_owned(), status: Some("pending".to_owned()), total: None })
    }
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        company_name: "Acme".to_owned(),
        ruc: "20123456789".to_owned(),
        email: "buyer@acme.test".to_owned(),
        phone: "555-0100".to_owned(),
        address: "Main St 1".to_owned(),
        contact_name: "Ana".to_owned(),
        ..CheckoutForm::default()
    }
}

fn cpu() -> CartItem {
    CartItem {
        id: "cpu".to_owned(),
        quantity: 1,
        price: 300.0,
        name: "CPU".to_owned(),
        image: String::new(),
        category: "cpu".to_owned(),
    }
}

#[test]
fn successful_checkout_clears_cart_but_not_wishlist() {
    let storage = MemoryStorage::new();
    let mut cart = cart_store(storage.clone());
    let mut wishlist = wishlist_store(storage.clone());
    cart.update(|c| c.add(cpu()));
    wishlist.update(|w| {
        w.add(WishlistItem {
            id: "gpu".to_owned(),
            name: "GPU".to_owned(),
            price: 500.0,
            image: String::new(),
            category: "gpu".to_owned(),
        })
    });

    let api = FakeApi::default();
    let confirmation = block_on(submit_checkout(&api, &checkout_form(), &mut cart)).unwrap();

    assert_eq!(confirmation.order_id, "o-1");
    assert!(cart.is_empty());
    assert_eq!(Persisted::<Cart, _>::open(CART_STORAGE_KEY, storage.clone()).count(), 0);
    assert_eq!(wishlist.count(), 1);
    assert_eq!(Persisted::<Wishlist, _>::open(WISHLIST_STORAGE_KEY, storage).count(), 1);

    let sent = api.last_order.borrow().clone().unwrap();
    assert_eq!(sent.cart_items.len(), 1);
    assert_eq!(sent.cart_items[0].product_id, "cpu");
}

#[test]
fn empty_required_field_blocks_without_calling_api() {
    let mut cart = cart_store(MemoryStorage::new());
    cart.update(|c| c.add(cpu()));
    let mut form = checkout_form();
    form.address.clear();

    let api = FakeApi::default();
    let err = block_on(submit_checkout(&api, &form, &mut cart)).unwrap_err();

    assert_eq!(err.field(), Some("address"));
    assert_eq!(err.banner_message(), "Address is required.");
    assert_eq!(api.order_calls.get(), 0);
    assert_eq!(cart.count(), 1);
}

#[test]
fn failed_checkout_keeps_cart_and_surfaces_message() {
    let mut cart = cart_store(MemoryStorage::new());
    cart.update(|c| c.add(cpu()));
    let api = FakeApi::failing(ApiError::Response {
        status: 409,
        data: serde_json::json!({ "message": "Insufficient stock for CPU" }),
    });

    let err = block_on(submit_checkout(&api, &checkout_form(), &mut cart)).unwrap_err();

    assert_eq!(api.order_calls.get(), 1);
    assert!(err.banner_message().contains("Insufficient stock for CPU"));
    assert_eq!(err.banner_message(), "Error 409: Insufficient stock for CPU");
    assert_eq!(err.field(), None);
    assert_eq!(cart.count(), 1);
}

#[test]
fn bulk_order_posts_lines() {
    let api = FakeApi::default();
    let form = BulkOrderForm {
        company_name: "Acme".to_owned(),
        email: "buyer@acme.test".to_owned(),
        lines: vec![BulkLine { product_id: "ram".to_owned(), quantity: "40".to_owned() }],
        ..BulkOrderForm::default()
    };
    block_on(submit_bulk_order(&api, &form)).unwrap();
    let sent = api.last_order.borrow().clone().unwrap();
    assert_eq!(sent.cart_items[0].quantity, 40);
}

#[test]
fn invalid_bulk_order_never_reaches_api() {
    let api = FakeApi::default();
    let err = block_on(submit_bulk_order(&api, &BulkOrderForm::default())).unwrap_err();
    assert_eq!(err.field(), Some("company_name"));
    assert_eq!(api.order_calls.get(), 0);
}

#[test]
fn registration_selects_new_company() {
    let api = FakeApi::default();
    let mut company = CompanyState::new(MemoryStorage::new());
    let form = RegistrationForm {
        name: "Acme".to_owned(),
        ruc: "20123456789".to_owned(),
        email: "ops@acme.test".to_owned(),
        phone: "555".to_owned(),
        address: "Main".to_owned(),
        contact_name: "Ana".to_owned(),
        ..RegistrationForm::default()
    };

    let created = block_on(register_company(&api, &form, &mut company)).unwrap();

    assert_eq!(created.id, "c-new");
    assert_eq!(company.company_id(), Some("c-new"));
    assert_eq!(company.company.as_ref().map(|c| c.name.as_str()), Some("Acme"));
}

#[test]
fn failed_registration_leaves_selection_untouched() {
    let api = FakeApi::failing(ApiError::from_response(400, r#"{"error":"RUC already exists"}"#));
    let mut company = CompanyState::new(MemoryStorage::new());
    let form = RegistrationForm {
        name: "Acme".to_owned(),
        ruc: "1".to_owned(),
        email: "ops@acme.test".to_owned(),
        phone: "555".to_owned(),
        address: "Main".to_owned(),
        contact_name: "Ana".to_owned(),
        ..RegistrationForm::default()
    };

    let err = block_on(register_company(&api, &form, &mut company)).unwrap_err();

    assert_eq!(err.banner_message(), "Error 400: RUC already exists");
    assert_eq!(company.company_id(), None);
    assert_eq!(api.company_calls.get(), 1);
}

#[test]
fn guard_rejects_second_submission_until_finished() {
    let mut guard = SubmitGuard::default();
    assert!(guard.try_begin());
    assert!(guard.is_busy());
    assert!(!guard.try_begin());
    guard.finish();
    assert!(guard.try_begin());
}

#[test]
fn place_order_leaves_the_cart_to_the_caller() {
    let storage = MemoryStorage::new();
    let mut live = cart_store(storage.clone());
    live.update(|c| c.add(cpu()));
    let snapshot = Cart::clone(&live);

    // A line added while the order is in flight.
    live.update(|c| c.add(CartItem { id: "ram".to_owned(), name: "RAM".to_owned(), ..cpu() }));

    let api = FakeApi::default();
    block_on(place_order(&api, &checkout_form(), &snapshot)).unwrap();

    let sent = api.last_order.borrow().clone().unwrap();
    assert_eq!(sent.cart_items.len(), 1);
    assert_eq!(live.line_count(), 2);
    assert_eq!(Persisted::<Cart, _>::open(CART_STORAGE_KEY, storage).line_count(), 2);
}

#[test]
fn submit_checkout_loads_stored_cart_before_ordering() {
    let storage = MemoryStorage::new();
    cart_store(storage.clone()).update(|c| c.add(cpu()));

    let mut cart = cart_store(storage.clone());
    let api = FakeApi::default();
    block_on(submit_checkout(&api, &checkout_form(), &mut cart)).unwrap();

    assert_eq!(api.order_calls.get(), 1);
    assert!(cart.is_empty());
    assert_eq!(Persisted::<Cart, _>::open(CART_STORAGE_KEY, storage).count(), 0);
}

#[test]
fn submit_registration_does_not_select_company() {
    let api = FakeApi::default();
    let form = RegistrationForm {
        name: "Acme".to_owned(),
        ruc: "20123456789".to_owned(),
        email: "ops@acme.test".to_owned(),
        phone: "555".to_owned(),
        address: "Main".to_owned(),
        contact_name: "Ana".to_owned(),
        ..RegistrationForm::default()
    };
    let mut company = CompanyState::new(MemoryStorage::new());
    company.select("c-old");

    let created = block_on(submit_registration(&api, &form)).unwrap();
    assert_eq!(company.company_id(), Some("c-old"));

    company.set_company(created);
    assert_eq!(company.company_id(), Some("c-new"));
}
