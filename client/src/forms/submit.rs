//! Submission flows shared by the form pages.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures stop before any request is made. Request failures are
//! terminal for the attempt; nothing is retried and the user resubmits.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::time::Duration;

use super::bulk_order::BulkOrderForm;
use super::checkout::CheckoutForm;
use super::registration::RegistrationForm;
use super::validation::FieldError;
use crate::net::api::StorefrontApi;
use crate::net::error::ApiError;
use crate::net::types::{Company, OrderConfirmation};
use crate::state::cart::{Cart, CartStore};
use crate::state::company::CompanyState;
use crate::util::storage::KeyValueStorage;

/// Delay between a confirmation view and the redirect home.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error(transparent)]
    Request(#[from] ApiError),
}

impl SubmitError {
    /// Text for the inline message or the error banner.
    #[must_use]
    pub fn banner_message(&self) -> String {
        match self {
            Self::Validation(e) => e.message.clone(),
            Self::Request(e) => e.display_message(),
        }
    }

    /// Field to highlight for validation failures.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.field),
            Self::Request(_) => None,
        }
    }
}

/// Re-entrancy flag for one form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    busy: bool,
}

impl SubmitGuard {
    /// Claim the guard. Returns `false` while another submission is in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Validate and post the enterprise order for a snapshot of the cart.
///
/// Nothing is mutated; the caller clears the live cart on success.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] without calling `api` when the form
/// or cart is invalid, or [`SubmitError::Request`] when the backend fails.
pub async fn place_order<A>(api: &A, form: &CheckoutForm, cart: &Cart) -> Result<OrderConfirmation, SubmitError>
where
    A: StorefrontApi + ?Sized,
{
    let order = form.to_order_request(cart)?;
    Ok(api.create_order(&order).await?)
}

/// Validate, post the enterprise order, and clear the cart on success.
///
/// # Errors
///
/// Same as [`place_order`]. The cart is left untouched on failure.
pub async fn submit_checkout<A, S>(
    api: &A,
    form: &CheckoutForm,
    cart: &mut CartStore<S>,
) -> Result<OrderConfirmation, SubmitError>
where
    A: StorefrontApi + ?Sized,
    S: KeyValueStorage,
{
    cart.hydrate();
    let confirmation = place_order(api, form, &**cart).await?;
    cart.update(Cart::clear);
    Ok(confirmation)
}

/// Validate and post a bulk order. The cart is not involved.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] without calling `api` when the form
/// is invalid, or [`SubmitError::Request`] when the backend fails.
pub async fn submit_bulk_order<A>(api: &A, form: &BulkOrderForm) -> Result<OrderConfirmation, SubmitError>
where
    A: StorefrontApi + ?Sized,
{
    let order = form.to_order_request()?;
    Ok(api.create_order(&order).await?)
}

/// Validate and register the company without touching the selection.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] without calling `api` when the form
/// is invalid, or [`SubmitError::Request`] when the backend fails.
pub async fn submit_registration<A>(api: &A, form: &RegistrationForm) -> Result<Company, SubmitError>
where
    A: StorefrontApi + ?Sized,
{
    let registration = form.to_registration()?;
    Ok(api.create_company(&registration).await?)
}

/// Validate, register the company, and select it.
///
/// # Errors
///
/// Same as [`submit_registration`]. The selection is left untouched on failure.
pub async fn register_company<A, S>(
    api: &A,
    form: &RegistrationForm,
    company: &mut CompanyState<S>,
) -> Result<Company, SubmitError>
where
    A: StorefrontApi + ?Sized,
    S: KeyValueStorage,
{
    let created = submit_registration(api, form).await?;
    company.set_company(created.clone());
    Ok(created)
}

/// Call `navigate(path)` after [`REDIRECT_DELAY`]. No-op outside the browser.
///
/// `navigate` comes from `use_navigate()`, taken during component setup.
pub fn redirect_after_delay<F>(navigate: F, path: &'static str)
where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(REDIRECT_DELAY).await;
            navigate(path, leptos_router::NavigateOptions::default());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (navigate, path);
    }
}
