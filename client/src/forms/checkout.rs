//! Enterprise checkout form.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use super::validation::{FieldError, email, optional, required};
use crate::net::types::{Company, CompanyData, OrderRequest};
use crate::state::cart::Cart;

/// Raw checkout inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub company_name: String,
    pub ruc: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub contact_name: String,
    pub notes: String,
    /// Set when the form was prefilled from a registered company.
    pub company_id: Option<String>,
}

impl CheckoutForm {
    /// Prefill from a registered company.
    #[must_use]
    pub fn from_company(company: &Company) -> Self {
        Self {
            company_name: company.name.clone(),
            ruc: company.ruc.clone(),
            email: company.email.clone(),
            phone: company.phone.clone(),
            address: company.address.clone(),
            city: company.city.clone(),
            contact_name: company.contact_name.clone(),
            notes: String::new(),
            company_id: Some(company.id.clone()),
        }
    }

    /// Validate fields in display order and return the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] found.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.company_data().map(|_| ())
    }

    fn company_data(&self) -> Result<CompanyData, FieldError> {
        let name = required("company_name", "Company name", &self.company_name)?;
        let ruc = required("ruc", "RUC", &self.ruc)?;
        let email = email("email", &self.email)?;
        let phone = required("phone", "Phone", &self.phone)?;
        let address = required("address", "Address", &self.address)?;
        let contact_name = required("contact_name", "Contact name", &self.contact_name)?;
        Ok(CompanyData {
            company_id: self.company_id.as_deref().and_then(optional),
            name,
            email,
            ruc: Some(ruc),
            phone: Some(phone),
            address: Some(address),
            city: optional(&self.city),
            contact_name: Some(contact_name),
        })
    }

    /// Validate and build the order payload for `cart`.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for the first invalid field, or for an empty cart.
    pub fn to_order_request(&self, cart: &Cart) -> Result<OrderRequest, FieldError> {
        let company_data = self.company_data()?;
        if cart.is_empty() {
            return Err(FieldError::new("cart", "Your cart is empty."));
        }
        Ok(OrderRequest { company_data, cart_items: cart.order_lines(), notes: optional(&self.notes) })
    }
}
