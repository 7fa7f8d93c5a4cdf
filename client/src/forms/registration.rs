//! Company registration form.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use super::validation::{FieldError, email, optional, required};
use crate::net::types::CompanyRegistration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub ruc: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
}

impl RegistrationForm {
    /// # Errors
    ///
    /// Returns the first [`FieldError`] found.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.to_registration().map(|_| ())
    }

    /// Validate and build the registration payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] found.
    pub fn to_registration(&self) -> Result<CompanyRegistration, FieldError> {
        Ok(CompanyRegistration {
            name: required("name", "Company name", &self.name)?,
            ruc: required("ruc", "RUC", &self.ruc)?,
            email: email("email", &self.email)?,
            phone: required("phone", "Phone", &self.phone)?,
            address: required("address", "Address", &self.address)?,
            city: optional(&self.city),
            country: optional(&self.country),
            contact_name: required("contact_name", "Contact name", &self.contact_name)?,
        })
    }
}
