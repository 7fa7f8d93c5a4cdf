//! Selected company for enterprise checkout and the dashboard.
//!
//! Only the company id is persisted. The full record is fetched from the
//! backend and cached here for the lifetime of the page.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use super::store::Persisted;
use crate::net::types::Company;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const COMPANY_ID_STORAGE_KEY: &str = "storefront_company_id";

#[derive(Clone, Debug)]
pub struct CompanyState<S = BrowserStorage> {
    id: Persisted<Option<String>, S>,
    pub company: Option<Company>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<S: KeyValueStorage> CompanyState<S> {
    /// An unhydrated state bound to its storage key.
    pub fn new(storage: S) -> Self {
        Self { id: Persisted::new(COMPANY_ID_STORAGE_KEY, storage), company: None, loading: false, error: None }
    }

    /// Load the stored company id once.
    pub fn hydrate(&mut self) -> bool {
        self.id.hydrate()
    }

    #[must_use]
    pub fn company_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Select `id`, dropping any cached record for a different company.
    pub fn select(&mut self, id: &str) {
        if self.company.as_ref().is_some_and(|c| c.id != id) {
            self.company = None;
        }
        self.error = None;
        self.id.update(|stored| *stored = Some(id.to_owned()));
    }

    /// Cache a fetched record and select its id.
    pub fn set_company(&mut self, company: Company) {
        self.select(&company.id);
        self.company = Some(company);
        self.loading = false;
    }

    /// Forget the selected company, in memory and in storage.
    pub fn forget(&mut self) {
        self.company = None;
        self.loading = false;
        self.error = None;
        self.id.update(|stored| *stored = None);
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
