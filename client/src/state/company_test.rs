use super::*;
use crate::util::storage::MemoryStorage;

fn company(id: &str) -> Company {
    Company { id: id.to_owned(), name: format!("Company {id}"), ..Company::default() }
}

#[test]
fn hydrate_restores_stored_id() {
    let storage = MemoryStorage::with_entry(COMPANY_ID_STORAGE_KEY, r#""c-7""#);
    let mut state = CompanyState::new(storage);
    assert_eq!(state.company_id(), None);
    assert!(state.hydrate());
    assert_eq!(state.company_id(), Some("c-7"));
}

#[test]
fn only_the_id_is_persisted() {
    let storage = MemoryStorage::new();
    let mut state = CompanyState::new(storage.clone());
    state.set_company(Company { email: "ops@acme.test".to_owned(), ..company("c-1") });

    assert_eq!(storage.get(COMPANY_ID_STORAGE_KEY).as_deref(), Some(r#""c-1""#));
    assert_eq!(storage.len(), 1);
    assert_eq!(state.company.as_ref().map(|c| c.email.as_str()), Some("ops@acme.test"));
}

#[test]
fn select_other_company_drops_cached_record() {
    let mut state = CompanyState::new(MemoryStorage::new());
    state.set_company(company("c-1"));
    state.select("c-2");
    assert!(state.company.is_none());
    assert_eq!(state.company_id(), Some("c-2"));
}

#[test]
fn select_same_company_keeps_cached_record() {
    let mut state = CompanyState::new(MemoryStorage::new());
    state.set_company(company("c-1"));
    state.select("c-1");
    assert!(state.company.is_some());
}

#[test]
fn forget_clears_storage() {
    let storage = MemoryStorage::new();
    let mut state = CompanyState::new(storage.clone());
    state.set_company(company("c-1"));
    state.forget();
    assert_eq!(state.company_id(), None);
    assert_eq!(storage.get(COMPANY_ID_STORAGE_KEY).as_deref(), Some("null"));
}

#[test]
fn set_error_stops_loading() {
    let mut state = CompanyState::new(MemoryStorage::new());
    state.loading = true;
    state.set_error("Error 404: company not found".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Error 404: company not found"));
}
