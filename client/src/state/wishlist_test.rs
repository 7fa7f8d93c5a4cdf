use super::*;
use crate::util::storage::MemoryStorage;

fn item(id: &str) -> WishlistItem {
    WishlistItem {
        id: id.to_owned(),
        name: format!("Product {id}"),
        price: 10.0,
        image: String::new(),
        category: "parts".to_owned(),
    }
}

#[test]
fn adding_same_id_twice_keeps_one_entry() {
    let mut wishlist = Wishlist::default();
    assert!(wishlist.add(item("gpu")));
    assert!(!wishlist.add(item("gpu")));
    assert_eq!(wishlist.count(), 1);
}

#[test]
fn remove_drops_entry() {
    let mut wishlist = Wishlist::default();
    wishlist.add(item("gpu"));
    wishlist.add(item("psu"));
    wishlist.remove("gpu");
    assert!(!wishlist.contains("gpu"));
    assert!(wishlist.contains("psu"));
}

#[test]
fn toggle_flips_membership() {
    let mut wishlist = Wishlist::default();
    assert!(wishlist.toggle(item("case")));
    assert!(wishlist.contains("case"));
    assert!(!wishlist.toggle(item("case")));
    assert!(wishlist.is_empty());
}

#[test]
fn clear_removes_everything() {
    let mut wishlist = Wishlist::default();
    wishlist.add(item("a"));
    wishlist.add(item("b"));
    wishlist.clear();
    assert_eq!(wishlist.count(), 0);
}

#[test]
fn hydrated_duplicates_are_not_extended() {
    let storage = MemoryStorage::with_entry(
        WISHLIST_STORAGE_KEY,
        r#"[{"id":"gpu","name":"GPU","price":500.0}]"#,
    );
    let mut store = wishlist_store(storage);
    let added = store.update(|w| w.add(item("gpu")));
    assert!(!added);
    assert_eq!(store.count(), 1);
}

#[test]
fn stored_duplicate_ids_collapse_to_first_entry() {
    let storage = MemoryStorage::with_entry(
        WISHLIST_STORAGE_KEY,
        r#"[
            {"id":"g","name":"GPU","price":500.0},
            {"id":"g","name":"GPU again","price":450.0},
            {"id":"c","name":"CPU","price":300.0}
        ]"#,
    );
    let mut store = wishlist_store(storage);
    store.hydrate();

    assert_eq!(store.count(), 2);
    assert_eq!(store.items()[0].name, "GPU");
    assert!(store.contains("c"));
}
