use super::*;

fn stocked() -> Manager {
    let mut manager = Manager::new();
    manager.add_collection("family").unwrap();
    manager.add_collection("party").unwrap();
    manager
}

#[test]
fn a_new_manager_has_a_base_collection() {
    let manager = Manager::new();
    assert_eq!(manager.collections().len(), 1);
    assert_eq!(manager.active().name(), BASE_COLLECTION);
    assert_eq!(manager.active_index(), 0);
}

#[test]
fn add_and_select_by_name_or_index() {
    let mut manager = stocked();
    manager.select_active("family").unwrap();
    assert_eq!(manager.active().name(), "family");
    manager.select_active("2").unwrap();
    assert_eq!(manager.active().name(), "party");
}

#[test]
fn select_unknown_key_leaves_active_alone() {
    let mut manager = stocked();
    assert!(manager.select_active("outdoor").is_err());
    assert_eq!(manager.active().name(), BASE_COLLECTION);
}

#[test]
fn add_rejects_numeric_and_duplicate_names() {
    let mut manager = stocked();
    assert!(matches!(
        manager.add_collection("17").unwrap_err(),
        ModelError::InvalidValue { .. }
    ));
    assert!(matches!(
        manager.add_collection("family").unwrap_err(),
        ModelError::DuplicateName { .. }
    ));
    assert_eq!(manager.collections().len(), 3);
}

#[test]
fn removing_every_collection_regrows_base() {
    let mut manager = stocked();
    manager.remove_collection("0").unwrap();
    manager.remove_collection("0").unwrap();
    manager.remove_collection("0").unwrap();
    assert_eq!(manager.collections().len(), 1);
    assert_eq!(manager.active().name(), BASE_COLLECTION);
    assert_eq!(manager.active_index(), 0);
}

#[test]
fn removing_the_active_collection_reselects_the_first() {
    let mut manager = stocked();
    manager.select_active("party").unwrap();
    let removed = manager.remove_collection("party").unwrap();
    assert_eq!(removed.name(), "party");
    assert_eq!(manager.active().name(), BASE_COLLECTION);
}

#[test]
fn removing_an_earlier_collection_keeps_the_active_one() {
    let mut manager = stocked();
    manager.select_active("party").unwrap();
    manager.remove_collection(BASE_COLLECTION).unwrap();
    // the index shifted but the selection did not
    assert_eq!(manager.active().name(), "party");
    assert_eq!(manager.active_index(), 1);
}

#[test]
fn removing_a_later_collection_keeps_the_active_one() {
    let mut manager = stocked();
    manager.select_active("family").unwrap();
    manager.remove_collection("party").unwrap();
    assert_eq!(manager.active().name(), "family");
}

#[test]
fn rename_collection_checks_value_and_uniqueness() {
    let mut manager = stocked();
    manager.rename_collection("family", "kids").unwrap();
    assert!(manager.collections().get("kids").is_ok());
    assert!(manager.rename_collection("kids", "99").is_err());
    assert!(manager.rename_collection("kids", "party").is_err());
    assert!(manager.collections().get("kids").is_ok());
}

#[test]
fn games_land_in_the_active_collection() {
    let mut manager = stocked();
    manager.select_active("party").unwrap();
    manager
        .active_mut()
        .add_game("Codenames", "8", "15", "10", None, None)
        .unwrap();
    assert_eq!(manager.active().len(), 1);
    assert!(manager.collections().get(BASE_COLLECTION).unwrap().is_empty());
}

#[test]
fn from_collections_skips_duplicate_names() {
    let manager = Manager::from_collections(vec![
        GameCollection::new("shelf"),
        GameCollection::new("shelf"),
    ]);
    assert_eq!(manager.collections().len(), 1);
    assert_eq!(manager.active().name(), "shelf");
}

#[test]
fn from_collections_with_nothing_regrows_base() {
    let manager = Manager::from_collections(Vec::new());
    assert_eq!(manager.collections().len(), 1);
    assert_eq!(manager.active().name(), BASE_COLLECTION);
}

#[test]
fn render_all_banners_every_collection() {
    let mut manager = stocked();
    manager
        .active_mut()
        .add_game("Catan", "4", "90", "10", None, None)
        .unwrap();
    let text = manager.render_all();
    assert!(text.contains("Collection: base"));
    assert!(text.contains("Collection: family"));
    assert!(text.contains("Collection: party"));
    assert!(text.contains("Catan"));
}
