use super::*;

fn sample() -> GameCollection {
    let mut shelf = GameCollection::new("shelf");
    shelf
        .add_game("Catan", "4", "90", "10", None, None)
        .unwrap();
    shelf
        .add_game("Risk", "6", "120", "10", Some("3"), None)
        .unwrap();
    shelf
        .add_game("Azul", "4", "45", "8", None, Some("8"))
        .unwrap();
    shelf
}

#[test]
fn get_by_name() {
    let shelf = sample();
    assert_eq!(shelf.get("Catan").unwrap().title(), "Catan");
}

#[test]
fn get_by_index() {
    let shelf = sample();
    assert_eq!(shelf.get("1").unwrap().title(), "Risk");
    assert_eq!(shelf.get("0").unwrap().title(), "Catan");
}

#[test]
fn name_lookup_is_case_sensitive() {
    let shelf = sample();
    assert!(shelf.get("catan").is_err());
}

#[test]
fn index_out_of_bounds_is_not_found() {
    let shelf = sample();
    assert_eq!(
        shelf.get("3").unwrap_err(),
        ModelError::not_found("3".to_string())
    );
}

#[test]
fn leading_zero_keys_parse_as_indexes() {
    // "007" is purely numeric, so it resolves as index 7, not as a name
    let shelf = sample();
    assert!(shelf.get("007").is_err());
    assert_eq!(shelf.get("01").unwrap().title(), "Risk");
}

#[test]
fn signed_tokens_are_names_not_indexes() {
    let shelf = sample();
    assert!(matches!(
        shelf.get("+1").unwrap_err(),
        ModelError::NotFound { .. }
    ));
}

#[test]
fn add_rejects_duplicate_names() {
    let mut shelf = sample();
    let before = shelf.len();
    let err = shelf
        .add_game("Catan", "3", "60", "12", None, None)
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::duplicate_name("Catan".to_string())
    );
    assert_eq!(shelf.len(), before);
    // the original entry is untouched
    assert_eq!(shelf.get("Catan").unwrap().field(GameField::Players), "4");
}

#[test]
fn add_game_validates_every_field() {
    let mut shelf = GameCollection::new("shelf");
    assert!(matches!(
        shelf.add_game("1234", "4", "90", "10", None, None),
        Err(ModelError::InvalidValue { .. })
    ));
    assert!(matches!(
        shelf.add_game("Catan", "four", "90", "10", None, None),
        Err(ModelError::InvalidValue { .. })
    ));
    assert!(matches!(
        shelf.add_game("Catan", "4", "90", "10", Some("many"), None),
        Err(ModelError::InvalidValue { .. })
    ));
    assert!(matches!(
        shelf.add_game("Catan", "4", "90", "10", None, Some("great")),
        Err(ModelError::InvalidValue { .. })
    ));
    assert!(shelf.is_empty());
}

#[test]
fn add_game_with_optional_fields() {
    let mut shelf = GameCollection::new("shelf");
    shelf
        .add_game("Catan", "4", "90", "10", Some("7"), Some("9"))
        .unwrap();
    let game = shelf.get("Catan").unwrap();
    assert_eq!(game.times_played(), "7");
    assert_eq!(game.rating(), "9");
}

#[test]
fn remove_then_get_is_not_found() {
    let mut shelf = sample();
    let removed = shelf.remove("Risk").unwrap();
    assert_eq!(removed.title(), "Risk");
    assert!(shelf.get("Risk").is_err());
    assert_eq!(shelf.len(), 2);
    // indexes shift down past the removed slot
    assert_eq!(shelf.get("1").unwrap().title(), "Azul");
}

#[test]
fn remove_unknown_key_is_not_found() {
    let mut shelf = sample();
    assert!(matches!(
        shelf.remove("Gloomhaven").unwrap_err(),
        ModelError::NotFound { .. }
    ));
    assert_eq!(shelf.len(), 3);
}

#[test]
fn edit_updates_a_field() {
    let mut shelf = sample();
    shelf.edit("Catan", "players", "6").unwrap();
    assert_eq!(shelf.get("Catan").unwrap().field(GameField::Players), "6");
}

#[test]
fn edit_by_index() {
    let mut shelf = sample();
    shelf.edit("2", "duration", "30").unwrap();
    assert_eq!(shelf.get("Azul").unwrap().field(GameField::Duration), "30");
}

#[test]
fn edit_rejects_invalid_value_and_changes_nothing() {
    let mut shelf = sample();
    let err = shelf.edit("Catan", "players", "abc").unwrap_err();
    assert_eq!(
        err,
        ModelError::invalid_value("players".to_string(), "abc".to_string())
    );
    assert_eq!(shelf.get("Catan").unwrap().field(GameField::Players), "4");
}

#[test]
fn edit_rejects_unknown_field() {
    let mut shelf = sample();
    assert_eq!(
        shelf.edit("Catan", "publisher", "kosmos").unwrap_err(),
        ModelError::unknown_field("publisher".to_string())
    );
}

#[test]
fn edit_can_retitle() {
    let mut shelf = sample();
    shelf.edit("Catan", "title", "Catan 3D").unwrap();
    assert!(shelf.get("Catan").is_err());
    assert_eq!(shelf.get("Catan 3D").unwrap().title(), "Catan 3D");
}

#[test]
fn edit_rejects_retitle_to_existing_name() {
    let mut shelf = sample();
    let err = shelf.edit("Catan", "title", "Risk").unwrap_err();
    assert_eq!(err, ModelError::duplicate_name("Risk".to_string()));
    assert_eq!(shelf.get("Catan").unwrap().title(), "Catan");
}

#[test]
fn edit_allows_retitle_to_same_name() {
    let mut shelf = sample();
    shelf.edit("Catan", "title", "Catan").unwrap();
    assert_eq!(shelf.get("Catan").unwrap().title(), "Catan");
}

#[test]
fn rename_rejects_numeric_names() {
    let mut shelf = sample();
    assert!(shelf.rename("42").is_err());
    assert_eq!(shelf.name(), "shelf");
    shelf.rename("travel games").unwrap();
    assert_eq!(shelf.name(), "travel games");
}

#[test]
fn rate_is_an_edit_of_the_rating_field() {
    let mut shelf = sample();
    shelf.rate("Catan", "9").unwrap();
    assert_eq!(shelf.get("Catan").unwrap().rating(), "9");
    assert!(shelf.rate("Catan", "great").is_err());
}

#[test]
fn log_play_returns_the_new_total() {
    let mut shelf = sample();
    assert_eq!(shelf.log_play("Risk").unwrap(), "4");
    assert_eq!(shelf.log_play("Catan").unwrap(), "1");
    assert!(shelf.log_play("Gloomhaven").is_err());
}

#[test]
fn render_without_tokens_lists_everything() {
    let shelf = sample();
    let rendered = shelf.render(&[]);
    assert!(rendered.issues.is_empty());
    assert!(rendered.text.contains("index"));
    assert!(rendered.text.contains("Catan"));
    assert!(rendered.text.contains("Risk"));
    assert!(rendered.text.contains("Azul"));
}

#[test]
fn render_falls_back_to_listing_when_every_filter_drops() {
    let shelf = sample();
    let tokens = vec!["publisher".to_string(), "kosmos".to_string()];
    let rendered = shelf.render(&tokens);
    assert_eq!(rendered.issues.len(), 1);
    // with nothing left to filter on, the full listing is shown
    assert!(rendered.text.contains("index"));
    assert!(rendered.text.contains("Azul"));
}

#[test]
fn render_with_filters_splits_exact_and_close() {
    let shelf = sample();
    let tokens = vec!["players".to_string(), "4".to_string()];
    let rendered = shelf.render(&tokens);
    assert!(rendered.issues.is_empty());
    assert!(!rendered.text.contains("index"));
    assert!(rendered.text.contains("Catan"));
    assert!(rendered.text.contains("Risk"));
}
