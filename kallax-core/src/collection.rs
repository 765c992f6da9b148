//! Generic ordered containers with unique item names.
//!
//! A [`Collection`] holds any [`CollectionItem`] (board games at the
//! bottom, whole collections one level up) and resolves string keys the
//! same way at every level: purely numeric keys are zero-based indexes,
//! anything else matches names exactly.

use crate::error::ModelError;
use crate::field::{is_numeric_token, CollectionField, GameField, ItemField};
use crate::filter::{self, FilterIssue};
use crate::game::BoardGame;
use crate::render;

/// Capability contract for anything a [`Collection`] can hold: a unique
/// name plus a schema of validatable, generically settable fields.
pub trait CollectionItem {
    type Field: ItemField;

    /// The unique key within the owning collection.
    fn name(&self) -> &str;

    /// Raw value of a field.
    fn field(&self, field: Self::Field) -> &str;

    /// Overwrite a field. Callers validate through
    /// [`ItemField::validates`] first; this itself cannot fail.
    fn set_field(&mut self, field: Self::Field, value: String);
}

/// An ordered, named container of uniquely named items.
#[derive(Debug, Clone)]
pub struct Collection<T: CollectionItem> {
    name: String,
    items: Vec<T>,
}

/// A named collection of board games.
pub type GameCollection = Collection<BoardGame>;

/// A rendered view plus any non-fatal filter diagnostics.
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    pub issues: Vec<FilterIssue>,
}

impl<T: CollectionItem> Collection<T> {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the collection's own name. Numeric names are reserved for
    /// index lookup and rejected.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ModelError> {
        let name = name.into();
        if is_numeric_token(&name) {
            return Err(ModelError::invalid_value("name", name));
        }
        self.name = name;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Item at `index`, if in bounds.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Resolve `key` to a position.
    ///
    /// Purely numeric keys are zero-based indexes; anything else matches
    /// item names exactly (case-sensitive). Because valid names are never
    /// purely numeric, the two namespaces cannot collide.
    pub fn position(&self, key: &str) -> Result<usize, ModelError> {
        if is_numeric_token(key) {
            return match key.parse::<usize>() {
                Ok(index) if index < self.items.len() => Ok(index),
                _ => Err(ModelError::not_found(key)),
            };
        }
        self.items
            .iter()
            .position(|item| item.name() == key)
            .ok_or_else(|| ModelError::not_found(key))
    }

    /// Item that `key` resolves to.
    pub fn get(&self, key: &str) -> Result<&T, ModelError> {
        let index = self.position(key)?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut T, ModelError> {
        let index = self.position(key)?;
        Ok(&mut self.items[index])
    }

    /// Append `item`, keeping names unique.
    pub fn add(&mut self, item: T) -> Result<(), ModelError> {
        if self.items.iter().any(|it| it.name() == item.name()) {
            return Err(ModelError::duplicate_name(item.name()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the item `key` resolves to.
    pub fn remove(&mut self, key: &str) -> Result<T, ModelError> {
        let index = self.position(key)?;
        Ok(self.items.remove(index))
    }

    /// Set one field of the item `key` resolves to.
    ///
    /// The field name is parsed against the item's schema and the value
    /// validated before anything changes; editing the key field also
    /// keeps names unique. All checks pass or nothing mutates.
    pub fn edit(&mut self, key: &str, field: &str, value: &str) -> Result<(), ModelError> {
        let index = self.position(key)?;
        let parsed = field
            .parse::<T::Field>()
            .map_err(|_| ModelError::unknown_field(field))?;
        if !parsed.validates(value) {
            return Err(ModelError::invalid_value(field, value));
        }
        if parsed.is_key()
            && value != self.items[index].name()
            && self.items.iter().any(|it| it.name() == value)
        {
            return Err(ModelError::duplicate_name(value));
        }
        self.items[index].set_field(parsed, value.to_string());
        Ok(())
    }
}

impl GameCollection {
    /// Validate and add a new game.
    ///
    /// The four core fields are required; `times_played` and `rating`
    /// are optional and fall back to the [`BoardGame::new`] defaults.
    pub fn add_game(
        &mut self,
        title: &str,
        players: &str,
        duration: &str,
        recommended_age: &str,
        times_played: Option<&str>,
        rating: Option<&str>,
    ) -> Result<(), ModelError> {
        let provided = [
            (GameField::Title, Some(title)),
            (GameField::Players, Some(players)),
            (GameField::Duration, Some(duration)),
            (GameField::RecommendedAge, Some(recommended_age)),
            (GameField::TimesPlayed, times_played),
            (GameField::Rating, rating),
        ];
        for (field, value) in provided {
            if let Some(value) = value {
                if !field.validates(value) {
                    return Err(ModelError::invalid_value(field.name(), value));
                }
            }
        }

        let mut game = BoardGame::new(title, players, duration, recommended_age);
        if let Some(times_played) = times_played {
            game = game.with_times_played(times_played);
        }
        if let Some(rating) = rating {
            game = game.with_rating(rating);
        }
        self.add(game)
    }

    /// Record one play of the game `key` resolves to; returns the new
    /// total.
    pub fn log_play(&mut self, key: &str) -> Result<String, ModelError> {
        let game = self.get_mut(key)?;
        game.log_play();
        Ok(game.times_played().to_string())
    }

    /// Shortcut for editing the rating field.
    pub fn rate(&mut self, key: &str, rating: &str) -> Result<(), ModelError> {
        self.edit(key, GameField::Rating.name(), rating)
    }

    /// Render the collection.
    ///
    /// With no tokens this is the indexed listing. Tokens are parsed
    /// pairwise into filters; if every pair is dropped the listing is
    /// shown anyway, with the diagnostics explaining what fell out.
    pub fn render(&self, tokens: &[String]) -> Rendered {
        if tokens.is_empty() {
            return Rendered {
                text: self.listing(),
                issues: Vec::new(),
            };
        }

        let parsed = filter::parse_filters::<GameField>(tokens);
        if parsed.filters.is_empty() {
            return Rendered {
                text: self.listing(),
                issues: parsed.issues,
            };
        }

        let outcome = filter::apply(&self.items, &parsed.filters);
        let exact: Vec<String> = outcome.exact.iter().map(|game| game.row()).collect();
        let close: Vec<String> = outcome.close.iter().map(|game| game.row()).collect();
        Rendered {
            text: render::filtered(&render::game_header(), &exact, &close),
            issues: parsed.issues,
        }
    }

    fn listing(&self) -> String {
        let rows: Vec<String> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, game)| {
                format!(
                    "{}{}",
                    render::cell(&index.to_string(), render::INDEX_WIDTH, true),
                    game.row()
                )
            })
            .collect();
        render::listing(&render::game_header(), &rows)
    }
}

impl CollectionItem for GameCollection {
    type Field = CollectionField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: CollectionField) -> &str {
        match field {
            CollectionField::Name => &self.name,
        }
    }

    fn set_field(&mut self, field: CollectionField, value: String) {
        match field {
            CollectionField::Name => self.name = value,
        }
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
