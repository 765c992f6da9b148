//! Board-game entries: the leaf items of every collection.

use crate::collection::CollectionItem;
use crate::field::GameField;
use crate::render;

/// One board game on the shelf.
///
/// All fields are stored as raw strings; validation happens at the
/// collection boundary so a loaded file round-trips byte for byte even
/// when it holds values the editor would reject today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGame {
    title: String,
    players: String,
    duration: String,
    recommended_age: String,
    times_played: String,
    rating: String,
}

impl BoardGame {
    /// New entry with the four core fields. `times_played` starts at `"0"`
    /// and `rating` starts empty (unrated).
    pub fn new(
        title: impl Into<String>,
        players: impl Into<String>,
        duration: impl Into<String>,
        recommended_age: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            players: players.into(),
            duration: duration.into(),
            recommended_age: recommended_age.into(),
            times_played: "0".to_string(),
            rating: String::new(),
        }
    }

    /// Set the play count (builder style).
    pub fn with_times_played(mut self, times_played: impl Into<String>) -> Self {
        self.times_played = times_played.into();
        self
    }

    /// Set the rating (builder style).
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn times_played(&self) -> &str {
        &self.times_played
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Count one play. An unparseable stored count restarts from zero.
    pub fn log_play(&mut self) {
        let played = self.times_played.parse::<u64>().unwrap_or(0);
        self.times_played = (played + 1).to_string();
    }

    /// One fixed-width listing row, columns in [`GameField::all`] order.
    pub fn row(&self) -> String {
        GameField::all()
            .iter()
            .map(|&f| {
                let value = match f {
                    // the duration column carries a minutes suffix
                    GameField::Duration => format!("{}m", self.duration),
                    _ => self.field(f).to_string(),
                };
                render::cell(&value, f.column_width(), f.left_aligned())
            })
            .collect()
    }

    /// Flatten to the on-disk record. The order is fixed by the file
    /// format: title, players, duration, recommended_age, rating,
    /// times_played.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.title.clone(),
            self.players.clone(),
            self.duration.clone(),
            self.recommended_age.clone(),
            self.rating.clone(),
            self.times_played.clone(),
        ]
    }

    /// Rebuild an entry from the on-disk record.
    pub fn from_record(record: [String; 6]) -> Self {
        let [title, players, duration, recommended_age, rating, times_played] = record;
        Self {
            title,
            players,
            duration,
            recommended_age,
            times_played,
            rating,
        }
    }
}

impl CollectionItem for BoardGame {
    type Field = GameField;

    fn name(&self) -> &str {
        &self.title
    }

    fn field(&self, field: GameField) -> &str {
        match field {
            GameField::Title => &self.title,
            GameField::Players => &self.players,
            GameField::Duration => &self.duration,
            GameField::RecommendedAge => &self.recommended_age,
            GameField::TimesPlayed => &self.times_played,
            GameField::Rating => &self.rating,
        }
    }

    fn set_field(&mut self, field: GameField, value: String) {
        match field {
            GameField::Title => self.title = value,
            GameField::Players => self.players = value,
            GameField::Duration => self.duration = value,
            GameField::RecommendedAge => self.recommended_age = value,
            GameField::TimesPlayed => self.times_played = value,
            GameField::Rating => self.rating = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_defaults() {
        let game = BoardGame::new("Catan", "4", "90", "10");
        assert_eq!(game.title(), "Catan");
        assert_eq!(game.times_played(), "0");
        assert_eq!(game.rating(), "");
    }

    #[test]
    fn builders_override_defaults() {
        let game = BoardGame::new("Catan", "4", "90", "10")
            .with_times_played("12")
            .with_rating("8");
        assert_eq!(game.times_played(), "12");
        assert_eq!(game.rating(), "8");
    }

    #[test]
    fn field_access_round_trips() {
        let mut game = BoardGame::new("Catan", "4", "90", "10");
        for &field in GameField::all() {
            let value = game.field(field).to_string();
            game.set_field(field, value.clone());
            assert_eq!(game.field(field), value);
        }
    }

    #[test]
    fn log_play_increments() {
        let mut game = BoardGame::new("Catan", "4", "90", "10");
        game.log_play();
        game.log_play();
        assert_eq!(game.times_played(), "2");
    }

    #[test]
    fn log_play_recovers_from_garbage_count() {
        let mut game = BoardGame::new("Catan", "4", "90", "10").with_times_played("often");
        game.log_play();
        assert_eq!(game.times_played(), "1");
    }

    #[test]
    fn record_order_puts_rating_before_times_played() {
        let game = BoardGame::new("Catan", "4", "90", "10")
            .with_times_played("3")
            .with_rating("9");
        let record = game.to_record();
        assert_eq!(
            record,
            [
                "Catan".to_string(),
                "4".to_string(),
                "90".to_string(),
                "10".to_string(),
                "9".to_string(),
                "3".to_string(),
            ]
        );
        assert_eq!(BoardGame::from_record(record), game);
    }

    #[test]
    fn row_has_duration_suffix_and_fixed_width() {
        let game = BoardGame::new("Catan", "4", "90", "10");
        let row = game.row();
        let total: usize = GameField::all().iter().map(|f| f.column_width()).sum();
        assert_eq!(row.chars().count(), total);
        assert!(row.starts_with("Catan"));
        assert!(row.contains("90m"));
    }

    #[test]
    fn row_clips_overlong_titles() {
        let long = "Twilight Imperium Fourth Edition Prophecy of Kings";
        let game = BoardGame::new(long, "6", "480", "14");
        let row = game.row();
        assert!(!row.contains(long));
        assert!(row.starts_with("Twilight Imperium"));
    }
}
