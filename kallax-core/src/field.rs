/// Field identifiers for board-game entries.
///
/// Canonical names, validation rules, filter margins, and listing column
/// widths all hang off this enum, so no other module has to match on raw
/// field strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameField {
    Title,
    Players,
    Duration,
    RecommendedAge,
    TimesPlayed,
    Rating,
}

/// All game fields in listing column order.
const ALL_FIELDS: &[GameField] = &[
    GameField::Title,
    GameField::Players,
    GameField::Duration,
    GameField::RecommendedAge,
    GameField::TimesPlayed,
    GameField::Rating,
];

/// Returns true when `s` is non-empty and every byte is an ASCII digit.
///
/// Purely numeric strings are reserved for positional lookup, so names
/// must fail this test while counted fields must pass it. Signed tokens
/// like `"+4"` and the empty string are not numeric under this rule.
pub fn is_numeric_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// How far a value may sit from a filter value and still count as close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    /// Only exact string equality matches.
    Exact,
    /// Integer values within this distance match.
    Within(i64),
}

/// Behavior shared by every field enum: validation, filter tolerance,
/// and whether the field doubles as the item's unique key.
pub trait ItemField: Copy + Eq + std::fmt::Debug + std::str::FromStr {
    /// Whether `value` is acceptable for this field.
    fn validates(self, value: &str) -> bool;

    /// Filter tolerance when looking for close matches.
    fn margin(self) -> Margin;

    /// Whether this field holds the item's unique name.
    fn is_key(self) -> bool;
}

impl GameField {
    /// Canonical field name used for edit commands and filter tokens.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Players => "players",
            Self::Duration => "duration",
            Self::RecommendedAge => "recommended_age",
            Self::TimesPlayed => "times_played",
            Self::Rating => "rating",
        }
    }

    /// Listing column width, including the separating pad.
    pub fn column_width(&self) -> usize {
        match self {
            Self::Title => 30,
            Self::Players => 5,
            Self::Duration => 10,
            Self::RecommendedAge => 17,
            Self::TimesPlayed => 14,
            Self::Rating => 8,
        }
    }

    /// Whether the column is left-aligned in listings.
    pub fn left_aligned(&self) -> bool {
        matches!(self, Self::Title)
    }

    /// All 6 field variants in column order.
    pub fn all() -> &'static [GameField] {
        ALL_FIELDS
    }
}

impl ItemField for GameField {
    /// Titles must not be purely numeric (those tokens are reserved for
    /// index lookup); every counted field stores a digits-only token.
    fn validates(self, value: &str) -> bool {
        match self {
            Self::Title => !is_numeric_token(value),
            _ => is_numeric_token(value),
        }
    }

    fn margin(self) -> Margin {
        match self {
            Self::Title => Margin::Exact,
            Self::Players => Margin::Within(2),
            Self::Duration => Margin::Within(4),
            Self::RecommendedAge => Margin::Within(3),
            Self::TimesPlayed => Margin::Within(5),
            Self::Rating => Margin::Within(1),
        }
    }

    fn is_key(self) -> bool {
        matches!(self, Self::Title)
    }
}

impl std::fmt::Display for GameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into a field.
#[derive(Debug, Clone)]
pub struct FieldParseError(pub String);

impl std::fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field: '{}'", self.0)
    }
}

impl std::error::Error for FieldParseError {}

impl std::str::FromStr for GameField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for &field in ALL_FIELDS {
            if field.name() == s {
                return Ok(field);
            }
        }
        Err(FieldParseError(s.to_string()))
    }
}

/// The editable fields of a collection itself: just its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionField {
    Name,
}

impl CollectionField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
        }
    }
}

impl ItemField for CollectionField {
    /// Collection names follow the same rule as titles: anything but a
    /// purely numeric token.
    fn validates(self, value: &str) -> bool {
        match self {
            Self::Name => !is_numeric_token(value),
        }
    }

    fn margin(self) -> Margin {
        match self {
            Self::Name => Margin::Exact,
        }
    }

    fn is_key(self) -> bool {
        matches!(self, Self::Name)
    }
}

impl std::fmt::Display for CollectionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CollectionField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "name" {
            return Ok(CollectionField::Name);
        }
        Err(FieldParseError(s.to_string()))
    }
}
