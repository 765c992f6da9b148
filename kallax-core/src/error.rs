use thiserror::Error;

/// Errors that can occur while operating on collections and their items.
///
/// Every operation validates before it mutates, so returning one of these
/// means the data model is exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The key matched neither an item name nor an in-bounds index
    #[error("nothing here matches '{key}'")]
    NotFound { key: String },

    /// An item with this name already exists in the collection
    #[error("an entry named '{name}' already exists")]
    DuplicateName { name: String },

    /// The field name is not part of the item's schema
    #[error("unknown field: '{field}'")]
    UnknownField { field: String },

    /// The value failed the field's validation rule
    #[error("'{value}' is not a valid value for {field}")]
    InvalidValue { field: String, value: String },
}

impl ModelError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}
