//! Data model for a board-game shelf: games grouped into named
//! collections, one manager over all of them.
//!
//! This crate holds everything except the interactive shell: field
//! schemas and validation, generic collections with name-or-index
//! lookup, the exact/close filter engine, fixed-width rendering, and
//! flat YAML persistence. Consumers drive it entirely through string
//! commands and get strings (or typed errors) back.

pub mod collection;
pub mod error;
pub mod field;
pub mod filter;
pub mod game;
pub mod manager;
pub mod render;
pub mod store;

pub use collection::{Collection, CollectionItem, GameCollection, Rendered};
pub use error::ModelError;
pub use field::{is_numeric_token, CollectionField, FieldParseError, GameField, ItemField, Margin};
pub use filter::{apply, parse_filters, Filter, FilterIssue, FilterOutcome, ParsedFilters};
pub use game::BoardGame;
pub use manager::{Manager, BASE_COLLECTION, MANAGER_NAME};
pub use store::{load_manager, save_manager, StoreError};
