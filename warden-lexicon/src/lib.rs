//! # warden-lexicon
//!
//! Static lexicon tables for severity scoring:
//! - **Severity lexicon**: lowercased phrase → negative weight, loaded once
//!   and read-only afterwards.
//! - **Positive adjectives**: membership test only.
//! - **Context words**: the negative subset that flags co-occurring PERSON entities.
//!
//! Duplicate phrases are resolved by [`DuplicatePolicy`]; multi-word phrases
//! only match under [`LexiconMatchMode::Phrase`].
//!
//! [`DuplicatePolicy`]: warden_core::config::DuplicatePolicy
//! [`LexiconMatchMode::Phrase`]: warden_core::config::LexiconMatchMode

pub mod builtin;
pub mod lexicons;
pub mod phrase;
pub mod store;
pub mod table;
pub mod word_set;

pub use lexicons::Lexicons;
pub use store::{LexiconMatch, LexiconScore, LexiconStore};
pub use word_set::WordSet;
