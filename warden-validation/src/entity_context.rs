//! Entity-context flagging: PERSON entities in records that also contain a
//! negative context word.

use std::collections::BTreeSet;

use warden_core::models::{Entity, Token};
use warden_lexicon::WordSet;

/// PERSON entity texts of a record, provided any token lowercases to a
/// context word. Co-occurrence is record-wide, not positional.
pub fn flag_entities(
    entities: &[Entity],
    tokens: &[Token],
    context_words: &WordSet,
) -> BTreeSet<String> {
    let has_context = tokens.iter().any(|t| context_words.contains(&t.lower()));
    if !has_context {
        return BTreeSet::new();
    }
    entities
        .iter()
        .filter(|e| e.is_person())
        .map(|e| e.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use warden_core::models::{EntityLabel, PartOfSpeech};

    use super::*;

    fn context() -> WordSet {
        WordSet::new(["stupid", "dumb", "annoying", "loser"])
    }

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w, PartOfSpeech::X)).collect()
    }

    #[test]
    fn flags_every_person_on_context_word() {
        let entities = vec![
            Entity::person("Alex"),
            Entity::person("Sam"),
            Entity::new("Acme", EntityLabel::Org),
        ];
        let words = tokens(&["Alex", "and", "Sam", "are", "LOSER"]);
        let flagged = flag_entities(&entities, &words, &context());
        assert_eq!(flagged.into_iter().collect::<Vec<_>>(), vec!["Alex", "Sam"]);
    }

    #[test]
    fn nothing_flagged_without_context_word() {
        let entities = vec![Entity::person("Alex")];
        assert!(flag_entities(&entities, &tokens(&["Alex", "is", "ugly"]), &context()).is_empty());
    }

    #[test]
    fn repeated_person_counts_once() {
        let entities = vec![Entity::person("Alex"), Entity::person("Alex")];
        assert_eq!(flag_entities(&entities, &tokens(&["dumb"]), &context()).len(), 1);
    }
}
