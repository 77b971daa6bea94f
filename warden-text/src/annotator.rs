//! Rule-based part-of-speech tagging and PERSON detection.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use warden_core::models::{Annotation, Entity, PartOfSpeech, Token};
use warden_core::traits::IAnnotator;
use warden_lexicon::Lexicons;

static RE_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z]+)?|[^\sA-Za-z0-9]").ok());

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "she", "it", "we", "they", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "what", "u", "ur",
];
const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "'s",
    "'re", "'m",
];
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "another",
];
const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "for", "with", "from", "by", "about", "into", "over", "under",
    "after", "before", "between", "through", "during", "without", "against", "like",
];
const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];
const SUBORDINATORS: &[&str] = &[
    "if", "because", "while", "although", "though", "since", "unless", "whether",
];
const PARTICLES: &[&str] = &["not", "to", "n't"];
const INTERJECTIONS: &[&str] = &[
    "lol", "oh", "wow", "hey", "ugh", "omg", "lmao", "haha", "yes", "yeah",
];
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "less", "ive", "able", "ible", "ish"];

/// Heuristic annotator over the lexicon tables.
///
/// Words from the severity lexicon or the positive adjective table are
/// always tagged ADJ. Capitalized words outside sentence starts are PROPN,
/// and each run of PROPN tokens becomes one PERSON entity.
#[derive(Debug, Clone)]
pub struct HeuristicAnnotator {
    lexicons: Arc<Lexicons>,
}

impl HeuristicAnnotator {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    fn tag(&self, word: &str, sentence_start: bool) -> PartOfSpeech {
        let first = word.chars().next();
        if first.is_some_and(|c| !c.is_alphanumeric()) {
            return PartOfSpeech::Punct;
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Num;
        }

        let lower = word.to_lowercase();
        let closed = [
            (PRONOUNS, PartOfSpeech::Pron),
            (AUXILIARIES, PartOfSpeech::Aux),
            (DETERMINERS, PartOfSpeech::Det),
            (ADPOSITIONS, PartOfSpeech::Adp),
            (CONJUNCTIONS, PartOfSpeech::Cconj),
            (SUBORDINATORS, PartOfSpeech::Sconj),
            (PARTICLES, PartOfSpeech::Part),
            (INTERJECTIONS, PartOfSpeech::Intj),
        ];
        if let Some((_, pos)) = closed.iter().find(|(words, _)| words.contains(&lower.as_str())) {
            return *pos;
        }

        if self.lexicons.severity.contains(&lower)
            || self.lexicons.positive_adjectives.contains(&lower)
        {
            return PartOfSpeech::Adj;
        }
        if first.is_some_and(char::is_uppercase) && !sentence_start {
            return PartOfSpeech::Propn;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
            return PartOfSpeech::Adj;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PartOfSpeech::Adv;
        }
        if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return PartOfSpeech::Verb;
        }
        PartOfSpeech::Noun
    }
}

impl IAnnotator for HeuristicAnnotator {
    fn annotate(&self, text: &str) -> Annotation {
        let Some(re) = RE_TOKEN.as_ref() else {
            return Annotation::default();
        };

        let mut tokens = Vec::new();
        let mut sentence_start = true;
        for m in re.find_iter(text) {
            let word = m.as_str();
            let pos = self.tag(word, sentence_start);
            sentence_start = matches!(word, "." | "!" | "?");
            tokens.push(Token::new(word, pos));
        }

        let mut entities = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        for token in &tokens {
            if token.pos == PartOfSpeech::Propn {
                run.push(&token.text);
            } else if !run.is_empty() {
                entities.push(Entity::person(run.join(" ")));
                run.clear();
            }
        }
        if !run.is_empty() {
            entities.push(Entity::person(run.join(" ")));
        }

        Annotation::new(tokens, entities)
    }
}
