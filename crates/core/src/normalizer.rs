//! Token normalization: word segmentation, lowercasing, Snowball stemming,
//! and stopword removal. Pure and deterministic once constructed.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Russian base stopword list.
const RUSSIAN_STOPWORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
    "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
    "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были",
    "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой",
    "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них",
    "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой",
    "перед", "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда",
    "конечно", "всю", "между",
];

/// Domain-specific extension: filler verbs common across the harvested
/// corpus that carry no retrieval signal.
const EXTRA_STOPWORDS: &[&str] = &["сделать", "связать", "это"];

pub struct Normalizer {
    stemmer: Stemmer,
    stopwords: HashSet<&'static str>,
}

impl Normalizer {
    pub fn new() -> Self {
        let stopwords = RUSSIAN_STOPWORDS
            .iter()
            .chain(EXTRA_STOPWORDS.iter())
            .copied()
            .collect();
        Self {
            stemmer: Stemmer::create(Algorithm::Russian),
            stopwords,
        }
    }

    /// Normalize a text span into a space-joined clean token sequence.
    /// Empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let mut tokens = Vec::new();
        for word in text.unicode_words() {
            let lower = word.to_lowercase();
            if self.stopwords.contains(lower.as_str()) {
                continue;
            }
            let stem = self.stemmer.stem(&lower);
            // A stopword can survive as a stem of an inflected form.
            if self.stopwords.contains(stem.as_ref()) {
                continue;
            }
            tokens.push(stem.into_owned());
        }
        tokens.join(" ")
    }

    /// The normalized tokens as a set; order and duplicates discarded.
    /// Used for the lexical overlap gate.
    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.normalize(text)
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_deterministic() {
        let n = Normalizer::new();
        let text = "Услуги компании включают разработку чат-ботов";
        assert_eq!(n.normalize(text), n.normalize(text));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let n = Normalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \n\t"), "");
    }

    #[test]
    fn stopwords_are_removed() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("и в на для это"), "");
    }

    #[test]
    fn inflected_forms_share_a_stem() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("разработка"), n.normalize("разработку"));
    }

    #[test]
    fn hyphenated_compounds_split_into_words() {
        let n = Normalizer::new();
        let tokens = n.token_set("чат-бот");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("чат"));
    }

    #[test]
    fn output_is_lowercase() {
        let n = Normalizer::new();
        let out = n.normalize("Компания ЧАТ");
        assert_eq!(out, out.to_lowercase());
    }
}
