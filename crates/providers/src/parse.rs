//! Page parsing strategies: raw page in, document fields out.

use crate::{ParsedPage, RawPage};

/// Strategy interface for turning a raw page into a document record.
/// Returns `None` when the page yields no usable content.
pub trait PageParser: Send + Sync {
    fn parse(&self, page: &RawPage) -> Option<ParsedPage>;
}

/// Boilerplate recurring across the harvested pages: contact forms,
/// consent notices, footer address lines. None of it carries content.
pub const DEFAULT_NOISE_PHRASES: &[&str] = &[
    "Напишите нам",
    "Нажимая на кнопку, вы соглашаетесь с нашейПолитикой в отношении обработкиперсональных данных пользователя",
    "Нажимая на кнопку, вы соглашаетесь с нашейПолитикой в отношении обработкиперсональных данных пользователей",
    "Все права защищены",
    "Позвоните нам",
    "Политика в отношении обработки персональных данных",
    "Иннополис",
    "ул. Университетская, д. 7",
    "И наши менеджеры ответят на ваши вопросы",
    "Заполните форму",
];

/// Baseline strategy: treat the body as plain text, first non-empty line
/// as the title. Lines containing a noise phrase are dropped.
#[derive(Debug, Clone)]
pub struct PlainTextParser {
    noise_phrases: Vec<String>,
}

impl PlainTextParser {
    pub fn new() -> Self {
        Self::with_noise_phrases(
            DEFAULT_NOISE_PHRASES.iter().map(|p| p.to_string()).collect(),
        )
    }

    pub fn with_noise_phrases(phrases: Vec<String>) -> Self {
        Self {
            noise_phrases: phrases,
        }
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PageParser for PlainTextParser {
    fn parse(&self, page: &RawPage) -> Option<ParsedPage> {
        let mut lines = Vec::new();
        for line in page.html.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if self.noise_phrases.iter().any(|p| line.contains(p.as_str())) {
                continue;
            }
            lines.push(line);
        }
        let title = (*lines.first()?).to_string();
        // The title stays part of the text so it remains searchable.
        let text = lines.join("\n");
        Some(ParsedPage {
            title,
            url: page.url.clone(),
            text,
        })
    }
}
