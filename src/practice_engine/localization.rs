//! Localized phrases embedded in problem statements.
//!
//! The catalog has the same shape as the display layer's language pack:
//! `{ "<locale>": { "<key>": "<text>" } }`. Generators never read a global
//! locale; they receive a [`Localizer`] bound to one locale.
//!
//! A missing locale or key never fails generation. The lookup yields the
//! placeholder `"[<key>]"` instead.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::practice_engine::error::Result;

/// Locale used when a request does not name one.
pub const DEFAULT_LOCALE: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Connective before the substituted value: "if x =".
    IfX,
    Decimal,
    Fraction,
    Give,
    SmallestInteger,
    LargestInteger,
    Satisfies,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::IfX,
        MessageKey::Decimal,
        MessageKey::Fraction,
        MessageKey::Give,
        MessageKey::SmallestInteger,
        MessageKey::LargestInteger,
        MessageKey::Satisfies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::IfX             => "ifX",
            MessageKey::Decimal         => "decimal",
            MessageKey::Fraction        => "fraction",
            MessageKey::Give            => "give",
            MessageKey::SmallestInteger => "smallestInteger",
            MessageKey::LargestInteger  => "largestInteger",
            MessageKey::Satisfies       => "satisfies",
        }
    }

    /// Text returned when the catalog has no entry.
    pub fn placeholder(self) -> String {
        format!("[{}]", self.as_str())
    }
}

const ENGLISH: [(MessageKey, &str); 7] = [
    (MessageKey::IfX,             "if x ="),
    (MessageKey::Decimal,         "decimal"),
    (MessageKey::Fraction,        "fraction"),
    (MessageKey::Give,            "Give"),
    (MessageKey::SmallestInteger, "the smallest integer"),
    (MessageKey::LargestInteger,  "the largest integer"),
    (MessageKey::Satisfies,       "that satisfies the inequality"),
];

const INDONESIAN: [(MessageKey, &str); 7] = [
    (MessageKey::IfX,             "jika x ="),
    (MessageKey::Decimal,         "desimal"),
    (MessageKey::Fraction,        "pecahan"),
    (MessageKey::Give,            "Berikan"),
    (MessageKey::SmallestInteger, "bilangan bulat terkecil"),
    (MessageKey::LargestInteger,  "bilangan bulat terbesar"),
    (MessageKey::Satisfies,       "yang memenuhi pertidaksamaan"),
];

/// Locale → key → text. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// English (`"en"`) and Indonesian (`"id"`) phrases.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut catalog = Catalog::default();
            for (locale, table) in [("en", &ENGLISH), ("id", &INDONESIAN)] {
                for (key, text) in table.iter() {
                    catalog.insert(locale, key.as_str(), *text);
                }
            }
            catalog
        })
    }

    /// Parse a language pack; unknown keys are kept and simply never used.
    pub fn from_json(json: &str) -> Result<Catalog> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, locale: &str, key: &str, text: impl Into<String>) {
        self.tables
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), text.into());
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    pub fn localize(&self, locale: &str, key: MessageKey) -> String {
        match self.tables.get(locale).and_then(|t| t.get(key.as_str())) {
            Some(text) => text.clone(),
            None => {
                warn!("no '{}' message for locale '{}'", key.as_str(), locale);
                key.placeholder()
            }
        }
    }

    pub fn localizer<'a>(&'a self, locale: &'a str) -> Localizer<'a> {
        Localizer { catalog: self, locale }
    }
}

/// A catalog view bound to one locale, handed to generators that phrase text.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    catalog: &'a Catalog,
    locale: &'a str,
}

impl<'a> Localizer<'a> {
    pub fn get(&self, key: MessageKey) -> String {
        self.catalog.localize(self.locale, key)
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }
}
