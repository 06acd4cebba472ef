use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::TableError;
use crate::types::TokenGroup;

/// Language codes with a table bundled into the crate.
pub const LANGUAGES: &[&str] = &[
    "de", "en", "es", "et", "fi", "fr", "he", "id", "it", "ja", "nl", "no", "pl", "pt", "ro",
    "ru", "sv",
];

enum Source {
    Bundled,
    Dir(PathBuf),
}

/// Read-only access to per-language token tables.
///
/// The source is fixed at construction: either the tables compiled into
/// the crate or a directory of `<code>.json` files. Loads are stateless,
/// so a `TokenTables` can be shared freely across threads.
pub struct TokenTables {
    source: Source,
}

impl TokenTables {
    /// Serve the tables bundled into the crate.
    pub fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    /// Serve `<code>.json` files from a directory.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Dir(dir.into()),
        }
    }

    /// Load and parse the table for one language code.
    pub fn get(&self, language: &str) -> Result<Vec<TokenGroup>, TableError> {
        if !is_language_code(language) {
            // Also keeps directory sources from resolving path lookups
            // like "../x" as a language.
            return Err(TableError::NotFound(language.to_string()));
        }
        let raw: Cow<'static, str> = match &self.source {
            Source::Bundled => match bundled_json(language) {
                Some(text) => Cow::Borrowed(text),
                None => return Err(TableError::NotFound(language.to_string())),
            },
            Source::Dir(dir) => {
                let path = dir.join(format!("{language}.json"));
                if !path.is_file() {
                    return Err(TableError::NotFound(language.to_string()));
                }
                Cow::Owned(std::fs::read_to_string(&path)?)
            }
        };
        parse_table(language, &raw)
    }

    /// Codes with a published table, sorted.
    pub fn languages(&self) -> Result<Vec<String>, TableError> {
        match &self.source {
            Source::Bundled => Ok(LANGUAGES.iter().map(|c| c.to_string()).collect()),
            Source::Dir(dir) => {
                let mut codes = Vec::new();
                for entry in std::fs::read_dir(dir)? {
                    let name = entry?.file_name();
                    let name = match name.to_str() {
                        Some(n) => n,
                        None => continue,
                    };
                    if let Some(code) = name.strip_suffix(".json") {
                        if is_language_code(code) {
                            codes.push(code.to_string());
                        }
                    }
                }
                codes.sort();
                Ok(codes)
            }
        }
    }

    /// Every published table keyed by language code.
    pub fn all(&self) -> Result<BTreeMap<String, Vec<TokenGroup>>, TableError> {
        let mut map = BTreeMap::new();
        for code in self.languages()? {
            let table = self.get(&code)?;
            map.insert(code, table);
        }
        Ok(map)
    }
}

/// Parse raw JSON into a token table, naming the language on failure.
pub fn parse_table(language: &str, raw: &str) -> Result<Vec<TokenGroup>, TableError> {
    serde_json::from_str(raw).map_err(|source| TableError::Parse {
        language: language.to_string(),
        source,
    })
}

/// ISO 639-1 base, optionally region-qualified ("pt", "pt-BR").
fn is_language_code(code: &str) -> bool {
    let (base, region) = match code.split_once('-') {
        Some((base, region)) => (base, Some(region)),
        None => (code, None),
    };
    if !(2..=3).contains(&base.len()) || !base.bytes().all(|b| b.is_ascii_lowercase()) {
        return false;
    }
    match region {
        Some(r) => (2..=4).contains(&r.len()) && r.bytes().all(|b| b.is_ascii_alphanumeric()),
        None => true,
    }
}

fn bundled_json(code: &str) -> Option<&'static str> {
    let text = match code {
        "de" => include_str!("../tokens/de.json"),
        "en" => include_str!("../tokens/en.json"),
        "es" => include_str!("../tokens/es.json"),
        "et" => include_str!("../tokens/et.json"),
        "fi" => include_str!("../tokens/fi.json"),
        "fr" => include_str!("../tokens/fr.json"),
        "he" => include_str!("../tokens/he.json"),
        "id" => include_str!("../tokens/id.json"),
        "it" => include_str!("../tokens/it.json"),
        "ja" => include_str!("../tokens/ja.json"),
        "nl" => include_str!("../tokens/nl.json"),
        "no" => include_str!("../tokens/no.json"),
        "pl" => include_str!("../tokens/pl.json"),
        "pt" => include_str!("../tokens/pt.json"),
        "ro" => include_str!("../tokens/ro.json"),
        "ru" => include_str!("../tokens/ru.json"),
        "sv" => include_str!("../tokens/sv.json"),
        _ => return None,
    };
    Some(text)
}
