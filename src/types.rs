use serde::{Deserialize, Serialize};

/// Classification of an address token group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Post-office box designators.
    Box,
    /// Compass directions used in street names.
    Cardinal,
    /// House or building numbers.
    Number,
    /// Ordinal street names ("1st", "2nd").
    Ordinal,
    /// Sub-address designators (apartment, floor, room).
    Unit,
    /// Street types proper (street, avenue, road).
    Way,
}

/// One group of spelling variants for a single address word.
///
/// `tokens` lists every case-insensitive variant in authored order.
/// `full` is the longest member and `canonical` the shortest, ties going
/// to the earliest variant. Groups flagged `regex` carry match patterns
/// in `tokens` and replacement templates in `full`/`canonical` instead,
/// so the membership rule does not apply to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenGroup {
    /// Spelling variants, authored order preserved.
    pub tokens: Vec<String>,
    /// Designated long form.
    pub full: String,
    /// Designated short form.
    pub canonical: String,
    /// Classification tag, absent on groups the authors left untyped.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenType>,
    /// Free-form authoring remark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Restrict the group to these ISO 3166 country codes.
    #[serde(rename = "onlyCountries", default, skip_serializing_if = "Option::is_none")]
    pub only_countries: Option<Vec<String>>,
    /// Restrict the group to these geocoder layers.
    #[serde(rename = "onlyLayers", default, skip_serializing_if = "Option::is_none")]
    pub only_layers: Option<Vec<String>>,
    /// Prefer `full` over `canonical` when rendering.
    #[serde(rename = "preferFull", default, skip_serializing_if = "Option::is_none")]
    pub prefer_full: Option<bool>,
    /// `tokens` are match patterns, `full`/`canonical` replacement templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<bool>,
    /// Tokens match without word-boundary checks (CJK scripts).
    #[serde(rename = "skipBoundaries", default, skip_serializing_if = "Option::is_none")]
    pub skip_boundaries: Option<bool>,
    /// Tokens must keep their diacritics during normalization.
    #[serde(
        rename = "skipDiacriticStripping",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_diacritic_stripping: Option<bool>,
    /// Number of word boundaries a multi-word token spans.
    #[serde(rename = "spanBoundaries", default, skip_serializing_if = "Option::is_none")]
    pub span_boundaries: Option<u8>,
}

impl TokenGroup {
    /// Whether `tokens` holds match patterns rather than spelling variants.
    pub fn is_regex(&self) -> bool {
        self.regex == Some(true)
    }
}
