//! Deterministic table derivation.
//!
//! Authors write variant lists; `full` and `canonical` are always derived
//! from them, never hand-picked. Length is measured in characters and
//! ties go to the earliest variant, so rerunning the build on the same
//! input reproduces the published table byte for byte.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::TableError;
use crate::types::{TokenGroup, TokenType};

/// Authoring record for one token group.
///
/// `full` and `canonical` may only be written by hand on `regex` groups,
/// where they are replacement templates rather than spelling variants.
#[derive(Clone, Debug, Deserialize)]
pub struct GroupSpec {
    /// Spelling variants (or match patterns on regex groups).
    pub variants: Vec<String>,
    #[serde(rename = "type", default)]
    pub token_type: Option<TokenType>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "onlyCountries", default)]
    pub only_countries: Option<Vec<String>>,
    #[serde(rename = "onlyLayers", default)]
    pub only_layers: Option<Vec<String>>,
    #[serde(rename = "preferFull", default)]
    pub prefer_full: Option<bool>,
    #[serde(default)]
    pub regex: Option<bool>,
    #[serde(rename = "skipBoundaries", default)]
    pub skip_boundaries: Option<bool>,
    #[serde(rename = "skipDiacriticStripping", default)]
    pub skip_diacritic_stripping: Option<bool>,
    #[serde(rename = "spanBoundaries", default)]
    pub span_boundaries: Option<u8>,
}

/// Derive one group from a variant list.
pub fn group_from_variants(
    variants: &[String],
    token_type: Option<TokenType>,
) -> Result<TokenGroup, TableError> {
    let (full, canonical) = derive_forms(variants)?;
    Ok(TokenGroup {
        tokens: variants.to_vec(),
        full,
        canonical,
        token_type,
        note: None,
        only_countries: None,
        only_layers: None,
        prefer_full: None,
        regex: None,
        skip_boundaries: None,
        skip_diacritic_stripping: None,
        span_boundaries: None,
    })
}

/// Derive every group of an authored table, then validate the whole.
pub fn build_table(specs: &[GroupSpec]) -> Result<Vec<TokenGroup>, TableError> {
    let mut groups = Vec::with_capacity(specs.len());
    for spec in specs {
        let (full, canonical) = if spec.regex == Some(true) {
            let full = spec.full.clone().ok_or_else(|| {
                TableError::Invalid("regex group needs an explicit 'full' template".to_string())
            })?;
            let canonical = spec.canonical.clone().ok_or_else(|| {
                TableError::Invalid(
                    "regex group needs an explicit 'canonical' template".to_string(),
                )
            })?;
            (full, canonical)
        } else {
            if spec.full.is_some() || spec.canonical.is_some() {
                return Err(TableError::Invalid(
                    "'full' and 'canonical' are derived; only regex groups may set them"
                        .to_string(),
                ));
            }
            derive_forms(&spec.variants)?
        };
        groups.push(TokenGroup {
            tokens: spec.variants.clone(),
            full,
            canonical,
            token_type: spec.token_type,
            note: spec.note.clone(),
            only_countries: spec.only_countries.clone(),
            only_layers: spec.only_layers.clone(),
            prefer_full: spec.prefer_full,
            regex: spec.regex,
            skip_boundaries: spec.skip_boundaries,
            skip_diacritic_stripping: spec.skip_diacritic_stripping,
            span_boundaries: spec.span_boundaries,
        });
    }
    validate_table(&groups)?;
    Ok(groups)
}

/// Check every authoring invariant over a parsed table.
///
/// Per non-regex group: non-empty unique variants, `full`/`canonical`
/// membership and length extremality. Across groups: a token owned by
/// two groups is rejected outright, there is no precedence rule. Regex
/// groups must carry patterns that compile.
pub fn validate_table(groups: &[TokenGroup]) -> Result<(), TableError> {
    let mut owners: HashMap<&str, usize> = HashMap::new();
    for (index, group) in groups.iter().enumerate() {
        if group.is_regex() {
            validate_patterns(index, group)?;
            continue;
        }
        validate_group(index, group)?;
        for token in &group.tokens {
            if let Some(&other) = owners.get(token.as_str()) {
                return Err(TableError::Invalid(format!(
                    "token '{token}' appears in groups {other} and {index}"
                )));
            }
            owners.insert(token.as_str(), index);
        }
    }
    Ok(())
}

fn validate_group(index: usize, group: &TokenGroup) -> Result<(), TableError> {
    if group.tokens.is_empty() {
        return Err(TableError::Invalid(format!("group {index} has no tokens")));
    }
    for (i, token) in group.tokens.iter().enumerate() {
        if token.is_empty() {
            return Err(TableError::Invalid(format!(
                "group {index} contains an empty token"
            )));
        }
        if group.tokens[..i].contains(token) {
            return Err(TableError::Invalid(format!(
                "group {index} repeats token '{token}'"
            )));
        }
    }
    let full_len = char_len(&group.full);
    let canonical_len = char_len(&group.canonical);
    if !group.tokens.contains(&group.full) {
        return Err(TableError::Invalid(format!(
            "group {index}: full form '{}' is not one of its tokens",
            group.full
        )));
    }
    if !group.tokens.contains(&group.canonical) {
        return Err(TableError::Invalid(format!(
            "group {index}: canonical form '{}' is not one of its tokens",
            group.canonical
        )));
    }
    for token in &group.tokens {
        let len = char_len(token);
        if len > full_len {
            return Err(TableError::Invalid(format!(
                "group {index}: token '{token}' is longer than full form '{}'",
                group.full
            )));
        }
        if len < canonical_len {
            return Err(TableError::Invalid(format!(
                "group {index}: token '{token}' is shorter than canonical form '{}'",
                group.canonical
            )));
        }
    }
    Ok(())
}

fn validate_patterns(index: usize, group: &TokenGroup) -> Result<(), TableError> {
    if group.tokens.is_empty() {
        return Err(TableError::Invalid(format!("group {index} has no tokens")));
    }
    for pattern in &group.tokens {
        regex::Regex::new(pattern).map_err(|err| {
            TableError::Invalid(format!("group {index}: pattern does not compile: {err}"))
        })?;
    }
    Ok(())
}

fn derive_forms(variants: &[String]) -> Result<(String, String), TableError> {
    let first = variants
        .first()
        .ok_or_else(|| TableError::Invalid("a group needs at least one variant".to_string()))?;
    for (i, variant) in variants.iter().enumerate() {
        if variant.is_empty() {
            return Err(TableError::Invalid("empty variant".to_string()));
        }
        if variants[..i].contains(variant) {
            return Err(TableError::Invalid(format!("duplicate variant '{variant}'")));
        }
    }
    // Strict comparisons keep the earliest variant on length ties.
    let mut full = first;
    let mut canonical = first;
    for variant in &variants[1..] {
        if char_len(variant) > char_len(full) {
            full = variant;
        }
        if char_len(variant) < char_len(canonical) {
            canonical = variant;
        }
    }
    Ok((full.clone(), canonical.clone()))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
