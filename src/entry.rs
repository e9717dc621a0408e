//! Normalizes raw JSON input into the canonical [`Entry`] list consumed by
//! the rest of the layout engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::NormalizeConfig;
use crate::error::Error;

/// Field names accepted in place of `word`, tried in order.
const WORD_ALIASES: [&str; 5] = ["word", "answer", "solution", "text", "entry"];
/// Field names accepted in place of `clue`, tried in order.
const CLUE_ALIASES: [&str; 5] = ["clue", "question", "prompt", "hint", "definition"];

/// A single, already-validated (answer, clue) pair.
///
/// `word` contains only uppercase `A`-`Z` letters; `clue` is a trimmed,
/// non-empty display string. `original_index` preserves the entry's
/// position in the raw input list for stable reporting back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub clue: String,
    pub original_index: usize,
}

/// Uppercases `raw` and strips every character that is not `A`-`Z`.
fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Returns the first present string value among `aliases` in `obj`, or the
/// empty string if none are present or none are strings.
fn extract_field(obj: &serde_json::Map<String, Value>, aliases: &[&str]) -> String {
    for key in aliases {
        if let Some(value) = obj.get(*key) {
            if let Some(s) = value.as_str() {
                return s.to_string();
            }
        }
    }
    String::new()
}

/// Cleans a raw decoded JSON value into the canonical entry list.
///
/// `raw` must be a JSON array of objects; each object's `word`/`clue` (or
/// one of their aliases) is extracted, cleaned, and the result kept only if
/// it survives the length and non-emptiness checks in `config`. Entries are
/// returned in input order with `original_index` preserved.
///
/// # Errors
///
/// Returns [`Error::InvalidInputShape`] if `raw` is not a JSON array of
/// objects, and [`Error::NoValidEntries`] if every entry was discarded.
pub fn normalize(raw: &Value, config: &NormalizeConfig) -> Result<Vec<Entry>, Error> {
    let items = raw.as_array().ok_or(Error::InvalidInputShape)?;

    let mut entries = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let obj = match item.as_object() {
            Some(obj) => obj,
            None => return Err(Error::InvalidInputShape),
        };

        let word = clean_word(&extract_field(obj, &WORD_ALIASES));
        let clue = extract_field(obj, &CLUE_ALIASES).trim().to_string();

        if word.len() < config.min_word_len || word.len() > config.max_word_len || clue.is_empty()
        {
            continue;
        }

        entries.push(Entry {
            word,
            clue,
            original_index: index,
        });
    }

    if entries.is_empty() {
        return Err(Error::NoValidEntries);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_non_letters_and_trims_clue() {
        let raw = json!([{"word": " co-op! ", "clue": "  Shared venture  "}]);
        let entries = normalize(&raw, &NormalizeConfig::default()).unwrap();
        assert_eq!(entries[0].word, "COOP");
        assert_eq!(entries[0].clue, "Shared venture");
    }

    #[test]
    fn accepts_aliases() {
        let raw = json!([{"answer": "cat", "hint": "Feline"}]);
        let entries = normalize(&raw, &NormalizeConfig::default()).unwrap();
        assert_eq!(entries[0].word, "CAT");
        assert_eq!(entries[0].clue, "Feline");
    }

    #[test]
    fn rejects_non_array_shape() {
        let raw = json!({"word": "CAT", "clue": "Feline"});
        assert_eq!(
            normalize(&raw, &NormalizeConfig::default()),
            Err(Error::InvalidInputShape)
        );
    }

    #[test]
    fn rejects_everything_invalid() {
        let raw = json!([
            {"word": "A", "clue": "x"},
            {"word": "BC", "clue": ""},
            {"word": "123", "clue": "q"}
        ]);
        assert_eq!(
            normalize(&raw, &NormalizeConfig::default()),
            Err(Error::NoValidEntries)
        );
    }

    #[test]
    fn preserves_original_index_across_discards() {
        let raw = json!([
            {"word": "A", "clue": "too short"},
            {"word": "CAT", "clue": "Feline"},
            {"word": "B", "clue": "too short"},
            {"word": "TAR", "clue": "Sticky black"}
        ]);
        let entries = normalize(&raw, &NormalizeConfig::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].original_index, 1);
        assert_eq!(entries[1].original_index, 3);
    }

    #[test]
    fn idempotent_under_re_normalization() {
        let raw = json!([{"word": "cat", "clue": " Feline "}]);
        let first = normalize(&raw, &NormalizeConfig::default()).unwrap();
        let wrapped = Value::Array(
            first
                .iter()
                .map(|e| json!({"word": e.word, "clue": e.clue}))
                .collect(),
        );
        let second = normalize(&wrapped, &NormalizeConfig::default()).unwrap();
        assert_eq!(first, second);
    }
}
