//! Decoder for the endpoint's nested array response
//!
//! The endpoint answers with an undocumented, positionally-addressed JSON
//! array. Treat it as an external, versionless wire format: every index
//! assumption the crate makes lives in this module, validated up front, so
//! upstream format drift requires exactly one localized change.
//!
//! The traversal contract, for root array `R`:
//!
//! - `R[0]` is an array of sentence entries. In each entry, element `[0]`
//!   is a translated-text fragment when it is a string (`null` entries are
//!   skipped), and the entry's *last* element, when it is an array, is the
//!   phonetics block: `[2]` holds the translated-text pronunciation and
//!   `[3]` (only present when the block is longer than 3) the source-text
//!   pronunciation.
//! - `R[2]` is the detected (or confirmed) source language code.
//!
//! An empty `R[0]` decodes to an empty translation; a missing phonetics
//! block decodes to absent pronunciations. Only a structurally impossible
//! root is an error: not JSON, not an array, fewer than 3 elements, or
//! `R[0]` not an array.

use crate::error::{TranslateResult, TranslationFailure};
use crate::language::Language;
use serde_json::Value;

/// The fields extracted from one response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodedBody {
    pub translated_text: String,
    pub translated_pronunciation: Option<String>,
    pub source_pronunciation: Option<String>,
    pub source_language: Language,
}

/// Decode a raw response body
///
/// All-or-nothing: either every field is extracted or the body is rejected
/// as [`TranslationFailure::MalformedResponse`]. No partial results.
pub(crate) fn decode_body(body: &str) -> TranslateResult<DecodedBody> {
    let root: Value = serde_json::from_str(body).map_err(|e| {
        TranslationFailure::MalformedResponse(format!("body is not valid JSON: {}", e))
    })?;
    let root = root.as_array().ok_or_else(|| {
        TranslationFailure::MalformedResponse("root element is not an array".to_string())
    })?;
    if root.len() < 3 {
        return Err(TranslationFailure::MalformedResponse(format!(
            "expected at least 3 top-level elements, found {}",
            root.len()
        )));
    }
    let sentences = root[0].as_array().ok_or_else(|| {
        TranslationFailure::MalformedResponse("sentence list at index 0 is not an array".to_string())
    })?;

    let mut translated_text = String::new();
    let mut translated_pronunciation = None;
    let mut source_pronunciation = None;

    for entry in sentences {
        let Some(parts) = entry.as_array() else {
            continue;
        };
        if let Some(fragment) = parts.first().and_then(json_string) {
            translated_text.push_str(&fragment);
        }
        // The trailing phonetics block, when the endpoint sends one.
        if let Some(phonetics) = parts.last().and_then(Value::as_array) {
            if let Some(pronunciation) = phonetics.get(2).and_then(json_string) {
                translated_pronunciation = Some(pronunciation);
            }
            if phonetics.len() > 3 {
                if let Some(pronunciation) = phonetics.get(3).and_then(json_string) {
                    source_pronunciation = Some(pronunciation);
                }
            }
        }
    }

    let code = root[2].as_str().ok_or_else(|| {
        TranslationFailure::MalformedResponse(
            "detected source language at index 2 is not a string".to_string(),
        )
    })?;
    let source_language = Language::resolve(code).ok_or_else(|| {
        TranslationFailure::MalformedResponse(format!(
            "unrecognized source language code: {:?}",
            code
        ))
    })?;

    Ok(DecodedBody {
        translated_text,
        translated_pronunciation,
        source_pronunciation,
        source_language,
    })
}

/// Extract a string value, treating JSON `null` as absent
///
/// The endpoint double-escapes embedded newlines, so literal `\n` sequences
/// in the decoded string are converted to real newlines here.
fn json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.replace("\\n", "\n")),
        _ => None,
    }
}
