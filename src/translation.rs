//! The immutable result of a successful translation

use crate::language::Language;

/// A completed translation
///
/// Constructed once, immediately after a successful response, and immutable
/// afterwards. Two translations compare equal when every field matches,
/// raw body included, never by identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Translation {
    /// The language the text was translated into.
    pub target: Language,
    /// The detected (or confirmed) language of the source text.
    pub source_language: Language,
    /// The original text as submitted.
    pub source_text: String,
    /// All sentence-level translation fragments, concatenated in order.
    pub translated_text: String,
    /// Romanized pronunciation of the translated text. Usually absent for
    /// Latin-script targets.
    pub translated_pronunciation: Option<String>,
    /// Romanized pronunciation of the source text, when the endpoint sends
    /// one.
    pub source_pronunciation: Option<String>,
    /// The raw response body the fields were decoded from.
    pub raw: String,
    /// The effective request URL.
    pub url: String,
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translation {
        Translation {
            target: Language::Spanish,
            source_language: Language::English,
            source_text: "Hello".to_string(),
            translated_text: "Hola".to_string(),
            translated_pronunciation: None,
            source_pronunciation: None,
            raw: r#"[[["Hola","Hello",null,null]],null,"en"]"#.to_string(),
            url: "https://translate.googleapis.com/translate_a/single?q=Hello".to_string(),
        }
    }

    #[test]
    fn test_value_equality_over_all_fields() {
        assert_eq!(sample(), sample().clone());

        let mut other = sample();
        other.raw.push(' ');
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(sample());
        set.insert(sample());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_is_the_translated_text() {
        assert_eq!(sample().to_string(), "Hola");
    }
}
