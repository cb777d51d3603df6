//! Language table and fuzzy resolution
//!
//! All language data lives in a single static table of
//! `(variant, canonical name, endpoint code, aliases...)` tuples; nothing
//! about a language is encoded anywhere else in the crate. The table covers
//! the language set the translation endpoint accepts, plus the special
//! [`Language::Auto`] sentinel meaning "detect the source language".
//!
//! # Example
//!
//! ```ignore
//! use gtrans::Language;
//!
//! assert_eq!(Language::resolve("en"), Some(Language::English));
//! assert_eq!(Language::resolve("english"), Some(Language::English));
//! assert_eq!(Language::resolve("eng"), Some(Language::English));
//! assert_eq!(Language::English.code(), "en");
//! ```

macro_rules! languages {
    ($( $variant:ident => ($name:literal, $code:literal $(, $alias:literal)*) ),+ $(,)?) => {
        /// A language known to the translation endpoint
        ///
        /// `Auto` is the detection sentinel: valid as a *source* language
        /// only, never as a target.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Language {
            $($variant,)+
        }

        impl Language {
            /// Every language, in table order (`Auto` first).
            pub const ALL: &'static [Language] = &[$(Language::$variant),+];

            /// The code sent to the endpoint in the `sl`, `tl` and `hl`
            /// query parameters.
            pub fn code(self) -> &'static str {
                match self { $(Language::$variant => $code),+ }
            }

            /// The canonical English name of the language.
            pub fn name(self) -> &'static str {
                match self { $(Language::$variant => $name),+ }
            }

            /// Alternate codes and spellings recognized by [`Language::resolve`].
            pub fn aliases(self) -> &'static [&'static str] {
                match self { $(Language::$variant => &[$($alias),*]),+ }
            }
        }
    };
}

languages! {
    Auto => ("Auto", "auto", "automatic", "detect"),
    Afrikaans => ("Afrikaans", "af"),
    Albanian => ("Albanian", "sq"),
    Amharic => ("Amharic", "am"),
    Arabic => ("Arabic", "ar"),
    Armenian => ("Armenian", "hy"),
    Azerbaijani => ("Azerbaijani", "az", "azeri"),
    Basque => ("Basque", "eu"),
    Belarusian => ("Belarusian", "be"),
    Bengali => ("Bengali", "bn", "bangla"),
    Bosnian => ("Bosnian", "bs"),
    Bulgarian => ("Bulgarian", "bg"),
    Catalan => ("Catalan", "ca"),
    Cebuano => ("Cebuano", "ceb"),
    Chichewa => ("Chichewa", "ny", "nyanja"),
    ChineseSimplified => ("Chinese (Simplified)", "zh-cn", "zh", "chinese"),
    ChineseTraditional => ("Chinese (Traditional)", "zh-tw"),
    Corsican => ("Corsican", "co"),
    Croatian => ("Croatian", "hr"),
    Czech => ("Czech", "cs"),
    Danish => ("Danish", "da"),
    Dutch => ("Dutch", "nl"),
    English => ("English", "en"),
    Esperanto => ("Esperanto", "eo"),
    Estonian => ("Estonian", "et"),
    Filipino => ("Filipino", "tl", "fil", "tagalog"),
    Finnish => ("Finnish", "fi"),
    French => ("French", "fr"),
    Frisian => ("Frisian", "fy"),
    Galician => ("Galician", "gl"),
    Georgian => ("Georgian", "ka"),
    German => ("German", "de"),
    Greek => ("Greek", "el"),
    Gujarati => ("Gujarati", "gu"),
    HaitianCreole => ("Haitian Creole", "ht", "creole"),
    Hausa => ("Hausa", "ha"),
    Hawaiian => ("Hawaiian", "haw"),
    Hebrew => ("Hebrew", "iw", "he"),
    Hindi => ("Hindi", "hi"),
    Hmong => ("Hmong", "hmn"),
    Hungarian => ("Hungarian", "hu"),
    Icelandic => ("Icelandic", "is"),
    Igbo => ("Igbo", "ig"),
    Indonesian => ("Indonesian", "id", "in"),
    Irish => ("Irish", "ga", "gaelic"),
    Italian => ("Italian", "it"),
    Japanese => ("Japanese", "ja"),
    Javanese => ("Javanese", "jw", "jv"),
    Kannada => ("Kannada", "kn"),
    Kazakh => ("Kazakh", "kk"),
    Khmer => ("Khmer", "km", "cambodian"),
    Kinyarwanda => ("Kinyarwanda", "rw"),
    Korean => ("Korean", "ko"),
    Kurdish => ("Kurdish", "ku", "kurmanji"),
    Kyrgyz => ("Kyrgyz", "ky", "kirghiz"),
    Lao => ("Lao", "lo"),
    Latin => ("Latin", "la"),
    Latvian => ("Latvian", "lv"),
    Lithuanian => ("Lithuanian", "lt"),
    Luxembourgish => ("Luxembourgish", "lb"),
    Macedonian => ("Macedonian", "mk"),
    Malagasy => ("Malagasy", "mg"),
    Malay => ("Malay", "ms"),
    Malayalam => ("Malayalam", "ml"),
    Maltese => ("Maltese", "mt"),
    Maori => ("Maori", "mi"),
    Marathi => ("Marathi", "mr"),
    Mongolian => ("Mongolian", "mn"),
    Myanmar => ("Myanmar", "my", "burmese"),
    Nepali => ("Nepali", "ne"),
    Norwegian => ("Norwegian", "no", "nb", "bokmal"),
    Odia => ("Odia", "or", "oriya"),
    Pashto => ("Pashto", "ps"),
    Persian => ("Persian", "fa", "farsi"),
    Polish => ("Polish", "pl"),
    Portuguese => ("Portuguese", "pt"),
    Punjabi => ("Punjabi", "pa", "panjabi"),
    Romanian => ("Romanian", "ro"),
    Russian => ("Russian", "ru"),
    Samoan => ("Samoan", "sm"),
    ScotsGaelic => ("Scots Gaelic", "gd"),
    Serbian => ("Serbian", "sr"),
    Sesotho => ("Sesotho", "st", "sotho"),
    Shona => ("Shona", "sn"),
    Sindhi => ("Sindhi", "sd"),
    Sinhala => ("Sinhala", "si", "sinhalese"),
    Slovak => ("Slovak", "sk"),
    Slovenian => ("Slovenian", "sl"),
    Somali => ("Somali", "so"),
    Spanish => ("Spanish", "es", "castilian"),
    Sundanese => ("Sundanese", "su"),
    Swahili => ("Swahili", "sw"),
    Swedish => ("Swedish", "sv"),
    Tajik => ("Tajik", "tg"),
    Tamil => ("Tamil", "ta"),
    Tatar => ("Tatar", "tt"),
    Telugu => ("Telugu", "te"),
    Thai => ("Thai", "th"),
    Turkish => ("Turkish", "tr"),
    Turkmen => ("Turkmen", "tk"),
    Ukrainian => ("Ukrainian", "uk"),
    Urdu => ("Urdu", "ur"),
    Uyghur => ("Uyghur", "ug"),
    Uzbek => ("Uzbek", "uz"),
    Vietnamese => ("Vietnamese", "vi"),
    Welsh => ("Welsh", "cy"),
    Xhosa => ("Xhosa", "xh"),
    Yiddish => ("Yiddish", "yi", "ji"),
    Yoruba => ("Yoruba", "yo"),
    Zulu => ("Zulu", "zu"),
}

impl Language {
    /// Resolve an arbitrary string to a language
    ///
    /// Matching is case-insensitive and runs in four passes, each over the
    /// whole table before falling through to the next:
    ///
    /// 1. exact match on code or alias (`"en"`, `"he"`, `"zh"`);
    /// 2. exact match on canonical name (`"english"`);
    /// 3. prefix match on name or code (`"eng"` finds English);
    /// 4. substring match on name (`"gaelic"` would find Scots Gaelic if
    ///    the alias pass had not claimed it for Irish first).
    ///
    /// Within a pass, ties go to the first entry in table order. Returns
    /// `None` when nothing matches; this function never panics.
    ///
    /// # Example
    ///
    /// ```ignore
    /// assert_eq!(Language::resolve("EN"), Some(Language::English));
    /// assert_eq!(Language::resolve("no-such-language"), None);
    /// ```
    pub fn resolve(query: &str) -> Option<Language> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        for &language in Self::ALL {
            if language.code() == query || language.aliases().contains(&query.as_str()) {
                return Some(language);
            }
        }
        for &language in Self::ALL {
            if language.name().eq_ignore_ascii_case(&query) {
                return Some(language);
            }
        }
        for &language in Self::ALL {
            if language.name().to_lowercase().starts_with(&query)
                || language.code().starts_with(&query)
            {
                return Some(language);
            }
        }
        for &language in Self::ALL {
            if language.name().to_lowercase().contains(&query) {
                return Some(language);
            }
        }
        None
    }

    /// Whether this is the [`Language::Auto`] detection sentinel.
    pub fn is_auto(self) -> bool {
        self == Language::Auto
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Resolution Tests ==========

    #[test]
    fn test_resolve_exact_code() {
        assert_eq!(Language::resolve("en"), Some(Language::English));
        assert_eq!(Language::resolve("es"), Some(Language::Spanish));
        assert_eq!(Language::resolve("zh-cn"), Some(Language::ChineseSimplified));
    }

    #[test]
    fn test_resolve_exact_name() {
        assert_eq!(Language::resolve("english"), Some(Language::English));
        assert_eq!(Language::resolve("Japanese"), Some(Language::Japanese));
        assert_eq!(Language::resolve("Scots Gaelic"), Some(Language::ScotsGaelic));
    }

    #[test]
    fn test_resolve_partial_name() {
        assert_eq!(Language::resolve("eng"), Some(Language::English));
        assert_eq!(Language::resolve("port"), Some(Language::Portuguese));
        assert_eq!(Language::resolve("viet"), Some(Language::Vietnamese));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Language::resolve("EN"), Some(Language::English));
        assert_eq!(Language::resolve("ENGLISH"), Some(Language::English));
        assert_eq!(Language::resolve("EnGlIsH"), Some(Language::English));
    }

    #[test]
    fn test_resolve_equivalent_spellings_agree() {
        // The property callers rely on: every spelling lands on one value.
        assert_eq!(Language::resolve("english"), Language::resolve("en"));
        assert_eq!(Language::resolve("en"), Language::resolve("eng"));
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(Language::resolve("he"), Some(Language::Hebrew));
        assert_eq!(Language::resolve("iw"), Some(Language::Hebrew));
        assert_eq!(Language::resolve("zh"), Some(Language::ChineseSimplified));
        assert_eq!(Language::resolve("farsi"), Some(Language::Persian));
        assert_eq!(Language::resolve("burmese"), Some(Language::Myanmar));
        assert_eq!(Language::resolve("fil"), Some(Language::Filipino));
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(Language::resolve("auto"), Some(Language::Auto));
        assert_eq!(Language::resolve("detect"), Some(Language::Auto));
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(Language::resolve("  en  "), Some(Language::English));
    }

    #[test]
    fn test_resolve_no_match_is_none() {
        assert_eq!(Language::resolve("klingon"), None);
        assert_eq!(Language::resolve("xx-yy"), None);
        assert_eq!(Language::resolve(""), None);
        assert_eq!(Language::resolve("   "), None);
    }

    #[test]
    fn test_exact_code_beats_name_prefix() {
        // "es" is a prefix of "Esperanto" but the exact Spanish code wins.
        assert_eq!(Language::resolve("es"), Some(Language::Spanish));
        // "it" is inside many names but the exact Italian code wins.
        assert_eq!(Language::resolve("it"), Some(Language::Italian));
    }

    // ========== Table Tests ==========

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn test_every_code_resolves_to_its_language() {
        for &language in Language::ALL {
            assert_eq!(Language::resolve(language.code()), Some(language));
        }
    }

    #[test]
    fn test_every_name_resolves() {
        for &language in Language::ALL {
            assert!(Language::resolve(language.name()).is_some());
        }
    }

    #[test]
    fn test_auto_is_first() {
        assert_eq!(Language::ALL[0], Language::Auto);
        assert!(Language::Auto.is_auto());
        assert!(!Language::English.is_auto());
    }

    // ========== Accessor Tests ==========

    #[test]
    fn test_code_and_name() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::English.name(), "English");
        assert_eq!(Language::Hebrew.code(), "iw");
        assert_eq!(Language::Auto.code(), "auto");
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Language::German.to_string(), "German");
        assert_eq!(Language::ChineseSimplified.to_string(), "Chinese (Simplified)");
    }

    #[test]
    fn test_language_is_copy_and_hashable() {
        use std::collections::HashSet;
        let a = Language::French;
        let b = a;
        assert_eq!(a, b);
        let set: HashSet<Language> = Language::ALL.iter().copied().collect();
        assert_eq!(set.len(), Language::ALL.len());
    }
}
