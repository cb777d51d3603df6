//! Free Google Translate client for Rust
//!
//! `gtrans` talks to the unofficial public web endpoint
//! (`translate_a/single`, the one the translate widget uses), so it needs
//! no API key. The endpoint's response is an undocumented nested JSON
//! array; this crate isolates that positional contract in one decoder and
//! returns a structured [`Translation`] with the translated text, both
//! romanized pronunciations when present, and the detected source
//! language.
//!
//! Being unofficial, the endpoint comes with no stability guarantee; the
//! decoder fails loudly with [`TranslationFailure::MalformedResponse`]
//! rather than guessing when the format drifts.
//!
//! # Example
//!
//! ```ignore
//! use gtrans::{Language, Translator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Translator::new()?;
//!
//!     // Auto-detect the source language
//!     let result = translator.translate("Wie geht es dir?", Language::English).await?;
//!     println!("{}", result.translated_text); // "How are you?"
//!     println!("from {}", result.source_language); // "from German"
//!
//!     // Or pin it explicitly
//!     let result = translator
//!         .translate_from("Hello", Language::Japanese, Language::English)
//!         .await?;
//!     println!("{:?}", result.translated_pronunciation); // Some("Kon'nichiwa")
//!
//!     Ok(())
//! }
//! ```
//!
//! Blocking variants ([`Translator::translate_blocking`] and friends) are
//! available for callers without an async runtime. Language lookup from
//! arbitrary user input goes through [`Language::resolve`].

pub mod error;
pub mod language;
pub mod request;
mod response;
pub mod translation;
pub mod translator;


// Re-export the main types for convenient access
pub use error::{TranslateResult, TranslationFailure};
pub use language::Language;
pub use translation::Translation;
pub use translator::{
    Translator, translate, translate_blocking, translate_from, translate_from_blocking,
};
