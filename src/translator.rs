//! HTTP execution and the public calling surface
//!
//! One core async primitive performs the single request attempt; the
//! blocking entry points are thin adapters that drive it on a dedicated
//! current-thread runtime. There is no retry, no backoff, and no timeout
//! policy of this crate's own; callers wanting timeouts, proxies or
//! interceptors inject their own configured [`reqwest::Client`] through
//! [`Translator::with_client`].
//!
//! # Example
//!
//! ```ignore
//! use gtrans::{Language, Translator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Translator::new()?;
//!     let result = translator.translate("Hello, world!", Language::Spanish).await?;
//!     println!("{}", result.translated_text);
//!     println!("detected: {}", result.source_language);
//!     Ok(())
//! }
//! ```

use crate::error::{TranslateResult, TranslationFailure};
use crate::language::Language;
use crate::request;
use crate::response;
use crate::translation::Translation;
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// Client for the unofficial translation endpoint
///
/// Cheap to clone; the underlying [`reqwest::Client`] is reference-counted
/// and reuses connections across calls. No state is shared between calls
/// beyond that pool.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    endpoint: Url,
}

impl Translator {
    /// Create a translator with a default transport
    ///
    /// The client sends the spoofed desktop-browser `User-Agent` the
    /// endpoint expects; everything else (timeouts, pooling) is reqwest's
    /// default.
    pub fn new() -> TranslateResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(request::USER_AGENT));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Create a translator over a caller-configured transport
    ///
    /// The caller owns all transport policy (timeouts, proxies,
    /// interceptors). Note the endpoint may reject clients that do not
    /// present a browser-like `User-Agent` header.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: Url::parse(request::ENDPOINT).expect("fixed endpoint is a valid URL"),
        }
    }

    #[cfg(test)]
    pub(crate) fn for_endpoint(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Translate `text` into `target`, auto-detecting the source language
    ///
    /// See [`Translator::translate_from`].
    pub async fn translate(&self, text: &str, target: Language) -> TranslateResult<Translation> {
        self.translate_from(text, target, Language::Auto).await
    }

    /// Translate `text` from `source` into `target`
    ///
    /// Exactly one request attempt. An `Auto` target fails with
    /// [`TranslationFailure::InvalidArgument`] before any I/O. Dropping or
    /// aborting the returned future cancels the in-flight HTTP call; a
    /// cancelled call never resolves.
    pub async fn translate_from(
        &self,
        text: &str,
        target: Language,
        source: Language,
    ) -> TranslateResult<Translation> {
        let url = request::build_url(&self.endpoint, text, target, source)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslationFailure::HttpStatus(status.as_u16()));
        }
        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(TranslationFailure::EmptyBody);
        }

        let decoded = response::decode_body(&body)?;
        Ok(Translation {
            target,
            source_language: decoded.source_language,
            source_text: text.to_string(),
            translated_text: decoded.translated_text,
            translated_pronunciation: decoded.translated_pronunciation,
            source_pronunciation: decoded.source_pronunciation,
            raw: body,
            url: url.to_string(),
        })
    }

    /// Blocking form of [`Translator::translate`]
    ///
    /// Blocks the calling thread until the request completes; there is no
    /// cancellation path. Must not be called from within an async runtime.
    pub fn translate_blocking(&self, text: &str, target: Language) -> TranslateResult<Translation> {
        self.translate_from_blocking(text, target, Language::Auto)
    }

    /// Blocking form of [`Translator::translate_from`]
    pub fn translate_from_blocking(
        &self,
        text: &str,
        target: Language,
        source: Language,
    ) -> TranslateResult<Translation> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TranslationFailure::Transport(Box::new(e)))?;
        runtime.block_on(self.translate_from(text, target, source))
    }
}

/// Translate with a default [`Translator`], auto-detecting the source.
pub async fn translate(text: &str, target: Language) -> TranslateResult<Translation> {
    Translator::new()?.translate(text, target).await
}

/// Translate with a default [`Translator`] and an explicit source language.
pub async fn translate_from(
    text: &str,
    target: Language,
    source: Language,
) -> TranslateResult<Translation> {
    Translator::new()?.translate_from(text, target, source).await
}

/// Blocking form of [`translate`].
pub fn translate_blocking(text: &str, target: Language) -> TranslateResult<Translation> {
    Translator::new()?.translate_blocking(text, target)
}

/// Blocking form of [`translate_from`].
pub fn translate_from_blocking(
    text: &str,
    target: Language,
    source: Language,
) -> TranslateResult<Translation> {
    Translator::new()?.translate_from_blocking(text, target, source)
}
