//! Request construction for the unofficial translation endpoint
//!
//! Builds the GET URL deterministically from the text and language pair.
//! The endpoint takes no API key; instead it expects the fixed `gtx` client
//! parameter set below and a desktop-browser `User-Agent` header (the
//! default reqwest identifier may be rejected).

use crate::error::{TranslateResult, TranslationFailure};
use crate::language::Language;
use reqwest::Url;

/// The unofficial web endpoint. Versionless and undocumented upstream.
pub const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Spoofed desktop browser identifier sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Return-data segments the endpoint expects, one `dt` parameter each.
const DT_SEGMENTS: [&str; 10] = ["at", "bd", "ex", "ld", "md", "qca", "rw", "rm", "ss", "t"];

/// Fixed token; the endpoint accepts any non-empty value here.
const TOKEN: &str = "bushissocool";

/// Build the full request URL for one translation
///
/// Fails with [`TranslationFailure::InvalidArgument`] before any I/O when
/// `target` is the `Auto` sentinel. The query serializer handles all
/// URL encoding, including the user-supplied `q` text.
pub(crate) fn build_url(
    endpoint: &Url,
    text: &str,
    target: Language,
    source: Language,
) -> TranslateResult<Url> {
    if target.is_auto() {
        return Err(TranslationFailure::InvalidArgument(
            "target language must not be Auto; Auto is only valid as a source".to_string(),
        ));
    }

    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("client", "gtx");
        for segment in DT_SEGMENTS {
            pairs.append_pair("dt", segment);
        }
        pairs.append_pair("ie", "UTF-8");
        pairs.append_pair("oe", "UTF-8");
        pairs.append_pair("otf", "1");
        pairs.append_pair("ssel", "0");
        pairs.append_pair("tsel", "0");
        pairs.append_pair("tk", TOKEN);
        pairs.append_pair("sl", source.code());
        pairs.append_pair("tl", target.code());
        pairs.append_pair("hl", target.code());
        pairs.append_pair("q", text);
    }
    Ok(url)
}
