//! Core types and errors for the Chinese search locale.
//!
//! This crate holds the value types shared between the analyzer stages and the
//! host integration. Keeping them separate ensures:
//!
//! - **Stable boundaries**: hosts can depend on tokens and errors without
//!   pulling in the segmenter
//! - **Cross-crate compatibility**: the core crate and its tools agree on one
//!   `Token` shape
//! - **No cycles**: nothing here knows about pipelines or dictionaries

#![warn(missing_docs)]

use core::fmt;

use serde::{Deserialize, Serialize};

/// Location of a token inside the source text it was cut from.
///
/// Both fields count Unicode scalar values (chars) of the trimmed,
/// lower-cased source, not bytes. For BMP text this matches the UTF-16
/// offsets highlighters usually expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Char offset of the first character.
    pub start: u32,
    /// Length in chars.
    pub len: u32,
}

impl Position {
    /// Creates a new position.
    #[inline(always)]
    pub const fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Char offset one past the last character.
    #[inline(always)]
    pub const fn end(self) -> u32 {
        self.start + self.len
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.start, self.len)
    }
}

/// Metadata attached to tokens produced for modern hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Where the token was found, if it could be located in the source.
    pub position: Option<Position>,
    /// Ordinal of the token in the tokenizer output.
    pub index: u32,
}

/// A normalized text fragment flowing through the pipeline.
///
/// Legacy hosts only ever see the text; modern hosts may also receive
/// [`TokenMetadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    metadata: Option<TokenMetadata>,
}

impl Token {
    /// Creates a bare token with no metadata.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: None,
        }
    }

    /// Creates a token carrying metadata.
    #[inline]
    pub fn with_metadata(text: impl Into<String>, metadata: TokenMetadata) -> Self {
        Self {
            text: text.into(),
            metadata: Some(metadata),
        }
    }

    /// Returns the token text.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the metadata, if any.
    #[inline(always)]
    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.metadata.as_ref()
    }

    /// Returns `true` if the token text is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the text with the result of `f`, keeping metadata.
    ///
    /// Returning the current text itself, borrowed, does not reallocate.
    pub fn update<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> std::borrow::Cow<'_, str>,
    {
        let next = match f(&self.text) {
            std::borrow::Cow::Borrowed(s)
                if s.as_ptr() == self.text.as_ptr() && s.len() == self.text.len() =>
            {
                None
            }
            other => Some(other.into_owned()),
        };
        if let Some(text) = next {
            self.text = text;
        }
        self
    }

    /// Consumes the token and returns its text.
    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Raw value of a document field handed to a tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text to be segmented.
    Text(&'a str),
    /// Terms that were already split by the caller.
    Terms(&'a [&'a str]),
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(text: &'a str) -> Self {
        FieldValue::Text(text)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(text: &'a String) -> Self {
        FieldValue::Text(text.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for FieldValue<'a> {
    fn from(terms: &'a [&'a str]) -> Self {
        FieldValue::Terms(terms)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for FieldValue<'a> {
    fn from(terms: &'a [&'a str; N]) -> Self {
        FieldValue::Terms(terms.as_slice())
    }
}

/// Parses the `(major, minor)` pair of a version identifier.
///
/// Accepts a leading `v`. Returns `None` when the major component is not a
/// number; a missing or unparseable minor reads as `0`.
///
/// ```
/// use locale_zh_types::parse_version;
///
/// assert_eq!(parse_version("v0.7.2"), Some((0, 7)));
/// assert_eq!(parse_version("2"), Some((2, 0)));
/// assert_eq!(parse_version("next"), None);
/// ```
pub fn parse_version(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.trim().trim_start_matches(['v', 'V']).split('.');
    let major = parts.next()?.parse::<u32>().ok()?;
    let minor = parts.next().and_then(|m| m.parse::<u32>().ok()).unwrap_or(0);
    Some((major, minor))
}

/// The two token shapes a host can expect.
///
/// Resolved once from the host's version string when the locale is
/// installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostMode {
    /// 2.x hosts: one tokenizer field, tokens carry metadata.
    Modern,
    /// 0.x/1.x hosts: tokenizer slot at library or instance scope, bare tokens.
    Legacy,
}

impl HostMode {
    /// Detects the mode from a version identifier such as `"2.3.9"`.
    ///
    /// Any major version of 2 or above is modern. Missing or unparseable
    /// versions are treated as legacy.
    pub fn from_version(version: &str) -> Self {
        match parse_version(version) {
            Some((major, _)) if major >= 2 => HostMode::Modern,
            _ => HostMode::Legacy,
        }
    }

    /// Returns `true` if tokens for this host carry metadata.
    #[inline(always)]
    pub const fn carries_metadata(self) -> bool {
        matches!(self, HostMode::Modern)
    }

    /// Wraps token text in the shape this host consumes.
    ///
    /// Legacy hosts drop the metadata.
    #[inline]
    pub fn wrap_token(self, text: impl Into<String>, metadata: Option<TokenMetadata>) -> Token {
        match (self, metadata) {
            (HostMode::Modern, Some(metadata)) => Token::with_metadata(text, metadata),
            _ => Token::new(text),
        }
    }
}

impl fmt::Display for HostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostMode::Modern => f.write_str("modern"),
            HostMode::Legacy => f.write_str("legacy"),
        }
    }
}

/// Ordered stage labels of a pipeline, as persisted with an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedPipeline(pub Vec<String>);

impl SerializedPipeline {
    /// Iterates over the labels in pipeline order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Errors raised when installing the locale into a host.
///
/// Both are precondition failures: nothing has been mutated when they are
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstallError {
    /// No host library handle was supplied.
    #[error("search host is not present; load the host library before installing the locale")]
    HostMissing,
    /// The host was loaded without its stemmer support extension.
    #[error("host stemmer support is not present; load stemmer support before installing the locale")]
    StemmerSupportMissing,
}

/// Errors raised while rebuilding a pipeline from persisted labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// A persisted label has no function in the registry.
    #[error("cannot load unregistered function: {label}")]
    UnregisteredFunction {
        /// The missing label.
        label: String,
    },
}

/// Errors raised while building locale stages from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The word-character class could not be compiled into a trimmer.
    #[error("invalid word character class {class:?}: {reason}")]
    InvalidWordCharacters {
        /// The class specification as given.
        class: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_mode_from_version() {
        assert_eq!(HostMode::from_version("2.3.9"), HostMode::Modern);
        assert_eq!(HostMode::from_version("2"), HostMode::Modern);
        assert_eq!(HostMode::from_version("v2.0.0"), HostMode::Modern);
        assert_eq!(HostMode::from_version("10.1.0"), HostMode::Modern);
        assert_eq!(HostMode::from_version("1.0.0"), HostMode::Legacy);
        assert_eq!(HostMode::from_version("0.7.2"), HostMode::Legacy);
        assert_eq!(HostMode::from_version("0.6.0"), HostMode::Legacy);
    }

    #[test]
    fn host_mode_unparseable_is_legacy() {
        assert_eq!(HostMode::from_version(""), HostMode::Legacy);
        assert_eq!(HostMode::from_version("next"), HostMode::Legacy);
    }

    #[test]
    fn legacy_wrap_drops_metadata() {
        let meta = TokenMetadata {
            position: Some(Position::new(0, 2)),
            index: 0,
        };
        let modern = HostMode::Modern.wrap_token("搜索", Some(meta));
        let legacy = HostMode::Legacy.wrap_token("搜索", Some(meta));

        assert_eq!(modern.metadata(), Some(&meta));
        assert!(legacy.metadata().is_none());
        assert_eq!(legacy.as_str(), "搜索");
    }

    #[test]
    fn token_update_keeps_metadata() {
        let meta = TokenMetadata {
            position: Some(Position::new(3, 4)),
            index: 7,
        };
        let token = Token::with_metadata("(abc)", meta);
        let token = token.update(|s| s.trim_matches(['(', ')']).to_owned().into());

        assert_eq!(token.as_str(), "abc");
        assert_eq!(token.metadata(), Some(&meta));
    }

    #[test]
    fn token_update_borrowed_noop() {
        let token = Token::new("abc").update(|s| std::borrow::Cow::Borrowed(s));
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn token_update_applies_static_replacement_of_same_length() {
        let token = Token::new("abc").update(|_| std::borrow::Cow::Borrowed("xyz"));
        assert_eq!(token.as_str(), "xyz");

        let token = Token::new("北京").update(|_| std::borrow::Cow::Borrowed("上海"));
        assert_eq!(token.as_str(), "上海");
    }

    #[test]
    fn token_update_applies_borrowed_prefix() {
        let token = Token::new("abcabc").update(|s| std::borrow::Cow::Borrowed(&s[3..]));
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn version_parsing_feeds_mode() {
        assert_eq!(parse_version(" 1.0.0 "), Some((1, 0)));
        assert_eq!(parse_version("0.x"), Some((0, 0)));
        assert_eq!(parse_version(""), None);
        assert_eq!(HostMode::from_version("V2.0.0-beta"), HostMode::Modern);
        assert_eq!(HostMode::from_version("1.9.9"), HostMode::Legacy);
        assert_eq!(HostMode::from_version("unknown"), HostMode::Legacy);
    }

    #[test]
    fn position_end_and_display() {
        let p = Position::new(4, 2);
        assert_eq!(p.end(), 6);
        assert_eq!(p.to_string(), "4+2");
    }

    #[test]
    fn field_value_conversions() {
        let terms = ["Foo", "BAR"];
        assert_eq!(FieldValue::from("x"), FieldValue::Text("x"));
        assert_eq!(FieldValue::from(&terms), FieldValue::Terms(&["Foo", "BAR"]));
    }

    #[test]
    fn serialized_pipeline_is_a_plain_json_array() {
        let pipeline = SerializedPipeline(vec![
            "trimmer-zh".to_owned(),
            "stopWordFilter-zh".to_owned(),
            "stemmer-zh".to_owned(),
        ]);
        let json = serde_json::to_string(&pipeline).unwrap();
        assert_eq!(json, r#"["trimmer-zh","stopWordFilter-zh","stemmer-zh"]"#);

        let back: SerializedPipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pipeline);
        assert_eq!(back.len(), 3);
    }

    #[test]
    fn error_messages() {
        assert!(InstallError::HostMissing.to_string().contains("not present"));
        let err = PipelineError::UnregisteredFunction {
            label: "stemmer-zh".into(),
        };
        assert_eq!(err.to_string(), "cannot load unregistered function: stemmer-zh");
    }
}
