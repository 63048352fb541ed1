//! Edge trimmer generated from a word-character class.
//!
//! A class specification is the body of a regex bracket expression, e.g.
//! `\w一-龥`. The trimmer removes the leading and trailing runs of
//! characters *outside* that class and never touches the interior.
//!
//! `\w` and `\d` are ASCII-only here: `\w` is `[0-9A-Za-z_]`. Anything not
//! listed is trimmed, including CJK punctuation and the extension ideograph
//! blocks.

use std::borrow::Cow;

use locale_zh_types::{LocaleError, Token};
use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII word characters plus the common CJK ideograph range U+4E00–U+9FA5.
pub const CHINESE_WORD_CHARACTERS: &str = "\\w\u{4e00}-\u{9fa5}";

static CHINESE: Lazy<Trimmer> = Lazy::new(|| {
    Trimmer::generate(CHINESE_WORD_CHARACTERS).expect("built-in word class compiles")
});

/// Strips non-word characters from both ends of a token.
#[derive(Debug, Clone)]
pub struct Trimmer {
    class: Box<str>,
    leading: Regex,
    trailing: Regex,
}

impl Trimmer {
    /// Compiles a trimmer for the given word-character class.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidWordCharacters`] if the class is empty or
    /// does not form a valid bracket expression.
    pub fn generate(word_characters: &str) -> Result<Self, LocaleError> {
        let invalid = |reason: String| LocaleError::InvalidWordCharacters {
            class: word_characters.to_owned(),
            reason,
        };

        if word_characters.is_empty() {
            return Err(invalid("class is empty".to_owned()));
        }

        let body = expand_class(word_characters);
        let leading = Regex::new(&format!("^[^{body}]+")).map_err(|e| invalid(e.to_string()))?;
        let trailing = Regex::new(&format!("[^{body}]+$")).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            class: word_characters.into(),
            leading,
            trailing,
        })
    }

    /// Shared trimmer for [`CHINESE_WORD_CHARACTERS`].
    pub fn chinese() -> &'static Trimmer {
        &CHINESE
    }

    /// The class specification this trimmer was generated from.
    pub fn word_characters(&self) -> &str {
        &self.class
    }

    /// Returns `text` without its leading and trailing non-word runs.
    pub fn trim<'t>(&self, text: &'t str) -> &'t str {
        let start = self.leading.find(text).map_or(0, |m| m.end());
        let rest = &text[start..];
        let end = self.trailing.find(rest).map_or(rest.len(), |m| m.start());
        &rest[..end]
    }

    /// Pipeline stage: trims the token text in place.
    #[inline]
    pub fn trim_token(&self, token: Token) -> Option<Token> {
        Some(token.update(|text| Cow::Borrowed(self.trim(text))))
    }
}

/// Rewrites shorthand escapes into explicit ASCII ranges.
fn expand_class(spec: &str) -> String {
    let mut out = String::with_capacity(spec.len() + 16);
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('w') => out.push_str("0-9A-Za-z_"),
            Some('d') => out.push_str("0-9"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push_str("\\\\"),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn trim(s: &str) -> &str {
        Trimmer::chinese().trim(s)
    }

    #[test]
    fn strips_ascii_punctuation_around_ideographs() {
        assert_eq!(trim("(搜索引擎)"), "搜索引擎");
        assert_eq!(trim("\"中文!"), "中文");
        assert_eq!(trim("...abc_1,,"), "abc_1");
    }

    #[test]
    fn interior_is_untouched() {
        assert_eq!(trim("-中.文-"), "中.文");
        assert_eq!(trim("a-b"), "a-b");
    }

    #[test]
    fn cjk_punctuation_is_trimmed() {
        assert_eq!(trim("「你好」"), "你好");
        assert_eq!(trim("你好。"), "你好");
        assert_eq!(trim("，我"), "我");
    }

    #[test]
    fn outside_range_ideographs_are_trimmed() {
        // U+9FA6 sits just past the class range, U+3400 is extension A.
        assert_eq!(trim("\u{9fa6}中"), "中");
        assert_eq!(trim("中\u{3400}"), "中");
    }

    #[test]
    fn non_ascii_letters_are_not_word_characters() {
        assert_eq!(trim("éa"), "a");
        assert_eq!(trim("ü"), "");
    }

    #[test]
    fn all_non_word_becomes_empty() {
        assert_eq!(trim("!!!"), "");
        assert_eq!(trim("。"), "");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn trim_token_keeps_metadata() {
        use locale_zh_types::{Position, TokenMetadata};

        let meta = TokenMetadata {
            position: Some(Position::new(2, 3)),
            index: 1,
        };
        let out = Trimmer::chinese()
            .trim_token(Token::with_metadata("《书》", meta))
            .unwrap();

        assert_eq!(out.as_str(), "书");
        assert_eq!(out.metadata(), Some(&meta));
    }

    #[test]
    fn custom_class() {
        let t = Trimmer::generate("a-c").unwrap();
        assert_eq!(t.trim("xxabcyy"), "abc");
        assert_eq!(t.word_characters(), "a-c");
    }

    #[test]
    fn digit_shorthand() {
        let t = Trimmer::generate("\\d").unwrap();
        assert_eq!(t.trim("ab12cd"), "12");
    }

    #[test]
    fn escaped_literals_pass_through() {
        let t = Trimmer::generate("\\w\\-").unwrap();
        assert_eq!(t.trim("!-a-!"), "-a-");
    }

    #[test]
    fn empty_class_is_rejected() {
        assert!(matches!(
            Trimmer::generate(""),
            Err(LocaleError::InvalidWordCharacters { .. })
        ));
    }

    #[test]
    fn invalid_class_is_rejected() {
        let err = Trimmer::generate("z-a").unwrap_err();
        let LocaleError::InvalidWordCharacters { class, .. } = err;
        assert_eq!(class, "z-a");
    }

    #[test]
    fn expand_class_rewrites_shorthand() {
        assert_eq!(expand_class("\\w"), "0-9A-Za-z_");
        assert_eq!(expand_class("\\d\\s"), "0-9\\s");
    }

    proptest! {
        #[test]
        fn trim_is_idempotent(s in "\\PC{0,24}") {
            let once = trim(&s);
            prop_assert_eq!(trim(once), once);
        }

        #[test]
        fn trim_returns_a_substring(s in "\\PC{0,24}") {
            prop_assert!(s.contains(trim(&s)));
        }

        #[test]
        fn word_only_input_is_unchanged(s in "[a-zA-Z0-9_\u{4e00}-\u{9fa5}]{1,16}") {
            prop_assert_eq!(trim(&s), s.as_str());
        }
    }
}
