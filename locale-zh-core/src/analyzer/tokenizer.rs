//! Chinese tokenizer.
//!
//! Turns a field value into the token sequence a search host indexes. Free
//! text goes through the search-mode segmenter; pre-split terms are only
//! lower-cased.
//!
//! ## What It Does
//!
//! Given `"  我来到北京清华大学 "`, the text is trimmed and lower-cased, cut by
//! the segmenter, and every segment is split on ASCII space:
//!
//! ```ignore
//! ("我", 0+1, 0)
//! ("来到", 1+2, 1)
//! ("北京", 3+2, 2)
//! ("清华", 5+2, 3)
//! ("华大", 6+2, 4)
//! ("大学", 7+2, 5)
//! ("清华大学", 5+4, 6)
//! ```
//!
//! ## Host Modes
//!
//! - **Modern**: tokens cut from text carry `(position, index)` metadata
//! - **Legacy**: bare lower-cased tokens, no metadata
//!
//! ## Offsets
//!
//! Positions are located by searching the token in the lower-cased source.
//! [`OffsetStrategy::FirstOccurrence`] always reports the first match, so a
//! repeated token shares one offset. [`OffsetStrategy::NthOccurrence`]
//! reports the k-th match for the k-th repeat instead.

use std::borrow::Cow;

use locale_zh_types::{FieldValue, HostMode, Position, Token, TokenMetadata};
use memchr::{memchr_iter, memmem};
use rustc_hash::FxHashMap;

use crate::segmenter::Segmenter;

/// How token offsets are located in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetStrategy {
    /// Every token is located at the first match in the source.
    #[default]
    FirstOccurrence,
    /// The k-th token with a given text is located at the k-th
    /// non-overlapping match, falling back to the first match.
    NthOccurrence,
}

/// Search-mode tokenizer over an injected [`Segmenter`].
#[derive(Debug, Clone)]
pub struct ChineseTokenizer<S> {
    segmenter: S,
    mode: HostMode,
    offsets: OffsetStrategy,
    extended: bool,
}

impl<S: Segmenter> ChineseTokenizer<S> {
    /// Creates a tokenizer producing tokens shaped for `mode`.
    ///
    /// Extended segmentation is on and offsets use
    /// [`OffsetStrategy::FirstOccurrence`].
    pub fn new(segmenter: S, mode: HostMode) -> Self {
        Self {
            segmenter,
            mode,
            offsets: OffsetStrategy::FirstOccurrence,
            extended: true,
        }
    }

    /// Sets the offset strategy.
    #[must_use]
    pub fn with_offsets(mut self, offsets: OffsetStrategy) -> Self {
        self.offsets = offsets;
        self
    }

    /// Enables or disables the segmenter's extended mode.
    #[must_use]
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Host mode the tokens are shaped for.
    #[inline(always)]
    pub fn mode(&self) -> HostMode {
        self.mode
    }

    /// Tokenizes a field value. `None` yields no tokens.
    pub fn tokenize(&self, input: Option<FieldValue<'_>>) -> Vec<Token> {
        match input {
            None => Vec::new(),
            Some(FieldValue::Terms(terms)) => terms
                .iter()
                .map(|term| self.mode.wrap_token(term.to_lowercase(), None))
                .collect(),
            Some(FieldValue::Text(text)) => self.tokenize_text(text),
        }
    }

    fn tokenize_text(&self, text: &str) -> Vec<Token> {
        let source = text.trim().to_lowercase();
        let segments = self.segmenter.segment_for_search(&source, self.extended);

        let mut pieces: Vec<&str> = Vec::with_capacity(segments.len());
        for segment in &segments {
            split_spaces(segment, |piece| pieces.push(piece));
        }

        tracing::trace!(
            segments = segments.len(),
            tokens = pieces.len(),
            mode = %self.mode,
            "tokenized field"
        );

        if !self.mode.carries_metadata() {
            return pieces.into_iter().map(Token::new).collect();
        }

        let mut locator = OffsetLocator::new(&source, self.offsets);
        pieces
            .into_iter()
            .enumerate()
            .map(|(index, piece)| {
                let metadata = TokenMetadata {
                    position: locator.locate(piece),
                    index: u32::try_from(index).unwrap_or(u32::MAX),
                };
                Token::with_metadata(piece, metadata)
            })
            .collect()
    }
}

/// Emits the non-empty runs of `segment` between ASCII spaces, left to right.
#[inline]
fn split_spaces<'s, F>(segment: &'s Cow<'_, str>, mut emit: F)
where
    F: FnMut(&'s str),
{
    let text: &'s str = segment.as_ref();
    let mut start = 0usize;

    for i in memchr_iter(b' ', text.as_bytes()) {
        if start < i {
            emit(&text[start..i]);
        }
        start = i + 1;
    }

    if start < text.len() {
        emit(&text[start..]);
    }
}

struct OffsetLocator<'s, 'p> {
    source: &'s str,
    strategy: OffsetStrategy,
    next_from: FxHashMap<&'p str, usize>,
}

impl<'s, 'p> OffsetLocator<'s, 'p> {
    fn new(source: &'s str, strategy: OffsetStrategy) -> Self {
        Self {
            source,
            strategy,
            next_from: FxHashMap::default(),
        }
    }

    fn locate(&mut self, piece: &'p str) -> Option<Position> {
        let haystack = self.source.as_bytes();
        let needle = piece.as_bytes();

        let from = match self.strategy {
            OffsetStrategy::FirstOccurrence => 0,
            OffsetStrategy::NthOccurrence => self.next_from.get(piece).copied().unwrap_or(0),
        };

        let byte = match memmem::find(&haystack[from..], needle) {
            Some(at) => from + at,
            None if from > 0 => memmem::find(haystack, needle)?,
            None => return None,
        };

        if self.strategy == OffsetStrategy::NthOccurrence {
            self.next_from.insert(piece, byte + needle.len());
        }

        let start = self.source[..byte].chars().count();
        let len = piece.chars().count();
        Some(Position::new(saturate(start), saturate(len)))
    }
}

#[inline(always)]
fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
