//! Word segmentation seam.
//!
//! The tokenizer never talks to a dictionary directly. It asks a
//! [`Segmenter`] for search-mode segments, which keeps the locale logic
//! testable with a fake and lets callers bring their own dictionary.
//!
//! [`JiebaSegmenter`] is the production implementation backed by `jieba-rs`.
//! Loading the bundled dictionary is expensive, so [`JiebaSegmenter::shared`]
//! hands out one lazily built, read-only instance for the whole process.

use std::borrow::Cow;
use std::sync::Arc;

use jieba_rs::Jieba;
use once_cell::sync::Lazy;

static SHARED: Lazy<Arc<JiebaSegmenter>> = Lazy::new(|| {
    tracing::debug!("loading default jieba dictionary");
    Arc::new(JiebaSegmenter::new())
});

/// Splits text into words for indexing.
///
/// Search mode may return overlapping sub-words (for example both
/// `中华人民共和国` and `中华`), trading linguistic precision for recall.
/// Segments may contain spaces; callers flatten them.
pub trait Segmenter: Send + Sync {
    /// Segments `text` in search mode.
    ///
    /// `extended` enables the segmenter's extended mode (HMM new-word
    /// discovery for jieba).
    fn segment_for_search<'a>(&self, text: &'a str, extended: bool) -> Vec<Cow<'a, str>>;
}

impl<S: Segmenter + ?Sized> Segmenter for Arc<S> {
    #[inline]
    fn segment_for_search<'a>(&self, text: &'a str, extended: bool) -> Vec<Cow<'a, str>> {
        (**self).segment_for_search(text, extended)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    #[inline]
    fn segment_for_search<'a>(&self, text: &'a str, extended: bool) -> Vec<Cow<'a, str>> {
        (**self).segment_for_search(text, extended)
    }
}

/// `jieba-rs` backed segmenter.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl JiebaSegmenter {
    /// Builds a segmenter with the bundled dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    /// Wraps an already configured `Jieba`, e.g. one with a custom dictionary.
    pub fn from_jieba(jieba: Jieba) -> Self {
        Self { jieba }
    }

    /// Process-wide instance with the bundled dictionary.
    pub fn shared() -> Arc<JiebaSegmenter> {
        Arc::clone(&SHARED)
    }
}

impl Segmenter for JiebaSegmenter {
    #[inline]
    fn segment_for_search<'a>(&self, text: &'a str, extended: bool) -> Vec<Cow<'a, str>> {
        self.jieba
            .cut_for_search(text, extended)
            .into_iter()
            .map(Cow::Borrowed)
            .collect()
    }
}

impl core::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JiebaSegmenter").finish_non_exhaustive()
    }
}
