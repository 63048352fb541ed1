//! Locale configuration.

use std::borrow::Cow;

use crate::analyzer::{OffsetStrategy, CHINESE_WORD_CHARACTERS};

/// Configuration options for the Chinese locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Word-character class the trimmer keeps. See
    /// [`Trimmer::generate`](crate::analyzer::Trimmer::generate).
    pub word_characters: Cow<'static, str>,
    /// How token offsets are located for modern hosts.
    pub offsets: OffsetStrategy,
    /// Whether the segmenter runs in extended (HMM) mode.
    pub extended_segmentation: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::legacy_compatible()
    }
}

impl LocaleConfig {
    /// Reproduces the historical behaviour, first-occurrence offsets included.
    pub const fn legacy_compatible() -> Self {
        Self {
            word_characters: Cow::Borrowed(CHINESE_WORD_CHARACTERS),
            offsets: OffsetStrategy::FirstOccurrence,
            extended_segmentation: true,
        }
    }

    /// Same stages, but repeated tokens get their own offsets.
    pub const fn precise_offsets() -> Self {
        Self {
            word_characters: Cow::Borrowed(CHINESE_WORD_CHARACTERS),
            offsets: OffsetStrategy::NthOccurrence,
            extended_segmentation: true,
        }
    }
}
