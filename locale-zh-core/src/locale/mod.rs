//! The Chinese locale.
//!
//! [`ChineseLocale`] bundles the segmenter with the three pipeline stages and
//! hands them out as labelled [`PipelineFunction`]s. [`install`] wires them
//! into a [`Host`](crate::host::Host).
//!
//! ```no_run
//! use locale_zh_core::host::{Host, ModernHost};
//! use locale_zh_core::locale::ChineseLocale;
//!
//! let mut host = ModernHost::new("2.3.9");
//! ChineseLocale::new().install(Some(&mut host)).unwrap();
//!
//! let tokens = host.analyze(Some("我来到北京清华大学".into()));
//! assert!(!tokens.is_empty());
//! ```

mod config;
mod install;

pub use config::LocaleConfig;
pub use install::install;

use std::sync::Arc;

use locale_zh_types::{HostMode, InstallError, LocaleError};
use once_cell::sync::Lazy;

use crate::analyzer::{stem, ChineseTokenizer, StopWordFilter, Trimmer, CHINESE_WORD_CHARACTERS};
use crate::host::{tokenizer_fn, Host, TokenizerFn};
use crate::pipeline::PipelineFunction;
use crate::segmenter::{JiebaSegmenter, Segmenter};

/// Registry label of the trimmer stage.
pub const TRIMMER_LABEL: &str = "trimmer-zh";
/// Registry label of the stop-word filter stage.
pub const STOP_WORD_FILTER_LABEL: &str = "stopWordFilter-zh";
/// Registry label of the stemmer stage.
pub const STEMMER_LABEL: &str = "stemmer-zh";

static DEFAULT_TRIMMER: Lazy<Arc<Trimmer>> = Lazy::new(|| Arc::new(Trimmer::chinese().clone()));

/// Chinese tokenizer and pipeline stages over a segmenter `S`.
#[derive(Debug, Clone)]
pub struct ChineseLocale<S = Arc<JiebaSegmenter>> {
    segmenter: S,
    config: LocaleConfig,
    trimmer: Arc<Trimmer>,
    stop_words: StopWordFilter,
}

impl ChineseLocale {
    /// Locale over the shared jieba dictionary with the default config.
    pub fn new() -> Self {
        Self::with_segmenter(JiebaSegmenter::shared())
    }
}

impl Default for ChineseLocale {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ChineseLocale<S>
where
    S: Segmenter + Clone + 'static,
{
    /// Locale over a custom segmenter with the default config.
    pub fn with_segmenter(segmenter: S) -> Self {
        Self {
            segmenter,
            config: LocaleConfig::default(),
            trimmer: Arc::clone(&DEFAULT_TRIMMER),
            stop_words: StopWordFilter::chinese(),
        }
    }

    /// Locale over a custom segmenter and config.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidWordCharacters`] if the configured
    /// character class does not compile.
    pub fn with_config(segmenter: S, config: LocaleConfig) -> Result<Self, LocaleError> {
        let trimmer = if config.word_characters == CHINESE_WORD_CHARACTERS {
            Arc::clone(&DEFAULT_TRIMMER)
        } else {
            Arc::new(Trimmer::generate(&config.word_characters)?)
        };

        Ok(Self {
            segmenter,
            config,
            trimmer,
            stop_words: StopWordFilter::chinese(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    /// The trimmer stage, labelled `trimmer-zh`.
    pub fn trimmer(&self) -> PipelineFunction {
        let trimmer = Arc::clone(&self.trimmer);
        PipelineFunction::new(TRIMMER_LABEL, move |token| trimmer.trim_token(token))
    }

    /// The stop-word filter stage, labelled `stopWordFilter-zh`.
    pub fn stop_word_filter(&self) -> PipelineFunction {
        let stop_words = self.stop_words.clone();
        PipelineFunction::new(STOP_WORD_FILTER_LABEL, move |token| stop_words.filter(token))
    }

    /// The stemmer stage, labelled `stemmer-zh`.
    pub fn stemmer(&self) -> PipelineFunction {
        PipelineFunction::new(STEMMER_LABEL, stem)
    }

    /// All three stages in pipeline order.
    pub fn stages(&self) -> [PipelineFunction; 3] {
        [self.trimmer(), self.stop_word_filter(), self.stemmer()]
    }

    /// A tokenizer shaped for `mode`.
    pub fn tokenizer(&self, mode: HostMode) -> ChineseTokenizer<S> {
        ChineseTokenizer::new(self.segmenter.clone(), mode)
            .with_offsets(self.config.offsets)
            .with_extended(self.config.extended_segmentation)
    }

    /// The tokenizer for `mode`, boxed for a host slot.
    pub fn tokenizer_fn(&self, mode: HostMode) -> TokenizerFn {
        let tokenizer = self.tokenizer(mode);
        tokenizer_fn(move |input| tokenizer.tokenize(input))
    }

    /// Installs the locale into `host`. See [`install`].
    pub fn install<H>(&self, host: Option<&mut H>) -> Result<HostMode, InstallError>
    where
        H: Host + ?Sized,
    {
        install(host, self)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(Clone)]
    struct Chars;

    impl Segmenter for Chars {
        fn segment_for_search<'a>(&self, text: &'a str, _: bool) -> Vec<Cow<'a, str>> {
            text.char_indices()
                .map(|(i, c)| Cow::Borrowed(&text[i..i + c.len_utf8()]))
                .collect()
        }
    }

    #[test]
    fn stage_labels_in_order() {
        let labels: Vec<String> = ChineseLocale::with_segmenter(Chars)
            .stages()
            .iter()
            .map(|s| s.label().to_owned())
            .collect();
        assert_eq!(labels, [TRIMMER_LABEL, STOP_WORD_FILTER_LABEL, STEMMER_LABEL]);
    }

    #[test]
    fn default_class_reuses_shared_trimmer() {
        let a = ChineseLocale::with_config(Chars, LocaleConfig::default()).unwrap();
        let b = ChineseLocale::with_segmenter(Chars);
        assert!(Arc::ptr_eq(&a.trimmer, &b.trimmer));
    }

    #[test]
    fn tokenizer_follows_config() {
        let zh = ChineseLocale::with_config(Chars, LocaleConfig::precise_offsets()).unwrap();
        let out = zh.tokenizer(HostMode::Modern).tokenize(Some("中中".into()));
        let starts: Vec<_> = out
            .iter()
            .filter_map(|t| t.metadata()?.position)
            .map(|p| p.start)
            .collect();
        assert_eq!(starts, [0, 1]);
    }

    #[test]
    fn tokenizer_fn_matches_mode() {
        let zh = ChineseLocale::with_segmenter(Chars);
        let legacy = (zh.tokenizer_fn(HostMode::Legacy))(Some("中文".into()));
        assert!(legacy.iter().all(|t| t.metadata().is_none()));
        let modern = (zh.tokenizer_fn(HostMode::Modern))(Some("中文".into()));
        assert!(modern.iter().all(|t| t.metadata().is_some()));
    }
}
