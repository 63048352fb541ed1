//! Chinese locale for full-text search hosts.
//!
//! Adds a search-mode tokenizer and three pipeline stages to a host's index
//! session:
//!
//! ```text
//! field text → tokenizer (jieba, search mode) → trimmer → stop words → stemmer → index
//! ```
//!
//! - [`analyzer`]: the tokenizer and the stages themselves
//! - [`segmenter`]: the word segmentation seam and its jieba implementation
//! - [`pipeline`]: ordered stages plus the label registry used on reload
//! - [`host`]: the capability interface of 2.x and 0.x/1.x hosts
//! - [`locale`]: [`ChineseLocale`] and [`install`]

pub mod analyzer;
pub mod host;
pub mod locale;
pub mod pipeline;
pub mod segmenter;

pub use locale::{install, ChineseLocale, LocaleConfig};
pub use locale_zh_types::{
    parse_version, FieldValue, HostMode, InstallError, LocaleError, PipelineError, Position,
    SerializedPipeline, Token, TokenMetadata,
};
