//! Text analysis stages for Chinese.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Segments field text into positioned tokens
//! - **Trimmer**: Strips non-word characters from token edges
//! - **Stop words**: Drops high-frequency function words
//! - **Stemmer**: Identity, keeps the three-stage pipeline shape

pub mod stemmer;
pub mod stop_words;
pub mod tokenizer;
pub mod trimmer;

pub use stemmer::stem;
pub use stop_words::{StopWordFilter, CHINESE_STOP_WORDS};
pub use tokenizer::{ChineseTokenizer, OffsetStrategy};
pub use trimmer::{Trimmer, CHINESE_WORD_CHARACTERS};
