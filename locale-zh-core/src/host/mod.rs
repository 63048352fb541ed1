//! Search host integration.
//!
//! The locale never owns an index. It configures a host through the [`Host`]
//! capability interface: a pipeline to reset and extend, a registry to
//! register stages in, and a tokenizer slot to swap.
//!
//! Two host shapes exist:
//! - [`ModernHost`] (2.x): one tokenizer field, tokens carry metadata
//! - [`LegacyHost`] (0.x/1.x): a library-scope tokenizer slot and, from 0.7
//!   on, an instance slot; tokens are bare

mod legacy;
mod modern;

pub use legacy::LegacyHost;
pub use modern::ModernHost;

use std::sync::Arc;

use locale_zh_types::{FieldValue, HostMode, Position, Token, TokenMetadata};

use crate::pipeline::{FunctionRegistry, Pipeline};

/// A swappable tokenizer.
pub type TokenizerFn = Arc<dyn Fn(Option<FieldValue<'_>>) -> Vec<Token> + Send + Sync>;

/// Boxes a closure as a [`TokenizerFn`].
pub fn tokenizer_fn<F>(f: F) -> TokenizerFn
where
    F: Fn(Option<FieldValue<'_>>) -> Vec<Token> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// What a search host exposes to locale installers.
pub trait Host {
    /// Version identifier, e.g. `"2.3.9"`.
    fn version(&self) -> &str;

    /// Whether the stemmer support extension is loaded.
    fn has_stemmer_support(&self) -> bool;

    /// The active pipeline.
    fn pipeline(&self) -> &Pipeline;

    /// The active pipeline, mutably.
    fn pipeline_mut(&mut self) -> &mut Pipeline;

    /// The function registry.
    fn registry(&self) -> &FunctionRegistry;

    /// The function registry, mutably.
    fn registry_mut(&mut self) -> &mut FunctionRegistry;

    /// Replaces the tokenizer in every slot this host has.
    fn set_tokenizer(&mut self, tokenizer: TokenizerFn);

    /// The tokenizer used for indexing.
    fn tokenizer(&self) -> &TokenizerFn;

    /// Mode derived from [`version`](Host::version).
    fn mode(&self) -> HostMode {
        HostMode::from_version(self.version())
    }

    /// Tokenizes a field and runs the result through the pipeline.
    fn analyze(&self, input: Option<FieldValue<'_>>) -> Vec<Token> {
        let tokens = (self.tokenizer())(input);
        self.pipeline().run(tokens)
    }
}

/// The host's stock tokenizer: lower-cases and splits on whitespace and `-`.
///
/// Modern hosts get `(position, index)` metadata in chars of the input.
pub fn split_on_separators(input: Option<FieldValue<'_>>, mode: HostMode) -> Vec<Token> {
    let text = match input {
        None => return Vec::new(),
        Some(FieldValue::Terms(terms)) => {
            return terms
                .iter()
                .map(|term| mode.wrap_token(term.to_lowercase(), None))
                .collect();
        }
        Some(FieldValue::Text(text)) => text.to_lowercase(),
    };

    let mut out = Vec::new();
    let mut slice_start: Option<(usize, u32)> = None;
    let mut char_pos = 0u32;

    let flush = |start: usize, start_char: u32, end: usize, end_char: u32, out: &mut Vec<Token>| {
        let metadata = TokenMetadata {
            position: Some(Position::new(start_char, end_char - start_char)),
            index: u32::try_from(out.len()).unwrap_or(u32::MAX),
        };
        out.push(mode.wrap_token(&text[start..end], Some(metadata)));
    };

    for (byte, c) in text.char_indices() {
        let is_separator = c.is_whitespace() || c == '-';
        match (is_separator, slice_start) {
            (true, Some((start, start_char))) => {
                flush(start, start_char, byte, char_pos, &mut out);
                slice_start = None;
            }
            (false, None) => slice_start = Some((byte, char_pos)),
            _ => {}
        }
        char_pos += 1;
    }

    if let Some((start, start_char)) = slice_start {
        flush(start, start_char, text.len(), char_pos, &mut out);
    }

    out
}
