//! 2.x host shape.

use locale_zh_types::HostMode;

use crate::host::{split_on_separators, tokenizer_fn, Host, TokenizerFn};
use crate::pipeline::{FunctionRegistry, Pipeline};

/// Index session of a 2.x host: a single tokenizer field.
pub struct ModernHost {
    version: String,
    stemmer_support: bool,
    pipeline: Pipeline,
    registry: FunctionRegistry,
    tokenizer: TokenizerFn,
}

impl ModernHost {
    /// Creates a session with stemmer support loaded and the stock tokenizer.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            stemmer_support: true,
            pipeline: Pipeline::new(),
            registry: FunctionRegistry::new(),
            tokenizer: tokenizer_fn(|input| split_on_separators(input, HostMode::Modern)),
        }
    }

    /// Marks the stemmer support extension as not loaded.
    #[must_use]
    pub fn without_stemmer_support(mut self) -> Self {
        self.stemmer_support = false;
        self
    }
}

impl Default for ModernHost {
    fn default() -> Self {
        Self::new("2.3.9")
    }
}

impl Host for ModernHost {
    fn version(&self) -> &str {
        &self.version
    }

    fn has_stemmer_support(&self) -> bool {
        self.stemmer_support
    }

    fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.registry
    }

    fn set_tokenizer(&mut self, tokenizer: TokenizerFn) {
        self.tokenizer = tokenizer;
    }

    fn tokenizer(&self) -> &TokenizerFn {
        &self.tokenizer
    }
}

impl core::fmt::Debug for ModernHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModernHost")
            .field("version", &self.version)
            .field("stemmer_support", &self.stemmer_support)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
