//! 0.x/1.x host shape.
//!
//! 0.6 hosts only have a library-scope tokenizer. From 0.7 on an instance
//! slot exists as well and is the one used for indexing; the library slot
//! stays around for callers that tokenize directly.

use locale_zh_types::{parse_version, HostMode};

use crate::host::{split_on_separators, tokenizer_fn, Host, TokenizerFn};
use crate::pipeline::{FunctionRegistry, Pipeline};

/// Index session of a 0.x/1.x host.
pub struct LegacyHost {
    version: String,
    stemmer_support: bool,
    pipeline: Pipeline,
    registry: FunctionRegistry,
    library_tokenizer: TokenizerFn,
    instance_tokenizer: Option<TokenizerFn>,
}

impl LegacyHost {
    /// Creates a session whose slots match `version`.
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        let stock = tokenizer_fn(|input| split_on_separators(input, HostMode::Legacy));
        let instance_tokenizer = has_instance_slot(&version).then(|| stock.clone());

        Self {
            version,
            stemmer_support: true,
            pipeline: Pipeline::new(),
            registry: FunctionRegistry::new(),
            library_tokenizer: stock,
            instance_tokenizer,
        }
    }

    /// Marks the stemmer support extension as not loaded.
    #[must_use]
    pub fn without_stemmer_support(mut self) -> Self {
        self.stemmer_support = false;
        self
    }

    /// The library-scope tokenizer.
    pub fn library_tokenizer(&self) -> &TokenizerFn {
        &self.library_tokenizer
    }

    /// The instance tokenizer, if this version has one.
    pub fn instance_tokenizer(&self) -> Option<&TokenizerFn> {
        self.instance_tokenizer.as_ref()
    }
}

impl Default for LegacyHost {
    fn default() -> Self {
        Self::new("1.0.0")
    }
}

/// Instance tokenizers appeared in 0.7.
fn has_instance_slot(version: &str) -> bool {
    matches!(parse_version(version), Some((major, minor)) if major >= 1 || minor >= 7)
}

impl Host for LegacyHost {
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
        if let Some(slot) = self.instance_tokenizer.as_mut() {
            *slot = tokenizer.clone();
        }
        self.library_tokenizer = tokenizer;
    }

    fn tokenizer(&self) -> &TokenizerFn {
        self.instance_tokenizer
            .as_ref()
            .unwrap_or(&self.library_tokenizer)
    }
}

impl core::fmt::Debug for LegacyHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LegacyHost")
            .field("version", &self.version)
            .field("stemmer_support", &self.stemmer_support)
            .field("instance_slot", &self.instance_tokenizer.is_some())
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn instance_slot_by_version() {
        assert!(!has_instance_slot("0.6.0"));
        assert!(!has_instance_slot("0.5.12"));
        assert!(has_instance_slot("0.7.0"));
        assert!(has_instance_slot("0.7.2"));
        assert!(has_instance_slot("1.0.0"));
        assert!(has_instance_slot("v0.10.1"));
        assert!(!has_instance_slot(""));
    }

    #[test]
    fn set_tokenizer_replaces_every_slot() {
        let mut host = LegacyHost::new("0.7.2");
        let custom = tokenizer_fn(|_| Vec::new());
        host.set_tokenizer(custom.clone());

        assert!(Arc::ptr_eq(host.library_tokenizer(), &custom));
        assert!(Arc::ptr_eq(host.instance_tokenizer().unwrap(), &custom));
        assert!(Arc::ptr_eq(host.tokenizer(), &custom));
    }

    #[test]
    fn v06_uses_library_slot() {
        let mut host = LegacyHost::new("0.6.0");
        assert!(host.instance_tokenizer().is_none());

        let custom = tokenizer_fn(|_| Vec::new());
        host.set_tokenizer(custom.clone());
        assert!(Arc::ptr_eq(host.tokenizer(), &custom));
    }

    #[test]
    fn stock_tokens_are_bare() {
        let host = LegacyHost::default();
        let out = host.analyze(Some("Hello World".into()));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|t| t.metadata().is_none()));
    }
}
