//! Named function registry.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::pipeline::types::PipelineFunction;

/// Label → stage lookup used to persist and reload pipelines.
///
/// Owned by the host session rather than shared globally. Labels are unique:
/// registering an existing label replaces its entry.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<Arc<str>, PipelineFunction>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `func` under its label.
    ///
    /// Returns `true` if the label was new.
    pub fn register(&mut self, func: PipelineFunction) -> bool {
        let label: Arc<str> = Arc::from(func.label());
        match self.functions.insert(label, func) {
            Some(previous) => {
                tracing::debug!(label = previous.label(), "replaced registered pipeline function");
                false
            }
            None => true,
        }
    }

    /// Looks up a stage by label.
    #[inline]
    pub fn get(&self, label: &str) -> Option<&PipelineFunction> {
        self.functions.get(label)
    }

    /// Returns `true` if `label` is registered.
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.functions.contains_key(label)
    }

    /// Number of registered labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered labels, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(|k| &**k)
    }
}
