//! Pipeline types.

use std::fmt;
use std::sync::Arc;

use locale_zh_types::Token;
use smallvec::SmallVec;

/// Signature of a pipeline stage. `None` drops the token.
pub type StageFn = dyn Fn(Token) -> Option<Token> + Send + Sync;

/// A labelled pipeline stage.
///
/// The label is what gets persisted with an index and looked up in the
/// [`FunctionRegistry`](super::FunctionRegistry) on reload.
#[derive(Clone)]
pub struct PipelineFunction {
    label: Arc<str>,
    func: Arc<StageFn>,
}

impl PipelineFunction {
    /// Wraps a closure under `label`.
    pub fn new<F>(label: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(Token) -> Option<Token> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// Stage label.
    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the stage on one token.
    #[inline(always)]
    pub fn apply(&self, token: Token) -> Option<Token> {
        (self.func)(token)
    }

    /// Returns `true` if both handles point at the same closure.
    #[inline]
    pub fn same_as(&self, other: &PipelineFunction) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for PipelineFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PipelineFunction").field(&self.label).finish()
    }
}

/// Ordered token stages applied after tokenization.
///
/// Hosts own one per index session. Stages run in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub(crate) stages: SmallVec<[PipelineFunction; 4]>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stage.
    pub fn reset(&mut self) {
        self.stages.clear();
    }

    /// Appends a stage.
    pub fn add(&mut self, stage: PipelineFunction) {
        self.stages.push(stage);
    }

    /// Appends stages in order.
    pub fn extend<I>(&mut self, stages: I)
    where
        I: IntoIterator<Item = PipelineFunction>,
    {
        self.stages.extend(stages);
    }

    /// Removes every stage labelled `label`. Returns `true` if any was removed.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.stages.len();
        self.stages.retain(|s| s.label() != label);
        self.stages.len() != before
    }

    /// Number of stages.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if there are no stages.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(PipelineFunction::label)
    }

    /// Stages in order.
    pub fn stages(&self) -> &[PipelineFunction] {
        &self.stages
    }
}
