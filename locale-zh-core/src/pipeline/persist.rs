//! Saving and reloading pipelines by label.

use locale_zh_types::{PipelineError, SerializedPipeline};

use crate::pipeline::registry::FunctionRegistry;
use crate::pipeline::types::Pipeline;

impl Pipeline {
    /// Captures the stage labels for persistence.
    ///
    /// Stages missing from `registry` are still written, with a warning,
    /// since the index could not be reloaded without them.
    pub fn serialize(&self, registry: &FunctionRegistry) -> SerializedPipeline {
        for label in self.labels() {
            if !registry.contains(label) {
                tracing::warn!(label, "pipeline function is not registered; the index will not reload");
            }
        }
        SerializedPipeline(self.labels().map(str::to_owned).collect())
    }

    /// Rebuilds a pipeline from persisted labels.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnregisteredFunction`] for the first label
    /// the registry does not know.
    pub fn load(
        serialized: &SerializedPipeline,
        registry: &FunctionRegistry,
    ) -> Result<Self, PipelineError> {
        let mut pipeline = Pipeline::new();
        for label in serialized.labels() {
            let stage = registry
                .get(label)
                .ok_or_else(|| PipelineError::UnregisteredFunction {
                    label: label.to_owned(),
                })?;
            pipeline.add(stage.clone());
        }
        Ok(pipeline)
    }
}
