//! Installing the locale into a host.

use locale_zh_types::{HostMode, InstallError};

use crate::host::Host;
use crate::locale::ChineseLocale;
use crate::segmenter::Segmenter;

/// Configures `host` for Chinese.
///
/// Registers the three stages, resets the pipeline to
/// trimmer → stop-word filter → stemmer, and swaps in the Chinese tokenizer.
/// Running it again leaves the same single set of stages.
///
/// # Errors
///
/// - [`InstallError::HostMissing`] if `host` is `None`
/// - [`InstallError::StemmerSupportMissing`] if the host lacks stemmer support
///
/// Both are checked before anything is mutated.
pub fn install<H, S>(host: Option<&mut H>, locale: &ChineseLocale<S>) -> Result<HostMode, InstallError>
where
    H: Host + ?Sized,
    S: Segmenter + Clone + 'static,
{
    let host = host.ok_or(InstallError::HostMissing)?;
    if !host.has_stemmer_support() {
        return Err(InstallError::StemmerSupportMissing);
    }

    let mode = host.mode();
    let stages = locale.stages();

    let registry = host.registry_mut();
    for stage in &stages {
        registry.register(stage.clone());
    }

    let pipeline = host.pipeline_mut();
    pipeline.reset();
    pipeline.extend(stages);

    host.set_tokenizer(locale.tokenizer_fn(mode));

    tracing::debug!(version = host.version(), %mode, "installed zh locale");
    Ok(mode)
}
