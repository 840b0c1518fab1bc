use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use torslate_cloud::Translator;
use torslate_config::Config;
use torslate_core::{CaptureJob, LanguagePair, TranslationPipeline};
use torslate_types::{JobId, TranslationResult};

use crate::profile::ProfileStore;
use crate::providers;

/// `torslate translate <text> [--detect]`
pub async fn translate(config: &Config, text: &str, detect: bool) -> anyhow::Result<()> {
    let translator = Arc::new(providers::translator(config));
    let recognizer = Arc::new(providers::recognizer(config));

    let mut languages = LanguagePair::new(
        config.translator.source_lang.clone(),
        config.translator.target_lang.clone(),
    );
    if detect {
        languages.source = translator
            .detect_language(text)
            .await
            .context("Language detection failed")?;
        println!("detected:   {}", languages.source);
    }

    let pipeline = TranslationPipeline::new(
        recognizer,
        translator,
        languages,
        config.pipeline.stage_timeout(),
    );
    tracing::debug!(
        "Translating {} -> {}",
        pipeline.languages().source,
        pipeline.languages().target
    );

    let result = pipeline.translate_text(text.trim()).await;
    report(&result)
}

/// `torslate image <path>`
pub async fn image(config: &Config, path: &Path) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let pipeline = TranslationPipeline::from_config(
        config,
        Arc::new(providers::recognizer(config)),
        Arc::new(providers::translator(config)),
    );

    let result = pipeline.run(CaptureJob::new(JobId(1), bytes)).await;
    report(&result)
}

/// `torslate new-profile <name>`
pub fn new_profile(store: &ProfileStore, name: &str) -> anyhow::Result<()> {
    let path = store.add_from_main(name)?;
    println!("{}", path.display());
    Ok(())
}

fn report(result: &TranslationResult) -> anyhow::Result<()> {
    print!("{}", format_result(result));
    match &result.error {
        Some(error) => Err(anyhow::anyhow!("{}", error)),
        None => Ok(()),
    }
}

pub fn format_result(result: &TranslationResult) -> String {
    let mut out = String::new();
    if let Some(original) = &result.original {
        out.push_str(&format!("original:   {}\n", original));
    }
    if let Some(translated) = &result.translated {
        out.push_str(&format!("translated: {}\n", translated));
    }
    out
}
