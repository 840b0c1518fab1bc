use std::sync::Arc;
use std::time::Duration;

use torslate_types::{ErrorKind, JobId, Stage, TranslationResult};

use super::fakes::{FakeOcr, FakeTranslator, Reply};
use crate::capture::CaptureJob;
use crate::pipeline::{LanguagePair, TranslationPipeline};

fn pipeline(
    ocr: &Arc<FakeOcr>,
    translator: &Arc<FakeTranslator>,
    stage_timeout: Duration,
) -> TranslationPipeline {
    TranslationPipeline::new(
        ocr.clone(),
        translator.clone(),
        LanguagePair::default(),
        stage_timeout,
    )
}

fn job() -> CaptureJob {
    CaptureJob::new(JobId(1), vec![1, 2, 3])
}

#[tokio::test]
async fn ocr_then_translation() {
    let ocr = Arc::new(FakeOcr::returning("Hello world"));
    let translator = Arc::new(FakeTranslator::returning("สวัสดีโลก"));

    let result = pipeline(&ocr, &translator, Duration::from_secs(5))
        .run(job())
        .await;

    assert_eq!(result, TranslationResult::success("Hello world", "สวัสดีโลก"));
    assert_eq!(
        translator.requests.lock().unwrap()[0],
        ("Hello world".to_string(), "en".to_string(), "th".to_string())
    );
}

#[tokio::test]
async fn empty_ocr_skips_translation() {
    for text in ["", "  \n\t "] {
        let ocr = Arc::new(FakeOcr::returning(text));
        let translator = Arc::new(FakeTranslator::returning("unused"));

        let result = pipeline(&ocr, &translator, Duration::from_secs(5))
            .run(job())
            .await;

        assert_eq!(result.error, Some(ErrorKind::NoTextFound));
        assert_eq!(result.original, None);
        assert_eq!(translator.calls(), 0);
    }
}

#[tokio::test]
async fn translation_failure_keeps_original() {
    let ocr = Arc::new(FakeOcr::returning("Hello world"));
    let translator = Arc::new(FakeTranslator::new(vec![Reply::Fail(
        "quota exceeded".to_string(),
    )]));

    let result = pipeline(&ocr, &translator, Duration::from_secs(5))
        .run(job())
        .await;

    assert_eq!(result.original.as_deref(), Some("Hello world"));
    assert_eq!(result.translated, None);
    assert!(matches!(
        result.error,
        Some(ErrorKind::Provider {
            stage: Stage::Translation,
            ..
        })
    ));
    assert_eq!(translator.calls(), 1);
}

#[tokio::test]
async fn ocr_failure_is_terminal() {
    let ocr = Arc::new(FakeOcr::new(vec![Reply::Fail("unauthenticated".to_string())]));
    let translator = Arc::new(FakeTranslator::returning("unused"));

    let result = pipeline(&ocr, &translator, Duration::from_secs(5))
        .run(job())
        .await;

    assert_eq!(result.original, None);
    assert_eq!(
        result.error,
        Some(ErrorKind::Provider {
            stage: Stage::Ocr,
            message: "API error: unauthenticated".to_string(),
        })
    );
    assert_eq!(ocr.calls(), 1);
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn slow_ocr_times_out() {
    let ocr = Arc::new(FakeOcr::new(vec![Reply::Slow(
        Duration::from_secs(30),
        "late".to_string(),
    )]));
    let translator = Arc::new(FakeTranslator::returning("unused"));

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        pipeline(&ocr, &translator, Duration::from_millis(50)).run(job()),
    )
    .await
    .expect("pipeline should give up on its own");

    assert_eq!(
        result.error,
        Some(ErrorKind::Timeout {
            stage: Stage::Ocr,
            millis: 50,
        })
    );
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn slow_translation_times_out_with_original() {
    let ocr = Arc::new(FakeOcr::returning("Hello"));
    let translator = Arc::new(FakeTranslator::new(vec![Reply::Slow(
        Duration::from_secs(30),
        "late".to_string(),
    )]));

    let result = pipeline(&ocr, &translator, Duration::from_millis(50))
        .run(job())
        .await;

    assert_eq!(result.original.as_deref(), Some("Hello"));
    assert!(matches!(
        result.error,
        Some(ErrorKind::Timeout {
            stage: Stage::Translation,
            ..
        })
    ));
}

#[tokio::test]
async fn ocr_text_is_trimmed() {
    let ocr = Arc::new(FakeOcr::returning("\n  Hello world \n"));
    let translator = Arc::new(FakeTranslator::returning("สวัสดีโลก"));

    let result = pipeline(&ocr, &translator, Duration::from_secs(5))
        .run(job())
        .await;

    assert_eq!(result.original.as_deref(), Some("Hello world"));
}

#[tokio::test]
async fn manual_text_uses_configured_languages() {
    let ocr = Arc::new(FakeOcr::returning("unused"));
    let translator = Arc::new(FakeTranslator::returning("こんにちは"));
    let pipeline = TranslationPipeline::new(
        ocr.clone(),
        translator.clone(),
        LanguagePair::new("en", "ja"),
        Duration::from_secs(5),
    );

    let result = pipeline.translate_text("Hello").await;

    assert_eq!(result, TranslationResult::success("Hello", "こんにちは"));
    assert_eq!(ocr.calls(), 0);
    let requests = translator.requests.lock().unwrap();
    assert_eq!(requests[0].1, "en");
    assert_eq!(requests[0].2, "ja");
}
