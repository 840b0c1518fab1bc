use std::sync::Arc;

use kanal::AsyncSender;
use tokio::task::JoinHandle;
use torslate_types::{AppEvent, ErrorKind, JobId, Stage, TranslationResult};

use crate::capture::CaptureService;
use crate::pipeline::TranslationPipeline;
use crate::region::Region;

/// Run capture and translation for one job off the controller context,
/// then report the outcome as [`AppEvent::JobFinished`].
///
/// A panic inside the job is caught here and reported as a worker error.
pub fn spawn_job(
    id: JobId,
    region: Region,
    capture: CaptureService,
    pipeline: Arc<TranslationPipeline>,
    events: AsyncSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = match tokio::spawn(run_job(id, region, capture, pipeline)).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Job {} worker failed: {}", id, e);
                TranslationResult::failure(
                    None,
                    ErrorKind::Provider {
                        stage: Stage::Worker,
                        message: e.to_string(),
                    },
                )
            }
        };

        if let Err(e) = events.send(AppEvent::JobFinished { id, result }).await {
            tracing::warn!("Job {} finished after controller shut down: {}", id, e);
        }
    })
}

async fn run_job(
    id: JobId,
    region: Region,
    capture: CaptureService,
    pipeline: Arc<TranslationPipeline>,
) -> TranslationResult {
    let captured = tokio::task::spawn_blocking(move || capture.capture_job(id, &region)).await;

    let job = match captured {
        Ok(Ok(job)) => job,
        Ok(Err(e)) => {
            tracing::error!("Job {} capture failed: {}", id, e);
            return TranslationResult::failure(None, ErrorKind::Capture(e.to_string()));
        }
        Err(e) => {
            tracing::error!("Job {} capture task failed: {}", id, e);
            return TranslationResult::failure(
                None,
                ErrorKind::Provider {
                    stage: Stage::Capture,
                    message: e.to_string(),
                },
            );
        }
    };

    pipeline.run(job).await
}
