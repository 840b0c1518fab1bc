//! Test doubles for the external collaborators

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use torslate_cloud::{
    CloudError, LanguageCode, ProviderMetadata, TextRecognizer, Translation, Translator,
};
use torslate_types::{PhysicalRect, Point, SelectionPurpose, SelectionRect, UiCommand, ViewMode};

use crate::capture::ScreenCapture;
use crate::controller::OverlayRenderer;
use crate::surface::SurfaceRenderer;

/// Scripted provider reply
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Fail(String),
    Slow(Duration, String),
    Panic,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Text(text.to_string())
    }

    async fn play(self) -> Result<String, CloudError> {
        match self {
            Reply::Text(text) => Ok(text),
            Reply::Fail(message) => Err(CloudError::ApiError(message)),
            Reply::Slow(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Reply::Panic => panic!("provider blew up"),
        }
    }
}

/// Replies are consumed in order; the last one repeats
struct Script {
    replies: Mutex<VecDeque<Reply>>,
}

impl Script {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    fn next(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap_or(Reply::Text(String::new()))
        }
    }
}

pub struct FakeScreen {
    pub calls: AtomicUsize,
    pub last_rect: Mutex<Option<PhysicalRect>>,
    fail: Option<String>,
}

impl FakeScreen {
    pub fn working() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_rect: Mutex::new(None),
            fail: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail: Some(message.to_string()),
            ..Self::working()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ScreenCapture for FakeScreen {
    fn capture(&self, rect: PhysicalRect) -> anyhow::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_rect.lock().unwrap() = Some(rect);
        match &self.fail {
            Some(message) => anyhow::bail!("{}", message),
            // the "image" encodes the captured width so fakes can tell jobs apart
            None => Ok(rect.width.to_le_bytes().to_vec()),
        }
    }
}

pub struct FakeOcr {
    script: Script,
    by_width: Vec<(u32, Reply)>,
    pub calls: AtomicUsize,
}

impl FakeOcr {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            script: Script::new(replies),
            by_width: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Reply chosen by the width of the rectangle [`FakeScreen`] captured
    pub fn by_width(replies: Vec<(u32, Reply)>) -> Self {
        Self {
            by_width: replies,
            ..Self::new(Vec::new())
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::new(vec![Reply::text(text)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextRecognizer for FakeOcr {
    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let width = <[u8; 4]>::try_from(image_bytes).map(u32::from_le_bytes).ok();
        let keyed = self
            .by_width
            .iter()
            .find(|(w, _)| Some(*w) == width)
            .map(|(_, reply)| reply.clone());

        keyed.unwrap_or_else(|| self.script.next()).play().await
    }
}

pub struct FakeTranslator {
    script: Script,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, LanguageCode, LanguageCode)>>,
}

impl FakeTranslator {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            script: Script::new(replies),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::new(vec![Reply::text(text)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), from.clone(), to.clone()));

        let text = self.script.next().play().await?;
        Ok(Translation {
            text,
            from,
            to,
            provider: "fake".to_string(),
        })
    }

    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, CloudError> {
        Ok("en".to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
        }
    }
}

/// Records every renderer call as the command the real UI would receive
pub struct RecordingUi {
    pub pointer: Point,
    pub commands: Mutex<Vec<UiCommand>>,
}

impl RecordingUi {
    pub fn new(pointer: Point) -> Self {
        Self {
            pointer,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<UiCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn last_surface(&self) -> Option<UiCommand> {
        self.commands()
            .into_iter()
            .rev()
            .find(|c| matches!(c, UiCommand::ShowSurface { .. } | UiCommand::UpdateSurface { .. }))
    }

    fn push(&self, command: UiCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl OverlayRenderer for RecordingUi {
    fn open_selection(&self, purpose: SelectionPurpose) {
        self.push(UiCommand::OpenSelection(purpose));
    }

    fn show_indicator(&self, rect: SelectionRect) {
        self.push(UiCommand::ShowIndicator(rect));
    }

    fn close_indicator(&self) {
        self.push(UiCommand::CloseIndicator);
    }
}

impl SurfaceRenderer for RecordingUi {
    fn pointer_position(&self) -> Option<Point> {
        Some(self.pointer)
    }

    fn show(&self, position: Point, text: &str, view: ViewMode) {
        self.push(UiCommand::ShowSurface {
            position,
            text: text.to_string(),
            view,
        });
    }

    fn update(&self, text: &str, view: ViewMode) {
        self.push(UiCommand::UpdateSurface {
            text: text.to_string(),
            view,
        });
    }

    fn hide(&self) {
        self.push(UiCommand::HideSurface);
    }
}
