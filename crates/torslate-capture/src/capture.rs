use anyhow::{Context, Result};
use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png::PngEncoder, imageops};
use torslate_core::ScreenCapture;
use torslate_types::PhysicalRect;
use xcap::Monitor;

/// Screen capture backed by `xcap`
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapCapture;

impl XcapCapture {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenCapture for XcapCapture {
    fn capture(&self, rect: PhysicalRect) -> Result<Vec<u8>> {
        capture_screen_region(rect)
    }
}

/// Monitor bounds as `(x, y, width, height)`
type Bounds = (i32, i32, u32, u32);

fn monitor_bounds(monitor: &Monitor) -> Bounds {
    (monitor.x(), monitor.y(), monitor.width(), monitor.height())
}

fn contains(bounds: Bounds, rect: PhysicalRect) -> bool {
    let (x, y, width, height) = bounds;
    rect.x >= x
        && rect.y >= y
        && rect.x + rect.width as i32 <= x + width as i32
        && rect.y + rect.height as i32 <= y + height as i32
}

/// Index of the monitor to capture `rect` from: the one containing it,
/// else the primary one, else the first
fn pick_monitor(monitors: &[(Bounds, bool)], rect: PhysicalRect) -> Option<usize> {
    if let Some(index) = monitors.iter().position(|(b, _)| contains(*b, rect)) {
        return Some(index);
    }

    tracing::warn!("Region {:?} spans monitors, using the primary one", rect);
    monitors
        .iter()
        .position(|(_, primary)| *primary)
        .or_else(|| (!monitors.is_empty()).then_some(0))
}

/// Capture a region of the screen as PNG
fn capture_screen_region(rect: PhysicalRect) -> Result<Vec<u8>> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let layout: Vec<(Bounds, bool)> = monitors
        .iter()
        .map(|m| (monitor_bounds(m), m.is_primary()))
        .collect();

    let index = pick_monitor(&layout, rect).context("No monitor found")?;
    let monitor = &monitors[index];
    let bounds = layout[index].0;

    let image = monitor.capture_image().context("Failed to capture screen")?;
    let cropped = crop_to_monitor(&image, bounds, rect)?;
    encode_png(&cropped)
}

/// Crop a monitor image to the part of `rect` it covers
fn crop_to_monitor(image: &RgbaImage, bounds: Bounds, rect: PhysicalRect) -> Result<RgbaImage> {
    let (mx, my, _, _) = bounds;
    let left = (rect.x - mx).max(0) as u32;
    let top = (rect.y - my).max(0) as u32;
    let width = rect.width.min(image.width().saturating_sub(left));
    let height = rect.height.min(image.height().saturating_sub(top));

    anyhow::ensure!(
        width > 0 && height > 0,
        "Region {:?} lies outside the captured monitor",
        rect
    );

    Ok(imageops::crop_imm(image, left, top, width, height).to_image())
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(buffer)
}
