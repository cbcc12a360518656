use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cairo::{Antialias, ImageSurface};
use tokio::time::{Duration, sleep};

use crate::draw::{BLUE, Color, DrawingLine, Point, RED, WHITE};

use super::{
    backend::RasterBackend,
    manager::RasterManager,
    pipeline::{raster_to_surface, render_lines, render_points},
    surface::RasterContext,
    types::{ImageSize, ImageStream, RasterError, RasterJob, RasterOutcome, RasterStatus},
};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn exact_ctx() -> RasterContext {
    RasterContext::with_antialias(Antialias::None)
}

fn diagonal_line(color: Color, points: &[(f64, f64)]) -> DrawingLine {
    DrawingLine::new(color, 4.0).with_points(points.iter().map(|&p| Point::from(p)).collect())
}

fn pixel_at(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().expect("exclusive surface data access");
    let i = y * stride + x * 4;
    // ARGB32 on little-endian lays bytes out as B, G, R, A
    (data[i + 2], data[i + 1], data[i], data[i + 3])
}

#[test]
fn render_points_rejects_short_input_without_allocating() {
    let ctx = exact_ctx();
    let size = ImageSize::new(100.0, 100.0);

    let stream = render_points(&ctx, &[], size, 2.0, RED, WHITE).unwrap();
    assert!(stream.is_empty());

    let one = [Point::new(5.0, 5.0)];
    let stream = render_points(&ctx, &one, size, 2.0, RED, WHITE).unwrap();
    assert!(stream.is_empty());
}

#[test]
fn render_lines_returns_sentinel_for_empty_point_sets() {
    let ctx = exact_ctx();
    let size = ImageSize::default();

    let stream = render_lines(&ctx, &[], size, WHITE).unwrap();
    assert!(stream.is_empty());

    let empty_lines = vec![DrawingLine::new(RED, 2.0), DrawingLine::new(BLUE, 2.0)];
    let stream = render_lines(&ctx, &empty_lines, size, WHITE).unwrap();
    assert!(stream.is_empty());
}

#[test]
fn degenerate_extent_returns_sentinel() {
    let ctx = exact_ctx();
    let size = ImageSize::default();

    // Perfectly horizontal stroke: no vertical extent
    let flat = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let stream = render_points(&ctx, &flat, size, 2.0, RED, WHITE).unwrap();
    assert!(stream.is_empty());
}

#[test]
fn encoded_stream_is_png() {
    let ctx = exact_ctx();
    let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    let stream = render_points(&ctx, &points, ImageSize::default(), 2.0, RED, WHITE).unwrap();

    assert!(!stream.is_empty());
    assert_eq!(&stream.as_bytes()[0..8], &PNG_SIGNATURE);
}

#[test]
fn surface_is_sized_to_content_ceiling() {
    let ctx = exact_ctx();
    let line = diagonal_line(RED, &[(0.0, 0.0), (10.2, 4.1)]);
    let surface = raster_to_surface(&ctx, &[line], WHITE).unwrap().unwrap();

    assert_eq!(surface.width(), 11);
    assert_eq!(surface.height(), 5);
}

#[test]
fn stroke_and_background_pixels_have_expected_colors() {
    let ctx = exact_ctx();
    let line = diagonal_line(RED, &[(0.0, 0.0), (20.0, 20.0)]);
    let mut surface = raster_to_surface(&ctx, &[line], WHITE).unwrap().unwrap();

    // On the stroke path
    assert_eq!(pixel_at(&mut surface, 10, 10), (255, 0, 0, 255));
    // Far from the stroke
    assert_eq!(pixel_at(&mut surface, 17, 3), (255, 255, 255, 255));
}

#[test]
fn later_lines_paint_over_earlier_ones() {
    let ctx = exact_ctx();
    let red = diagonal_line(RED, &[(0.0, 0.0), (20.0, 20.0)]);
    let blue = diagonal_line(BLUE, &[(0.0, 20.0), (20.0, 0.0)]);
    let mut surface = raster_to_surface(&ctx, &[red, blue], WHITE)
        .unwrap()
        .unwrap();

    // Both strokes cross the center; the blue one was painted last.
    assert_eq!(pixel_at(&mut surface, 10, 10), (0, 0, 255, 255));
}

#[test]
fn output_is_invariant_under_translation() {
    let ctx = exact_ctx();
    let size = ImageSize::default();
    let base = diagonal_line(RED, &[(0.0, 0.0), (12.0, 7.0), (3.0, 9.0)]);
    let shifted = DrawingLine {
        points: base.points.iter().map(|p| p.translate(100.0, 50.0)).collect(),
        ..base.clone()
    };

    let a = render_lines(&ctx, std::slice::from_ref(&base), size, WHITE).unwrap();
    let b = render_lines(&ctx, std::slice::from_ref(&shifted), size, WHITE).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn repeated_renders_are_byte_identical() {
    let ctx = exact_ctx();
    let size = ImageSize::default();
    let lines = vec![
        diagonal_line(RED, &[(0.0, 0.0), (15.0, 6.0)]),
        diagonal_line(BLUE, &[(2.0, 8.0), (14.0, 1.0)]).with_smoothing(8),
    ];

    let a = render_lines(&ctx, &lines, size, WHITE).unwrap();
    let b = render_lines(&ctx, &lines, size, WHITE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn smoothed_line_renders_non_empty_stream() {
    let ctx = RasterContext::new();
    let line = DrawingLine::new(RED, 3.0)
        .with_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 8.0),
            Point::new(20.0, 2.0),
        ])
        .with_smoothing(10);

    let stream = render_lines(&ctx, &[line], ImageSize::default(), WHITE).unwrap();
    assert!(!stream.is_empty());
}

// ----------------------------------------------------------------------------
// Manager tests (mock backend)
// ----------------------------------------------------------------------------

#[derive(Clone)]
struct MockBackend {
    bytes: Vec<u8>,
    fail_with: Arc<Mutex<Option<String>>>,
    jobs: Arc<Mutex<usize>>,
}

impl MockBackend {
    fn succeeding(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            fail_with: Arc::new(Mutex::new(None)),
            jobs: Arc::new(Mutex::new(0)),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            bytes: Vec::new(),
            fail_with: Arc::new(Mutex::new(Some(message.to_string()))),
            jobs: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl RasterBackend for MockBackend {
    async fn render(&self, _job: RasterJob) -> Result<ImageStream, RasterError> {
        *self.jobs.lock().unwrap() += 1;
        if let Some(message) = self.fail_with.lock().unwrap().take() {
            Err(RasterError::Encode(message))
        } else {
            Ok(ImageStream::from_bytes(self.bytes.clone()))
        }
    }
}

fn points_job() -> RasterJob {
    RasterJob::Points {
        points: vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        image_size: ImageSize::default(),
        line_width: 2.0,
        stroke_color: RED,
        background: WHITE,
    }
}

async fn wait_for_outcome(manager: &RasterManager) -> Option<RasterOutcome> {
    for _ in 0..10 {
        if let Some(result) = manager.try_take_result() {
            return Some(result);
        }
        sleep(Duration::from_millis(20)).await;
    }
    None
}

#[tokio::test]
async fn manager_starts_idle() {
    let manager = RasterManager::new(&tokio::runtime::Handle::current());
    assert_eq!(manager.status().await, RasterStatus::Idle);
}

#[tokio::test]
async fn manager_delivers_successful_result() {
    let backend = MockBackend::succeeding(vec![1, 2, 3]);
    let jobs = backend.jobs.clone();
    let manager = RasterManager::with_backend(&tokio::runtime::Handle::current(), backend);

    manager.request_render(points_job()).unwrap();

    match wait_for_outcome(&manager).await {
        Some(RasterOutcome::Success(stream)) => {
            assert_eq!(stream.as_bytes(), &[1, 2, 3]);
        }
        other => panic!("expected success outcome, got {other:?}"),
    }
    assert_eq!(*jobs.lock().unwrap(), 1);
    assert_eq!(manager.status().await, RasterStatus::Success);
}

#[tokio::test]
async fn manager_records_failure_status() {
    let backend = MockBackend::failing("encoder exploded");
    let manager = RasterManager::with_backend(&tokio::runtime::Handle::current(), backend);

    manager.request_render(points_job()).unwrap();

    match wait_for_outcome(&manager).await {
        Some(RasterOutcome::Failed(message)) => {
            assert!(message.contains("encoder exploded"), "got: {message}");
        }
        other => panic!("expected failure outcome, got {other:?}"),
    }
    assert!(matches!(manager.status().await, RasterStatus::Failed(_)));

    manager.reset().await;
    assert_eq!(manager.status().await, RasterStatus::Idle);
}

#[tokio::test]
async fn manager_renders_real_pipeline_end_to_end() {
    let manager = RasterManager::new(&tokio::runtime::Handle::current());

    manager.request_render(points_job()).unwrap();

    match wait_for_outcome(&manager).await {
        Some(RasterOutcome::Success(stream)) => {
            assert!(!stream.is_empty());
            assert_eq!(&stream.as_bytes()[0..8], &PNG_SIGNATURE);
        }
        other => panic!("expected success outcome, got {other:?}"),
    }
}

#[test]
fn request_render_errors_when_channel_closed() {
    let manager = RasterManager::with_closed_channel_for_test();
    let err = manager
        .request_render(points_job())
        .expect_err("should fail when channel closed");
    assert!(matches!(err, RasterError::ManagerStopped));
}
