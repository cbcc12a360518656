//! Binding between a view-model line collection and a native ink surface.

use crate::draw::{Color, DrawingLine, Point};

use super::reconcile::{ViewError, reconcile};

/// Payload forwarded upward when a stroke finishes, mirroring the completed
/// line exactly.
#[derive(Debug, Clone)]
pub struct StrokeCompleted {
    pub line_color: Color,
    pub line_width: f64,
    pub enable_smoothed_path: bool,
    pub granularity: usize,
    pub points: Vec<Point>,
}

impl From<&DrawingLine> for StrokeCompleted {
    fn from(line: &DrawingLine) -> Self {
        Self {
            line_color: line.line_color,
            line_width: line.line_width,
            enable_smoothed_path: line.enable_smoothed_path,
            granularity: line.granularity,
            points: line.points.clone(),
        }
    }
}

/// Strategy interface for a native rendering backend.
///
/// One implementation per target surface, selected when the binding is
/// constructed. Property setters take effect immediately; the full line set
/// arrives through [`InkSurface::replace_lines`] on structural changes.
pub trait InkSurface {
    /// Called once when the binding connects to the surface.
    fn attach(&mut self);
    /// Called when the binding disconnects; the surface should release any
    /// input hooks it installed in `attach`.
    fn detach(&mut self);
    fn set_line_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_multi_line_mode(&mut self, enabled: bool);
    fn set_clear_on_finish(&mut self, enabled: bool);
    fn replace_lines(&mut self, lines: Vec<DrawingLine>);
}

type CompletedCallback = Box<dyn Fn(StrokeCompleted) + Send>;

/// Adapter that keeps an [`InkSurface`] synchronized with a view model.
///
/// Property updates are pushed through immediately; structural changes to the
/// line collection go through [`reconcile`], which enforces the multi-line
/// invariant before the surface sees anything.
pub struct DrawingViewBinding<S: InkSurface> {
    surface: S,
    native_lines: Vec<DrawingLine>,
    multi_line_mode: bool,
    on_stroke_completed: Option<CompletedCallback>,
}

impl<S: InkSurface> DrawingViewBinding<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            native_lines: Vec::new(),
            multi_line_mode: false,
            on_stroke_completed: None,
        }
    }

    /// Connects the binding to its surface.
    pub fn attach(&mut self) {
        self.surface.attach();
    }

    /// Disconnects the binding from its surface.
    pub fn detach(&mut self) {
        self.surface.detach();
    }

    /// Registers the callback invoked once per completed stroke.
    pub fn on_stroke_completed(&mut self, callback: impl Fn(StrokeCompleted) + Send + 'static) {
        self.on_stroke_completed = Some(Box::new(callback));
    }

    pub fn update_line_color(&mut self, color: Color) {
        self.surface.set_line_color(color);
    }

    pub fn update_line_width(&mut self, width: f64) {
        self.surface.set_line_width(width);
    }

    pub fn update_multi_line_mode(&mut self, enabled: bool) {
        self.multi_line_mode = enabled;
        self.surface.set_multi_line_mode(enabled);
    }

    pub fn update_clear_on_finish(&mut self, enabled: bool) {
        self.surface.set_clear_on_finish(enabled);
    }

    /// Pushes the full source line set to the surface.
    ///
    /// Call on any structural change (add/remove/replace/reset). On a
    /// multi-line violation neither the mirror nor the surface is updated.
    pub fn sync_lines(&mut self, source: &[DrawingLine]) -> Result<(), ViewError> {
        reconcile(&mut self.native_lines, source, self.multi_line_mode)?;
        self.surface.replace_lines(self.native_lines.clone());
        Ok(())
    }

    /// Forwards a finished stroke to the registered callback.
    ///
    /// The native surface calls this once per completed stroke (once per
    /// gesture when multi-line mode is off).
    pub fn complete_stroke(&self, line: &DrawingLine) {
        if let Some(callback) = &self.on_stroke_completed {
            callback(StrokeCompleted::from(line));
        }
    }

    /// The current mirror of the source collection.
    pub fn native_lines(&self) -> &[DrawingLine] {
        &self.native_lines
    }
}
