//! Coordinate transforms between data and view space.

use crate::geom::{Point, ScreenPoint, ScreenRect, ScreenVector};
use crate::view::Viewport;

/// Linear mapping between a viewport and the view rectangle showing it.
///
/// Screen Y grows downward while data Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    screen: ScreenRect,
}

impl Transform {
    /// Create a transform, or `None` if either side is degenerate.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Option<Self> {
        if !screen.is_valid() || !viewport.is_valid() {
            return None;
        }
        Some(Self { viewport, screen })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the screen rectangle.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Map a data point into view space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        let x_norm = (point.x - self.viewport.x.min) / self.viewport.x.span();
        let y_norm = (point.y - self.viewport.y.min) / self.viewport.y.span();
        ScreenPoint::new(
            self.screen.min.x + x_norm * self.screen.width(),
            self.screen.max.y - y_norm * self.screen.height(),
        )
    }

    /// Map a view point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        let x_norm = (point.x - self.screen.min.x) / self.screen.width();
        let y_norm = (self.screen.max.y - point.y) / self.screen.height();
        Point::new(
            self.viewport.x.min + x_norm * self.viewport.x.span(),
            self.viewport.y.min + y_norm * self.viewport.y.span(),
        )
    }

    /// Convert a view-space displacement into data units per axis.
    pub fn screen_delta_to_data(&self, delta: ScreenVector) -> (f64, f64) {
        (
            delta.x * self.viewport.x.span() / self.screen.width(),
            -delta.y * self.viewport.y.span() / self.screen.height(),
        )
    }
}
