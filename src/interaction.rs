//! Applying recognized gestures to a viewport.
//!
//! [`ViewportManipulator`] is a ready-made [`TouchController`] for hosts that
//! keep their visible ranges in a [`Viewport`].

use tracing::{debug, trace};

use crate::controller::TouchController;
use crate::event::TouchEventArgs;
use crate::geom::{Point, ScreenPoint, ScreenRect, ScreenVector};
use crate::transform::Transform;
use crate::view::Viewport;

const MIN_SPAN: f64 = 1e-12;
const MIN_ZOOM_FACTOR: f64 = 0.1;
const MAX_ZOOM_FACTOR: f64 = 10.0;

/// Pan a viewport by a view-space delta so content follows the finger.
pub(crate) fn pan_viewport(
    viewport: Viewport,
    delta: ScreenVector,
    transform: &Transform,
) -> Viewport {
    let (dx, dy) = transform.screen_delta_to_data(delta);
    Viewport::new(viewport.x.shifted(-dx), viewport.y.shifted(-dy))
}

/// Zoom a viewport around a center point. Factors below one zoom in.
pub(crate) fn zoom_viewport(
    viewport: Viewport,
    center: Point,
    factor_x: f64,
    factor_y: f64,
) -> Viewport {
    Viewport::new(
        viewport.x.scaled_about(center.x, factor_x),
        viewport.y.scaled_about(center.y, factor_y),
    )
    .with_min_span(MIN_SPAN)
}

/// Convert a pinch scale into a range factor. Spreading fingers (scale above
/// one) narrows the visible range.
pub(crate) fn zoom_factor_from_scale(scale: f64) -> f64 {
    if !scale.is_finite() || scale <= 0.0 {
        return 1.0;
    }
    (1.0 / scale).clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
}

/// Applies pan/zoom gestures to a viewport shown in a view rectangle.
#[derive(Debug, Clone)]
pub struct ViewportManipulator {
    viewport: Viewport,
    screen: ScreenRect,
    last_position: Option<ScreenPoint>,
}

impl ViewportManipulator {
    /// Create a manipulator for `viewport` displayed inside `screen`.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Self {
        Self {
            viewport,
            screen,
            last_position: None,
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport, e.g. after the host resets the view.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// View rectangle showing the viewport.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Update the view rectangle after a layout change.
    pub fn set_screen(&mut self, screen: ScreenRect) {
        self.screen = screen;
    }

    /// Whether a gesture is being applied.
    pub fn is_active(&self) -> bool {
        self.last_position.is_some()
    }

    /// Position of the primary touch at the last handled event.
    pub fn last_position(&self) -> Option<ScreenPoint> {
        self.last_position
    }

    fn transform(&self) -> Option<Transform> {
        Transform::new(self.viewport, self.screen)
    }
}

impl TouchController for ViewportManipulator {
    fn handle_touch_started(&mut self, args: &TouchEventArgs) -> bool {
        if self.transform().is_none() {
            trace!("degenerate viewport or view, ignoring touch");
            return false;
        }
        self.last_position = Some(args.position);
        debug!(x = args.position.x, y = args.position.y, "viewport gesture started");
        true
    }

    fn handle_touch_delta(&mut self, args: &TouchEventArgs) -> bool {
        let Some(transform) = self.transform() else {
            return false;
        };

        let mut next = pan_viewport(self.viewport, args.delta_translation, &transform);

        let factor_x = zoom_factor_from_scale(args.delta_scale.x);
        let factor_y = zoom_factor_from_scale(args.delta_scale.y);
        if factor_x != 1.0 || factor_y != 1.0 {
            if let Some(panned) = Transform::new(next, self.screen) {
                let center = panned.screen_to_data(args.position);
                next = zoom_viewport(next, center, factor_x, factor_y);
            }
        }

        if !next.is_valid() {
            trace!("gesture produced invalid viewport, ignoring");
            return false;
        }
        self.viewport = next;
        self.last_position = Some(args.position);
        true
    }

    fn handle_touch_completed(&mut self, args: &TouchEventArgs) -> bool {
        let was_active = self.last_position.take().is_some();
        debug!(x = args.position.x, y = args.position.y, "viewport gesture completed");
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    fn manipulator() -> ViewportManipulator {
        ViewportManipulator::new(
            Viewport::new(Range::new(0.0, 10.0), Range::new(0.0, 10.0)),
            ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0)),
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pan_follows_finger() {
        let mut manipulator = manipulator();
        let position = ScreenPoint::new(50.0, 50.0);
        assert!(manipulator.handle_touch_started(&TouchEventArgs::at(position)));
        let args = TouchEventArgs::with_deltas(
            position,
            ScreenVector::new(10.0, 20.0),
            ScreenVector::ONE,
        );
        assert!(manipulator.handle_touch_delta(&args));
        assert_eq!(manipulator.last_position(), Some(position));
        let viewport = manipulator.viewport();
        assert!(approx(viewport.x.min, -1.0));
        assert!(approx(viewport.x.max, 9.0));
        assert!(approx(viewport.y.min, 2.0));
        assert!(approx(viewport.y.max, 12.0));
    }

    #[test]
    fn spreading_fingers_zooms_in_around_touch() {
        let mut manipulator = manipulator();
        let position = ScreenPoint::new(20.0, 50.0);
        let args = TouchEventArgs::with_deltas(position, ScreenVector::ZERO, ScreenVector::splat(2.0));
        assert!(manipulator.handle_touch_delta(&args));
        let viewport = manipulator.viewport();
        assert!(approx(viewport.x.min, 1.0));
        assert!(approx(viewport.x.max, 6.0));
        assert!(approx(viewport.y.span(), 5.0));
    }

    #[test]
    fn zoom_factor_is_clamped() {
        assert_eq!(zoom_factor_from_scale(1000.0), MIN_ZOOM_FACTOR);
        assert_eq!(zoom_factor_from_scale(0.0), 1.0);
        assert_eq!(zoom_factor_from_scale(f64::NAN), 1.0);
        assert_eq!(zoom_factor_from_scale(0.5), 2.0);
    }

    #[test]
    fn completion_clears_active_gesture() {
        let mut manipulator = manipulator();
        let args = TouchEventArgs::at(ScreenPoint::new(1.0, 1.0));
        assert!(!manipulator.handle_touch_completed(&args));
        manipulator.handle_touch_started(&args);
        assert!(manipulator.is_active());
        assert!(manipulator.handle_touch_completed(&args));
        assert!(!manipulator.is_active());
        assert_eq!(manipulator.last_position(), None);
    }

    #[test]
    fn degenerate_view_ignores_gestures() {
        let mut manipulator = manipulator();
        manipulator.set_screen(ScreenRect::new(ScreenPoint::ORIGIN, ScreenPoint::ORIGIN));
        assert!(!manipulator.handle_touch_started(&TouchEventArgs::at(ScreenPoint::ORIGIN)));
    }
}
