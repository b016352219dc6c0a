use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    Bounds, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window,
    canvas, div,
};

use tracing::warn;

use crate::config::{ConfigError, GestureConfig};
use crate::controller::GestureDispatcher;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::ViewportManipulator;
use crate::touch::{Touch, TouchHandler};
use crate::view::Viewport;

use super::pointer::MousePointer;

type SharedDispatcher = Arc<RwLock<GestureDispatcher<ViewportManipulator>>>;

/// A GPUI view that turns pointer drags into pan gestures on a viewport.
///
/// The view paints nothing itself; place it over the content it controls and
/// read the viewport back through a [`ViewportHandle`].
#[derive(Clone)]
pub struct GpuiGestureView {
    dispatcher: SharedDispatcher,
    pointer: MousePointer,
}

impl GpuiGestureView {
    /// Create a view manipulating `viewport` with plot-view gesture settings.
    pub fn new(viewport: Viewport) -> Self {
        let manipulator = ViewportManipulator::new(viewport, empty_rect());
        Self {
            dispatcher: Arc::new(RwLock::new(GestureDispatcher::new(manipulator))),
            pointer: MousePointer::default(),
        }
    }

    /// Create a view with a custom gesture configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_config(viewport: Viewport, config: GestureConfig) -> Result<Self, ConfigError> {
        let manipulator = ViewportManipulator::new(viewport, empty_rect());
        let dispatcher = GestureDispatcher::with_config(manipulator, config)?;
        Ok(Self {
            dispatcher: Arc::new(RwLock::new(dispatcher)),
            pointer: MousePointer::default(),
        })
    }

    /// Get a handle for reading or replacing the viewport.
    pub fn viewport_handle(&self) -> ViewportHandle {
        ViewportHandle {
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }

    fn deliver(
        &self,
        touch: Touch,
        cx: &mut Context<Self>,
        phase: fn(&mut GestureDispatcher<ViewportManipulator>, &Touch) -> bool,
    ) {
        let handled = match self.dispatcher.write() {
            Ok(mut dispatcher) => phase(&mut dispatcher, &touch),
            Err(_) => {
                warn!(touch_id = touch.id.0, "gesture state lock poisoned, dropping touch");
                false
            }
        };
        if handled {
            cx.notify();
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let touch = self.pointer.press(screen_point(ev.position));
        self.deliver(touch, cx, |dispatcher, touch| dispatcher.touches_began(touch));
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        if let Some(touch) = self.pointer.drag(screen_point(ev.position)) {
            self.deliver(touch, cx, |dispatcher, touch| dispatcher.touches_moved(touch));
        }
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        if let Some(touch) = self.pointer.release(screen_point(ev.position)) {
            self.deliver(touch, cx, |dispatcher, touch| dispatcher.touches_ended(touch));
        }
    }
}

impl Render for GpuiGestureView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dispatcher = Arc::clone(&self.dispatcher);

        div()
            .size_full()
            .child(
                canvas(
                    move |bounds, _, _| {
                        if let Ok(mut dispatcher) = dispatcher.write() {
                            dispatcher.controller_mut().set_screen(screen_rect(bounds));
                        }
                    },
                    |_, _, _, _| {},
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle to the viewport driven by a `GpuiGestureView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct ViewportHandle {
    dispatcher: SharedDispatcher,
}

impl ViewportHandle {
    /// The current viewport, or `None` if the view state is poisoned.
    pub fn viewport(&self) -> Option<Viewport> {
        let dispatcher = self.dispatcher.read().ok()?;
        Some(dispatcher.controller().viewport())
    }

    /// Replace the viewport. Returns `false` if the view state is poisoned.
    pub fn set_viewport(&self, viewport: Viewport) -> bool {
        match self.dispatcher.write() {
            Ok(mut dispatcher) => {
                dispatcher.controller_mut().set_viewport(viewport);
                true
            }
            Err(_) => {
                warn!("gesture state lock poisoned, viewport not replaced");
                false
            }
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_gesture_active(&self) -> bool {
        self.dispatcher
            .read()
            .is_ok_and(|dispatcher| dispatcher.state().is_active())
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f64::from(f32::from(point.x)), f64::from(f32::from(point.y)))
}

fn screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    let x = f64::from(f32::from(bounds.origin.x));
    let y = f64::from(f32::from(bounds.origin.y));
    let width = f64::from(f32::from(bounds.size.width));
    let height = f64::from(f32::from(bounds.size.height));
    ScreenRect::new(ScreenPoint::new(x, y), ScreenPoint::new(x + width, y + height))
}

fn empty_rect() -> ScreenRect {
    ScreenRect::new(ScreenPoint::ORIGIN, ScreenPoint::ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    #[test]
    fn poisoned_state_is_reported_not_panicked() {
        let view = GpuiGestureView::new(Viewport::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0)));
        let handle = view.viewport_handle();
        assert!(handle.viewport().is_some());

        let dispatcher = Arc::clone(&view.dispatcher);
        let _ = std::thread::spawn(move || {
            let _guard = dispatcher.write().expect("fresh lock");
            panic!("poison the gesture state");
        })
        .join();

        assert!(handle.viewport().is_none());
        assert!(!handle.set_viewport(Viewport::new(Range::new(0.0, 2.0), Range::new(0.0, 2.0))));
        assert!(!handle.is_gesture_active());
    }
}
