//! plot_gestures turns raw multi-touch input into pan/zoom gestures for
//! interactive plots.
//!
//! Feed platform touch batches into a [`PanZoomRecognizer`] (or a
//! [`GestureDispatcher`] wrapping one) through the [`TouchHandler`] trait and
//! apply the resulting [`GestureEvent`]s with a [`TouchController`] such as
//! [`ViewportManipulator`].

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod event;
pub mod geom;
pub mod interaction;
pub mod recognizer;
pub mod touch;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use config::{ConfigError, DEFAULT_ZOOM_THRESHOLD, GestureConfig};
pub use controller::{GestureDispatcher, TouchController};
pub use event::{GestureEvent, TouchEventArgs};
pub use geom::{Point, ScreenPoint, ScreenRect, ScreenVector};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiGestureView, ViewportHandle};
pub use interaction::ViewportManipulator;
pub use recognizer::{PanZoomRecognizer, RecognizerState};
pub use touch::{Touch, TouchBatch, TouchHandler, TouchId, TouchPhase};
pub use transform::Transform;
pub use view::{Range, Viewport};
