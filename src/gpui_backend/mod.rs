//! GPUI integration for plot_gestures.
//!
//! This module provides a GPUI view that feeds left-button pointer drags
//! through the gesture recognizer as a single touch and applies the result to
//! a viewport.

mod pointer;
mod view;

pub use view::{GpuiGestureView, ViewportHandle};
