//! Gesture snapshots emitted by the recognizer.

use crate::controller::TouchController;
use crate::geom::{ScreenPoint, ScreenVector};

/// Snapshot of a touch gesture at one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEventArgs {
    /// Position of the primary touch.
    pub position: ScreenPoint,
    /// Translation of the primary touch since the previous frame.
    pub delta_translation: ScreenVector,
    /// Per-axis scale since the previous frame. Components are never negative.
    pub delta_scale: ScreenVector,
}

impl TouchEventArgs {
    /// A single-point snapshot with no deltas.
    pub fn at(position: ScreenPoint) -> Self {
        Self {
            position,
            delta_translation: ScreenVector::ZERO,
            delta_scale: ScreenVector::ONE,
        }
    }

    /// A snapshot carrying pan and zoom deltas.
    pub fn with_deltas(
        position: ScreenPoint,
        delta_translation: ScreenVector,
        delta_scale: ScreenVector,
    ) -> Self {
        Self {
            position,
            delta_translation,
            delta_scale,
        }
    }

    /// Whether the snapshot carries neither translation nor scaling.
    pub fn is_identity(&self) -> bool {
        self.delta_translation == ScreenVector::ZERO && self.delta_scale == ScreenVector::ONE
    }
}

impl Default for TouchEventArgs {
    fn default() -> Self {
        Self::at(ScreenPoint::ORIGIN)
    }
}

/// A gesture transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The first finger touched down.
    Started(TouchEventArgs),
    /// Fingers moved.
    Delta(TouchEventArgs),
    /// The last finger lifted or was cancelled.
    Completed(TouchEventArgs),
}

impl GestureEvent {
    /// The snapshot carried by the event.
    pub fn args(&self) -> &TouchEventArgs {
        match self {
            Self::Started(args) | Self::Delta(args) | Self::Completed(args) => args,
        }
    }

    /// Forward the event to a controller. Returns whether it was handled.
    pub fn dispatch<C: TouchController + ?Sized>(&self, controller: &mut C) -> bool {
        match self {
            Self::Started(args) => controller.handle_touch_started(args),
            Self::Delta(args) => controller.handle_touch_delta(args),
            Self::Completed(args) => controller.handle_touch_completed(args),
        }
    }
}
