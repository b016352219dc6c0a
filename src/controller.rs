//! The seam between gesture recognition and plot control.

use tracing::trace;

use crate::config::{ConfigError, GestureConfig};
use crate::event::{GestureEvent, TouchEventArgs};
use crate::recognizer::{PanZoomRecognizer, RecognizerState};
use crate::touch::{TouchBatch, TouchHandler};

/// Receiver of recognized touch gestures, typically a plot controller.
///
/// Each method returns whether the controller handled the event.
pub trait TouchController {
    /// A gesture started at a single point.
    fn handle_touch_started(&mut self, args: &TouchEventArgs) -> bool;

    /// The gesture panned and/or zoomed.
    fn handle_touch_delta(&mut self, args: &TouchEventArgs) -> bool;

    /// The gesture finished.
    fn handle_touch_completed(&mut self, args: &TouchEventArgs) -> bool;
}

impl<C: TouchController + ?Sized> TouchController for &mut C {
    fn handle_touch_started(&mut self, args: &TouchEventArgs) -> bool {
        (**self).handle_touch_started(args)
    }

    fn handle_touch_delta(&mut self, args: &TouchEventArgs) -> bool {
        (**self).handle_touch_delta(args)
    }

    fn handle_touch_completed(&mut self, args: &TouchEventArgs) -> bool {
        (**self).handle_touch_completed(args)
    }
}

/// Pairs a recognizer with the controller receiving its events.
///
/// Every event the recognizer emits is pushed to the controller as soon as
/// it is produced.
#[derive(Debug)]
pub struct GestureDispatcher<C> {
    recognizer: PanZoomRecognizer,
    controller: C,
}

impl<C: TouchController> GestureDispatcher<C> {
    /// Create a dispatcher using the plot-view recognizer settings.
    pub fn new(controller: C) -> Self {
        let mut recognizer = PanZoomRecognizer::new();
        *recognizer.config_mut() = GestureConfig::plot_view();
        Self {
            recognizer,
            controller,
        }
    }

    /// Create a dispatcher with a custom recognizer configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_config(controller: C, config: GestureConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            recognizer: PanZoomRecognizer::with_config(config)?,
            controller,
        })
    }

    /// Access the recognizer.
    pub fn recognizer(&self) -> &PanZoomRecognizer {
        &self.recognizer
    }

    /// Access the recognizer mutably, e.g. to change its configuration.
    pub fn recognizer_mut(&mut self) -> &mut PanZoomRecognizer {
        &mut self.recognizer
    }

    /// Current recognizer lifecycle state.
    pub fn state(&self) -> RecognizerState {
        self.recognizer.state()
    }

    /// Access the controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Access the controller mutably.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Consume the dispatcher and return the controller.
    pub fn into_controller(self) -> C {
        self.controller
    }

    fn forward(&mut self, event: Option<GestureEvent>) -> bool {
        let Some(event) = event else {
            return false;
        };
        let handled = event.dispatch(&mut self.controller);
        trace!(?event, handled, "gesture dispatched");
        handled
    }
}

impl<C: TouchController> TouchHandler for GestureDispatcher<C> {
    type Output = bool;

    fn touches_began<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> bool {
        let event = self.recognizer.touches_began(batch);
        self.forward(event)
    }

    fn touches_moved<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> bool {
        let event = self.recognizer.touches_moved(batch);
        self.forward(event)
    }

    fn touches_ended<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> bool {
        let event = self.recognizer.touches_ended(batch);
        self.forward(event)
    }

    fn touches_cancelled<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> bool {
        let event = self.recognizer.touches_cancelled(batch);
        self.forward(event)
    }
}
