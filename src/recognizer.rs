//! Two-finger pan/zoom gesture recognition.
//!
//! [`PanZoomRecognizer`] tracks at most two touches. The first admitted touch
//! drives panning; once a second touch joins, the change in distance between
//! the two drives zooming. Touches keep their index until they end, so the
//! finger that went down first pans until it lifts.

use tracing::{debug, trace};

use crate::config::{ConfigError, GestureConfig};
use crate::event::{GestureEvent, TouchEventArgs};
use crate::geom::{ScreenPoint, ScreenVector};
use crate::touch::{Touch, TouchBatch, TouchHandler, TouchId, TouchPhase};

const MAX_TOUCHES: usize = 2;

/// Lifecycle of a recognized gesture, as reported to gesture dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognizerState {
    /// No gesture has been recognized yet.
    #[default]
    Possible,
    /// The first finger touched down.
    Began,
    /// The gesture produced a pan/zoom delta.
    Changed,
    /// All fingers lifted.
    Ended,
    /// The platform cancelled the remaining fingers.
    Cancelled,
    /// Touches ended without a gesture having begun.
    Failed,
}

impl RecognizerState {
    /// Whether the gesture is in progress.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrackedTouch {
    id: TouchId,
    position: ScreenPoint,
    previous: ScreenPoint,
    phase: TouchPhase,
}

impl TrackedTouch {
    fn admit(touch: Touch) -> Self {
        Self {
            id: touch.id,
            position: touch.position,
            previous: touch.position,
            phase: TouchPhase::Began,
        }
    }

    fn update(&mut self, touch: Touch) {
        self.position = touch.position;
        self.previous = touch.previous;
        self.phase = touch.phase;
    }

    /// Mark a touch missing from a move batch as resting in place.
    fn settle(&mut self) {
        self.previous = self.position;
        if !self.phase.is_terminal() {
            self.phase = TouchPhase::Stationary;
        }
    }

    /// Position at the previous frame. Touches that did not move this frame
    /// contribute no motion of their own.
    fn previous_position(&self) -> ScreenPoint {
        if self.phase == TouchPhase::Moved {
            self.previous
        } else {
            self.position
        }
    }
}

/// Converts multi-touch sequences into pan/zoom gesture events.
#[derive(Debug, Clone)]
pub struct PanZoomRecognizer {
    config: GestureConfig,
    active: Vec<TrackedTouch>,
    starting_distance: ScreenVector,
    state: RecognizerState,
}

impl Default for PanZoomRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanZoomRecognizer {
    /// Create a recognizer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: GestureConfig::default(),
            active: Vec::with_capacity(MAX_TOUCHES),
            starting_distance: ScreenVector::ZERO,
            state: RecognizerState::Possible,
        }
    }

    /// Create a recognizer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Access the configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Access the configuration mutably.
    ///
    /// Values are not validated; a negative threshold behaves like zero.
    pub fn config_mut(&mut self) -> &mut GestureConfig {
        &mut self.config
    }

    /// Replace the configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] and keeps the previous configuration if the
    /// new one fails validation.
    pub fn set_config(&mut self, config: GestureConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RecognizerState {
        self.state
    }

    /// Number of tracked touches (0, 1 or 2).
    pub fn active_touch_count(&self) -> usize {
        self.active.len()
    }

    /// Tracked touch ids in index order.
    pub fn tracked_ids(&self) -> impl Iterator<Item = TouchId> + '_ {
        self.active.iter().map(|touch| touch.id)
    }

    /// The touch driving the pan, if any.
    pub fn primary_touch(&self) -> Option<TouchId> {
        self.active.first().map(|touch| touch.id)
    }

    /// Finger distance captured when the second touch joined.
    pub fn starting_distance(&self) -> Option<ScreenVector> {
        (self.active.len() == MAX_TOUCHES).then_some(self.starting_distance)
    }

    /// Drop all tracked touches without emitting an event.
    pub fn reset(&mut self) {
        self.active.clear();
        self.starting_distance = ScreenVector::ZERO;
        self.state = RecognizerState::Possible;
    }

    fn find_mut(&mut self, id: TouchId) -> Option<&mut TrackedTouch> {
        self.active.iter_mut().find(|touch| touch.id == id)
    }

    fn is_tracked(&self, id: TouchId) -> bool {
        self.active.iter().any(|touch| touch.id == id)
    }

    fn refresh_starting_distance(&mut self) {
        self.starting_distance = match self.active.as_slice() {
            [first, second] => first.position - second.position,
            _ => ScreenVector::ZERO,
        };
    }

    fn begin<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Option<GestureEvent> {
        if self.active.len() >= MAX_TOUCHES {
            trace!("already tracking two touches, ignoring new touches");
            return None;
        }

        let was_idle = self.active.is_empty();
        for touch in batch.touches() {
            if self.active.len() >= MAX_TOUCHES {
                trace!(touch_id = touch.id.0, "touch limit reached, dropping touch");
                continue;
            }
            if self.is_tracked(touch.id) {
                trace!(touch_id = touch.id.0, "duplicate touch began, ignoring");
                continue;
            }
            self.active.push(TrackedTouch::admit(touch));
            debug!(
                touch_id = touch.id.0,
                tracked = self.active.len(),
                "touch admitted"
            );
        }
        self.refresh_starting_distance();

        if !was_idle {
            return None;
        }
        let first = self.active.first()?;
        self.state = RecognizerState::Began;
        debug!(x = first.position.x, y = first.position.y, "gesture started");
        Some(GestureEvent::Started(TouchEventArgs::at(first.position)))
    }

    fn track_moves<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Option<GestureEvent> {
        if self.active.is_empty() {
            trace!("move without tracked touches, ignoring");
            return None;
        }

        let moved: Vec<Touch> = batch.touches().collect();
        for tracked in &mut self.active {
            match moved.iter().find(|touch| touch.id == tracked.id) {
                Some(touch) => tracked.update(*touch),
                None => tracked.settle(),
            }
        }

        if !self
            .active
            .iter()
            .any(|touch| touch.phase == TouchPhase::Moved)
        {
            return None;
        }

        let primary = self.active[0];
        let translation = primary.position - primary.previous_position();
        let scale = match self.active.get(1) {
            Some(secondary) => self.pinch_scale(&primary, secondary),
            None => ScreenVector::ONE,
        };

        self.state = RecognizerState::Changed;
        trace!(
            dx = translation.x,
            dy = translation.y,
            scale_x = scale.x,
            scale_y = scale.y,
            "gesture changed"
        );
        Some(GestureEvent::Delta(TouchEventArgs::with_deltas(
            primary.position,
            translation,
            scale,
        )))
    }

    fn pinch_scale(&self, primary: &TrackedTouch, secondary: &TrackedTouch) -> ScreenVector {
        let current = primary.position - secondary.position;
        let previous = primary.previous_position() - secondary.previous_position();

        if self.config.keep_aspect_ratio_when_pinching {
            let previous_length = previous.length();
            if previous_length == 0.0 {
                return ScreenVector::ONE;
            }
            return ScreenVector::splat(current.length() / previous_length);
        }

        let current = if self.config.allow_pinch_past_zero {
            current
        } else {
            suppress_crossing(current, self.starting_distance)
        };
        let threshold = self.config.zoom_threshold.max(0.0);
        ScreenVector::new(
            axis_scale(current.x, previous.x, threshold),
            axis_scale(current.y, previous.y, threshold),
        )
    }

    fn release<B: TouchBatch + ?Sized>(
        &mut self,
        batch: &B,
        terminal: TouchPhase,
    ) -> Option<GestureEvent> {
        if self.active.is_empty() {
            if self.state == RecognizerState::Possible {
                self.state = RecognizerState::Failed;
            }
            trace!(?terminal, "release without tracked touches, ignoring");
            return None;
        }

        for touch in batch.touches() {
            if let Some(tracked) = self.find_mut(touch.id) {
                tracked.update(touch);
            }
        }

        if self.active.get(1).is_some_and(|touch| touch.phase == terminal) {
            let released = self.active.remove(1);
            debug!(touch_id = released.id.0, ?terminal, "secondary touch released");
        }

        let mut event = None;
        if self.active.first().is_some_and(|touch| touch.phase == terminal) {
            let released = self.active.remove(0);
            debug!(touch_id = released.id.0, ?terminal, "primary touch released");
            if self.active.is_empty() {
                self.state = if terminal == TouchPhase::Cancelled {
                    RecognizerState::Cancelled
                } else {
                    RecognizerState::Ended
                };
                debug!(
                    x = released.position.x,
                    y = released.position.y,
                    state = ?self.state,
                    "gesture completed"
                );
                event = Some(GestureEvent::Completed(TouchEventArgs::at(
                    released.position,
                )));
            }
        }

        if self.active.len() < MAX_TOUCHES {
            self.starting_distance = ScreenVector::ZERO;
        }
        event
    }
}

impl TouchHandler for PanZoomRecognizer {
    type Output = Option<GestureEvent>;

    fn touches_began<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output {
        self.begin(batch)
    }

    fn touches_moved<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output {
        self.track_moves(batch)
    }

    fn touches_ended<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output {
        self.release(batch, TouchPhase::Ended)
    }

    fn touches_cancelled<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output {
        self.release(batch, TouchPhase::Cancelled)
    }
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Zero each axis whose finger distance has flipped sign since touch-down.
fn suppress_crossing(current: ScreenVector, starting: ScreenVector) -> ScreenVector {
    let x = if sign(current.x) == sign(starting.x) {
        current.x
    } else {
        0.0
    };
    let y = if sign(current.y) == sign(starting.y) {
        current.y
    } else {
        0.0
    };
    ScreenVector::new(x, y)
}

fn axis_scale(current: f64, previous: f64, threshold: f64) -> f64 {
    if previous.abs() > threshold && current.abs() > threshold {
        (current / previous).abs()
    } else {
        1.0
    }
}
