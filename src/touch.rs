//! Raw touch input as delivered by the host platform.
//!
//! Hosts translate their native touch callbacks into batches of [`Touch`]
//! samples and feed them to a [`TouchHandler`].

use crate::geom::ScreenPoint;

/// Opaque identity of a finger, stable for the lifetime of one touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// Phase of a touch within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The finger touched down.
    Began,
    /// The finger moved since the last batch.
    Moved,
    /// The finger is down but did not move.
    Stationary,
    /// The finger lifted.
    Ended,
    /// The platform cancelled the touch.
    Cancelled,
}

impl TouchPhase {
    /// Whether the phase ends the touch.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One touch sample in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Finger identity.
    pub id: TouchId,
    /// Current position.
    pub position: ScreenPoint,
    /// Position reported by the previous batch for this finger.
    pub previous: ScreenPoint,
    /// Phase in this batch.
    pub phase: TouchPhase,
}

impl Touch {
    /// Create a sample from all parts.
    pub fn new(id: TouchId, position: ScreenPoint, previous: ScreenPoint, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            previous,
            phase,
        }
    }

    /// A finger touching down at `position`.
    pub fn began(id: u64, position: ScreenPoint) -> Self {
        Self::new(TouchId(id), position, position, TouchPhase::Began)
    }

    /// A finger moving from `previous` to `position`.
    pub fn moved(id: u64, previous: ScreenPoint, position: ScreenPoint) -> Self {
        Self::new(TouchId(id), position, previous, TouchPhase::Moved)
    }

    /// A finger lifting at `position`.
    pub fn ended(id: u64, position: ScreenPoint) -> Self {
        Self::new(TouchId(id), position, position, TouchPhase::Ended)
    }

    /// A finger cancelled by the platform at `position`.
    pub fn cancelled(id: u64, position: ScreenPoint) -> Self {
        Self::new(TouchId(id), position, position, TouchPhase::Cancelled)
    }
}

/// A set of touches delivered together by the platform.
///
/// Iteration order is the platform's delivery order and decides which
/// touches are admitted when more fingers arrive than can be tracked.
pub trait TouchBatch {
    /// Iterate the samples in delivery order.
    fn touches(&self) -> impl Iterator<Item = Touch> + '_;
}

impl TouchBatch for [Touch] {
    fn touches(&self) -> impl Iterator<Item = Touch> + '_ {
        self.iter().copied()
    }
}

impl<const N: usize> TouchBatch for [Touch; N] {
    fn touches(&self) -> impl Iterator<Item = Touch> + '_ {
        self.iter().copied()
    }
}

impl TouchBatch for Vec<Touch> {
    fn touches(&self) -> impl Iterator<Item = Touch> + '_ {
        self.iter().copied()
    }
}

impl TouchBatch for Touch {
    fn touches(&self) -> impl Iterator<Item = Touch> + '_ {
        std::iter::once(*self)
    }
}

/// Receiver of the four platform touch callbacks.
pub trait TouchHandler {
    /// Value produced for each callback.
    type Output;

    /// New fingers touched down.
    fn touches_began<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output;

    /// Fingers moved.
    fn touches_moved<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output;

    /// Fingers lifted.
    fn touches_ended<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output;

    /// The platform cancelled fingers.
    fn touches_cancelled<B: TouchBatch + ?Sized>(&mut self, batch: &B) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_preserves_delivery_order() {
        let batch = [
            Touch::began(7, ScreenPoint::new(1.0, 1.0)),
            Touch::began(3, ScreenPoint::new(2.0, 2.0)),
        ];
        let ids: Vec<_> = batch.touches().map(|touch| touch.id).collect();
        assert_eq!(ids, vec![TouchId(7), TouchId(3)]);
    }

    #[test]
    fn terminal_phases() {
        assert!(TouchPhase::Ended.is_terminal());
        assert!(TouchPhase::Cancelled.is_terminal());
        assert!(!TouchPhase::Stationary.is_terminal());
    }
}
