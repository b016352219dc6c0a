use crate::geom::ScreenPoint;
use crate::touch::Touch;

/// Touch id used for the mouse pointer.
pub(crate) const POINTER_TOUCH_ID: u64 = 0;

/// Turns left-button mouse input into a single touch.
#[derive(Debug, Clone, Default)]
pub(crate) struct MousePointer {
    pressed_at: Option<ScreenPoint>,
}

impl MousePointer {
    pub(crate) fn press(&mut self, position: ScreenPoint) -> Touch {
        self.pressed_at = Some(position);
        Touch::began(POINTER_TOUCH_ID, position)
    }

    pub(crate) fn drag(&mut self, position: ScreenPoint) -> Option<Touch> {
        let last = self.pressed_at.as_mut()?;
        if *last == position {
            return None;
        }
        let previous = std::mem::replace(last, position);
        Some(Touch::moved(POINTER_TOUCH_ID, previous, position))
    }

    pub(crate) fn release(&mut self, position: ScreenPoint) -> Option<Touch> {
        self.pressed_at.take()?;
        Some(Touch::ended(POINTER_TOUCH_ID, position))
    }
}
