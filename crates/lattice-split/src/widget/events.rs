//! Pointer events delivered to widgets.
//!
//! The host translates platform input into [`WidgetEvent`]s in the widget's
//! local coordinate space. A widget marks an event it consumed with
//! [`WidgetEvent::accept`]; unaccepted events continue to propagate.

use lattice_split_render::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Additional button 1 (e.g., browser back).
    Button4 = 3,
    /// Additional button 2 (e.g., browser forward).
    Button5 = 4,
}

impl MouseButton {
    /// The bit this button occupies in [`MouseMoveEvent::buttons`].
    #[inline]
    pub fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Mouse buttons currently held, one bit per [`MouseButton`].
    pub buttons: u8,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, buttons: u8) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            buttons,
        }
    }

    /// Check if a specific button is pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

/// Leave event, sent when the pointer leaves the widget.
#[derive(Debug, Clone, Copy)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

impl Default for LeaveEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// An event delivered to a widget.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Mouse button pressed.
    MousePress(MousePressEvent),
    /// Mouse button released.
    MouseRelease(MouseReleaseEvent),
    /// Pointer moved.
    MouseMove(MouseMoveEvent),
    /// Pointer left the widget.
    Leave(LeaveEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Leave(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// The pointer position carried by the event, if any.
    pub fn local_pos(&self) -> Option<Point> {
        match self {
            Self::MousePress(e) => Some(e.local_pos),
            Self::MouseRelease(e) => Some(e.local_pos),
            Self::MouseMove(e) => Some(e.local_pos),
            Self::Leave(_) => None,
        }
    }
}

impl From<MousePressEvent> for WidgetEvent {
    fn from(event: MousePressEvent) -> Self {
        Self::MousePress(event)
    }
}

impl From<MouseReleaseEvent> for WidgetEvent {
    fn from(event: MouseReleaseEvent) -> Self {
        Self::MouseRelease(event)
    }
}

impl From<MouseMoveEvent> for WidgetEvent {
    fn from(event: MouseMoveEvent) -> Self {
        Self::MouseMove(event)
    }
}

impl From<LeaveEvent> for WidgetEvent {
    fn from(event: LeaveEvent) -> Self {
        Self::Leave(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_ignore() {
        let mut event: WidgetEvent =
            MousePressEvent::new(MouseButton::Left, Point::new(1.0, 2.0)).into();
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_move_buttons() {
        let held = MouseButton::Left.mask() | MouseButton::Middle.mask();
        let event = MouseMoveEvent::new(Point::ZERO, held);
        assert!(event.is_button_pressed(MouseButton::Left));
        assert!(event.is_button_pressed(MouseButton::Middle));
        assert!(!event.is_button_pressed(MouseButton::Right));
    }

    #[test]
    fn test_local_pos() {
        let leave: WidgetEvent = LeaveEvent::new().into();
        assert_eq!(leave.local_pos(), None);

        let moved: WidgetEvent = MouseMoveEvent::new(Point::new(4.0, 5.0), 0).into();
        assert_eq!(moved.local_pos(), Some(Point::new(4.0, 5.0)));
    }
}
