//! Commonly used types, for glob import.

pub use lattice_split_core::{ConnectionId, Signal};
pub use lattice_split_render::{Icon, Point, Rect, RecordingRenderer, Renderer, Size};
pub use lattice_split_style::Theme;

pub use crate::widget::widgets::{
    DraggerVisibility, Notification, SplitContainer, SplitContainerError, SplitGeometry,
    UpdateRequests,
};
pub use crate::widget::{
    ChildLayout, ContainerHost, CursorShape, LayoutDirection, LeaveEvent, MouseButton,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent, Orientation, PaneId, SizeFlags,
    WidgetEvent,
};
