//! Widget layer for Lattice Split.
//!
//! This module provides the pieces a container widget needs to cooperate
//! with its host:
//!
//! - Pointer events ([`WidgetEvent`] and the per-kind event structs)
//! - Cursor shape hints ([`CursorShape`])
//! - Orientation, layout direction and size flags
//! - The [`ContainerHost`] trait through which a container reads and places
//!   its children
//!
//! The widgets themselves live in [`widgets`].

mod container;
mod cursor;
mod events;
mod geometry;
pub mod widgets;

pub use container::{ChildLayout, ContainerHost, PaneId};
pub use cursor::CursorShape;
pub use events::{
    EventBase, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
pub use geometry::{LayoutDirection, Orientation, SizeFlags};
