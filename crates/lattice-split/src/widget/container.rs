//! The interface between a container widget and whatever owns its children.
//!
//! A container never owns the panes it arranges. It identifies them by
//! [`PaneId`], reads their layout data through [`ContainerHost::child`], and
//! places them with [`ContainerHost::fit_child_in_rect`].

use lattice_split_render::{Point, Rect, Size};
use lattice_split_style::Theme;
use slotmap::new_key_type;

use super::cursor::CursorShape;
use super::geometry::{LayoutDirection, Orientation, SizeFlags};

new_key_type! {
    /// Identifies a child of a container.
    ///
    /// Hosts typically keep their children in a `SlotMap<PaneId, _>`, so a
    /// stale ID simply stops resolving instead of aliasing a new child.
    pub struct PaneId;
}

/// Layout-relevant state of one child.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildLayout {
    /// Hidden children take no part in layout.
    pub visible: bool,
    /// Top-level children are positioned independently of their container.
    pub top_level: bool,
    /// Combined minimum size.
    pub minimum_size: Size,
    /// Sizing behaviour along the x axis.
    pub size_flags_horizontal: SizeFlags,
    /// Sizing behaviour along the y axis.
    pub size_flags_vertical: SizeFlags,
    /// Relative weight when several children expand along the same axis.
    pub stretch_ratio: f32,
}

impl Default for ChildLayout {
    fn default() -> Self {
        Self {
            visible: true,
            top_level: false,
            minimum_size: Size::ZERO,
            size_flags_horizontal: SizeFlags::FILL,
            size_flags_vertical: SizeFlags::FILL,
            stretch_ratio: 1.0,
        }
    }
}

impl ChildLayout {
    /// A visible child with the given minimum size and default flags.
    pub fn new(minimum_size: Size) -> Self {
        Self {
            minimum_size,
            ..Self::default()
        }
    }

    /// Set visibility using builder pattern.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the top-level flag using builder pattern.
    pub fn with_top_level(mut self, top_level: bool) -> Self {
        self.top_level = top_level;
        self
    }

    /// Set both size flags using builder pattern.
    pub fn with_size_flags(mut self, horizontal: SizeFlags, vertical: SizeFlags) -> Self {
        self.size_flags_horizontal = horizontal;
        self.size_flags_vertical = vertical;
        self
    }

    /// Set the stretch ratio using builder pattern.
    pub fn with_stretch_ratio(mut self, ratio: f32) -> Self {
        self.stretch_ratio = ratio;
        self
    }

    /// The size flags for one axis.
    #[inline]
    pub fn size_flags(&self, orientation: Orientation) -> SizeFlags {
        match orientation {
            Orientation::Horizontal => self.size_flags_horizontal,
            Orientation::Vertical => self.size_flags_vertical,
        }
    }

    /// Whether this child takes part in its container's layout.
    #[inline]
    pub fn is_layout_eligible(&self) -> bool {
        self.visible && !self.top_level
    }
}

/// What a container needs from the widget tree it lives in.
///
/// All coordinates are local to the container.
pub trait ContainerHost {
    /// The container's current size.
    fn size(&self) -> Size;

    /// The container's children, in order.
    fn children(&self) -> &[PaneId];

    /// Layout data of a child, `None` if the ID no longer resolves.
    fn child(&self, id: PaneId) -> Option<&ChildLayout>;

    /// Place a child into a rectangle.
    fn fit_child_in_rect(&mut self, id: PaneId, rect: Rect);

    /// The container's layout direction.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::LeftToRight
    }

    /// The theme in effect for the container.
    fn theme(&self) -> &Theme;

    /// The cursor to show when the container has no opinion.
    fn default_cursor_shape(&self, _pos: Point) -> CursorShape {
        CursorShape::Arrow
    }
}
