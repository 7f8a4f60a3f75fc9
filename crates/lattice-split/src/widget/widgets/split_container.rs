//! Split container widget implementation.
//!
//! This module provides [`SplitContainer`], a container that arranges its
//! first two eligible children side by side (or stacked) with a draggable
//! divider between them.
//!
//! # Layout
//!
//! The divider's leading edge, the *middle separation*, is derived from the
//! container size, the panes' minimum sizes, their expand flags and stretch
//! ratios, and a user-adjustable *split offset*. It is always clamped so
//! both panes keep at least their minimum size; see [`SplitGeometry`].
//!
//! # Example
//!
//! ```ignore
//! use lattice_split::prelude::*;
//!
//! let mut split = SplitContainer::vsplit().with_split_offset(-40);
//! split.dragged.connect(|offset| println!("offset is now {offset}"));
//!
//! split.notification(&mut host, Notification::ChildrenChanged);
//! split.notification(&mut host, Notification::SortChildren);
//! ```

use std::mem;

use lattice_split_core::Signal;
use lattice_split_core::logging::{PerfSpan, span_names, targets};
use lattice_split_render::{Icon, Point, Rect, Renderer, Size};
use lattice_split_style::{Theme, names};

use crate::widget::{
    ChildLayout, ContainerHost, CursorShape, MouseButton, MouseMoveEvent, MousePressEvent,
    Orientation, PaneId, SizeFlags, WidgetEvent,
};

/// Errors reported by [`SplitContainer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitContainerError {
    /// The container's orientation is fixed at construction.
    #[error("Can't change orientation of {class}.")]
    FixedOrientation { class: &'static str },
}

/// How the divider is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DraggerVisibility {
    /// Drawn and draggable.
    #[default]
    Visible,
    /// Neither drawn nor draggable, but its gap is still reserved.
    Hidden,
    /// No gap is reserved; the panes touch.
    HiddenCollapsed,
}

/// Container lifecycle notifications a host forwards to the split container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Run a layout pass now.
    SortChildren,
    /// Children were added, removed, reordered, shown or hidden.
    ChildrenChanged,
    /// The theme in effect changed.
    ThemeChanged,
    /// The layout direction changed.
    LayoutDirectionChanged,
    /// The UI language changed.
    TranslationChanged,
    /// The pointer left the container.
    MouseExit,
}

/// Work the container wants its host to schedule.
///
/// Requests accumulate until drained with
/// [`SplitContainer::take_update_requests`]. Coalescing repeated requests
/// into one pass per frame is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct UpdateRequests {
    /// A layout pass ([`Notification::SortChildren`]) is needed.
    pub sort: bool,
    /// The container needs repainting.
    pub redraw: bool,
    /// The container's minimum size may have changed.
    pub minimum_size: bool,
}

impl UpdateRequests {
    /// Whether nothing was requested.
    pub fn is_empty(&self) -> bool {
        !(self.sort || self.redraw || self.minimum_size)
    }
}

/// The inputs of a divider position computation, measured along the split
/// axis in whole pixels.
///
/// Kept separate from [`SplitContainer`] so the clamping rules can be
/// reasoned about (and tested) without a host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitGeometry {
    /// Container extent.
    pub available: i32,
    /// Minimum extent of the first pane.
    pub first_minimum: i32,
    /// Minimum extent of the second pane.
    pub second_minimum: i32,
    /// Whether the first pane expands along the split axis.
    pub first_expands: bool,
    /// Whether the second pane expands along the split axis.
    pub second_expands: bool,
    /// Stretch ratio of the first pane.
    pub first_stretch: f32,
    /// Stretch ratio of the second pane.
    pub second_stretch: f32,
    /// Thickness reserved for the divider.
    pub gap: i32,
}

impl SplitGeometry {
    /// Where the divider would go before clamping.
    ///
    /// When both panes expand the space is split by stretch ratio (evenly if
    /// the ratios sum to zero); when only the first expands the divider sits
    /// at the far end; otherwise it sits at the start. `offset` is added in
    /// every case, except on a collapsed container, where the offset counts
    /// as zero and the divider sits at its natural position.
    pub fn wished_position(&self, offset: i32, collapsed: bool) -> i32 {
        let offset = if collapsed { 0 } else { offset };

        if self.first_expands && self.second_expands {
            let total = self.first_stretch + self.second_stretch;
            let ratio = if total > 0.0 {
                f64::from(self.first_stretch / total)
            } else {
                0.5
            };
            let wished =
                f64::from(self.available) * ratio - f64::from(self.gap / 2) + f64::from(offset);
            // Rounding down keeps a clamped offset a fixed point.
            wished.floor() as i32
        } else if self.first_expands {
            self.available
                .saturating_sub(self.gap)
                .saturating_add(offset)
        } else {
            offset
        }
    }

    /// The `(low, high)` range the divider must stay in.
    ///
    /// `low > high` when the container is smaller than both minimums plus
    /// the gap.
    pub fn bounds(&self) -> (i32, i32) {
        let high = self
            .available
            .saturating_sub(self.gap)
            .saturating_sub(self.second_minimum);
        (self.first_minimum, high)
    }

    /// Clamp a wished position into [`bounds`](Self::bounds).
    ///
    /// Conflicting bounds resolve to the lower one, so the first pane's
    /// minimum is honoured before the second's.
    pub fn clamp(&self, wished: i32) -> i32 {
        let (low, high) = self.bounds();
        wished.min(high).max(low)
    }

    /// Compute the middle separation for `offset`.
    ///
    /// Returns the separation and the offset corrected by exactly the amount
    /// the clamp moved the divider. When not collapsed, resolving again with
    /// the corrected offset yields the same separation and offset.
    pub fn resolve(&self, offset: i32, collapsed: bool) -> (i32, i32) {
        let wished = self.wished_position(offset, collapsed);
        let middle = self.clamp(wished);
        (middle, offset.saturating_sub(wished.saturating_sub(middle)))
    }
}

/// Pointer state captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer coordinate along the split axis at press time, in whole pixels.
    origin: i32,
    /// Split offset at press time.
    baseline_offset: i32,
}

/// Theme entries resolved on [`Notification::ThemeChanged`].
#[derive(Debug, Clone, Default, PartialEq)]
struct ThemeCache {
    separation: i32,
    autohide: bool,
    grabber: Icon,
    h_grabber: Icon,
    v_grabber: Icon,
}

impl ThemeCache {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            separation: theme.constant(names::SEPARATION),
            autohide: theme.constant(names::AUTOHIDE) != 0,
            grabber: theme.icon(names::GRABBER),
            h_grabber: theme.icon(names::H_GRABBER),
            v_grabber: theme.icon(names::V_GRABBER),
        }
    }
}

/// The first two layout-eligible children, as of the last
/// [`Notification::ChildrenChanged`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PaneCache {
    first: Option<PaneId>,
    second: Option<PaneId>,
}

/// A container with two panes and a draggable divider.
///
/// The first two visible, non-top-level children of the host are the
/// *first* and *second* pane. With a single eligible child that child fills
/// the container; with none, layout does nothing.
///
/// # Variants
///
/// [`hsplit`](Self::hsplit) and [`vsplit`](Self::vsplit) build containers
/// whose orientation is fixed; [`new`](Self::new) builds one whose
/// orientation can change at runtime.
///
/// # Signals
///
/// - `dragged(i32)`: Emitted with the new split offset whenever a drag moves
///   the divider. Not emitted by [`set_split_offset`](Self::set_split_offset).
pub struct SplitContainer {
    /// Class name used in diagnostics.
    class: &'static str,

    /// Whether the orientation is fixed.
    fixed: bool,

    /// Split axis.
    orientation: Orientation,

    /// When collapsed the divider position is the offset itself and dragging
    /// is disabled.
    collapsed: bool,

    /// Divider display mode.
    dragger_visibility: DraggerVisibility,

    /// Pixel bias applied to the natural divider position.
    split_offset: i32,

    /// Leading edge of the divider, in logical (unmirrored) coordinates.
    middle_separation: i32,

    /// Leading edge of the divider as laid out on screen.
    divider_position: i32,

    /// Active drag, if any.
    drag: Option<DragSession>,

    /// Whether the pointer is over the divider.
    hovered: bool,

    /// Resolved panes.
    panes: PaneCache,

    /// Resolved theme entries.
    theme: ThemeCache,

    /// Work requested from the host since the last drain.
    pending: UpdateRequests,

    /// Signal emitted when a drag moves the divider.
    pub dragged: Signal<i32>,
}

impl SplitContainer {
    /// Create a container whose orientation can be changed later.
    pub fn new(orientation: Orientation) -> Self {
        Self::with_class("SplitContainer", false, orientation)
    }

    /// Create a container with panes fixed side by side.
    pub fn hsplit() -> Self {
        Self::with_class("HSplitContainer", true, Orientation::Horizontal)
    }

    /// Create a container with panes fixed one above the other.
    pub fn vsplit() -> Self {
        Self::with_class("VSplitContainer", true, Orientation::Vertical)
    }

    fn with_class(class: &'static str, fixed: bool, orientation: Orientation) -> Self {
        Self {
            class,
            fixed,
            orientation,
            collapsed: false,
            dragger_visibility: DraggerVisibility::Visible,
            split_offset: 0,
            middle_separation: 0,
            divider_position: 0,
            drag: None,
            hovered: false,
            panes: PaneCache::default(),
            theme: ThemeCache::default(),
            pending: UpdateRequests::default(),
            dragged: Signal::new(),
        }
    }

    /// The class name: `SplitContainer`, `HSplitContainer` or `VSplitContainer`.
    pub fn class_name(&self) -> &'static str {
        self.class
    }

    /// Whether the orientation is fixed.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Whether [`set_orientation`](Self::set_orientation) can succeed.
    pub fn is_orientation_editable(&self) -> bool {
        !self.fixed
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Get the split offset.
    pub fn split_offset(&self) -> i32 {
        self.split_offset
    }

    /// Set the split offset.
    ///
    /// The value is stored as given; it is clamped only by
    /// [`clamp_split_offset`](Self::clamp_split_offset) or a drag.
    pub fn set_split_offset(&mut self, offset: i32) {
        if self.split_offset == offset {
            return;
        }
        self.split_offset = offset;
        self.pending.sort = true;
    }

    /// Set the split offset using builder pattern.
    pub fn with_split_offset(mut self, offset: i32) -> Self {
        self.set_split_offset(offset);
        self
    }

    /// Whether the container is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Collapse or expand the container.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        if self.collapsed == collapsed {
            return;
        }
        self.collapsed = collapsed;
        self.pending.sort = true;
    }

    /// Set the collapsed state using builder pattern.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.set_collapsed(collapsed);
        self
    }

    /// Get the divider display mode.
    pub fn dragger_visibility(&self) -> DraggerVisibility {
        self.dragger_visibility
    }

    /// Set the divider display mode.
    pub fn set_dragger_visibility(&mut self, visibility: DraggerVisibility) {
        if self.dragger_visibility == visibility {
            return;
        }
        self.dragger_visibility = visibility;
        self.pending.sort = true;
        self.pending.redraw = true;
        self.pending.minimum_size = true;
    }

    /// Set the divider display mode using builder pattern.
    pub fn with_dragger_visibility(mut self, visibility: DraggerVisibility) -> Self {
        self.set_dragger_visibility(visibility);
        self
    }

    /// Get the split axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the panes are stacked vertically.
    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    /// Change the split axis.
    ///
    /// Fails without changing anything on fixed-orientation containers.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), SplitContainerError> {
        if self.fixed {
            let err = SplitContainerError::FixedOrientation { class: self.class };
            tracing::error!(target: targets::SPLIT_CONTAINER, "{}", err);
            return Err(err);
        }
        if self.orientation == orientation {
            return Ok(());
        }
        self.orientation = orientation;
        self.pending.minimum_size = true;
        self.pending.sort = true;
        Ok(())
    }

    /// Boolean form of [`set_orientation`](Self::set_orientation).
    pub fn set_vertical(&mut self, vertical: bool) -> Result<(), SplitContainerError> {
        self.set_orientation(if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        })
    }

    /// Leading edge of the divider along the split axis, as of the last
    /// computation, before right-to-left mirroring.
    pub fn middle_separation(&self) -> i32 {
        self.middle_separation
    }

    /// Leading edge of the divider as laid out on screen.
    ///
    /// Equal to [`middle_separation`](Self::middle_separation) except for
    /// horizontal containers with a right-to-left layout.
    pub fn divider_position(&self) -> i32 {
        self.divider_position
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the pointer is over the divider.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Drain the work requested since the last call.
    pub fn take_update_requests(&mut self) -> UpdateRequests {
        mem::take(&mut self.pending)
    }

    /// Size flags a child may use horizontally. Expanding is only
    /// meaningful along the split axis.
    pub fn allowed_size_flags_horizontal(&self) -> Vec<SizeFlags> {
        self.allowed_size_flags(Orientation::Horizontal)
    }

    /// Size flags a child may use vertically.
    pub fn allowed_size_flags_vertical(&self) -> Vec<SizeFlags> {
        self.allowed_size_flags(Orientation::Vertical)
    }

    fn allowed_size_flags(&self, axis: Orientation) -> Vec<SizeFlags> {
        let mut flags = vec![SizeFlags::FILL];
        if axis == self.orientation {
            flags.push(SizeFlags::EXPAND);
        }
        flags.extend([
            SizeFlags::SHRINK_BEGIN,
            SizeFlags::SHRINK_CENTER,
            SizeFlags::SHRINK_END,
        ]);
        flags
    }

    // =========================================================================
    // Theme and Panes
    // =========================================================================

    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = ThemeCache::from_theme(theme);
        tracing::debug!(
            target: targets::SPLIT_CONTAINER,
            separation = self.theme.separation,
            autohide = self.theme.autohide,
            "theme cache refreshed"
        );
    }

    fn refresh_panes<H: ContainerHost>(&mut self, host: &H) {
        let mut eligible = host
            .children()
            .iter()
            .copied()
            .filter(|&id| host.child(id).is_some_and(ChildLayout::is_layout_eligible));
        self.panes = PaneCache {
            first: eligible.next(),
            second: eligible.next(),
        };
        tracing::trace!(
            target: targets::SPLIT_CONTAINER,
            first = ?self.panes.first,
            second = ?self.panes.second,
            "pane cache refreshed"
        );
    }

    /// Cached panes that still resolve to eligible children.
    fn resolve_panes<'h, H: ContainerHost>(
        &self,
        host: &'h H,
    ) -> (Option<(PaneId, &'h ChildLayout)>, Option<(PaneId, &'h ChildLayout)>) {
        let resolve = move |id: Option<PaneId>| {
            let id = id?;
            host.child(id)
                .filter(|child| child.is_layout_eligible())
                .map(|child| (id, child))
        };
        (resolve(self.panes.first), resolve(self.panes.second))
    }

    fn resolve_pane_ids<H: ContainerHost>(&self, host: &H) -> (Option<PaneId>, Option<PaneId>) {
        let (first, second) = self.resolve_panes(host);
        (first.map(|(id, _)| id), second.map(|(id, _)| id))
    }

    fn has_both_panes<H: ContainerHost>(&self, host: &H) -> bool {
        matches!(self.resolve_panes(host), (Some(_), Some(_)))
    }

    /// The grabber icon for the current variant and orientation.
    fn grabber_icon(&self) -> &Icon {
        if self.fixed {
            &self.theme.grabber
        } else if self.is_vertical() {
            &self.theme.v_grabber
        } else {
            &self.theme.h_grabber
        }
    }

    /// Thickness reserved for the divider along the split axis.
    pub fn gap(&self) -> i32 {
        if self.dragger_visibility == DraggerVisibility::HiddenCollapsed {
            return 0;
        }
        let icon = self.grabber_icon();
        let thickness = if self.is_vertical() {
            icon.height()
        } else {
            icon.width()
        };
        self.theme.separation.max(thickness)
    }

    fn split_geometry(&self, size: Size, first: &ChildLayout, second: &ChildLayout) -> SplitGeometry {
        let axis = self.orientation;
        SplitGeometry {
            available: axis.extent(size) as i32,
            first_minimum: axis.extent(first.minimum_size) as i32,
            second_minimum: axis.extent(second.minimum_size) as i32,
            first_expands: first.size_flags(axis).expands(),
            second_expands: second.size_flags(axis).expands(),
            first_stretch: first.stretch_ratio,
            second_stretch: second.stretch_ratio,
            gap: self.gap(),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Recompute the divider position from the host's current state.
    ///
    /// With `clamp_offset` the stored split offset absorbs whatever
    /// correction the clamp applied, so the next computation lands on the
    /// same position without clamping. Returns `None`, changing nothing,
    /// unless both panes are present.
    pub fn compute_middle_separation<H: ContainerHost>(
        &mut self,
        host: &H,
        clamp_offset: bool,
    ) -> Option<i32> {
        let (Some((_, first)), Some((_, second))) = self.resolve_panes(host) else {
            return None;
        };
        let geometry = self.split_geometry(host.size(), first, second);

        let (low, high) = geometry.bounds();
        if low > high {
            tracing::warn!(
                target: targets::SPLIT_CONTAINER,
                available = geometry.available,
                low,
                high,
                "container smaller than its panes' minimum sizes"
            );
        }

        let (middle, corrected) = geometry.resolve(self.split_offset, self.collapsed);
        if clamp_offset && corrected != self.split_offset {
            tracing::debug!(
                target: targets::SPLIT_CONTAINER,
                from = self.split_offset,
                to = corrected,
                "split offset clamped"
            );
            self.split_offset = corrected;
        }

        self.middle_separation = middle;
        self.divider_position = if !self.is_vertical() && host.layout_direction().is_rtl() {
            geometry.available - middle - geometry.gap
        } else {
            middle
        };
        Some(middle)
    }

    /// Re-clamp the split offset to the current size and request a layout.
    ///
    /// Does nothing unless both panes are present.
    pub fn clamp_split_offset<H: ContainerHost>(&mut self, host: &H) {
        if self.compute_middle_separation(host, true).is_some() {
            self.pending.sort = true;
        }
    }

    /// Lay the panes out.
    ///
    /// Always requests a redraw, including when fewer than two panes are
    /// present.
    pub fn resort<H: ContainerHost>(&mut self, host: &mut H) {
        let _span = PerfSpan::new(span_names::LAYOUT_PASS);
        let size = host.size();

        match self.resolve_pane_ids(&*host) {
            (Some(first), Some(second)) => {
                // Both resolved, so the computation cannot come back empty.
                let middle = self
                    .compute_middle_separation(&*host, false)
                    .unwrap_or(self.middle_separation);
                let gap = self.gap();
                let rtl = !self.is_vertical() && host.layout_direction().is_rtl();
                let (leading, trailing) = if rtl { (second, first) } else { (first, second) };

                let extent = self.orientation.extent(size) as i32;
                let trail_start = self.divider_position.saturating_add(gap);
                host.fit_child_in_rect(leading, self.band(size, 0, self.divider_position));
                host.fit_child_in_rect(
                    trailing,
                    self.band(size, trail_start, extent.saturating_sub(trail_start)),
                );

                tracing::trace!(
                    target: targets::SPLIT_CONTAINER,
                    width = size.width,
                    height = size.height,
                    middle,
                    divider = self.divider_position,
                    gap,
                    "layout pass"
                );
            }
            (Some(only), None) | (None, Some(only)) => {
                host.fit_child_in_rect(only, Rect::from_size(size));
            }
            (None, None) => {}
        }

        self.pending.redraw = true;
    }

    /// A full-width band along the split axis, never negative in length.
    fn band(&self, size: Size, start: i32, length: i32) -> Rect {
        let start = start as f32;
        let length = length.max(0) as f32;
        match self.orientation {
            Orientation::Horizontal => Rect::new(start, 0.0, length, size.height.max(0.0)),
            Orientation::Vertical => Rect::new(0.0, start, size.width.max(0.0), length),
        }
    }

    /// The container's minimum size: both panes' minimums along the split
    /// axis plus the gap, and the larger of the two across it.
    pub fn minimum_size<H: ContainerHost>(&self, host: &H) -> Size {
        let (first, second) = self.resolve_panes(host);
        let axis = self.orientation;

        let mut along = 0.0_f32;
        let mut across = 0.0_f32;
        for (_, child) in [first, second].into_iter().flatten() {
            along += axis.extent(child.minimum_size);
            across = across.max(axis.cross().extent(child.minimum_size));
        }
        if first.is_some() && second.is_some() {
            along += self.gap() as f32;
        }

        match axis {
            Orientation::Horizontal => Size::new(along, across),
            Orientation::Vertical => Size::new(across, along),
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Handle a container lifecycle notification.
    pub fn notification<H: ContainerHost>(&mut self, host: &mut H, what: Notification) {
        match what {
            Notification::SortChildren => self.resort(host),
            Notification::ChildrenChanged => {
                self.refresh_panes(&*host);
                self.pending.sort = true;
                self.pending.minimum_size = true;
            }
            Notification::ThemeChanged => {
                self.apply_theme(host.theme());
                self.pending.minimum_size = true;
                self.pending.sort = true;
            }
            Notification::LayoutDirectionChanged | Notification::TranslationChanged => {
                self.pending.sort = true;
            }
            Notification::MouseExit => self.handle_mouse_exit(),
        }
    }

    fn handle_mouse_exit(&mut self) {
        self.hovered = false;
        if self.theme.autohide {
            self.pending.redraw = true;
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Whether the divider currently reacts to the pointer.
    fn is_interactive<H: ContainerHost>(&self, host: &H) -> bool {
        !self.collapsed
            && self.dragger_visibility == DraggerVisibility::Visible
            && self.has_both_panes(host)
    }

    /// Whether a coordinate along the split axis lies strictly inside the
    /// divider.
    fn in_divider(&self, coordinate: f32) -> bool {
        let start = self.divider_position;
        coordinate > start as f32 && coordinate < start.saturating_add(self.gap()) as f32
    }

    fn resize_cursor(&self) -> CursorShape {
        match self.orientation {
            Orientation::Horizontal => CursorShape::ResizeColumn,
            Orientation::Vertical => CursorShape::ResizeRow,
        }
    }

    /// Handle a pointer event. Returns `true` and accepts the event when it
    /// was consumed.
    ///
    /// Presses start a drag only strictly inside the divider, and only while
    /// the container is not collapsed, has both panes, and shows its
    /// divider. Releasing the left button always ends a drag.
    ///
    /// The release is checked before the interactivity gate, so a drag never
    /// outlives a container that collapsed or hid its divider mid-drag.
    pub fn handle_input<H: ContainerHost>(&mut self, host: &H, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::Leave(_) => {
                self.handle_mouse_exit();
                false
            }
            WidgetEvent::MouseRelease(e) if e.button == MouseButton::Left => {
                self.end_drag()
            }
            _ if !self.is_interactive(host) => false,
            WidgetEvent::MousePress(e) => self.handle_mouse_press(host, e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(host, e),
            _ => false,
        };

        if handled {
            event.accept();
        }
        handled
    }

    fn handle_mouse_press<H: ContainerHost>(&mut self, host: &H, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let coordinate = self.orientation.coordinate(event.local_pos);
        if !self.in_divider(coordinate) {
            return false;
        }

        self.compute_middle_separation(host, true);
        self.drag = Some(DragSession {
            origin: coordinate as i32,
            baseline_offset: self.split_offset,
        });
        self.pending.redraw = true;
        tracing::debug!(
            target: targets::SPLIT_CONTAINER,
            origin = coordinate,
            offset = self.split_offset,
            "drag started"
        );
        true
    }

    fn end_drag(&mut self) -> bool {
        if self.drag.take().is_none() {
            return false;
        }
        self.pending.redraw = true;
        tracing::debug!(
            target: targets::SPLIT_CONTAINER,
            offset = self.split_offset,
            "drag finished"
        );
        true
    }

    fn handle_mouse_move<H: ContainerHost>(&mut self, host: &H, event: &MouseMoveEvent) -> bool {
        let coordinate = self.orientation.coordinate(event.local_pos);

        let hovered = self.in_divider(coordinate);
        if hovered != self.hovered {
            self.hovered = hovered;
            if self.theme.autohide {
                self.pending.redraw = true;
            }
        }

        let Some(drag) = self.drag else {
            return false;
        };

        let delta = (coordinate as i32).saturating_sub(drag.origin);
        let mirrored = !self.is_vertical() && host.layout_direction().is_rtl();
        self.split_offset = if mirrored {
            drag.baseline_offset.saturating_sub(delta)
        } else {
            drag.baseline_offset.saturating_add(delta)
        };
        self.compute_middle_separation(host, true);
        self.pending.sort = true;

        tracing::trace!(
            target: targets::SPLIT_CONTAINER,
            delta,
            offset = self.split_offset,
            middle = self.middle_separation,
            "divider dragged"
        );
        self.dragged.emit(self.split_offset);
        true
    }

    /// The cursor to show at `pos`: a resize cursor while dragging or over
    /// an interactive divider, otherwise the host's default.
    pub fn cursor_shape<H: ContainerHost>(&self, host: &H, pos: Point) -> CursorShape {
        if self.drag.is_some() {
            return self.resize_cursor();
        }
        if self.is_interactive(host) && self.in_divider(self.orientation.coordinate(pos)) {
            return self.resize_cursor();
        }
        host.default_cursor_shape(pos)
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Where the grabber icon is drawn, or `None` when it is not drawn.
    ///
    /// The icon is centred in the divider gap and across the container. It
    /// is drawn only for an interactive divider, and with autohide only
    /// while hovered or dragged.
    pub fn grabber_rect<H: ContainerHost>(&self, host: &H) -> Option<Rect> {
        if !self.is_interactive(host) {
            return None;
        }
        if self.theme.autohide && self.drag.is_none() && !self.hovered {
            return None;
        }

        let icon = self.grabber_icon();
        let gap = self.gap();
        let size = host.size();
        let (x, y) = match self.orientation {
            Orientation::Vertical => (
                (size.width as i32 - icon.width()) / 2,
                self.divider_position + (gap - icon.height()) / 2,
            ),
            Orientation::Horizontal => (
                self.divider_position + (gap - icon.width()) / 2,
                (size.height as i32 - icon.height()) / 2,
            ),
        };
        Some(Rect::new(
            x as f32,
            y as f32,
            icon.width() as f32,
            icon.height() as f32,
        ))
    }

    /// Paint the divider's grabber.
    pub fn paint<H: ContainerHost, R: Renderer + ?Sized>(&self, host: &H, renderer: &mut R) {
        let Some(rect) = self.grabber_rect(host) else {
            return;
        };
        let _span = PerfSpan::new(span_names::PAINT);
        renderer.draw_icon(self.grabber_icon(), rect.origin);
    }
}

impl Default for SplitContainer {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

// Ensure SplitContainer is Send + Sync
static_assertions::assert_impl_all!(SplitContainer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn geometry(available: i32, first_min: i32, second_min: i32, gap: i32) -> SplitGeometry {
        SplitGeometry {
            available,
            first_minimum: first_min,
            second_minimum: second_min,
            first_expands: false,
            second_expands: false,
            first_stretch: 1.0,
            second_stretch: 1.0,
            gap,
        }
    }

    #[test]
    fn test_wished_position_by_expand_flags() {
        let mut g = geometry(200, 0, 0, 10);
        assert_eq!(g.wished_position(15, false), 15);

        g.first_expands = true;
        assert_eq!(g.wished_position(15, false), 205);

        g.second_expands = true;
        assert_eq!(g.wished_position(15, false), 110);

        g.first_stretch = 3.0;
        assert_eq!(g.wished_position(0, false), 145);
    }

    #[test]
    fn test_only_second_expanding_starts_at_zero() {
        let mut g = geometry(200, 0, 0, 10);
        g.second_expands = true;
        assert_eq!(g.wished_position(30, false), 30);
    }

    #[test]
    fn test_zero_stretch_splits_evenly() {
        let mut g = geometry(200, 0, 0, 0);
        g.first_expands = true;
        g.second_expands = true;
        g.first_stretch = 0.0;
        g.second_stretch = 0.0;
        assert_eq!(g.wished_position(0, false), 100);
    }

    #[test]
    fn test_collapsed_ignores_offset() {
        let mut g = geometry(200, 0, 0, 10);
        assert_eq!(g.wished_position(40, true), 0);

        g.first_expands = true;
        assert_eq!(g.wished_position(40, true), 190);

        g.second_expands = true;
        assert_eq!(g.wished_position(75, true), 95);
        assert_eq!(g.wished_position(-75, true), 95);
    }

    #[test]
    fn test_collapsed_resolve_corrects_offset_by_clamp() {
        let mut g = geometry(200, 30, 50, 10);
        g.first_expands = true;

        // Wished 190, clamped to 140: the stored offset absorbs the 50.
        let (middle, offset) = g.resolve(20, true);
        assert_eq!(middle, 140);
        assert_eq!(offset, -30);
    }

    #[test]
    fn test_clamp_bounds() {
        let g = geometry(200, 30, 50, 10);
        assert_eq!(g.bounds(), (30, 140));
        assert_eq!(g.clamp(-5), 30);
        assert_eq!(g.clamp(500), 140);
        assert_eq!(g.clamp(70), 70);
    }

    #[test]
    fn test_conflicting_bounds_favour_first_pane() {
        let g = geometry(50, 40, 40, 10);
        assert_eq!(g.bounds(), (40, 0));
        assert_eq!(g.clamp(20), 40);
        assert_eq!(g.clamp(-100), 40);
    }

    #[test]
    fn test_resolve_absorbs_clamp() {
        let g = geometry(200, 30, 50, 10);
        let (middle, offset) = g.resolve(500, false);
        assert_eq!(middle, 140);
        assert_eq!(offset, 140);

        let (again, same) = g.resolve(offset, false);
        assert_eq!(again, middle);
        assert_eq!(same, offset);
    }

    #[test]
    fn test_variants() {
        let free = SplitContainer::new(Orientation::Vertical);
        assert_eq!(free.class_name(), "SplitContainer");
        assert!(!free.is_fixed());
        assert!(free.is_orientation_editable());
        assert!(free.is_vertical());

        let h = SplitContainer::hsplit();
        assert_eq!(h.class_name(), "HSplitContainer");
        assert!(h.is_fixed());
        assert_eq!(h.orientation(), Orientation::Horizontal);

        let v = SplitContainer::vsplit();
        assert_eq!(v.class_name(), "VSplitContainer");
        assert!(!v.is_orientation_editable());
        assert!(v.is_vertical());
    }

    #[test]
    fn test_fixed_orientation_is_rejected() {
        let mut split = SplitContainer::hsplit();
        let err = split.set_orientation(Orientation::Vertical).unwrap_err();
        assert_eq!(
            err,
            SplitContainerError::FixedOrientation {
                class: "HSplitContainer"
            }
        );
        assert_eq!(err.to_string(), "Can't change orientation of HSplitContainer.");
        assert_eq!(split.orientation(), Orientation::Horizontal);
        assert!(split.take_update_requests().is_empty());

        let mut split = SplitContainer::vsplit();
        assert!(split.set_vertical(true).is_err());
    }

    #[test]
    fn test_set_orientation_requests_layout() {
        let mut split = SplitContainer::new(Orientation::Horizontal);
        split.set_vertical(true).unwrap();
        assert!(split.is_vertical());

        let requests = split.take_update_requests();
        assert!(requests.sort);
        assert!(requests.minimum_size);

        split.set_vertical(true).unwrap();
        assert!(split.take_update_requests().is_empty());
    }

    #[test]
    fn test_setters_ignore_unchanged_values() {
        let mut split = SplitContainer::default();
        split.set_split_offset(0);
        split.set_collapsed(false);
        split.set_dragger_visibility(DraggerVisibility::Visible);
        assert!(split.take_update_requests().is_empty());

        split.set_split_offset(40);
        assert_eq!(split.split_offset(), 40);
        assert_eq!(
            split.take_update_requests(),
            UpdateRequests {
                sort: true,
                ..Default::default()
            }
        );

        split.set_collapsed(true);
        assert!(split.is_collapsed());
        assert!(split.take_update_requests().sort);

        split.set_dragger_visibility(DraggerVisibility::Hidden);
        let requests = split.take_update_requests();
        assert!(requests.sort && requests.redraw);
        assert!(split.take_update_requests().is_empty());
    }

    #[test]
    fn test_set_split_offset_does_not_emit_dragged() {
        let mut split = SplitContainer::default().with_split_offset(12);
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        split.dragged.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        split.set_split_offset(99);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_gap_from_theme() {
        let theme = Theme::new()
            .with_constant(names::SEPARATION, 6)
            .with_icon(names::GRABBER, Icon::new("g", 10, 3))
            .with_icon(names::H_GRABBER, Icon::new("h", 4, 16))
            .with_icon(names::V_GRABBER, Icon::new("v", 16, 9));

        let mut fixed = SplitContainer::hsplit();
        fixed.apply_theme(&theme);
        assert_eq!(fixed.gap(), 10);

        let mut free = SplitContainer::new(Orientation::Horizontal);
        free.apply_theme(&theme);
        assert_eq!(free.gap(), 6);
        free.set_vertical(true).unwrap();
        assert_eq!(free.gap(), 9);

        free.set_dragger_visibility(DraggerVisibility::Hidden);
        assert_eq!(free.gap(), 9);
        free.set_dragger_visibility(DraggerVisibility::HiddenCollapsed);
        assert_eq!(free.gap(), 0);
    }

    #[test]
    fn test_allowed_size_flags() {
        let split = SplitContainer::hsplit();
        assert_eq!(
            split.allowed_size_flags_horizontal(),
            vec![
                SizeFlags::FILL,
                SizeFlags::EXPAND,
                SizeFlags::SHRINK_BEGIN,
                SizeFlags::SHRINK_CENTER,
                SizeFlags::SHRINK_END,
            ]
        );
        assert!(!split.allowed_size_flags_vertical().contains(&SizeFlags::EXPAND));

        let split = SplitContainer::vsplit();
        assert!(split.allowed_size_flags_vertical().contains(&SizeFlags::EXPAND));
        assert!(!split.allowed_size_flags_horizontal().contains(&SizeFlags::EXPAND));
    }

    #[test]
    fn test_update_requests_drain() {
        let mut split = SplitContainer::default();
        split.set_split_offset(3);
        assert!(!split.take_update_requests().is_empty());
        assert!(split.take_update_requests().is_empty());
    }

    #[test]
    fn test_dragged_is_a_plain_signal() {
        let signal: &Signal<i32> = &SplitContainer::default().dragged;
        assert_eq!(signal.connection_count(), 0);
    }
}
