//! Cursor shape hints.
//!
//! Widgets answer "which cursor belongs at this point" with a
//! [`CursorShape`]; the host maps it to a platform cursor, typically through
//! [`CursorShape::to_cursor_icon`].

use cursor_icon::CursorIcon;

/// The shape (icon) of the mouse cursor.
///
/// The actual appearance may vary by platform and theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CursorShape {
    /// The default arrow cursor (platform-specific).
    #[default]
    Arrow,
    /// A pointing hand cursor, typically used for clickable elements like links.
    Hand,
    /// Column resize cursor, for dividers between side-by-side panes.
    ResizeColumn,
    /// Row resize cursor, for dividers between stacked panes.
    ResizeRow,
}

impl CursorShape {
    /// Convert to the cross-platform cursor icon name.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            CursorShape::Arrow => CursorIcon::Default,
            CursorShape::Hand => CursorIcon::Pointer,
            CursorShape::ResizeColumn => CursorIcon::ColResize,
            CursorShape::ResizeRow => CursorIcon::RowResize,
        }
    }

    /// Whether this is one of the resize cursors.
    pub fn is_resize(self) -> bool {
        matches!(self, CursorShape::ResizeColumn | CursorShape::ResizeRow)
    }
}

impl From<CursorShape> for CursorIcon {
    fn from(shape: CursorShape) -> Self {
        shape.to_cursor_icon()
    }
}
