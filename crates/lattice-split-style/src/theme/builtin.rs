//! Built-in themes.

use lattice_split_render::Icon;

use super::{Theme, names};

impl Theme {
    /// The default split container theme.
    ///
    /// A 12 pixel separation, autohide enabled, and grabber icons for both
    /// orientations. The icons are thinner than the separation so the gap
    /// width is governed by the constant.
    pub fn builtin_split() -> Self {
        Self::new()
            .with_constant(names::SEPARATION, 12)
            .with_constant(names::AUTOHIDE, 1)
            .with_icon(names::GRABBER, Icon::new("builtin:grabber", 4, 16))
            .with_icon(names::H_GRABBER, Icon::new("builtin:h_grabber", 4, 16))
            .with_icon(names::V_GRABBER, Icon::new("builtin:v_grabber", 16, 4))
    }
}
