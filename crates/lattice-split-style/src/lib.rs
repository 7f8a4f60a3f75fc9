//! Theming for Lattice Split.
//!
//! A [`Theme`] is a flat lookup table of named integer constants and named
//! [`Icon`](lattice_split_render::Icon)s. Widgets resolve the entries they
//! care about once, when the theme changes, and cache the results.
//!
//! Themes can be built in code, taken from [`Theme::builtin_split`], or
//! loaded from TOML:
//!
//! ```
//! use lattice_split_style::Theme;
//!
//! let theme = Theme::from_toml_str(r#"
//!     [constants]
//!     separation = 8
//!
//!     [icons.grabber]
//!     source = "grabber.svg"
//!     width = 4
//!     height = 16
//! "#)?;
//!
//! assert_eq!(theme.constant("separation"), 8);
//! assert_eq!(theme.icon("grabber").height(), 16);
//! # Ok::<(), lattice_split_style::Error>(())
//! ```

pub mod theme;

mod error;

pub use error::{Error, Result};
pub use theme::{Theme, names};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::theme::{Theme, names};
    pub use crate::{Error, Result};
}
