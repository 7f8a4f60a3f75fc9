//! Theme lookup tables and TOML configuration.

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use lattice_split_core::logging::targets;
use lattice_split_render::Icon;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Names of the theme entries the split container reads.
pub mod names {
    /// Minimum thickness of the divider gap, in pixels.
    pub const SEPARATION: &str = "separation";
    /// Non-zero when the grabber is only drawn while hovered or dragged.
    pub const AUTOHIDE: &str = "autohide";
    /// Grabber icon of fixed-orientation containers.
    pub const GRABBER: &str = "grabber";
    /// Grabber icon of a free container laid out horizontally.
    pub const H_GRABBER: &str = "h_grabber";
    /// Grabber icon of a free container laid out vertically.
    pub const V_GRABBER: &str = "v_grabber";
}

/// A set of named constants and icons.
///
/// Lookups never fail: a constant the theme does not define reads as `0`
/// and an undefined icon reads as [`Icon::empty`].
///
/// The TOML layout mirrors the struct:
///
/// ```toml
/// [constants]
/// separation = 12
/// autohide = 1
///
/// [icons.grabber]
/// source = "grabber.svg"
/// width = 4
/// height = 16
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    constants: HashMap<String, i32>,
    icons: HashMap<String, Icon>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a theme from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(source)?;
        tracing::debug!(
            target: targets::STYLE,
            constants = theme.constants.len(),
            icons = theme.icons.len(),
            "parsed theme"
        );
        Ok(theme)
    }

    /// Load a theme from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let theme = Self::from_toml_str(&content)?;
        tracing::info!(target: targets::STYLE, "loaded theme: {}", path.display());
        Ok(theme)
    }

    /// Look up a named constant, `0` when undefined.
    pub fn constant(&self, name: &str) -> i32 {
        match self.constants.get(name) {
            Some(value) => *value,
            None => {
                tracing::trace!(target: targets::STYLE, name, "theme constant not defined");
                0
            }
        }
    }

    /// Look up a named icon, empty when undefined.
    pub fn icon(&self, name: &str) -> Icon {
        match self.icons.get(name) {
            Some(icon) => icon.clone(),
            None => {
                tracing::trace!(target: targets::STYLE, name, "theme icon not defined");
                Icon::empty()
            }
        }
    }

    /// Whether the theme defines a constant with this name.
    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Whether the theme defines an icon with this name.
    pub fn has_icon(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Define or replace a constant.
    pub fn set_constant(&mut self, name: impl Into<String>, value: i32) {
        self.constants.insert(name.into(), value);
    }

    /// Define or replace an icon.
    pub fn set_icon(&mut self, name: impl Into<String>, icon: Icon) {
        self.icons.insert(name.into(), icon);
    }

    /// Builder form of [`set_constant`](Self::set_constant).
    pub fn with_constant(mut self, name: impl Into<String>, value: i32) -> Self {
        self.set_constant(name, value);
        self
    }

    /// Builder form of [`set_icon`](Self::set_icon).
    pub fn with_icon(mut self, name: impl Into<String>, icon: Icon) -> Self {
        self.set_icon(name, icon);
        self
    }

    /// Overlay `other` on top of this theme; its entries win.
    pub fn merge(&mut self, other: &Theme) {
        self.constants
            .extend(other.constants.iter().map(|(k, v)| (k.clone(), *v)));
        self.icons
            .extend(other.icons.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

static_assertions::assert_impl_all!(Theme: Send, Sync);
