//! Standard widgets for Lattice Split.
//!
//! - [`SplitContainer`]: Two panes separated by a draggable divider

mod split_container;

pub use split_container::{
    DraggerVisibility, Notification, SplitContainer, SplitContainerError, SplitGeometry,
    UpdateRequests,
};
