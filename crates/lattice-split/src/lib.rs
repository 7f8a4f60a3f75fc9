//! Lattice Split: a two-pane split container.
//!
//! [`SplitContainer`](widget::widgets::SplitContainer) lays out the first two
//! eligible children of a container along one axis, separated by a divider
//! the user can drag to move space from one pane to the other.
//!
//! The container does not own its children. It talks to whatever owns them
//! through the [`ContainerHost`](widget::ContainerHost) trait: the host lists
//! the children, places them, supplies the theme and layout direction, and
//! forwards pointer events and notifications.
//!
//! # Example
//!
//! ```ignore
//! use lattice_split::prelude::*;
//!
//! let mut split = SplitContainer::hsplit();
//! split.dragged.connect(|offset| println!("divider moved, offset {offset}"));
//!
//! // The host tells the container about its children and theme, then runs
//! // a layout pass whenever the container asks for one.
//! split.notification(&mut host, Notification::ThemeChanged);
//! split.notification(&mut host, Notification::ChildrenChanged);
//! if split.take_update_requests().sort {
//!     split.notification(&mut host, Notification::SortChildren);
//! }
//! ```

pub mod prelude;
pub mod widget;
