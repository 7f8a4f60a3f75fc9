//! Logging facilities for Lattice Split.
//!
//! Lattice Split uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every subsystem logs on its own target so output can be filtered with
//! directives such as `RUST_LOG=lattice_split::split_container=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_split_core::signal";
    /// Theme loading and lookup target.
    pub const STYLE: &str = "lattice_split_style";
    /// Split container layout and interaction target.
    pub const SPLIT_CONTAINER: &str = "lattice_split::split_container";
}

/// Span names used throughout Lattice Split for tracing.
pub mod span_names {
    /// A split container layout pass.
    pub const LAYOUT_PASS: &str = "lattice_split::layout_pass";
    /// Divider painting.
    pub const PAINT: &str = "lattice_split::paint";
}

/// A performance tracing span guard.
///
/// Enters an `info`-level span on the `lattice_split::perf` target for as long
/// as the guard lives.
///
/// ```
/// use lattice_split_core::logging::{PerfSpan, span_names};
///
/// {
///     let _span = PerfSpan::new(span_names::LAYOUT_PASS);
///     // ... measured work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "lattice_split::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
