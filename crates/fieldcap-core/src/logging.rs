//! Logging facilities for fieldcap.
//!
//! fieldcap uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // ... host application code ...
//! }
//! ```
//!
//! The kit itself never installs a subscriber.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=fieldcap::arena=trace`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "fieldcap_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "fieldcap_core::signal";
    /// Field arena (ownership and group coordination) target.
    pub const ARENA: &str = "fieldcap::arena";
    /// Width-synchronization group target.
    pub const GROUP: &str = "fieldcap::group";
    /// Widget lifecycle target.
    pub const WIDGET: &str = "fieldcap::widget";
}
