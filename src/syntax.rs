//! Scanning layer: the per-call [`ParseSession`] and the coordinate reader built on it.

pub mod coords;
pub mod session;

pub use coords::Coord;
pub use session::ParseSession;
