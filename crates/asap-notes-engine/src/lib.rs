pub mod io;
pub mod liveness;
pub mod models;
pub mod render;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use liveness::Liveness;
pub use models::*;
pub use render::{RenderOptions, Renderer, render};
pub use session::{Session, SessionError};
