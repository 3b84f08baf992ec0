//! Drawing. `layout` and `hud` are plain geometry and text so they can be
//! tested headless; `app`, `input`, `paint` and `plot` need the `viz` feature.

#[cfg(feature = "viz")]
pub mod app;
pub mod hud;
#[cfg(feature = "viz")]
pub mod input;
pub mod layout;
#[cfg(feature = "viz")]
pub mod paint;
#[cfg(feature = "viz")]
pub mod plot;

#[cfg(feature = "viz")]
pub use app::ThrustApp;
pub use layout::Layout;
