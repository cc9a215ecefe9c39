//! Visual styling for the job browser.
//!
//! Colour schemes are TOML documents bundled into the binary; see
//! [`theme`] for the registry and loader.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};
