mod builtins;
mod registry;
mod types;

pub use builtins::default_theme;
pub use registry::{by_name, descriptors, names};
pub use types::{Theme, ThemeDescriptor};
