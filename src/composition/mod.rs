//! Page layout configuration and typed section settings.

pub(crate) mod dsl;
pub(crate) mod model;
pub(crate) mod settings;
