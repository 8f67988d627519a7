//! Terminal front-end for a movie collection: controller, renderers, settings.

pub mod config;
pub mod controller;
pub mod ui;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
