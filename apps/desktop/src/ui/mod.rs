//! Text renderers for movie records and views.

pub mod render;
