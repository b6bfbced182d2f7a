//! Presentation layer: the store, the shared page components, and one view
//! per page.

pub mod app;
pub mod components;
pub mod views;
