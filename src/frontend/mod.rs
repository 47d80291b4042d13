//! Frontend module for the `FileDrop` application.

pub mod app;
pub mod components;
pub mod states;
