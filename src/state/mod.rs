//! Feature state modules.
//!
//! DESIGN
//! ======
//! Each feature keeps its data and transitions here as plain Rust so the
//! components in `crate::components` stay thin: they hold these values in
//! signals and map browser events onto the methods below.

pub mod contact;
pub mod profile;
pub mod projects;
pub mod rotator;
pub mod settings;
pub mod ui;
pub mod video;
