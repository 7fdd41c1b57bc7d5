//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page. [`home`] owns the dialog state shared between
//! sections and delegates rendering to `components`.

pub mod home;
