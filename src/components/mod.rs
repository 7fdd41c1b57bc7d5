//! Leptos components, one per page feature.

pub mod contact_section;
pub mod hero_video;
pub mod profile_card;
pub mod project_gallery;
pub mod project_modal;
pub mod rotating_role;
pub mod settings_modal;
pub mod site_header;
pub mod skills_section;
pub mod theme_toggle;
