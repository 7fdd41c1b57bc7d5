//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::content;
use crate::pages::home::HomePage;
use crate::state::profile::ProfileStore;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the site configuration and the profile record. A record saved
/// from the settings panel on an earlier visit replaces the built-in profile
/// before anything renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile = RwSignal::new(BrowserStorage.load_profile().unwrap_or_else(content::default_profile));
    provide_context(SiteConfig::default());
    provide_context(profile);

    view! {
        <Title text=move || profile.with(|p| format!("{} | Portfolio", p.name))/>
        <Meta name="description" content=move || profile.with(|p| p.bio.clone())/>
        <HomePage/>
    }
}
