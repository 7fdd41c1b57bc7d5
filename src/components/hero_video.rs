//! Hero background video with a click-to-play overlay.
//!
//! ERROR HANDLING
//! ==============
//! Blocked autoplay and failed manual play only toggle the overlay. A media
//! error hides the video and overlay for the rest of the visit.

use leptos::prelude::*;

use crate::state::video::HeroVideoState;

#[component]
pub fn HeroVideo(#[prop(into)] src: String) -> impl IntoView {
    let state = RwSignal::new(HeroVideoState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(video) = video_ref.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let played = play(&video).await;
            state.update(|s| s.autoplay_resolved(played));
        });
    });

    let on_error = move |_| {
        leptos::logging::warn!("Hero video failed to load/play");
        state.update(HeroVideoState::media_error);
    };

    let on_overlay_click = move |_| {
        state.update(HeroVideoState::overlay_clicked);
        #[cfg(feature = "csr")]
        {
            if let Some(video) = video_ref.get_untracked() {
                video.set_muted(false);
                video.set_controls(true);
                leptos::task::spawn_local(async move {
                    let played = play(&video).await;
                    if !played {
                        leptos::logging::warn!("Play failed on user interaction");
                    }
                    state.update(|s| s.play_resolved(played));
                });
            }
        }
    };

    view! {
        <div class="hero-media">
            <video
                id="hero-video"
                node_ref=video_ref
                src=src
                playsinline=true
                preload="auto"
                prop:muted=move || state.get().muted
                prop:controls=move || state.get().controls
                style:display=move || if state.get().video_hidden { "none" } else { "" }
                on:error=on_error
            ></video>
            <button
                id="video-play-overlay"
                type="button"
                class=move || state.get().overlay_class()
                aria-label="Play video"
                on:click=on_overlay_click
            >
                "▶"
            </button>
        </div>
    }
}

#[cfg(feature = "csr")]
async fn play(video: &web_sys::HtmlVideoElement) -> bool {
    let promise = match video.play() {
        Ok(promise) => promise,
        Err(e) => {
            leptos::logging::warn!("video play() threw: {e:?}");
            return false;
        }
    };
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            leptos::logging::log!("video playback rejected: {e:?}");
            false
        }
    }
}
