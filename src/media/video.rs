use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config::media::VSL_VIDEO_URL;
use crate::config::timing::{MUTE_BUTTON_INITIAL_MS, MUTE_BUTTON_REVEAL_MS};
use crate::error::FunnelError;

pub fn pause(video_ref: &NodeRef) -> Result<(), FunnelError> {
    match video_ref.cast::<HtmlVideoElement>() {
        Some(video) => video.pause().map_err(FunnelError::dom),
        None => Ok(()),
    }
}

fn volume_icon(muted: bool) -> Html {
    let speaker = "M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z";
    let extra = if muted {
        "M17 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2"
    } else {
        "M15.536 8.464a5 5 0 010 7.072m2.828-9.9a9 9 0 010 12.728"
    };
    html! {
        <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={speaker} />
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={extra} />
        </svg>
    }
}

/// What made the mute button visible. Each reveal schedules its own hide,
/// replacing any hide still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Mount,
    Interaction,
}

impl Reveal {
    pub fn hide_after(self) -> u32 {
        match self {
            Reveal::Mount => MUTE_BUTTON_INITIAL_MS,
            Reveal::Interaction => MUTE_BUTTON_REVEAL_MS,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SalesVideoProps {
    pub video_ref: NodeRef,
}

/// Looping, muted-by-default video with a mute toggle that fades out when
/// left alone and comes back when the visitor touches or hovers the video.
#[function_component(SalesVideo)]
pub fn sales_video(props: &SalesVideoProps) -> Html {
    let loaded = use_state(|| false);
    let muted = use_state(|| true);
    let show_button = use_state(|| true);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    {
        let show_button = show_button.clone();
        let hide_timer = hide_timer.clone();
        use_effect_with_deps(move |_| {
            *hide_timer.borrow_mut() = Some(Timeout::new(Reveal::Mount.hide_after(), move || {
                show_button.set(false);
            }));
            move || {
                hide_timer.borrow_mut().take();
            }
        }, ());
    }

    let on_area_interaction = {
        let show_button = show_button.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: ()| {
            show_button.set(true);
            let show_button = show_button.clone();
            // Replacing the handle cancels a hide that is still pending.
            *hide_timer.borrow_mut() = Some(Timeout::new(Reveal::Interaction.hide_after(), move || {
                show_button.set(false);
            }));
        })
    };

    let toggle_audio = {
        let muted = muted.clone();
        let video_ref = props.video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let next = !*muted;
                video.set_muted(next);
                muted.set(next);
                info!("Video audio: {}", if next { "muted" } else { "unmuted" });
            }
        })
    };

    let on_loaded = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| {
            loaded.set(true);
            info!("Video loaded");
        })
    };

    let on_error = {
        let loaded = loaded.clone();
        Callback::from(move |e: Event| {
            gloo_console::error!("Video failed to load:", e);
            // Don't leave the spinner up forever.
            loaded.set(true);
        })
    };

    // Browsers only honour the muted *attribute* at load time.
    {
        let video_ref = props.video_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(true);
            }
            || ()
        }, ());
    }

    let button_style = format!(
        "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 20; pointer-events: none; transition: all 0.5s; opacity: {}; transform: scale({});",
        if *show_button { "1" } else { "0" },
        if *show_button { "1" } else { "0.95" },
    );
    let button_color = if *muted { "#6b7280" } else { "#22c55e" };

    html! {
        <div
            style="width: 100%; max-width: 32rem; border-radius: 8px; overflow: hidden; border: 4px solid #fdba74; background: white; position: relative;"
            onmouseenter={on_area_interaction.reform(|_: MouseEvent| ())}
            ontouchstart={on_area_interaction.reform(|_: TouchEvent| ())}
        >
            { if !*loaded {
                html! {
                    <div style="position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: #f3f4f6; z-index: 10;">
                        <div style="display: flex; flex-direction: column; align-items: center; gap: 0.5rem;">
                            <div class="spinner"></div>
                            <span style="font-size: 0.875rem; color: #4b5563;">{"Loading video..."}</span>
                        </div>
                    </div>
                }
            } else {
                html! {}
            } }

            <div style={button_style}>
                <button
                    onclick={toggle_audio}
                    style={format!("width: 4rem; height: 4rem; border-radius: 9999px; background: {}; color: white; border: 4px solid white; pointer-events: auto; cursor: pointer;", button_color)}
                >
                    { volume_icon(*muted) }
                </button>
            </div>

            <video
                ref={props.video_ref.clone()}
                src={VSL_VIDEO_URL}
                style="width: 100%; height: auto; aspect-ratio: 16 / 9; object-fit: cover; min-height: 200px;"
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                preload="metadata"
                onloadeddata={on_loaded}
                onerror={on_error}
            >
                <source src={VSL_VIDEO_URL} type="video/mp4" />
                {"Your browser does not support the video element."}
            </video>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_five_seconds_after_mount() {
        assert_eq!(Reveal::Mount.hide_after(), 5_000);
    }

    #[test]
    fn interaction_brings_it_back_for_three_seconds() {
        assert_eq!(Reveal::Interaction.hide_after(), 3_000);
        assert!(Reveal::Interaction.hide_after() < Reveal::Mount.hide_after());
    }
}
