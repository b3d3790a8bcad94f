use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Function;
use web_sys::{AddEventListenerOptions, AudioContext, AudioContextState, Document, HtmlAudioElement};
use yew::prelude::*;

use super::retry::{retry, RetryPolicy};
use crate::config::media::{NOTIFICATION_SOUND_URL, NOTIFICATION_SOUND_VOLUME};
use crate::error::{self, FunnelError};

const FIRST_INTERACTION_EVENTS: [&str; 3] = ["touchstart", "click", "keydown"];

fn new_audio() -> Result<HtmlAudioElement, FunnelError> {
    let audio = HtmlAudioElement::new_with_src(NOTIFICATION_SOUND_URL).map_err(FunnelError::dom)?;
    audio.set_volume(NOTIFICATION_SOUND_VOLUME);
    Ok(audio)
}

/// Builds the handle used for the first playback attempt. Must run inside a
/// user gesture for mobile browsers to unlock audio.
fn prime_audio() -> Result<HtmlAudioElement, FunnelError> {
    let audio = new_audio()?;
    audio.set_preload("auto");

    // Some mobile browsers start the shared context suspended.
    match AudioContext::new() {
        Ok(context) => {
            if context.state() == AudioContextState::Suspended {
                let _ = context.resume();
            }
        }
        Err(e) => debug!("AudioContext unavailable: {}", error::describe(&e)),
    }
    Ok(audio)
}

async fn start_playback(audio: &HtmlAudioElement) -> Result<(), FunnelError> {
    let promise = audio.play().map_err(FunnelError::rejected)?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(FunnelError::rejected)
}

fn remove_listeners(document: &Document, callback: &Function) {
    for event in FIRST_INTERACTION_EVENTS {
        let _ = document.remove_event_listener_with_callback(event, callback);
    }
}

/// Sale sound played after every accepted answer.
#[derive(Clone, Default)]
pub struct NotificationSound {
    primed: Rc<RefCell<Option<HtmlAudioElement>>>,
}

impl NotificationSound {
    pub fn is_ready(&self) -> bool {
        self.primed.borrow().is_some()
    }

    fn prime(&self) {
        if self.is_ready() {
            return;
        }
        match prime_audio() {
            Ok(audio) => {
                *self.primed.borrow_mut() = Some(audio);
                info!("Audio system initialized successfully");
            }
            Err(e) => warn!("Error initializing audio: {}", e),
        }
    }

    /// Best effort. Autoplay rejections are retried with fresh handles and
    /// then dropped silently.
    pub fn play(&self) {
        let Some(primed) = self.primed.borrow().clone() else {
            info!("Audio not initialized");
            return;
        };
        primed.set_current_time(0.0);

        spawn_local(async move {
            let outcome = retry(
                RetryPolicy::notification_sound(),
                |attempt| {
                    let primed = primed.clone();
                    async move {
                        let audio = if attempt == 0 { primed } else { new_audio()? };
                        start_playback(&audio).await
                    }
                },
                TimeoutFuture::new,
            )
            .await;

            match outcome {
                Ok(attempt) => debug!("Notification sound played on attempt {}", attempt),
                Err(e) => info!("Notification sound abandoned: {}", e),
            }
        });
    }
}

/// Hands out the notification sound and arms it on the first click, touch or
/// key press anywhere on the page. The listeners go away after that first
/// interaction or when the component unmounts, whichever comes first.
#[hook]
pub fn use_notification_sound() -> NotificationSound {
    let sound = (*use_state(NotificationSound::default)).clone();

    {
        let sound = sound.clone();
        use_effect_with_deps(move |_| {
            let registered: Rc<RefCell<Option<(Document, Function)>>> = Rc::new(RefCell::new(None));

            let callback = {
                let registered = registered.clone();
                Closure::wrap(Box::new(move || {
                    sound.prime();
                    if let Some((document, callback)) = registered.borrow_mut().take() {
                        remove_listeners(&document, &callback);
                    }
                }) as Box<dyn FnMut()>)
            };

            match error::document() {
                Ok(document) => {
                    let function: Function = callback.as_ref().unchecked_ref::<Function>().clone();
                    let passive = AddEventListenerOptions::new();
                    passive.set_passive(true);
                    for event in FIRST_INTERACTION_EVENTS {
                        let added = if event == "touchstart" {
                            document.add_event_listener_with_callback_and_add_event_listener_options(
                                event, &function, &passive,
                            )
                        } else {
                            document.add_event_listener_with_callback(event, &function)
                        };
                        if let Err(e) = added {
                            warn!("Could not listen for {}: {}", event, error::describe(&e));
                        }
                    }
                    *registered.borrow_mut() = Some((document, function));
                }
                Err(e) => warn!("Audio unlock skipped: {}", e),
            }

            move || {
                if let Some((document, function)) = registered.borrow_mut().take() {
                    remove_listeners(&document, &function);
                }
                drop(callback);
            }
        }, ());
    }

    sound
}
