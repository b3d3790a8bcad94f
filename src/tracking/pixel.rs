//! Meta / Utmify ad pixels.
//!
//! The scripts are third-party; this module only injects them once and
//! forwards funnel events to the global `fbq` function they install.

use log::{debug, info, warn};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use yew::prelude::*;

use crate::config::pixels::{
    META_NOSCRIPT_BASE, META_PIXEL_IDS, META_SDK_URL, UTMIFY_PIXEL_IDS, UTMIFY_PIXEL_SCRIPT,
    UTMIFY_UTMS_SCRIPT,
};
use crate::config::pricing::CURRENCY;
use crate::error::{self, FunnelError};
use crate::quiz::pricing::to_dollars;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = fbq, catch)]
    fn fbq(command: &str, event: &str, params: JsValue) -> Result<(), JsValue>;
}

/// Everything the funnel reports.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelEvent {
    QuizStarted,
    QuestionAnswered { number: usize, total: usize },
    QuizCompleted { discount: u32 },
    FinalPage { discount: u32, final_price: u32 },
    CheckoutStarted { final_price: u32 },
    GoToStore { discount: u32 },
}

impl PixelEvent {
    pub fn name(&self) -> String {
        match self {
            PixelEvent::QuizStarted => "Lead".to_string(),
            PixelEvent::QuestionAnswered { number, .. } => format!("Question{}", number),
            PixelEvent::QuizCompleted { .. } => "CompleteRegistration".to_string(),
            PixelEvent::FinalPage { .. } => "FinalPage".to_string(),
            PixelEvent::CheckoutStarted { .. } => "InitiateCheckout".to_string(),
            PixelEvent::GoToStore { .. } => "GoToStore".to_string(),
        }
    }

    /// Standard events go through `track`, ours through `trackCustom`.
    pub fn command(&self) -> &'static str {
        match self {
            PixelEvent::QuizStarted
            | PixelEvent::QuizCompleted { .. }
            | PixelEvent::CheckoutStarted { .. } => "track",
            _ => "trackCustom",
        }
    }

    pub fn params(&self) -> PixelParams {
        match self {
            PixelEvent::QuizStarted => PixelParams::Content {
                content_name: "Quiz Started",
            },
            PixelEvent::QuestionAnswered { number, total } => PixelParams::Question {
                content_name: format!("Question {} Answered", number),
                question_id: *number,
                total_questions: *total,
            },
            PixelEvent::QuizCompleted { discount } => PixelParams::Value {
                content_name: "Quiz Completed",
                value: to_dollars(*discount),
                currency: CURRENCY,
            },
            PixelEvent::FinalPage { discount, final_price } => PixelParams::FinalPage {
                content_name: "Final Page Reached",
                total_discount: to_dollars(*discount),
                final_price: to_dollars(*final_price),
            },
            PixelEvent::CheckoutStarted { final_price } => PixelParams::Value {
                content_name: "Buy Now Clicked",
                value: to_dollars(*final_price),
                currency: CURRENCY,
            },
            PixelEvent::GoToStore { discount } => PixelParams::Store {
                content_name: "Redirecting to Store",
                final_discount: to_dollars(*discount),
                conversion_step: "purchase_intent",
            },
        }
    }
}

/// Custom data attached to an event. Every shape is a struct so it reaches
/// `fbq` as a plain object with enumerable properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PixelParams {
    Content {
        content_name: &'static str,
    },
    Question {
        content_name: String,
        question_id: usize,
        total_questions: usize,
    },
    Value {
        content_name: &'static str,
        value: f64,
        currency: &'static str,
    },
    FinalPage {
        content_name: &'static str,
        total_discount: f64,
        final_price: f64,
    },
    Store {
        content_name: &'static str,
        final_discount: f64,
        conversion_step: &'static str,
    },
}

impl PixelParams {
    pub fn to_js(&self) -> Result<JsValue, FunnelError> {
        self.serialize(&Serializer::json_compatible())
            .map_err(|e| FunnelError::Tracking(e.to_string()))
    }
}

fn pixel_loaded() -> Result<bool, FunnelError> {
    let window = error::window()?;
    Reflect::has(&window, &JsValue::from_str("fbq")).map_err(FunnelError::dom)
}

fn send(event: &PixelEvent) -> Result<(), FunnelError> {
    if !pixel_loaded()? {
        return Err(FunnelError::PixelMissing);
    }
    let params = event.params().to_js()?;
    fbq(event.command(), &event.name(), params).map_err(|e| FunnelError::Tracking(error::describe(&e)))
}

/// Fire and forget; a blocked or missing pixel never affects the funnel.
pub fn track(event: PixelEvent) {
    match send(&event) {
        Ok(()) => info!("Meta Pixel {}: {}", event.command(), event.name()),
        Err(FunnelError::PixelMissing) => debug!("Pixel not loaded, dropped {}", event.name()),
        Err(e) => warn!("Pixel event {} failed: {}", event.name(), e),
    }
}

/// Image URL the Meta pixel falls back to without JavaScript.
pub fn noscript_url(pixel_id: &str) -> String {
    format!(
        "{}?id={}&ev=PageView&noscript=1",
        META_NOSCRIPT_BASE,
        urlencoding::encode(pixel_id)
    )
}

/// Meta's loader stub followed by `init` + `PageView` for every pixel id.
pub fn meta_bootstrap(pixel_ids: &[&str]) -> String {
    let mut script = format!(
        "!function(f,b,e,v,n,t,s){{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?\
n.callMethod.apply(n,arguments):n.queue.push(arguments)}};\
if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';\
n.queue=[];t=b.createElement(e);t.async=!0;\
t.src=v;s=b.getElementsByTagName(e)[0];\
s.parentNode.insertBefore(t,s)}}(window, document,'script','{}');",
        META_SDK_URL
    );
    for id in pixel_ids {
        script.push_str(&format!("fbq('init', '{}');fbq('track', 'PageView');", id));
    }
    script
}

/// Utmify reads `window.pixelId` when its loader runs.
pub fn utmify_loader(pixel_id: &str) -> String {
    format!(
        "window.pixelId = \"{}\";var a = document.createElement(\"script\");\
a.setAttribute(\"async\", \"\");a.setAttribute(\"defer\", \"\");\
a.setAttribute(\"src\", \"{}\");document.head.appendChild(a);",
        pixel_id, UTMIFY_PIXEL_SCRIPT
    )
}

enum ScriptBody {
    Inline(String),
    External(&'static str),
}

fn inject_script(id: &str, body: ScriptBody) -> Result<(), FunnelError> {
    let document = error::document()?;
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let script = document.create_element("script").map_err(FunnelError::dom)?;
    script.set_id(id);
    match body {
        ScriptBody::Inline(source) => script.set_text_content(Some(&source)),
        ScriptBody::External(src) => {
            script.set_attribute("src", src).map_err(FunnelError::dom)?;
            script.set_attribute("async", "").map_err(FunnelError::dom)?;
            script.set_attribute("defer", "").map_err(FunnelError::dom)?;
            script.set_attribute("data-utmify-prevent-xcod-sck", "").map_err(FunnelError::dom)?;
            script.set_attribute("data-utmify-prevent-subids", "").map_err(FunnelError::dom)?;
        }
    }
    let head = document.head().ok_or(FunnelError::NoDocument)?;
    head.append_child(&script).map_err(FunnelError::dom)?;
    Ok(())
}

fn install_pixels() -> Result<(), FunnelError> {
    inject_script("facebook-pixel", ScriptBody::Inline(meta_bootstrap(&META_PIXEL_IDS)))?;
    for (i, id) in UTMIFY_PIXEL_IDS.iter().enumerate() {
        inject_script(&format!("utmify-pixel-{}", i), ScriptBody::Inline(utmify_loader(id)))?;
    }
    inject_script("utmify-utms", ScriptBody::External(UTMIFY_UTMS_SCRIPT))
}

#[function_component(PixelManager)]
pub fn pixel_manager() -> Html {
    use_effect_with_deps(
        |_| {
            match install_pixels() {
                Ok(()) => info!("Tracking pixels installed"),
                Err(e) => warn!("Tracking pixels not installed: {}", e),
            }
            || ()
        },
        (),
    );

    html! {
        <>
            { for META_PIXEL_IDS.iter().map(|id| html! {
                <noscript key={*id}>
                    <img height="1" width="1" style="display: none" src={noscript_url(id)} alt="" />
                </noscript>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params_json(event: PixelEvent) -> serde_json::Value {
        serde_json::to_value(event.params()).unwrap()
    }

    #[test]
    fn standard_and_custom_commands() {
        assert_eq!(PixelEvent::QuizStarted.command(), "track");
        assert_eq!(PixelEvent::QuizCompleted { discount: 0 }.command(), "track");
        assert_eq!(PixelEvent::CheckoutStarted { final_price: 0 }.command(), "track");
        assert_eq!(PixelEvent::QuestionAnswered { number: 1, total: 4 }.command(), "trackCustom");
        assert_eq!(PixelEvent::FinalPage { discount: 0, final_price: 0 }.command(), "trackCustom");
        assert_eq!(PixelEvent::GoToStore { discount: 0 }.command(), "trackCustom");
    }

    #[test]
    fn question_events_are_numbered() {
        let event = PixelEvent::QuestionAnswered { number: 3, total: 4 };
        assert_eq!(event.name(), "Question3");
        assert_eq!(
            params_json(event),
            json!({
                "content_name": "Question 3 Answered",
                "question_id": 3,
                "total_questions": 4,
            })
        );
    }

    #[test]
    fn money_is_reported_in_dollars() {
        let completed = params_json(PixelEvent::QuizCompleted { discount: 10_000 });
        assert_eq!(completed["value"], json!(100.0));
        assert_eq!(completed["currency"], json!("USD"));

        let checkout = params_json(PixelEvent::CheckoutStarted { final_price: 4_999 });
        assert_eq!(checkout["value"], json!(49.99));

        let final_page = params_json(PixelEvent::FinalPage { discount: 10_000, final_price: 4_999 });
        assert_eq!(final_page["total_discount"], json!(100.0));
        assert_eq!(final_page["final_price"], json!(49.99));
    }

    #[test]
    fn params_are_flat_untagged_objects() {
        let events = [
            PixelEvent::QuizStarted,
            PixelEvent::QuestionAnswered { number: 1, total: 4 },
            PixelEvent::QuizCompleted { discount: 10_000 },
            PixelEvent::FinalPage { discount: 10_000, final_price: 4_999 },
            PixelEvent::CheckoutStarted { final_price: 4_999 },
            PixelEvent::GoToStore { discount: 10_000 },
        ];
        for event in events {
            let name = event.name();
            let params = params_json(event);
            let fields = params.as_object().unwrap();
            assert!(fields.contains_key("content_name"), "{} has no content_name", name);
            assert!(fields.values().all(|v| !v.is_object()), "{} is nested", name);
        }
        assert_eq!(params_json(PixelEvent::QuizStarted), json!({ "content_name": "Quiz Started" }));
        assert_eq!(
            params_json(PixelEvent::GoToStore { discount: 10_000 }),
            json!({
                "content_name": "Redirecting to Store",
                "final_discount": 100.0,
                "conversion_step": "purchase_intent",
            })
        );
    }

    #[test]
    fn noscript_url_encodes_id() {
        assert_eq!(
            noscript_url("2350369725357420"),
            "https://www.facebook.com/tr?id=2350369725357420&ev=PageView&noscript=1"
        );
        assert_eq!(
            noscript_url("a b"),
            "https://www.facebook.com/tr?id=a%20b&ev=PageView&noscript=1"
        );
    }

    #[test]
    fn bootstrap_inits_every_pixel() {
        let script = meta_bootstrap(&["111", "222"]);
        assert!(script.starts_with("!function(f,b,e,v,n,t,s){if(f.fbq)return;"));
        assert!(script.contains("'https://connect.facebook.net/en_US/fbevents.js'"));
        assert!(script.contains("fbq('init', '111');fbq('track', 'PageView');"));
        assert!(script.contains("fbq('init', '222');fbq('track', 'PageView');"));
    }

    #[test]
    fn utmify_loader_sets_pixel_id() {
        let script = utmify_loader("abc");
        assert!(script.starts_with("window.pixelId = \"abc\";"));
        assert!(script.contains(UTMIFY_PIXEL_SCRIPT));
    }
}
