use yew::prelude::*;
use log::info;

mod config;
mod error;
mod quiz {
    pub mod questions;
    pub mod pricing;
    pub mod session;
}
mod offer {
    pub mod carousel;
    pub mod reveal;
}
mod media {
    pub mod audio;
    pub mod retry;
    pub mod video;
}
mod tracking {
    pub mod pixel;
}
mod components {
    pub mod notification;
}
mod pages {
    pub mod intro;
    pub mod offer;
    pub mod question;
    pub mod quiz;
}

use pages::quiz::Quiz;
use tracking::pixel::PixelManager;

const GLOBAL_STYLE: &str = r#"
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .funnel-background {
        min-height: 100vh;
        background: linear-gradient(to bottom right, #7c2d12, #9a3412, #dc2626);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        box-sizing: border-box;
    }
    .card {
        width: 100%;
        margin: 0 0.5rem;
        background: white;
        border-radius: 12px;
        padding: 1.5rem;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
        box-sizing: border-box;
    }
    .primary-button {
        width: 100%;
        background: #f97316;
        color: white;
        border: none;
        border-radius: 8px;
        padding: 0.875rem;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
    }
    .primary-button:hover { background: #ea580c; }
    .primary-button:disabled { opacity: 0.5; cursor: not-allowed; }
    .primary-button.processing { background: #6b7280; }
    .outline-button {
        width: 100%;
        background: transparent;
        color: #f97316;
        border: 1px solid #f97316;
        border-radius: 8px;
        padding: 0.875rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .outline-button:hover { background: #fff7ed; }
    .option-row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem;
        border-radius: 8px;
        border: 1px solid #e5e7eb;
        margin-bottom: 0.75rem;
        transition: background 0.2s;
    }
    .option-row:hover { background: #ffedd5; }
    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes pulse { 50% { opacity: 0.5; } }
    @keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
    .spinner {
        width: 2rem;
        height: 2rem;
        border: 2px solid #f97316;
        border-top-color: transparent;
        border-radius: 9999px;
        animation: spin 1s linear infinite;
    }
    .spinner.small { width: 1rem; height: 1rem; border-color: white; border-top-color: transparent; }
    .pulse, .check-pulse { animation: pulse 2s ease-in-out infinite; }
    .ping { animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite; }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{GLOBAL_STYLE}</style>
            <PixelManager />
            <Quiz />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting quiz funnel");
    yew::Renderer::<App>::new().render();
}
