use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Prices are kept in cents so the discount arithmetic stays exact.
pub mod pricing {
    /// Discount earned for every answered question.
    pub const DISCOUNT_UNIT_CENTS: u32 = 2_500;
    /// Anchor price shown struck through on the offer.
    pub const ORIGINAL_PRICE_CENTS: u32 = 14_999;
    /// The offer never goes below this, whatever the discount.
    pub const FLOOR_PRICE_CENTS: u32 = 4_999;
    pub const CURRENCY: &str = "USD";
}

pub mod timing {
    /// Delay between an accepted answer and moving on.
    pub const AUTO_ADVANCE_MS: u32 = 1_500;
    pub const NOTIFICATION_VISIBLE_MS: u32 = 3_000;
    pub const NOTIFICATION_EXIT_MS: u32 = 500;
    pub const REVEAL_BASE_DELAY_MS: u32 = 500;
    pub const REVEAL_INTERVAL_MS: u32 = 1_000;
    pub const CAROUSEL_TICK_MS: u32 = 16;
    pub const MUTE_BUTTON_INITIAL_MS: u32 = 5_000;
    pub const MUTE_BUTTON_REVEAL_MS: u32 = 3_000;
    /// Waits before the second and third playback attempts.
    pub const SOUND_RETRY_BACKOFF_MS: [u32; 2] = [100, 200];
}

pub mod carousel {
    pub const IMAGE_WIDTH_PX: u32 = 200;
    pub const IMAGE_GAP_PX: u32 = 12;
    pub const STEP_PX: f64 = 0.5;
    /// Copies of the strip rendered back to back.
    pub const REPEATS: usize = 3;
}

pub mod media {
    pub const NOTIFICATION_SOUND_URL: &str =
        "https://cdn.shopify.com/s/files/1/0946/2290/8699/files/notifica_o-venda.mp3?v=1749150271";
    pub const NOTIFICATION_SOUND_VOLUME: f64 = 0.8;
    pub const VSL_VIDEO_URL: &str =
        "https://pub-715e1058d62e45dca1d7229ecb1e7480.r2.dev/TEMU%20VSL%2001.mp4";
    pub const PRODUCT_THUMBNAIL: &str = "box_temu.png";
}

pub mod storefront {
    pub const BUY_NOW_URL: &str = "https://www.temusales.shop/";
}

pub mod pixels {
    pub const META_PIXEL_IDS: [&str; 2] = ["2350369725357420", "1258450491879496"];
    pub const META_SDK_URL: &str = "https://connect.facebook.net/en_US/fbevents.js";
    pub const META_NOSCRIPT_BASE: &str = "https://www.facebook.com/tr";
    pub const UTMIFY_PIXEL_IDS: [&str; 2] = ["6866499592b79dbafc78f878", "685891b70625ccf1fd3a54bc"];
    pub const UTMIFY_PIXEL_SCRIPT: &str = "https://cdn.utmify.com.br/scripts/pixel/pixel.js";
    pub const UTMIFY_UTMS_SCRIPT: &str = "https://cdn.utmify.com.br/scripts/utms/latest.js";
}
