// Console logging and asset path helpers

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Public URL the site is served from, set at build time (trunk `--public-url`).
pub const BASE_URL: &str = match option_env!("GUIDE_BASE_URL") {
    Some(url) => url,
    None => "/",
};

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[info] {msg}");
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[warn] {msg}");
}

pub fn cerror(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[error] {msg}");
}

/// File-name form of a display name: lowercased, spaces become underscores.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

pub fn asset_url(rel: &str) -> String {
    let base = BASE_URL.trim_end_matches('/');
    format!("{}/{}", base, rel.trim_start_matches('/'))
}

pub fn leader_image_url(name: &str) -> String {
    asset_url(&format!("images/leaders/{}.png", slug(name)))
}

pub fn creature_image_url(name: &str) -> String {
    asset_url(&format!("images/creatures/{}.png", slug(name)))
}

/// Regions carry an explicit image; fall back to the bundled placeholder.
pub fn region_image_url(image: Option<&str>) -> String {
    match image {
        Some(img) if !img.trim().is_empty() => img.to_string(),
        _ => asset_url("placeholder.svg"),
    }
}
