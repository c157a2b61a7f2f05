#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod boot;
pub mod motion;
pub mod profile;
pub mod section;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. hot reload) is harmless, the first logger stays
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
