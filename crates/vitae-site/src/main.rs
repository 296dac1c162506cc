//! Dioxus web app for the vitae portfolio page.
//!
//! Compiled to WASM. The page markup lives in [`page`]; [`bridge`] hooks
//! the library's visibility tracker, scroll state and header scene into
//! the component lifecycle.

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod page;

#[cfg(target_arch = "wasm32")]
fn main() {
    vitae::web::init_logging();
    dioxus::launch(page::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
