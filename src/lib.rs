// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! View-state core and decorative header scene for a single-page
//! portfolio site.
//!
//! The page itself (markup, components, styling) lives in the
//! `vitae-site` crate. This crate holds everything with behavior worth
//! testing on its own:
//!
//! - [`section::SectionId`] - the six page sections and their anchors
//! - [`visibility`] - reveal-on-scroll tracking over an intersection
//!   observer
//! - [`scroll`] - navbar, mobile menu and back-to-top state
//! - [`scene::SceneController`] - lifecycle of the rotating header solid,
//!   drawn with wgpu by [`renderer`]
//! - [`content::Resume`] - the page text, parsed from TOML
//! - [`options::Options`] - runtime configuration
//!
//! With the `web` feature on `wasm32`, [`web`] binds all of the above to
//! the browser. The `viewer` feature adds a winit preview window for the
//! header scene.

pub mod camera;
pub mod content;
pub mod error;
pub mod gpu;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod scroll;
pub mod section;
pub mod visibility;

#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use error::VitaeError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
