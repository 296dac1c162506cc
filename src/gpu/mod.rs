//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and the small helpers the
//! header pipeline shares.

/// Shared wgpu boilerplate helpers.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
