use std::f64::consts::TAU;

use crate::options::SceneOptions;

/// Browser viewport (or native window) dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel size of the header render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// CSS `width` and `height` values that display the surface at exactly
    /// its drawing-buffer size, so the layout never stretches it.
    #[must_use]
    pub fn css_size(self) -> (String, String) {
        (format!("{}px", self.width), format!("{}px", self.height))
    }

    /// Full viewport width by `height_fraction` of the viewport height,
    /// rounded to whole pixels and never smaller than 1x1.
    #[must_use]
    pub fn for_viewport(viewport: Viewport, height_fraction: f32) -> Self {
        let width = viewport.width.round().max(1.0);
        let height = (viewport.height * f64::from(height_fraction))
            .round()
            .max(1.0);
        Self {
            width: width as u32,
            height: height as u32,
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Per-frame rotation increments in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRates {
    /// Added to the X angle each frame.
    pub x: f64,
    /// Added to the Y angle each frame.
    pub y: f64,
}

impl From<&SceneOptions> for RotationRates {
    fn from(options: &SceneOptions) -> Self {
        Self {
            x: f64::from(options.rotation_x_per_frame),
            y: f64::from(options.rotation_y_per_frame),
        }
    }
}

/// Transient orientation and surface size of the header decoration.
///
/// Angles accumulate in `f64` so the per-frame increments stay exact for
/// as long as the page stays open; they are reduced to `f32` only when
/// the model matrix is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    /// Rotation about the X axis, radians. Unbounded.
    pub rotation_x: f64,
    /// Rotation about the Y axis, radians. Unbounded.
    pub rotation_y: f64,
    /// Current render surface size.
    pub size: SurfaceSize,
}

impl SceneState {
    /// Unrotated state for a surface of `size`.
    #[must_use]
    pub const fn new(size: SurfaceSize) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            size,
        }
    }

    /// Advance one frame.
    pub fn advance(&mut self, rates: RotationRates) {
        self.rotation_x += rates.x;
        self.rotation_y += rates.y;
    }

    /// Adopt a new surface size.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Camera aspect ratio for the current size.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.size.aspect()
    }

    /// Both angles wrapped into `[0, 2π)` and narrowed for the GPU.
    #[must_use]
    pub fn wrapped_angles(&self) -> (f32, f32) {
        (
            self.rotation_x.rem_euclid(TAU) as f32,
            self.rotation_y.rem_euclid(TAU) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_full_width_and_forty_percent_tall() {
        let size = SurfaceSize::for_viewport(Viewport::new(1280.0, 800.0), 0.4);
        assert_eq!(size, SurfaceSize { width: 1280, height: 320 });
        assert_eq!(size.aspect(), 4.0);
    }

    #[test]
    fn fractional_heights_round() {
        let size = SurfaceSize::for_viewport(Viewport::new(375.0, 667.0), 0.4);
        assert_eq!(size, SurfaceSize { width: 375, height: 267 });
    }

    #[test]
    fn degenerate_viewport_clamps_to_one_pixel() {
        let size = SurfaceSize::for_viewport(Viewport::new(0.0, 0.0), 0.4);
        assert_eq!(size, SurfaceSize { width: 1, height: 1 });
        assert!(size.aspect().is_finite());
    }

    #[test]
    fn advance_accumulates_rates() {
        let mut state = SceneState::new(SurfaceSize { width: 10, height: 4 });
        let rates = RotationRates { x: 0.25, y: 0.5 };
        for _ in 0..4 {
            state.advance(rates);
        }
        assert_eq!(state.rotation_x, 1.0);
        assert_eq!(state.rotation_y, 2.0);
        assert_eq!(state.aspect(), 2.5);
    }

    #[test]
    fn angles_stay_exact_over_long_sessions() {
        // About 46 hours at 60 frames per second.
        let ticks: u32 = 10_000_000;
        let rates = RotationRates::from(&SceneOptions::default());
        let mut state = SceneState::new(SurfaceSize { width: 1, height: 1 });
        for _ in 0..ticks {
            state.advance(rates);
        }

        let expected_x = f64::from(ticks) * rates.x;
        let expected_y = f64::from(ticks) * rates.y;
        assert!((state.rotation_x - expected_x).abs() / expected_x < 1e-9);
        assert!((state.rotation_y - expected_y).abs() / expected_y < 1e-9);

        // Both axes keep turning at full speed.
        let before = state.wrapped_angles();
        state.advance(rates);
        let after = state.wrapped_angles();
        let step_x = f64::from(after.0 - before.0).rem_euclid(TAU);
        let step_y = f64::from(after.1 - before.1).rem_euclid(TAU);
        assert!((step_x - rates.x).abs() < 1e-5, "x step {step_x}");
        assert!((step_y - rates.y).abs() < 1e-5, "y step {step_y}");
    }

    #[test]
    fn wrapped_angles_stay_in_one_turn() {
        let mut state = SceneState::new(SurfaceSize { width: 1, height: 1 });
        state.rotation_x = 3.0 * TAU + 0.5;
        state.rotation_y = -0.25;
        let (x, y) = state.wrapped_angles();
        assert!((x - 0.5).abs() < 1e-5);
        assert!((f64::from(y) - (TAU - 0.25)).abs() < 1e-5);
    }

    #[test]
    fn css_size_matches_drawing_buffer() {
        let size = SurfaceSize::for_viewport(Viewport::new(1280.0, 600.0), 0.4);
        assert_eq!(
            size.css_size(),
            ("1280px".to_owned(), "240px".to_owned())
        );
    }
}
