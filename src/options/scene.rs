use serde::{Deserialize, Serialize};

/// Tunables for the rotating header decoration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Circumradius of the dodecahedron in world units.
    pub radius: f32,
    /// Surface color as sRGB components in 0..=1.
    pub color: [f32; 3],
    /// Surface opacity (0 = invisible, 1 = opaque).
    pub opacity: f32,
    /// Ambient light intensity (white).
    pub ambient_intensity: f32,
    /// Directional light intensity (white).
    pub light_intensity: f32,
    /// World-space position of the directional light. The light shines
    /// from here toward the origin.
    pub light_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Distance of the camera from the origin along +Z.
    pub camera_distance: f32,
    /// Radians added to the X rotation every frame.
    pub rotation_x_per_frame: f32,
    /// Radians added to the Y rotation every frame.
    pub rotation_y_per_frame: f32,
    /// Fraction of the viewport height the header surface occupies.
    pub height_fraction: f32,
}

impl SceneOptions {
    /// `#38bdf8`, the sky-blue the header decoration is drawn in.
    pub const SKY_BLUE: [f32; 3] = [0.219_608, 0.741_176, 0.972_549];
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            radius: 2.0,
            color: Self::SKY_BLUE,
            opacity: 0.35,
            ambient_intensity: 0.6,
            light_intensity: 0.8,
            light_position: [5.0, 5.0, 5.0],
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            camera_distance: 5.0,
            rotation_x_per_frame: 0.003,
            rotation_y_per_frame: 0.005,
            height_fraction: 0.4,
        }
    }
}
