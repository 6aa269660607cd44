use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Scene appearance and frame pacing.
pub struct DisplayOptions {
    /// Clear color (linear RGB).
    #[schemars(skip)]
    pub background: [f32; 3],
    /// Base color of the model (linear RGB).
    #[schemars(skip)]
    pub model_color: [f32; 3],
    /// Surface metalness.
    #[schemars(title = "Metalness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub metalness: f32,
    /// Surface roughness.
    #[schemars(title = "Roughness", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// Camera distance from the model along +z.
    #[schemars(title = "Camera Distance", range(min = 5.0, max = 100.0), extend("step" = 0.5))]
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Frame cap (0 = unlimited).
    #[schemars(skip)]
    pub target_fps: u32,
    /// Viewport width at and below which the model is drawn at
    /// `min_scale`.
    #[schemars(skip)]
    pub scale_min_width: f32,
    /// Viewport width at and above which the model is drawn at full size.
    #[schemars(skip)]
    pub scale_max_width: f32,
    /// Smallest uniform model scale on narrow viewports.
    #[schemars(title = "Narrow Scale", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub min_scale: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            model_color: [0.745, 0.631, 0.133],
            metalness: 1.0,
            roughness: 0.3,
            camera_distance: 30.0,
            fovy: 45.0,
            target_fps: 0,
            scale_min_width: 300.0,
            scale_max_width: 1000.0,
            min_scale: 0.7,
        }
    }
}

/// Hermite smoothstep of `x` between `min` and `max`.
fn smoothstep(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let t = (x - min) / (max - min);
    t * t * (3.0 - 2.0 * t)
}

/// Uniform scene scale for a viewport `width` pixels wide.
///
/// Narrow viewports shrink the model toward `min_scale` so it stays
/// framed on phones.
#[must_use]
pub fn responsive_scale(width: f32, options: &DisplayOptions) -> f32 {
    let t = smoothstep(width, options.scale_min_width, options.scale_max_width);
    t * (1.0 - options.min_scale) + options.min_scale
}
