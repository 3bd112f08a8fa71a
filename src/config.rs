//! Scene configuration: strand layout, materials, camera, and timeline.
//!
//! Loaded from YAML; the default configuration reproduces the stock scene
//! (one visible primary strand, two hidden companions).

use serde::{Serialize, Deserialize};
use crate::animation::Easing;
use crate::math::{HelixKind, Vec3};

/// Timeline cycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default)]
    pub easing: Easing,
}

fn default_duration() -> f32 {
    crate::animation::DEFAULT_CYCLE_SECONDS
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            easing: Easing::Linear,
        }
    }
}

/// Perspective camera settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_fov")]
    pub fov_degrees: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

fn default_fov() -> f32 {
    60.0
}

fn default_near() -> f32 {
    0.01
}

fn default_far() -> f32 {
    1000.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: default_fov(),
            near: default_near(),
            far: default_far(),
        }
    }
}

/// Color pair for one fresnel material
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Edge (grazing-angle) color as a hex triplet
    pub edge: u32,
    /// Base (facing) color as a hex triplet
    pub base: u32,
}

impl MaterialConfig {
    pub fn edge_color(&self) -> Vec3 {
        Vec3::from_hex(self.edge)
    }

    pub fn base_color(&self) -> Vec3 {
        Vec3::from_hex(self.base)
    }
}

/// Scalar coefficients shared by both fresnel materials
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FresnelConfig {
    #[serde(default = "default_bias")]
    pub bias: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_power")]
    pub power: f32,
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

fn default_bias() -> f32 {
    0.1
}

fn default_scale() -> f32 {
    1.0
}

fn default_power() -> f32 {
    1.5
}

fn default_alpha() -> f32 {
    0.75
}

impl Default for FresnelConfig {
    fn default() -> Self {
        Self {
            bias: default_bias(),
            scale: default_scale(),
            power: default_power(),
            alpha: default_alpha(),
        }
    }
}

/// Materials for the two rung halves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsConfig {
    pub upper: MaterialConfig,
    pub lower: MaterialConfig,
    #[serde(default)]
    pub fresnel: FresnelConfig,
}

impl Default for MaterialsConfig {
    fn default() -> Self {
        Self {
            upper: MaterialConfig { edge: 0xB4F1FF, base: 0x130F49 },
            lower: MaterialConfig { edge: 0xE9F9FF, base: 0x34A1CD },
            fresnel: FresnelConfig::default(),
        }
    }
}

/// One strand instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrandConfig {
    pub curve: HelixKind,
    #[serde(default = "default_curve_scale")]
    pub scale: f32,
    #[serde(default = "default_rungs")]
    pub rungs: usize,
    #[serde(default)]
    pub offset: Vec3,
    /// Playhead multiplier fed to the strand's twist update
    #[serde(default = "default_twist_rate")]
    pub twist_rate: f32,
    #[serde(default)]
    pub visible: bool,
}

fn default_curve_scale() -> f32 {
    1.0
}

fn default_rungs() -> usize {
    crate::strand::DEFAULT_RUNG_TOTAL
}

fn default_twist_rate() -> f32 {
    1.0
}

/// Complete scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub materials: MaterialsConfig,
    pub strands: Vec<StrandConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            camera: CameraConfig::default(),
            materials: MaterialsConfig::default(),
            strands: vec![
                StrandConfig {
                    curve: HelixKind::Primary,
                    scale: 4.5,
                    rungs: 50,
                    offset: Vec3::new(1.0, -10.0, 0.0),
                    twist_rate: 8.0,
                    visible: true,
                },
                StrandConfig {
                    curve: HelixKind::Double,
                    scale: 5.0,
                    rungs: 100,
                    offset: Vec3::new(10.0, -30.0, -4.0),
                    twist_rate: 6.0,
                    visible: false,
                },
                StrandConfig {
                    curve: HelixKind::Reverse,
                    scale: 4.0,
                    rungs: 100,
                    offset: Vec3::new(-10.0, -28.0, -4.0),
                    twist_rate: 7.0,
                    visible: false,
                },
            ],
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.strands.is_empty() {
            return Err("scene needs at least one strand".to_string());
        }
        if !(self.timeline.duration > 0.0) {
            return Err(format!(
                "timeline duration must be positive, got {}",
                self.timeline.duration
            ));
        }
        for (i, strand) in self.strands.iter().enumerate() {
            if !(strand.scale > 0.0 && strand.scale.is_finite()) {
                return Err(format!("strand {}: curve scale must be positive", i));
            }
            if !strand.twist_rate.is_finite() {
                return Err(format!("strand {}: twist rate must be finite", i));
            }
        }
        Ok(())
    }
}
