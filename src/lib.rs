use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{WebGl2RenderingContext, HtmlCanvasElement};

pub mod animation;
pub mod camera;
pub mod config;
pub mod math;
pub mod mesh;
pub mod render;
pub mod strand;

use animation::Timeline;
use camera::CameraRig;
use config::SceneConfig;
use math::HelixCurve;
use mesh::{rung_half, RungSide};
use render::RenderPipeline;
use strand::{Strand, StrandInstance};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine state exposed to JavaScript
#[wasm_bindgen]
pub struct DnaStrandScene {
    pipeline: RenderPipeline,
    config: SceneConfig,
    timeline: Timeline,
    strands: Vec<StrandInstance>,
}

#[wasm_bindgen]
impl DnaStrandScene {
    /// Create a new scene on the given canvas with the stock configuration
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<DnaStrandScene, JsValue> {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let mut pipeline = RenderPipeline::new(gl, width, height)
            .map_err(|e| JsValue::from_str(&e))?;

        pipeline
            .upload_rung_templates(&rung_half(RungSide::Upper), &rung_half(RungSide::Lower))
            .map_err(|e| JsValue::from_str(&e))?;

        let config = SceneConfig::default();
        let strands = build_strands(&config);
        let timeline = Timeline::new(config.timeline.duration, config.timeline.easing);

        Ok(Self {
            pipeline,
            config,
            timeline,
            strands,
        })
    }

    /// Replace the scene configuration from a YAML string
    #[wasm_bindgen]
    pub fn load_config(&mut self, yaml: &str) -> Result<(), JsValue> {
        let config = SceneConfig::from_yaml(yaml)
            .map_err(|e| JsValue::from_str(&e))?;

        self.strands = build_strands(&config);
        self.timeline = Timeline::new(config.timeline.duration, config.timeline.easing);
        self.config = config;

        web_sys::console::log_1(
            &format!("dna-strand-vis: scene loaded, {} strands", self.strands.len()).into(),
        );
        Ok(())
    }

    /// Update and render a frame; `dt` is the frame delta in seconds
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        self.timeline.update(dt);
        let playhead = self.timeline.playhead();

        for strand in &mut self.strands {
            strand.update(playhead);
        }

        let (eye, target) = CameraRig::pose(playhead);
        self.pipeline.render(
            &self.strands,
            &self.config.materials,
            &self.config.camera,
            eye,
            target,
        );
    }

    /// Resize the canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        self.pipeline.resize(width, height);
    }

    /// Jump the timeline to a playhead value in [0, 1] (debug/test seam)
    #[wasm_bindgen]
    pub fn set_playhead(&mut self, playhead: f32) {
        self.timeline.set_playhead(playhead);
    }

    /// Current timeline playhead in [0, 1)
    #[wasm_bindgen]
    pub fn playhead(&self) -> f32 {
        self.timeline.playhead()
    }

    /// Show or hide one strand
    #[wasm_bindgen]
    pub fn set_strand_visible(&mut self, index: usize, visible: bool) -> Result<(), JsValue> {
        let strand = self
            .strands
            .get_mut(index)
            .ok_or_else(|| JsValue::from_str(&format!("no strand at index {}", index)))?;
        strand.visible = visible;
        Ok(())
    }

    /// Number of strands in the scene
    #[wasm_bindgen]
    pub fn strand_count(&self) -> usize {
        self.strands.len()
    }
}

/// Build all strand instances described by a configuration
fn build_strands(config: &SceneConfig) -> Vec<StrandInstance> {
    config
        .strands
        .iter()
        .map(|sc| {
            let curve = HelixCurve::new(sc.curve, sc.scale);
            let strand = Strand::build(&curve, sc.rungs, sc.offset);
            StrandInstance::new(strand, sc.twist_rate, sc.visible)
        })
        .collect()
}
