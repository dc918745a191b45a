use wasm_bindgen::prelude::*;

use crate::core::config::{RenderStrategy, StartupConfig};

use super::{RenderAdapter, Simulation, TickLoop};

/// Frame storage the tick loop presents into
struct FrameBuffer {
    pixels: Vec<u32>,
    render: RenderStrategy,
    fatal: Option<String>,
}

impl RenderAdapter for FrameBuffer {
    fn present(&mut self, sim: &Simulation) {
        if self.render == RenderStrategy::PackedPixels {
            sim.pack_pixels(&mut self.pixels);
        }
    }

    fn fatal(&mut self, message: &str) {
        log::error!("{}", message);
        self.fatal = Some(message.to_string());
    }
}

#[wasm_bindgen]
pub struct Dust {
    sim: Simulation,
    tick_loop: TickLoop,
    frame: FrameBuffer,
}

#[wasm_bindgen]
impl Dust {
    /// Create a simulation from a JSON startup config (empty string for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Dust, JsValue> {
        let config = if config_json.trim().is_empty() {
            StartupConfig::default()
        } else {
            StartupConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let sim = Simulation::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut frame = FrameBuffer {
            pixels: vec![0u32; sim.grid().size()],
            render: sim.render_strategy(),
            fatal: None,
        };
        frame.present(&sim);
        Ok(Self {
            sim,
            tick_loop: TickLoop::default(),
            frame,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.sim.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.sim.height() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.sim.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> u32 { self.sim.zoom() }

    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u32 { self.sim.tick_interval_ms() }

    #[wasm_bindgen(getter)]
    pub fn render_strategy(&self) -> String { self.sim.render_strategy().to_string() }

    /// Advance one tick and refresh the frame. After a fatal error every call
    /// returns the same message.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        if self.tick_loop.step(&mut self.sim, &mut self.frame) {
            return Ok(());
        }
        match &self.frame.fatal {
            Some(message) => Err(JsValue::from_str(message)),
            None => Ok(()),
        }
    }

    /// Resume ticking after `stop`
    pub fn start(&mut self) {
        self.tick_loop.flag().start();
    }

    pub fn stop(&mut self) {
        self.tick_loop.flag().stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.tick_loop.flag().is_running()
    }

    // === Pointer and selection ===

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.sim.pointer_move(x, y);
    }

    pub fn pointer_down(&mut self) {
        self.sim.pointer_down();
    }

    pub fn pointer_up(&mut self) {
        self.sim.pointer_up();
    }

    pub fn select_material(&mut self, name: &str) -> bool {
        self.sim.select_material(name)
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        self.sim.set_brush_radius(radius);
    }

    // === Materials ===

    /// Load a mod document; returns the number of materials registered
    pub fn load_mods(&mut self, json: &str) -> Result<u32, JsValue> {
        let report = self
            .sim
            .load_mods(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(report.loaded.len() as u32)
    }

    pub fn export_mods(&self) -> String {
        self.sim.export_mods()
    }

    /// JSON array of every material name in id order
    pub fn material_names(&self) -> Result<String, JsValue> {
        let names: Vec<&str> = self.sim.materials().names().collect();
        serde_json::to_string(&names).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Refill the grid. Restarts the loop only if a fatal error stopped it;
    /// a host pause stays paused.
    pub fn reseed(&mut self, material: &str) {
        self.sim.reseed(material);
        if self.frame.fatal.take().is_some() {
            self.tick_loop.flag().start();
        }
        self.frame.present(&self.sim);
    }

    // === Rendering ===

    /// Pointer to the packed ABGR frame (row-major, width * height pixels)
    pub fn frame_ptr(&self) -> *const u32 {
        self.frame.pixels.as_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.frame.pixels.len()
    }

    /// Drawable cells as flat `[x, y, abgr, ...]` triples
    pub fn draw_rects(&self) -> Vec<u32> {
        self.sim
            .draw_rects()
            .into_iter()
            .flat_map(|r| [r.x, r.y, r.color.to_abgr()])
            .collect()
    }

    pub fn glitch_active(&self) -> bool {
        self.sim.glitch_active()
    }
}
