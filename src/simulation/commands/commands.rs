use std::sync::Arc;

use crate::core::error::{MaterialError, ModError};
use crate::core::random::SimRng;
use crate::domain::material::{MaterialDef, MaterialId};
use crate::domain::mods::{export_mods as export_document, load_mod_document, ModLoadReport};
use crate::spatial::particle::Particle;
use crate::systems::brush;

use super::Simulation;

pub(super) fn load_mods(sim: &mut Simulation, json: &str) -> Result<ModLoadReport, ModError> {
    load_mod_document(Arc::make_mut(&mut sim.materials), json)
}

pub(super) fn register_material(
    sim: &mut Simulation,
    name: &str,
    def: MaterialDef,
) -> Result<MaterialId, MaterialError> {
    Arc::make_mut(&mut sim.materials).register(name, def)
}

pub(super) fn export_mods(sim: &Simulation) -> String {
    export_document(&sim.materials)
}

pub(super) fn reseed(sim: &mut Simulation, material: &str) {
    let fill = sim.materials.resolve_or_air(material);
    sim.grid.fill(fill);
    sim.tick = 0;
    sim.rng = SimRng::new(sim.seed);
    sim.glitch.clear();
    sim.halted = None;
    log::info!("[commands] reseeded grid with {}", material);
}

pub(super) fn place(sim: &mut Simulation, x: i32, y: i32, material: &str) -> Result<(u32, u32), MaterialError> {
    let id = sim.materials.id_of(material)?;
    Ok(sim.grid.set(x, y, Particle::new(id)))
}

pub(super) fn paint(
    sim: &mut Simulation,
    cx: i32,
    cy: i32,
    radius: u32,
    material: &str,
) -> Result<usize, MaterialError> {
    let id = sim.materials.id_of(material)?;
    Ok(brush::paint(&sim.materials, &mut sim.grid, cx, cy, radius, id))
}

pub(super) fn pointer_move(sim: &mut Simulation, x: i32, y: i32) {
    let (cx, cy) = sim.grid.clamp(x, y);
    sim.brush.x = cx;
    sim.brush.y = cy;
}

pub(super) fn set_painting(sim: &mut Simulation, painting: bool) {
    sim.brush.painting = painting;
}

pub(super) fn select_material(sim: &mut Simulation, name: &str) -> bool {
    match sim.materials.id_of(name) {
        Ok(id) => {
            sim.brush.material = id;
            true
        }
        Err(err) => {
            log::warn!("[commands] {}; keeping current selection", err);
            false
        }
    }
}

pub(super) fn set_brush_radius(sim: &mut Simulation, radius: u32) {
    sim.brush.radius = radius.max(1);
}
