use crate::domain::material::{MaterialId, Rgba};

use super::Simulation;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// ABGR fill for cells that are not drawn
pub const BACKGROUND_COLOR: u32 = 0xFF00_0000;

/// One cell as the renderer sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub x: u32,
    pub y: u32,
    pub drawable: bool,
    pub color: Rgba,
}

/// A single filled cell for the rect-per-cell strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRect {
    pub x: u32,
    pub y: u32,
    pub color: Rgba,
}

pub(super) fn snapshot(sim: &Simulation) -> impl Iterator<Item = CellView> + '_ {
    let materials = &*sim.materials;
    sim.grid.cells().map(move |(x, y, p)| match materials.get(p.material) {
        Some(def) => CellView {
            x,
            y,
            drawable: def.flags.is_drawable,
            color: def.color,
        },
        None => CellView {
            x,
            y,
            drawable: false,
            color: Rgba::default(),
        },
    })
}

/// Packed color per material id, background for non-drawable ones
fn palette(sim: &Simulation) -> Vec<u32> {
    (0..sim.materials.len())
        .map(|id| match sim.materials.get(id as MaterialId) {
            Some(def) if def.flags.is_drawable => def.color.to_abgr(),
            _ => BACKGROUND_COLOR,
        })
        .collect()
}

pub(super) fn pack_pixels(sim: &Simulation, out: &mut [u32]) -> usize {
    let palette = palette(sim);
    let cells = sim.grid.as_slice();
    let n = out.len().min(cells.len());
    let color_of = |material: MaterialId| palette.get(material as usize).copied().unwrap_or(BACKGROUND_COLOR);

    #[cfg(feature = "parallel")]
    {
        out[..n]
            .par_iter_mut()
            .zip(cells[..n].par_iter())
            .for_each(|(px, p)| *px = color_of(p.material));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (px, p) in out[..n].iter_mut().zip(&cells[..n]) {
            *px = color_of(p.material);
        }
    }
    n
}

pub(super) fn draw_rects(sim: &Simulation) -> Vec<DrawRect> {
    snapshot(sim)
        .filter(|cell| cell.drawable)
        .map(|cell| DrawRect {
            x: cell.x,
            y: cell.y,
            color: cell.color,
        })
        .collect()
}
