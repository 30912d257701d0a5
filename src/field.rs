// field.rs
// Static lattice of field arrows drawn around the central charge

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::config;

/// One arrow of the decorative field lattice, sized by inverse square
/// distance from the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldArrow {
    pub origin: Vec3,
    /// Unit vector pointing radially outward
    pub direction: Vec3,
    pub length: f32,
    pub head_length: f32,
    pub head_width: f32,
}

impl FieldArrow {
    pub fn at(origin: Vec3) -> Self {
        let dist = origin.mag();
        let scale = 1.0 / (dist * dist + config::FIELD_ARROW_SOFTENING);
        Self {
            origin,
            direction: origin.normalized(),
            length: config::FIELD_ARROW_LENGTH * scale,
            head_length: config::FIELD_ARROW_HEAD_LENGTH * scale,
            head_width: config::FIELD_ARROW_HEAD_WIDTH * scale,
        }
    }
}

/// Arrows at every lattice point of `[-grid_size, grid_size]³ * spacing`
/// except the origin.
pub fn field_arrows(grid_size: i32, spacing: f32) -> Vec<FieldArrow> {
    let g = grid_size.max(0);
    let mut arrows = Vec::new();
    for x in -g..=g {
        for y in -g..=g {
            for z in -g..=g {
                if x == 0 && y == 0 && z == 0 {
                    continue;
                }
                let pos = Vec3::new(x as f32, y as f32, z as f32) * spacing;
                arrows.push(FieldArrow::at(pos));
            }
        }
    }
    arrows
}

/// The lattice drawn by default.
pub fn default_field_arrows() -> Vec<FieldArrow> {
    field_arrows(config::FIELD_GRID_SIZE, config::FIELD_GRID_SPACING)
}
