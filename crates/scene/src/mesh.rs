use foundation::math::{Mat4, Vec3};

use crate::material::Material;

/// One renderable geometry fragment of the loaded model.
///
/// The pristine material is captured exactly once, at construction, before
/// any highlighting can happen; it is the only source of truth for the
/// unhighlighted appearance and is never overwritten afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    pub name: String,
    pub world_transform: Mat4,
    positions: Vec<Vec3>,
    material: Material,
    original: Material,
}

impl MeshPart {
    pub fn new(
        name: impl Into<String>,
        world_transform: Mat4,
        positions: Vec<Vec3>,
        material: Material,
    ) -> Self {
        let original = material.clone();
        Self {
            name: name.into(),
            world_transform,
            positions,
            material,
            original,
        }
    }

    /// Model-space vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex positions transformed into world space.
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .iter()
            .map(|p| self.world_transform.transform_point(*p))
    }

    /// The material the renderer should display.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The pristine material captured at construction.
    pub fn original_material(&self) -> &Material {
        &self.original
    }

    pub(crate) fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Swaps in a fresh copy of the captured original.
    pub(crate) fn restore_material(&mut self) {
        self.material = self.original.clone();
    }
}
