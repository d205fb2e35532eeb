use foundation::bounds::Aabb3;
use foundation::math::Mat4;

use crate::mesh::MeshPart;

/// The loaded mesh collection.
///
/// Parts are handed over by the (external) model-loading collaborator with
/// their world transforms already set; `fit_to` then normalizes the whole
/// model the way the viewer expects it at load time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BrainModel {
    pub parts: Vec<MeshPart>,
}

impl BrainModel {
    pub fn new(parts: Vec<MeshPart>) -> Self {
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.positions().is_empty())
    }

    /// World-space bounding box over every vertex of every part.
    pub fn world_aabb(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.parts.iter().flat_map(|p| p.world_positions()))
    }

    /// Uniformly scales the model so its largest dimension equals `max_size`,
    /// then recentres it at the origin. Empty or degenerate models are left
    /// untouched.
    pub fn fit_to(&mut self, max_size: f64) {
        let Some(aabb) = self.world_aabb() else {
            return;
        };
        let max_dimension = aabb.max_dimension();
        if !(max_dimension > 0.0) || !max_size.is_finite() {
            return;
        }

        let scale = Mat4::uniform_scale(max_size / max_dimension);
        for part in &mut self.parts {
            part.world_transform = scale.mul(part.world_transform);
        }

        let Some(scaled) = self.world_aabb() else {
            return;
        };
        let recentre = Mat4::translation(scaled.center().scale(-1.0));
        for part in &mut self.parts {
            part.world_transform = recentre.mul(part.world_transform);
        }
    }
}
