use anatomy::{Region, RegionCatalog};
use foundation::color::Rgb;
use foundation::math::{Vec2, Vec3};
use scene::Camera;

use crate::placement::{DEFAULT_Z_INDEX, placement_for};

/// On-screen state of one region's label.
///
/// Created when the model finishes loading, then mutated every frame by
/// `update_labels`. The UI layer owning the actual widgets only reads this.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelState {
    pub region: Region,
    pub text: String,
    pub color: Rgb,
    /// Fixed anchor in model space.
    pub anchor: Vec3,
    pub visible: bool,
    /// Last computed position; stale while `visible` is false.
    pub screen_px: Vec2,
    pub z_index: i32,
}

/// One hidden label per region, in `Region::ALL` order.
pub fn create_labels(catalog: &RegionCatalog) -> Vec<LabelState> {
    catalog
        .iter()
        .map(|def| LabelState {
            region: def.region,
            text: def.label_text.clone(),
            color: def.highlight_color,
            anchor: def.label_anchor,
            visible: false,
            screen_px: Vec2::ZERO,
            z_index: DEFAULT_Z_INDEX,
        })
        .collect()
}

/// Per-frame label pass.
///
/// For every label: project the anchor through the camera; hide on a
/// non-finite result or a behind-camera depth (`ndc.z > 1`), regardless of
/// the region rule; otherwise apply the region's placement policy and, when
/// it says show, the per-view pixel offset.
pub fn update_labels(labels: &mut [LabelState], camera: &Camera) {
    let view_proj = camera.view_proj();
    for label in labels {
        let ndc = view_proj.project_point(label.anchor);
        let base_px = camera.ndc_to_pixels(ndc);
        if !base_px.is_finite() {
            label.visible = false;
            continue;
        }

        let behind = ndc.z > 1.0;
        let placement = placement_for(label.region, camera);
        label.z_index = placement.z_index;
        label.visible = placement.visible && !behind;
        if label.visible {
            label.screen_px = base_px + placement.offset_px;
        }
    }
}
