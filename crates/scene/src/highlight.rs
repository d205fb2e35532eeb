use anatomy::{Region, RegionBounds, RegionCatalog};

use crate::mesh::MeshPart;
use crate::model::BrainModel;

/// A part belongs to a region iff strictly more than this fraction of its
/// vertices satisfies the region's bounds predicate. Tolerant of meshes that
/// straddle a region boundary without over-fragmenting partial matches.
pub const MEMBERSHIP_THRESHOLD: f64 = 0.30;

/// Emissive strength applied to qualifying parts.
pub const HIGHLIGHT_EMISSIVE_INTENSITY: f64 = 0.3;

/// Selecting this region updates the description panel only; materials are
/// left untouched, including any highlight already on screen.
pub const HIGHLIGHT_EXEMPT: Region = Region::Occipital;

/// Fraction of `part`'s world-space vertices inside `bounds`.
///
/// Empty parts report 0.0.
pub fn membership_fraction(part: &MeshPart, bounds: &RegionBounds) -> f64 {
    let total = part.positions().len();
    if total == 0 {
        return 0.0;
    }
    let inside = part.world_positions().filter(|p| bounds.contains(*p)).count();
    inside as f64 / total as f64
}

/// Recomputes the highlight state for a selection.
///
/// - `None` (or an empty/unknown name) clears all highlights and nothing else.
/// - A resolvable name restores every material first, then tints the parts
///   whose membership fraction exceeds `MEMBERSHIP_THRESHOLD`.
/// - The exempt region returns before the restore pass, leaving the scene
///   exactly as it was.
///
/// Never fails: an empty model is a silent no-op, and unknown names are
/// treated as "clear", not errors.
pub fn apply_highlight(model: &mut BrainModel, catalog: &RegionCatalog, selection: Option<&str>) {
    let region = selection.and_then(Region::from_name);
    if region == Some(HIGHLIGHT_EXEMPT) {
        return;
    }

    for part in &mut model.parts {
        part.restore_material();
    }

    let Some(region) = region else {
        return;
    };
    let def = catalog.get(region);

    for part in &mut model.parts {
        if membership_fraction(part, &def.bounds) > MEMBERSHIP_THRESHOLD {
            let tinted = part
                .material()
                .with_emissive(def.highlight_color, HIGHLIGHT_EMISSIVE_INTENSITY);
            part.set_material(tinted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HIGHLIGHT_EMISSIVE_INTENSITY, apply_highlight, membership_fraction};
    use crate::material::Material;
    use crate::mesh::MeshPart;
    use crate::model::BrainModel;
    use anatomy::{Region, RegionCatalog};
    use foundation::color::Rgb;
    use foundation::math::{Mat4, Vec3};

    const FRONTAL_IN: Vec3 = Vec3 {
        x: 0.0,
        y: 0.5,
        z: 1.0,
    };
    const FRONTAL_OUT: Vec3 = Vec3 {
        x: 0.0,
        y: 0.5,
        z: -1.0,
    };

    fn gray() -> Material {
        Material::solid(Rgb::from_hex(0x808080))
    }

    fn part_with_inside_count(inside: usize, total: usize) -> MeshPart {
        let mut positions = vec![FRONTAL_IN; inside];
        positions.resize(total, FRONTAL_OUT);
        MeshPart::new("synthetic", Mat4::IDENTITY, positions, gray())
    }

    fn tint_of(model: &BrainModel, idx: usize) -> Option<Rgb> {
        model.parts[idx].material().emissive.map(|e| e.color)
    }

    #[test]
    fn membership_counts_world_space_vertices() {
        let catalog = RegionCatalog::builtin();
        let bounds = &catalog.get(Region::Frontal).bounds;

        // Model-space vertices sit behind the frontal area; the part
        // transform pushes them forward into it.
        let part = MeshPart::new(
            "shifted",
            Mat4::translation(Vec3::new(0.0, 0.0, 2.0)),
            vec![FRONTAL_OUT; 4],
            gray(),
        );
        assert_eq!(membership_fraction(&part, bounds), 1.0);

        let empty = MeshPart::new("empty", Mat4::IDENTITY, vec![], gray());
        assert_eq!(membership_fraction(&empty, bounds), 0.0);
    }

    #[test]
    fn threshold_is_strict_at_thirty_percent() {
        let catalog = RegionCatalog::builtin();

        let mut at_threshold = BrainModel::new(vec![part_with_inside_count(30, 100)]);
        apply_highlight(&mut at_threshold, &catalog, Some("frontal"));
        assert_eq!(tint_of(&at_threshold, 0), None);

        let mut above_threshold = BrainModel::new(vec![part_with_inside_count(31, 100)]);
        apply_highlight(&mut above_threshold, &catalog, Some("frontal"));
        assert_eq!(tint_of(&above_threshold, 0), Some(Rgb::from_hex(0x4caf50)));
        assert_eq!(
            above_threshold.parts[0].material().emissive.unwrap().intensity,
            HIGHLIGHT_EMISSIVE_INTENSITY
        );
    }

    #[test]
    fn highlight_is_idempotent() {
        let catalog = RegionCatalog::builtin();
        let mut model = BrainModel::new(vec![part_with_inside_count(100, 100)]);

        apply_highlight(&mut model, &catalog, Some("frontal"));
        let once = model.clone();
        apply_highlight(&mut model, &catalog, Some("frontal"));
        assert_eq!(model, once);
    }

    #[test]
    fn selecting_a_new_region_clears_the_previous_tint() {
        let catalog = RegionCatalog::builtin();
        // Part 0 is frontal, part 1 is brainstem.
        let brainstem_part = MeshPart::new(
            "stem",
            Mat4::IDENTITY,
            vec![Vec3::new(0.0, -1.0, 0.0); 10],
            gray(),
        );
        let mut model = BrainModel::new(vec![part_with_inside_count(10, 10), brainstem_part]);

        apply_highlight(&mut model, &catalog, Some("frontal"));
        assert_eq!(tint_of(&model, 0), Some(Rgb::from_hex(0x4caf50)));
        assert_eq!(tint_of(&model, 1), None);

        apply_highlight(&mut model, &catalog, Some("brainstem"));
        assert_eq!(tint_of(&model, 0), None);
        assert_eq!(tint_of(&model, 1), Some(Rgb::from_hex(0xff9800)));
    }

    #[test]
    fn clearing_restores_the_captured_originals() {
        let catalog = RegionCatalog::builtin();
        let mut model = BrainModel::new(vec![part_with_inside_count(10, 10)]);
        let pristine = model.parts[0].material().clone();

        apply_highlight(&mut model, &catalog, Some("frontal"));
        assert_ne!(model.parts[0].material(), &pristine);

        apply_highlight(&mut model, &catalog, None);
        assert_eq!(model.parts[0].material(), &pristine);
        assert_eq!(model.parts[0].original_material(), &pristine);
    }

    #[test]
    fn unknown_names_clear_without_error() {
        let catalog = RegionCatalog::builtin();
        let mut model = BrainModel::new(vec![part_with_inside_count(10, 10)]);

        apply_highlight(&mut model, &catalog, Some("frontal"));
        apply_highlight(&mut model, &catalog, Some("hippocampus"));
        assert_eq!(tint_of(&model, 0), None);

        apply_highlight(&mut model, &catalog, Some("frontal"));
        apply_highlight(&mut model, &catalog, Some(""));
        assert_eq!(tint_of(&model, 0), None);
    }

    #[test]
    fn exempt_region_touches_nothing_at_all() {
        let catalog = RegionCatalog::builtin();
        // Geometry squarely inside occipital bounds, so only the exemption
        // can explain the absence of a tint.
        let occipital_part = MeshPart::new(
            "back",
            Mat4::IDENTITY,
            vec![Vec3::new(0.0, 0.5, -1.0); 10],
            gray(),
        );
        let mut model = BrainModel::new(vec![part_with_inside_count(10, 10), occipital_part]);

        apply_highlight(&mut model, &catalog, Some("occipital"));
        assert_eq!(tint_of(&model, 0), None);
        assert_eq!(tint_of(&model, 1), None);

        // The early return precedes restoration, so a prior highlight
        // survives an occipital selection.
        apply_highlight(&mut model, &catalog, Some("frontal"));
        let highlighted = model.clone();
        apply_highlight(&mut model, &catalog, Some("occipital"));
        assert_eq!(model, highlighted);
    }

    #[test]
    fn empty_model_is_a_silent_noop() {
        let catalog = RegionCatalog::builtin();
        let mut model = BrainModel::default();
        apply_highlight(&mut model, &catalog, Some("frontal"));
        assert!(model.parts.is_empty());
    }
}
