use anatomy::Region;
use foundation::color::Rgb;
use foundation::math::{Mat4, Vec3};
use scene::{BrainModel, Material, MeshPart};

/// Stand-in model for running the viewer without a real asset: one small
/// vertex cluster per region, placed squarely inside that region's bounds
/// (and staying inside them through load-time normalization).
pub fn demo_model() -> BrainModel {
    let parts = Region::ALL
        .into_iter()
        .map(|region| {
            let positions = match region {
                // Temporal is bilateral: clusters on both sides of the
                // midline, all satisfying the |x| threshold.
                Region::Temporal => {
                    let mut v = cluster(Vec3::new(1.0, -0.1, 0.1));
                    v.extend(cluster(Vec3::new(-1.0, -0.1, 0.1)));
                    v
                }
                Region::Frontal => cluster(Vec3::new(0.0, 0.9, 1.25)),
                Region::Parietal => cluster(Vec3::new(0.0, 1.15, 0.1)),
                Region::Occipital => cluster(Vec3::new(0.0, 1.0, -0.8)),
                Region::Cerebellum => cluster(Vec3::new(0.0, -0.55, -1.1)),
                Region::Brainstem => cluster(Vec3::new(0.0, -1.4, 0.0)),
            };
            MeshPart::new(
                format!("{region}_demo"),
                Mat4::IDENTITY,
                positions,
                Material::solid(Rgb::from_hex(0x9e9e9e)),
            )
        })
        .collect();

    BrainModel::new(parts)
}

/// Corners of a small cube around `center`.
fn cluster(center: Vec3) -> Vec<Vec3> {
    const R: f64 = 0.05;
    let mut out = Vec::with_capacity(8);
    for dx in [-R, R] {
        for dy in [-R, R] {
            for dz in [-R, R] {
                out.push(center + Vec3::new(dx, dy, dz));
            }
        }
    }
    out
}
