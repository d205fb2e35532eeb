use anatomy::Region;
use foundation::math::Vec2;
use scene::Camera;

/// Per-frame placement decision for one region's label.
///
/// `offset_px` is added to the label's base projected position; `z_index`
/// settles the stacking order when labels overlap on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub visible: bool,
    pub offset_px: Vec2,
    pub z_index: i32,
}

pub const DEFAULT_Z_INDEX: i32 = 1000;

impl Placement {
    fn hidden() -> Self {
        Self {
            visible: false,
            offset_px: Vec2::ZERO,
            z_index: DEFAULT_Z_INDEX,
        }
    }

    fn shown(dx: f64, dy: f64, z_index: i32) -> Self {
        Self {
            visible: true,
            offset_px: Vec2::new(dx, dy),
            z_index,
        }
    }
}

/// Placement policy for one region, a pure function of the camera pose.
///
/// Each region's rule is independent and evaluated fresh every frame; there
/// is no hysteresis, so a fast-moving camera can flicker a label at a rule
/// boundary. Comparisons drive all branching, so every camera position
/// (including the exact center) resolves to some branch.
pub fn placement_for(region: Region, camera: &Camera) -> Placement {
    match region {
        Region::Frontal => frontal(camera),
        Region::Parietal => parietal(camera),
        Region::Temporal => temporal(camera),
        Region::Occipital => occipital(camera),
        Region::Cerebellum => cerebellum(camera),
        Region::Brainstem => brainstem(camera),
    }
}

/// Shown when the camera is mostly in front, or to the left-front.
fn frontal(camera: &Camera) -> Placement {
    let c = camera.position;
    let left_side = c.x < -c.z.abs() * 0.5;
    if !(c.z > c.x.abs() * 0.3 || left_side) {
        return Placement::hidden();
    }

    if c.y < -0.5 {
        Placement::shown(0.0, -60.0, 1100)
    } else if left_side {
        Placement::shown(-60.0, 0.0, 1100)
    } else {
        Placement::shown(camera.azimuth().sin() * 20.0, 0.0, 1100)
    }
}

/// Shown whenever the camera sits above the model's equator.
fn parietal(camera: &Camera) -> Placement {
    let c = camera.position;
    if !(c.y > 0.0) {
        return Placement::hidden();
    }

    if c.y > c.z.abs() {
        // Top-down view wants the label pushed further up.
        Placement::shown(camera.azimuth().sin() * 10.0, -40.0, DEFAULT_Z_INDEX)
    } else {
        Placement::shown(camera.azimuth().sin() * 15.0, -30.0, DEFAULT_Z_INDEX)
    }
}

/// Shown from either side or the front, never from behind.
fn temporal(camera: &Camera) -> Placement {
    let c = camera.position;
    let side_view = c.x.abs() > c.z.abs() * 0.5;
    let shown = (side_view && c.z > -c.x.abs() * 0.3) || (c.y < -0.5 && c.z > 0.0);
    if !shown || c.z < 0.0 {
        return Placement::hidden();
    }

    if c.y < -0.5 {
        Placement::shown(0.0, -30.0, 1050)
    } else if c.x > 0.0 {
        Placement::shown(60.0, 0.0, DEFAULT_Z_INDEX)
    } else {
        Placement::shown(-60.0, 0.0, DEFAULT_Z_INDEX)
    }
}

/// Shown when the camera is behind, more behind than to the side, and not
/// far below.
fn occipital(camera: &Camera) -> Placement {
    let c = camera.position;
    if !(c.z < 0.0 && c.x.abs() < c.z.abs() && c.y > -0.3) {
        return Placement::hidden();
    }

    let mut dx = -camera.azimuth().sin() * 30.0;
    let mut dy = 0.0;
    if c.y > 0.3 {
        dy += 20.0;
    } else if c.y < -0.3 {
        dy -= 20.0;
    }
    if c.x.abs() > c.z.abs() * 0.8 {
        // Extreme side angles get a gentler horizontal sway.
        dx *= 0.5;
    }
    Placement::shown(dx, dy, DEFAULT_Z_INDEX)
}

/// Shown from below or from behind, hidden from the front and from far
/// above.
fn cerebellum(camera: &Camera) -> Placement {
    let c = camera.position;
    if !(c.y < 0.5) {
        return Placement::hidden();
    }

    if c.y < -0.5 {
        Placement::shown(40.0, 20.0, 1200)
    } else if c.z < 0.0 {
        let mut dx = camera.azimuth().sin() * 30.0;
        if c.x.abs() > c.z.abs() * 0.5 {
            dx += 30.0;
        }
        Placement::shown(dx, 40.0, 1000)
    } else {
        Placement::hidden()
    }
}

/// Shown whenever the camera is below center.
fn brainstem(camera: &Camera) -> Placement {
    let c = camera.position;
    if !(c.y < 0.0) {
        return Placement::hidden();
    }

    if c.y < -0.5 {
        Placement::shown(0.0, 40.0, 1100)
    } else {
        Placement::shown(0.0, 60.0, DEFAULT_Z_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_Z_INDEX, Placement, placement_for};
    use anatomy::Region;
    use foundation::math::{Vec2, Vec3};
    use scene::Camera;

    fn camera_at(x: f64, y: f64, z: f64) -> Camera {
        Camera::orbit(Vec3::new(x, y, z), Vec2::new(1920.0, 1080.0))
    }

    fn place(region: Region, x: f64, y: f64, z: f64) -> Placement {
        placement_for(region, &camera_at(x, y, z))
    }

    #[test]
    fn front_view_shows_only_frontal() {
        // Default load position: directly in front.
        let shown: Vec<Region> = Region::ALL
            .into_iter()
            .filter(|r| place(*r, 0.0, 0.0, 5.0).visible)
            .collect();
        assert_eq!(shown, vec![Region::Frontal]);
    }

    #[test]
    fn bottom_view_flips_cerebellum_and_brainstem_on() {
        let cerebellum = place(Region::Cerebellum, 0.0, -3.0, 0.0);
        assert!(cerebellum.visible);
        assert_eq!(cerebellum.offset_px, Vec2::new(40.0, 20.0));
        assert_eq!(cerebellum.z_index, 1200);

        let brainstem = place(Region::Brainstem, 0.0, -3.0, 0.0);
        assert!(brainstem.visible);
        assert_eq!(brainstem.offset_px, Vec2::new(0.0, 40.0));
        assert_eq!(brainstem.z_index, 1100);

        assert!(!place(Region::Frontal, 0.0, -3.0, 0.0).visible);
    }

    #[test]
    fn frontal_bottom_view_shifts_down() {
        // Below and slightly in front, so the frontal show rule still holds.
        let p = place(Region::Frontal, 0.0, -3.0, 1.0);
        assert!(p.visible);
        assert_eq!(p.offset_px, Vec2::new(0.0, -60.0));
    }

    #[test]
    fn frontal_left_view_shifts_left() {
        let p = place(Region::Frontal, -5.0, 0.0, 1.0);
        assert!(p.visible);
        assert_eq!(p.offset_px, Vec2::new(-60.0, 0.0));
    }

    #[test]
    fn frontal_sways_with_azimuth_in_plain_front_view() {
        let cam = camera_at(1.0, 0.0, 5.0);
        let p = placement_for(Region::Frontal, &cam);
        assert!(p.visible);
        assert!((p.offset_px.x - cam.azimuth().sin() * 20.0).abs() < 1e-12);
        assert_eq!(p.offset_px.y, 0.0);
    }

    #[test]
    fn parietal_needs_elevation_and_lifts_more_from_the_top() {
        assert!(!place(Region::Parietal, 0.0, 0.0, 5.0).visible);
        assert!(!place(Region::Parietal, 0.0, -1.0, 5.0).visible);

        let oblique = place(Region::Parietal, 0.0, 1.0, 5.0);
        assert!(oblique.visible);
        assert_eq!(oblique.offset_px.y, -30.0);

        let top_down = place(Region::Parietal, 0.0, 6.0, 1.0);
        assert!(top_down.visible);
        assert_eq!(top_down.offset_px.y, -40.0);
    }

    #[test]
    fn temporal_picks_a_side_and_never_shows_from_behind() {
        let right = place(Region::Temporal, 5.0, 0.0, 1.0);
        assert!(right.visible);
        assert_eq!(right.offset_px, Vec2::new(60.0, 0.0));

        let left = place(Region::Temporal, -5.0, 0.0, 1.0);
        assert!(left.visible);
        assert_eq!(left.offset_px, Vec2::new(-60.0, 0.0));

        assert!(!place(Region::Temporal, 5.0, 0.0, -2.0).visible);
        assert!(!place(Region::Temporal, 0.0, 0.0, 5.0).visible);

        let below = place(Region::Temporal, 0.2, -1.0, 2.0);
        assert!(below.visible);
        assert_eq!(below.offset_px, Vec2::new(0.0, -30.0));
        assert_eq!(below.z_index, 1050);
    }

    #[test]
    fn occipital_needs_a_mostly_behind_camera() {
        assert!(place(Region::Occipital, 0.0, 0.0, -5.0).visible);
        assert!(!place(Region::Occipital, 0.0, 0.0, 5.0).visible);
        // More side than behind.
        assert!(!place(Region::Occipital, -6.0, 0.0, -5.0).visible);
        // Too far below.
        assert!(!place(Region::Occipital, 0.0, -1.0, -5.0).visible);
    }

    #[test]
    fn occipital_offset_adjusts_with_elevation_and_side_angle() {
        let cam_above = camera_at(1.0, 1.0, -5.0);
        let above = placement_for(Region::Occipital, &cam_above);
        assert!(above.visible);
        assert_eq!(above.offset_px.y, 20.0);
        assert!((above.offset_px.x + cam_above.azimuth().sin() * 30.0).abs() < 1e-12);

        // |x| > |z| * 0.8 halves the sway.
        let cam_side = camera_at(-4.5, 0.0, -5.0);
        let side = placement_for(Region::Occipital, &cam_side);
        assert!(side.visible);
        assert!((side.offset_px.x + cam_side.azimuth().sin() * 15.0).abs() < 1e-12);
    }

    #[test]
    fn cerebellum_shows_from_behind_but_not_in_front() {
        let behind = place(Region::Cerebellum, 0.0, 0.2, -5.0);
        assert!(behind.visible);
        assert_eq!(behind.offset_px.y, 40.0);
        assert_eq!(behind.z_index, 1000);

        assert!(!place(Region::Cerebellum, 0.0, 0.2, 5.0).visible);
        assert!(!place(Region::Cerebellum, 0.0, 2.0, -5.0).visible);

        // Side-on back view nudges the label further right.
        let cam = camera_at(-4.0, 0.2, -5.0);
        let side = placement_for(Region::Cerebellum, &cam);
        assert!(side.visible);
        assert!((side.offset_px.x - (cam.azimuth().sin() * 30.0 + 30.0)).abs() < 1e-12);
    }

    #[test]
    fn brainstem_offset_depends_on_depth_below() {
        assert!(!place(Region::Brainstem, 0.0, 0.0, 5.0).visible);

        let shallow = place(Region::Brainstem, 0.0, -0.2, 5.0);
        assert!(shallow.visible);
        assert_eq!(shallow.offset_px, Vec2::new(0.0, 60.0));
        assert_eq!(shallow.z_index, DEFAULT_Z_INDEX);

        let deep = place(Region::Brainstem, 0.0, -2.0, 5.0);
        assert_eq!(deep.offset_px, Vec2::new(0.0, 40.0));
        assert_eq!(deep.z_index, 1100);
    }

    #[test]
    fn center_camera_resolves_without_panicking() {
        for region in Region::ALL {
            let p = place(region, 0.0, 0.0, 0.0);
            assert!(p.offset_px.is_finite());
        }
    }
}
