use foundation::math::{Mat4, Vec2, Vec3};

/// Camera distance the viewer settles at after fitting a model to
/// `max_size` (the orbit controls keep the target at the origin).
pub fn fit_camera_distance(max_size: f64) -> f64 {
    max_size * 1.5
}

/// Live camera pose plus the projection parameters needed to place labels.
///
/// Updated every frame by the (external) orbit-control collaborator; the
/// label engine only reads it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f64,
    pub near: f64,
    pub far: f64,
    pub viewport_px: Vec2,
}

impl Camera {
    /// Default orbit camera: in front of the model on +Z, looking at the
    /// origin, with the viewer's projection parameters.
    pub fn orbit(position: Vec3, viewport_px: Vec2) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y_rad: 75.0_f64.to_radians(),
            near: 0.1,
            far: 1000.0,
            viewport_px,
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.viewport_px.y > 0.0 {
            self.viewport_px.x / self.viewport_px.y
        } else {
            1.0
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at(self.position, self.target, self.up);
        let proj = Mat4::perspective(self.fov_y_rad, self.aspect(), self.near, self.far);
        proj.mul(view)
    }

    /// Projects a world-space point to normalized device coordinates.
    ///
    /// May return non-finite components for unprojectable points; callers
    /// check `is_finite` instead of this method failing.
    pub fn project_ndc(&self, p: Vec3) -> Vec3 {
        self.view_proj().project_point(p)
    }

    /// NDC to pixel coordinates, y-down, origin at the top-left.
    pub fn ndc_to_pixels(&self, ndc: Vec3) -> Vec2 {
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.viewport_px.x,
            (-ndc.y * 0.5 + 0.5) * self.viewport_px.y,
        )
    }

    /// Camera azimuth around the model, `atan2(x, z)`.
    ///
    /// Zero when the camera sits on +Z (the default load position), and zero
    /// by IEEE convention when the camera is at the exact center.
    pub fn azimuth(&self) -> f64 {
        self.position.x.atan2(self.position.z)
    }
}
