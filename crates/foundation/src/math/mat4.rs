use crate::math::vec::Vec3;

/// Row-major 4x4 matrix.
///
/// Conventions:
/// - Right-handed view space, camera looking down -Z.
/// - Clip space follows the GL convention (`-w <= z <= w`); after the
///   perspective divide, visible depth lands in `[-1, 1]` and points behind
///   the camera come out with `ndc.z > 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub rows: [[f64; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn translation(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn uniform_scale(s: f64) -> Self {
        Self::from_rows([
            [s, 0.0, 0.0, 0.0],
            [0.0, s, 0.0, 0.0],
            [0.0, 0.0, s, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `self * other`, so `a.mul(b).transform_point(p) == a.transform_point(b * p)`.
    pub fn mul(self, other: Self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Self { rows }
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Degenerate inputs (eye == target, or `up` parallel to the view
    /// direction) fall back to axis-aligned basis vectors instead of failing;
    /// downstream projection guards handle whatever comes out.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye)
            .normalize()
            .unwrap_or(Vec3::new(0.0, 0.0, -1.0));
        let side = forward
            .cross(up)
            .normalize()
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let u = side.cross(forward);

        Self::from_rows([
            [side.x, side.y, side.z, -side.dot(eye)],
            [u.x, u.y, u.z, -u.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// GL-style perspective projection.
    pub fn perspective(fov_y_rad: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fov_y_rad * 0.5).tan();
        Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [
                0.0,
                0.0,
                (far + near) / (near - far),
                2.0 * far * near / (near - far),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Transforms `p` as a homogeneous point `[p, 1]`.
    pub fn transform_homogeneous(self, p: Vec3) -> [f64; 4] {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0; 4];
        for (i, row) in self.rows.iter().enumerate() {
            out[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
        out
    }

    /// Transforms a point and drops the (assumed affine) w component.
    pub fn transform_point(self, p: Vec3) -> Vec3 {
        let h = self.transform_homogeneous(p);
        Vec3::new(h[0], h[1], h[2])
    }

    /// Projects a point through this matrix with a perspective divide.
    ///
    /// A zero `w` produces non-finite components rather than an error; the
    /// caller is expected to check `is_finite` before using the result.
    pub fn project_point(self, p: Vec3) -> Vec3 {
        let h = self.transform_homogeneous(p);
        let inv_w = 1.0 / h[3];
        Vec3::new(h[0] * inv_w, h[1] * inv_w, h[2] * inv_w)
    }
}
