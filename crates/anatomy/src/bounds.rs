use foundation::math::Vec3;

/// World-space membership predicate for a region.
///
/// Every field is an independent, optional, inclusive constraint; an absent
/// bound is vacuously true. When `abs_x` is set it replaces the min/max X
/// pair: the X axis then requires `|x| >= abs_x`, i.e. the vertex must sit
/// far enough from the midline (used by bilaterally symmetric regions).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RegionBounds {
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
    pub abs_x: Option<f64>,
}

impl RegionBounds {
    pub fn contains(&self, p: Vec3) -> bool {
        if let Some(abs_x) = self.abs_x {
            if p.x.abs() < abs_x {
                return false;
            }
        } else {
            if let Some(min_x) = self.min_x
                && p.x < min_x
            {
                return false;
            }
            if let Some(max_x) = self.max_x
                && p.x > max_x
            {
                return false;
            }
        }

        if let Some(min_y) = self.min_y
            && p.y < min_y
        {
            return false;
        }
        if let Some(max_y) = self.max_y
            && p.y > max_y
        {
            return false;
        }
        if let Some(min_z) = self.min_z
            && p.z < min_z
        {
            return false;
        }
        if let Some(max_z) = self.max_z
            && p.z > max_z
        {
            return false;
        }

        true
    }
}
