use crate::math::Vec3;

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb3 {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb3 { min, max }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Aabb3::new(first, first);
        for p in iter {
            aabb.extend(p);
        }
        Some(aabb)
    }

    pub fn extend(&mut self, p: Vec3) {
        self.min = Vec3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Vec3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    pub fn center(self) -> Vec3 {
        (self.min + self.max).scale(0.5)
    }

    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_dimension(self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}
