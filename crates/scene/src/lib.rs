pub mod camera;
pub mod highlight;
pub mod material;
pub mod mesh;
pub mod model;

pub use camera::*;
pub use highlight::*;
pub use material::*;
pub use mesh::*;
pub use model::*;
