use foundation::color::Rgb;

/// Emissive tint layered on top of a material's base appearance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Emissive {
    pub color: Rgb,
    pub intensity: f64,
}

/// Displayable surface appearance of a mesh part.
///
/// The highlighter swaps whole `Material` values; the renderer only reads
/// them. Attribute equality (`PartialEq`) is the definition of "same
/// appearance" used by the restoration invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub base_color: Rgb,
    pub emissive: Option<Emissive>,
}

impl Material {
    pub fn solid(base_color: Rgb) -> Self {
        Self {
            base_color,
            emissive: None,
        }
    }

    /// Copy of this material with the given emissive tint applied.
    pub fn with_emissive(&self, color: Rgb, intensity: f64) -> Self {
        Self {
            base_color: self.base_color,
            emissive: Some(Emissive { color, intensity }),
        }
    }

    pub fn is_tinted(&self) -> bool {
        self.emissive.is_some()
    }
}
