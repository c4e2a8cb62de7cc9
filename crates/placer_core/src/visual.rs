//! Color feedback for the placement preview.
//!
//! The preview tile carries a set of colorable sub-elements (one per
//! renderable piece of the asset). Feedback recolors all of them
//! uniformly: permit color while placement is legal, deny color while
//! it is not, default color at commit time.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Create a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// The colorable sub-elements of a preview tile.
///
/// Purely a feedback surface; plays no role in occupancy. The number
/// of elements comes from the instantiation seam, which knows how many
/// renderable pieces the tile asset has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileVisual {
    elements: Vec<Color>,
}

impl TileVisual {
    /// Create a visual with `element_count` sub-elements, all painted
    /// with `initial`.
    #[must_use]
    pub fn new(element_count: usize, initial: Color) -> Self {
        Self {
            elements: vec![initial; element_count],
        }
    }

    /// Apply `color` uniformly to every sub-element.
    pub fn set_color(&mut self, color: Color) {
        for element in &mut self.elements {
            *element = color;
        }
    }

    /// Current color of each sub-element.
    #[must_use]
    pub fn element_colors(&self) -> &[Color] {
        &self.elements
    }

    /// Number of colorable sub-elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_color_recolors_every_element() {
        let mut visual = TileVisual::new(4, Color::WHITE);
        let deny = Color::rgba(255, 0, 0, 102);

        visual.set_color(deny);

        assert_eq!(visual.element_count(), 4);
        assert!(visual.element_colors().iter().all(|c| *c == deny));
    }

    #[test]
    fn test_empty_visual_is_harmless() {
        let mut visual = TileVisual::new(0, Color::WHITE);
        visual.set_color(Color::rgb(0, 255, 0));
        assert_eq!(visual.element_count(), 0);
    }
}
