// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use image::Rgb;

/// Color type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Color = Color(255, 0, 0);
    /// Green color.
    pub const GREEN: Color = Color(0, 255, 0);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Create a new color from RGB values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Convert to an `image` crate RGB pixel.
    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.0, self.1, self.2])
    }
}

/// Color for bounding box outlines.
pub const BOX_COLOR: Color = Color::BLUE;

/// Color for keypoint markers.
pub const KEYPOINT_COLOR: Color = Color::RED;

/// Sky blue used for most limbs.
const SKY: Color = Color(0, 128, 255);

/// Per-limb colors, one per skeleton edge.
/// Legs and the shoulder-to-hip sides are green, everything else sky blue.
pub const LIMB_COLORS: [Color; 19] = [
    Color::GREEN,
    Color::GREEN,
    SKY,
    SKY,
    SKY,
    Color::GREEN,
    SKY,
    SKY,
    Color::GREEN,
    SKY,
    Color::GREEN,
    SKY,
    SKY,
    SKY,
    SKY,
    SKY,
    SKY,
    Color::GREEN,
    SKY,
];
