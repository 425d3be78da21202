//! # Primitives
//!
//! Positioned base shapes that make up an assembly.
//!
//! Coordinates follow the viewer's conventions: Y is up, cylinders run along
//! their local Y axis, and both shapes are centered on their origin. Rotations
//! are Euler angles in radians applied in XYZ order.

use config::constants::{
    DEFAULT_BODY_COLOR, DEFAULT_METALNESS, DEFAULT_ROUGHNESS, HOLE_COLOR,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB color, `0xRRGGBB`.
///
/// # Example
///
/// ```rust
/// use partgen::Color;
///
/// let color = Color(0x303841);
/// assert_eq!(color.to_string(), "#303841");
/// assert_eq!(Color::WHITE.to_rgba(1.0), [1.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    /// Color of bores and cavities.
    pub const HOLE: Color = Color(HOLE_COLOR);

    /// Red, green and blue channels in `[0, 1]`.
    pub fn to_rgb(self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xFF) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xFF) as f32 / 255.0;
        let b = (self.0 & 0xFF) as f32 / 255.0;
        [r, g, b]
    }

    /// RGBA in `[0, 1]` with the given alpha.
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_rgb();
        [r, g, b, alpha]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xFF_FFFF)
    }
}

/// Surface shading of a primitive (physically based, three.js style).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finish {
    /// Base color
    pub color: Color,
    /// Metalness in `[0, 1]`
    pub metalness: f32,
    /// Roughness in `[0, 1]`
    pub roughness: f32,
    /// Emissive color (black when not glowing)
    pub emissive: Color,
    /// Emissive strength
    pub emissive_intensity: f32,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Whether the renderer must blend this surface
    pub transparent: bool,
}

impl Finish {
    /// Opaque, non-emissive finish.
    pub const fn solid(color: Color, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness,
            roughness,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Fixed finish of hole-tagged primitives.
    pub const fn hole() -> Self {
        Self::solid(Color::HOLE, 0.0, 1.0)
    }

    /// Returns true if this finish uses the hole color.
    pub fn is_hole_color(&self) -> bool {
        self.color == Color::HOLE
    }

    /// RGBA used for vertex colors, opacity in the alpha channel.
    pub fn rgba(&self) -> [f32; 4] {
        self.color.to_rgba(self.opacity)
    }
}

impl Default for Finish {
    fn default() -> Self {
        Self::solid(
            Color(DEFAULT_BODY_COLOR),
            DEFAULT_METALNESS,
            DEFAULT_ROUGHNESS,
        )
    }
}

/// What a primitive represents in the part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The one main body of an assembly (gear body, flange, base plate).
    Body,
    /// Functional additions: teeth, fins, shafts.
    Feature,
    /// Bores and cavities; excluded from material and overlay passes.
    Hole,
}

/// Base geometric shape, centered on its local origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// Cylinder or frustum along local Y.
    #[serde(rename_all = "camelCase")]
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    },
    /// Axis-aligned box: `width` along X, `height` along Y, `depth` along Z.
    Box { width: f64, height: f64, depth: f64 },
}

/// A named, positioned shape with a role and a finish.
///
/// # Example
///
/// ```rust
/// use partgen::{Primitive, Role};
///
/// let bore = Primitive::hole("center-bore", 0.3, 0.4, 32);
/// assert_eq!(bore.role, Role::Hole);
/// assert!(bore.finish.is_hole_color());
///
/// let tooth = Primitive::cuboid("tooth-0", Role::Feature, 0.2, 0.3, 0.4).at(1.2, 0.0, 0.0);
/// assert_eq!(tooth.position.x, 1.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub name: String,
    pub role: Role,
    pub shape: Shape,
    pub position: DVec3,
    pub rotation: DVec3,
    pub finish: Finish,
}

impl Primitive {
    fn new(name: impl Into<String>, role: Role, shape: Shape) -> Self {
        let finish = match role {
            Role::Hole => Finish::hole(),
            Role::Body | Role::Feature => Finish::default(),
        };
        Self {
            name: name.into(),
            role,
            shape,
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            finish,
        }
    }

    /// Straight cylinder of one radius.
    pub fn cylinder(
        name: impl Into<String>,
        role: Role,
        radius: f64,
        height: f64,
        radial_segments: u32,
    ) -> Self {
        Self::new(
            name,
            role,
            Shape::Cylinder {
                radius_top: radius,
                radius_bottom: radius,
                height,
                radial_segments,
            },
        )
    }

    /// Hole-tagged cylinder.
    pub fn hole(name: impl Into<String>, radius: f64, height: f64, radial_segments: u32) -> Self {
        Self::cylinder(name, Role::Hole, radius, height, radial_segments)
    }

    /// Box primitive.
    pub fn cuboid(name: impl Into<String>, role: Role, width: f64, height: f64, depth: f64) -> Self {
        Self::new(
            name,
            role,
            Shape::Box {
                width,
                height,
                depth,
            },
        )
    }

    /// Sets the position.
    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = DVec3::new(x, y, z);
        self
    }

    /// Sets the Euler rotation (radians, XYZ order).
    pub fn rotated(mut self, x: f64, y: f64, z: f64) -> Self {
        self.rotation = DVec3::new(x, y, z);
        self
    }

    /// Returns true for bores and cavities.
    #[inline]
    pub fn is_hole(&self) -> bool {
        self.role == Role::Hole
    }

    /// Radial segments of a cylinder, `None` for boxes.
    pub fn radial_segments(&self) -> Option<u32> {
        match self.shape {
            Shape::Cylinder {
                radial_segments, ..
            } => Some(radial_segments),
            Shape::Box { .. } => None,
        }
    }
}
