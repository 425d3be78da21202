//! # Materials
//!
//! Fixed material table and the pass that applies a material to every
//! functional surface of an assembly.

use crate::assembly::MeshAssembly;
use crate::error::GenerateError;
use crate::primitive::{Color, Finish};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material selected in the material tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialChoice {
    #[default]
    Steel,
    Aluminum,
    Plastic,
    Titanium,
    Brass,
}

impl MaterialChoice {
    /// Every material, in UI order.
    pub const ALL: [MaterialChoice; 5] = [
        MaterialChoice::Steel,
        MaterialChoice::Aluminum,
        MaterialChoice::Plastic,
        MaterialChoice::Titanium,
        MaterialChoice::Brass,
    ];

    /// Lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialChoice::Steel => "steel",
            MaterialChoice::Aluminum => "aluminum",
            MaterialChoice::Plastic => "plastic",
            MaterialChoice::Titanium => "titanium",
            MaterialChoice::Brass => "brass",
        }
    }

    /// Name shown in the material picker.
    pub fn display_name(self) -> &'static str {
        match self {
            MaterialChoice::Steel => "Steel",
            MaterialChoice::Aluminum => "Aluminum",
            MaterialChoice::Plastic => "Plastic (ABS)",
            MaterialChoice::Titanium => "Titanium",
            MaterialChoice::Brass => "Brass",
        }
    }

    /// Base color, metalness and roughness.
    pub fn finish(self) -> Finish {
        match self {
            MaterialChoice::Steel => Finish::solid(Color(0x71797E), 0.8, 0.3),
            MaterialChoice::Aluminum => Finish::solid(Color(0xD0D5DB), 0.7, 0.25),
            MaterialChoice::Plastic => Finish::solid(Color(0xE8E8E8), 0.0, 0.7),
            MaterialChoice::Titanium => Finish::solid(Color(0x878681), 0.75, 0.35),
            MaterialChoice::Brass => Finish::solid(Color(0xB5A642), 0.85, 0.3),
        }
    }

    /// Density in g/cm³.
    pub fn density(self) -> f64 {
        match self {
            MaterialChoice::Steel => 7.85,
            MaterialChoice::Aluminum => 2.71,
            MaterialChoice::Plastic => 1.07,
            MaterialChoice::Titanium => 4.51,
            MaterialChoice::Brass => 8.73,
        }
    }

    /// Yield strength in MPa.
    pub fn yield_strength(self) -> f64 {
        match self {
            MaterialChoice::Steel => 250.0,
            MaterialChoice::Aluminum => 95.0,
            MaterialChoice::Plastic => 40.0,
            MaterialChoice::Titanium => 880.0,
            MaterialChoice::Brass => 310.0,
        }
    }
}

impl fmt::Display for MaterialChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialChoice {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialChoice::ALL
            .into_iter()
            .find(|material| material.as_str() == s)
            .ok_or_else(|| GenerateError::UnknownMaterial(s.to_string()))
    }
}

/// Replaces the finish of every non-hole primitive with `material`'s finish.
///
/// Holes keep their fixed dark finish. Applying the same material twice is the
/// same as applying it once.
///
/// # Example
///
/// ```rust
/// use partgen::{apply_material, generate, MaterialChoice, ModelType, ParameterSet};
///
/// let mut gear = generate(ModelType::SpurGear, &ParameterSet::new()).unwrap();
/// apply_material(&mut gear, MaterialChoice::Brass);
/// assert_eq!(gear.body().unwrap().finish, MaterialChoice::Brass.finish());
/// ```
pub fn apply_material(assembly: &mut MeshAssembly, material: MaterialChoice) {
    let finish = material.finish();
    assembly.for_each_primitive_mut(|primitive| {
        if !primitive.is_hole() {
            primitive.finish = finish;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::PartGroup;
    use crate::model::ModelType;
    use crate::primitive::{Primitive, Role};

    fn sample() -> MeshAssembly {
        let mut group = PartGroup::new();
        group.push(Primitive::cylinder("body", Role::Body, 1.0, 0.3, 24));
        group.push(Primitive::cuboid("tooth", Role::Feature, 0.2, 0.3, 0.4));
        group.push(Primitive::hole("bore", 0.3, 0.4, 32));
        MeshAssembly::new(ModelType::SpurGear, 1.0, group)
    }

    #[test]
    fn test_material_recolors_functional_surfaces() {
        let mut assembly = sample();
        apply_material(&mut assembly, MaterialChoice::Aluminum);
        let primitives = assembly.primitives();
        assert_eq!(primitives[0].finish, MaterialChoice::Aluminum.finish());
        assert_eq!(primitives[1].finish, MaterialChoice::Aluminum.finish());
        assert_eq!(primitives[2].finish, Finish::hole());
    }

    #[test]
    fn test_material_idempotent() {
        let mut once = sample();
        apply_material(&mut once, MaterialChoice::Titanium);
        let mut twice = once.clone();
        apply_material(&mut twice, MaterialChoice::Titanium);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_material_tags_round_trip() {
        for material in MaterialChoice::ALL {
            assert_eq!(material.to_string().parse::<MaterialChoice>().unwrap(), material);
        }
        assert!("wood".parse::<MaterialChoice>().is_err());
    }

    #[test]
    fn test_material_colors_distinct_from_hole() {
        for material in MaterialChoice::ALL {
            assert!(!material.finish().is_hole_color());
        }
    }

    #[test]
    fn test_physical_properties() {
        assert_eq!(MaterialChoice::Steel.density(), 7.85);
        assert_eq!(MaterialChoice::Brass.density(), 8.73);
        assert_eq!(MaterialChoice::Titanium.yield_strength(), 880.0);
        assert_eq!(MaterialChoice::Plastic.display_name(), "Plastic (ABS)");
    }
}
