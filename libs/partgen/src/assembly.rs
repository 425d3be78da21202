//! # Mesh Assembly
//!
//! The generated description of one part: an ordered list of primitives plus
//! optional named sub-assemblies placed in the parent frame.

use crate::model::ModelType;
use crate::primitive::{Primitive, Role};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Ordered primitives and nested sub-assemblies sharing one coordinate frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartGroup {
    primitives: Vec<Primitive>,
    sub_assemblies: Vec<SubAssembly>,
}

impl PartGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group with room for `capacity` primitives.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primitives: Vec::with_capacity(capacity),
            sub_assemblies: Vec::new(),
        }
    }

    /// Appends a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Appends a sub-assembly.
    pub fn push_sub_assembly(&mut self, sub: SubAssembly) {
        self.sub_assemblies.push(sub);
    }

    /// Primitives owned directly by this group.
    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Nested sub-assemblies.
    #[inline]
    pub fn sub_assemblies(&self) -> &[SubAssembly] {
        &self.sub_assemblies
    }

    /// The body primitive of this group, if any.
    pub fn body(&self) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.role == Role::Body)
    }

    /// Primitives with the given role, excluding sub-assemblies.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role == role)
    }

    /// Number of primitives, including those of nested sub-assemblies.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
            + self
                .sub_assemblies
                .iter()
                .map(|sub| sub.group.primitive_count())
                .sum::<usize>()
    }

    /// Number of primitives with the given role, including nested ones.
    pub fn count_by_role(&self, role: Role) -> usize {
        self.with_role(role).count()
            + self
                .sub_assemblies
                .iter()
                .map(|sub| sub.group.count_by_role(role))
                .sum::<usize>()
    }

    /// Returns true if this group and every nested group has exactly one body.
    pub fn has_single_bodies(&self) -> bool {
        self.with_role(Role::Body).count() == 1
            && self.sub_assemblies.iter().all(|sub| sub.group.has_single_bodies())
    }

    /// Visits every primitive depth-first with its accumulated group offset.
    pub fn visit<'a, F>(&'a self, offset: DVec3, visitor: &mut F)
    where
        F: FnMut(DVec3, &'a Primitive),
    {
        for primitive in &self.primitives {
            visitor(offset, primitive);
        }
        for sub in &self.sub_assemblies {
            sub.group.visit(offset + sub.position, visitor);
        }
    }

    /// Visits every primitive depth-first for in-place edits.
    pub fn visit_mut<F>(&mut self, visitor: &mut F)
    where
        F: FnMut(&mut Primitive),
    {
        for primitive in &mut self.primitives {
            visitor(primitive);
        }
        for sub in &mut self.sub_assemblies {
            sub.group.visit_mut(visitor);
        }
    }
}

/// A named group positioned inside its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAssembly {
    pub name: String,
    pub position: DVec3,
    pub group: PartGroup,
}

impl SubAssembly {
    /// Creates a sub-assembly at `position` in the parent frame.
    pub fn new(name: impl Into<String>, position: DVec3, group: PartGroup) -> Self {
        Self {
            name: name.into(),
            position,
            group,
        }
    }
}

/// A generated part, ready for the material and overlay passes.
///
/// `display_scale` maps the builder's working units to scene units; the
/// triangulator applies it last.
///
/// # Example
///
/// ```rust
/// use partgen::{generate, ModelType, ParameterSet, Role};
///
/// let assembly = generate(ModelType::SpurGear, &ParameterSet::new()).unwrap();
/// assert_eq!(assembly.primitive_count(), 28);
/// assert_eq!(assembly.count_by_role(Role::Body), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshAssembly {
    model: ModelType,
    display_scale: f64,
    root: PartGroup,
}

impl MeshAssembly {
    /// Wraps a root group.
    pub fn new(model: ModelType, display_scale: f64, root: PartGroup) -> Self {
        Self {
            model,
            display_scale,
            root,
        }
    }

    /// The model type this assembly was built for.
    #[inline]
    pub fn model(&self) -> ModelType {
        self.model
    }

    /// Working unit to scene unit factor.
    #[inline]
    pub fn display_scale(&self) -> f64 {
        self.display_scale
    }

    /// The root group.
    #[inline]
    pub fn root(&self) -> &PartGroup {
        &self.root
    }

    /// Mutable access to the root group.
    #[inline]
    pub fn root_mut(&mut self) -> &mut PartGroup {
        &mut self.root
    }

    /// Primitives of the root group.
    pub fn primitives(&self) -> &[Primitive] {
        self.root.primitives()
    }

    /// Sub-assemblies of the root group.
    pub fn sub_assemblies(&self) -> &[SubAssembly] {
        self.root.sub_assemblies()
    }

    /// The root body primitive.
    pub fn body(&self) -> Option<&Primitive> {
        self.root.body()
    }

    /// Total primitive count, sub-assemblies included.
    pub fn primitive_count(&self) -> usize {
        self.root.primitive_count()
    }

    /// Total count of primitives with `role`, sub-assemblies included.
    pub fn count_by_role(&self, role: Role) -> usize {
        self.root.count_by_role(role)
    }

    /// Every primitive with its world offset (before `display_scale`).
    pub fn world_primitives(&self) -> Vec<(DVec3, &Primitive)> {
        let mut out = Vec::with_capacity(self.primitive_count());
        self.root
            .visit(DVec3::ZERO, &mut |offset, primitive| out.push((offset, primitive)));
        out
    }

    /// Applies `f` to every primitive, sub-assemblies included.
    pub fn for_each_primitive_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Primitive),
    {
        self.root.visit_mut(&mut f);
    }
}
