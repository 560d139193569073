//! Turning a built sphere into one of its two renderable forms.
//!
//! A host either draws one small mesh per triangle ([`RenderStrategy::Discrete`])
//! or the whole sphere as one buffer ([`RenderStrategy::Batched`]). Exactly one
//! form is produced per call. Showing and hiding them is up to the host.

use crate::packed::PackedSphereMesh;
use crate::sphere_mesh::SphereMesh;
use crate::triangle_mesh::TriangleMesh;

/// How a sphere is handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RenderStrategy {
    /// One three-vertex mesh per triangle.
    #[default]
    Discrete,
    /// A single non-welded mesh for one draw call.
    Batched,
}

impl RenderStrategy {
    /// Map the "use batched draw" toggle onto a strategy.
    pub fn from_batched(batched: bool) -> Self {
        if batched { Self::Batched } else { Self::Discrete }
    }

    /// Returns `true` for [`RenderStrategy::Batched`].
    pub fn is_batched(self) -> bool {
        self == Self::Batched
    }
}

/// Renderable output of [`Presentation::present`].
#[derive(Debug)]
pub enum PresentedSphere<'a, M> {
    /// One mesh per triangle, all sharing `material`.
    Discrete {
        objects: Vec<TriangleMesh>,
        material: &'a M,
    },
    /// The whole sphere in one packed mesh.
    Batched {
        mesh: PackedSphereMesh,
        material: &'a M,
    },
}

impl<M> PresentedSphere<'_, M> {
    /// The strategy that produced this output.
    pub fn strategy(&self) -> RenderStrategy {
        match self {
            Self::Discrete { .. } => RenderStrategy::Discrete,
            Self::Batched { .. } => RenderStrategy::Batched,
        }
    }

    /// Material handle, exactly as passed to the [`Presentation`].
    pub fn material(&self) -> &M {
        match self {
            Self::Discrete { material, .. } | Self::Batched { material, .. } => *material,
        }
    }

    /// Number of draw calls a host needs for this output.
    pub fn draw_count(&self) -> usize {
        match self {
            Self::Discrete { objects, .. } => objects.len(),
            Self::Batched { .. } => 1,
        }
    }

    /// Total triangles across all draws.
    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Discrete { objects, .. } => objects.len(),
            Self::Batched { mesh, .. } => mesh.triangle_count(),
        }
    }
}

/// Presentation settings: an opaque material handle plus the active strategy.
///
/// The material type is never inspected; it is only passed through to the
/// output so the host can bind it.
#[derive(Clone, Debug)]
pub struct Presentation<M> {
    material: M,
    strategy: RenderStrategy,
}

impl<M> Presentation<M> {
    /// Create a presentation that hands `material` to every draw.
    pub fn new(material: M, strategy: RenderStrategy) -> Self {
        Self { material, strategy }
    }

    /// The material handle passed to [`Presentation::new`].
    pub fn material(&self) -> &M {
        &self.material
    }

    /// The active render strategy.
    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Switch strategy. Returns `true` if it changed, so the host knows it
    /// has to swap which representation is visible.
    pub fn set_strategy(&mut self, strategy: RenderStrategy) -> bool {
        let changed = self.strategy != strategy;
        if changed {
            tracing::debug!(from = ?self.strategy, to = ?strategy, "render strategy changed");
        }
        self.strategy = strategy;
        changed
    }

    /// Produce the renderable form of `mesh` for the current strategy.
    pub fn present(&self, mesh: &SphereMesh) -> PresentedSphere<'_, M> {
        match self.strategy {
            RenderStrategy::Discrete => PresentedSphere::Discrete {
                objects: mesh.triangles().map(|tri| TriangleMesh::from(&tri)).collect(),
                material: &self.material,
            },
            RenderStrategy::Batched => PresentedSphere::Batched {
                mesh: PackedSphereMesh::from_mesh(mesh),
                material: &self.material,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere_mesh::build;

    #[derive(Debug, PartialEq)]
    struct MaterialId(u32);

    #[test]
    fn test_from_batched() {
        assert_eq!(RenderStrategy::from_batched(true), RenderStrategy::Batched);
        assert_eq!(RenderStrategy::from_batched(false), RenderStrategy::Discrete);
        assert!(RenderStrategy::Batched.is_batched());
        assert_eq!(RenderStrategy::default(), RenderStrategy::Discrete);
    }

    #[test]
    fn test_discrete_yields_one_object_per_triangle() {
        let mesh = build(2).unwrap();
        let presentation = Presentation::new(MaterialId(7), RenderStrategy::Discrete);
        let out = presentation.present(&mesh);

        assert_eq!(out.strategy(), RenderStrategy::Discrete);
        assert_eq!(out.draw_count(), 128);
        assert_eq!(out.triangle_count(), 128);
        assert_eq!(out.material(), &MaterialId(7));

        let PresentedSphere::Discrete { objects, .. } = out else {
            panic!("expected discrete output");
        };
        for (obj, tri) in objects.iter().zip(mesh.triangles()) {
            assert_eq!(obj.indices, [0, 1, 2]);
            assert_eq!(&obj.positions, tri.vertices());
        }
    }

    #[test]
    fn test_batched_yields_single_draw() {
        let mesh = build(2).unwrap();
        let presentation = Presentation::new(MaterialId(3), RenderStrategy::Batched);
        let out = presentation.present(&mesh);

        assert_eq!(out.strategy(), RenderStrategy::Batched);
        assert_eq!(out.draw_count(), 1);
        assert_eq!(out.triangle_count(), 128);
        assert_eq!(out.material(), &MaterialId(3));
    }

    #[test]
    fn test_material_is_passed_through_by_reference() {
        let presentation = Presentation::new(MaterialId(9), RenderStrategy::Batched);
        let out = presentation.present(&build(0).unwrap());
        assert!(std::ptr::eq(out.material(), presentation.material()));
    }

    #[test]
    fn test_set_strategy_reports_changes() {
        let mut presentation = Presentation::new((), RenderStrategy::Discrete);
        assert!(!presentation.set_strategy(RenderStrategy::Discrete));
        assert!(presentation.set_strategy(RenderStrategy::Batched));
        assert_eq!(presentation.strategy(), RenderStrategy::Batched);
        assert!(!presentation.set_strategy(RenderStrategy::Batched));
    }
}
