//! Rapier-based query world for immutable level geometry.
//!
//! The client builds one of these at startup from the same definitions it uses to spawn the
//! level meshes, then hands it to [`super::KinematicMover`] every tick.
//!
//! - Deterministic: definitions are sorted by `id` before insertion.
//! - Query-focused: no dynamics are stepped, only the broad phase is built.
//! - Immutable: statics do not move after construction.

use rapier3d::na::{Translation3, UnitQuaternion};
use rapier3d::prelude::*;

/// Canonical definition of an immutable level collider.
///
/// Conventions
/// - Rotation is a unit quaternion applied about the collider's translation.
/// - Planes use the pose-derived normal `rotation * +Y`, shifted by `offset_along_normal`.
#[derive(Clone, Debug)]
pub struct StaticWorldDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    pub translation: Vector<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub shape: ColliderShapeDef,
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space); solid below, walkable on top.
    Plane { offset_along_normal: f32 },

    /// Oriented cuboid with given half-extents.
    Cuboid { half_extents: Vector<f32> },

    Sphere { radius: f32 },

    /// Y-aligned capsule.
    CapsuleY { radius: f32, half_height: f32 },
}

impl StaticWorldDef {
    /// An axis-aligned box centered on `center`.
    pub fn cuboid(id: u32, center: Vector<f32>, half_extents: Vector<f32>) -> Self {
        Self {
            id,
            translation: center,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid { half_extents },
        }
    }

    /// A horizontal ground plane at height `y`.
    pub fn ground_plane(id: u32, y: f32) -> Self {
        Self {
            id,
            translation: vector![0.0, y, 0.0],
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        }
    }
}

/// Static colliders plus the broad phase needed to build a `QueryPipeline`.
pub struct StaticQueryWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
}

impl StaticQueryWorld {
    /// Build a query world from static collider definitions.
    pub fn build(defs: impl IntoIterator<Item = StaticWorldDef>) -> Self {
        let mut defs: Vec<StaticWorldDef> = defs.into_iter().collect();
        defs.sort_by_key(|d| d.id);

        let bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut modified_colliders = Vec::with_capacity(defs.len());

        for def in &defs {
            let mut collider = collider_from_def(def);
            collider.set_position(world_pose(def));
            modified_colliders.push(colliders.insert(collider));
        }

        let mut broad_phase = BroadPhaseBvh::new();
        let mut events = Vec::new();
        broad_phase.update(
            &IntegrationParameters::default(),
            &colliders,
            &bodies,
            &modified_colliders,
            &[],
            &mut events,
        );

        log::debug!("built static query world with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase: NarrowPhase::default(),
        }
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Borrowed `QueryPipeline` view for scene queries and the KCC.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

/// World pose of a definition. Plane offsets are folded into the translation.
fn world_pose(def: &StaticWorldDef) -> Isometry<f32> {
    let translation = match def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => def.translation + def.rotation * (Vector::y() * offset_along_normal),
        _ => def.translation,
    };
    Isometry::from_parts(Translation3::from(translation), def.rotation)
}

/// Build a Rapier collider in the definition's local frame; the caller applies the pose.
fn collider_from_def(def: &StaticWorldDef) -> Collider {
    match &def.shape {
        // Local +Y becomes `rotation * +Y` once the pose is applied.
        ColliderShapeDef::Plane { .. } => {
            ColliderBuilder::new(SharedShape::new(HalfSpace::new(Vector::y_axis()))).build()
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius).build(),

        ColliderShapeDef::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius).build(),
    }
}
