//! Registry of tagged ground surfaces.
//!
//! Ground contact classification needs to know what lies directly beneath the
//! aircraft. Rather than intersection-testing every object in the scene, the
//! world registers its flat ground rectangles here once at startup and the
//! landing logic queries by point.

use glam::{Vec2, Vec3};

/// What kind of surface a ground region is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Paved strip the aircraft may land on.
    Runway,
    /// Everything else at ground level.
    Terrain,
}

/// An axis-aligned ground rectangle in the XZ plane.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRegion {
    pub kind: SurfaceKind,
    /// Minimum (x, z) corner.
    pub min: Vec2,
    /// Maximum (x, z) corner.
    pub max: Vec2,
}

impl SurfaceRegion {
    /// Build a region from a center point and full extents.
    pub fn from_center(kind: SurfaceKind, center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            kind,
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }
}

/// All registered ground regions, queried straight down from a world position.
#[derive(Debug, Default)]
pub struct SurfaceMap {
    regions: Vec<SurfaceRegion>,
}

impl SurfaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, region: SurfaceRegion) {
        self.regions.push(region);
    }

    /// Kind of the first registered region under the point, if any.
    /// Registration order decides ties, the same way the first ray hit wins.
    pub fn surface_at(&self, x: f32, z: f32) -> Option<SurfaceKind> {
        self.regions
            .iter()
            .find(|r| r.contains(x, z))
            .map(|r| r.kind)
    }

    /// Whether a runway lies directly below the given world position. The
    /// test has no distance limit; only the footprint matters.
    pub fn runway_below(&self, position: Vec3) -> bool {
        self.regions
            .iter()
            .any(|r| r.kind == SurfaceKind::Runway && r.contains(position.x, position.z))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
