//! Planet: field, lattice and the current mesh
//!
//! Every edit appends one brush to the field and re-extracts the whole
//! volume before returning. There is no chunking and no incremental path.

use crate::mesh::{surface_nets, ExtractError, Mesh, SurfaceNetsConfig};
use crate::terrain::{Modification, PlanetConfig, TerrainField};
use glam::Vec3;
use log::info;

/// An editable planet and its latest mesh
#[derive(Debug, Clone)]
pub struct Planet {
    config: PlanetConfig,
    field: TerrainField,
    mesh: Mesh,
}

impl Planet {
    /// Build the field described by `config` and extract the initial mesh
    pub fn new(config: PlanetConfig) -> Result<Self, ExtractError> {
        let field = TerrainField::from_config(&config);
        let mut planet = Planet {
            config,
            field,
            mesh: Mesh::new(),
        };
        planet.rebuild()?;
        Ok(planet)
    }

    /// Re-extract the full volume
    pub fn rebuild(&mut self) -> Result<&Mesh, ExtractError> {
        let (min, max) = self.bounds();
        let config = SurfaceNetsConfig {
            resolution: self.config.resolution,
            parallel_sampling: self.config.parallel_sampling,
        };

        let field = &self.field;
        let mesh = surface_nets(|p| field.distance(p), min, max, &config)?;
        self.mesh = mesh;
        Ok(&self.mesh)
    }

    /// Carve a sphere out of the terrain and rebuild
    pub fn mine(&mut self, point: Vec3, radius: f32) -> Result<&Mesh, ExtractError> {
        self.apply(Modification::subtract(point, radius))
    }

    /// Deposit a sphere of terrain and rebuild
    pub fn place(&mut self, point: Vec3, radius: f32) -> Result<&Mesh, ExtractError> {
        self.apply(Modification::add(point, radius))
    }

    /// Append any modification and rebuild
    pub fn apply(&mut self, modification: Modification) -> Result<&Mesh, ExtractError> {
        info!(
            "{:?} at ({:.2}, {:.2}, {:.2}) radius {:.2}",
            modification.mode,
            modification.center.x,
            modification.center.y,
            modification.center.z,
            modification.radius
        );
        self.field.push(modification);
        self.rebuild()
    }

    /// Signed distance to the terrain surface
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.field.distance(point)
    }

    /// Unit vector from `point` toward the planet center
    #[inline]
    pub fn gravity_direction(&self, point: Vec3) -> Vec3 {
        self.field.gravity_direction(point)
    }

    /// Latest extracted mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The field evaluator
    pub fn field(&self) -> &TerrainField {
        &self.field
    }

    /// Edits applied so far, oldest first
    pub fn modifications(&self) -> &[Modification] {
        self.field.modifications()
    }

    /// Configuration the planet was built from
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Meshing volume `(min, max)`
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.config.bounds()
    }
}
