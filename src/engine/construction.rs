//! Asset loading and viewer construction.

use super::SpinViewer;
use crate::assets::{AssetSource, Assets, PROPELLER_MESH};
use crate::error::GyreError;
use crate::frame::FrameDriver;
use crate::input::{InputAggregator, Viewport};
use crate::options::Options;
use crate::render::RenderSurface;

impl<S: RenderSurface> SpinViewer<S> {
    /// Load assets, build the render surface from them and resolve the
    /// spinning mesh.
    ///
    /// Nothing is started unless every step succeeds: a failing asset
    /// source, or a model without the spinning mesh, means `build_surface`
    /// is never called.
    ///
    /// # Errors
    ///
    /// Returns the asset source's error, the surface builder's error, or
    /// [`GyreError::MissingMesh`] when the model has no `"Propeller"` mesh.
    pub fn initialize<A, F>(
        source: &A,
        build_surface: F,
        options: Options,
    ) -> Result<Self, GyreError>
    where
        A: AssetSource + ?Sized,
        F: FnOnce(&Assets, &Options) -> Result<S, GyreError>,
    {
        let assets = source.load().inspect_err(|e| {
            log::error!("asset loading failed: {e}");
        })?;
        log::info!("assets loaded: {} meshes", assets.model.meshes.len());

        if assets.model.mesh_index(PROPELLER_MESH).is_none() {
            log::error!("model has no {PROPELLER_MESH:?} mesh");
            return Err(GyreError::MissingMesh(PROPELLER_MESH.into()));
        }

        let surface = build_surface(&assets, &options)?;
        Self::from_surface(surface, options)
    }

    /// Wrap an existing surface.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::MissingMesh`] when the surface has no
    /// `"Propeller"` mesh. The surface is disposed in that case.
    pub fn from_surface(
        mut surface: S,
        options: Options,
    ) -> Result<Self, GyreError> {
        let Some(spin_mesh) = surface.mesh(PROPELLER_MESH) else {
            surface.dispose();
            return Err(GyreError::MissingMesh(PROPELLER_MESH.into()));
        };

        let (width, height) = surface.size();
        let mut input = InputAggregator::new(&options.interaction);
        input.set_viewport(Viewport::new(width, height));

        let mut driver = FrameDriver::new(options.display.target_fps);
        driver.restart_clock();

        log::info!("spin viewer ready ({width}x{height})");
        Ok(Self {
            input,
            driver,
            surface,
            spin_mesh,
            options,
        })
    }
}
