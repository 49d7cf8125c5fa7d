//! Manual engine - one-tick simulation primitives

use crate::particle::Update;
use crate::policy::signal::{Policy, StateChange};
use crate::policy::stated::Stated;
use crate::scene::Scene;

/// One-tick executor over a scene and its draw policy
///
/// `step` and `draw` are the whole surface; the simulation loop belongs to
/// the caller (or to [`AutoEngine`](crate::engine::AutoEngine), which wraps
/// one of these). The engine holds the scene-level draw policy; per-particle
/// policies live inside the particles.
pub struct ManualEngine<P, R> {
    scene: Scene<P>,
    render: Stated<R>,
}

impl<P, R> ManualEngine<P, R>
where
    P: Update,
    R: for<'a> Policy<&'a Scene<P>>,
{
    pub fn new(scene: Scene<P>, render: R) -> Self {
        Self {
            scene,
            render: Stated::new(render),
        }
    }

    /// Execute one step of the simulation
    ///
    /// Updates every particle in scene order. Updates are not mutually
    /// atomic: a shared policy mutated by particle `i` is visible to
    /// particle `i + 1` within the same step. After the loop, exactly one
    /// `Global` signal goes to the scene-level draw policy.
    pub fn step(&mut self) {
        tracing::trace!("Stepping {} particles", self.scene.len());

        for particle in self.scene.iter_mut() {
            particle.update();
        }

        self.render.signal::<&Scene<P>>(StateChange::Global);
    }

    /// Draw the current state of the simulation
    ///
    /// Invokes the draw policy once, with the whole scene.
    pub fn draw(&mut self) {
        self.render.invoke(&self.scene);
    }

    /// Full access to the underlying scene
    pub fn scene_mut(&mut self) -> &mut Scene<P> {
        &mut self.scene
    }

    /// Read-only access to the underlying scene
    pub fn scene(&self) -> &Scene<P> {
        &self.scene
    }
}
