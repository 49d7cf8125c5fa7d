//! Automatic engine - the simulation run loop
//!
//! Wraps a manual engine with the canonical per-frame sequence:
//!
//! 1. `before_update` hook
//! 2. `step()`
//! 3. `before_draw` hook
//! 4. `draw()`
//! 5. `before_next` hook
//! 6. continuation predicate; loop to 1 while true
//!
//! The loop is a do-while: the body executes at least once regardless of the
//! predicate's initial value. Hooks receive mutable access to the engine and
//! may resize or reorder the scene; such mutation is visible to the
//! remaining stages of the same frame.

use std::cell::Cell;

use crate::core::config::SimulationConfig;
use crate::engine::manual::ManualEngine;
use crate::particle::Update;
use crate::policy::signal::Policy;
use crate::scene::Scene;

type Hook<P, R> = Box<dyn FnMut(&mut AutoEngine<P, R>)>;
type Condition<P, R> = Box<dyn Fn(&AutoEngine<P, R>) -> bool>;

/// Result of one `start()` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of complete frames executed
    pub frames: u64,
}

/// Run-loop controller over exactly one manual engine
///
/// Hooks default to no-ops and the continuation predicate defaults to
/// always-true (an infinite loop). All slots are replaceable for the whole
/// lifetime of the engine; the configuration methods return `&mut Self` so
/// setup reads as a fluent chain. A stopped engine is restartable with a
/// fresh `start()` or `run_*` call.
pub struct AutoEngine<P: 'static, R: 'static> {
    engine: ManualEngine<P, R>,
    run_condition: Condition<P, R>,
    before_update: Option<Hook<P, R>>,
    before_draw: Option<Hook<P, R>>,
    before_next: Option<Hook<P, R>>,
}

#[derive(Clone, Copy)]
enum HookSlot {
    BeforeUpdate,
    BeforeDraw,
    BeforeNext,
}

impl<P, R> AutoEngine<P, R>
where
    P: Update + 'static,
    R: for<'a> Policy<&'a Scene<P>> + 'static,
{
    pub fn new(scene: Scene<P>, render: R) -> Self {
        Self {
            engine: ManualEngine::new(scene, render),
            run_condition: Box::new(|_| true),
            before_update: None,
            before_draw: None,
            before_next: None,
        }
    }

    /// Action to perform before the engine updates the simulation state
    pub fn before_update(&mut self, hook: impl FnMut(&mut Self) + 'static) -> &mut Self {
        self.before_update = Some(Box::new(hook));
        self
    }

    /// Action to perform before the engine draws the scene
    pub fn before_draw(&mut self, hook: impl FnMut(&mut Self) + 'static) -> &mut Self {
        self.before_draw = Some(Box::new(hook));
        self
    }

    /// Action to perform before the engine goes to the next frame
    pub fn before_next(&mut self, hook: impl FnMut(&mut Self) + 'static) -> &mut Self {
        self.before_next = Some(Box::new(hook));
        self
    }

    /// Replace the continuation predicate
    pub fn run_condition(&mut self, condition: impl Fn(&Self) -> bool + 'static) -> &mut Self {
        self.run_condition = Box::new(condition);
        self
    }

    /// Start the simulation loop
    ///
    /// Runs the per-frame sequence until the continuation predicate
    /// evaluates to false at a frame boundary.
    pub fn start(&mut self) -> RunReport {
        let mut frames = 0u64;

        loop {
            self.run_hook(HookSlot::BeforeUpdate);
            self.engine.step();
            self.run_hook(HookSlot::BeforeDraw);
            self.engine.draw();
            self.run_hook(HookSlot::BeforeNext);

            frames += 1;
            tracing::trace!("Frame {} complete", frames);

            if !(self.run_condition)(&*self) {
                break;
            }
        }

        tracing::debug!("Simulation stopped after {} frames", frames);
        RunReport { frames }
    }

    /// Stop the simulation by setting the continuation predicate to false
    ///
    /// Takes effect at the next predicate evaluation; the in-progress frame
    /// always completes. The false predicate stays installed until replaced,
    /// so restarting requires a new `run_condition` or `run_*` call.
    pub fn stop(&mut self) {
        self.run_condition = Box::new(|_| false);
    }

    /// Run the simulation while the condition holds
    pub fn run_while(&mut self, condition: impl Fn(&Self) -> bool + 'static) -> RunReport {
        self.run_condition(condition).start()
    }

    /// Run the simulation until the condition holds
    ///
    /// The negation is applied once here, at installation.
    pub fn run_until(&mut self, condition: impl Fn(&Self) -> bool + 'static) -> RunReport {
        self.run_while(move |engine| !condition(engine))
    }

    /// Run while every particle in the current scene satisfies the property
    ///
    /// Quantified over the scene as it exists at each frame boundary; an
    /// empty scene satisfies the property vacuously.
    pub fn run_while_all(&mut self, property: impl Fn(&P) -> bool + 'static) -> RunReport {
        self.run_while(move |engine| engine.scene().iter().all(|p| property(p)))
    }

    /// Run while at least one particle satisfies the property
    ///
    /// An empty scene satisfies no property, which halts the loop.
    pub fn run_while_any(&mut self, property: impl Fn(&P) -> bool + 'static) -> RunReport {
        self.run_while(move |engine| engine.scene().iter().any(|p| property(p)))
    }

    /// Run until every particle satisfies the property
    pub fn run_until_all(&mut self, property: impl Fn(&P) -> bool + 'static) -> RunReport {
        self.run_until(move |engine| engine.scene().iter().all(|p| property(p)))
    }

    /// Run until at least one particle satisfies the property
    pub fn run_until_any(&mut self, property: impl Fn(&P) -> bool + 'static) -> RunReport {
        self.run_until(move |engine| engine.scene().iter().any(|p| property(p)))
    }

    /// Run a fixed frame budget
    ///
    /// The loop always executes at least one frame, so a budget of 0 still
    /// runs one.
    pub fn run_frames(&mut self, frames: u64) -> RunReport {
        let elapsed = Cell::new(0u64);
        self.run_while(move |_| {
            elapsed.set(elapsed.get() + 1);
            elapsed.get() < frames
        })
    }

    /// Install the run condition described by a config
    ///
    /// Combines the frame budget and the empty-scene stop into one
    /// continuation predicate. Call `start()` afterwards.
    pub fn apply_config(&mut self, config: &SimulationConfig) -> &mut Self {
        let max_frames = config.max_frames;
        let stop_when_empty = config.stop_when_empty;
        let elapsed = Cell::new(0u64);

        self.run_condition(move |engine| {
            let frame = elapsed.get() + 1;
            elapsed.set(frame);

            if stop_when_empty && engine.scene().is_empty() {
                return false;
            }
            match max_frames {
                Some(limit) => frame < limit,
                None => true,
            }
        })
    }

    /// Full access to the underlying scene
    pub fn scene_mut(&mut self) -> &mut Scene<P> {
        self.engine.scene_mut()
    }

    /// Read-only access to the underlying scene
    pub fn scene(&self) -> &Scene<P> {
        self.engine.scene()
    }

    /// The wrapped manual engine
    pub fn engine(&self) -> &ManualEngine<P, R> {
        &self.engine
    }

    /// Mutable access to the wrapped manual engine
    pub fn engine_mut(&mut self) -> &mut ManualEngine<P, R> {
        &mut self.engine
    }

    /// Run one hook with its slot vacated for the duration of the call
    ///
    /// A hook that installs a replacement into its own slot wins; the old
    /// closure is only restored if the slot is still empty afterwards.
    fn run_hook(&mut self, slot: HookSlot) {
        let taken = match slot {
            HookSlot::BeforeUpdate => self.before_update.take(),
            HookSlot::BeforeDraw => self.before_draw.take(),
            HookSlot::BeforeNext => self.before_next.take(),
        };

        if let Some(mut hook) = taken {
            hook(self);

            let slot_ref = match slot {
                HookSlot::BeforeUpdate => &mut self.before_update,
                HookSlot::BeforeDraw => &mut self.before_draw,
                HookSlot::BeforeNext => &mut self.before_next,
            };
            if slot_ref.is_none() {
                *slot_ref = Some(hook);
            }
        }
    }
}

impl<P, R> From<ManualEngine<P, R>> for AutoEngine<P, R>
where
    P: Update + 'static,
    R: for<'a> Policy<&'a Scene<P>> + 'static,
{
    fn from(engine: ManualEngine<P, R>) -> Self {
        Self {
            engine,
            run_condition: Box::new(|_| true),
            before_update: None,
            before_draw: None,
            before_next: None,
        }
    }
}
