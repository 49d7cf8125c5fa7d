//! Integration tests for the policy layer driven through the engines
//!
//! These tests verify the signal protocol end to end:
//! - Local signals fan out once per particle per frame
//! - Global signals reach shared scene-level policies once per frame
//! - Shared handles alias one storage location across particles
//! - Runtime-selected (boxed) policies behave like their generic twins

use particulate::engine::{AutoEngine, ManualEngine};
use particulate::particle::Particle;
use particulate::policy::{policy_fn, DynDraw, DynEvolve, DynParticle, Policy, Shared, StateChange};
use particulate::scene::Scene;

/// Evolution policy counting its Local signals across all aliases
#[derive(Default)]
struct LocalCounter {
    invocations: u32,
    locals: u32,
    globals: u32,
}

impl<'a> Policy<&'a mut i32> for LocalCounter {
    fn invoke(&mut self, data: &'a mut i32) {
        self.invocations += 1;
        *data += 1;
    }

    fn signal(&mut self, change: StateChange) {
        match change {
            StateChange::Local => self.locals += 1,
            StateChange::Global => self.globals += 1,
        }
    }
}

/// Draw policy counting Local signals delivered to particle draw wrappers
#[derive(Default)]
struct DrawObserver {
    locals: u32,
    drawn: Vec<i32>,
}

impl<'a> Policy<&'a i32> for DrawObserver {
    fn invoke(&mut self, data: &'a i32) {
        self.drawn.push(*data);
    }

    fn signal(&mut self, change: StateChange) {
        if change == StateChange::Local {
            self.locals += 1;
        }
    }
}

/// Scene-level draw policy bumping a counter only on Global signals
#[derive(Default)]
struct GlobalCounter {
    frames: u32,
}

impl<'a, P> Policy<&'a Scene<P>> for GlobalCounter {
    fn invoke(&mut self, _data: &'a Scene<P>) {}

    fn signal(&mut self, change: StateChange) {
        if change == StateChange::Global {
            self.frames += 1;
        }
    }
}

#[test]
fn test_local_signals_fire_once_per_particle_per_frame() {
    let evolve = Shared::new(LocalCounter::default());
    let draw = Shared::new(DrawObserver::default());

    let scene: Scene<_> = (0..4)
        .map(|x| Particle::new(x, evolve.clone(), draw.clone()))
        .collect();

    let mut engine = ManualEngine::new(scene, policy_fn(|_: &Scene<_>| {}));
    engine.step();

    assert_eq!(evolve.get().invocations, 4);
    assert_eq!(evolve.get().locals, 4, "one Local per particle on the evolution wrapper");
    assert_eq!(draw.get().locals, 4, "one Local per particle on the draw wrapper");
    assert_eq!(evolve.get().globals, 0, "per-particle wrappers never receive Global");

    engine.step();
    assert_eq!(evolve.get().locals, 8);
    assert_eq!(draw.get().locals, 8);
}

#[test]
fn test_shared_global_counter_counts_frames_not_particles() {
    // A shared counter keyed off Global, installed as the scene draw policy
    // of a 5-particle scene: 3 steps mean 3, not 15.
    let counter = Shared::new(GlobalCounter::default());
    let scene: Scene<_> = (0..5)
        .map(|x| {
            Particle::new(
                x,
                policy_fn(|d: &mut i32| *d += 1),
                policy_fn(|_: &i32| {}),
            )
        })
        .collect();

    let mut engine = ManualEngine::new(scene, counter.clone());
    engine.step();
    engine.step();
    engine.step();

    assert_eq!(counter.get().frames, 3);
}

#[test]
fn test_shared_handles_observe_each_others_mutation_across_frames() {
    let evolve = Shared::new(LocalCounter::default());
    let alias = evolve.clone();

    let scene: Scene<_> = (0..2)
        .map(|x| Particle::new(x, evolve.clone(), policy_fn(|_: &i32| {})))
        .collect();
    assert_eq!(evolve.handle_count(), 4, "original + alias + one per particle");

    let mut engine = ManualEngine::new(scene, policy_fn(|_: &Scene<_>| {}));
    engine.step();
    assert_eq!(alias.get().invocations, 2, "handle A's mutations are visible via handle B");

    // Mutation through the outside alias is visible to the particles' clones.
    alias.get_mut().invocations = 100;
    engine.step();
    assert_eq!(evolve.get().invocations, 102);
}

#[test]
fn test_stateless_policies_ignore_signals() {
    // A plain closure has no signal handler; wrapping it and signalling must
    // not invoke it and must not panic.
    let mut invoked = 0u32;
    {
        let mut stated = particulate::policy::Stated::new(policy_fn(|_: &mut i32| invoked += 1));
        stated.signal::<&mut i32>(StateChange::Local);
        stated.signal::<&mut i32>(StateChange::Global);
    }
    assert_eq!(invoked, 0, "signals on a stateless policy are a guaranteed no-op");
}

#[test]
fn test_dyn_particles_mix_stateless_and_stateful_policies() {
    let mut scene: Scene<DynParticle<f32>> = Scene::new();
    scene.push(Particle::new(
        1.0,
        DynEvolve::stateless(|d| *d *= 2.0),
        DynDraw::stateless(|_| {}),
    ));

    // A stateful drag policy: each Local signal strengthens the damping.
    struct Drag {
        factor: f32,
    }

    impl<'a> Policy<&'a mut f32> for Drag {
        fn invoke(&mut self, data: &'a mut f32) {
            *data *= self.factor;
        }

        fn signal(&mut self, change: StateChange) {
            if change == StateChange::Local {
                self.factor *= 0.5;
            }
        }
    }

    scene.push(Particle::new(
        8.0,
        DynEvolve::stateful(Drag { factor: 1.0 }),
        DynDraw::stateless(|_| {}),
    ));

    let mut engine = ManualEngine::new(scene, policy_fn(|_: &Scene<_>| {}));
    engine.step(); // stateless: 2.0; stateful: 8.0 * 1.0 = 8.0, factor -> 0.5
    engine.step(); // stateless: 4.0; stateful: 8.0 * 0.5 = 4.0, factor -> 0.25

    assert_eq!(*engine.scene()[0].data(), 4.0);
    assert_eq!(*engine.scene()[1].data(), 4.0);
}

#[test]
fn test_dyn_scene_runs_under_the_automatic_engine() {
    let mut scene: Scene<DynParticle<i32>> = Scene::new();
    for x in 0..3 {
        scene.push(Particle::new(
            x,
            DynEvolve::stateless(|d| *d += 1),
            DynDraw::stateless(|_| {}),
        ));
    }

    let mut engine = AutoEngine::new(scene, policy_fn(|_: &Scene<_>| {}));
    let report = engine.run_until_any(|p| *p.data() > 3);

    assert_eq!(report.frames, 2);
    let data: Vec<i32> = engine.scene().iter().map(|p| *p.data()).collect();
    assert_eq!(data, vec![2, 3, 4]);
}

#[test]
fn test_shared_policy_preserves_capability_of_the_wrapped_type() {
    // Shared<stateless closure policy> still ignores signals; Shared<stateful>
    // still receives them. Capability follows the underlying type.
    let stateless = Shared::new(policy_fn(|d: &mut i32| *d += 1));
    let stateful = Shared::new(LocalCounter::default());

    let scene_a: Scene<_> = (0..2)
        .map(|x| Particle::new(x, stateless.clone(), policy_fn(|_: &i32| {})))
        .collect();
    let scene_b: Scene<_> = (0..2)
        .map(|x| Particle::new(x, stateful.clone(), policy_fn(|_: &i32| {})))
        .collect();

    let mut engine_a = ManualEngine::new(scene_a, policy_fn(|_: &Scene<_>| {}));
    let mut engine_b = ManualEngine::new(scene_b, policy_fn(|_: &Scene<_>| {}));
    engine_a.step();
    engine_b.step();

    let data: Vec<i32> = engine_a.scene().iter().map(|p| *p.data()).collect();
    assert_eq!(data, vec![1, 2], "stateless shared policy still evolves data");
    assert_eq!(stateful.get().locals, 2, "stateful shared policy still hears Local");
}
