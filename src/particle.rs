//! Particles - one simulated element: data plus its two policies

use crate::policy::signal::{Policy, StateChange};
use crate::policy::stated::Stated;

/// One step of simulation time for a scene element
///
/// The engines drive scenes through this trait instead of a concrete
/// particle type, so any element that knows how to advance itself fits.
pub trait Update {
    fn update(&mut self);
}

/// A simulated element: opaque data, an evolution policy, a draw policy
///
/// Both policies are stored by value inside a [`Stated`] wrapper. `E` and
/// `R` are anything implementing [`Policy`] over `&mut D` and `&D`
/// respectively: a [`policy_fn`](crate::policy::policy_fn)-wrapped closure, a
/// stateful struct, a [`Shared`](crate::policy::Shared) handle, or one of the
/// [`dynamic`](crate::policy::dynamic) variants.
#[derive(Debug, Clone)]
pub struct Particle<D, E, R> {
    data: D,
    evolve: Stated<E>,
    render: Stated<R>,
}

impl<D, E, R> Particle<D, E, R>
where
    E: for<'a> Policy<&'a mut D>,
    R: for<'a> Policy<&'a D>,
{
    /// Build a particle from its data and policies
    pub fn new(data: D, evolve: E, render: R) -> Self {
        Self {
            data,
            evolve: Stated::new(evolve),
            render: Stated::new(render),
        }
    }

    /// Draw the particle
    ///
    /// Invokes the draw policy on the data; the data itself is not mutated.
    pub fn draw(&mut self) {
        self.render.invoke(&self.data)
    }

    /// Read-only access to the particle data
    pub fn data(&self) -> &D {
        &self.data
    }

    /// The evolution policy wrapper
    pub fn evolve_policy(&self) -> &Stated<E> {
        &self.evolve
    }

    /// The draw policy wrapper
    pub fn draw_policy(&self) -> &Stated<R> {
        &self.render
    }
}

impl<D, E, R> Update for Particle<D, E, R>
where
    E: for<'a> Policy<&'a mut D>,
    R: for<'a> Policy<&'a D>,
{
    /// Advance the particle one step
    ///
    /// Invokes the evolution policy on the data, then notifies both policy
    /// wrappers of a local state change: one `Local` per wrapper per frame.
    fn update(&mut self) {
        self.evolve.invoke(&mut self.data);

        self.evolve.signal::<&mut D>(StateChange::Local);
        self.render.signal::<&D>(StateChange::Local);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::signal::policy_fn;

    #[test]
    fn update_applies_the_evolution_policy() {
        let mut particle = Particle::new(
            0.0f32,
            policy_fn(|x: &mut f32| *x += 5.0),
            policy_fn(|_: &f32| {}),
        );
        particle.update();
        particle.update();
        assert_eq!(*particle.data(), 10.0);
    }

    #[test]
    fn draw_sees_post_update_data() {
        let drawn = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let log = drawn.clone();
        let mut particle = Particle::new(
            1,
            policy_fn(|x: &mut i32| *x *= 3),
            policy_fn(move |x: &i32| log.borrow_mut().push(*x)),
        );
        particle.update();
        particle.draw();
        assert_eq!(*drawn.borrow(), vec![3]);
    }

    struct LocalCounter {
        locals: u32,
    }

    impl<'a> Policy<&'a mut i32> for LocalCounter {
        fn invoke(&mut self, data: &'a mut i32) {
            *data += 1;
        }

        fn signal(&mut self, change: StateChange) {
            if change == StateChange::Local {
                self.locals += 1;
            }
        }
    }

    #[test]
    fn update_emits_one_local_signal_to_the_evolution_wrapper() {
        let mut particle = Particle::new(0, LocalCounter { locals: 0 }, policy_fn(|_: &i32| {}));
        particle.update();
        particle.update();
        particle.update();
        assert_eq!(particle.evolve_policy().get().locals, 3);
    }
}
