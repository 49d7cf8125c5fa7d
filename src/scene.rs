//! Scene - ordered collection of particles

use std::ops::{Index, IndexMut};

/// An ordered, index-addressable sequence of particles
///
/// A thin wrapper over `Vec`: append, indexed access, remove-last, and
/// forward iteration. Order is stable across a tick unless a hook or
/// predicate explicitly reorders or removes elements.
#[derive(Debug, Clone, Default)]
pub struct Scene<P> {
    particles: Vec<P>,
}

impl<P> Scene<P> {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Preallocate for an expected particle count (an allocation hint only)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    /// Append a particle at the end of the scene
    pub fn push(&mut self, particle: P) {
        self.particles.push(particle);
    }

    /// Remove and return the last particle
    pub fn pop(&mut self) -> Option<P> {
        self.particles.pop()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.particles.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, P> {
        self.particles.iter_mut()
    }
}

impl<P> From<Vec<P>> for Scene<P> {
    fn from(particles: Vec<P>) -> Self {
        Self { particles }
    }
}

impl<P> FromIterator<P> for Scene<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl<P> Extend<P> for Scene<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.particles.extend(iter);
    }
}

impl<P> Index<usize> for Scene<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.particles[index]
    }
}

impl<P> IndexMut<usize> for Scene<P> {
    fn index_mut(&mut self, index: usize) -> &mut P {
        &mut self.particles[index]
    }
}

impl<P> IntoIterator for Scene<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Scene<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

impl<'a, P> IntoIterator for &'a mut Scene<P> {
    type Item = &'a mut P;
    type IntoIter = std::slice::IterMut<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter_mut()
    }
}
