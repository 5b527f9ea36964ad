//! Ordered initialization along a three-level chain `A <- B <- C`.
//!
//! Each level owns its parent and builds it before running its own body,
//! so building `C` reports `A`, then `B`, then `C`.

use tracing::trace;
use tutor_common::sink::Sink;

pub struct A;

pub struct B {
    parent: A,
}

pub struct C {
    parent: B,
}

impl A {
    pub fn new(out: &mut dyn Sink) -> Self {
        trace!("Initializing A");
        out.line("Inside A's constructor.");
        Self
    }

    /// Levels above this one; the base has none.
    pub fn depth(&self) -> usize {
        0
    }
}

impl B {
    pub fn new(out: &mut dyn Sink) -> Self {
        let parent = A::new(out);
        trace!("Initializing B");
        out.line("Inside B's constructor.");
        Self { parent }
    }

    pub fn depth(&self) -> usize {
        self.parent.depth() + 1
    }
}

impl C {
    pub fn new(out: &mut dyn Sink) -> Self {
        let parent = B::new(out);
        trace!("Initializing C");
        out.line("Inside C's constructor.");
        Self { parent }
    }

    pub fn depth(&self) -> usize {
        self.parent.depth() + 1
    }
}
