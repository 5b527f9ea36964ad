//! # Polymorphic Dispatch
//!
//! A small closed hierarchy sharing one capability, `name`.
//!
//! ```text
//! Root (abstract)
//!  └─ A
//!     ├─ B
//!     │  └─ C
//!     ├─ D
//!     └─ E
//! ```
//!
//! The root is the [`Capability`] trait itself, so it has no value of its
//! own. Callers ask for instances by [`Kind`] through [`construct`], which
//! refuses the root. A [`Reference`] holds `&dyn Capability`; every call
//! goes through the vtable of whatever it is bound to at that moment.

use std::fmt;

use tracing::debug;
use tutor_common::{TutorError, sink::Sink};

/// The abstract root of the hierarchy.
pub trait Capability {
    /// Reports which implementation answered the call.
    fn name(&self, out: &mut dyn Sink);

    /// Shared by every variant and never overridden.
    fn print(&self, out: &mut dyn Sink, message: &str) {
        out.line(message);
    }
}

/// Tags for every member of the hierarchy, abstract root included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Root,
    A,
    B,
    C,
    D,
    E,
}

impl Kind {
    /// Every kind that [`construct`] accepts.
    pub const CONCRETE: [Kind; 5] = [Kind::A, Kind::B, Kind::C, Kind::D, Kind::E];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Root => "Root",
            Kind::A => "A",
            Kind::B => "B",
            Kind::C => "C",
            Kind::D => "D",
            Kind::E => "E",
        }
    }

    /// The direct supertype, `None` only for the root.
    pub fn parent(self) -> Option<Kind> {
        match self {
            Kind::Root => None,
            Kind::A => Some(Kind::Root),
            Kind::B | Kind::D | Kind::E => Some(Kind::A),
            Kind::C => Some(Kind::B),
        }
    }

    /// Walks from `self` up to the root, `self` first.
    pub fn lineage(self) -> impl Iterator<Item = Kind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// The lineage rendered as `C -> B -> A -> Root`.
    pub fn path(self) -> String {
        self.lineage().map(Kind::as_str).collect::<Vec<&str>>().join(" -> ")
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct A;
pub struct B;
pub struct C;
pub struct D;
pub struct E;

impl Capability for A {
    fn name(&self, out: &mut dyn Sink) {
        out.line("A");
    }
}

impl Capability for B {
    fn name(&self, out: &mut dyn Sink) {
        out.line("B");
    }
}

impl Capability for C {
    fn name(&self, out: &mut dyn Sink) {
        out.line("C");
    }
}

impl Capability for D {
    fn name(&self, out: &mut dyn Sink) {
        out.line("D");
    }
}

impl Capability for E {
    fn name(&self, out: &mut dyn Sink) {
        out.line("E");
    }
}

/// Builds the variant tagged by `kind`.
///
/// # Errors
///
/// [`TutorError::AbstractInstantiation`] for [`Kind::Root`]; nothing is
/// allocated in that case.
pub fn construct(kind: Kind) -> Result<Box<dyn Capability>, TutorError> {
    let instance: Box<dyn Capability> = match kind {
        Kind::Root => {
            debug!("Refusing to instantiate abstract type {kind}");
            return Err(TutorError::AbstractInstantiation {
                kind: kind.as_str(),
            });
        }
        Kind::A => Box::new(A),
        Kind::B => Box::new(B),
        Kind::C => Box::new(C),
        Kind::D => Box::new(D),
        Kind::E => Box::new(E),
    };

    debug!("Constructed instance of {}", kind.path());
    Ok(instance)
}

/// A handle declared at the root type.
///
/// Only the bound instance decides what [`Reference::invoke`] does.
pub struct Reference<'a> {
    target: &'a dyn Capability,
}

impl<'a> Reference<'a> {
    pub fn new(target: &'a dyn Capability) -> Self {
        Self { target }
    }

    pub fn rebind(&mut self, target: &'a dyn Capability) {
        debug!("Rebinding reference");
        self.target = target;
    }

    pub fn invoke(&self, out: &mut dyn Sink) {
        self.target.name(out);
    }

    pub fn print(&self, out: &mut dyn Sink, message: &str) {
        self.target.print(out, message);
    }
}
