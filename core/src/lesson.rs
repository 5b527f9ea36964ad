//! # Lesson Catalog
//!
//! Each [`Lesson`] replays one demonstration program line by line into a
//! [`Sink`]. Lessons share nothing and can run in any order.

use anyhow::{Context, bail};
use tracing::{debug, info_span};
use tutor_common::{config::Config, record::PersonRecord, sink::Sink};

use crate::dispatch::{self, Kind, Reference};
use crate::{construction, switch, text_block};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    AbstractClasses,
    ConstructorExecution,
    MethodOverriding,
    ModernSyntax,
}

impl Lesson {
    pub const ALL: [Lesson; 4] = [
        Lesson::AbstractClasses,
        Lesson::ConstructorExecution,
        Lesson::MethodOverriding,
        Lesson::ModernSyntax,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Lesson::AbstractClasses => "abstract classes",
            Lesson::ConstructorExecution => "constructor execution",
            Lesson::MethodOverriding => "method overriding",
            Lesson::ModernSyntax => "modern syntax",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Lesson::AbstractClasses => "An abstract root is only reachable through its variants",
            Lesson::ConstructorExecution => "Ancestors initialize before descendants",
            Lesson::MethodOverriding => "Calls resolve by the bound instance, not the handle",
            Lesson::ModernSyntax => "Switch expressions, text blocks and records",
        }
    }
}

pub fn run(lesson: Lesson, cfg: &Config, out: &mut dyn Sink) -> anyhow::Result<()> {
    let span = info_span!("lesson", name = lesson.title());
    let _guard = span.enter();
    debug!("Starting lesson");

    match lesson {
        Lesson::AbstractClasses => abstract_classes(out),
        Lesson::ConstructorExecution => constructor_execution(out),
        Lesson::MethodOverriding => method_overriding(out),
        Lesson::ModernSyntax => modern_syntax(cfg, out),
    }
}

/// Runs every lesson in catalog order, calling `before` ahead of each one.
///
/// Stops at the first failing lesson.
pub fn run_all(
    cfg: &Config,
    out: &mut dyn Sink,
    mut before: impl FnMut(Lesson),
) -> anyhow::Result<()> {
    for lesson in Lesson::ALL {
        before(lesson);
        run(lesson, cfg, out).with_context(|| format!("lesson '{}' failed", lesson.title()))?;
    }
    Ok(())
}

fn abstract_classes(out: &mut dyn Sink) -> anyhow::Result<()> {
    // The root only ever shows up behind a handle.
    match dispatch::construct(Kind::Root) {
        Err(err) => debug!("{err}"),
        Ok(_) => bail!("abstract root was instantiated"),
    }

    let b = dispatch::construct(Kind::B)?;
    b.name(out);
    b.print(out, "Hello World!");
    Ok(())
}

fn constructor_execution(out: &mut dyn Sink) -> anyhow::Result<()> {
    let c = construction::C::new(out);
    debug!("Initialized {} levels", c.depth() + 1);
    Ok(())
}

fn method_overriding(out: &mut dyn Sink) -> anyhow::Result<()> {
    let b = dispatch::construct(Kind::B)?;
    b.name(out);

    let a = dispatch::construct(Kind::A)?;
    let d = dispatch::construct(Kind::D)?;
    let e = dispatch::construct(Kind::E)?;

    let mut r = Reference::new(a.as_ref());
    r.invoke(out);

    r.rebind(d.as_ref());
    r.invoke(out);

    r.rebind(e.as_ref());
    r.invoke(out);
    Ok(())
}

fn modern_syntax(cfg: &Config, out: &mut dyn Sink) -> anyhow::Result<()> {
    out.line(switch::classify(0));

    let answer = switch::classify_verbose(3, out);
    out.line(answer);

    text_block::write_page(&cfg.text_block_path)?;

    let person = PersonRecord::new("John", 17);
    debug!(name = person.name(), age = person.age(), "Built record");
    out.line(&person.to_string());
    Ok(())
}
