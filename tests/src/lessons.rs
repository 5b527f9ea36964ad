use tutor_common::config::Config;
use tutor_common::sink::Transcript;
use tutor_common::TutorError;
use tutor_core::dispatch::{self, Kind, Reference};
use tutor_core::lesson::{self, Lesson};
use tutor_core::text_block;

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        text_block_path: dir.path().join("demo.txt"),
        ..Config::default()
    }
}

fn run(lesson: Lesson) -> Vec<String> {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Transcript::new();
    lesson::run(lesson, &config_in(&dir), &mut out).unwrap();
    out.into_lines()
}

#[test]
fn abstract_classes_transcript() {
    assert_eq!(run(Lesson::AbstractClasses), ["B", "Hello World!"]);
}

#[test]
fn constructor_execution_transcript() {
    assert_eq!(
        run(Lesson::ConstructorExecution),
        [
            "Inside A's constructor.",
            "Inside B's constructor.",
            "Inside C's constructor.",
        ]
    );
}

#[test]
fn method_overriding_transcript() {
    let lines = run(Lesson::MethodOverriding);
    assert_eq!(lines, ["B", "A", "D", "E"]);
}

#[test]
fn modern_syntax_transcript_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(&dir);
    let mut out = Transcript::new();

    lesson::run(Lesson::ModernSyntax, &cfg, &mut out).unwrap();

    assert_eq!(
        out.lines(),
        [
            "Zero",
            "Value is between 1 and 5.",
            "Five or less.",
            "PersonRecord[name=John, age=17]",
        ]
    );
    let written = std::fs::read_to_string(&cfg.text_block_path).unwrap();
    assert_eq!(written, text_block::PAGE);
}

#[test]
fn modern_syntax_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        text_block_path: dir.path().join("no-such-dir").join("demo.txt"),
        ..Config::default()
    };
    let mut out = Transcript::new();

    let err = lesson::run(Lesson::ModernSyntax, &cfg, &mut out).unwrap_err();

    assert!(matches!(err.downcast_ref::<TutorError>(), Some(TutorError::Io { .. })));
    // Output before the write is kept.
    assert_eq!(out.lines().len(), 3);
}

#[test]
fn run_all_concatenates_in_catalog_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Transcript::new();

    lesson::run_all(&config_in(&dir), &mut out, |_| {}).unwrap();

    let expected: Vec<String> = Lesson::ALL.into_iter().flat_map(run).collect();
    assert_eq!(out.into_lines(), expected);
}

#[test]
fn reference_never_falls_back_to_declared_type() {
    let a = dispatch::construct(Kind::A).unwrap();
    let d = dispatch::construct(Kind::D).unwrap();
    let e = dispatch::construct(Kind::E).unwrap();

    let mut out = Transcript::new();
    let mut r = Reference::new(d.as_ref());
    r.invoke(&mut out);
    r.rebind(e.as_ref());
    r.invoke(&mut out);

    assert_eq!(out.lines(), ["D", "E"]);
    assert!(!out.lines().iter().any(|line| line == "A"));

    r.rebind(a.as_ref());
    r.print(&mut out, "Hello World!");
    assert_eq!(out.lines().last().map(String::as_str), Some("Hello World!"));
}

#[test]
fn abstract_root_never_constructs() {
    let err = dispatch::construct(Kind::Root).err().unwrap();
    assert_eq!(err.to_string(), "cannot instantiate abstract type 'Root'");
}
