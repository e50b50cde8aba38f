//! End-to-end program runs through the capturing printer.
//!
//! These drive whole programs the way the CLI does, but capture the
//! output stream so both the printed lines and the trailing error can be
//! asserted as text.

use mica_eval::{run_captured, Limits, MachineError, RunError, RunErrorKind};
use pretty_assertions::assert_eq;

#[test]
fn arithmetic_session() {
    let program = "\
iconst 6
iconst 7
imul
istore a
val a
iconst 10
iload a
isub
top
fconst 0.5
fconst 0.25
fsub
fstore b
fload b
top
par a
";
    let (output, result) = run_captured(program, Limits::default());
    result.unwrap();
    assert_eq!(output, "42\n-32\n0.25\nnull\n");
}

#[test]
fn comparison_chain() {
    let program = "\
iconst 3
iconst 4
ilt
top
ibnot
top
iconst 2
iand
top
";
    let (output, result) = run_captured(program, Limits::default());
    result.unwrap();
    assert_eq!(output, "1\n0\n0\n");
}

#[test]
fn faulting_program_reports_kind_and_position_as_text() {
    let program = "iconst 1\nistore a\nfload a\n";
    let (output, result) = run_captured(program, Limits::default());
    assert_eq!(output, "");
    match result {
        Err(MachineError::Run(err)) => {
            assert_eq!(err.line, 3);
            assert_eq!(
                err.to_string(),
                "line 3: type mismatch: expected float, got int"
            );
        }
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn default_stack_capacity_is_sixteen() {
    let mut program = String::new();
    for i in 0..17 {
        program.push_str(&format!("iconst {i}\n"));
    }
    let (_, result) = run_captured(&program, Limits::default());
    assert_eq!(
        result,
        Err(MachineError::Run(RunError {
            kind: RunErrorKind::StackFull,
            line: 17
        }))
    );
}

#[test]
fn default_store_capacity_is_sixteen_distinct_names() {
    // Two-letter names keep all seventeen distinct.
    let mut program = String::new();
    for i in 0u8..17 {
        let name = format!("{}{}", char::from(b'a' + i / 4), char::from(b'a' + i % 4));
        program.push_str(&format!("iconst {i}\nistore {name}\n"));
    }
    let (_, result) = run_captured(&program, Limits::default());
    assert_eq!(
        result,
        Err(MachineError::Run(RunError {
            kind: RunErrorKind::LocalSpaceFull,
            line: 34
        }))
    );
}

#[test]
fn two_isolated_runs_do_not_share_state() {
    let (_, first) = run_captured("iconst 1\nistore a\n", Limits::default());
    first.unwrap();
    // A second run sees an empty store.
    let (_, second) = run_captured("val a\n", Limits::default());
    assert_eq!(
        second,
        Err(MachineError::Run(RunError {
            kind: RunErrorKind::UndefinedVariable {
                name: "a".to_string()
            },
            line: 1
        }))
    );
}
