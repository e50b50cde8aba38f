use super::*;
use crate::errors::{RunError, RunErrorKind};
use mica_ir::ProgramErrorKind;
use pretty_assertions::assert_eq;

fn run(source: &str) -> (String, Result<(), MachineError>) {
    run_captured(source, Limits::default())
}

/// The run must fail with a runtime error; returns it.
fn run_err(source: &str) -> RunError {
    match run(source).1 {
        Err(MachineError::Run(err)) => err,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn add_and_observe() {
    let (output, result) = run("iconst 5\niconst 3\niadd\ntop\n");
    result.unwrap();
    assert_eq!(output, "8\n");
}

#[test]
fn pushed_literals_round_trip_through_top() {
    let (output, result) = run("iconst -42\ntop\nfconst 2.5\ntop\n");
    result.unwrap();
    assert_eq!(output, "-42\n2.5\n");
}

#[test]
fn store_load_round_trips() {
    let (output, result) =
        run("iconst 7\nistore a\niload a\ntop\nfconst 1.25\nfstore b\nfload b\ntop\n");
    result.unwrap();
    assert_eq!(output, "7\n1.25\n");
}

#[test]
fn conversion_round_trip_is_exact_for_ints() {
    let (output, result) = run("iconst 9\ni2f\nf2i\ntop\n");
    result.unwrap();
    assert_eq!(output, "9\n");
}

#[test]
fn f2i_truncates_toward_zero() {
    let (output, result) = run("fconst -2.75\nf2i\ntop\n");
    result.unwrap();
    assert_eq!(output, "-2\n");
}

#[test]
fn top_peeks_without_popping() {
    let (output, result) = run("iconst 3\ntop\ntop\n");
    result.unwrap();
    assert_eq!(output, "3\n3\n");
}

#[test]
fn right_operand_is_popped_first() {
    // Second-from-top is the left-hand side: 7 - 2, then 7 / 2.
    let (output, result) = run("iconst 7\niconst 2\nisub\ntop\n");
    result.unwrap();
    assert_eq!(output, "5\n");

    let (output, result) = run("iconst 7\niconst 2\nidiv\ntop\n");
    result.unwrap();
    assert_eq!(output, "3\n");
}

#[test]
fn mixed_iadd_is_a_type_mismatch_at_line_3() {
    let err = run_err("iconst 1\nfconst 2.0\niadd\n");
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        RunErrorKind::TypeMismatch {
            expected: "int",
            got: "float"
        }
    );
}

#[test]
fn istore_on_empty_stack_fails_at_line_1() {
    let err = run_err("istore x\n");
    assert_eq!(err.line, 1);
    assert_eq!(err.kind, RunErrorKind::StackEmpty);
}

#[test]
fn fload_of_an_int_variable_is_a_type_mismatch() {
    let err = run_err("iconst 7\nistore x\nfload x\n");
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        RunErrorKind::TypeMismatch {
            expected: "float",
            got: "int"
        }
    );
}

#[test]
fn val_on_an_empty_store_is_undefined() {
    let err = run_err("val x\n");
    assert_eq!(err.line, 1);
    assert_eq!(
        err.kind,
        RunErrorKind::UndefinedVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn val_prints_stored_values() {
    let (output, result) = run("iconst 4\nistore a\nval a\n");
    result.unwrap();
    assert_eq!(output, "4\n");
}

#[test]
fn par_prints_null_for_the_root_and_the_ancestor_otherwise() {
    // b, a, c insert without rotations: b is the root.
    let program = "iconst 1\nistore b\niconst 2\nistore a\niconst 3\nistore c\n\
                   par b\npar a\npar c\n";
    let (output, result) = run(program);
    result.unwrap();
    assert_eq!(output, "null\nb\nb\n");
}

#[test]
fn par_of_a_missing_name_is_undefined() {
    let err = run_err("iconst 1\nistore b\npar q\n");
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        RunErrorKind::UndefinedVariable {
            name: "q".to_string()
        }
    );
}

#[test]
fn stack_overflows_exactly_at_the_bound() {
    // Bound is 4/2 = 2: two pushes fit, the third faults.
    let limits = Limits::default().with_operand_stack_size(4);
    let source = "iconst 1\niconst 2\niconst 3\n";
    let (output, result) = run_captured(source, limits);
    assert_eq!(output, "");
    assert_eq!(
        result,
        Err(MachineError::Run(RunError {
            kind: RunErrorKind::StackFull,
            line: 3
        }))
    );
}

#[test]
fn store_overflows_only_on_a_new_name() {
    // Bound is 4/2 = 2 distinct names.
    let limits = Limits::default().with_local_var_space(4);
    let fill = "iconst 1\nistore a\niconst 2\nistore b\n";

    // A third distinct name faults...
    let overflow = format!("{fill}iconst 3\nistore c\n");
    let (_, result) = run_captured(&overflow, limits);
    assert_eq!(
        result,
        Err(MachineError::Run(RunError {
            kind: RunErrorKind::LocalSpaceFull,
            line: 6
        }))
    );

    // ...but updating a present name at capacity never does.
    let update = format!("{fill}iconst 9\nistore a\nval a\n");
    let (output, result) = run_captured(&update, limits);
    result.unwrap();
    assert_eq!(output, "9\n");
}

#[test]
fn division_and_remainder_by_zero_fault() {
    for source in [
        "iconst 1\niconst 0\nidiv\n",
        "iconst 1\niconst 0\nirem\n",
        "fconst 1.0\nfconst 0.0\nfdiv\n",
        // An int zero widens to 0.0 on the fdiv path.
        "fconst 1.0\niconst 0\nfdiv\n",
    ] {
        let err = run_err(source);
        assert_eq!(err.line, 3, "in program {source:?}");
        assert_eq!(err.kind, RunErrorKind::DivideByZero);
    }
}

#[test]
fn fneg_widens_an_int_operand() {
    let (output, result) = run("iconst 3\nfneg\ntop\n");
    result.unwrap();
    assert_eq!(output, "-3\n");
}

#[test]
fn ineg_and_ibnot() {
    let (output, result) = run("iconst 5\nineg\ntop\nibnot\ntop\n");
    result.unwrap();
    assert_eq!(output, "-5\n0\n");

    let (output, result) = run("iconst 0\nibnot\ntop\n");
    result.unwrap();
    assert_eq!(output, "1\n");
}

#[test]
fn conversions_reject_the_wrong_variant() {
    let err = run_err("fconst 1.0\ni2f\n");
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        RunErrorKind::TypeMismatch {
            expected: "int",
            got: "float"
        }
    );

    let err = run_err("iconst 1\nf2i\n");
    assert_eq!(
        err.kind,
        RunErrorKind::TypeMismatch {
            expected: "float",
            got: "int"
        }
    );
}

#[test]
fn float_comparison_result_feeds_integer_ops() {
    // flt pushes Int(1), which iadd then consumes.
    let (output, result) = run("fconst 1.0\nfconst 2.0\nflt\niconst 1\niadd\ntop\n");
    result.unwrap();
    assert_eq!(output, "2\n");
}

#[test]
fn float_ops_accept_mixed_operands_without_mutating_them() {
    let (output, result) = run("iconst 1\nfconst 0.5\nfadd\ntop\n");
    result.unwrap();
    assert_eq!(output, "1.5\n");
}

#[test]
fn output_before_the_fault_is_kept() {
    let (output, result) = run("iconst 2\ntop\nval nope\n");
    assert_eq!(output, "2\n");
    assert!(result.is_err());
}

#[test]
fn empty_program_is_a_clean_run() {
    let (output, result) = run("");
    result.unwrap();
    assert_eq!(output, "");
}

#[test]
fn malformed_programs_surface_as_program_errors() {
    let (output, result) = run("iconst 1\nwat\n");
    assert_eq!(output, "");
    match result {
        Err(MachineError::Program(err)) => {
            assert_eq!(err.line, 2);
            assert_eq!(
                err.kind,
                ProgramErrorKind::UnknownOpcode {
                    token: "wat".to_string()
                }
            );
        }
        other => panic!("expected a program error, got {other:?}"),
    }
}

#[test]
fn whitespace_layout_does_not_change_execution() {
    let (a, _) = run("iconst 5\niconst 3\niadd\ntop\n");
    let (b, _) = run("  iconst 5 iconst 3\t iadd  top ");
    assert_eq!(a, b);
}
