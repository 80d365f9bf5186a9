// Integration tests for the Befunge-93 interpreter

use fungetty::interpreter::config::InterpreterConfig;
use fungetty::interpreter::engine::{Halt, Interpreter};
use fungetty::interpreter::errors::HistoryError;
use fungetty::interpreter::pointer::Direction;
use fungetty::interpreter::random::ScriptedDirections;
use std::fs;
use std::path::Path;

fn load_demo(name: &str) -> String {
    let path = Path::new("demos").join(name);
    fs::read_to_string(path).expect("Failed to read demo file")
}

fn recorded(source: &str) -> Interpreter {
    Interpreter::new(source, InterpreterConfig::default().with_history(true))
}

#[test]
fn test_hello_world() {
    let source = load_demo("hello.bf");
    assert_eq!(fungetty::run(&source), "Hello, World!");
}

#[test]
fn test_countdown_loop() {
    let source = load_demo("countdown.bf");
    let mut interpreter = Interpreter::new(&source, InterpreterConfig::default());

    assert_eq!(interpreter.run(), "54321");
    assert_eq!(interpreter.halt(), Some(Halt::Terminated));
    assert_eq!(interpreter.stack().values(), &[0]);
}

#[test]
fn test_golden_three_row_program() {
    let source = load_demo("golden.bf");
    let config = InterpreterConfig::default().with_step_limit(100);
    let mut interpreter = Interpreter::new(&source, config);

    assert_eq!(interpreter.grid().width(), 9);
    assert_eq!(interpreter.grid().height(), 3);

    // After printing 1 the pointer circles column 7 forever, printing the
    // code 2 once every three cycles
    let output = interpreter.run();
    let expected = format!("1{}", "\u{2}".repeat(27));
    assert_eq!(output, expected);
    assert_eq!(interpreter.steps(), 100);
    assert_eq!(interpreter.halt(), Some(Halt::StepLimit));

    // Deterministic: a second run gives the same output
    assert_eq!(fungetty::run_with_config(&source, config), expected);
}

#[test]
fn test_self_modifying_program() {
    let source = load_demo("selfmod.bf");
    let mut interpreter = Interpreter::new(&source, InterpreterConfig::default());

    assert_eq!(interpreter.run(), "1");
    assert_eq!(interpreter.steps(), 14);
    assert_eq!(interpreter.pointer().x, 5);
    assert_eq!(interpreter.grid().read(5, 0), '@');
    assert!(interpreter.grid().modified_cells().contains(&(5, 0)));
}

#[test]
fn test_string_mode_pushes_in_order() {
    assert_eq!(fungetty::run("\"Hi\",,@"), "iH");
}

#[test]
fn test_string_mode_pushes_terminator() {
    // `@` inside quotes is data, not a halt
    assert_eq!(fungetty::run("\"@\".@"), "64");
}

#[test]
fn test_trampoline_skips_cell() {
    assert_eq!(fungetty::run("#@1.@"), "1");
}

#[test]
fn test_wrap_left_from_origin() {
    let mut interpreter = Interpreter::new("1.@", InterpreterConfig::default());
    interpreter.set_direction(Direction::Left);

    interpreter.step();
    assert_eq!(interpreter.pointer().x, 2);
    assert_eq!(interpreter.pointer().y, 0);

    assert_eq!(interpreter.run(), "");
    assert_eq!(interpreter.halt(), Some(Halt::Terminated));
}

#[test]
fn test_wrap_vertically() {
    // Moving up from row 0 lands on the last row
    assert_eq!(fungetty::run("^\n@\n7"), "");
    assert_eq!(fungetty::run("v\n.\n@"), "0");
}

#[test]
fn test_put_then_get_round_trip() {
    // Store 'A' (65) at (5,0), then read it back
    assert_eq!(fungetty::run("88*1+50p50g.@"), "65");
}

#[test]
fn test_get_out_of_bounds_pushes_zero() {
    assert_eq!(fungetty::run("99g.@"), "0");
    assert_eq!(fungetty::run("01-0g.@"), "0");
}

#[test]
fn test_put_out_of_bounds_is_dropped() {
    let mut interpreter = Interpreter::new("199p@", InterpreterConfig::default());
    interpreter.run();

    assert_eq!(interpreter.halt(), Some(Halt::Terminated));
    assert!(interpreter.grid().modified_cells().is_empty());
    assert!(interpreter.stack().is_empty());
}

#[test]
fn test_put_invalid_code_point_is_dropped() {
    // -1 is not a code point; the cell keeps its old contents
    let mut interpreter = Interpreter::new("01-50p @", InterpreterConfig::default());
    interpreter.run();

    assert_eq!(interpreter.grid().read(5, 0), 'p');
    assert!(interpreter.grid().modified_cells().is_empty());
}

#[test]
fn test_invalid_output_char_is_replaced() {
    assert_eq!(fungetty::run("01-,@"), "\u{FFFD}");
}

#[test]
fn test_step_limit_without_terminator() {
    let config = InterpreterConfig::default().with_step_limit(50);
    let mut interpreter = Interpreter::new("1.", config);

    let output = interpreter.run();
    assert_eq!(output, "1".repeat(25));
    assert_eq!(interpreter.steps(), 50);
    assert_eq!(interpreter.halt(), Some(Halt::StepLimit));
}

#[test]
fn test_step_limit_keeps_prior_output() {
    let config = InterpreterConfig::default().with_step_limit(3);
    assert_eq!(fungetty::run_with_config("12.3.@", config), "2");
}

#[test]
fn test_empty_program_halts() {
    for source in ["", "\n\n"] {
        let mut interpreter = Interpreter::new(source, InterpreterConfig::default());
        assert_eq!(interpreter.run(), "");
        assert_eq!(interpreter.halt(), Some(Halt::EmptyProgram));
        assert_eq!(interpreter.steps(), 0);
    }
}

#[test]
fn test_blank_program_runs_to_step_limit() {
    let config = InterpreterConfig::default().with_step_limit(10);
    let mut interpreter = Interpreter::new("   ", config);
    assert_eq!(interpreter.run(), "");
    assert_eq!(interpreter.halt(), Some(Halt::StepLimit));
}

#[test]
fn test_crlf_line_endings() {
    let interpreter = Interpreter::new("v\r\n@", InterpreterConfig::default());
    assert_eq!(interpreter.grid().width(), 1);
    assert_eq!(interpreter.grid().height(), 2);
    assert_eq!(fungetty::run("v\r\n@"), "");
}

#[test]
fn test_random_direction_is_injectable() {
    let config = InterpreterConfig::default();

    let script = ScriptedDirections::new(vec![Direction::Right]);
    let mut right = Interpreter::with_direction_source("?1.@", config, script);
    assert_eq!(right.run(), "1");

    // Left wraps straight onto `@`
    let script = ScriptedDirections::new(vec![Direction::Left]);
    let mut left = Interpreter::with_direction_source("?1.@", config, script);
    assert_eq!(left.run(), "");
    assert_eq!(left.steps(), 1);
}

#[test]
fn test_random_direction_with_entropy_terminates() {
    // Three headings out of `?` hit a terminator; left loops back round
    let source = "v@ \n>?@\n @ ";
    for _ in 0..20 {
        let mut interpreter = Interpreter::new(source, InterpreterConfig::default());
        interpreter.run();
        assert_eq!(interpreter.halt(), Some(Halt::Terminated));
        assert_eq!(interpreter.output(), "");
    }
}

#[test]
fn test_recorded_run_replays_same_output() {
    let source = load_demo("hello.bf");
    let mut interpreter = recorded(&source);
    let output = interpreter.run();

    interpreter.rewind_to_start().unwrap();
    assert_eq!(interpreter.output(), "");
    assert_eq!(interpreter.history_position(), 0);

    while interpreter.step_forward().is_ok() {}
    assert_eq!(interpreter.output(), output);
    assert_eq!(interpreter.halt(), Some(Halt::Terminated));
    assert_eq!(
        interpreter.history_position() + 1,
        interpreter.total_snapshots()
    );
}

#[test]
fn test_history_navigation_errors() {
    let mut interpreter = recorded("@");
    interpreter.run();
    interpreter.rewind_to_start().unwrap();

    assert_eq!(interpreter.step_backward(), Err(HistoryError::AtStart));

    interpreter.jump_to_end().unwrap();
    assert!(matches!(
        interpreter.step_forward(),
        Err(HistoryError::AtEnd { .. })
    ));
}

#[test]
fn test_history_disabled_has_no_snapshots() {
    let mut interpreter = Interpreter::new("12+.@", InterpreterConfig::default());
    interpreter.run();

    assert_eq!(interpreter.total_snapshots(), 0);
    assert_eq!(interpreter.rewind_to_start(), Err(HistoryError::NoSnapshots));
}

#[test]
fn test_step_backward_restores_overwritten_cell() {
    let source = load_demo("selfmod.bf");
    let mut interpreter = recorded(&source);
    interpreter.run();
    assert_eq!(interpreter.grid().read(5, 0), '@');

    // Snapshot 6 is the state right after `p` ran
    interpreter.rewind_to_start().unwrap();
    for _ in 0..6 {
        interpreter.step_forward().unwrap();
    }
    assert_eq!(interpreter.grid().read(5, 0), '@');

    interpreter.step_backward().unwrap();
    assert_eq!(interpreter.grid().read(5, 0), 'p');
    assert!(interpreter.grid().modified_cells().is_empty());
}

#[test]
fn test_snapshot_budget_truncates_history_only() {
    let source = load_demo("golden.bf");
    let config = InterpreterConfig::default()
        .with_step_limit(5_000)
        .with_history(true)
        .with_snapshot_memory_limit(16 * 1024);
    let mut limited = Interpreter::new(&source, config);
    let output = limited.run();

    assert!(limited.history_truncated());
    assert!(limited.snapshot_memory_usage() <= 16 * 1024);
    assert_eq!(limited.steps(), 5_000);

    let unrecorded =
        fungetty::run_with_config(&source, InterpreterConfig::default().with_step_limit(5_000));
    assert_eq!(output, unrecorded);
}

#[test]
fn test_resuming_from_rewind_replaces_recorded_timeline() {
    // The recorded run draws Right; the resumed run draws Left and halts at once
    let script = ScriptedDirections::new(vec![Direction::Right, Direction::Left]);
    let config = InterpreterConfig::default().with_history(true);
    let mut interpreter = Interpreter::with_direction_source("?1.@", config, script);
    assert_eq!(interpreter.run(), "1");

    interpreter.rewind_to_start().unwrap();
    assert_eq!(interpreter.run(), "");
    assert_eq!(interpreter.steps(), 1);
    assert_eq!(interpreter.total_snapshots(), 3);

    interpreter.jump_to_end().unwrap();
    assert_eq!(interpreter.output(), "");
    assert_eq!(interpreter.halt(), Some(Halt::Terminated));
}

#[test]
fn test_trailing_line_break_adds_no_row() {
    let mut interpreter = Interpreter::new("^\n@\n", InterpreterConfig::default());
    assert_eq!(interpreter.grid().height(), 2);

    // Up from row 0 wraps onto the `@` row, not onto a blank row
    interpreter.step();
    assert_eq!(interpreter.pointer().y, 1);
    assert_eq!(interpreter.current_char(), '@');
}
