#![cfg(test)]

mod helpers;

use helpers::instance_path;
use helpers::run_solver;
use helpers::run_solver_with_args;
use helpers::run_solver_with_options;

macro_rules! malformed_instance_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            let run = run_solver(instance_path(stringify!($name)), stringify!($name));

            assert_eq!(run.exit_code, 3, "stderr: {}", run.stderr);
            assert!(run.stdout.is_empty());
            assert!(run.stderr.contains("The instance file is invalid"));
        }
    };
}

malformed_instance_test!(malformed_two_matte);
malformed_instance_test!(malformed_finish);
malformed_instance_test!(malformed_zero_width);
malformed_instance_test!(malformed_missing_width);
malformed_instance_test!(malformed_position);
malformed_instance_test!(malformed_missing_finish);

#[test]
fn missing_instance_file_is_source_unavailable() {
    let run = run_solver(instance_path("does_not_exist"), "missing_instance_file");

    assert_eq!(run.exit_code, 2);
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("Failed to read"));
}

#[test]
fn width_above_the_maximum_is_malformed() {
    let run = run_solver_with_options(
        instance_path("mixed_requirements"),
        ["--max-width".to_owned(), "4".to_owned()],
        "width_above_maximum",
    );

    assert_eq!(run.exit_code, 3);
}

#[test]
fn missing_arguments_are_a_usage_error() {
    let run = run_solver_with_args(std::iter::empty(), "missing_arguments");

    assert_eq!(run.exit_code, 1);
    assert!(run.stdout.is_empty());
}

#[test]
fn unknown_option_is_a_usage_error() {
    let run = run_solver_with_options(
        instance_path("single_matte"),
        ["--no-such-option".to_owned()],
        "unknown_option",
    );

    assert_eq!(run.exit_code, 1);
}

#[test]
fn verbose_mode_reports_the_time_taken() {
    let run = run_solver_with_options(
        instance_path("mixed_requirements"),
        ["--verbose".to_owned(), "--omit-timestamp".to_owned()],
        "verbose_mode",
    );

    assert_eq!(run.exit_code, 0);
    let lines = run.stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "G G G G M");
    assert!(lines[1].starts_with("Time: ") && lines[1].ends_with(" milliseconds"));
}

#[test]
fn statistics_are_logged_on_stderr() {
    let run = run_solver_with_options(
        instance_path("forced_chain"),
        ["--log-statistics".to_owned()],
        "statistics_logging",
    );

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, "M M\n");
    assert!(run.stderr.contains("# STAT objective=2"));
    assert!(run.stderr.contains("# STAT search_num_unit_propagations=2"));
}
