//! Runs the `paintshop-solver` binary on instance files for the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// What one run of the solver printed and how it exited.
#[derive(Debug)]
pub(crate) struct SolverRun {
    pub(crate) exit_code: i32,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl SolverRun {
    /// The first line printed on stdout.
    pub(crate) fn result_line(&self) -> &str {
        self.stdout.lines().next().unwrap_or("")
    }
}

pub(crate) fn instance_path(instance_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{instance_name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
}

pub(crate) fn run_solver(instance_path: impl AsRef<Path>, run_name: &str) -> SolverRun {
    run_solver_with_options(instance_path, std::iter::empty(), run_name)
}

pub(crate) fn run_solver_with_options(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = String>,
    run_name: &str,
) -> SolverRun {
    let args = args
        .into_iter()
        .chain(std::iter::once(
            instance_path.as_ref().display().to_string(),
        ))
        .collect::<Vec<_>>();

    run_solver_with_args(args, run_name)
}

/// Runs the solver with exactly `args`. The output files are named after `run_name`, which has to
/// be unique among the tests.
pub(crate) fn run_solver_with_args(
    args: impl IntoIterator<Item = String>,
    run_name: &str,
) -> SolverRun {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_paintshop-solver"));

    let output_directory = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let log_file_path = output_directory.join(format!("{run_name}.log"));
    let err_file_path = output_directory.join(format!("{run_name}.err"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read solver output");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read solver errors");
    std::fs::remove_file(log_file_path).expect("Failed to remove log file");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file");

    SolverRun {
        exit_code: status.code().expect("solver was not terminated by a signal"),
        stdout,
        stderr,
    }
}
