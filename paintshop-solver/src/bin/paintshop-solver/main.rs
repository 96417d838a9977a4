mod parsers;
mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use paintshop_solver::options::PositionSelectionStrategy;
use paintshop_solver::options::SolverOptions;
use paintshop_solver::results::OptimisationResult;
use paintshop_solver::statistics::configure_statistic_logging;
use paintshop_solver::Solution;
use paintshop_solver::Solver;
use parsers::paintshop::parse_paintshop;
use parsers::paintshop::DEFAULT_MAX_WIDTH;
use result::PaintshopError;
use result::PaintshopResult;

const NO_SOLUTION: &str = "No solution";

const EXIT_SOLUTION_FOUND: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_NO_SOLUTION: i32 = 4;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve. The file is line based:
    ///  - blank lines and lines starting with '#' are ignored,
    ///  - the first line holds the number of positions,
    ///  - every further line is one customer, given as pairs of a 1-based position and a finish
    ///    ('G' for glossy, 'M' for matte), for example '1 M 3 G 5 G'.
    ///
    /// A customer may ask for matte on at most one position.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Enables log message output from the solver and prints the time taken by the search after
    /// the solution.
    ///
    /// For printing statistics see the option "--log-statistics".
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Determines the position on which the search branches when no position is forced.
    #[arg(long = "position-selection", value_enum, default_value_t)]
    position_selection: PositionSelectionStrategy,

    /// Explores both finishes of a branching position concurrently.
    ///
    /// Possible values: bool
    #[arg(long = "parallel", verbatim_doc_comment)]
    parallel: bool,

    /// The largest number of positions an instance may declare.
    ///
    /// Possible values: usize
    #[arg(long = "max-width", default_value_t = DEFAULT_MAX_WIDTH, verbatim_doc_comment)]
    max_width: usize,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages. The call site is the file and line from which the message originated.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", default_value_t = false, verbatim_doc_comment)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) {
    if log_statistics {
        configure_statistic_logging("# STAT", None, None, Some(Box::new(std::io::stderr())));
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };

    match run(args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Solves the instance and prints the outcome. Returns the exit code of a completed run.
fn run(args: Args) -> PaintshopResult<i32> {
    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    );

    if paintshop_solver::asserts::PAINTSHOP_ASSERT_LEVEL_DEFINITION
        >= paintshop_solver::asserts::PAINTSHOP_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            paintshop_solver::asserts::PAINTSHOP_ASSERT_LEVEL_DEFINITION
        );
    }

    let source = std::fs::read_to_string(&args.instance_path)
        .map_err(|e| PaintshopError::source_unavailable(&args.instance_path, e))?;
    let instance = parse_paintshop(&source, args.max_width)?;
    debug!(
        "Read {} customers over {} positions from {}",
        instance.clauses.len(),
        instance.width,
        args.instance_path.display()
    );

    let options = SolverOptions {
        position_selection: args.position_selection,
        parallel: args.parallel,
    };
    let mut solver = Solver::with_options(instance.width, options)?;
    for clause in instance.clauses {
        solver.add_clause(clause)?;
    }

    let start = Instant::now();
    let result = solver.solve();
    let elapsed = start.elapsed();

    let mut stdout = std::io::stdout().lock();
    let exit_code = match &result {
        OptimisationResult::Optimal(solution) => {
            writeln!(stdout, "{}", stringify_solution(solution))?;
            if args.log_statistics {
                solver.log_statistics_with_objective(solution.matte_weight());
            }
            EXIT_SOLUTION_FOUND
        }
        OptimisationResult::Unsatisfiable => {
            writeln!(stdout, "{NO_SOLUTION}")?;
            if args.log_statistics {
                solver.log_statistics();
            }
            EXIT_NO_SOLUTION
        }
    };

    if args.verbose {
        writeln!(stdout, "Time: {} milliseconds", elapsed.as_millis())?;
    }
    stdout.flush()?;

    Ok(exit_code)
}

/// Renders the finishes in position order, separated by single spaces.
fn stringify_solution(solution: &Solution) -> String {
    solution.finishes().iter().map(|finish| finish.code()).join(" ")
}
