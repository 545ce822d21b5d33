mod board;
mod direction;
mod input;
mod report;
mod solver;

mod prelude;
use prelude::*;


#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

/// Finds a shortest sequence of slides that solves a 15-puzzle.
#[derive(Debug, Parser)]
#[command(name = "fifteen", version)]
struct Args {
    /// File whose first line holds the 16 tiles in row-major order, 0 for the blank
    #[arg(value_name = "INITIAL_STATE_FILE")]
    initial_state: PathBuf,

    /// Goal layout the search aims for
    #[arg(short, long, value_enum, default_value_t = GoalLayout::BlankFirst)]
    goal: GoalLayout,

    /// File each run's statistics are appended to
    #[arg(long, default_value = "report.dat")]
    report: PathBuf,

    /// Do not append to the report file
    #[arg(long)]
    no_report: bool,

    /// Print the solution as a sequence of blank moves
    #[arg(short, long)]
    print_path: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(-1);
        }
    };

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{}", e);
    }
    log::debug!("Command line options: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        let code = e
            .downcast_ref::<input::InputError>()
            .map_or(-1, |e| e.exit_code());
        std::process::exit(code);
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let board = input::read_initial_state(&args.initial_state)?;
    print!("{}", board);

    let ida = Ida::new(Manhattan::new(args.goal));
    let estimate = ida.heuristic().estimate(&board);
    print!("Initial Estimate = {}\nThreshold = {} ", estimate, estimate);
    std::io::stdout().flush()?;

    let start = cpu_time::ProcessTime::try_now()?;
    let solution = ida.solve_observed(&board, |threshold| {
        if let Err(e) = report::write_threshold(&mut std::io::stdout(), threshold) {
            log::warn!("Could not flush threshold {}: {}", threshold, e);
        }
    });
    let elapsed = start.try_elapsed()?;
    log::info!(
        "Estimate {} raised through {:?} in {} iterations",
        solution.initial_estimate,
        solution.thresholds,
        solution.stats.iterations
    );

    debug_assert_eq!(
        board.apply_all(solution.moves.iter().copied()),
        Some(Board::solved(ida.heuristic().goal()))
    );

    let report = report::Report {
        input: &args.initial_state,
        solution: &solution,
        elapsed,
    };

    let mut out = std::io::stdout().lock();
    report.write_summary(&mut out)?;
    if args.print_path {
        report.write_path(&mut out)?;
    }

    if !args.no_report {
        if let Err(e) = report.append_to(&args.report) {
            log::warn!("Could not append to {}: {:#}", args.report.display(), e);
        }
    }

    Ok(())
}
