use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use hamstar::experiment::{self, ExperimentConfig, SizeSummary, TrialRecord};
use hamstar::{generate, Solver, SolveError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

#[derive(Parser)]
#[command(
    name = "hamstar",
    version,
    about = "Hamiltonian* path toolkit: generate adversarial graphs, solve and time them"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one graph and decide it.
    Solve {
        /// Strategy name: exhaustive, component-pruned or dp.
        #[arg(long)]
        strategy: String,
        /// Block size; the graph has 3n vertices.
        #[arg(long)]
        n: usize,
        /// Seed for reproducible graphs.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the adjacency matrix.
        #[arg(long)]
        show_graph: bool,
    },
    /// Time a strategy over several block sizes.
    Measure {
        #[arg(long)]
        strategy: String,
        /// Block sizes to run (defaults depend on the strategy).
        #[arg(long = "n-list", num_args = 1..)]
        n_list: Vec<usize>,
        /// Repetitions per block size.
        #[arg(long, default_value_t = 1)]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, records: &[TrialRecord]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(records),
            OutputFormat::Table => write_table(records),
            OutputFormat::Json => write_json(records),
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let solver = Solver::new();

    let result = match cli.command {
        Command::Solve {
            strategy,
            n,
            seed,
            show_graph,
        } => cli_solve(&solver, &strategy, n, seed, show_graph),
        Command::Measure {
            strategy,
            n_list,
            trials,
            seed,
            format,
        } => cli_measure(&solver, &strategy, n_list, trials, seed, format),
    };

    if let Err(err) = result {
        eprintln!("hamstar: {err}");
        let code = match err {
            CliError::Solve(SolveError::InvalidStrategy { .. }) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hamstar=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

#[derive(Debug)]
enum CliError {
    Solve(SolveError),
    Output(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Solve(err) => write!(f, "{err}"),
            CliError::Output(msg) => write!(f, "output error: {msg}"),
        }
    }
}

impl From<SolveError> for CliError {
    fn from(err: SolveError) -> Self {
        CliError::Solve(err)
    }
}

fn cli_solve(
    solver: &Solver,
    strategy: &str,
    n: usize,
    seed: Option<u64>,
    show_graph: bool,
) -> Result<(), CliError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let instance = generate(n, &mut rng)?;
    let outcome = solver.execute_timed(&instance.graph, instance.start, instance.end, strategy)?;

    if show_graph {
        print!("{}", instance.graph);
    }
    println!();
    println!("=== HAMILTONIAN* PATH SOLVER ===");
    println!("Strategy   : {strategy}");
    println!("Vertices   : {}", instance.graph.len());
    println!("Start node : {}", instance.start);
    println!("End node   : {}", instance.end);
    println!(
        "Result     : {}",
        if outcome.found { "FOUND" } else { "NOT FOUND" }
    );
    println!("Time       : {:.6} s", outcome.elapsed.as_secs_f64());
    println!("================================");
    Ok(())
}

fn cli_measure(
    solver: &Solver,
    strategy: &str,
    n_list: Vec<usize>,
    trials: usize,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut config = ExperimentConfig::for_strategy(strategy);
    if !n_list.is_empty() {
        config.sizes = n_list;
    }
    config.trials = trials;
    // One base seed for every size so a printed seed reproduces the run.
    config.seed = Some(seed.unwrap_or_else(rand::random));
    solver.strategy(strategy)?;

    let mut sys = System::new();
    let mut records = Vec::new();
    let mut memory = Vec::new();
    let total = config.sizes.len();
    for (idx, &n) in config.sizes.iter().enumerate() {
        eprint!("[{}/{}] {} n={} ({} trials)... ", idx + 1, total, strategy, n, trials);
        let size_config = ExperimentConfig {
            sizes: vec![n],
            ..config.clone()
        };
        let before = rss_kib(&mut sys);
        let batch = experiment::run(solver, &size_config)?;
        let after = rss_kib(&mut sys);
        let found = batch.iter().filter(|r| r.found).count();
        let mean = batch.iter().map(|r| r.elapsed_secs).sum::<f64>() / batch.len().max(1) as f64;
        eprintln!("found {found}/{}, mean {mean:.6}s", batch.len());
        memory.push((n, after.saturating_sub(before)));
        records.extend(batch);
    }

    print_summary(&experiment::summarize(&records), &memory, config.seed);
    format.write(&records).map_err(CliError::Output)
}

fn print_summary(summaries: &[SizeSummary], memory: &[(usize, u64)], seed: Option<u64>) {
    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(72));
    if let Some(seed) = seed {
        eprintln!("seed: {seed}");
    }
    eprintln!(
        "{:>4}  {:>6}  {:>6}  {:>12}  {:>12}  {:>12}  {:>10}",
        "n", "trials", "found", "min_s", "mean_s", "max_s", "rss_kib"
    );
    for s in summaries {
        let rss = memory
            .iter()
            .find(|(n, _)| *n == s.n)
            .map_or(0, |(_, kib)| *kib);
        eprintln!(
            "{:>4}  {:>6}  {:>6}  {:>12.6}  {:>12.6}  {:>12.6}  {:>10}",
            s.n, s.trials, s.found, s.min_secs, s.mean_secs, s.max_secs, rss
        );
    }
    if summaries.len() >= 2 {
        let first = &summaries[0];
        let last = &summaries[summaries.len() - 1];
        if first.mean_secs > 0.0 {
            eprintln!(
                "scaling: {:.1}x from n={} to n={}",
                last.mean_secs / first.mean_secs,
                first.n,
                last.n
            );
        }
    }
    eprintln!("{}", "=".repeat(72));
}

fn write_csv(records: &[TrialRecord]) -> Result<(), String> {
    println!("strategy,n,trial,result,time_sec");
    for r in records {
        println!(
            "{},{},{},{},{:.9}",
            r.strategy, r.n, r.trial, r.found, r.elapsed_secs
        );
    }
    Ok(())
}

fn write_table(records: &[TrialRecord]) -> Result<(), String> {
    println!(
        "{:<18} {:>4} {:>6} {:>7} {:>14}",
        "strategy", "n", "trial", "result", "time_sec"
    );
    println!("{}", "-".repeat(53));
    for r in records {
        println!(
            "{:<18} {:>4} {:>6} {:>7} {:>14.9}",
            r.strategy, r.n, r.trial, r.found, r.elapsed_secs
        );
    }
    Ok(())
}

fn write_json(records: &[TrialRecord]) -> Result<(), String> {
    let body = serde_json::to_string_pretty(records).map_err(|e| e.to_string())?;
    println!("{body}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        // sysinfo reports bytes
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}
