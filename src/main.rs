//! Command line access to the yield chart
//!
//! Prints per-isotope listings or aggregate yields for a directory of target
//! data files without any interactive prompts.

// isoyield crates
use isoyield::chart::{Error, IonSource, Result, TableSnapshot, YieldChart, DEFAULT_DATA_DIR};
use isoyield::utils::{f, NumFormat};

// external crates
use clap::{Args, Parser, Subcommand};
use log::error;

/// Explore ISOL yield data by isotope and ion source
#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    options: Options,
}

#[derive(Args, Debug)]
struct Options {
    /// Directory containing <target>.dat files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    data_dir: String,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every measurement for one isotope
    Describe {
        /// Neutron number
        #[arg(required_unless_present = "nuclide", requires = "z")]
        n: Option<i32>,

        /// Proton number
        z: Option<i32>,

        /// Nuclide name instead of (N, Z), e.g. Sn132
        #[arg(long, conflicts_with = "n")]
        nuclide: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Average and maximum yields for every cell with data
    Snapshot {
        /// Ion source filter (0=All 1=Re surface 2=Ta surface 3=TRILIS 4=IG-LIS 5=FEBIAD)
        #[arg(short, long, value_parser = parse_source)]
        source: Option<IonSource>,

        /// Print the full chart as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.options);

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut chart = YieldChart::new();
    if cli.options.no_progress || cli.options.quiet {
        chart.disable_progress();
    }
    chart.load(&cli.options.data_dir)?;

    match cli.command {
        Command::Describe {
            n,
            z,
            nuclide,
            json,
        } => {
            let description = match (nuclide, n, z) {
                (Some(name), _, _) => chart.describe_nuclide(&name)?,
                (None, Some(n), Some(z)) => chart.describe(n, z)?,
                _ => return Err(Error::ParseError("expected a nuclide or (N, Z)".into())),
            };

            if json {
                println!("{}", description.to_json()?);
            } else {
                println!("{description}");
            }
        }
        Command::Snapshot { source, json } => {
            let snapshot = chart.get_table_snapshot(source);
            if json {
                println!("{}", snapshot.to_json()?);
            } else {
                print_snapshot(&snapshot);
            }
        }
    }

    Ok(())
}

/// Table of the non-empty cells of a snapshot
fn print_snapshot(snapshot: &TableSnapshot) {
    println!("Ion source: {}", snapshot.filter);
    println!("{:>4} {:>4} {:>12} {:>12}", "N", "Z", "Average", "Maximum");
    for (n, z, aggregate) in snapshot.non_empty() {
        println!(
            "{n:>4} {z:>4} {:>12} {:>12}",
            aggregate.average.sci(5, 2),
            aggregate.maximum.sci(5, 2)
        );
    }
}

/// Ion source from an id or a label
fn parse_source(s: &str) -> std::result::Result<IonSource, String> {
    match s.parse::<u8>() {
        Ok(id) => IonSource::try_from(id).map_err(|e| e.to_string()),
        Err(_) => IonSource::ALL
            .into_iter()
            .find(|source| source.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| f!("unknown ion source \"{s}\"")),
    }
}

/// Sets up logging at runtime to allow for multiple verbosity levels
fn init_logging(options: &Options) {
    stderrlog::new()
        .modules(["isoyield", "isoyield_chart"])
        .quiet(options.quiet)
        .verbosity(options.verbose as usize + 2)
        .show_level(false)
        .color(stderrlog::ColorChoice::Auto)
        .init()
        .unwrap_or_else(|e| eprintln!("failed to initialise logging: {e}"));
}
