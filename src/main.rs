use clap::Parser;
use fnchain::descriptor::{StepSpec, TermSpec, build};
use log::LevelFilter;

/// fnchain builds a scalar function from term and step descriptors and prints
/// its samples.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base term, e.g. `linear:1,0,2`, `power:1,0,1,2`, `sine:1,0,10` or
    /// `constant:3`.
    base: TermSpec,

    /// Steps applied in order, e.g. `mul:constant:3`, `sub:sine:2,0,1` or
    /// `clamp:-5,5`.
    steps: Vec<StepSpec>,

    /// Inputs to sample at. May be given several times.
    #[arg(short = 'x', long = "at", allow_negative_numbers = true)]
    at: Vec<f32>,

    /// Number of evenly spaced inputs over [0, 1], used when no `--at` is
    /// given.
    #[arg(short = 'n', long, default_value_t = 11)]
    samples: usize,

    /// Logs how the function is assembled.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let function = build(args.base.0, &args.steps).unwrap_or_else(|e| {
                                                       eprintln!("{e}");
                                                       std::process::exit(1);
                                                   });

    let inputs = if args.at.is_empty() {
        evenly_spaced(args.samples)
    } else {
        args.at
    };

    println!("f(x) = {function}");
    for x in inputs {
        match function.sample(x) {
            Ok(y) => println!("{x}\t{y}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}

/// Returns `count` inputs spread evenly over `[0, 1]`, both ends included.
#[allow(clippy::cast_precision_loss)]
fn evenly_spaced(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f32;
            (0..count).map(|i| i as f32 / last).collect()
        },
    }
}
