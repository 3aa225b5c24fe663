use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cloud_nsga::instance::ProblemInstance;
use cloud_nsga::nsga::{Nsga2Optimizer, extract_front};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Finds Pareto-optimal task-to-VM schedules with NSGA-II and prints the
/// front as JSON
struct Args {
    /// Path to JSON file with tasks, VMs and optional parameters
    #[arg(short, long, conflicts_with_all = ["tasks", "vms"])]
    instance: Option<PathBuf>,

    /// Number of random tasks to generate when no instance is given
    #[arg(long, default_value_t = 10)]
    tasks: usize,

    /// Number of random VMs to generate when no instance is given
    #[arg(long, default_value_t = 5)]
    vms: usize,

    /// Population size
    #[arg(long)]
    pop_size: Option<usize>,

    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,

    /// Crossover probability (0.0-1.0)
    #[arg(long)]
    crossover_prob: Option<f64>,

    /// Per-gene mutation probability (0.0-1.0)
    #[arg(long)]
    mutation_prob: Option<f64>,

    /// Seed for instance generation and the optimizer
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> cloud_nsga::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut instance = match &args.instance {
        Some(path) => ProblemInstance::from_path(path)?,
        None => {
            let seed = args.seed.unwrap_or(42);
            let mut rng = StdRng::seed_from_u64(seed);
            ProblemInstance::random(args.tasks, args.vms, &mut rng)
        }
    };

    let config = &mut instance.config;
    if let Some(v) = args.pop_size {
        config.pop_size = v;
    }
    if let Some(v) = args.generations {
        config.generations = v;
    }
    if let Some(v) = args.crossover_prob {
        config.crossover_prob = v;
    }
    if let Some(v) = args.mutation_prob {
        config.mutation_prob = v;
    }
    if let Some(v) = args.seed {
        config.seed = v;
    }

    let mut optimizer = Nsga2Optimizer::new(&instance.tasks, &instance.vms, instance.config.clone())?;
    let front = extract_front(optimizer.run());
    info!("Pareto front holds {} schedules", front.len());

    println!("{}", serde_json::to_string_pretty(&front)?);
    Ok(())
}
