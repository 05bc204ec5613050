use std::io;

use clap::Parser;
use log::info;

use trilat_core::field::FieldSettings;
use trilat_output::report::write_results;
use trilat_runner::runner::run_simulation;

use crate::simulation::builder::SimulationBuilder;
use crate::simulation::error::SimError;
use crate::simulation::prompt::ask_field_settings;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

pub(crate) mod simulation;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct CliArgs {
    #[arg(short = 'c', long, value_name = "CONFIG_FILE", conflicts_with_all = ["nodes", "field", "radius", "noise", "anchors", "seed", "runs"])]
    config: Option<String>,

    /// Number of nodes N
    #[arg(long, allow_negative_numbers = true)]
    nodes: Option<i64>,

    /// Side length L of the square field
    #[arg(long, allow_negative_numbers = true)]
    field: Option<i64>,

    /// Radio range R
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<i64>,

    /// Ranging noise r in percent
    #[arg(long, allow_negative_numbers = true)]
    noise: Option<i64>,

    /// Anchor share f in percent
    #[arg(long, allow_negative_numbers = true)]
    anchors: Option<i64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1)]
    runs: usize,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl CliArgs {
    fn field_flags(&self) -> [Option<i64>; 5] {
        [self.nodes, self.field, self.radius, self.noise, self.anchors]
    }

    fn field_settings(&self) -> Result<Option<FieldSettings>, SimError> {
        let flags = self.field_flags();
        if flags.iter().all(Option::is_none) {
            return Ok(None);
        }
        let mut values = [0i64; 5];
        for (idx, flag) in flags.iter().enumerate() {
            values[idx] = flag.ok_or(SimError::MissingArgument(FLAG_NAMES[idx]))?;
        }
        Ok(Some(FieldSettings {
            node_count: values[0],
            field_size: values[1],
            radius: values[2],
            noise_percent: values[3],
            anchor_percent: values[4],
        }))
    }
}

const FLAG_NAMES: [&str; 5] = ["nodes", "field", "radius", "noise", "anchors"];

fn builder_for(args: &CliArgs) -> Result<SimulationBuilder, SimError> {
    if let Some(config) = &args.config {
        return SimulationBuilder::from_config(config);
    }
    let field_settings = match args.field_settings()? {
        Some(field_settings) => field_settings,
        None => ask_field_settings(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    Ok(SimulationBuilder::from_settings(
        field_settings,
        args.seed,
        args.runs,
    ))
}

fn simulate(args: &CliArgs) -> Result<(), SimError> {
    let builder = builder_for(args)?;
    builder.initiate_logging(&args.log_level)?;
    let plan = builder.plan()?;
    let mut sampler = builder.sampler();

    let results = run_simulation(&plan, &mut sampler);
    write_results(&mut io::stdout().lock(), &results.runs, &results.summaries)?;
    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    let start = std::time::Instant::now();
    if let Err(e) = simulate(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    info!("Simulation finished in {} ms.", start.elapsed().as_millis());
}
