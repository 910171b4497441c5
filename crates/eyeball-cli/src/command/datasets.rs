use std::path::PathBuf;

use eyeball_datasets::DatasetSeed;
use eyeball_engine::{Measure, Sample};
use rand::Rng as _;
use serde::Serialize;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DatasetsArg {
    /// Seed for dataset generation as 32 hex digits (random if omitted)
    #[clap(long)]
    seed: Option<DatasetSeed>,
    /// Output file path (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DatasetDump {
    seed: DatasetSeed,
    datasets: Vec<DatasetEntry>,
}

#[derive(Debug, Serialize)]
struct DatasetEntry {
    label: String,
    tip: String,
    len: usize,
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    std_dev: f64,
    p90: f64,
    p95: f64,
    p99: f64,
    data: Vec<f64>,
}

impl DatasetEntry {
    fn new(sample: &Sample) -> Self {
        let stats = sample.stats();
        Self {
            label: sample.label().to_owned(),
            tip: sample.tip().to_owned(),
            len: sample.len(),
            min: stats.min,
            max: stats.max,
            mean: Measure::Mean.compute(sample),
            median: Measure::Median.compute(sample),
            std_dev: stats.std_dev,
            p90: Measure::P90.compute(sample),
            p95: Measure::P95.compute(sample),
            p99: Measure::P99.compute(sample),
            data: sample.values().to_vec(),
        }
    }
}

pub(crate) fn run(arg: &DatasetsArg) -> anyhow::Result<()> {
    let DatasetsArg { seed, output } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Generating datasets with seed {seed}...");
    let collection = eyeball_datasets::collection(seed);
    let dump = DatasetDump {
        seed,
        datasets: collection.iter().map(DatasetEntry::new).collect(),
    };

    let mut output = Output::from_output_path(output.clone())?;
    output.write_json(&dump)?;
    eprintln!(
        "Wrote {} datasets to {}",
        dump.datasets.len(),
        output.display_path()
    );
    Ok(())
}
