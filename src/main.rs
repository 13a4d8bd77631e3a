use partition_readings::{Breakdown, Partition, Pipeline};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "partition-readings",
    about = "Per partition statistics of time-series readings"
)]
struct Opt {
    /// Path to the input CSV file
    #[structopt(short, long, parse(from_os_str))]
    file: PathBuf,
    /// Output files partition
    #[structopt(short, long, possible_values = &["yearly", "monthly"])]
    partition: Partition,
    /// Statistics time bucket within a partition
    #[structopt(short, long, possible_values = &["daily", "hourly", "none"])]
    breakdown: Breakdown,
    /// Path to the output directory
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    log::debug!("{:?}", opt);

    let paths = Pipeline::new(&opt.file, &opt.output)
        .partition(opt.partition)
        .breakdown(opt.breakdown)
        .run()?;
    log::info!("{} files written", paths.len());

    Ok(())
}
