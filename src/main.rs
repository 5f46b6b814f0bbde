use anyhow::{Context, Result};
use clap::Parser;
use emst::{total_weight, DualTreeBoruvka, EmstParams};
use log::info;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Computes the Euclidean minimum spanning tree of a set of points with Dual-Tree Boruvka.
#[derive(Parser, Debug)]
#[command(name = "emst", version)]
struct Args {
    /// CSV file with one point per line, coordinates separated by commas
    input: PathBuf,

    /// Maximum number of points in a leaf of the kd-tree
    #[arg(short, long, default_value_t = 1)]
    leaf_size: usize,

    /// Compare all pairs of points every round instead of searching the tree
    #[arg(long)]
    naive: bool,

    /// Where to write the edges as `lesser,greater,distance` lines. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = read_points(&args.input)?;
    info!("Loaded {} points from {}", data.len(), args.input.display());

    let params = EmstParams::builder()
        .leaf_size(args.leaf_size)
        .naive(args.naive)
        .build();
    let mut dtb = DualTreeBoruvka::new(&data, params).context("Invalid input points")?;
    let mst = dtb.compute_mst();

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for edge in &mst {
        writeln!(writer, "{},{},{}", edge.lesser, edge.greater, edge.distance)?;
    }
    writer.flush()?;

    info!("Total spanning tree length: {}", total_weight(&mst));
    Ok(())
}

fn read_points(path: &Path) -> Result<Vec<Vec<f64>>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    let mut data = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let point = line
            .split(',')
            .map(|num| num.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Line {} is not a list of numbers", line_no + 1))?;
        data.push(point);
    }
    Ok(data)
}
