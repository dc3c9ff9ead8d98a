use clap::Parser;
use id3_tree::data::dataset::Dataset;
use id3_tree::trees::builder::build_tree_with_params;
use id3_tree::trees::params::TreeParams;
use id3_tree::trees::render::Lines;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Learn an ID3 decision tree from a categorical CSV file and print it.
#[derive(Parser, Debug)]
#[command(name = "id3", version, about)]
struct Cli {
    /// CSV file with a header row; the built-in PlayTennis data when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Column holding the boolean outcome
    #[arg(short, long, default_value = "PlayTennis")]
    label: String,

    /// Identifier column to ignore
    #[arg(long)]
    id_column: Option<String>,

    /// Build sibling subtrees in parallel
    #[arg(long)]
    parallel: bool,

    /// Spaces before every rendered line
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = match &cli.data {
        Some(path) => Dataset::from_path(path, &cli.label, cli.id_column.as_deref())?,
        None => Dataset::play_tennis(),
    };
    info!(
        records = dataset.len(),
        attributes = ?dataset.attributes(),
        "Loaded dataset"
    );

    let mut params = TreeParams::new();
    params.set_parallel(cli.parallel);

    let tree = build_tree_with_params(&dataset, dataset.attributes(), &params)?;
    for line in Lines::with_indent(&tree, cli.indent) {
        println!("{}", line);
    }
    Ok(())
}
