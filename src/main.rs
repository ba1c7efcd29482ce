use analytics::{analyze_sales_data, ReportOptions, SellerReport};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use configuration::UnknownReferencePolicy;
use core_types::SalesDataset;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the sales report application.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Report(args) => handle_report(args, cli.config.as_deref()),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller revenue, profit and bonus report from raw sales data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults to `config.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log aggregation details to stderr. Repeat for more (-vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the seller report from a JSON dataset.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// JSON dataset with `sellers`, `products` and `purchase_records`. Use `-` for stdin.
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the report. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Override `report.unknown_references` from the config.
    #[arg(long, value_enum)]
    unknown_references: Option<UnknownReferencePolicy>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

/// Logs go to stderr so that stdout carries only the report.
fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the orchestration of the report command.
fn handle_report(args: ReportArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = configuration::load_config(config_path).context("Failed to load configuration")?;
    if let Some(policy) = args.unknown_references {
        config.report.unknown_references = policy;
    }

    let dataset = read_dataset(&args.input)?;
    let options = ReportOptions::from_config(&config).context("Failed to build report policies")?;
    let rows = analyze_sales_data(dataset.as_ref(), &options)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
        OutputFormat::Table => writeln!(writer, "{}", render_table(&rows))?,
    }
    writer.flush()?;

    Ok(())
}

/// Reads the dataset. A JSON `null` document is a missing dataset.
fn read_dataset(path: &Path) -> anyhow::Result<Option<SalesDataset>> {
    let reader: Box<dyn Read> = if path == Path::new("-") {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(path).with_context(|| format!("Failed to open {}", path.display()))?)
    };

    let dataset = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
    Ok(dataset)
}

fn render_table(rows: &[SellerReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top products",
    ]);

    for (rank, row) in rows.iter().enumerate() {
        let top = row
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&row.seller_id),
            Cell::new(&row.name),
            Cell::new(row.revenue).set_alignment(CellAlignment::Right),
            Cell::new(row.profit).set_alignment(CellAlignment::Right),
            Cell::new(row.sales_count).set_alignment(CellAlignment::Right),
            Cell::new(row.bonus).set_alignment(CellAlignment::Right),
            Cell::new(top),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cli_parses_report_arguments() {
        let cli = Cli::try_parse_from([
            "sales-report",
            "-v",
            "report",
            "--input",
            "data.json",
            "--format",
            "table",
            "--unknown-references",
            "skip",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        let Commands::Report(args) = cli.command;
        assert_eq!(args.input, PathBuf::from("data.json"));
        assert!(matches!(args.format, OutputFormat::Table));
        assert_eq!(args.unknown_references, Some(UnknownReferencePolicy::Skip));
    }

    #[test]
    fn null_document_reads_as_missing_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "null").unwrap();

        assert!(read_dataset(&path).unwrap().is_none());
    }

    #[test]
    fn non_array_collection_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{ "sellers": "nope", "products": [], "purchase_records": [] }"#).unwrap();

        assert!(read_dataset(&path).is_err());
    }

    #[test]
    fn report_command_writes_json_rows() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("data.json");
        let output = dir.path().join("report.json");
        let config = dir.path().join("report.toml");
        fs::write(&config, "[report]\ntop_products_limit = 5\n").unwrap();
        fs::write(
            &input,
            r#"{
                "sellers": [{ "id": "seller_1", "first_name": "Alexey", "last_name": "Petrov" }],
                "products": [{ "sku": "SKU_001", "purchase_price": 60, "quantity": 1 }],
                "purchase_records": [{
                    "seller_id": "seller_1",
                    "total_amount": 180,
                    "items": [{ "sku": "SKU_001", "quantity": 2, "sale_price": 100, "discount": 10 }]
                }]
            }"#,
        )
        .unwrap();

        let args = ReportArgs {
            input,
            output: Some(output.clone()),
            format: OutputFormat::Json,
            unknown_references: None,
        };
        handle_report(args, Some(&config)).unwrap();

        let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(rows[0]["seller_id"], "seller_1");
        assert_eq!(rows[0]["revenue"], 180.0);
        assert_eq!(rows[0]["profit"], 60.0);
        assert_eq!(rows[0]["bonus"], 9.0);
    }
}
