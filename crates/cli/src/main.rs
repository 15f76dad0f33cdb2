mod config;

use anyhow::{Context, Result, anyhow};
use assembly_core::schema::{AssignmentInput, ParticipationInput, PollInput};
use assembly_core::{Assignment, CollectionElement};
use clap::{Parser, Subcommand};
use config::Config;
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "assembly")]
#[command(about = "Typed records for assembly and election payloads", long_about = None)]
struct Cli {
    /// TOML config file (default: ./assembly.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export canonical JSON Schemas to the ./schemas directory
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
    /// Decode a JSON or YAML payload into typed records and print them
    Decode {
        input: PathBuf,
        /// Collection key (default from config: assignments/assignment)
        #[arg(long)]
        collection: Option<String>,
    },
    /// Print the ranked candidate ids of each assignment in a payload
    Candidates { input: PathBuf },
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// Export JSON Schema files for the input shapes
    Export {
        /// Output directory (default: ./schemas)
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config)?;

    match cli.command {
        Commands::Schema { command } => match command {
            SchemaCommands::Export { out_dir } => schema_export(&out_dir),
        },
        Commands::Decode { input, collection } => {
            let collection = collection.unwrap_or_else(|| config.decode.collection.clone());
            decode(&input, &collection, &config)
        }
        Commands::Candidates { input } => candidates(&input),
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log.filter)
            .with_context(|| format!("invalid log filter `{}`", config.log.filter))?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

fn schema_export(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let assignment_schema = schema_for!(AssignmentInput);
    let assignment_json = serde_json::to_string_pretty(&assignment_schema)?;
    fs::write(out_dir.join("Assignment.schema.json"), assignment_json)?;

    let participation_schema = schema_for!(ParticipationInput);
    let participation_json = serde_json::to_string_pretty(&participation_schema)?;
    fs::write(out_dir.join("Participation.schema.json"), participation_json)?;

    let poll_schema = schema_for!(PollInput);
    let poll_json = serde_json::to_string_pretty(&poll_schema)?;
    fs::write(out_dir.join("Poll.schema.json"), poll_json)?;

    info!(out_dir = %out_dir.display(), "exported schemas");
    println!("Exported schemas to {}", out_dir.display());
    Ok(())
}

fn decode(input: &Path, collection: &str, config: &Config) -> Result<()> {
    let raw = read_document(input)?;
    let output = render_records(&raw, collection, config.output.pretty)
        .with_context(|| format!("decoding {}", input.display()))?;
    println!("{output}");
    Ok(())
}

fn render_records(raw: &Value, collection: &str, pretty: bool) -> Result<String> {
    let registry = assembly_core::bootstrap()?;
    let elements = registry.build_many(collection, raw)?;
    info!(collection, count = elements.len(), "decoded records");

    let rendered = elements
        .iter()
        .map(|element| element.to_json())
        .collect::<Result<Vec<_>, _>>()?;
    let output = if pretty {
        serde_json::to_string_pretty(&rendered)?
    } else {
        serde_json::to_string(&rendered)?
    };
    Ok(output)
}

fn candidates(input: &Path) -> Result<()> {
    let raw = read_document(input)?;
    let registry = assembly_core::bootstrap()?;
    let elements = registry
        .build_many(Assignment::COLLECTION, &raw)
        .with_context(|| format!("decoding {}", input.display()))?;

    for element in &elements {
        println!("{}", candidate_line(element.as_ref())?);
    }
    Ok(())
}

fn candidate_line(element: &dyn CollectionElement) -> Result<String> {
    let assignment = element
        .as_any()
        .downcast_ref::<Assignment>()
        .ok_or_else(|| anyhow!("{} is not an assignment", element.collection()))?;
    let ids: Vec<String> = assignment
        .candidate_ids()
        .iter()
        .map(|id| id.to_string())
        .collect();
    Ok(format!("{assignment}: {}", ids.join(", ")))
}

fn read_document(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    parse_document(&raw, yaml).with_context(|| format!("parsing {}", path.display()))
}

fn parse_document(raw: &str, yaml: bool) -> Result<Value> {
    if yaml {
        Ok(serde_yaml::from_str(raw)?)
    } else {
        Ok(serde_json::from_str(raw)?)
    }
}
