use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use pf_app::{AnalysisResult, AppResult, ChemicalLibrary, load_flowsheet, try_analyze};
use pf_model::{EquipmentType, thermodynamic_models};
use tracing::debug;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "ProcessFlow CLI - Process flowsheet analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every calculation over a flowsheet
    Analyze {
        /// Path to the flowsheet file (.yaml, .yml or .json)
        flowsheet: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Check a flowsheet for duplicate ids, dangling streams and bad parameters
    Validate {
        /// Path to the flowsheet file
        flowsheet: PathBuf,
    },
    /// List catalog chemicals
    Chemicals {
        /// Case-insensitive filter over name and formula
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List thermodynamic models
    Models,
    /// List equipment types
    Equipment,
    /// Print process recommendations for a flowsheet
    Advise {
        /// Path to the flowsheet file
        flowsheet: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { flowsheet, format } => cmd_analyze(&flowsheet, format),
        Commands::Validate { flowsheet } => cmd_validate(&flowsheet),
        Commands::Chemicals { search } => {
            cmd_chemicals(search.as_deref());
            Ok(())
        }
        Commands::Models => {
            cmd_models();
            Ok(())
        }
        Commands::Equipment => {
            cmd_equipment();
            Ok(())
        }
        Commands::Advise { flowsheet } => cmd_advise(&flowsheet),
    }
}

fn cmd_analyze(path: &Path, format: OutputFormat) -> AppResult<()> {
    let sheet = load_flowsheet(path)?;
    let graph = sheet.lenient_graph()?;
    let result = try_analyze(&graph)?;
    debug!(
        "analyzed {} units and {} streams from {}",
        graph.nodes().len(),
        graph.streams().len(),
        path.display()
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => print_tables(&result),
    }
    Ok(())
}

fn print_tables(result: &AnalysisResult) {
    println!("Mass balance:");
    println!(
        "  {:<20} {:>12} {:>12} {:>12} {:>8}",
        "unit", "in", "out", "accum", "eff"
    );
    for r in &result.mass_balance {
        println!(
            "  {:<20} {:>12.3} {:>12.3} {:>12.3} {:>8.3}",
            r.name, r.in_flow, r.out_flow, r.accumulation, r.efficiency
        );
    }

    println!("\nEnergy balance:");
    println!(
        "  {:<20} {:>12} {:>12} {:>12} {:>12}",
        "unit", "in", "out", "equipment", "net"
    );
    for r in &result.energy_balance {
        println!(
            "  {:<20} {:>12.3} {:>12.3} {:>12.3} {:>12.3}",
            r.name, r.in_energy, r.out_energy, r.equipment_energy, r.net_energy
        );
    }

    if !result.vle.is_empty() {
        println!("\nVapor-liquid equilibrium:");
        for r in &result.vle {
            println!(
                "  {} at {:.1} °C, {:.2} bar",
                r.name, r.temperature, r.pressure
            );
            for c in &r.results {
                println!(
                    "    {:<18} Psat={:.4} K={:.4} x={:.4} y={:.4}",
                    c.chemical_id.as_str(),
                    c.vapor_pressure,
                    c.k_value,
                    c.liquid_composition,
                    c.vapor_composition
                );
            }
        }
    }

    if !result.pressure_drops.is_empty() {
        println!("\nPressure drop:");
        println!(
            "  {:<20} {:>12} {:>12} {:>10} {:>12}",
            "stream", "v (m/s)", "Re", "f", "dP (Pa)"
        );
        for r in &result.pressure_drops {
            println!(
                "  {:<20} {:>12.4} {:>12.1} {:>10.5} {:>12.2}",
                r.stream_id.as_str(),
                r.velocity,
                r.reynolds_number,
                r.friction_factor,
                r.pressure_drop
            );
        }
    }

    if !result.heat_transfer.is_empty() {
        println!("\nHeat transfer:");
        println!(
            "  {:<20} {:>12} {:>8} {:>8} {:>8}",
            "unit", "duty", "LMTD", "U", "eff"
        );
        for r in &result.heat_transfer {
            println!(
                "  {:<20} {:>12.1} {:>8.2} {:>8.1} {:>8.3}",
                r.name, r.heat_duty, r.lmtd, r.coefficient, r.effectiveness
            );
        }
    }
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating flowsheet: {}", path.display());
    let sheet = load_flowsheet(path)?;
    let report = sheet.lenient_graph()?.validate();

    for err in &report.errors {
        println!("  error:   {}", err);
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }

    if let Some(err) = report.first_error() {
        return Err(err.clone().into());
    }
    if report.is_clean() {
        println!("✓ Flowsheet is valid");
    } else {
        println!(
            "✓ Flowsheet can be analyzed ({} warnings)",
            report.warnings.len()
        );
    }
    Ok(())
}

fn cmd_chemicals(search: Option<&str>) {
    let library = ChemicalLibrary::new();
    let matches = library.search(search.unwrap_or(""));

    if matches.is_empty() {
        println!("No chemicals match");
        return;
    }
    for c in matches {
        let boiling = c
            .boiling_point
            .map_or_else(|| "-".to_string(), |t| format!("{:.1} °C", t));
        println!(
            "  {:<24} {:<32} {:<10} MW={:>8.2}  bp={}",
            c.id.as_str(), c.name, c.formula, c.molecular_weight, boiling
        );
    }
}

fn cmd_models() {
    for model in thermodynamic_models() {
        println!("  {:<20} {}", model.id, model.name);
        println!("  {:<20} {}", "", model.description);
    }
}

fn cmd_equipment() {
    for &kind in EquipmentType::ALL {
        println!(
            "  {:<16} {:<22} {:?}",
            kind.tag(),
            kind.label(),
            kind.category()
        );
    }
}

fn cmd_advise(path: &Path) -> AppResult<()> {
    let session = load_flowsheet(path)?.into_session()?;
    if let Some(model) = session.selected_model() {
        println!("Thermodynamic model: {}", model.name);
    }
    println!("Recommendations:");
    for (i, rec) in session.recommendations().iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }
    Ok(())
}
