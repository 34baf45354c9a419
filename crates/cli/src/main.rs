#![deny(unsafe_code)]
//! CLI binary for the compass-field visualizer.
//!
//! Subcommands:
//! - `list` — print available scenarios
//! - `probe` — field vector and needle angle at one point
//! - `map` — sample the field on a grid, print it or write a PNG

mod error;

use clap::{Args, Parser, Subcommand};
use compass_field_core::{FieldGrid, FieldModel, Scenario, Scene, Session};
use error::CliError;
use glam::DVec2;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "compass-field", about = "2D bar magnet field and compass needle explorer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command that builds a model.
#[derive(Args)]
struct SetupArgs {
    /// Scenario name (single, attract, repel). Overrides the scene file.
    #[arg(short, long)]
    scenario: Option<String>,

    /// Scene description as a JSON file.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Overrides as a JSON string (scenario, multiplier, compass_x, compass_y).
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Subcommand)]
enum Command {
    /// List available scenarios.
    List,
    /// Evaluate the field and needle angle at a point.
    Probe {
        #[command(flatten)]
        setup: SetupArgs,

        /// Query x; defaults to the scene's compass position.
        #[arg(short, long, allow_negative_numbers = true)]
        x: Option<f64>,

        /// Query y; defaults to the scene's compass position.
        #[arg(short, long, allow_negative_numbers = true)]
        y: Option<f64>,
    },
    /// Sample the field on a regular grid.
    Map {
        #[command(flatten)]
        setup: SetupArgs,

        /// Number of lattice columns.
        #[arg(long, default_value_t = 40)]
        cols: usize,

        /// Number of lattice rows.
        #[arg(long, default_value_t = 25)]
        rows: usize,

        /// Distance between lattice points.
        #[arg(long, default_value_t = 20.0)]
        spacing: f64,

        /// World x of the first lattice column.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        origin_x: f64,

        /// World y of the first lattice row.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        origin_y: f64,

        /// Write a magnitude PNG here instead of printing angles.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_scene(setup: &SetupArgs) -> Result<Scene, CliError> {
    let scene = match &setup.scene {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?;
            Scene::from_json(&text)?
        }
        None => Scene::default(),
    };
    merge_setup(scene, setup.scenario.as_deref(), &setup.params)
}

/// Layers command-line overrides onto a scene.
///
/// `--scenario` replaces the file's preset and drops its explicit magnets;
/// `--params` is applied last and wins over both.
fn merge_setup(mut scene: Scene, scenario: Option<&str>, params: &str) -> Result<Scene, CliError> {
    if let Some(name) = scenario {
        scene.scenario = name.to_owned();
        scene.magnets = None;
    }
    let params: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    scene.apply_params(&params);
    Ok(scene)
}

fn probe(
    json: bool,
    scene: &Scene,
    model: &FieldModel,
    x: Option<f64>,
    y: Option<f64>,
) -> Result<(), CliError> {
    let fallback = scene.compass.unwrap_or_else(|| Session::default().compass());
    let point = DVec2::new(x.unwrap_or(fallback.x), y.unwrap_or(fallback.y));
    let field = model.evaluate_field(point);
    let angle = model.needle_angle(point);

    if json {
        let info = serde_json::json!({
            "scenario": scene.label(),
            "multiplier": model.global_multiplier(),
            "point": [point.x, point.y],
            "field": [field.x, field.y],
            "magnitude": field.length(),
            "angle_degrees": angle,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("point      ({:.3}, {:.3})", point.x, point.y);
        println!("field      ({:.6}, {:.6})", field.x, field.y);
        println!("magnitude  {:.6}", field.length());
        println!("angle      {angle:.3} deg");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let names = Scenario::list_names();
            if cli.json {
                let info = serde_json::json!({ "scenarios": names });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Scenarios:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
        Command::Probe { setup, x, y } => {
            let scene = load_scene(&setup)?;
            let model = scene.to_model()?;
            probe(cli.json, &scene, &model, x, y)?;
        }
        Command::Map {
            setup,
            cols,
            rows,
            spacing,
            origin_x,
            origin_y,
            output,
        } => {
            let scene = load_scene(&setup)?;
            let model = scene.to_model()?;
            let origin = DVec2::new(origin_x, origin_y);
            let grid = FieldGrid::sample(&model, origin, spacing, cols, rows)?;
            info!(cols, rows, spacing, scenario = scene.label(), "sampled field grid");

            if let Some(path) = output {
                compass_field_snapshot::write_png(&grid, &path)?;
                if cli.json {
                    let info = serde_json::json!({
                        "scenario": scene.label(),
                        "cols": cols,
                        "rows": rows,
                        "output": path.display().to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    eprintln!(
                        "mapped {} ({cols}x{rows}, spacing {spacing}) -> {}",
                        scene.label(),
                        path.display()
                    );
                }
            } else if cli.json {
                let info = serde_json::json!({
                    "scenario": scene.label(),
                    "cols": cols,
                    "rows": rows,
                    "origin": [origin.x, origin.y],
                    "spacing": spacing,
                    "angles_degrees": grid.angles(),
                    "magnitudes": grid.magnitudes(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for row in grid.angles().chunks(cols) {
                    let line: Vec<String> = row.iter().map(|a| format!("{a:7.1}")).collect();
                    println!("{}", line.join(" "));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
