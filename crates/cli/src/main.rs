use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use eulerplan::catalog;
use eulerplan::decomposition::StrategyType;
use eulerplan::description::{AbstractCurve, Description, Zone};
use eulerplan::dual::EulerDual;
use eulerplan::random::{draw_description, RandomDescriptionCfg, ReplayToken};
use eulerplan::{plan, PlanCfg};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::{write_sidecar, Payload};
use report::{CatalogEntry, CycleReport, PlanReport, RandomDraw};

#[derive(Parser)]
#[command(name = "eulerplan")]
#[command(about = "Plan the drawing order of Euler diagram curves", version)]
struct Cmd {
    /// Log every decomposition and recomposition step
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Where the description comes from; exactly one source is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Input {
    /// Informal description, e.g. "a b ab"
    #[arg(long, short)]
    description: Option<String>,
    /// File holding an informal description
    #[arg(long)]
    file: Option<PathBuf>,
    /// Catalog example name, e.g. "Venn-3"
    #[arg(long)]
    example: Option<String>,
}

#[derive(Subcommand)]
enum Action {
    /// Decompose and recompose a description; print or write a JSON report
    Plan {
        #[command(flatten)]
        input: Input,
        /// innermost | piercing
        #[arg(long, default_value = "innermost")]
        strategy: StrategyType,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List elementary cycles of the zone dual graph
    Cycles {
        #[command(flatten)]
        input: Input,
        /// Keep only cycles visiting this zone ("ab", or "" for outside); repeatable
        #[arg(long)]
        through: Vec<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the named example descriptions
    Catalog,
    /// Draw seeded random descriptions and plan each one
    Random {
        #[arg(long, default_value_t = 5)]
        curves: usize,
        #[arg(long, default_value_t = 0.35)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value = "innermost")]
        strategy: StrategyType,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Plan {
            input,
            strategy,
            out,
        } => run_plan(input, strategy, out),
        Action::Cycles { input, through, out } => run_cycles(input, through, out),
        Action::Catalog => run_catalog(),
        Action::Random {
            curves,
            density,
            seed,
            index,
            count,
            strategy,
        } => {
            let cfg = RandomDescriptionCfg {
                curves,
                zone_density: density,
            };
            run_random(cfg, ReplayToken { seed, index }, count, strategy)
        }
    }
}

fn load(input: &Input) -> Result<Description> {
    let text = match (&input.description, &input.file, &input.example) {
        (Some(text), _, _) => text.clone(),
        (_, Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (_, _, Some(name)) => {
            return catalog::example(name)
                .ok_or_else(|| anyhow!("no catalog example named {name:?}"));
        }
        _ => bail!("one of --description, --file or --example is required"),
    };
    Ok(Description::from_informal(&text))
}

/// One zone token; the empty string is the outside zone.
fn parse_zone(text: &str) -> Result<Zone> {
    let text = text.trim();
    if text.contains(char::is_whitespace) {
        bail!("zone {text:?} spans several tokens");
    }
    Ok(Zone::from_curves(text.chars().map(AbstractCurve::from)))
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = write_sidecar(path, payload)?;
            tracing::info!(out = %path.display(), provenance = %sidecar.display(), "report written");
        }
        None => println!("{}", String::from_utf8(bytes)?),
    }
    Ok(())
}

fn run_plan(input: Input, strategy: StrategyType, out: Option<PathBuf>) -> Result<()> {
    let description = load(&input)?;
    tracing::info!(
        curves = description.num_curves(),
        zones = description.num_zones(),
        %strategy,
        "plan"
    );
    let plan = plan(&description, PlanCfg { strategy })?;
    let report = PlanReport::new(&description, strategy, &plan);
    if !report.round_trip {
        tracing::warn!("recomposition did not reproduce the input description");
    }
    let payload = Payload::new("plan", json!({ "strategy": strategy.name() }))
        .with_input(description.informal());
    emit(&report, out.as_deref(), payload)
}

fn run_cycles(input: Input, through: Vec<String>, out: Option<PathBuf>) -> Result<()> {
    let description = load(&input)?;
    let zones = through
        .iter()
        .map(|z| parse_zone(z))
        .collect::<Result<Vec<_>>>()?;
    let dual = EulerDual::new(&description);
    tracing::info!(
        zones = dual.num_zones(),
        edges = dual.num_edges(),
        "dual graph"
    );
    let cycles = dual.cycles_through(&zones);
    tracing::info!(count = cycles.len(), "cycles");
    let report: Vec<CycleReport> = cycles.iter().map(CycleReport::from).collect();
    let payload = Payload::new("cycles", json!({ "through": through }))
        .with_input(description.informal());
    emit(&report, out.as_deref(), payload)
}

fn run_catalog() -> Result<()> {
    let mut entries = Vec::with_capacity(catalog::EXAMPLES.len());
    for (name, text) in catalog::EXAMPLES {
        let d = Description::from_informal(text);
        entries.push(CatalogEntry {
            name,
            description: text,
            curves: d.num_curves(),
            zones: d.num_zones(),
        });
    }
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn run_random(
    cfg: RandomDescriptionCfg,
    mut tok: ReplayToken,
    count: usize,
    strategy: StrategyType,
) -> Result<()> {
    let draws = random_draws(cfg, &mut tok, count, strategy)?;
    println!("{}", serde_json::to_string_pretty(&draws)?);
    Ok(())
}

fn random_draws(
    cfg: RandomDescriptionCfg,
    tok: &mut ReplayToken,
    count: usize,
    strategy: StrategyType,
) -> Result<Vec<RandomDraw>> {
    let mut draws = Vec::with_capacity(count);
    for _ in 0..count {
        let description = draw_description(cfg, *tok)?;
        tracing::debug!(
            seed = tok.seed,
            index = tok.index,
            zones = description.num_zones(),
            "draw"
        );
        let plan = plan(&description, PlanCfg { strategy })?;
        draws.push(RandomDraw {
            seed: tok.seed,
            index: tok.index,
            plan: PlanReport::new(&description, strategy, &plan),
        });
        *tok = tok.advanced();
    }
    Ok(draws)
}
