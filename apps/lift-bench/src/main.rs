//! lift-bench — compare elevator dispatch policies.
//!
//! Replays one scenario CSV, every CSV in a directory, or a generated
//! scenario under each selected policy and prints a comparison table.
//! With `--out DIR`, every run also writes its rider/event/summary CSVs,
//! a visualiser JSON feed and a summary JSON under `DIR/<scenario>/<policy>/`,
//! plus one `batch_results.csv` for the whole sweep.
//!
//! ```text
//! lift-bench data/elevator.json data/small_office.csv
//! lift-bench data/elevator.json --generate office 200 7 --out out/
//! ```

mod args;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use lift_core::{ElevatorConfig, SimRng, SimTime};
use lift_dispatch::PolicyKind;
use lift_output::{
    write_batch_csv, write_summary_json, write_visualization_json, CsvWriter, SimOutputObserver,
};
use lift_scenario::{
    generate_free_for_all, generate_office_building, load_config_json, load_scenario_csv,
    write_scenario_csv, FreeForAllParams, OfficeParams,
};
use lift_sim::{run_batch, BatchResult, NamedScenario, SimBuilder, SimReport};

use args::{Args, Generate, GenerateKind};

// ── Constants ─────────────────────────────────────────────────────────────────

const BATCH_RESULTS_FILE:  &str = "batch_results.csv";
const VISUALIZATION_FILE:  &str = "visualization.json";
const SUMMARY_JSON_FILE:   &str = "summary.json";
const GENERATED_FILE:      &str = "generated.csv";

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let generate = args.generator().unwrap_or_else(|e| e.exit());

    println!("=== lift-bench — elevator dispatch comparison ===");

    let config = load_config_json(&args.config)
        .with_context(|| format!("loading elevator config {}", args.config.display()))?;
    println!(
        "Elevator: floors {}..={}, starts at {}",
        config.min_floor.0, config.max_floor.0, config.initial_floor.0,
    );

    let scenarios = collect_scenarios(&args, generate.as_ref(), &config)?;
    let kinds = args.policy_kinds();
    let time_limit = args.time_limit.map(SimTime::from);

    println!(
        "Scenarios: {}  Policies: {}",
        scenarios.len(),
        kinds.iter().map(|k| k.id()).collect::<Vec<_>>().join(", "),
    );

    let t0 = Instant::now();
    let results = match &args.out {
        None => run_batch(&config, &scenarios, &kinds, time_limit),
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            if generate.is_some() {
                if let Some(first) = scenarios.first() {
                    write_scenario_csv(&dir.join(GENERATED_FILE), &first.scenario)?;
                }
            }
            run_with_output(&config, &scenarios, &kinds, time_limit, dir)
        }
    };
    let elapsed = t0.elapsed();

    print_table(&results);

    if let Some(dir) = &args.out {
        let path = dir.join(BATCH_RESULTS_FILE);
        write_batch_csv(&path, &results)?;
        println!("Batch results written to {}", path.display());
    }

    let failed = results.iter().filter(|r| r.outcome.is_err()).count();
    println!(
        "Completed {} runs in {:.2?} ({} failed)",
        results.len(),
        elapsed,
        failed,
    );
    Ok(())
}

// ── Scenario selection ────────────────────────────────────────────────────────

fn collect_scenarios(
    args:     &Args,
    generate: Option<&Generate>,
    config:   &ElevatorConfig,
) -> Result<Vec<NamedScenario>> {
    if let Some(generate) = generate {
        return Ok(vec![generated(generate, config)?]);
    }
    let Some(path) = &args.scenario else {
        bail!("no scenario given");
    };
    let bounds = Some((config.min_floor, config.max_floor));

    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)
            .with_context(|| format!("reading scenario directory {}", path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        files.sort();
        if files.is_empty() {
            bail!("no .csv scenarios in {}", path.display());
        }
        files
            .iter()
            .map(|file| {
                let scenario = load_scenario_csv(file, bounds)
                    .with_context(|| format!("loading scenario {}", file.display()))?;
                Ok(NamedScenario { name: scenario_name(file), scenario })
            })
            .collect()
    } else {
        let scenario = load_scenario_csv(path, bounds)
            .with_context(|| format!("loading scenario {}", path.display()))?;
        Ok(vec![NamedScenario { name: scenario_name(path), scenario }])
    }
}

fn generated(generate: &Generate, config: &ElevatorConfig) -> Result<NamedScenario> {
    let mut rng = SimRng::new(generate.seed);
    let (name, scenario) = match generate.kind {
        GenerateKind::Office => {
            let params = OfficeParams {
                employees: generate.count,
                max_floor: config.max_floor,
                ..OfficeParams::default()
            };
            ("office", generate_office_building(&params, &mut rng)?)
        }
        GenerateKind::FreeForAll => {
            let params = FreeForAllParams {
                events: generate.count,
                max_floor: config.max_floor,
                ..FreeForAllParams::default()
            };
            ("free-for-all", generate_free_for_all(&params, &mut rng)?)
        }
    };
    info!("generated {} requests ({name}, seed {})", scenario.len(), generate.seed);
    Ok(NamedScenario { name: format!("{name}-{}", generate.seed), scenario })
}

fn scenario_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Runs with per-run output ──────────────────────────────────────────────────

/// Like `run_batch`, but each run also writes its files under
/// `out_dir/<scenario>/<policy>/`.  A run that cannot be set up, fails, or
/// cannot write its output becomes a failed row; the sweep carries on.
fn run_with_output(
    config:     &ElevatorConfig,
    scenarios:  &[NamedScenario],
    kinds:      &[PolicyKind],
    time_limit: Option<SimTime>,
    out_dir:    &Path,
) -> Vec<BatchResult> {
    let mut results = Vec::with_capacity(scenarios.len() * kinds.len());

    for named in scenarios {
        for &kind in kinds {
            let dir = out_dir.join(&named.name).join(kind.id());
            let outcome = run_to_dir(config, named, kind, time_limit, &dir).map_err(|e| {
                warn!("{} under {kind} failed: {e:#}", named.name);
                format!("{e:#}")
            });
            results.push(BatchResult { scenario: named.name.clone(), policy: kind, outcome });
        }
    }
    results
}

fn run_to_dir(
    config:     &ElevatorConfig,
    named:      &NamedScenario,
    kind:       PolicyKind,
    time_limit: Option<SimTime>,
    dir:        &Path,
) -> Result<SimReport> {
    let mut builder = SimBuilder::with_kind(config.clone(), named.scenario.clone(), kind);
    if let Some(limit) = time_limit {
        builder = builder.time_limit(limit);
    }
    let mut sim = builder.build()?;

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let label = format!("{}/{}", named.name, kind.id());
    let mut observer = SimOutputObserver::new(CsvWriter::new(dir)?, label.clone());
    let outcome = sim.run(&mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing run output");
    }

    // The visualiser feed is useful for a stalled run too.
    write_visualization_json(
        &dir.join(VISUALIZATION_FILE),
        config.max_floor.0 + 1,
        config.initial_floor,
        &sim.monitor().events_sorted(),
    )?;
    let report = outcome?;
    write_summary_json(&dir.join(SUMMARY_JSON_FILE), &label, &report.policy, &report.summary)?;
    Ok(report)
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_table(results: &[BatchResult]) {
    println!();
    println!(
        "{:<20} {:<18} {:>7} {:>10} {:>10} {:>10} {:>12}",
        "scenario", "policy", "riders", "wait", "ride", "total", "completion",
    );
    println!("{}", "─".repeat(92));
    for r in results {
        match &r.outcome {
            Ok(report) => {
                let s = &report.summary;
                println!(
                    "{:<20} {:<18} {:>7} {:>10.1} {:>10.1} {:>10.1} {:>12.1}",
                    r.scenario,
                    r.policy.id(),
                    s.riders,
                    s.wait.mean,
                    s.ride.mean,
                    s.time_to_destination.mean,
                    s.completion_time,
                );
            }
            Err(e) => println!("{:<20} {:<18} FAILED: {e}", r.scenario, r.policy.id()),
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use lift_core::{Floor, RideRequest, RiderId, Scenario};

    use super::*;

    fn config() -> ElevatorConfig {
        ElevatorConfig {
            initial_floor:          Floor(1),
            ascend_secs_per_floor:  3.0,
            descend_secs_per_floor: 4.0,
            door_open_secs:         5.0,
            door_close_secs:        6.0,
            min_floor:              Floor(0),
            max_floor:              Floor(12),
        }
    }

    fn named(name: &str, source: u32, destination: u32) -> NamedScenario {
        let request = RideRequest::new(0.0, RiderId(0), Floor(source), Floor(destination));
        NamedScenario { name: name.to_owned(), scenario: Scenario::new(vec![request]) }
    }

    #[test]
    fn unbuildable_run_is_a_failed_row() {
        let out = tempfile::tempdir().unwrap();
        let scenarios = [named("off-the-roof", 1, 20), named("short-hop", 1, 3)];
        let kinds = [PolicyKind::Fifo, PolicyKind::Scan];

        let results = run_with_output(&config(), &scenarios, &kinds, None, out.path());

        assert_eq!(results.len(), 4);
        assert!(results[..2].iter().all(|r| r.scenario == "off-the-roof" && r.outcome.is_err()));
        assert!(results[2..].iter().all(|r| r.scenario == "short-hop" && r.outcome.is_ok()));
        assert!(!out.path().join("off-the-roof").exists());
        for kind in kinds {
            let dir = out.path().join("short-hop").join(kind.id());
            assert!(dir.join(SUMMARY_JSON_FILE).is_file());
            assert!(dir.join(VISUALIZATION_FILE).is_file());
        }
    }

    #[test]
    fn stalled_run_keeps_visualization_only() {
        let out = tempfile::tempdir().unwrap();
        let scenarios = [named("short-hop", 1, 3)];

        let results = run_with_output(&config(), &scenarios, &[PolicyKind::Fifo], Some(SimTime(5.0)), out.path());

        assert!(results[0].outcome.is_err());
        let dir = out.path().join("short-hop").join("fifo");
        assert!(dir.join(VISUALIZATION_FILE).is_file());
        assert!(!dir.join(SUMMARY_JSON_FILE).exists());
    }
}
