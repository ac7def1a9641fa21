//! Command-line arguments.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rustc_hash::FxHashSet;

use lift_dispatch::PolicyKind;

/// Compare elevator dispatch policies on recorded or generated ride requests.
#[derive(Debug, Clone, Parser)]
#[command(name = "lift-bench", version)]
pub struct Args {
    /// Elevator configuration (JSON).
    pub config: PathBuf,

    /// Scenario CSV, or a directory of scenario CSVs.
    #[arg(required_unless_present = "generate", conflicts_with = "generate")]
    pub scenario: Option<PathBuf>,

    /// Run only this policy; repeatable. Ids: fifo, scan, scan-directional, shabbat.
    #[arg(long = "policy", value_name = "ID")]
    pub policies: Vec<PolicyKind>,

    /// Write per-run CSV/JSON output and batch_results.csv under DIR.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Use a generated scenario instead of a file.
    #[arg(long, num_args = 3, value_names = ["office|free", "N", "SEED"])]
    pub generate: Option<Vec<String>>,

    /// Abort runs whose simulated clock passes SECS.
    #[arg(long, value_name = "SECS", allow_negative_numbers = true, value_parser = parse_secs)]
    pub time_limit: Option<f64>,
}

/// Which synthetic demand to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    Office,
    FreeForAll,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generate {
    pub kind:  GenerateKind,
    /// Employees (office) or draws (free-for-all).
    pub count: usize,
    pub seed:  u64,
}

impl Args {
    /// Selected policies in first-mention order, aliases collapsed; all of
    /// them when none was given.
    pub fn policy_kinds(&self) -> Vec<PolicyKind> {
        if self.policies.is_empty() {
            return PolicyKind::ALL.to_vec();
        }
        let mut seen = FxHashSet::default();
        self.policies.iter().copied().filter(|k| seen.insert(*k)).collect()
    }

    pub fn generator(&self) -> Result<Option<Generate>, clap::Error> {
        let Some(values) = &self.generate else {
            return Ok(None);
        };
        let [kind, count, seed] = values.as_slice() else {
            return Err(invalid("--generate expects office|free N SEED"));
        };
        let kind = match kind.as_str() {
            "office" => GenerateKind::Office,
            "free" | "free-for-all" => GenerateKind::FreeForAll,
            other => return Err(invalid(&format!("unknown generator {other:?} (expected office or free)"))),
        };
        let count = count
            .parse()
            .map_err(|_| invalid(&format!("--generate N must be a non-negative integer, got {count:?}")))?;
        let seed = seed
            .parse()
            .map_err(|_| invalid(&format!("--generate SEED must be a non-negative integer, got {seed:?}")))?;
        Ok(Some(Generate { kind, count, seed }))
    }
}

fn invalid(message: &str) -> clap::Error {
    Args::command().error(ErrorKind::ValueValidation, message)
}

fn parse_secs(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw.parse().map_err(|_| format!("{raw:?} is not a number of seconds"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("must be finite and non-negative, got {raw}"));
    }
    Ok(secs)
}
