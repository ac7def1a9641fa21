//! Closed registry of the built-in policies, selectable by string id.

use std::fmt;
use std::str::FromStr;

use lift_core::ElevatorConfig;

use crate::{DispatchPolicy, FifoPolicy, PolicyError, ScanPolicy, ShabbatPolicy};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PolicyKind {
    Fifo,
    Scan,
    DirectionalScan,
    Shabbat,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Scan,
        PolicyKind::DirectionalScan,
        PolicyKind::Shabbat,
    ];

    /// Canonical identifier; round-trips through `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            PolicyKind::Fifo            => "fifo",
            PolicyKind::Scan            => "scan",
            PolicyKind::DirectionalScan => "scan-directional",
            PolicyKind::Shabbat         => "shabbat",
        }
    }

    /// Instantiate a fresh policy for an elevator with `config`.
    pub fn build(self, config: &ElevatorConfig) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::Fifo            => Box::new(FifoPolicy::new()),
            PolicyKind::Scan            => Box::new(ScanPolicy::new(config)),
            PolicyKind::DirectionalScan => Box::new(ScanPolicy::directional(config)),
            PolicyKind::Shabbat         => Box::new(ShabbatPolicy::new(config)),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    /// Accepts the canonical ids plus the historical `knuth` /
    /// `updown-knuth` names.  Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo"                              => Ok(PolicyKind::Fifo),
            "scan" | "knuth"                    => Ok(PolicyKind::Scan),
            "scan-directional" | "updown-knuth" => Ok(PolicyKind::DirectionalScan),
            "shabbat"                           => Ok(PolicyKind::Shabbat),
            _ => Err(PolicyError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
