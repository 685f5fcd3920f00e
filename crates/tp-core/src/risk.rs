//! Sea-state risk classification levels.

/// Risk level assigned to one simulated track vertex.
///
/// Produced by the TAT engine's wind-against-current index; consumed by the
/// departure optimizer (via [`weight`][RiskLevel::weight]) and by report
/// layers (via `as_str`/`Display`).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Scalar penalty weight used by the departure-time objective.
    ///
    /// High is deliberately super-linear (4, not 3): one rough vertex should
    /// outweigh several merely-unsettled ones.
    #[inline]
    pub fn weight(self) -> f64 {
        match self {
            RiskLevel::Low      => 1.0,
            RiskLevel::Moderate => 2.0,
            RiskLevel::High     => 4.0,
        }
    }

    /// Stable lower-case label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low      => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High     => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
