use serde::{Deserialize, Serialize};

/// Ticket priority tier. Scales the ANS hour budget used for estimated
/// closing dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Scale factor applied to a service's configured ANS hours.
    pub fn multiplier(&self) -> f64 {
        match self {
            Priority::Critical => 0.25,
            Priority::High => 0.5,
            Priority::Medium => 1.0,
            Priority::Low => 1.5,
        }
    }

    /// Fallback hour budget when the service has no configured ANS hours.
    pub fn default_budget_hours(&self) -> f64 {
        match self {
            Priority::Critical => 4.0,
            Priority::High => 8.0,
            Priority::Medium => 24.0,
            Priority::Low => 48.0,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_round_trip() {
        for priority in [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ] {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_budget_scaling() {
        assert_eq!(Priority::Critical.multiplier(), 0.25);
        assert_eq!(Priority::Low.default_budget_hours(), 48.0);
    }
}
