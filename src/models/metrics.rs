use serde::{Deserialize, Serialize};

/// Mean sprint health across reported sprints. `total` counts the sprints
/// that contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub on_track: u32,
    pub slight_delay: u32,
    pub critical: u32,
    pub total: u32,
}

impl HealthMetrics {
    /// Reported when no sprint qualifies. `total` is 1, not 0, so display
    /// code dividing by it stays safe.
    pub const EMPTY: HealthMetrics = HealthMetrics {
        on_track: 0,
        slight_delay: 0,
        critical: 0,
        total: 1,
    };
}
