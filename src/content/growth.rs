#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSample {
    pub day: f64,
    pub height_cm: f64,
    pub biomass_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentSample {
    pub day: f64,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Complete,
    InProgress,
    Upcoming,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Complete => "Complete",
            StageStatus::InProgress => "In Progress",
            StageStatus::Upcoming => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GrowthStage {
    pub name: &'static str,
    pub days: &'static str,
    pub status: StageStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const CYCLE_DAYS: u32 = 105;

pub const GROWTH: &[GrowthSample] = &[
    GrowthSample { day: 0.0, height_cm: 0.0, biomass_g: 0.0 },
    GrowthSample { day: 15.0, height_cm: 12.0, biomass_g: 5.0 },
    GrowthSample { day: 30.0, height_cm: 35.0, biomass_g: 18.0 },
    GrowthSample { day: 45.0, height_cm: 68.0, biomass_g: 45.0 },
    GrowthSample { day: 60.0, height_cm: 125.0, biomass_g: 95.0 },
    GrowthSample { day: 75.0, height_cm: 180.0, biomass_g: 165.0 },
    GrowthSample { day: 90.0, height_cm: 215.0, biomass_g: 245.0 },
    GrowthSample { day: 105.0, height_cm: 230.0, biomass_g: 310.0 },
];

pub const ENVIRONMENT: &[EnvironmentSample] = &[
    EnvironmentSample { day: 0.0, rainfall_mm: 45.0, temperature_c: 22.0 },
    EnvironmentSample { day: 15.0, rainfall_mm: 38.0, temperature_c: 24.0 },
    EnvironmentSample { day: 30.0, rainfall_mm: 52.0, temperature_c: 26.0 },
    EnvironmentSample { day: 45.0, rainfall_mm: 48.0, temperature_c: 27.0 },
    EnvironmentSample { day: 60.0, rainfall_mm: 35.0, temperature_c: 28.0 },
    EnvironmentSample { day: 75.0, rainfall_mm: 28.0, temperature_c: 26.0 },
    EnvironmentSample { day: 90.0, rainfall_mm: 32.0, temperature_c: 25.0 },
    EnvironmentSample { day: 105.0, rainfall_mm: 40.0, temperature_c: 23.0 },
];

pub const STAGES: &[GrowthStage] = &[
    GrowthStage { name: "Germination", days: "0-10", status: StageStatus::Complete },
    GrowthStage { name: "Vegetative", days: "10-45", status: StageStatus::Complete },
    GrowthStage { name: "Flowering", days: "45-75", status: StageStatus::InProgress },
    GrowthStage { name: "Maturation", days: "75-105", status: StageStatus::Upcoming },
];

pub const METRICS: &[Metric] = &[
    Metric { icon: "calendar", label: "Days to Maturity", value: "105", caption: "Expected harvest date" },
    Metric { icon: "droplets", label: "Water Required", value: "450mm", caption: "Total for full cycle" },
    Metric { icon: "sun", label: "Sunlight Hours", value: "8-10", caption: "Hours per day optimal" },
    Metric { icon: "wind", label: "Expected Yield", value: "6.5t", caption: "Per hectare" },
];

pub const OPTIMAL_CONDITIONS: &[&str] = &[
    "Plant during early rainy season for best results",
    "Ensure consistent watering during flowering stage (days 45-75)",
    "Monitor for pests during vegetative growth period",
];

pub const EXPECTED_OUTCOMES: &[&str] = &[
    "First harvest expected in 105 days under optimal conditions",
    "Average yield of 6.5 tons per hectare projected",
    "95% germination rate with quality seeds",
];

/// `(day, value)` points for the chart widget.
pub fn series<T>(samples: &[T], day: fn(&T) -> f64, value: fn(&T) -> f64) -> Vec<(f64, f64)> {
    samples.iter().map(|s| (day(s), value(s))).collect()
}
