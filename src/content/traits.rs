#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trait {
    pub id: &'static str,
    pub name: &'static str,
    pub score: u16,
    pub level: &'static str,
    pub description: &'static str,
}

pub const TRAITS: &[Trait] = &[
    Trait {
        id: "drought",
        name: "Drought Resistance",
        score: 85,
        level: "Excellent",
        description: "High tolerance to water scarcity",
    },
    Trait {
        id: "growth",
        name: "Growth Rate",
        score: 72,
        level: "Good",
        description: "Above average maturation speed",
    },
    Trait {
        id: "disease",
        name: "Disease Tolerance",
        score: 91,
        level: "Excellent",
        description: "Strong resistance to common pathogens",
    },
    Trait {
        id: "yield",
        name: "Yield Potential",
        score: 78,
        level: "Good",
        description: "High productivity per hectare",
    },
];

/// Shown as-is; deliberately not the mean of [`TRAITS`].
pub const OVERALL_SCORE: u16 = 92;

pub const INSIGHTS: &[&str] = &[
    "This hybrid shows exceptional disease resistance, making it ideal for high-humidity regions",
    "Drought resistance scores are excellent - suitable for rain-fed agriculture",
    "Expected maturation in 95-105 days under optimal conditions",
];

pub const REPORT_ACTIONS: &[&str] = &["Download Report", "Compare with Others", "Share Results"];
