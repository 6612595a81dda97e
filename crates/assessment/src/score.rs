use std::fmt;

/// The five Well-Architected Framework pillars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pillar {
    Reliability,
    Security,
    CostOptimization,
    OperationalExcellence,
    PerformanceEfficiency,
}

impl Pillar {
    /// All pillars in report order
    pub const ALL: [Pillar; 5] = [
        Pillar::Reliability,
        Pillar::Security,
        Pillar::CostOptimization,
        Pillar::OperationalExcellence,
        Pillar::PerformanceEfficiency,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pillar::Reliability => "Reliability",
            Pillar::Security => "Security",
            Pillar::CostOptimization => "Cost Optimization",
            Pillar::OperationalExcellence => "Operational Excellence",
            Pillar::PerformanceEfficiency => "Performance Efficiency",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the scores sheet.
///
/// `status` is the assessor's wording and is not derived from `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarScore {
    pub label: &'static str,
    pub score: u32,
    pub status: &'static str,
}

/// Colour band used to highlight a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// Below 60
    NeedsAttention,
    /// 60 to 79
    Fair,
    /// 80 and above
    Good,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 3] = [ScoreBand::NeedsAttention, ScoreBand::Fair, ScoreBand::Good];

    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=59 => ScoreBand::NeedsAttention,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Good,
        }
    }

    /// Inclusive bounds; `None` means open-ended
    #[must_use]
    pub fn bounds(self) -> (Option<u32>, Option<u32>) {
        match self {
            ScoreBand::NeedsAttention => (None, Some(59)),
            ScoreBand::Fair => (Some(60), Some(79)),
            ScoreBand::Good => (Some(80), None),
        }
    }

    /// Fill colour as `0xRRGGBB`
    #[must_use]
    pub fn fill_color(self) -> u32 {
        match self {
            ScoreBand::NeedsAttention => 0xF8_D7DA,
            ScoreBand::Fair => 0xFF_F3CD,
            ScoreBand::Good => 0xD1_E7DD,
        }
    }
}

/// Pillar scores followed by the overall score.
#[must_use]
pub fn pillar_scores() -> Vec<PillarScore> {
    let per_pillar = [
        (Pillar::Reliability, 68, "Fair"),
        (Pillar::Security, 74, "Good"),
        (Pillar::CostOptimization, 64, "Fair"),
        (Pillar::OperationalExcellence, 66, "Fair"),
        (Pillar::PerformanceEfficiency, 78, "Good"),
    ];

    let mut scores: Vec<PillarScore> = per_pillar
        .into_iter()
        .map(|(pillar, score, status)| PillarScore {
            label: pillar.name(),
            score,
            status,
        })
        .collect();

    scores.push(PillarScore {
        label: "Overall",
        score: 70,
        status: "Good baseline, needs hardening",
    });

    scores
}
