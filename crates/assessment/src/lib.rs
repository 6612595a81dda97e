//! Azure Well-Architected Framework assessment content
//!
//! The scores, recommendations and roadmap are hand-authored by the assessor
//! and compiled in. Nothing here reads input; the report crate lays these
//! values out in the workbook.

mod recommendation;
mod roadmap;
mod score;

pub use recommendation::{recommendations, Priority, Recommendation, RECOMMENDATION_HEADERS};
pub use roadmap::{roadmap, RoadmapItem, ROADMAP_HEADERS};
pub use score::{pillar_scores, Pillar, PillarScore, ScoreBand};

pub const SCORE_HEADERS: [&str; 3] = ["Pillar", "Score", "Status"];

/// Everything the report says besides the inputs it copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub title: &'static str,
    pub summary: &'static str,
    pub scores: Vec<PillarScore>,
    pub recommendations: Vec<Recommendation>,
    pub roadmap: Vec<RoadmapItem>,
}

impl Assessment {
    /// The hub-and-spoke AKS assessment
    #[must_use]
    pub fn azure_waf() -> Self {
        Assessment {
            title: "Well-Architected Framework (WAF) Assessment",
            summary: "Hub-and-spoke AKS with Application Gateway → ILB → Traefik, Private Link, Azure Firewall, Bastion, and Azure Monitor",
            scores: pillar_scores(),
            recommendations: recommendations(),
            roadmap: roadmap(),
        }
    }

    #[must_use]
    pub fn recommendation(&self, id: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::azure_waf()
    }
}
