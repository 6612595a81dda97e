/// A time horizon on the remediation roadmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapItem {
    pub horizon: &'static str,
    pub focus: &'static str,
    pub actions: &'static str,
}

impl RoadmapItem {
    /// Recommendation ids (`REC-xx`) mentioned in the actions text
    #[must_use]
    pub fn referenced_recommendations(&self) -> Vec<&'static str> {
        let mut ids = Vec::new();
        let mut rest = self.actions;
        while let Some(pos) = rest.find("REC-") {
            let candidate = &rest[pos..];
            let len = 4 + candidate[4..]
                .chars()
                .take_while(char::is_ascii_digit)
                .count();
            if len > 4 && !ids.contains(&&candidate[..len]) {
                ids.push(&candidate[..len]);
            }
            rest = &candidate[len..];
        }
        ids
    }

    #[must_use]
    pub fn to_row(&self) -> [&'static str; 3] {
        [self.horizon, self.focus, self.actions]
    }
}

pub const ROADMAP_HEADERS: [&str; 3] = ["Horizon", "Focus", "Actions"];

#[must_use]
pub fn roadmap() -> Vec<RoadmapItem> {
    vec![
        RoadmapItem {
            horizon: "Next 7 days",
            focus: "Stability quick wins",
            actions: "Automate cert renewal + alerts (REC-02); standardize probes/routing (REC-01); validate monitoring egress (REC-04)",
        },
        RoadmapItem {
            horizon: "Next 30 days",
            focus: "Platform hardening",
            actions: "Automate Private DNS/Private Link zone linking (REC-03); add subnet/IP guardrails and alerts (REC-05); add telemetry-drop alerting (REC-04)",
        },
        RoadmapItem {
            horizon: "Next 90 days",
            focus: "Operational maturity",
            actions: "Expand IaC coverage and policy guardrails; publish runbooks and do game-day drills (REC-06)",
        },
    ]
}
