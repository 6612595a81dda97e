use std::fmt;

/// Remediation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Critical,
    High,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommendation row.
///
/// `cases` is a `; `-separated list of support ticket numbers and `docs` a
/// ` | `-separated list of links, kept as single strings because that is how
/// they appear in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub pillars: &'static str,
    pub why: &'static str,
    pub risk: &'static str,
    pub priority: Priority,
    pub effort: &'static str,
    pub cases: &'static str,
    pub docs: &'static str,
}

impl Recommendation {
    /// Ticket numbers referenced by this recommendation
    pub fn case_ids(&self) -> impl Iterator<Item = &'static str> {
        self.cases.split(';').map(str::trim).filter(|s| !s.is_empty())
    }

    /// Documentation links
    pub fn doc_links(&self) -> impl Iterator<Item = &'static str> {
        self.docs.split('|').map(str::trim).filter(|s| !s.is_empty())
    }

    /// Cell values in sheet column order
    #[must_use]
    pub fn to_row(&self) -> [&'static str; 9] {
        [
            self.id,
            self.title,
            self.pillars,
            self.why,
            self.risk,
            self.priority.as_str(),
            self.effort,
            self.cases,
            self.docs,
        ]
    }
}

pub const RECOMMENDATION_HEADERS: [&str; 9] = [
    "ID",
    "Recommendation",
    "Primary Pillar(s)",
    "Why / Evidence",
    "Risk if not addressed",
    "Priority",
    "Estimated Effort",
    "Related Support Cases",
    "Key Docs",
];

#[must_use]
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "REC-01",
            title: "Standardize ingress routing and health probes end-to-end (App Gateway → ILB → Traefik)",
            pillars: "Reliability, Operational Excellence",
            why: "Repeated ingress/probe/routing misconfig issues leading to 502s and backend unhealthy signals.",
            risk: "Intermittent or complete service outage; slow triage due to multi-layer routing.",
            priority: Priority::High,
            effort: "1–3 days",
            cases: "120012346; 120012353",
            docs: "https://learn.microsoft.com/azure/application-gateway/application-gateway-probe-overview | https://learn.microsoft.com/azure/architecture/reference-architectures/containers/aks-baseline",
        },
        Recommendation {
            id: "REC-02",
            title: "Automate TLS certificate lifecycle for Application Gateway using Key Vault",
            pillars: "Reliability, Security",
            why: "Certificate expiry caused TLS handshake failures and outage of public endpoints.",
            risk: "Public endpoint downtime and incident escalation during renewal windows.",
            priority: Priority::Critical,
            effort: "0.5–2 days",
            cases: "120012347",
            docs: "https://learn.microsoft.com/azure/key-vault/certificates/about-certificates | https://learn.microsoft.com/azure/application-gateway/key-vault-certs",
        },
        Recommendation {
            id: "REC-03",
            title: "Harden Private Link + Private DNS zone management (Key Vault, ACR)",
            pillars: "Security, Reliability",
            why: "Private Endpoint access failures caused secret retrieval and DNS resolution issues.",
            risk: "Workloads unable to pull images or read secrets; cascading failures.",
            priority: Priority::High,
            effort: "1–2 days",
            cases: "120012348",
            docs: "https://learn.microsoft.com/azure/private-link/private-endpoint-dns | https://learn.microsoft.com/azure/key-vault/general/private-link-service",
        },
        Recommendation {
            id: "REC-04",
            title: "Make monitoring egress explicit and continuously validated through Azure Firewall",
            pillars: "Operational Excellence, Reliability",
            why: "Firewall misconfig blocked Azure Monitor/Prometheus endpoints; telemetry gaps.",
            risk: "Reduced observability during incidents; delayed detection of failures.",
            priority: Priority::High,
            effort: "1–3 days",
            cases: "120012350; 120012354",
            docs: "https://learn.microsoft.com/azure/firewall/overview | https://learn.microsoft.com/azure/azure-monitor/containers/kubernetes-monitoring-enable",
        },
        Recommendation {
            id: "REC-05",
            title: "Implement AKS subnet/IP capacity planning and autoscaler guardrails",
            pillars: "Reliability, Performance Efficiency",
            why: "Autoscaling failures due to subnet IP range constraints.",
            risk: "Scale-out fails; pods stuck Pending; degraded performance/availability.",
            priority: Priority::High,
            effort: "0.5–2 days",
            cases: "120012351",
            docs: "https://learn.microsoft.com/azure/aks/cluster-autoscaler | https://learn.microsoft.com/azure/aks/concepts-network",
        },
        Recommendation {
            id: "REC-06",
            title: "Reduce configuration drift via IaC + policy guardrails + runbooks",
            pillars: "Operational Excellence, Security",
            why: "Pattern of incidents rooted in configuration mistakes (Bastion association, probes, routing, rules).",
            risk: "Recurring outages; inconsistent environments; slower recovery.",
            priority: Priority::High,
            effort: "1–3 weeks (incremental)",
            cases: "120012352; 120012346; 120012353; 120012350",
            docs: "https://learn.microsoft.com/azure/governance/policy/overview | https://learn.microsoft.com/azure/well-architected/",
        },
    ]
}
