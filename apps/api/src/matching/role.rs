//! Target-role vs job-title alignment using keyword families and seniority tags.

use serde::Serialize;

const NO_PREFERENCE: f64 = 70.0;
const CONTAINS: f64 = 100.0;
const SAME_FAMILY: f64 = 85.0;
const SAME_SENIORITY: f64 = 75.0;
const BASELINE: f64 = 50.0;

/// Checked in this order; the first keyword hit wins.
const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead", "principal", "staff", "junior", "associate"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFamily {
    Backend,
    Frontend,
    Fullstack,
    Data,
    Devops,
    Mobile,
}

impl RoleFamily {
    /// Classification order.
    pub const ALL: [RoleFamily; 6] = [
        RoleFamily::Backend,
        RoleFamily::Frontend,
        RoleFamily::Fullstack,
        RoleFamily::Data,
        RoleFamily::Devops,
        RoleFamily::Mobile,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            RoleFamily::Backend => &["python", "java", "node", "api", "server", "backend"],
            RoleFamily::Frontend => &["react", "angular", "vue", "ui", "ux", "frontend", "web"],
            RoleFamily::Fullstack => &["full stack", "fullstack", "full-stack"],
            RoleFamily::Data => &[
                "data engineer",
                "data scientist",
                "ml",
                "machine learning",
                "analytics",
            ],
            RoleFamily::Devops => &["devops", "sre", "infrastructure", "platform", "cloud"],
            RoleFamily::Mobile => &["ios", "android", "mobile", "flutter", "react native"],
        }
    }

    /// Keywords are matched as substrings of the lowercased text.
    pub fn mentioned_in(self, text: &str) -> bool {
        self.keywords().iter().any(|kw| text.contains(kw))
    }
}

/// First family (in `RoleFamily::ALL` order) with a keyword in `role`.
pub fn classify_role(role: &str) -> Option<RoleFamily> {
    let role = role.to_lowercase();
    RoleFamily::ALL.into_iter().find(|family| family.mentioned_in(&role))
}

fn seniority(text: &str) -> Option<&'static str> {
    SENIORITY_KEYWORDS.iter().copied().find(|kw| text.contains(kw))
}

pub fn score_role(target_role: Option<&str>, job_title: &str) -> f64 {
    let target = match target_role.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return NO_PREFERENCE,
    };
    let title = job_title.trim().to_lowercase();

    if title.contains(&target) || target.contains(&title) {
        return CONTAINS;
    }

    if classify_role(&target).is_some_and(|family| family.mentioned_in(&title)) {
        return SAME_FAMILY;
    }

    match (seniority(&target), seniority(&title)) {
        (Some(a), Some(b)) if a == b => SAME_SENIORITY,
        _ => BASELINE,
    }
}
