//! Fuzzy comparison of the candidate's skill labels against a
//! job's required and nice-to-have lists.
//!
//! Labels are compared with a token-set ratio: both labels are reduced to word
//! sets, so word order and extra qualifiers ("AWS" vs "AWS Lambda") do not
//! count against a match, while single-word spelling variants ("Python" vs
//! "Python3") are graded by insert/delete edit distance.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

/// Minimum similarity at which two labels are treated as the same skill.
pub const MATCH_THRESHOLD: f64 = 80.0;

const REQUIRED_SHARE: f64 = 0.8;
const OPTIONAL_SHARE: f64 = 0.2;

/// Outcome of matching one candidate against one job's skill lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub score: f64,
    /// Required matches first, then optional ones, without duplicates.
    pub matched: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_optional: Vec<String>,
    pub matched_required: usize,
    pub total_required: usize,
}

impl SkillMatch {
    /// Percentage of required skills covered; 100 when nothing is required.
    pub fn required_coverage(&self) -> f64 {
        coverage(self.matched_required, self.total_required)
    }
}

pub fn score_skills(candidate: &[String], required: &[String], optional: &[String]) -> SkillMatch {
    if candidate.is_empty() {
        return SkillMatch {
            score: 0.0,
            matched: Vec::new(),
            missing_required: required.to_vec(),
            missing_optional: optional.to_vec(),
            matched_required: 0,
            total_required: required.len(),
        };
    }

    let (matched_req, missing_required) = partition_by_match(required, candidate);
    let (matched_opt, missing_optional) = partition_by_match(optional, candidate);

    let score = REQUIRED_SHARE * coverage(matched_req.len(), required.len())
        + OPTIONAL_SHARE * coverage(matched_opt.len(), optional.len());

    let matched_required = matched_req.len();
    let mut matched: Vec<String> = Vec::with_capacity(matched_req.len() + matched_opt.len());
    for skill in matched_req.into_iter().chain(matched_opt) {
        if !matched.contains(&skill) {
            matched.push(skill);
        }
    }

    SkillMatch {
        score: score.clamp(0.0, 100.0),
        matched,
        missing_required,
        missing_optional,
        matched_required,
        total_required: required.len(),
    }
}

/// Highest similarity between `label` and any candidate skill.
pub fn best_similarity(label: &str, candidate: &[String]) -> f64 {
    candidate
        .iter()
        .map(|skill| token_set_ratio(label, skill))
        .fold(0.0, f64::max)
}

fn partition_by_match(wanted: &[String], candidate: &[String]) -> (Vec<String>, Vec<String>) {
    wanted
        .iter()
        .cloned()
        .partition(|skill| best_similarity(skill, candidate) >= MATCH_THRESHOLD)
}

/// Absence of a requirement is not a penalty.
fn coverage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        matched as f64 / total as f64 * 100.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Similarity metric
// ────────────────────────────────────────────────────────────────────────────

/// Token-set similarity in `[0, 100]`, rounded to the nearest integer.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let left = tokenize(a);
    let right = tokenize(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let common: Vec<&str> = left.intersection(&right).map(String::as_str).collect();
    let only_left: Vec<&str> = left.difference(&right).map(String::as_str).collect();
    let only_right: Vec<&str> = right.difference(&left).map(String::as_str).collect();

    // One label's words are a subset of the other's.
    if !common.is_empty() && (only_left.is_empty() || only_right.is_empty()) {
        return 100.0;
    }

    let sect = common.join(" ");
    let with_left = join_words(&sect, &only_left.join(" "));
    let with_right = join_words(&sect, &only_right.join(" "));

    let mut best = indel_ratio(&with_left, &with_right);
    if !sect.is_empty() {
        best = best
            .max(indel_ratio(&sect, &with_left))
            .max(indel_ratio(&sect, &with_right));
    }
    best.round()
}

/// Lowercased word set. `+` and `#` stay part of a word so "C", "C++" and "C#" differ.
fn tokenize(label: &str) -> BTreeSet<String> {
    label
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '+' || c == '#' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn join_words(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

/// `100 × (1 − indel / (|a| + |b|))`, where indel is the insert/delete edit distance.
fn indel_ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}
