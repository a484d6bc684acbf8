// src/stats.rs

use std::collections::HashMap;

use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

use crate::models::paper::PastPaper;
use crate::models::score::Score;

const EXCELLENT_MIN: Score = Score::from_hundredths(8000);
const GOOD_MIN: Score = Score::from_hundredths(7000);
const AVERAGE_MIN: Score = Score::from_hundredths(6000);

/// Counts per score bucket. The four buckets are disjoint and cover every
/// record, so they always sum to `total_papers`.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    /// score >= 80
    pub excellent: usize,
    /// 70 <= score < 80
    pub good: usize,
    /// 60 <= score < 70
    pub average: usize,
    /// score < 60
    pub needs_work: usize,
}

/// Per-subject aggregate, one entry per distinct subject.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPerformance {
    pub subject: String,
    /// Mean score for the subject, rounded to one decimal.
    pub average_score: f64,
    pub paper_count: usize,
    /// Highest score recorded for the subject.
    pub best_score: Score,
    /// Score of the last record seen for the subject in input order.
    /// This follows the store's iteration order, not the completion date.
    pub latest_score: Score,
}

/// Summary statistics over the full record history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_papers: usize,
    pub average_score: f64,
    pub best_subject: Option<String>,
    pub best_subject_score: f64,
    pub weekly_count: usize,
    pub recent_increase: usize,
    pub total_time_spent: i64,
    pub average_time_per_paper: i64,
    pub score_distribution: ScoreDistribution,
    pub subject_performance: Vec<SubjectPerformance>,
}

/// Running per-subject totals, accumulated in exact hundredths.
struct SubjectAgg {
    subject: String,
    total_hundredths: i64,
    count: usize,
    best: Score,
    latest: Score,
}

impl SubjectAgg {
    fn mean(&self) -> f64 {
        self.total_hundredths as f64 / 100.0 / self.count as f64
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes summary statistics over `papers`.
///
/// Pure and deterministic: the reference date is passed in rather than read
/// from the system clock, so time-window boundaries are testable. Empty
/// input yields a fully zeroed summary; nothing here can divide by zero.
///
/// The two recency windows deliberately use different arithmetic: the weekly
/// window subtracts seven days, the monthly window subtracts one calendar
/// month (which can land on a different day-of-month near month ends). Both
/// bounds are inclusive.
pub fn compute(papers: &[PastPaper], today: NaiveDate) -> Statistics {
    let total_papers = papers.len();

    let week_start = today
        .checked_sub_days(Days::new(7))
        .unwrap_or(NaiveDate::MIN);
    let month_start = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN);

    let mut total_hundredths: i64 = 0;
    let mut total_time_spent: i64 = 0;
    let mut weekly_count = 0;
    let mut recent_increase = 0;
    let mut distribution = ScoreDistribution::default();

    // Subjects grouped in encounter order; the index map only speeds up the
    // lookup, ordering lives in the Vec.
    let mut groups: Vec<SubjectAgg> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for paper in papers {
        total_hundredths += paper.score.hundredths();
        total_time_spent += paper.time_spent.unwrap_or(0);

        if paper.date_completed >= week_start {
            weekly_count += 1;
        }
        if paper.date_completed >= month_start {
            recent_increase += 1;
        }

        if paper.score >= EXCELLENT_MIN {
            distribution.excellent += 1;
        } else if paper.score >= GOOD_MIN {
            distribution.good += 1;
        } else if paper.score >= AVERAGE_MIN {
            distribution.average += 1;
        } else {
            distribution.needs_work += 1;
        }

        match group_index.get(&paper.subject) {
            Some(&idx) => {
                let group = &mut groups[idx];
                group.total_hundredths += paper.score.hundredths();
                group.count += 1;
                group.best = group.best.max(paper.score);
                group.latest = paper.score;
            }
            None => {
                group_index.insert(paper.subject.clone(), groups.len());
                groups.push(SubjectAgg {
                    subject: paper.subject.clone(),
                    total_hundredths: paper.score.hundredths(),
                    count: 1,
                    best: paper.score,
                    latest: paper.score,
                });
            }
        }
    }

    let average_score = if total_papers > 0 {
        round1(total_hundredths as f64 / 100.0 / total_papers as f64)
    } else {
        0.0
    };

    let average_time_per_paper = if total_papers > 0 {
        (total_time_spent as f64 / total_papers as f64).round() as i64
    } else {
        0
    };

    // First-seen subject wins ties: strict `>` against the running best.
    let mut best_subject: Option<String> = None;
    let mut best_subject_mean = 0.0_f64;
    for group in &groups {
        let mean = group.mean();
        if mean > best_subject_mean {
            best_subject = Some(group.subject.clone());
            best_subject_mean = mean;
        }
    }

    let mut subject_performance: Vec<SubjectPerformance> = groups
        .iter()
        .map(|group| SubjectPerformance {
            subject: group.subject.clone(),
            average_score: round1(group.mean()),
            paper_count: group.count,
            best_score: group.best,
            latest_score: group.latest,
        })
        .collect();
    // Stable sort: equal rounded means keep encounter order.
    subject_performance.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Statistics {
        total_papers,
        average_score,
        best_subject,
        best_subject_score: round1(best_subject_mean),
        weekly_count,
        recent_increase,
        total_time_spent,
        average_time_per_paper,
        score_distribution: distribution,
        subject_performance,
    }
}
