//! Question-type profiles, histograms and profile comparison.

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionKind};

/// Count and share of one question kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindShare {
    pub kind: QuestionKind,
    pub count: usize,
    /// Percentage of the profile total, 0 when the total is 0.
    pub percent: f64,
}

/// How a set of questions splits across kinds.
///
/// Every kind is listed, in [`QuestionKind::ALL`] order, even when its count
/// is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub total: usize,
    pub kinds: Vec<KindShare>,
}

impl TypeProfile {
    pub fn of<'a>(questions: impl IntoIterator<Item = &'a Question>) -> Self {
        let mut counts = [0usize; QuestionKind::ALL.len()];
        let mut total = 0;
        for question in questions {
            let slot = QuestionKind::ALL
                .iter()
                .position(|k| *k == question.kind())
                .unwrap_or(QuestionKind::ALL.len() - 1);
            counts[slot] += 1;
            total += 1;
        }

        let kinds = QuestionKind::ALL
            .iter()
            .zip(counts)
            .map(|(&kind, count)| KindShare {
                kind,
                count,
                percent: percent(count, total),
            })
            .collect();

        Self { total, kinds }
    }

    pub fn count(&self, kind: QuestionKind) -> usize {
        self.share(kind).map_or(0, |s| s.count)
    }

    pub fn percent(&self, kind: QuestionKind) -> f64 {
        self.share(kind).map_or(0.0, |s| s.percent)
    }

    fn share(&self, kind: QuestionKind) -> Option<&KindShare> {
        self.kinds.iter().find(|s| s.kind == kind)
    }

    /// Largest count of any kind.
    pub fn max_count(&self) -> usize {
        self.kinds.iter().map(|s| s.count).max().unwrap_or(0)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Render one bar per kind, scaled so the largest count spans `width` cells.
///
/// `UNKNOWN` is only shown when some question has that kind.
pub fn render_histogram(profile: &TypeProfile, width: usize, bar: &str) -> String {
    let max = profile.max_count();
    let shown: Vec<&KindShare> = profile
        .kinds
        .iter()
        .filter(|s| s.kind != QuestionKind::Unknown || s.count > 0)
        .collect();
    let label_width = shown.iter().map(|s| s.kind.code().len()).max().unwrap_or(0);

    let mut out = String::new();
    for share in shown {
        let cells = if max == 0 {
            0
        } else {
            (share.count as f64 / max as f64 * width as f64).round() as usize
        };
        out.push_str(&format!(
            "{:<label_width$} | {} {} ({:.1}%)\n",
            share.kind.code(),
            bar.repeat(cells),
            share.count,
            share.percent,
        ));
    }
    out
}

/// Per-kind difference between two profiles, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindDiff {
    pub kind: QuestionKind,
    pub percent_a: f64,
    pub percent_b: f64,
    /// `percent_b - percent_a`.
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileComparison {
    /// 100 for identical distributions, 0 for disjoint ones.
    pub similarity: f64,
    pub diffs: Vec<KindDiff>,
}

/// Compare two type profiles.
///
/// Similarity is one minus the total variation distance between the two
/// distributions, as a percentage rounded to two decimals.
pub fn compare_profiles(a: &TypeProfile, b: &TypeProfile) -> ProfileComparison {
    let diffs: Vec<KindDiff> = QuestionKind::ALL
        .iter()
        .map(|&kind| {
            let (percent_a, percent_b) = (a.percent(kind), b.percent(kind));
            KindDiff {
                kind,
                percent_a,
                percent_b,
                delta: percent_b - percent_a,
            }
        })
        .collect();

    let distance: f64 = diffs.iter().map(|d| d.delta.abs() / 100.0).sum::<f64>() / 2.0;
    let similarity = ((1.0 - distance) * 100.0).max(0.0);

    ProfileComparison {
        similarity: (similarity * 100.0).round() / 100.0,
        diffs,
    }
}
