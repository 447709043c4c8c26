//! Plain-text output for reviews, analyses, and evaluation summaries.
//!
//! Everything here writes to stdout; logging goes to stderr.

use yelpsent_ai::{Analysis, ScoreCounts, Tally};
use yelpsent_core::{Review, ReviewSet, ReviewSummary};

const RULE: &str = "==========================";
const SUBRULE: &str = "=====";
const SUMMARY_RULE: &str = "==============================================";

/// Print every review as a `K: <key> => <id>: <text>` block.
pub fn print_reviews(reviews: &ReviewSet) {
    for (key, review) in reviews {
        println!("{RULE}");
        println!("K: {key} => {}: {}", review.review_id, review.text);
    }
}

pub fn print_summary(summary: &ReviewSummary) {
    println!("{SUMMARY_RULE}");
    println!("Reviews: {}", summary.total);
    for (stars, count) in &summary.by_stars {
        println!("  {stars} star: {count}");
    }
    println!(
        "Positive: {}; Negative: {}; Neutral (3 star): {}",
        summary.positive, summary.negative, summary.neutral
    );
}

/// Print an analysis: overall score, then sentence and word detail.
pub fn print_analysis(analysis: &Analysis) {
    println!("{RULE}");
    println!("Score: {}", analysis.score());
    print_detail(analysis);
}

/// Print one evaluated review with its analysis.
pub fn print_review_analysis(key: &str, review: &Review, analysis: &Analysis) {
    println!("{RULE}");
    println!("K: {key} ({:2.2}): {}", review.stars, analysis.score());
    println!(" {}", review.text);
    print_detail(analysis);
}

fn print_detail(analysis: &Analysis) {
    println!("{SUBRULE}");
    println!("Sentences:");
    for s in &analysis.sentences {
        println!("  [{}] {}", s.sentiment.score(), s.sentence);
    }
    println!("{SUBRULE}");
    let words: Vec<String> = analysis
        .words
        .iter()
        .map(|w| format!("{}:{}", w.word, w.sentiment.score()))
        .collect();
    println!("Words: {}", words.join(" "));
}

/// Print the evaluation summary.
pub fn print_tally(tally: &Tally) {
    for line in tally_lines(tally) {
        println!("{line}");
    }
}

pub fn print_score_counts(counts: &ScoreCounts) {
    println!(
        "Analyzed total of {} files. Pos: {}; Neg: {} .",
        counts.total(),
        counts.positive,
        counts.negative
    );
}

fn tally_lines(tally: &Tally) -> Vec<String> {
    let mut lines = vec![
        format!("S:{SUMMARY_RULE}"),
        "S:* 3 star reviews are ignored".to_string(),
    ];
    if tally.total() == 0 {
        lines.push("S:no data: no reviews rated above or below 3 stars".to_string());
    }
    lines.push(format!("S:true positive: {}", tally.true_positive));
    lines.push(format!("S:true negative: {}", tally.true_negative));
    lines.push(format!(
        "S:false positive: {} ({})",
        tally.false_positive,
        format_rate(tally.false_positive_rate())
    ));
    lines.push(format!(
        "S:false negative: {} ({})",
        tally.false_negative,
        format_rate(tally.false_negative_rate())
    ));
    if let Some(accuracy) = tally.accuracy() {
        lines.push(format!("S:accuracy: {accuracy:.6}"));
    }
    lines
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{r:.6}"),
        None => "no data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_lines_with_rates() {
        let tally = Tally {
            true_positive: 1,
            true_negative: 1,
            false_positive: 1,
            false_negative: 1,
        };
        let lines = tally_lines(&tally);
        assert!(lines.contains(&"S:false positive: 1 (0.250000)".to_string()));
        assert!(lines.contains(&"S:false negative: 1 (0.250000)".to_string()));
        assert!(lines.contains(&"S:accuracy: 0.500000".to_string()));
        assert!(!lines.iter().any(|l| l.contains("no data")));
    }

    #[test]
    fn tally_lines_without_data() {
        let lines = tally_lines(&Tally::default());
        assert!(lines.iter().any(|l| l.starts_with("S:no data")));
        assert!(lines.contains(&"S:false positive: 0 (no data)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("NaN")));
        assert!(!lines.iter().any(|l| l.starts_with("S:accuracy")));
    }
}
