use crate::models::{HeuristicAnalysis, ResumeMetrics};

pub const MOCK_SUMMARY: &str =
    "This is a mock analysis. In a real implementation, this would contain AI-generated feedback.";

pub const SUGGESTIONS: [&str; 3] = [
    "Add more technical skills",
    "Include quantifiable achievements",
    "Consider adding a professional summary",
];

const WORDS_PER_POINT: usize = 50;
const MIN_SCORE: usize = 10;
const MAX_SCORE: usize = 100;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `word_count / 50`, clamped to `[10, 100]`
pub fn readability_score(word_count: usize) -> usize {
    (word_count / WORDS_PER_POINT).clamp(MIN_SCORE, MAX_SCORE)
}

pub fn analyze(text: &str) -> HeuristicAnalysis {
    let word_count = word_count(text);

    HeuristicAnalysis {
        summary: MOCK_SUMMARY.to_string(),
        metrics: ResumeMetrics {
            word_count,
            readability_score: readability_score(word_count),
        },
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_hundred_words_hits_floor() {
        let analysis = analyze(&words(100));
        assert_eq!(analysis.metrics.word_count, 100);
        assert_eq!(analysis.metrics.readability_score, 10);
    }

    #[test]
    fn test_three_thousand_words() {
        let analysis = analyze(&words(3000));
        assert_eq!(analysis.metrics.word_count, 3000);
        assert_eq!(analysis.metrics.readability_score, 60);
    }

    #[test]
    fn test_score_ceiling() {
        assert_eq!(readability_score(5000), 100);
        assert_eq!(readability_score(1_000_000), 100);
        assert_eq!(readability_score(5049), 100);
        assert_eq!(readability_score(549), 10);
        assert_eq!(readability_score(550), 11);
    }

    #[test]
    fn test_mixed_whitespace_counts_tokens() {
        assert_eq!(word_count("  Jane\tDoe\n\nRust  engineer \r\n"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(analyze("").metrics.readability_score, 10);
    }

    #[test]
    fn test_suggestions_ignore_content() {
        let a = analyze("short");
        let b = analyze(&words(2000));
        assert_eq!(a.suggestions, b.suggestions);
        assert_eq!(a.suggestions.len(), 3);
        assert_eq!(a.summary, MOCK_SUMMARY);
    }
}
