//! Sentiment boundary: review text in, polarity score in [-1, 1] out.
//!
//! The classifier itself is pluggable behind [`SentimentModel`]; the crate
//! ships [`WordListModel`], a deterministic word-list scorer, as the
//! default. Threshold policy: scores above 0.1 are Positive, below -0.1
//! Negative, everything in between (boundaries included) Neutral.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_polarity(score: f32) -> Self {
        if score > 0.1 {
            Sentiment::Positive
        } else if score < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Polarity scorer. Implementations must be pure and deterministic;
/// the returned score is clamped to [-1, 1] by contract.
pub trait SentimentModel: Send + Sync {
    fn polarity(&self, text: &str) -> f32;

    fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

// Stems rather than full words so conjugated Korean forms still match
// (맛있어요 / 맛있습니다 both contain 맛있).
const POSITIVE_STEMS: &[&str] = &[
    "맛있", "아름다", "훌륭", "즐겼", "즐거", "최고", "추천", "친절", "좋았", "좋아", "멋지",
    "멋있", "감동", "delicious", "beautiful", "amazing", "excellent", "wonderful", "great",
    "good", "tasty", "love", "nice",
];

const NEGATIVE_STEMS: &[&str] = &[
    "별로", "실망", "최악", "불친절", "비싸", "더러", "시끄러", "아쉬", "나쁘", "나쁜", "bad",
    "awful", "terrible", "disappointing", "dirty", "rude", "overpriced", "worst", "noisy",
];

/// Default classifier: counts positive/negative stem hits per token and
/// scores `(pos - neg) / (pos + neg)`. No hits scores 0.0 (Neutral).
pub struct WordListModel {
    positive: Vec<&'static str>,
    negative: Vec<&'static str>,
}

impl Default for WordListModel {
    fn default() -> Self {
        WordListModel {
            positive: POSITIVE_STEMS.to_vec(),
            negative: NEGATIVE_STEMS.to_vec(),
        }
    }
}

impl SentimentModel for WordListModel {
    fn polarity(&self, text: &str) -> f32 {
        let mut pos = 0u32;
        let mut neg = 0u32;
        for token in text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation()) {
            if token.is_empty() {
                continue;
            }
            let token = token.to_lowercase();
            // Negative stems win per token: 불친절 must not also count as 친절.
            if self.negative.iter().any(|stem| token.contains(stem)) {
                neg += 1;
            } else if self.positive.iter().any(|stem| token.contains(stem)) {
                pos += 1;
            }
        }
        let hits = pos + neg;
        if hits == 0 {
            return 0.0;
        }
        (pos as f32 - neg as f32) / hits as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_thresholds() {
        assert_eq!(Sentiment::from_polarity(0.5), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-0.5), Sentiment::Negative);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
    }

    #[test]
    fn boundary_scores_are_neutral() {
        assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
    }

    #[test]
    fn word_list_scores_korean_reviews() {
        let model = WordListModel::default();
        assert_eq!(model.classify("빵이 정말 맛있어요!"), Sentiment::Positive);
        assert_eq!(model.classify("야경이 정말 아름다워요."), Sentiment::Positive);
        assert_eq!(model.classify("서비스가 별로였어요."), Sentiment::Negative);
        assert_eq!(model.classify("그냥 그래요."), Sentiment::Neutral);
    }

    #[test]
    fn mixed_reviews_average_out() {
        let model = WordListModel::default();
        // One positive and one negative hit cancel to 0.0.
        let score = model.polarity("빵은 맛있지만 직원이 불친절했다");
        assert!(score.abs() <= 0.1);
    }

    #[test]
    fn scores_stay_in_range() {
        let model = WordListModel::default();
        for text in ["최고 최고 최고", "최악 최악", "", "aaaa"] {
            let score = model.polarity(text);
            assert!((-1.0..=1.0).contains(&score), "score {score} for {text:?}");
        }
    }
}
