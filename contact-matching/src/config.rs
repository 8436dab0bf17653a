use serde::{Deserialize, Serialize};

use crate::error::MatchingError;

/// Allowed drift when checking that the two weights add up to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights and thresholds for fuzzy contact matching.
///
/// Built once at startup and passed by value into every match call.
/// `name_weight + method_weight` must be 1.0 so a perfect name match with full
/// method overlap scores exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Floor handed to the upstream similarity search, unused by the scorer
    pub min_similarity_threshold: f64,
    /// Minimum weighted score for a match to be suggested
    pub confidence_threshold: f64,
    pub name_weight: f64,
    pub method_weight: f64,
}

impl FuzzyConfig {
    /// Profile for import candidates
    pub const fn import() -> Self {
        Self {
            min_similarity_threshold: 0.3,
            confidence_threshold: 0.5,
            name_weight: 0.6,
            method_weight: 0.4,
        }
    }

    /// Profile for calendar attendees, which are linked without review and
    /// therefore need a higher confidence
    pub const fn calendar() -> Self {
        Self {
            min_similarity_threshold: 0.3,
            confidence_threshold: 0.7,
            name_weight: 0.6,
            method_weight: 0.4,
        }
    }

    pub fn validate(&self) -> Result<(), MatchingError> {
        for (field, value) in [
            ("min_similarity_threshold", self.min_similarity_threshold),
            ("confidence_threshold", self.confidence_threshold),
            ("name_weight", self.name_weight),
            ("method_weight", self.method_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchingError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    field, value
                )));
            }
        }

        let sum = self.name_weight + self.method_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchingError::InvalidConfig(format!(
                "name_weight + method_weight must equal 1.0, got {}",
                sum
            )));
        }

        Ok(())
    }

    /// Weighted confidence for one candidate/contact pair.
    ///
    /// With no matchable methods on the contact the method term is zero and
    /// the score is the weighted name similarity alone.
    pub fn score(&self, name_similarity: f64, method_matches: usize, total_methods: usize) -> f64 {
        let mut score = name_similarity * self.name_weight;
        if total_methods > 0 {
            let method_score = method_matches as f64 / total_methods as f64;
            score += method_score * self.method_weight;
        }
        score
    }
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self::import()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_presets() {
        let import = FuzzyConfig::import();
        assert_eq!(import.min_similarity_threshold, 0.3);
        assert_eq!(import.confidence_threshold, 0.5);
        assert_eq!(import.name_weight, 0.6);
        assert_eq!(import.method_weight, 0.4);

        let calendar = FuzzyConfig::calendar();
        assert_eq!(calendar.min_similarity_threshold, 0.3);
        assert_eq!(calendar.confidence_threshold, 0.7);
        assert_eq!(calendar.name_weight, 0.6);
        assert_eq!(calendar.method_weight, 0.4);

        assert!(import.validate().is_ok());
        assert!(calendar.validate().is_ok());
    }

    #[test]
    fn test_score_name_only() {
        let config = FuzzyConfig::import();
        assert_close(config.score(0.9, 0, 0), 0.54);
    }

    #[test]
    fn test_score_with_no_method_matches() {
        let config = FuzzyConfig::import();
        assert_close(config.score(0.9, 0, 2), 0.54);
        assert_close(config.score(0.2, 0, 3), 0.12);
    }

    #[test]
    fn test_score_with_partial_overlap() {
        let config = FuzzyConfig::import();
        assert_close(config.score(0.8, 1, 2), 0.68);
    }

    #[test]
    fn test_perfect_match_scores_exactly_one() {
        for config in [
            FuzzyConfig::import(),
            FuzzyConfig::calendar(),
            FuzzyConfig {
                name_weight: 0.5,
                method_weight: 0.5,
                ..FuzzyConfig::import()
            },
            FuzzyConfig {
                name_weight: 0.75,
                method_weight: 0.25,
                ..FuzzyConfig::import()
            },
        ] {
            for total in 1..=4 {
                assert_eq!(config.score(1.0, total, total), 1.0);
            }
        }
    }

    #[test]
    fn test_zero_methods_is_name_term_only() {
        let config = FuzzyConfig::import();
        for similarity in [0.0, 0.31, 0.5, 0.77, 1.0] {
            assert_eq!(config.score(similarity, 0, 0), similarity * config.name_weight);
        }
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let config = FuzzyConfig {
            name_weight: 0.7,
            method_weight: 0.4,
            ..FuzzyConfig::import()
        };
        assert!(matches!(
            config.validate(),
            Err(MatchingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let config = FuzzyConfig {
            confidence_threshold: 1.5,
            ..FuzzyConfig::import()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("confidence_threshold"));

        let config = FuzzyConfig {
            name_weight: -0.2,
            method_weight: 1.2,
            ..FuzzyConfig::import()
        };
        assert!(config.validate().is_err());
    }
}
