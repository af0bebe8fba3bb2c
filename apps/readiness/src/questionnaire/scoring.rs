use thiserror::Error;

use crate::questionnaire::bank::answer_key;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("expected {expected} responses, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("answer key is empty")]
    EmptyKey,
}

/// Percentage of positions where the response equals the key: `matches / N * 100`.
/// Responses must line up one-to-one with the key; a shorter or longer list is
/// rejected instead of being truncated.
pub fn score_against_key(responses: &[usize], key: &[usize]) -> Result<f64, ScoringError> {
    if key.is_empty() {
        return Err(ScoringError::EmptyKey);
    }
    if responses.len() != key.len() {
        return Err(ScoringError::LengthMismatch {
            expected: key.len(),
            actual: responses.len(),
        });
    }

    let correct = responses
        .iter()
        .zip(key)
        .filter(|(response, best)| response == best)
        .count();

    Ok((correct as f64 / key.len() as f64) * 100.0)
}

/// Scores responses against the built-in question bank.
pub fn score_responses(responses: &[usize]) -> Result<f64, ScoringError> {
    score_against_key(responses, &answer_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_correct_is_hundred() {
        assert_eq!(score_responses(&[2, 1, 2, 2, 1]).unwrap(), 100.0);
    }

    #[test]
    fn test_all_wrong_is_zero() {
        assert_eq!(score_responses(&[0, 0, 0, 0, 0]).unwrap(), 0.0);
    }

    #[test]
    fn test_partial_matches_k_over_n() {
        let key = [2, 1, 2, 2, 1];
        for k in 0..=key.len() {
            let responses: Vec<usize> = key
                .iter()
                .enumerate()
                .map(|(i, &best)| if i < k { best } else { 3 })
                .collect();
            let expected = (k as f64 / key.len() as f64) * 100.0;
            assert_eq!(score_against_key(&responses, &key).unwrap(), expected);
        }
    }

    #[test]
    fn test_three_of_five() {
        assert_eq!(score_responses(&[2, 1, 2, 0, 0]).unwrap(), 60.0);
    }

    #[test]
    fn test_short_list_rejected() {
        assert_eq!(
            score_responses(&[2, 1]),
            Err(ScoringError::LengthMismatch {
                expected: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn test_long_list_rejected() {
        assert!(matches!(
            score_responses(&[2, 1, 2, 2, 1, 1]),
            Err(ScoringError::LengthMismatch { actual: 6, .. })
        ));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(score_against_key(&[], &[]), Err(ScoringError::EmptyKey));
    }
}
