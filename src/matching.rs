//! # RIASEC Matching
//!
//! Ranks degree programs against a client-supplied interest code.
//!
//! A code is uppercased and cut to its first 3 letters. Every candidate
//! program scores 1 per supplied letter contained in its own profile, with
//! repeated letters counted again. Universities and institutes are ranked
//! separately (score descending, name ascending), capped at 5 each, and the
//! university block always precedes the institute block.
//!
//! The dominant-dimension path is the degenerate case: exact equality of the
//! stored profile with one letter, no cap, no category split.

use sqlx::MySqlPool;

use crate::{
    database::{list_candidate_programs, list_programs_by_dimension},
    error::AppError,
    models::{Category, CodeMatch, DimensionMatch},
};

/// The six RIASEC dimensions.
pub const DIMENSIONS: [char; 6] = ['R', 'I', 'A', 'S', 'E', 'C'];

const TOP_PER_CATEGORY: usize = 5;
const MAX_LETTERS: usize = 3;

/// Uppercases and keeps at most the first 3 letters. Characters outside the
/// RIASEC alphabet are kept; they simply never score a hit.
pub fn parse_code(code: &str) -> Result<Vec<char>, AppError> {
    if code.is_empty() {
        return Err(AppError::InvalidCode);
    }

    Ok(code.to_uppercase().chars().take(MAX_LETTERS).collect())
}

/// A dominant dimension is exactly one of the six letters, either case.
pub fn parse_dimension(raw: &str) -> Result<char, AppError> {
    let upper = raw.to_uppercase();
    let mut chars = upper.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if DIMENSIONS.contains(&c) => Ok(c),
        _ => Err(AppError::InvalidDimension),
    }
}

/// Containment hits between a program profile and the supplied letters.
pub fn score(riasec_code: &str, letters: &[char]) -> usize {
    letters.iter().filter(|&&l| riasec_code.contains(l)).count()
}

/// Score descending, program name ascending, top 5.
pub fn rank(candidates: Vec<CodeMatch>, letters: &[char]) -> Vec<CodeMatch> {
    let mut scored: Vec<(usize, CodeMatch)> = candidates
        .into_iter()
        .map(|c| (score(&c.riasec_code, letters), c))
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| a.program_name.cmp(&b.program_name))
    });

    scored
        .into_iter()
        .take(TOP_PER_CATEGORY)
        .map(|(_, c)| c)
        .collect()
}

/// Top 5 university programs followed by the top 5 institute programs.
/// Blocks are ranked independently and never interleaved.
pub async fn match_by_code(pool: &MySqlPool, code: &str) -> Result<Vec<CodeMatch>, AppError> {
    let letters = parse_code(code)?;

    let mut matches = Vec::with_capacity(2 * TOP_PER_CATEGORY);
    for category in [Category::University, Category::Institute] {
        let candidates = list_candidate_programs(pool, category).await?;
        matches.extend(rank(candidates, &letters));
    }

    Ok(matches)
}

pub async fn match_by_dimension(
    pool: &MySqlPool,
    raw: &str,
) -> Result<Vec<DimensionMatch>, AppError> {
    let dimension = parse_dimension(raw)?;

    list_programs_by_dimension(pool, dimension).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, code: &str) -> CodeMatch {
        CodeMatch {
            program_name: name.to_string(),
            riasec_code: code.to_string(),
            institution_name: "UNI".to_string(),
            institution_category: Category::University,
        }
    }

    fn names(ranked: &[CodeMatch]) -> Vec<&str> {
        ranked.iter().map(|c| c.program_name.as_str()).collect()
    }

    #[test]
    fn test_score_counts_containment_hits() {
        assert_eq!(score("SIA", &['S', 'I', 'A']), 3);
        assert_eq!(score("S", &['S', 'I', 'A']), 1);
        assert_eq!(score("RC", &['S', 'I', 'A']), 0);
    }

    #[test]
    fn test_score_repeated_letters_count_again() {
        assert_eq!(score("S", &['S', 'S']), 2);
        assert_eq!(score("IA", &['A', 'A', 'R']), 2);
    }

    #[test]
    fn test_score_foreign_characters_never_hit() {
        assert_eq!(score("RIA", &['X', '1', 'Ñ']), 0);
    }

    #[test]
    fn test_parse_code_rejects_empty() {
        assert!(matches!(parse_code(""), Err(AppError::InvalidCode)));
    }

    #[test]
    fn test_parse_code_uppercases() {
        assert_eq!(parse_code("sia").unwrap(), vec!['S', 'I', 'A']);
    }

    #[test]
    fn test_parse_code_keeps_first_three_letters() {
        assert_eq!(parse_code("RIASEC").unwrap(), vec!['R', 'I', 'A']);
        assert_eq!(parse_code("S").unwrap(), vec!['S']);
    }

    #[test]
    fn test_parse_dimension_accepts_all_six_either_case() {
        for d in DIMENSIONS {
            assert_eq!(parse_dimension(&d.to_string()).unwrap(), d);
            assert_eq!(parse_dimension(&d.to_lowercase().to_string()).unwrap(), d);
        }
    }

    #[test]
    fn test_parse_dimension_rejects_everything_else() {
        assert!(matches!(parse_dimension("x"), Err(AppError::InvalidDimension)));
        assert!(matches!(parse_dimension("RI"), Err(AppError::InvalidDimension)));
        assert!(matches!(parse_dimension(""), Err(AppError::InvalidDimension)));
    }

    #[test]
    fn test_rank_orders_by_score_then_name() {
        let ranked = rank(
            vec![
                candidate("Nursing", "S"),
                candidate("Psychology", "SIA"),
                candidate("Art", "A"),
            ],
            &['S', 'I', 'A'],
        );

        // Nursing and Art both score 1; the tie falls to the name.
        assert_eq!(names(&ranked), ["Psychology", "Art", "Nursing"]);
    }

    #[test]
    fn test_rank_caps_at_five() {
        let candidates = ["f", "b", "d", "a", "g", "c", "e"]
            .iter()
            .map(|&name| candidate(name, "R"))
            .collect();

        let ranked = rank(candidates, &['R']);
        assert_eq!(names(&ranked), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_rank_empty_candidates() {
        assert!(rank(Vec::new(), &['R']).is_empty());
    }
}
