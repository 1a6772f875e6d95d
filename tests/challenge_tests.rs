//! Challenge generation and matching integration tests.
//!
//! The scenarios here pin down the truth table of each level shape on the
//! default palette.

use boolean_game::{
    matches, Challenge, ChallengeGenerator, GameRng, Operand, Pattern, Token, DEFAULT_PALETTE,
};

const P: [boolean_game::Color; 3] = DEFAULT_PALETTE;

// =============================================================================
// Scenarios
// =============================================================================

/// Pattern "C": only the chosen color matches.
#[test]
fn test_color_pattern_scenario() {
    let challenge = Challenge::color(P[0]);

    assert!(matches(&Token::new(1, P[0]), &challenge));
    assert!(!matches(&Token::new(1, P[1]), &challenge));
    assert!(!matches(&Token::new(1, P[2]), &challenge));
}

/// Pattern "CoN" with AND: both predicates must hold.
#[test]
fn test_and_pattern_scenario() {
    let challenge = Challenge::both(P[1], Operand::And, 2);

    assert!(matches(&Token::new(2, P[1]), &challenge));
    assert!(!matches(&Token::new(2, P[0]), &challenge));
    assert!(!matches(&Token::new(1, P[1]), &challenge));
}

/// Pattern "!Co!N" with OR: either negated predicate is enough.
#[test]
fn test_negated_or_pattern_scenario() {
    let challenge = Challenge::both(P[0], Operand::Or, 3).not_color().not_number();

    assert!(matches(&Token::new(1, P[2]), &challenge));
    assert!(!matches(&Token::new(3, P[0]), &challenge));
}

/// Pattern "!!Co!N": the outer negation flips the whole formula.
#[test]
fn test_global_negation_scenario() {
    let challenge = Challenge::both(P[2], Operand::And, 1).negated();

    assert!(!matches(&Token::new(1, P[2]), &challenge));
    assert!(matches(&Token::new(2, P[2]), &challenge));
    assert!(matches(&Token::new(1, P[0]), &challenge));
}

// =============================================================================
// Generator / pattern agreement
// =============================================================================

/// Generated challenges never carry a field the pattern leaves out.
#[test]
fn test_generated_fields_follow_pattern() {
    let generator = ChallengeGenerator::default();
    let mut rng = GameRng::new(2024);

    for pattern in Pattern::defaults() {
        for _ in 0..100 {
            let c = generator.generate(&pattern, &mut rng);

            assert_eq!(c.color.is_some(), pattern.color, "{pattern}");
            assert_eq!(c.number.is_some(), pattern.number, "{pattern}");
            assert_eq!(c.operand.is_some(), pattern.operand, "{pattern}");
            assert!(!c.color_negation || pattern.color_negation, "{pattern}");
            assert!(!c.number_negation || pattern.number_negation, "{pattern}");
            assert!(!c.global_negation || pattern.global_negation, "{pattern}");
            assert!(c.is_well_formed());
        }
    }
}

/// Single-predicate levels always leave something to click.
#[test]
fn test_single_predicate_levels_have_answers() {
    let generator = ChallengeGenerator::default();
    let mut rng = GameRng::new(5);
    let tokens = Token::full_set(&P, 3);

    for pattern in ["C", "N"] {
        let pattern: Pattern = pattern.parse().unwrap();
        for _ in 0..20 {
            let c = generator.generate(&pattern, &mut rng);
            assert_eq!(tokens.iter().filter(|t| matches(t, &c)).count(), 3);
        }
    }
}

/// Evaluation has no hidden randomness.
#[test]
fn test_evaluation_is_deterministic() {
    let generator = ChallengeGenerator::default();
    let mut rng = GameRng::new(11);
    let pattern: Pattern = "!!Co!N".parse().unwrap();
    let tokens = Token::full_set(&P, 3);

    for _ in 0..20 {
        let c = generator.generate(&pattern, &mut rng);
        for token in &tokens {
            let first = matches(token, &c);
            assert!((0..5).all(|_| matches(token, &c) == first));
        }
    }
}
