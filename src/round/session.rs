//! The round controller.
//!
//! A `Session` owns everything that lives across rounds: the parsed
//! levels, the RNG streams, the token order and the current level. It
//! hands out the current `Round` for clicks and starts the next one.
//!
//! ```
//! use boolean_game::{GameConfig, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(7)).unwrap();
//! assert_eq!(session.level(), 0);
//!
//! for index in session.round().answer() {
//!     session.click(index).unwrap();
//! }
//! assert!(session.round().is_perfect());
//!
//! let summary = session.next_round().unwrap();
//! assert!(summary.perfect);
//! assert_eq!(session.level(), 1);
//! ```

use tracing::info;

use crate::challenge::{ChallengeGenerator, Pattern};
use crate::core::{ConfigError, GameConfig, GameRng, LevelProgression, RoundError, Token};

use super::state::{ClickOutcome, Round, RoundPhase};

/// How a finished round went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// Level the round was played at.
    pub level: usize,
    /// How the round ended.
    pub phase: RoundPhase,
    /// Completed without wrong clicks.
    pub perfect: bool,
    /// Level of the round that starts next.
    pub next_level: usize,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    patterns: Vec<Pattern>,
    progression: LevelProgression,
    generator: ChallengeGenerator,
    challenge_rng: GameRng,
    shuffle_rng: GameRng,
    tokens: Vec<Token>,
    level: usize,
    rounds_played: u32,
    round: Round,
}

impl Session {
    /// Validate `config` and start the first round.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let patterns = config.validate()?;

        let rng = GameRng::new(config.seed);
        let mut challenge_rng = rng.for_context("challenges");
        let mut shuffle_rng = rng.for_context("tokens");

        let generator = ChallengeGenerator::new(config.palette.clone(), config.max_value);

        let mut tokens = Token::full_set(&config.palette, config.max_value);
        shuffle_rng.shuffle(&mut tokens);

        let level = config.start_level;
        let challenge = generator.generate(&patterns[level], &mut challenge_rng);
        let round = Round::new(challenge, &tokens);

        info!(seed = config.seed, level, tokens = tokens.len(), "session started");

        Ok(Self {
            patterns,
            progression: config.progression,
            generator,
            challenge_rng,
            shuffle_rng,
            tokens,
            level,
            rounds_played: 0,
            round,
        })
    }

    /// Current difficulty level (index into the pattern list).
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.patterns.len()
    }

    /// Pattern of the current level.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.patterns[self.level]
    }

    /// The round being played.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Token set in the current display order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Rounds finished so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Click a token of the current round.
    pub fn click(&mut self, index: usize) -> Result<ClickOutcome, RoundError> {
        self.round.click(index)
    }

    /// Reveal the answer of the current round.
    pub fn reveal(&mut self) -> Result<(), RoundError> {
        self.round.reveal()
    }

    /// End the finished round and start the next one.
    ///
    /// A perfect round moves one level up, following the configured
    /// progression; any other ending replays the same level. The tokens
    /// are reshuffled and a fresh challenge is drawn, so every checked
    /// flag starts cleared.
    pub fn next_round(&mut self) -> Result<RoundSummary, RoundError> {
        if !self.round.is_finished() {
            return Err(RoundError::NotFinished);
        }

        let perfect = self.round.is_perfect();
        let next_level = if perfect {
            self.progression.advance(self.level, self.patterns.len())
        } else {
            self.level
        };

        let summary = RoundSummary {
            level: self.level,
            phase: self.round.phase(),
            perfect,
            next_level,
        };

        self.shuffle_rng.shuffle(&mut self.tokens);
        self.level = next_level;
        self.rounds_played += 1;

        let challenge = self
            .generator
            .generate(&self.patterns[next_level], &mut self.challenge_rng);
        self.round = Round::new(challenge, &self.tokens);

        info!(
            from = summary.level,
            to = next_level,
            perfect,
            pattern = %self.patterns[next_level],
            "next round"
        );

        Ok(summary)
    }
}
