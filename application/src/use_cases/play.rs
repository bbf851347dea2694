//! Play session engine
//!
//! One session asks every stored quiz at most once, in random order, and
//! ends on the first wrong answer or when the pool is exhausted. The pool
//! state machine is pure so the selection and scoring rules can be tested
//! without I/O; [`PlayUseCase`] drives it against the ports.

use crate::ports::interaction::InteractionPort;
use crate::ports::store::QuizStore;
use crate::use_cases::commands::CommandError;
use quiz_domain::{Quiz, answers_match};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Session-local working copy of the quizzes not yet asked.
///
/// Loaded once at session start and never written back to storage.
/// Selection is uniform over the *current* pool, emptiness is checked
/// before selection, and a quiz is removed only when answered correctly,
/// so the pool strictly decreases while the session keeps going.
#[derive(Debug, Clone)]
pub struct QuizPool {
    remaining: Vec<Quiz>,
    score: u32,
}

impl QuizPool {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            remaining: quizzes,
            score: 0,
        }
    }

    /// Pick a uniformly random index into the remaining pool.
    ///
    /// Returns `None` once the pool is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.remaining.is_empty() {
            None
        } else {
            Some(rng.random_range(0..self.remaining.len()))
        }
    }

    /// The quiz at a picked index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; indexes come from [`pick`](Self::pick).
    pub fn quiz(&self, index: usize) -> &Quiz {
        &self.remaining[index]
    }

    /// Score one answer against the quiz at `index`.
    ///
    /// A correct answer increments the score and removes the quiz so it is
    /// never asked again this session; an incorrect one leaves the pool
    /// untouched since the session ends there.
    pub fn answer(&mut self, index: usize, given: &str) -> Verdict {
        if answers_match(given, &self.remaining[index].answer) {
            self.score += 1;
            self.remaining.remove(index);
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Use case for one play-through of all stored quizzes.
pub struct PlayUseCase<S: QuizStore, I: InteractionPort> {
    store: Arc<S>,
    interaction: Arc<I>,
}

impl<S: QuizStore, I: InteractionPort> PlayUseCase<S, I> {
    pub fn new(store: Arc<S>, interaction: Arc<I>) -> Self {
        Self { store, interaction }
    }

    /// Run one session to completion and return the final score.
    ///
    /// # Errors
    ///
    /// Fails only while loading the pool; once the session is asking
    /// questions it always runs to `Finished`.
    pub async fn execute<R: Rng + Send>(&self, rng: &mut R) -> Result<u32, CommandError> {
        let quizzes = self.store.list().await?;
        let mut pool = QuizPool::new(quizzes);
        info!(quizzes = pool.len(), "play session started");

        loop {
            let Some(index) = pool.pick(rng) else {
                self.interaction.line("There is nothing left to ask.");
                self.finish(&pool);
                break;
            };

            let prompt = format!("{}? ", pool.quiz(index).question);
            let given = self.interaction.ask(&prompt).await;

            match pool.answer(index, &given) {
                Verdict::Correct => {
                    debug!(score = pool.score(), remaining = pool.len(), "correct answer");
                    self.interaction
                        .line(&format!("Correct. {} in a row.", pool.score()));
                }
                Verdict::Incorrect => {
                    self.interaction.line("Incorrect.");
                    self.finish(&pool);
                    break;
                }
            }
        }

        Ok(pool.score())
    }

    fn finish(&self, pool: &QuizPool) {
        info!(score = pool.score(), "play session finished");
        self.interaction
            .line(&format!("End of game. Score: {}", pool.score()));
        self.interaction.banner(&pool.score().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool_of(pairs: &[(&str, &str)]) -> QuizPool {
        QuizPool::new(
            pairs
                .iter()
                .enumerate()
                .map(|(i, (q, a))| Quiz::new(i as i64 + 1, *q, *a))
                .collect(),
        )
    }

    #[test]
    fn pick_on_empty_pool_is_none() {
        let pool = pool_of(&[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.pick(&mut rng), None);
    }

    #[test]
    fn pick_stays_within_current_pool() {
        let pool = pool_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let index = pool.pick(&mut rng).unwrap();
            assert!(index < pool.len());
        }
    }

    #[test]
    fn correct_answer_scores_and_removes() {
        let mut pool = pool_of(&[("Capital of Italy", "Roma")]);
        assert_eq!(pool.answer(0, "  roma "), Verdict::Correct);
        assert_eq!(pool.score(), 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn incorrect_answer_leaves_pool_untouched() {
        let mut pool = pool_of(&[("Capital of Italy", "Roma")]);
        assert_eq!(pool.answer(0, "Madrid"), Verdict::Incorrect);
        assert_eq!(pool.score(), 0);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn session_asks_each_quiz_at_most_once() {
        let mut pool = pool_of(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut asked = Vec::new();

        while let Some(index) = pool.pick(&mut rng) {
            let quiz = pool.quiz(index).clone();
            assert!(!asked.contains(&quiz.id), "quiz {} asked twice", quiz.id);
            asked.push(quiz.id);
            assert_eq!(pool.answer(index, &quiz.answer), Verdict::Correct);
        }

        assert_eq!(asked.len(), 4);
        assert_eq!(pool.score(), 4);
    }
}
