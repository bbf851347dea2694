//! End-to-end pipeline flows against the in-memory store and a scripted
//! interaction adapter.

use async_trait::async_trait;
use quiz_application::{
    CommandError, InMemoryQuizStore, InteractionPort, PlayUseCase, QuizCommands, QuizStore,
    Verdict,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Test double that answers prompts from a script and records everything
/// the pipelines display.
#[derive(Default)]
struct ScriptedInteraction {
    /// Sequential answers, consumed in order.
    answers: Mutex<VecDeque<String>>,
    /// Fallback answers looked up by the question text inside the prompt.
    lookup: HashMap<String, String>,
    prompts: Mutex<Vec<String>>,
    /// `(prompt, prefill)` pairs, in the order they were asked.
    prefills: Mutex<Vec<(String, String)>>,
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    banners: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
            ..Self::default()
        }
    }

    fn answering(pairs: &[(&str, &str)]) -> Self {
        Self {
            lookup: pairs
                .iter()
                .map(|(q, a)| (q.to_string(), a.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn prefills(&self) -> Vec<(String, String)> {
        self.prefills.lock().unwrap().clone()
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn banners(&self) -> Vec<String> {
        self.banners.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionPort for ScriptedInteraction {
    async fn ask(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(answer) = self.answers.lock().unwrap().pop_front() {
            return answer.trim().to_string();
        }
        // Play-mode prompts are "<question>? "
        let question = prompt.trim_end().trim_end_matches('?');
        self.lookup.get(question).cloned().unwrap_or_default()
    }

    async fn ask_with_prefill(&self, prompt: &str, prefill: &str) -> String {
        self.prefills
            .lock()
            .unwrap()
            .push((prompt.to_string(), prefill.to_string()));
        self.ask(prompt).await
    }

    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.errors.lock().unwrap().push(text.to_string());
    }

    fn banner(&self, text: &str) {
        self.banners.lock().unwrap().push(text.to_string());
    }
}

fn commands(
    store: &Arc<InMemoryQuizStore>,
    interaction: ScriptedInteraction,
) -> (
    QuizCommands<InMemoryQuizStore, ScriptedInteraction>,
    Arc<ScriptedInteraction>,
) {
    let interaction = Arc::new(interaction);
    (
        QuizCommands::new(Arc::clone(store), Arc::clone(&interaction)),
        interaction,
    )
}

#[tokio::test]
async fn add_then_show_round_trips() {
    let store = Arc::new(InMemoryQuizStore::new());
    let (commands, _) = commands(
        &store,
        ScriptedInteraction::with_answers(&["Capital of Italy", "Roma"]),
    );

    let created = commands.add().await.expect("add");
    assert_eq!(created.question, "Capital of Italy");
    assert_eq!(created.answer, "Roma");

    let fetched = commands
        .show(Some(&created.id.to_string()))
        .await
        .expect("show");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn show_on_missing_id_reports_not_found() {
    let store = Arc::new(InMemoryQuizStore::with_quizzes(&[("Q", "A")]));
    let (commands, _) = commands(&store, ScriptedInteraction::default());

    match commands.show(Some("7")).await {
        Err(CommandError::NotFound(7)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn show_without_argument_is_missing_parameter() {
    let store = Arc::new(InMemoryQuizStore::new());
    let (commands, _) = commands(&store, ScriptedInteraction::default());

    match commands.show(None).await {
        Err(CommandError::Id(quiz_domain::IdError::Missing)) => {}
        other => panic!("expected missing parameter, got {other:?}"),
    }

    match commands.show(Some("abc")).await {
        Err(CommandError::Id(quiz_domain::IdError::NotANumber { token })) => {
            assert_eq!(token, "abc");
        }
        other => panic!("expected not-a-number, got {other:?}"),
    }
}

#[tokio::test]
async fn test_on_missing_id_shows_no_answer_prompt() {
    let store = Arc::new(InMemoryQuizStore::new());
    let (commands, interaction) = commands(&store, ScriptedInteraction::default());

    match commands.test(Some("7")).await {
        Err(CommandError::NotFound(7)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(interaction.prompts().is_empty(), "no prompt may be shown");
}

#[tokio::test]
async fn test_scores_case_insensitively() {
    let store = Arc::new(InMemoryQuizStore::with_quizzes(&[(
        "Capital of Italy",
        "Roma",
    )]));
    let (commands, interaction) = commands(&store, ScriptedInteraction::with_answers(&["  ROMA "]));

    let verdict = commands.test(Some("1")).await.expect("test");
    assert_eq!(verdict, Verdict::Correct);
    // The question is displayed before the answer prompt
    assert_eq!(interaction.lines(), vec!["Capital of Italy"]);
}

#[tokio::test]
async fn delete_is_idempotent_on_missing_ids() {
    let store = Arc::new(InMemoryQuizStore::with_quizzes(&[("Q", "A")]));
    let (commands, _) = commands(&store, ScriptedInteraction::default());

    commands.delete(Some("99")).await.expect("first delete");
    commands.delete(Some("99")).await.expect("second delete");
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn edit_prefills_and_updates_both_fields() {
    let store = Arc::new(InMemoryQuizStore::with_quizzes(&[(
        "Capital of Italy",
        "Rome",
    )]));
    let (commands, interaction) = commands(
        &store,
        ScriptedInteraction::with_answers(&["Capital of Italy", "Roma"]),
    );

    let updated = commands.edit(Some("1")).await.expect("edit");
    assert_eq!(updated.answer, "Roma");
    assert_eq!(
        store.find_by_id(1).await.unwrap().unwrap().answer,
        "Roma"
    );
    // Both prompts are seeded with the stored values
    assert_eq!(
        interaction.prefills(),
        vec![
            ("Enter a question: ".to_string(), "Capital of Italy".to_string()),
            ("Enter an answer: ".to_string(), "Rome".to_string()),
        ]
    );
}

#[tokio::test]
async fn add_with_empty_question_is_rejected() {
    let store = Arc::new(InMemoryQuizStore::new());
    let (commands, _) = commands(&store, ScriptedInteraction::with_answers(&["", "Roma"]));

    match commands.add().await {
        Err(CommandError::Validation(messages)) => {
            assert!(messages.iter().any(|m| m.contains("question")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn play_session_wins_when_all_answers_are_correct() {
    let store = Arc::new(InMemoryQuizStore::with_quizzes(&[
        ("Capital of Italy", "Roma"),
        ("Capital of France", "Paris"),
    ]));
    let interaction = Arc::new(ScriptedInteraction::answering(&[
        ("Capital of Italy", " roma "),
        ("Capital of France", "PARIS"),
    ]));
    let play = PlayUseCase::new(Arc::clone(&store), Arc::clone(&interaction));

    let mut rng = StdRng::seed_from_u64(3);
    let score = play.execute(&mut rng).await.expect("play");

    assert_eq!(score, 2);
    assert_eq!(interaction.banners(), vec!["2"]);
    assert!(
        interaction
            .lines()
            .iter()
            .any(|l| l == "End of game. Score: 2")
    );
    // The transient session copy never touches storage
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn play_session_ends_on_first_wrong_answer() {
    let store = Arc::new(InMemoryQuizStore::with_quizzes(&[
        ("Capital of Italy", "Roma"),
        ("Capital of France", "Paris"),
    ]));
    let interaction = Arc::new(ScriptedInteraction::with_answers(&["definitely wrong"]));
    let play = PlayUseCase::new(Arc::clone(&store), Arc::clone(&interaction));

    let mut rng = StdRng::seed_from_u64(3);
    let score = play.execute(&mut rng).await.expect("play");

    assert_eq!(score, 0);
    assert_eq!(interaction.prompts().len(), 1, "session ends immediately");
    assert_eq!(interaction.banners(), vec!["0"]);
}

#[tokio::test]
async fn play_session_on_empty_store_finishes_with_zero() {
    let store = Arc::new(InMemoryQuizStore::new());
    let interaction = Arc::new(ScriptedInteraction::default());
    let play = PlayUseCase::new(Arc::clone(&store), Arc::clone(&interaction));

    let mut rng = StdRng::seed_from_u64(3);
    let score = play.execute(&mut rng).await.expect("play");

    assert_eq!(score, 0);
    assert!(interaction.prompts().is_empty());
    assert!(
        interaction
            .lines()
            .iter()
            .any(|l| l == "There is nothing left to ask.")
    );
}
