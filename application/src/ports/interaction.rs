//! Interactive prompt port
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`InteractionPort`] - defined here in the application layer
//! - **Adapter**: `ConsoleInteraction` - implemented in the presentation
//!   layer over the shared line editor
//!
//! A pipeline that needs user input calls `ask` and suspends until one
//! line arrives. From the pipeline's point of view this is a single
//! blocking-style call; the cooperative suspension lives in the adapter.

use async_trait::async_trait;

/// Port for user interaction during a command pipeline.
///
/// `ask` never fails: an end-of-input or interrupt during an in-pipeline
/// prompt resolves to the empty string, and downstream validation (if
/// any) handles emptiness. The resolved value is always trimmed of
/// leading and trailing whitespace.
#[async_trait]
pub trait InteractionPort: Send + Sync {
    /// Display a prompt and suspend until one line of input arrives.
    async fn ask(&self, prompt: &str) -> String;

    /// Like [`ask`](Self::ask), but pre-populate the input buffer with
    /// `prefill` so the user can amend rather than retype.
    ///
    /// Best-effort: adapters degrade silently to a plain `ask` when the
    /// terminal does not support line editing. The default implementation
    /// is that degraded form.
    async fn ask_with_prefill(&self, prompt: &str, _prefill: &str) -> String {
        self.ask(prompt).await
    }

    /// Display one line of styled output.
    fn line(&self, text: &str);

    /// Report one error line.
    fn error(&self, text: &str);

    /// Display large text; used only for the final score of a play session.
    fn banner(&self, text: &str);
}
