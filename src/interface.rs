#![allow(async_fn_in_trait)] // traits are only implemented by local, single-threaded clients

use crate::app::{ActivityCard, MessageKind};
use crate::error::Result;
use crate::model::{Activities, ParticipantParams, ServerReply, SignupForm};

/// Common interface for all activity board HTTP operations
pub trait ActivityApi {
    /// Fetch every activity, bypassing HTTP caches
    async fn fetch_activities(&self) -> Result<Activities>;

    /// Sign a participant up for an activity
    async fn signup(&self, params: ParticipantParams<'_>) -> Result<ServerReply>;

    /// Remove a participant from an activity
    async fn unregister(&self, params: ParticipantParams<'_>) -> Result<ServerReply>;
}

/// Rendering surface driven by the board controller.
///
/// Implemented over real DOM elements in the browser, over stdout in the
/// terminal, and in memory by tests.
pub trait BoardView {
    /// Replace the activity list and the activity selector with `cards`.
    fn render_cards(&self, cards: &[ActivityCard]);

    /// Replace the activity list with a static failure text.
    fn show_load_failure(&self, text: &str);

    /// Show a transient banner, replacing any banner already shown.
    fn show_message(&self, text: &str, kind: MessageKind);

    fn signup_form(&self) -> SignupForm;

    fn reset_form(&self);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;
}
