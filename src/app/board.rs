//! Activity board controller
//!
//! Owns a transport and a view, both injected once at startup. Every
//! mutation is followed by a full re-fetch and re-render; the controller keeps
//! no copy of the activities between calls.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::{Error, ErrorKind, Result};
use crate::interface::{ActivityApi, BoardView};
use crate::model::{Activities, ParticipantParams, SignupForm};

use super::banner::MessageKind;
use super::render;

pub const LOAD_FAILED: &str = "Failed to load activities.";
pub const MISSING_FIELDS: &str = "Enter an email and choose an activity.";
pub const ALREADY_IN_PROGRESS: &str = "A request for this participant is already in progress.";

pub const SIGNUP_SUCCEEDED: &str = "Signed up successfully!";
pub const SIGNUP_FAILED: &str = "Failed to sign up.";
pub const SIGNUP_NETWORK_ERROR: &str = "Network error while signing up.";

pub const UNREGISTER_SUCCEEDED: &str = "Unregistered successfully!";
pub const UNREGISTER_FAILED: &str = "Failed to unregister.";
pub const UNREGISTER_NETWORK_ERROR: &str = "Network error while unregistering.";

/// How a signup or unregister attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change.
    Completed,
    /// Form fields were missing, nothing was sent.
    Invalid,
    /// The same participant already has a request in flight, nothing was sent.
    InProgress,
    /// The user declined the confirmation, nothing was sent.
    Declined,
    /// The server answered with a non-success status.
    Rejected,
    /// The request never got a usable answer.
    Failed,
    /// The server accepted the change but the list could not be re-fetched.
    Unrefreshed,
}

impl ActionOutcome {
    /// Process exit status for the terminal front end. A declined
    /// confirmation is neither a success nor a failure.
    pub fn exit_status(self) -> u8 {
        match self {
            ActionOutcome::Completed => 0,
            ActionOutcome::Declined => 2,
            _ => 1,
        }
    }
}

enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn verb(&self) -> &'static str {
        match self {
            Action::Signup => "signup",
            Action::Unregister => "unregister",
        }
    }

    fn succeeded(&self) -> &'static str {
        match self {
            Action::Signup => SIGNUP_SUCCEEDED,
            Action::Unregister => UNREGISTER_SUCCEEDED,
        }
    }

    fn rejected(&self) -> &'static str {
        match self {
            Action::Signup => SIGNUP_FAILED,
            Action::Unregister => UNREGISTER_FAILED,
        }
    }

    fn network_error(&self) -> &'static str {
        match self {
            Action::Signup => SIGNUP_NETWORK_ERROR,
            Action::Unregister => UNREGISTER_NETWORK_ERROR,
        }
    }
}

type ParticipantKey = (String, String);

/// Marks one participant as busy until dropped.
struct InFlight<'a> {
    pending: &'a RefCell<HashSet<ParticipantKey>>,
    key: ParticipantKey,
}

impl<'a> InFlight<'a> {
    fn acquire(
        pending: &'a RefCell<HashSet<ParticipantKey>>,
        activity: &str,
        email: &str,
    ) -> Option<Self> {
        let key = (activity.to_string(), email.to_string());
        if !pending.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(Self { pending, key })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.key);
    }
}

pub struct ActivityBoard<C, V> {
    client: C,
    view: V,
    in_flight: RefCell<HashSet<ParticipantKey>>,
}

impl<C: ActivityApi, V: BoardView> ActivityBoard<C, V> {
    pub fn new(client: C, view: V) -> Self {
        Self {
            client,
            view,
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn fetch_activities(&self) -> Result<Activities> {
        self.client.fetch_activities().await
    }

    pub fn render_activities(&self, activities: &Activities) {
        let cards = render::render_activities(activities);
        self.view.render_cards(&cards);
    }

    pub fn show_message(&self, text: &str, kind: MessageKind) {
        self.view.show_message(text, kind);
    }

    /// Initial load. A failure replaces the list with a static text instead
    /// of raising a banner.
    pub async fn load(&self) -> Result<()> {
        match self.fetch_activities().await {
            Ok(activities) => {
                self.render_activities(&activities);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load activities: {e}");
                self.view.show_load_failure(LOAD_FAILED);
                Err(e)
            }
        }
    }

    /// Handle a submission of the signup form as currently filled in.
    pub async fn submit_signup(&self) -> ActionOutcome {
        let form = self.view.signup_form();
        self.signup(&form).await
    }

    pub async fn signup(&self, form: &SignupForm) -> ActionOutcome {
        let email = form.email();
        let activity = form.activity();
        if let Err(e) = Self::validate(email, activity) {
            log::debug!("Signup not sent: {e}");
            self.show_message(MISSING_FIELDS, MessageKind::Error);
            return ActionOutcome::Invalid;
        }

        let outcome = self.perform(Action::Signup, activity, email).await;
        if outcome == ActionOutcome::Completed {
            self.view.reset_form();
        }
        outcome
    }

    /// Removal control on a participant row; `activity` is the name shown on
    /// the enclosing card.
    pub async fn unregister(&self, activity: &str, email: &str) -> ActionOutcome {
        let prompt = format!("Remove {email} from {activity}?");
        if !self.view.confirm(&prompt) {
            log::debug!("Unregister of {email} from {activity} declined");
            return ActionOutcome::Declined;
        }
        self.perform(Action::Unregister, activity, email).await
    }

    fn validate(email: &str, activity: &str) -> Result<()> {
        let mut missing = Vec::new();
        if email.is_empty() {
            missing.push("email");
        }
        if activity.is_empty() {
            missing.push("activity");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ErrorKind::ValidationError(format!("missing {}", missing.join(" and "))).into())
        }
    }

    async fn perform(&self, action: Action, activity: &str, email: &str) -> ActionOutcome {
        let Some(_guard) = InFlight::acquire(&self.in_flight, activity, email) else {
            log::debug!("{} for {email} in {activity} already in flight", action.verb());
            self.show_message(ALREADY_IN_PROGRESS, MessageKind::Info);
            return ActionOutcome::InProgress;
        };

        let params = ParticipantParams { activity, email };
        let result = match action {
            Action::Signup => self.client.signup(params).await,
            Action::Unregister => self.client.unregister(params).await,
        };

        match result {
            Ok(reply) => {
                let text = reply.message.as_deref().unwrap_or(action.succeeded());
                self.show_message(text, MessageKind::Success);
                match self.refresh().await {
                    Ok(()) => ActionOutcome::Completed,
                    Err(e) => {
                        log::error!("Failed to refresh activities after {}: {e}", action.verb());
                        self.show_message(action.network_error(), MessageKind::Error);
                        ActionOutcome::Unrefreshed
                    }
                }
            }
            Err(e) => {
                self.report_failure(&action, &e);
                if e.is_rejection() {
                    ActionOutcome::Rejected
                } else {
                    ActionOutcome::Failed
                }
            }
        }
    }

    fn report_failure(&self, action: &Action, e: &Error) {
        if e.is_rejection() {
            log::warn!("{} rejected: {e}", action.verb());
            let text = e.server_detail().unwrap_or(action.rejected());
            self.show_message(text, MessageKind::Error);
        } else {
            log::error!("{} failed: {e}", action.verb());
            self.show_message(action.network_error(), MessageKind::Error);
        }
    }

    /// Re-fetch and re-render after a change. On failure the previous render
    /// stays untouched.
    async fn refresh(&self) -> Result<()> {
        let activities = self.fetch_activities().await?;
        self.render_activities(&activities);
        Ok(())
    }
}
