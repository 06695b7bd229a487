//! Shared test infrastructure for board tests.
//!
//! - `FakeApi` - in-memory `ActivityApi` that answers like the board server
//! - `RecordingView` - `BoardView` that records everything shown to the user
//! - `seed_activities()` - the roster every test starts from
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io;

use activity_board::app::{ActivityCard, MessageKind};
use activity_board::error::{ErrorKind, Result};
use activity_board::interface::{ActivityApi, BoardView};
use activity_board::model::{Activities, Activity, ParticipantParams, ServerReply, SignupForm};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CHESS: &str = "Chess Club";
pub const PROGRAMMING: &str = "Programming Class";
pub const ART: &str = "Art & Design";

pub const MICHAEL: &str = "michael@mergington.edu";
pub const TEST_EMAIL: &str = "pytest-user@example.com";

pub const ALREADY_SIGNED_UP: &str = "Student is already signed up";
pub const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";
pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";

// ============================================================================
// SEED DATA
// ============================================================================

fn activity(name: &str, description: &str, schedule: &str, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Three activities, deliberately not in alphabetical order.
pub fn seed_activities() -> Activities {
    [
        activity(CHESS, "Learn strategies and compete in chess tournaments", "Fridays, 3:30 PM - 5:00 PM", &[MICHAEL]),
        activity(PROGRAMMING, "Learn programming fundamentals", "Tuesdays and Thursdays, 3:30 PM - 4:30 PM", &[]),
        activity(ART, "Painting, drawing and design", "Wednesdays, 3:30 PM - 5:00 PM", &["emma@mergington.edu", "sophia@mergington.edu"]),
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// FAKE TRANSPORT
// ============================================================================

/// In-memory board server. Write calls yield once before answering so
/// overlapping requests can be driven with `tokio::join!`.
#[derive(Default)]
pub struct FakeApi {
    activities: RefCell<Activities>,
    pub fetches: Cell<usize>,
    pub writes: Cell<usize>,
    pub fail_fetch: Cell<bool>,
    pub connection_refused: Cell<bool>,
    pub reject_without_detail: Cell<bool>,
    /// Accept writes but leave `message` out of the reply.
    pub silent_replies: Cell<bool>,
}

impl FakeApi {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: RefCell::new(activities),
            ..Self::default()
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn roster(&self, activity: &str) -> Vec<String> {
        self.activities
            .borrow()
            .get(activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }

    fn reply(&self, message: String) -> ServerReply {
        ServerReply {
            message: (!self.silent_replies.get()).then_some(message),
            detail: None,
        }
    }

    async fn write(&self) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        tokio::task::yield_now().await;

        if self.connection_refused.get() {
            return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into());
        }
        if self.reject_without_detail.get() {
            return Err(ErrorKind::NetworkError {
                status: 500,
                detail: None,
            }
            .into());
        }
        Ok(())
    }
}

fn rejected(status: u16, detail: &str) -> activity_board::error::Error {
    ErrorKind::NetworkError {
        status,
        detail: Some(detail.to_string()),
    }
    .into()
}

impl ActivityApi for FakeApi {
    async fn fetch_activities(&self) -> Result<Activities> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail_fetch.get() {
            return Err(ErrorKind::NetworkError {
                status: 503,
                detail: None,
            }
            .into());
        }
        Ok(self.activities.borrow().clone())
    }

    async fn signup(&self, params: ParticipantParams<'_>) -> Result<ServerReply> {
        self.write().await?;

        let mut activities = self.activities.borrow_mut();
        let activity = activities
            .get_mut(params.activity)
            .ok_or_else(|| rejected(404, ACTIVITY_NOT_FOUND))?;
        if activity.has_participant(params.email) {
            return Err(rejected(400, ALREADY_SIGNED_UP));
        }
        activity.participants.push(params.email.to_string());

        Ok(self.reply(format!("Signed up {} for {}", params.email, params.activity)))
    }

    async fn unregister(&self, params: ParticipantParams<'_>) -> Result<ServerReply> {
        self.write().await?;

        let mut activities = self.activities.borrow_mut();
        let activity = activities
            .get_mut(params.activity)
            .ok_or_else(|| rejected(404, ACTIVITY_NOT_FOUND))?;
        if !activity.has_participant(params.email) {
            return Err(rejected(404, NOT_SIGNED_UP));
        }
        activity.participants.retain(|p| p != params.email);

        Ok(self.reply(format!("Unregistered {} from {}", params.email, params.activity)))
    }
}

// ============================================================================
// RECORDING VIEW
// ============================================================================

pub struct RecordingView {
    pub cards: RefCell<Vec<ActivityCard>>,
    pub renders: Cell<usize>,
    pub load_failure: RefCell<Option<String>>,
    pub messages: RefCell<Vec<(String, MessageKind)>>,
    pub form: RefCell<SignupForm>,
    pub resets: Cell<usize>,
    pub confirm_answer: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            cards: RefCell::default(),
            renders: Cell::default(),
            load_failure: RefCell::default(),
            messages: RefCell::default(),
            form: RefCell::default(),
            resets: Cell::default(),
            confirm_answer: Cell::new(true),
            prompts: RefCell::default(),
        }
    }
}

impl RecordingView {
    pub fn fill_form(&self, email: &str, activity: &str) {
        self.form.replace(SignupForm::new(email, activity));
    }

    pub fn last_message(&self) -> Option<(String, MessageKind)> {
        self.messages.borrow().last().cloned()
    }

    pub fn card_names(&self) -> Vec<String> {
        self.cards.borrow().iter().map(|c| c.name.clone()).collect()
    }

    /// Emails rendered on the card for `activity`.
    pub fn rendered_emails(&self, activity: &str) -> Vec<String> {
        self.cards
            .borrow()
            .iter()
            .find(|c| c.name == activity)
            .map(|c| c.participants.emails().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl BoardView for RecordingView {
    fn render_cards(&self, cards: &[ActivityCard]) {
        self.cards.replace(cards.to_vec());
        self.renders.set(self.renders.get() + 1);
    }

    fn show_load_failure(&self, text: &str) {
        self.cards.borrow_mut().clear();
        self.load_failure.replace(Some(text.to_string()));
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        self.messages.borrow_mut().push((text.to_string(), kind));
    }

    fn signup_form(&self) -> SignupForm {
        self.form.borrow().clone()
    }

    fn reset_form(&self) {
        self.form.replace(SignupForm::default());
        self.resets.set(self.resets.get() + 1);
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.confirm_answer.get()
    }
}
