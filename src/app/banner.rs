//! Transient status banner state.
//!
//! Showing a message hands out a ticket; the auto-hide timer presents the
//! ticket when it fires and only hides the banner if no newer message has
//! replaced it since.

use std::fmt;
use std::time::Duration;

/// How long a banner stays visible.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    /// CSS class added next to `message` on the banner element.
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMessage {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Debug, Default)]
pub struct Banner {
    current: Option<ShownMessage>,
    serial: u64,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: &str, kind: MessageKind) -> BannerTicket {
        self.serial += 1;
        self.current = Some(ShownMessage {
            text: text.to_string(),
            kind,
        });
        BannerTicket(self.serial)
    }

    /// Hides the banner if `ticket` belongs to the message still shown.
    /// Returns whether it was hidden.
    pub fn expire(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 != self.serial || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&ShownMessage> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
