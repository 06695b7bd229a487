//! Application module - the activity board controller and its views
//!
//! The controller and the view model are platform independent; the DOM view
//! and browser entry point are built with the `wasm` feature, the terminal
//! view with `no-wasm`.

pub mod banner;
pub mod board;
pub mod render;

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod terminal;
#[cfg(feature = "no-wasm")]
pub use terminal::TerminalView;

#[cfg(feature = "wasm")]
pub mod dom;
#[cfg(feature = "wasm")]
pub mod wasm;
#[cfg(feature = "wasm")]
pub use dom::DomView;

pub use banner::{Banner, MESSAGE_TIMEOUT, MessageKind, ShownMessage};
pub use board::{ActionOutcome, ActivityBoard};
pub use render::{ActivityCard, ParticipantList, ParticipantRow, create_participant_list, render_activities};
