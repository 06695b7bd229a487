pub mod dtos;
pub mod structs;

pub use dtos::{ParticipantParams, ServerReply, SignupForm};
pub use structs::{Activities, Activity};
