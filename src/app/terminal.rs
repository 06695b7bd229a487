//! Terminal view
//!
//! Prints the board to stdout and asks for confirmation on stdin. Banners are
//! printed once; a terminal has nothing to auto-hide.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::interface::BoardView;
use crate::model::SignupForm;

use super::banner::MessageKind;
use super::render::{ActivityCard, ParticipantList};

#[derive(Debug, Default)]
pub struct TerminalView {
    form: RefCell<SignupForm>,
    assume_yes: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the signup form, as if the user had typed into it.
    pub fn with_form(mut self, form: SignupForm) -> Self {
        self.form = RefCell::new(form);
        self
    }

    /// Answer every confirmation with yes.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    fn write_card(out: &mut impl Write, card: &ActivityCard) -> io::Result<()> {
        writeln!(out, "== {} ==", card.name)?;
        writeln!(out, "{}", card.description)?;
        writeln!(out, "{}", card.schedule_line())?;
        writeln!(out, "{}", card.participants_heading())?;
        match card.participants {
            ParticipantList::Placeholder(text) => writeln!(out, "  {text}")?,
            ParticipantList::Rows(ref rows) => {
                for row in rows {
                    writeln!(out, "  - {}", row.email)?;
                }
            }
        }
        writeln!(out)
    }

    fn read_answer(prompt: &str) -> Result<bool> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt} [y/N] ")?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }
}

impl BoardView for TerminalView {
    fn render_cards(&self, cards: &[ActivityCard]) {
        let mut stdout = io::stdout().lock();
        for card in cards {
            if let Err(e) = Self::write_card(&mut stdout, card) {
                log::error!("Failed to print {}: {e}", card.name);
                return;
            }
        }
    }

    fn show_load_failure(&self, text: &str) {
        eprintln!("{text}");
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Error => eprintln!("[{kind}] {text}"),
            _ => println!("[{kind}] {text}"),
        }
    }

    fn signup_form(&self) -> SignupForm {
        self.form.borrow().clone()
    }

    fn reset_form(&self) {
        self.form.replace(SignupForm::default());
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Self::read_answer(prompt).unwrap_or_else(|e| {
            log::error!("Failed to read confirmation: {e}");
            false
        })
    }
}
