//! DOM view
//!
//! Element references are looked up once and injected; nothing here queries
//! the document by id after construction.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::error::{ErrorKind, Result};
use crate::interface::BoardView;
use crate::model::SignupForm;

use super::banner::{Banner, MESSAGE_TIMEOUT, MessageKind};
use super::render::{ActivityCard, ParticipantList};

type JsResult<T> = std::result::Result<T, JsValue>;

pub const ACTIVITIES_LIST_ID: &str = "activities-list";
pub const ACTIVITY_SELECT_ID: &str = "activity";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";

pub const CARD_CLASS: &str = "activity-card";
pub const REMOVE_BUTTON_CLASS: &str = "remove-participant";
const EMAIL_ATTRIBUTE: &str = "data-email";

pub struct DomView {
    document: Document,
    activities_list: Element,
    activity_select: HtmlSelectElement,
    signup_form: HtmlFormElement,
    email_input: HtmlInputElement,
    message: Element,
    banner: Rc<RefCell<Banner>>,
    hide_timer: RefCell<Option<Timeout>>,
    message_timeout: Duration,
}

impl DomView {
    pub fn new(
        document: Document,
        activities_list: Element,
        activity_select: HtmlSelectElement,
        signup_form: HtmlFormElement,
        email_input: HtmlInputElement,
        message: Element,
    ) -> Self {
        Self {
            document,
            activities_list,
            activity_select,
            signup_form,
            email_input,
            message,
            banner: Rc::new(RefCell::new(Banner::new())),
            hide_timer: RefCell::new(None),
            message_timeout: MESSAGE_TIMEOUT,
        }
    }

    /// How long a banner stays up, [`MESSAGE_TIMEOUT`] unless overridden.
    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    pub fn from_document(document: &Document) -> Result<Self> {
        Ok(Self::new(
            document.clone(),
            lookup(document, ACTIVITIES_LIST_ID)?,
            lookup_as(document, ACTIVITY_SELECT_ID)?,
            lookup_as(document, SIGNUP_FORM_ID)?,
            lookup_as(document, EMAIL_INPUT_ID)?,
            lookup(document, MESSAGE_ID)?,
        ))
    }

    pub fn activities_list(&self) -> &Element {
        &self.activities_list
    }

    pub fn signup_form_element(&self) -> &HtmlFormElement {
        &self.signup_form
    }

    /// Name of the activity owning a removal button, read from the heading
    /// of the enclosing card.
    pub fn owning_activity(button: &Element) -> Option<String> {
        let card = button.closest(&format!(".{CARD_CLASS}")).ok()??;
        let heading = card.query_selector("h4").ok()??;
        heading.text_content()
    }

    pub fn participant_email(button: &Element) -> Option<String> {
        button.get_attribute(EMAIL_ATTRIBUTE)
    }

    fn element(&self, tag: &str, class: Option<&str>, text: Option<&str>) -> JsResult<Element> {
        let element = self.document.create_element(tag)?;
        if let Some(class) = class {
            element.set_class_name(class);
        }
        if text.is_some() {
            element.set_text_content(text);
        }
        Ok(element)
    }

    fn create_participant_list(&self, list: &ParticipantList) -> JsResult<Element> {
        let ul = self.element("ul", Some("participants-list"), None)?;
        match list {
            ParticipantList::Placeholder(text) => {
                let li = self.element("li", Some("no-participants"), Some(*text))?;
                ul.append_child(&li)?;
            }
            ParticipantList::Rows(rows) => {
                for row in rows {
                    let li = self.element("li", None, None)?;
                    let email = self.element("span", Some("participant-email"), Some(row.email.as_str()))?;
                    li.append_child(&email)?;

                    let button = self.element("button", Some(REMOVE_BUTTON_CLASS), Some("✖"))?;
                    button.set_attribute("type", "button")?;
                    button.set_attribute(EMAIL_ATTRIBUTE, &row.email)?;
                    button.set_attribute("title", &format!("Remove {}", row.email))?;
                    li.append_child(&button)?;

                    ul.append_child(&li)?;
                }
            }
        }
        Ok(ul)
    }

    fn create_card(&self, card: &ActivityCard) -> JsResult<Element> {
        let div = self.element("div", Some(CARD_CLASS), None)?;
        let name = self.element("h4", None, Some(card.name.as_str()))?;
        div.append_child(&name)?;
        let description = self.element("p", None, Some(card.description.as_str()))?;
        div.append_child(&description)?;
        let schedule = self.element("p", Some("schedule"), Some(card.schedule_line().as_str()))?;
        div.append_child(&schedule)?;

        let participants = self.element("div", Some("participants"), None)?;
        let heading = self.element("h5", None, Some(card.participants_heading().as_str()))?;
        participants.append_child(&heading)?;
        let list = self.create_participant_list(&card.participants)?;
        participants.append_child(&list)?;
        div.append_child(&participants)?;

        Ok(div)
    }

    /// Drop every option except the placeholder (`value=""`).
    fn clear_options(&self) -> JsResult<()> {
        let options = self
            .activity_select
            .query_selector_all("option:not([value=\"\"])")?;
        for i in 0..options.length() {
            if let Some(option) = options.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                option.remove();
            }
        }
        Ok(())
    }

    fn try_render_cards(&self, cards: &[ActivityCard]) -> JsResult<()> {
        self.activities_list.set_inner_html("");
        self.clear_options()?;

        for card in cards {
            let element = self.create_card(card)?;
            self.activities_list.append_child(&element)?;

            let option = self.element("option", None, Some(card.name.as_str()))?;
            option.set_attribute("value", &card.name)?;
            self.activity_select.append_child(&option)?;
        }
        Ok(())
    }

    fn try_show_message(&self, text: &str, kind: MessageKind) -> JsResult<()> {
        let ticket = self.banner.borrow_mut().show(text, kind);

        self.message.set_class_name(&format!("message {}", kind.css_class()));
        self.message.set_text_content(Some(text));
        self.message.class_list().remove_1("hidden")?;

        let banner = Rc::clone(&self.banner);
        let message = self.message.clone();
        let timeout = Timeout::new(self.message_timeout.as_millis() as u32, move || {
            if banner.borrow_mut().expire(ticket) {
                if let Err(e) = message.class_list().add_1("hidden") {
                    log::error!("Failed to hide message: {e:?}");
                }
            }
        });
        // Dropping the previous timeout cancels it
        self.hide_timer.replace(Some(timeout));
        Ok(())
    }
}

fn lookup(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ErrorKind::DomError(format!("missing element #{id}")).into())
}

fn lookup_as<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    lookup(document, id)?
        .dyn_into::<T>()
        .map_err(|_| ErrorKind::DomError(format!("element #{id} has the wrong type")).into())
}

impl BoardView for DomView {
    fn render_cards(&self, cards: &[ActivityCard]) {
        if let Err(e) = self.try_render_cards(cards) {
            log::error!("Failed to render activities: {e:?}");
        }
    }

    fn show_load_failure(&self, text: &str) {
        self.activities_list.set_inner_html("");
        match self.element("p", Some("load-error"), Some(text)) {
            Ok(p) => {
                if let Err(e) = self.activities_list.append_child(&p) {
                    log::error!("Failed to show load failure: {e:?}");
                }
            }
            Err(e) => log::error!("Failed to show load failure: {e:?}"),
        }
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        if let Err(e) = self.try_show_message(text, kind) {
            log::error!("Failed to show message: {e:?}");
        }
    }

    fn signup_form(&self) -> SignupForm {
        SignupForm::new(self.email_input.value(), self.activity_select.value())
    }

    fn reset_form(&self) {
        self.signup_form.reset();
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
