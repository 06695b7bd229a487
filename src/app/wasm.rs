//! WASM application entry
//!
//! Builds the board once when the module starts and wires the page events to
//! it. The signup form submits through the controller; removal buttons are
//! handled by one delegated click listener on the activity list, so
//! re-rendering never has to re-attach handlers.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::client::WasmClient;
use crate::config::BoardConfig;

use super::board::ActivityBoard;
use super::dom::{DomView, REMOVE_BUTTON_CLASS};

type WebBoard = ActivityBoard<WasmClient, DomView>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let view = DomView::from_document(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let board = Rc::new(ActivityBoard::new(
        WasmClient::with_config(BoardConfig::same_origin()),
        view,
    ));

    let initial = Rc::clone(&board);
    spawn_local(async move {
        // A failed load is already shown in the list
        let _ = initial.load().await;
    });

    wire_signup(&board)?;
    wire_unregister(&board)?;
    Ok(())
}

fn wire_signup(board: &Rc<WebBoard>) -> Result<(), JsValue> {
    let board = Rc::clone(board);
    let form = board.view().signup_form_element().clone();

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let board = Rc::clone(&board);
        spawn_local(async move {
            let outcome = board.submit_signup().await;
            log::debug!("Signup finished: {outcome:?}");
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_submit.forget();
    Ok(())
}

fn wire_unregister(board: &Rc<WebBoard>) -> Result<(), JsValue> {
    let board = Rc::clone(board);
    let list = board.view().activities_list().clone();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(button) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(&format!(".{REMOVE_BUTTON_CLASS}")).ok().flatten())
        else {
            return;
        };
        let (Some(activity), Some(email)) = (
            DomView::owning_activity(&button),
            DomView::participant_email(&button),
        ) else {
            log::warn!("Removal button outside an activity card");
            return;
        };

        let board = Rc::clone(&board);
        spawn_local(async move {
            let outcome = board.unregister(&activity, &email).await;
            log::debug!("Unregister finished: {outcome:?}");
        });
    });
    list.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
