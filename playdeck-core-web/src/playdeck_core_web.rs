use std::cell::RefCell;
use std::sync::RwLock;

use futures::{future, StreamExt};
use gloo_utils::format::JsValueSerdeExt;
use lazy_static::lazy_static;
use tracing::{info, trace, warn, Level};
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{DragEvent, HtmlElement, HtmlMediaElement};

use playdeck_core::{
    constants::{DRAG_PAYLOAD_FORMAT, RUNTIME_EVENTS_BUFFER},
    runtime::{
        msg::{Action, ActionPlaylist, Event},
        Runtime, RuntimeAction, RuntimeEvent,
    },
    types::{MediaCommand, PlayableMedia},
};

use crate::{
    env::WebEnv,
    media::MediaElement,
    model::{WebModel, WebModelField},
};

lazy_static! {
    static ref RUNTIME: RwLock<Option<Runtime<WebEnv, WebModel>>> = Default::default();
}

thread_local! {
    static MEDIA: RefCell<Option<MediaElement>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    // print pretty errors in wasm https://github.com/rustwasm/console_error_panic_hook
    console_error_panic_hook::set_once();

    #[cfg(any(debug_assertions, feature = "log-trace"))]
    let max_level = Level::TRACE;
    #[cfg(all(not(debug_assertions), not(feature = "log-trace")))]
    let max_level = Level::ERROR;

    let config = WASMLayerConfigBuilder::default()
        .set_max_level(max_level)
        .build();
    // setup wasm tracing Subscriber on web console
    tracing_wasm::set_as_global_default_with_config(config);

    info!(?max_level, "Logging level");
}

#[wasm_bindgen]
pub fn initialize_runtime(emit_to_ui: js_sys::Function) {
    if RUNTIME.read().expect("runtime read failed").is_some() {
        panic!("runtime initialization has already started");
    };

    let (model, effects) = WebModel::new();
    let (runtime, rx) = Runtime::<WebEnv, _>::new(
        model,
        effects.into_iter().collect::<Vec<_>>(),
        RUNTIME_EVENTS_BUFFER,
    );
    WebEnv::exec_concurrent(rx.for_each(move |event| {
        if let RuntimeEvent::CoreEvent(Event::MediaCommand { command }) = &event {
            apply_media_command(command);
        };
        emit_to_ui
            .call1(
                &JsValue::NULL,
                &<JsValue as JsValueSerdeExt>::from_serde(&event)
                    .expect("Event handler: JsValue from Event"),
            )
            .expect("emit event failed");
        future::ready(())
    }));
    *RUNTIME.write().expect("runtime write failed") = Some(runtime);
}

#[wasm_bindgen]
#[cfg(debug_assertions)]
pub fn get_debug_state() -> JsValue {
    let runtime = RUNTIME.read().expect("runtime read failed");
    let runtime = runtime.as_ref().expect("runtime is not ready");
    let model = runtime.model().expect("model read failed");
    <JsValue as JsValueSerdeExt>::from_serde(&*model).expect("JsValue from WebModel")
}

#[wasm_bindgen]
pub fn get_state(field: JsValue) -> JsValue {
    let field = JsValueSerdeExt::into_serde(&field).expect("get state failed");
    let runtime = RUNTIME.read().expect("runtime read failed");
    let runtime = runtime.as_ref().expect("runtime is not ready");
    let model = runtime.model().expect("model read failed");
    model.get_state(&field)
}

#[wasm_bindgen]
pub fn dispatch(action: JsValue, field: JsValue) {
    let action: Action =
        JsValueSerdeExt::into_serde(&action).expect("dispatch failed because of Action");
    let field: Option<WebModelField> =
        JsValueSerdeExt::into_serde(&field).expect("dispatch failed because of Field");
    dispatch_action(action, field);
}

/// Binds the `<video>` element the player drives, unbinding the previous one.
///
/// The element is brought in line with the current player state since the
/// initial load command may have been emitted before it existed.
#[wasm_bindgen]
pub fn bind_media_element(element: HtmlMediaElement) -> Result<(), JsValue> {
    unbind_media_element();
    let media = MediaElement::bind(element)?;
    {
        let runtime = RUNTIME.read().expect("runtime read failed");
        let runtime = runtime.as_ref().expect("runtime is not ready");
        let model = runtime.model().expect("model read failed");
        media.sync(&model.player);
    }
    MEDIA.with(|cell| *cell.borrow_mut() = Some(media));
    Ok(())
}

/// Stops listening to the bound element. Called when the host unmounts it.
#[wasm_bindgen]
pub fn unbind_media_element() {
    let media = MEDIA.with(|cell| cell.borrow_mut().take());
    drop(media);
}

#[wasm_bindgen]
pub fn drag_start(event: DragEvent, id: String) {
    match event.data_transfer() {
        Some(data_transfer) => {
            if let Err(error) = data_transfer.set_data(DRAG_PAYLOAD_FORMAT, &id) {
                warn!(?error, "Drag payload could not be set");
            }
        }
        _ => trace!(%id, "Drag started without a data transfer"),
    }
}

/// Allows rows to act as drop targets.
#[wasm_bindgen]
pub fn drag_over(event: DragEvent) {
    event.prevent_default();
}

/// Completes a drag on the row that received the drop.
///
/// The dragged id comes from the payload set in [`drag_start`] and the target
/// position from the row's `data-index` attribute.
#[wasm_bindgen]
pub fn drop_row(event: DragEvent) {
    event.prevent_default();
    let payload = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.get_data(DRAG_PAYLOAD_FORMAT).ok());
    let index = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .and_then(|row| row.dataset().get("index"));
    match complete_drag_action(payload.to_owned(), index.to_owned()) {
        Some(action) => dispatch_action(Action::Playlist(action), None),
        _ => trace!(?payload, ?index, "Drop ignored"),
    }
}

/// Builds the drag completion from the transferred payload and the drop
/// row's `data-index`. Empty payloads and unparsable indexes yield `None`.
pub fn complete_drag_action(
    payload: Option<String>,
    index: Option<String>,
) -> Option<ActionPlaylist> {
    let dragged_id = payload.filter(|id| !id.is_empty())?;
    let target_index = index?.trim().parse::<i64>().ok()?;
    Some(ActionPlaylist::CompleteDrag {
        dragged_id,
        target_index,
    })
}

pub(crate) fn dispatch_action(action: Action, field: Option<WebModelField>) {
    let runtime = RUNTIME.read().expect("runtime read failed");
    let runtime = runtime.as_ref().expect("runtime is not ready");
    runtime.dispatch(RuntimeAction { action, field });
}

fn apply_media_command(command: &MediaCommand) {
    MEDIA.with(|cell| match &*cell.borrow() {
        Some(media) => media.apply(command),
        _ => trace!(?command, "No media element bound"),
    });
}
