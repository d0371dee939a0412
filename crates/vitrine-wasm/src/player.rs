//! Page binding: mounts a [`PlaylistController`] on a media element.

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, error, info, warn};
use vitrine_net::HttpClient;
use vitrine_play::{MediaEvent, PlayAttempt, PlaylistController};
use vitrine_playlist::{PlaylistError, PlaylistLoader};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::HtmlMediaElement;

use crate::{
    config::PlayerConfig,
    dom::{FallbackText, VideoSurface},
};

type Controller = PlaylistController<VideoSurface, FallbackText>;

thread_local! {
    static ACTIVE: RefCell<Option<Rc<RefCell<Controller>>>> = const { RefCell::new(None) };
}

fn js_error(message: impl Into<String>) -> JsValue {
    JsValue::from_str(&message.into())
}

/// Runs when the module is instantiated: mounts on the default element ids.
#[wasm_bindgen(start)]
pub fn start() {
    init_tracing();
    if let Err(err) = mount_with(&PlayerConfig::default()) {
        error!(error = ?err, "failed to mount video playlist");
    }
}

/// Mount on custom element ids. Returns `false` when the media element is missing.
#[wasm_bindgen]
pub fn mount(video_id: &str, fallback_id: &str) -> Result<bool, JsValue> {
    let config = PlayerConfig::default()
        .with_video_id(video_id)
        .with_fallback_id(fallback_id);
    mount_with(&config)
}

/// Index of the track last requested, `-1` when nothing is playing.
#[wasm_bindgen]
pub fn current_index() -> i32 {
    with_active(|controller| {
        if controller.playlist().is_empty() {
            return None;
        }
        i32::try_from(controller.current_index()).ok()
    })
    .unwrap_or(-1)
}

#[wasm_bindgen]
pub fn playlist_len() -> u32 {
    with_active(|controller| u32::try_from(controller.playlist().len()).ok()).unwrap_or(0)
}

fn with_active<T>(f: impl FnOnce(&Controller) -> Option<T>) -> Option<T> {
    ACTIVE.with(|active| {
        let active = active.borrow();
        let controller = active.as_ref()?.try_borrow().ok()?;
        f(&controller)
    })
}

/// Bind the controller to the page and start loading the playlist.
///
/// # Errors
///
/// Fails when there is no window/document or the DOM refuses the `<source>`
/// child. A missing media element is not an error.
pub fn mount_with(config: &PlayerConfig) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
    let document = window.document().ok_or_else(|| js_error("no document"))?;

    let Some(media) = document
        .get_element_by_id(&config.video_id)
        .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
    else {
        debug!(id = %config.video_id, "no media element, nothing to drive");
        return Ok(false);
    };

    let fallback = document
        .get_element_by_id(&config.fallback_id)
        .map(|el| FallbackText::new(el, &config.visible_class));
    let surface = VideoSurface::attach(&document, media.clone(), &config.source_id)?;
    let controller = Rc::new(RefCell::new(PlaylistController::new(
        surface,
        fallback,
        config.messages.clone(),
    )));

    for event in MediaEvent::ALL {
        listen(&media, event, &controller)?;
    }

    let base = document.base_uri().ok().flatten().unwrap_or_default();
    match build_loader(config, &base) {
        Ok(loader) => {
            let controller = Rc::clone(&controller);
            wasm_bindgen_futures::spawn_local(async move {
                let result = loader.load().await;
                let attempt = controller.borrow_mut().apply_load(result);
                spawn_attempt(attempt);
            });
        }
        Err(err) => {
            let attempt = controller.borrow_mut().apply_load(Err(err));
            spawn_attempt(attempt);
        }
    }

    info!(id = %config.video_id, "video playlist mounted");
    ACTIVE.with(|active| *active.borrow_mut() = Some(controller));
    Ok(true)
}

fn build_loader(
    config: &PlayerConfig,
    base: &str,
) -> Result<PlaylistLoader<HttpClient>, PlaylistError> {
    let url = config.playlist.resolve_url(base)?;
    let net = HttpClient::new(config.playlist.net.clone())?;
    Ok(PlaylistLoader::new(net, url, &config.playlist.asset_dir))
}

fn listen(
    media: &HtmlMediaElement,
    event: MediaEvent,
    controller: &Rc<RefCell<Controller>>,
) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let attempt = match controller.try_borrow_mut() {
            Ok(mut controller) => controller.handle_event(event),
            Err(_) => {
                warn!(%event, "controller busy, media event dropped");
                return;
            }
        };
        spawn_attempt(attempt);
    });

    media.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())?;

    // Listener lives for the page lifetime.
    closure.forget();
    Ok(())
}

fn spawn_attempt(attempt: Option<PlayAttempt<FallbackText>>) {
    if let Some(attempt) = attempt {
        wasm_bindgen_futures::spawn_local(async move {
            // Rejection is already logged and shown by `settle`.
            let _ = attempt.settle().await;
        });
    }
}

fn init_tracing() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}
