//! `web-sys` implementations of the playback surfaces.

use std::rc::Rc;

use futures::FutureExt;
use tracing::warn;
use vitrine_play::{Fallback, MediaAttributes, MediaSurface, PlayError, PlayFuture};
use vitrine_playlist::NormalizedSource;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, DomException, Element, HtmlMediaElement, HtmlSourceElement};

/// Best-effort text for a rejected promise or thrown value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Media element plus the one `<source>` child reused for every track.
pub(crate) struct VideoSurface {
    media: HtmlMediaElement,
    source: HtmlSourceElement,
}

impl VideoSurface {
    /// Create the `<source>` child and append it to `media`.
    pub(crate) fn attach(
        document: &Document,
        media: HtmlMediaElement,
        source_id: &str,
    ) -> Result<Self, JsValue> {
        let source: HtmlSourceElement = document
            .create_element("source")?
            .dyn_into()
            .map_err(|el| JsValue::from_str(&format!("not a source element: {}", el.tag_name())))?;
        source.set_id(source_id);
        media.append_child(&source)?;
        Ok(Self { media, source })
    }
}

impl MediaSurface for VideoSurface {
    fn configure(&self, attributes: &MediaAttributes) {
        self.media.set_muted(attributes.muted);
        self.media.set_autoplay(attributes.autoplay);
        self.media.set_loop(attributes.looping);
        self.media.set_controls(attributes.controls);

        let inline = if attributes.plays_inline {
            self.media.set_attribute("playsinline", "")
        } else {
            self.media.remove_attribute("playsinline")
        };
        if let Err(err) = inline {
            warn!(error = %describe(&err), "could not set playsinline");
        }
    }

    fn set_source(&self, source: &NormalizedSource) {
        self.source.set_src(&source.src);
        self.source.set_type(&source.mime);
    }

    fn reload(&self) {
        self.media.load();
    }

    fn start(&self) -> PlayFuture {
        match self.media.play() {
            Ok(promise) => {
                let pending = JsFuture::from(promise);
                async move {
                    pending.await.map(|_| ()).map_err(|err| PlayError::Rejected {
                        reason: describe(&err),
                    })
                }
                .boxed_local()
            }
            Err(err) => futures::future::ready(Err(PlayError::SurfaceUnavailable {
                reason: describe(&err),
            }))
            .boxed_local(),
        }
    }
}

/// Fallback text element made visible through a CSS class.
#[derive(Clone)]
pub(crate) struct FallbackText {
    element: Element,
    visible_class: Rc<str>,
}

impl FallbackText {
    pub(crate) fn new(element: Element, visible_class: &str) -> Self {
        Self {
            element,
            visible_class: Rc::from(visible_class),
        }
    }
}

impl Fallback for FallbackText {
    fn show(&self, message: &str) {
        self.element.set_text_content(Some(message));
        if let Err(err) = self.element.class_list().add_1(&self.visible_class) {
            warn!(error = %describe(&err), "could not show fallback");
        }
    }

    fn hide(&self) {
        if let Err(err) = self.element.class_list().remove_1(&self.visible_class) {
            warn!(error = %describe(&err), "could not hide fallback");
        }
    }
}
