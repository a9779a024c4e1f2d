use crate::dom;
use anyhow::anyhow;
use field_core::{ColorScheme, SchemeFlag};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Watches the `class` attribute on `<html>` and mirrors dark mode into a
/// `SchemeFlag`.
pub struct ThemeWatcher {
    observer: web::MutationObserver,
    _closure: Closure<dyn FnMut()>,
}

impl ThemeWatcher {
    pub fn observe(document: &web::Document, flag: SchemeFlag) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow!("no document element"))?;
        flag.set(ColorScheme::from_dark(dom::root_is_dark(document)));

        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let scheme = ColorScheme::from_dark(dom::root_is_dark(&doc));
            if scheme != flag.get() {
                log::debug!("[theme] scheme -> {:?}", scheme);
            }
            flag.set(scheme);
        }) as Box<dyn FnMut()>);

        let observer = web::MutationObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("MutationObserver: {:?}", e))?;
        let init = web::MutationObserverInit::new();
        init.set_attributes(true);
        let filter = js_sys::Array::of1(&JsValue::from_str("class"));
        init.set_attribute_filter(&filter);
        observer
            .observe_with_options(&root, &init)
            .map_err(|e| anyhow!("observe <html>: {:?}", e))?;

        Ok(Self {
            observer,
            _closure: closure,
        })
    }

    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}
