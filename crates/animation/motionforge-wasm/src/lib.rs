use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Date, Function, Promise, Reflect, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use motionforge_core::{
    codegen, parse_animation_config_json, AnimationConfig, Backend, ExportCoordinator, Settings,
};

mod dom;

pub use dom::DomTarget;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Stringify the JS object so the core parser (and its validation) is reused.
fn parse_config(value: &JsValue, context: &str) -> Result<AnimationConfig, JsError> {
    if jsvalue_is_undefined_or_null(value) {
        return Err(JsError::new(&format!("{context}: config is null/undefined")));
    }
    let s = JSON::stringify(value)
        .map_err(|e| JsError::new(&format!("{context} stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new(&format!("{context}: stringify produced non-string")))?;
    parse_animation_config_json(&s).map_err(|e| JsError::new(&format!("{context}: {e}")))
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{err:?}")
}

/// Animation preview + export panel state bound to one DOM element.
#[wasm_bindgen]
pub struct MotionforgeStudio {
    inner: Rc<RefCell<ExportCoordinator<DomTarget>>>,
}

#[wasm_bindgen]
impl MotionforgeStudio {
    /// Create a studio. Both arguments accept JSON objects or undefined/null for defaults.
    /// Example:
    ///   new MotionforgeStudio({ default_backend: "css" }, { type: "fade", duration: 1, delay: 0, easing: "ease" })
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue, config: JsValue) -> Result<MotionforgeStudio, JsError> {
        console_error_panic_hook::set_once();

        let settings: Settings = if jsvalue_is_undefined_or_null(&settings) {
            Settings::default()
        } else {
            swb::from_value(settings).map_err(|e| JsError::new(&format!("settings error: {e}")))?
        };
        let config = if jsvalue_is_undefined_or_null(&config) {
            AnimationConfig::default()
        } else {
            parse_config(&config, "new")?
        };

        Ok(MotionforgeStudio {
            inner: Rc::new(RefCell::new(ExportCoordinator::new(settings, config))),
        })
    }

    /// Apply a config to `element` (or detach when it is undefined). Returns the binder state.
    #[wasm_bindgen]
    pub fn bind(&mut self, config: JsValue, element: Option<HtmlElement>) -> Result<String, JsError> {
        let config = parse_config(&config, "bind")?;
        let state = self
            .inner
            .borrow_mut()
            .bind(config, element.map(DomTarget::new));
        Ok(state.name().to_string())
    }

    /// Replace the config, keeping the current element.
    #[wasm_bindgen(js_name = set_config)]
    pub fn set_config(&mut self, config: JsValue) -> Result<String, JsError> {
        let config = parse_config(&config, "set_config")?;
        let state = self.inner.borrow_mut().set_config(config);
        Ok(state.name().to_string())
    }

    #[wasm_bindgen]
    pub fn replay(&mut self) -> bool {
        self.inner.borrow_mut().preview_mut().replay()
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) -> bool {
        self.inner.borrow_mut().preview_mut().pause()
    }

    #[wasm_bindgen]
    pub fn resume(&mut self) -> bool {
        self.inner.borrow_mut().preview_mut().resume()
    }

    /// Remove the class token and custom properties from the element.
    #[wasm_bindgen]
    pub fn unbind(&mut self) {
        self.inner.borrow_mut().detach();
    }

    /// "unbound" | "bound" | "running" | "paused"
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.inner.borrow().preview().state().name().to_string()
    }

    #[wasm_bindgen(js_name = class_token)]
    pub fn class_token(&self) -> Option<String> {
        self.inner
            .borrow()
            .preview()
            .class_token()
            .map(str::to_string)
    }

    #[wasm_bindgen(js_name = replay_key)]
    pub fn replay_key(&self) -> f64 {
        self.inner.borrow().preview().replay_key() as f64
    }

    /// Switch between "react" and "css".
    #[wasm_bindgen(js_name = set_backend)]
    pub fn set_backend(&mut self, backend: &str) -> Result<(), JsError> {
        let backend: Backend = backend
            .parse()
            .map_err(|e| JsError::new(&format!("set_backend: {e}")))?;
        self.inner.borrow_mut().set_backend(backend);
        Ok(())
    }

    #[wasm_bindgen(js_name = active_backend)]
    pub fn active_backend(&self) -> String {
        self.inner.borrow().active_backend().name().to_string()
    }

    /// Generated source for the active backend; throws for unsupported configs.
    #[wasm_bindgen(js_name = generated_text)]
    pub fn generated_text(&self) -> Result<String, JsError> {
        let inner = self.inner.borrow();
        inner
            .generated()
            .map(str::to_string)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Suggested download name for the generated source.
    #[wasm_bindgen(js_name = file_name)]
    pub fn file_name(&self) -> String {
        let inner = self.inner.borrow();
        inner.active_backend().file_name(&inner.config().kind)
    }

    /// Copy the generated text through `writer(text) -> Promise`, e.g.
    /// `(text) => navigator.clipboard.writeText(text)`.
    ///
    /// Returns immediately; poll `copy_status()` for the outcome.
    #[wasm_bindgen]
    pub fn copy(&mut self, writer: Function) -> Result<(), JsError> {
        let request = self
            .inner
            .borrow_mut()
            .begin_copy()
            .ok_or_else(|| JsError::new("copy: no generated text"))?;
        let id = request.id;

        let returned = match writer.call1(&JsValue::UNDEFINED, &JsValue::from_str(&request.text)) {
            Ok(v) => v,
            Err(err) => {
                self.inner
                    .borrow_mut()
                    .finish_copy(id, Err(describe_js_error(&err)), Date::now());
                return Ok(());
            }
        };
        let promise = Promise::resolve(&returned);

        let ok_state = Rc::clone(&self.inner);
        let on_ok = Closure::once_into_js(move |_: JsValue| {
            ok_state.borrow_mut().finish_copy(id, Ok(()), Date::now());
        });
        let err_state = Rc::clone(&self.inner);
        let on_err = Closure::once_into_js(move |err: JsValue| {
            err_state
                .borrow_mut()
                .finish_copy(id, Err(describe_js_error(&err)), Date::now());
        });

        let then: Function = Reflect::get(&promise, &JsValue::from_str("then"))
            .map_err(|e| JsError::new(&format!("copy: {e:?}")))?
            .dyn_into()
            .map_err(|_| JsError::new("copy: promise.then is not a function"))?;
        then.call2(&promise, &on_ok, &on_err)
            .map_err(|e| JsError::new(&format!("copy: {}", describe_js_error(&e))))?;
        Ok(())
    }

    /// `{ status: "idle" | "copied" }` or `{ status: "failed", message }`.
    #[wasm_bindgen(js_name = copy_status)]
    pub fn copy_status(&self) -> Result<JsValue, JsError> {
        let status = self.inner.borrow().copy_status(Date::now());
        swb::to_value(&status).map_err(|e| JsError::new(&format!("copy_status error: {e}")))
    }

    #[wasm_bindgen(js_name = dismiss_copy_error)]
    pub fn dismiss_copy_error(&mut self) {
        self.inner.borrow_mut().dismiss_copy_error();
    }
}

/// React component source for a config JSON object.
#[wasm_bindgen(js_name = generate_react)]
pub fn generate_react(config: JsValue) -> Result<String, JsError> {
    let config = parse_config(&config, "generate_react")?;
    codegen::generate_react(&config).map_err(|e| JsError::new(&e.to_string()))
}

/// CSS stylesheet fragment for a config JSON object.
#[wasm_bindgen(js_name = generate_css)]
pub fn generate_css(config: JsValue) -> Result<String, JsError> {
    let config = parse_config(&config, "generate_css")?;
    codegen::generate_css(&config).map_err(|e| JsError::new(&e.to_string()))
}

/// The stylesheet bound elements rely on; install it once per document.
#[wasm_bindgen(js_name = preview_stylesheet)]
pub fn preview_stylesheet() -> String {
    motionforge_core::preview_stylesheet()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
