//! Thin wrappers over `window` APIs used by the runtime.
//!
//! Each helper has a native fallback so callers need no cfg of their own.

/// Element id of the signup form's email input.
pub const EMAIL_INPUT_ID: &str = "email";

/// Monotonic milliseconds for deadlines (reconnect backoff, banner expiry).
///
/// In the browser this is `performance.now()`, which never steps backwards
/// with the wall clock; `Date.now()` is used only if `performance` is missing.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or_else(js_sys::Date::now, |p| p.now())
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Push endpoint derived from the page's own origin.
#[must_use]
pub fn page_push_endpoint(path: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let (protocol, host) = match web_sys::window().map(|w| w.location()) {
            Some(location) => (
                location_part(location.protocol(), "protocol", "http:"),
                location_part(location.host(), "host", "localhost:8000"),
            ),
            None => ("http:".to_owned(), "localhost:8000".to_owned()),
        };
        crate::net::push_channel::push_endpoint(&protocol, &host, path)
    }
    #[cfg(not(feature = "csr"))]
    {
        crate::net::push_channel::push_endpoint("http:", "localhost:8000", path)
    }
}

#[cfg(feature = "csr")]
fn location_part(value: Result<String, wasm_bindgen::JsValue>, what: &str, fallback: &str) -> String {
    match value {
        Ok(value) => value,
        Err(e) => {
            log::debug!("location.{what} unavailable ({e:?}), using {fallback}");
            fallback.to_owned()
        }
    }
}

/// Move keyboard focus to the element with `id`, if it exists.
pub fn focus_element(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("focus #{id}: no such element");
            return;
        };
        match element.dyn_into::<web_sys::HtmlElement>() {
            Ok(element) => {
                if let Err(e) = element.focus() {
                    log::debug!("focus #{id} failed: {e:?}");
                }
            }
            Err(_) => log::debug!("focus #{id}: not an html element"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("focus #{id} skipped outside the browser");
    }
}
