//! Bearer Token Store
//!
//! Persists the session token in browser localStorage under a fixed key.
//! Outside a browser-like environment (native targets, or a window without
//! storage access) every operation degrades to a no-op. No decoding and no
//! expiry check: a stale token is only discovered when the server rejects
//! the next request.

const TOKEN_KEY: &str = "taskflow_auth_token";

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

// wasm-bindgen imports cannot be called off-wasm; behave as "no storage".
#[cfg(not(target_arch = "wasm32"))]
fn storage() -> Option<web_sys::Storage> {
    None
}

pub fn set_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

pub fn remove_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

pub fn has_token() -> bool {
    get_token().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    // On native targets there is no browser storage: every operation must be
    // a silent no-op and reads must come back empty.
    #[test]
    fn token_store_is_a_noop_without_a_browser() {
        set_token("tok");
        assert_eq!(get_token(), None);
        assert!(!has_token());
        remove_token();
        assert_eq!(get_token(), None);
    }
}
