//! Ownership of `blob:` object URLs used for file previews.
//!
//! Every URL handed to [`ObjectUrlSlot::replace`] is revoked exactly once:
//! when it is replaced, when the slot is cleared, or when the slot is dropped.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

/// Releases an object URL.
pub trait Revoke {
    fn revoke(&self, url: &str);
}

/// Calls `URL.revokeObjectURL` in the browser; no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRevoke;

impl Revoke for BrowserRevoke {
    fn revoke(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            let _ = web_sys::Url::revoke_object_url(url);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}

#[derive(Debug, Default)]
pub struct ObjectUrlSlot<R: Revoke = BrowserRevoke> {
    current: Option<String>,
    revoker: R,
}

impl<R: Revoke> ObjectUrlSlot<R> {
    pub fn with_revoker(revoker: R) -> Self {
        Self { current: None, revoker }
    }

    pub fn url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Install `url`, revoking the previous one.
    pub fn replace(&mut self, url: Option<String>) {
        if let Some(old) = std::mem::replace(&mut self.current, url) {
            self.revoker.revoke(&old);
        }
    }

    pub fn clear(&mut self) {
        self.replace(None);
    }
}

impl<R: Revoke> Drop for ObjectUrlSlot<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Create an object URL for a picked file.
#[cfg(feature = "hydrate")]
pub fn create_object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}
