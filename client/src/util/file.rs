//! Reading picked files into memory for multipart upload.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

/// Browsers report an empty MIME type for unknown extensions.
pub fn content_type_or_default(mime: &str) -> String {
    let mime = mime.trim();
    if mime.is_empty() { "application/octet-stream".to_owned() } else { mime.to_owned() }
}

/// Human-readable size for the picker caption.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

/// First file of an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn first_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast as _;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read `file` fully into a [`content::types::FileUpload`].
#[cfg(feature = "hydrate")]
pub async fn read_upload(file: &web_sys::File) -> Result<content::types::FileUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(content::types::FileUpload { file_name: file.name(), content_type: content_type_or_default(&file.type_()), bytes })
}
