//! File input with a local preview.
//!
//! The preview `blob:` URL is owned by an [`ObjectUrlSlot`], so picking a new
//! file, removing the file, or unmounting the picker revokes the old URL.

use content::types::FileUpload;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::file::format_size;
use crate::util::object_url::ObjectUrlSlot;

#[component]
pub fn FilePicker(
    label: &'static str,
    #[prop(default = "*/*")] accept: &'static str,
    on_pick: Callback<Option<FileUpload>>,
    #[prop(optional)] on_preview: Option<Callback<Option<String>>>,
) -> impl IntoView {
    let slot = StoredValue::new(ObjectUrlSlot::<crate::util::object_url::BrowserRevoke>::default());
    let preview = RwSignal::new(None::<String>);
    let caption = RwSignal::new(None::<String>);
    let reading = RwSignal::new(false);

    let set_preview = move |url: Option<String>| {
        slot.update_value(|s| s.replace(url.clone()));
        preview.set(url.clone());
        if let Some(cb) = on_preview {
            cb.run(url);
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::file::first_file(&ev) else {
                return;
            };
            let is_image = file.type_().starts_with("image/");
            set_preview(if is_image { crate::util::object_url::create_object_url(&file) } else { None });
            reading.set(true);
            leptos::task::spawn_local(async move {
                match crate::util::file::read_upload(&file).await {
                    Ok(upload) => {
                        caption.set(Some(format!("{} ({})", upload.file_name, format_size(upload.bytes.len() as u64))));
                        on_pick.run(Some(upload));
                    }
                    Err(e) => {
                        log::warn!("reading picked file failed: {e}");
                        caption.set(None);
                        on_pick.run(None);
                    }
                }
                reading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_remove = move |_| {
        set_preview(None);
        caption.set(None);
        on_pick.run(None);
    };

    on_cleanup(move || slot.update_value(ObjectUrlSlot::clear));

    view! {
        <div class="file-picker">
            <label class="file-picker__label">
                {label}
                <input class="file-picker__input" type="file" accept=accept on:change=on_change/>
            </label>
            <Show when=move || reading.get()>
                <p class="file-picker__status">"Reading file..."</p>
            </Show>
            <Show when=move || caption.get().is_some()>
                <div class="file-picker__selected">
                    <span>{move || caption.get().unwrap_or_default()}</span>
                    <button class="btn btn--ghost" type="button" on:click=on_remove>
                        "Remove"
                    </button>
                </div>
            </Show>
            <Show when=move || preview.get().is_some()>
                <img class="file-picker__preview" src=move || preview.get().unwrap_or_default() alt="Preview"/>
            </Show>
        </div>
    }
}
