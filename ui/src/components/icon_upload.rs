use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::{
    contexts::toast::{ToastKey, use_toast},
    get_api_client,
    status_page::IconMode,
};

/// File types offered by the picker. Nothing else is checked client-side.
const ACCEPTED_ICON_TYPES: &str =
    "image/x-icon,image/png,image/jpeg,image/svg+xml";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: IconMode,
    /// Called with the public URL of the uploaded icon.
    pub on_upload: Callback<String>,
    pub on_remove: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Favicon field: a file picker that uploads straight to the blob store, or
/// a preview of the current icon with a remove button.
#[function_component]
pub fn IconUpload(props: &Props) -> Html {
    let toast = use_toast();
    let is_uploading = use_state(|| false);

    let on_file_select = {
        let on_upload = props.on_upload.clone();
        let is_uploading = is_uploading.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                return;
            };

            let on_upload = on_upload.clone();
            let is_uploading = is_uploading.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_uploading.set(true);

                match upload_icon(&file).await {
                    Ok(url) => on_upload.emit(url),
                    Err(e) => {
                        tracing::error!("Icon upload failed: {e}");
                        toast.show(ToastKey::Error);
                    }
                }

                // Allow selecting the same file again after a failure.
                input.set_value("");
                is_uploading.set(false);
            });
        })
    };

    let on_remove = props.on_remove.reform(|_: MouseEvent| ());

    match &props.mode {
        IconMode::Preview(url) => html! {
            <div class="flex items-center gap-4">
                <img
                    src={url.clone()}
                    alt="Favicon"
                    class="w-10 h-10 rounded border border-neutral-200
                           dark:border-neutral-700 object-contain"
                />
                <button
                    type="button"
                    onclick={on_remove}
                    disabled={props.disabled}
                    class="text-sm px-3 py-2 rounded border border-neutral-300
                           dark:border-neutral-600 text-neutral-700
                           dark:text-neutral-300 hover:bg-neutral-50
                           dark:hover:bg-neutral-700 disabled:opacity-50"
                >
                    {"Remove"}
                </button>
            </div>
        },
        IconMode::Picker => html! {
            <div class="space-y-1">
                <input
                    id="page-icon"
                    type="file"
                    accept={ACCEPTED_ICON_TYPES}
                    onchange={on_file_select}
                    disabled={props.disabled || *is_uploading}
                    class="block w-full text-sm text-neutral-700 dark:text-neutral-300
                           file:mr-4 file:py-2 file:px-4 file:rounded file:border-0
                           file:bg-neutral-100 dark:file:bg-neutral-700"
                />
                if *is_uploading {
                    <p class="text-xs text-neutral-500 dark:text-neutral-400">
                        {"Uploading..."}
                    </p>
                }
            </div>
        },
    }
}

/// Send the file bytes to the upload endpoint, returning the icon URL.
async fn upload_icon(file: &File) -> Result<String, String> {
    let filename = file.name();
    let data = read_file(file)
        .await
        .map_err(|e| format!("Could not read {filename}: {e:?}"))?;
    tracing::debug!("Uploading {filename} ({} bytes)", data.len());

    let blob = get_api_client()
        .upload_blob(&filename, data)
        .await
        .map_err(|e| e.to_string())?;
    Ok(blob.url)
}

async fn read_file(file: &File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
