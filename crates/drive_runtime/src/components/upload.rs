use drive_model::UploadPayload;
use drive_ui::{Button, ButtonSize, ButtonVariant, IconName};
use leptos::{html, *};

use crate::{actions, model::ToastLevel, runtime_context::use_drive_runtime};

async fn read_payload(file: &web_sys::File) -> Result<UploadPayload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("{err:?}"))?;
    let content_type = file.type_();
    Ok(UploadPayload {
        file_name: file.name(),
        content_type: (!content_type.is_empty()).then_some(content_type),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
/// Opens the file picker and uploads every picked file.
pub(super) fn UploadButton() -> impl IntoView {
    let runtime = use_drive_runtime();
    let picker = create_node_ref::<html::Input>();
    let uploading = create_rw_signal(false);

    let on_change = move |_| {
        let Some(picker) = picker.get_untracked() else {
            return;
        };
        let picked: Vec<web_sys::File> = match picker.files() {
            Some(list) => (0..list.length()).filter_map(|index| list.item(index)).collect(),
            None => Vec::new(),
        };
        picker.set_value("");
        if picked.is_empty() {
            return;
        }

        uploading.set(true);
        let refresh = runtime.active_kind.get_untracked();
        runtime.spawn_action(move |api, host| async move {
            let mut payloads = Vec::with_capacity(picked.len());
            for file in &picked {
                match read_payload(file).await {
                    Ok(payload) => payloads.push(payload),
                    Err(err) => {
                        logging::warn!("failed to read {}: {err}", file.name());
                        host.notify(ToastLevel::Error, format!("Could not read {}", file.name()));
                    }
                }
            }
            actions::upload_files(api.as_ref(), &host, payloads, refresh).await;
            uploading.set(false);
        });
    };

    view! {
        <div class="drive-upload">
            <input
                class="drive-upload-input"
                type="file"
                multiple=true
                hidden=true
                node_ref=picker
                on:change=on_change
            />
            <Button
                variant=ButtonVariant::Primary
                size=ButtonSize::Lg
                leading_icon=IconName::Upload
                disabled=Signal::derive(move || uploading.get())
                on_click=Callback::new(move |_| {
                    if let Some(picker) = picker.get_untracked() {
                        picker.click();
                    }
                })
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload files" }}
            </Button>
        </div>
    }
}
