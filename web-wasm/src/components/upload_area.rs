//! Upload area component
//!
//! Drag-and-drop or click-to-select for a single JPEG/PNG image, with
//! an inline preview of the pending upload. Format filtering happens
//! here by content type; corrupt files surface later during the PNG
//! re-encode.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader};

use crate::app::UploadedImage;

const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png"];

fn is_accepted(file: &File) -> bool {
    ACCEPTED_TYPES.contains(&file.type_().as_str())
}

#[component]
pub fn UploadArea<F>(
    image: ReadSignal<Option<UploadedImage>>,
    on_image_selected: F,
) -> impl IntoView
where
    F: Fn(UploadedImage) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_image_selected = on_image_selected.clone();
        move |files: FileList| {
            // One image per submission: take the first accepted file
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    if is_accepted(&file) {
                        read_file(file, on_image_selected.clone());
                        break;
                    }
                }
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(input) = document
                .create_element("input")
                .map(|el| el.unchecked_into::<web_sys::HtmlInputElement>())
            else {
                return;
            };
            input.set_type("file");
            input.set_accept("image/jpeg,image/png");

            let handle_files = handle_files.clone();
            let input_in_closure = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_in_closure.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Upload Cafeteria Image: drag & drop or click to select"</p>
            <p class="text-muted">"Accepted formats: JPEG, PNG"</p>
        </div>

        {move || {
            image.get().map(|img| {
                view! {
                    <div class="preview">
                        <img src=img.data_url alt=img.file_name.clone() />
                        <p class="text-muted">{format!("Preview of Uploaded Image: {}", img.file_name)}</p>
                    </div>
                }
            })
        }}
    }
}

fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(UploadedImage) + 'static,
{
    let file_name = file.name();
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_in_closure = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_in_closure.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(UploadedImage {
                    file_name: file_name.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
