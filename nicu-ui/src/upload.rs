//! Reading the files picked in the upload input.
//!
//! Each selected `File` is read into memory with `Blob.arrayBuffer()` and
//! wrapped as a base64 data URL, the same shape every upload goes through.

use nicu_core::UploadedFile;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// DOM id of the `<input type="file">` inside the upload zone.
pub const UPLOAD_INPUT_ID: &str = "upload-data";

/// Read every file currently selected in the input with the given id.
///
/// Files that fail to read are logged and skipped. An error is returned only
/// when the input itself cannot be found.
pub async fn read_selected_files(input_id: &str) -> Result<Vec<UploadedFile>, String> {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| format!("upload input '{}' not found", input_id))?;

    let mut out = Vec::new();
    let Some(files) = input.files() else {
        return Ok(out);
    };
    for i in 0..files.length() {
        let Some(file) = files.item(i) else {
            continue;
        };
        let name = file.name();
        match JsFuture::from(file.array_buffer()).await {
            Ok(buf) => {
                let u8arr = js_sys::Uint8Array::new(&buf);
                let mut bytes = vec![0u8; u8arr.length() as usize];
                u8arr.copy_to(&mut bytes[..]);
                log::info!("[NICU] upload: Read {} ({} bytes)", name, bytes.len());
                out.push(UploadedFile::from_bytes(name, &file.type_(), &bytes));
            }
            Err(e) => log::error!("[NICU] upload: Failed to read {}: {:?}", name, e),
        }
    }

    // Clear the selection so picking the same file again fires `change`.
    input.set_value("");
    Ok(out)
}
