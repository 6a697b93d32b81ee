//! Delivery of the CSV artifact to the user.
//!
//! Native builds write a file next to the executable; wasm builds hand
//! the browser a Blob and click a synthetic download link, which is what
//! the surrounding page expects.

use anyhow::Result;

#[cfg(not(target_arch = "wasm32"))]
pub fn deliver_csv(filename: &str, contents: &str) -> Result<()> {
    std::fs::write(filename, contents)?;
    log::info!("Exported {}", filename);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn deliver_csv(filename: &str, contents: &str) -> Result<()> {
    use anyhow::anyhow;
    use wasm_bindgen::{JsCast, JsValue};

    // All JsValue failure modes collapse to one message; there is no
    // recovery path beyond telling the user the download failed.
    let js = |e: JsValue| anyhow!("browser download failed: {:?}", e);

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js)?;

    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js)?
        .dyn_into()
        .map_err(|_| anyhow!("anchor element cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(js)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js)?;
    web_sys::Url::revoke_object_url(&url).map_err(js)?;
    Ok(())
}
