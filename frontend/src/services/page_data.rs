use anyhow::{anyhow, Context, Result};
use shared::SitePayload;

/// Id of the JSON block the host page embeds.
const PAYLOAD_ELEMENT_ID: &str = "page-data";

/// Reads and validates the embedded availability payload. Called once at
/// startup; everything downstream works with the typed result.
pub fn load() -> Result<SitePayload> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document available"))?;
    let element = document
        .get_element_by_id(PAYLOAD_ELEMENT_ID)
        .ok_or_else(|| anyhow!("missing #{} element", PAYLOAD_ELEMENT_ID))?;
    let raw = element.text_content().unwrap_or_default();

    SitePayload::from_json(&raw).with_context(|| format!("invalid #{} payload", PAYLOAD_ELEMENT_ID))
}
