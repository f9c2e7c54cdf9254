//! Self-contained HTML artifact
//!
//! The renderer script and styles live in an embedded template; the scene is
//! injected as a JSON literal. The page fetches nothing at display time, so it
//! can be shown inside an isolated frame.

use super::scene::RenderScene;
use crate::error::{VizError, VizResult};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/viz/assets/"]
struct Assets;

const TEMPLATE: &str = "scene.html";
const PLACEHOLDER: &str = "__SCENE_DATA__";

/// Extra room a host frame needs around the canvas
pub const FRAME_PADDING: u32 = 20;

/// Serialize a scene into a standalone HTML page
pub fn render_html(scene: &RenderScene) -> VizResult<String> {
    let asset = Assets::get(TEMPLATE)
        .ok_or_else(|| VizError::Render(format!("missing renderer template {}", TEMPLATE)))?;
    let template = std::str::from_utf8(asset.data.as_ref())
        .map_err(|err| VizError::Render(format!("renderer template is not UTF-8: {}", err)))?;

    let data = script_safe_json(&serde_json::to_string(scene)?);
    Ok(template.replacen(PLACEHOLDER, &data, 1))
}

/// Make a JSON document safe to inline in a `<script>` element
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\u` escapes
/// are equivalent. The two Unicode line separators are escaped as well.
fn script_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap an artifact for display in a host page
///
/// The page goes into the `srcdoc` of a sandboxed frame sized to the canvas
/// plus [`FRAME_PADDING`].
pub fn embed_fragment(html: &str, height: u32) -> String {
    let escaped = html
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<div style=\"width: 100%; height: {h}px; overflow: hidden; border: 1px solid #ddd; border-radius: 5px;\">\
<iframe sandbox=\"allow-scripts\" style=\"width: 100%; height: {f}px; border: 0;\" srcdoc=\"{doc}\"></iframe></div>",
        h = height,
        f = height + FRAME_PADDING,
        doc = escaped
    )
}
