//! RSS renderer
//!
//! Renders the current snapshot as a single-item RSS 2.0 document.

use crate::state::FundraisingSnapshot;

/// Render the snapshot as a complete RSS 2.0 feed with one item.
///
/// Rendering is total: every snapshot value, including the zero-value
/// initial state, produces a well-formed document.
pub fn render_feed(snapshot: &FundraisingSnapshot, link: &str) -> String {
    let title = format!("iRaiser 2025 – {}€ collectés", snapshot.collected);
    let description = format!(
        "{}€ collectés, {} dons ({:.2}% de l'objectif)",
        snapshot.collected, snapshot.donations, snapshot.percent
    );
    let pub_date = snapshot.last_updated.to_rfc2822();
    let guid = format!(
        "iraiser-2025-{}",
        snapshot.last_updated.format("%Y%m%d%H%M%S")
    );

    let mut buf = String::new();
    buf.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    buf.push_str("<rss version=\"2.0\"><channel>");
    push_element(&mut buf, "title", "iRaiser Collecte 2025");
    push_element(&mut buf, "link", link);
    push_element(&mut buf, "description", "Flux RSS iRaiser (2025 uniquement)");
    buf.push_str("<item>");
    push_element(&mut buf, "title", &title);
    push_element(&mut buf, "description", &description);
    push_element(&mut buf, "pubDate", &pub_date);
    push_element(&mut buf, "guid", &guid);
    buf.push_str("</item>");
    buf.push_str("</channel></rss>");

    buf
}

fn push_element(buf: &mut String, tag: &str, text: &str) {
    buf.push('<');
    buf.push_str(tag);
    buf.push('>');
    buf.push_str(&escape_text(text));
    buf.push_str("</");
    buf.push_str(tag);
    buf.push('>');
}

/// Escape the characters XML forbids in text content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
