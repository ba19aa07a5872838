//! Presentation strings derived from record fields.
//!
//! Every function here is pure: the same fields always render to the same
//! string, and an empty input field renders to an empty block.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Source;

/// Target flavour for text styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Emphasis markers become HTML tags
    Html,

    /// Emphasis markers are stripped
    Plain,
}

fn strong_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong pattern"))
}

fn em_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*([^*]+?)\*").expect("valid emphasis pattern"))
}

/// Normalize lightweight markup in authored text.
///
/// `**x**` is strong, `*x*` is emphasis and ` -- ` is an en dash.
pub fn style_text(text: &str, style: TextStyle) -> String {
    let text = text.replace(" -- ", " \u{2013} ");

    let (strong, em) = match style {
        TextStyle::Html => ("<strong>$1</strong>", "<em>$1</em>"),
        TextStyle::Plain => ("$1", "$1"),
    };

    let text = strong_re().replace_all(&text, strong);
    em_re().replace_all(&text, em).into_owned()
}

/// Remove every `[id]` marker of the given sources
pub fn strip_source_markers(text: &str, sources: &[Source]) -> String {
    sources
        .iter()
        .filter(|source| !source.id.is_empty())
        .fold(text.to_string(), |acc, source| {
            acc.replace(&format!("[{}]", source.id), "")
        })
}

/// Styled fact content with citation markers removed
pub fn fact_content(content: &str, sources: &[Source], style: TextStyle) -> String {
    strip_source_markers(&style_text(content, style), sources)
}

/// Figure block for a fact image
pub fn image_block(image: &str, caption: &str) -> String {
    if image.is_empty() {
        return String::new();
    }

    let caption = escape_html(caption);
    let img = format!(
        r#"<img src="/static/img/{}" alt="{}">"#,
        escape_html(image),
        caption
    );

    if caption.is_empty() {
        format!(r#"<figure class="fact-image">{}</figure>"#, img)
    } else {
        format!(
            r#"<figure class="fact-image">{}<figcaption>{}</figcaption></figure>"#,
            img, caption
        )
    }
}

/// Map link for a "lat,lon" geo string
pub fn geo_block(geo: &str) -> String {
    let geo = geo.trim();
    if geo.is_empty() {
        return String::new();
    }

    let coords = geo.split_once(',').and_then(|(lat, lon)| {
        let lat: f64 = lat.trim().parse().ok()?;
        let lon: f64 = lon.trim().parse().ok()?;
        Some((lat, lon))
    });

    let href = match coords {
        Some((lat, lon)) => format!(
            "https://www.openstreetmap.org/?mlat={lat}&amp;mlon={lon}#map=10/{lat}/{lon}"
        ),
        None => format!(
            "https://www.openstreetmap.org/search?query={}",
            escape_html(geo).replace(' ', "+")
        ),
    };

    format!(
        r#"<a class="geo" href="{}" target="_blank" rel="noopener">{}</a>"#,
        href,
        escape_html(geo)
    )
}

/// Link to a fact anchored on its day page
pub fn fact_link(month: u32, day: u32, id: &str, label: &str) -> String {
    format!(
        r#"<a href="/dzien/{}/{}#{}">{}</a>"#,
        month,
        day,
        escape_html(id),
        escape_html(label)
    )
}

/// Cover image for a book
pub fn book_image_block(image: &str) -> String {
    if image.is_empty() {
        return String::new();
    }
    format!(
        r#"<img class="book-cover" src="/static/img/books/{}" alt="">"#,
        escape_html(image)
    )
}

/// External link for a book, labelled with `name` or the URL itself
pub fn book_link(url: &str, name: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let label = if name.is_empty() { url } else { name };
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        escape_html(url),
        escape_html(label)
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
