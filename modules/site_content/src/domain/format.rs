//! Content block formatter
//!
//! Free text is split into blocks on blank lines. Each block is kept as-is
//! when it already is HTML, turned into an embedded player when it is a lone
//! YouTube link, into an image when it is a lone image URL, and wrapped in a
//! paragraph otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| build(r"\n{2,}"));

static HTML_BLOCK: Lazy<Regex> =
    Lazy::new(|| build(r"(?i)^<(p|div|h[1-6]|ul|ol|li|blockquote|hr|table|pre)"));

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    build(
        r"^https?://(?:www\.|m\.)?(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.*&v=|shorts/))([a-zA-Z0-9_-]{11}).*$",
    )
});

static IMAGE_URL: Lazy<Regex> =
    Lazy::new(|| build(r#"(?i)^https?://[^<>"']+\.(?:jpg|jpeg|png|gif|webp|svg)\s*$"#));

// Patterns are literals; a failure here is a programming error caught by tests.
#[allow(clippy::expect_used)]
fn build(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static content pattern")
}

/// Classification of one trimmed content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Already HTML, emitted verbatim
    Html(&'a str),
    /// YouTube link with the 11-character video id
    YouTube(&'a str),
    /// Bare image URL
    Image(&'a str),
    /// Plain text paragraph
    Text(&'a str),
}

/// Classify a trimmed, non-empty block
pub fn classify(block: &str) -> Block<'_> {
    if HTML_BLOCK.is_match(block) {
        return Block::Html(block);
    }
    if let Some(id) = YOUTUBE_URL
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        return Block::YouTube(id);
    }
    if IMAGE_URL.is_match(block) {
        return Block::Image(block);
    }
    Block::Text(block)
}

/// Render free text into HTML blocks
pub fn format_content_html(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let normalized = content.replace("\r\n", "\n");
    let mut html = String::with_capacity(normalized.len() * 2);

    for block in BLOCK_SEPARATOR.split(&normalized) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        match classify(block) {
            Block::Html(markup) => html.push_str(markup),
            Block::YouTube(video_id) => html.push_str(&embedded_video(video_id)),
            Block::Image(url) => html.push_str(&embedded_image(url)),
            Block::Text(text) => {
                html.push_str("<p>");
                html.push_str(&text.replace('\n', "<br>"));
                html.push_str("</p>");
            }
        }
    }

    html
}

fn embedded_video(video_id: &str) -> String {
    format!(
        concat!(
            r#"<div class="embedded-video" style="position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden; max-width: 100%; background: #000; margin: 1.5em 0; border-radius: 4px; border: 1px solid var(--color-border);">"#,
            r#"<iframe style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;" src="https://www.youtube.com/embed/{}" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
            r#"</div>"#
        ),
        video_id
    )
}

fn embedded_image(url: &str) -> String {
    format!(
        r#"<p style="margin: 1.5em 0;"><img src="{}" alt="Embedded content" style="max-width: 100%; height: auto; display: block; margin: 0 auto; border-radius: 4px; border: 1px solid var(--color-border);" /></p>"#,
        url.trim_end()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_renders_nothing() {
        assert_eq!(format_content_html(""), "");
        assert_eq!(format_content_html("\n\n\n"), "");
    }

    #[test]
    fn test_plain_paragraphs_and_line_breaks() {
        let html = format_content_html("First line\nsecond line\r\n\r\nNext paragraph");
        assert_eq!(html, "<p>First line<br>second line</p><p>Next paragraph</p>");
    }

    #[test]
    fn test_html_blocks_pass_through() {
        let html = format_content_html("<h2>Title</h2>\n\n<UL><li>a</li></UL>");
        assert_eq!(html, "<h2>Title</h2><UL><li>a</li></UL>");
    }

    #[test]
    fn test_lone_image_url_becomes_image_paragraph() {
        let html = format_content_html("https://cdn.example.com/shots/hero.PNG");
        assert!(html.starts_with(r#"<p style="margin: 1.5em 0;"><img src="https://cdn.example.com/shots/hero.PNG""#));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn test_lone_youtube_url_becomes_embedded_player() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://m.youtube.com/shorts/dQw4w9WgXcQ?feature=share",
            "http://youtube.com/watch?list=abc&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ] {
            let html = format_content_html(url);
            assert!(html.starts_with(r#"<div class="embedded-video""#), "{url}");
            assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#), "{url}");
        }
    }

    #[test]
    fn test_url_inside_text_stays_text() {
        assert_eq!(
            classify("see https://cdn.example.com/a.png"),
            Block::Text("see https://cdn.example.com/a.png")
        );
        assert_eq!(
            classify("https://cdn.example.com/a.png\nmore"),
            Block::Text("https://cdn.example.com/a.png\nmore")
        );
    }

    #[test]
    fn test_mixed_blocks_keep_order() {
        let html = format_content_html(
            "Intro\n\nhttps://youtu.be/abcdefghijk\n\nhttps://x.io/p.jpg\n\n<p>raw</p>",
        );
        let intro = html.find("<p>Intro</p>").unwrap();
        let video = html.find("embed/abcdefghijk").unwrap();
        let image = html.find(r#"src="https://x.io/p.jpg""#).unwrap();
        let raw = html.find("<p>raw</p>").unwrap();
        assert!(intro < video && video < image && image < raw);
    }
}
