//! Markdown Rendering
//!
//! Renders task descriptions and comments with pulldown-cmark plus:
//! - Syntax highlighting for fenced code (syntect)
//! - `@username` mentions wrapped in a highlight span
//! - Raw HTML from the text shown as text, never injected
//! - `javascript:` style links neutralized

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: sanitize_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: sanitize_url(dest_url),
                        title,
                        id,
                    }));
                }
                // Shown as typed
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Text(text) if text.contains('@') => events.extend(highlight_mentions(&text)),
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme()
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim().to_lowercase();
    if lower.starts_with("javascript:") || lower.starts_with("vbscript:") || lower.starts_with("data:text/html") {
        CowStr::from("#")
    } else {
        url
    }
}

fn is_mention_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || c == '-'
}

/// Split text around `@name` tokens. An `@` inside a word (emails) is left alone.
fn highlight_mentions(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut plain = String::new();
    let mut chars = text.char_indices().peekable();
    let mut prev: Option<char> = None;

    while let Some((i, c)) = chars.next() {
        let starts_mention = c == '@' && !prev.is_some_and(is_mention_char);
        if starts_mention {
            let rest = &text[i + 1..];
            let len: usize = rest
                .chars()
                .take_while(|&ch| is_mention_char(ch))
                .map(char::len_utf8)
                .sum();
            let name = rest[..len].trim_end_matches(['.', '-']);
            if !name.is_empty() {
                if !plain.is_empty() {
                    events.push(Event::Text(CowStr::from(std::mem::take(&mut plain))));
                }
                events.push(Event::Html(CowStr::from(format!(
                    r#"<span class="mention">@{}</span>"#,
                    escape_html(name)
                ))));
                // Skip the consumed name
                let consumed = name.chars().count();
                for _ in 0..consumed {
                    chars.next();
                }
                prev = name.chars().last();
                continue;
            }
        }
        plain.push(c);
        prev = Some(c);
    }

    if !plain.is_empty() {
        events.push(Event::Text(CowStr::from(plain)));
    }
    events
}

// Attachment URLs may carry spaces and other unsafe characters in file names
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode the unsafe characters of an attachment URL, keeping its structure
pub fn encode_attachment_url(url: &str) -> String {
    utf8_percent_encode(url, PATH_ENCODE_SET).to_string()
}

/// Last path segment of an attachment URL, for display
pub fn attachment_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(url)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_markdown("**done** and ~~not~~");
        assert!(html.contains("<strong>done</strong>"));
        assert!(html.contains("<del>not</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_javascript_links_neutralized() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_mentions() {
        let html = render_markdown("ping @maria.silva please");
        assert!(html.contains(r#"<span class="mention">@maria.silva</span>"#));
        assert!(html.contains(" please"));

        let email = render_markdown("write to ops@example.com");
        assert!(!email.contains("mention"));

        let trailing = render_markdown("thanks @joao.");
        assert!(trailing.contains(r#"<span class="mention">@joao</span>."#));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_attachment_helpers() {
        assert_eq!(
            encode_attachment_url("https://cdn.example.com/files/q3 report.pdf"),
            "https://cdn.example.com/files/q3%20report.pdf"
        );
        assert_eq!(attachment_name("https://cdn.example.com/files/q3.pdf?sig=abc"), "q3.pdf");
        assert_eq!(attachment_name("https://cdn.example.com/images/"), "images");
    }
}
