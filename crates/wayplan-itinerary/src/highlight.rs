//! Cosmetic markup for section bodies: links and highlighted spans.
//!
//! Every helper is a single left-to-right, non-overlapping pass over the
//! input, so a token is never wrapped twice. [`auto_link`] and
//! [`highlight_info`] leave text without a match unchanged and do not escape
//! it; [`decorate_html`] escapes everything outside the markup it adds.

use std::sync::LazyLock;

use regex::Regex;

/// Named places linked by phrase, matched case-insensitively.
const KNOWN_SITES: &[(&str, &str)] = &[
    ("IRCTC website", "https://www.irctc.co.in/"),
    ("Sula Vineyards", "https://sulavineyards.com/"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Url,
    Site,
    Cost,
    Hotel,
    Meal,
}

impl Token {
    fn group(self) -> &'static str {
        match self {
            Token::Url => "url",
            Token::Site => "site",
            Token::Cost => "cost",
            Token::Hotel => "hotel",
            Token::Meal => "meal",
        }
    }

    fn pattern(self) -> String {
        match self {
            // Trailing sentence punctuation is not part of the URL.
            Token::Url => r#"https?://[^\s"'<>]*[^\s"'<>.,;:!?)\]]"#.to_string(),
            Token::Site => {
                let phrases: Vec<String> = KNOWN_SITES
                    .iter()
                    .map(|(phrase, _)| regex::escape(phrase))
                    .collect();
                format!("(?i:{})", phrases.join("|"))
            }
            // "$25-30" and "₹1,200-1,800" are one token each.
            Token::Cost => r"[₹$]\d+(?:[,\-]\d+)*".to_string(),
            Token::Hotel => r"Hotel(?: [A-Z][A-Za-z]*)+".to_string(),
            Token::Meal => r"(?i:breakfast|lunch|dinner|snack|wine tasting)".to_string(),
        }
    }

    fn wrap(self, matched: &str, escape: bool) -> String {
        let text = if escape {
            escape_html(matched)
        } else {
            matched.to_string()
        };
        match self {
            Token::Url => anchor(&text, &text),
            Token::Site => match site_url(matched) {
                Some(href) => anchor(href, &text),
                None => text,
            },
            Token::Cost => span("hl-cost", &text),
            Token::Hotel => span("hl-hotel", &text),
            Token::Meal => span("hl-meal", &text),
        }
    }
}

const LINK_TOKENS: &[Token] = &[Token::Url, Token::Site];
const HIGHLIGHT_TOKENS: &[Token] = &[Token::Cost, Token::Hotel, Token::Meal];
const ALL_TOKENS: &[Token] = &[
    Token::Url,
    Token::Site,
    Token::Cost,
    Token::Hotel,
    Token::Meal,
];

static LINKS: LazyLock<Regex> = LazyLock::new(|| compile(LINK_TOKENS));
static HIGHLIGHTS: LazyLock<Regex> = LazyLock::new(|| compile(HIGHLIGHT_TOKENS));
static DECORATIONS: LazyLock<Regex> = LazyLock::new(|| compile(ALL_TOKENS));

/// Alternation of the token patterns; earlier tokens win at the same offset.
fn compile(tokens: &[Token]) -> Regex {
    let alternatives: Vec<String> = tokens
        .iter()
        .map(|t| format!("(?P<{}>{})", t.group(), t.pattern()))
        .collect();
    Regex::new(&alternatives.join("|")).expect("valid decoration regex")
}

/// Wraps every token match; with `escape`, the text between and inside
/// matches is HTML-escaped as well.
fn apply(re: &Regex, tokens: &[Token], text: &str, escape: bool) -> String {
    let push_plain = |out: &mut String, plain: &str| {
        if escape {
            out.push_str(&escape_html(plain));
        } else {
            out.push_str(plain);
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        push_plain(&mut out, &text[last..whole.start()]);
        match tokens
            .iter()
            .find_map(|t| caps.name(t.group()).map(|m| t.wrap(m.as_str(), escape)))
        {
            Some(wrapped) => out.push_str(&wrapped),
            None => push_plain(&mut out, whole.as_str()),
        }
        last = whole.end();
    }
    push_plain(&mut out, &text[last..]);
    out
}

fn site_url(phrase: &str) -> Option<&'static str> {
    KNOWN_SITES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(phrase))
        .map(|(_, url)| *url)
}

/// Opening tag of an external link; `href` must already be escaped.
pub(crate) fn link_open(href: &str) -> String {
    format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">"#)
}

fn anchor(href: &str, text: &str) -> String {
    format!("{}{text}</a>", link_open(href))
}

fn span(class: &str, text: &str) -> String {
    format!(r#"<span class="{class}">{text}</span>"#)
}

/// Escapes the characters that are significant in HTML text and attributes.
#[must_use]
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

/// Wraps bare `http(s)://` URLs and known site names in anchors.
#[must_use]
pub fn auto_link(text: &str) -> String {
    apply(&LINKS, LINK_TOKENS, text, false)
}

/// Marks currency amounts, `Hotel <Name>` runs, and meal keywords.
#[must_use]
pub fn highlight_info(text: &str) -> String {
    apply(&HIGHLIGHTS, HIGHLIGHT_TOKENS, text, false)
}

/// [`auto_link`] and [`highlight_info`] in one pass over raw text, escaping
/// everything that is not added markup. Tokens are found before escaping,
/// so `<url>` and `"url"` link the bare URL.
#[must_use]
pub fn decorate_html(text: &str) -> String {
    apply(&DECORATIONS, ALL_TOKENS, text, true)
}
