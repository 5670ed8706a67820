//! Bot/user message text -> display markup.
//!
//! The backend writes replies with a tiny markdown-ish dialect: `**bold**`,
//! newlines, IPv4 addresses and `port N` phrases. [`format`] turns that into
//! a fragment tree; everything that is not one of those constructs stays a
//! plain text node, so message text can never inject markup.
//!
//! Rules, applied in this order:
//! 1. `**X**` -> bold (non-greedy, never spans a newline)
//! 2. `\n` -> line break
//! 3. IPv4-shaped tokens -> inline code
//! 4. `port N` (any case) -> the word as typed, `N` as inline code
//!
//! Rules 3 and 4 also apply inside bold text. Bullet markers (`• `, `🔹 `)
//! after a line break are ordinary text and survive untouched.
//!
//! Word boundaries are ASCII-only: a non-ASCII letter directly before an
//! address or `port` does not suppress the match.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
static IPV4: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"(?-u:\b)[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(?-u:\b)")
});
static PORT: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)(?-u:\b)port ([0-9]+)(?-u:\b)"));

/// Build a pattern. A pattern that fails to build disables its rule; the
/// text it would have matched is left plain.
fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            leptos::logging::warn!("formatter pattern rejected: {err}");
            None
        }
    }
}

/// One node of formatted message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Code(String),
    /// Only ever contains `Text` and `Code` children.
    Bold(Vec<Fragment>),
    LineBreak,
}

/// Formatted message text, ready to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(Vec<Fragment>);

impl Markup {
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.0
    }
}

#[cfg(test)]
impl Markup {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// HTML string with all text escaped, as the DOM would serialize it.
    fn to_html(&self) -> String {
        let mut out = String::new();
        write_fragments(&mut out, &self.0);
        out
    }
}

/// Format message text. Pure; the same input always yields the same markup.
#[must_use]
pub fn format(text: &str) -> Markup {
    let mut out = Vec::new();
    if text.is_empty() {
        return Markup(out);
    }

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push(Fragment::LineBreak);
        }
        let mut last = 0;
        for caps in BOLD.iter().flat_map(|re| re.captures_iter(line)) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_inline(&mut out, &line[last..whole.start()]);
            let mut children = Vec::new();
            push_inline(&mut children, inner.as_str());
            out.push(Fragment::Bold(children));
            last = whole.end();
        }
        push_inline(&mut out, &line[last..]);
    }
    Markup(out)
}

fn push_inline(out: &mut Vec<Fragment>, segment: &str) {
    let mut last = 0;
    for m in IPV4.iter().flat_map(|re| re.find_iter(segment)) {
        push_ports(out, &segment[last..m.start()]);
        out.push(Fragment::Code(m.as_str().to_owned()));
        last = m.end();
    }
    push_ports(out, &segment[last..]);
}

fn push_ports(out: &mut Vec<Fragment>, segment: &str) {
    let mut last = 0;
    for caps in PORT.iter().flat_map(|re| re.captures_iter(segment)) {
        let Some(number) = caps.get(1) else {
            continue;
        };
        push_text(out, &segment[last..number.start()]);
        out.push(Fragment::Code(number.as_str().to_owned()));
        last = number.end();
    }
    push_text(out, &segment[last..]);
}

/// Append text, merging with a preceding text node.
fn push_text(out: &mut Vec<Fragment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Fragment::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Fragment::Text(text.to_owned()));
    }
}

#[cfg(test)]
fn write_fragments(out: &mut String, fragments: &[Fragment]) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => escape_into(out, text),
            Fragment::Code(code) => {
                out.push_str("<code>");
                escape_into(out, code);
                out.push_str("</code>");
            }
            Fragment::Bold(children) => {
                out.push_str("<strong>");
                write_fragments(out, children);
                out.push_str("</strong>");
            }
            Fragment::LineBreak => out.push_str("<br>"),
        }
    }
}

#[cfg(test)]
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}
