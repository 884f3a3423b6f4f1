use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Root element every speech document is wrapped in.
pub const ROOT_ELEMENT: &str = "speak";

static LEADING_BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*\n(\s*)<{ROOT_ELEMENT}>")).expect("valid leading line regex")
});

static TRAILING_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"</{ROOT_ELEMENT}>\s+$")).expect("valid trailing whitespace regex")
});

static LEADING_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*").expect("valid indentation regex"));

/// Escapes a dynamic value into XML entities.
///
/// `&` goes first so the entities produced for the other characters are not
/// escaped a second time.
pub fn escape_markup(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a template into a normalized markup document.
///
/// `fragments` are trusted literal markup and are copied verbatim; `values` are
/// escaped with [`escape_markup`] and spliced between them. The result has the
/// blank first line and the whitespace after the closing root element removed,
/// and the indentation of the first line stripped from every line that starts
/// with it. Malformed markup passes through untouched.
pub fn render<F, V>(fragments: &[F], values: &[V]) -> String
where
    F: AsRef<str>,
    V: AsRef<str>,
{
    debug_assert_eq!(
        fragments.len(),
        values.len() + 1,
        "templates interleave N fragments with N-1 values"
    );

    let mut raw = String::new();
    for (index, fragment) in fragments.iter().enumerate() {
        if index > 0 {
            if let Some(value) = values.get(index - 1) {
                raw.push_str(&escape_markup(value.as_ref()));
            }
        }
        raw.push_str(fragment.as_ref());
    }

    let trimmed = trim_document(&raw);
    dedent(&trimmed)
}

fn trim_document(raw: &str) -> String {
    let leading = LEADING_BLANK_LINE.replace(raw, format!("${{1}}<{ROOT_ELEMENT}>").as_str());
    let closing = format!("</{ROOT_ELEMENT}>");
    let trailing: Cow<'_, str> = TRAILING_WHITESPACE.replace(leading.as_ref(), closing.as_str());
    trailing.into_owned()
}

// Lines that do not start with the first line's indentation keep their own.
fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let indent = lines
        .first()
        .and_then(|line| LEADING_INDENT.find(line))
        .map(|found| found.as_str())
        .unwrap_or("");
    if indent.is_empty() {
        return text.to_string();
    }
    lines
        .iter()
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Incrementally built template, the Rust counterpart of a tagged literal.
///
/// ```
/// use ssmlbase::markup::Template;
///
/// let equation = r#""1 + 1 > 1""#;
/// let rendered = Template::new("\n  <speak>\n    ")
///     .value(equation, "\n  </speak>\n")
///     .render();
/// assert_eq!(rendered, "<speak>\n  &quot;1 + 1 &gt; 1&quot;\n</speak>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Template<'a> {
    fragments: Vec<&'a str>,
    values: Vec<String>,
}

impl<'a> Template<'a> {
    pub fn new(literal: &'a str) -> Self {
        Self {
            fragments: vec![literal],
            values: Vec::new(),
        }
    }

    /// Appends a dynamic value followed by the next literal fragment.
    pub fn value(mut self, value: impl Into<String>, literal: &'a str) -> Self {
        self.values.push(value.into());
        self.fragments.push(literal);
        self
    }

    pub fn render(&self) -> String {
        render(&self.fragments, &self.values)
    }
}
