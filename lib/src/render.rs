//! Markup for hints, the bundled stylesheet and the `interval-hint` macro.
use crate::{
    datetime::HintDateTime,
    error::DateTimeError,
    hint::{Hint, HintKind, HintState},
};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

pub const MAIN_CLASS: &str = "lsp-interval-hints";
pub const RENDERER_CLASS: &str = "lsp-interval-hints-renderer";
pub const FUTURE_CLASS: &str = "lsp-interval-hints-future";
pub const PAST_CLASS: &str = "lsp-interval-hints-past";
pub const SHORT_CLASS: &str = "lsp-interval-hints-short";
pub const LABEL_CLASS: &str = "lsp-interval-hints-label";
pub const HIDDEN_CLASS: &str = "hidden";
pub const TIMESTAMP_ATTRIBUTE: &str = "data-timestamp";

/// Macro type handled by [`parse_macro`].
pub const MACRO_TYPE: &str = "interval-hint";
/// Template rendered in place of a macro hint whose datetime can not be parsed.
pub const INVALID_DATETIME: &str = "(interval-hint: Invalid datetime)";

const STYLES: &str = r#"
.lsp-interval-hints { margin-left: 0.25em; padding-left: 0px; font-family: monospace; }

.lsp-interval-hints-future > .lsp-interval-hints-label::before { content: '⏳'; }
.lsp-interval-hints-future.lsp-interval-hints-short > .lsp-interval-hints-label::before { content: '⏰'; }
.lsp-interval-hints-past > .lsp-interval-hints-label::before { content: '⌛'; }

.lsp-interval-hints > * { color: var(--ls-secondary-text-color); }
.lsp-interval-hints > ::after ,
.lsp-interval-hints > ::before { color: var(--ls-page-inline-code-color); font-size: 0.8em; }
.lsp-interval-hints > :not(:last-child)::after ,
.lsp-interval-hints > :not(:last-child)::before { padding-right: .2em; }
.lsp-interval-hints-y::after { content: 'Y'; }
.lsp-interval-hints-w::after { content: 'W'; }
.lsp-interval-hints-d::after { content: 'D'; }
.lsp-interval-hints-h::after { content: 'H'; }
.lsp-interval-hints-m::after { content: 'M'; }
.lsp-interval-hints-s::after { content: 'S'; }
"#;

/// The bundled stylesheet, or nothing when default styles are disabled.
#[inline]
pub fn stylesheet(no_default_styles: bool) -> &'static str {
    if no_default_styles { "" } else { STYLES }
}

/// Escapes a value for use inside a double quoted attribute or as text.
fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Container markup of one hint in a given state.
#[derive(Copy, Clone, Debug)]
pub struct HintMarkup<'a> {
    hint: &'a Hint,
    state: &'a HintState,
}

/// Renders `hint` in `state`. Hidden hints render as an empty container.
#[inline]
pub fn render_hint<'a>(hint: &'a Hint, state: &'a HintState) -> HintMarkup<'a> {
    HintMarkup { hint, state }
}

impl Display for HintMarkup<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { hint, state } = self;
        f.write_str("<span class=\"")?;
        f.write_str(MAIN_CLASS)?;
        if hint.kind == HintKind::Renderer {
            write!(f, " {RENDERER_CLASS}")?;
        }
        write!(
            f,
            " {}",
            if state.is_future {
                FUTURE_CLASS
            } else {
                PAST_CLASS
            }
        )?;
        if state.is_hidden {
            write!(f, " {HIDDEN_CLASS}")?;
        }
        if state.is_short {
            write!(f, " {SHORT_CLASS}")?;
        }
        write!(
            f,
            "\" {TIMESTAMP_ATTRIBUTE}=\"{}\" title=\"{}\">",
            hint.timestamp,
            escape(&hint.title)
        )?;
        if !state.is_hidden {
            write!(f, "<span class=\"{LABEL_CLASS}\"></span>")?;
            for part in &state.breakdown {
                write!(
                    f,
                    "<span class=\"{MAIN_CLASS}-{}\">{}</span>",
                    part.unit.label(),
                    part.count
                )?;
            }
        }
        f.write_str("</span>")
    }
}

/// UI key of the macro rendered into `slot`.
#[inline]
pub fn macro_key(slot: &str) -> String {
    format!("{MAIN_CLASS}-{slot}")
}

/// Interprets renderer macro arguments `(type, datetime)`.
///
/// Returns `None` when the macro is not an `interval-hint`. The type may carry
/// the leading `:` the host passes keyword arguments with.
pub fn parse_macro<S: AsRef<str>>(args: &[S]) -> Option<Result<Hint, DateTimeError>> {
    let (ty, rest) = args.split_first()?;
    let ty = ty.as_ref().trim();
    if ty.strip_prefix(':').unwrap_or(ty) != MACRO_TYPE {
        return None;
    }
    let datetime = rest.first().map(|it| it.as_ref()).unwrap_or_default();
    Some(
        HintDateTime::from_str(datetime)
            .and_then(|it| Hint::from_datetime(&it, HintKind::Renderer)),
    )
}

/// Output of a renderer macro invocation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MacroOutput {
    /// UI key, unique per slot.
    pub key: String,
    /// Markup to place into the slot.
    pub template: String,
}
