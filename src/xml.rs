//! Path-table XML decoding for query-protocol responses.
//!
//! Each decodable type lists the element paths it cares about and what to do
//! when one of them is seen. Paths are `/`-separated local names relative to
//! the document root; the root element itself may be absent, so
//! `<CreateUserResponse><CreateUserResult>...` and a bare
//! `<CreateUserResult>...` both match `CreateUserResult/...`.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Errors that can occur while decoding a response body.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended while an element was still open.
    #[error("unexpected end of document inside <{0}>")]
    Unclosed(String),
}

/// What happens when an element path is matched.
pub(crate) enum Bind<T> {
    /// Called with the element's text once its end tag is read.
    Text(fn(&mut T, String)),
    /// Called when the element's start tag is read.
    Open(fn(&mut T)),
}

/// One row of a decoding table.
pub(crate) struct Field<T> {
    pub path: &'static str,
    pub bind: Bind<T>,
}

impl<T> Field<T> {
    pub(crate) const fn text(path: &'static str, set: fn(&mut T, String)) -> Self {
        Self {
            path,
            bind: Bind::Text(set),
        }
    }

    pub(crate) const fn open(path: &'static str, on_open: fn(&mut T)) -> Self {
        Self {
            path,
            bind: Bind::Open(on_open),
        }
    }
}

/// A type decodable from an XML document via a path table.
pub(crate) trait FromXml: Default + Sized + 'static {
    /// Paths that must appear, or the document is rejected.
    const REQUIRED: &'static [&'static str];

    /// Element paths and their bindings. For any element, only the first
    /// matching entry of each kind is applied.
    const FIELDS: &'static [Field<Self>];
}

/// Returns true if the open element stack is `path`, optionally under one
/// extra root element.
fn path_matches(stack: &[String], path: &str) -> bool {
    let depth = path.split('/').count();
    let tail = match stack.len().checked_sub(depth) {
        Some(0) => stack,
        Some(1) => &stack[1..],
        _ => return false,
    };
    tail.iter().map(String::as_str).eq(path.split('/'))
}

fn on_open<T: FromXml>(out: &mut T, stack: &[String], seen: &mut [bool]) {
    for (flag, required) in seen.iter_mut().zip(T::REQUIRED) {
        if path_matches(stack, required) {
            *flag = true;
        }
    }
    let bound = T::FIELDS.iter().find_map(|field| match field.bind {
        Bind::Open(f) if path_matches(stack, field.path) => Some(f),
        _ => None,
    });
    if let Some(f) = bound {
        f(out);
    }
}

fn on_text<T: FromXml>(out: &mut T, stack: &[String], text: String) {
    let bound = T::FIELDS.iter().find_map(|field| match field.bind {
        Bind::Text(f) if path_matches(stack, field.path) => Some(f),
        _ => None,
    });
    if let Some(f) = bound {
        f(out, text);
    }
}

/// Decodes `body` into `T` by walking its element tree.
pub(crate) fn decode<T: FromXml>(body: &str) -> Result<T, XmlError> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut out = T::default();
    let mut stack: Vec<String> = Vec::new();
    let mut texts: Vec<String> = Vec::new();
    let mut seen = vec![false; T::REQUIRED.len()];
    let mut saw_element = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                saw_element = true;
                stack.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                texts.push(String::new());
                on_open(&mut out, &stack, &mut seen);
            }
            Event::Empty(e) => {
                saw_element = true;
                stack.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                on_open(&mut out, &stack, &mut seen);
                on_text(&mut out, &stack, String::new());
                stack.pop();
            }
            Event::Text(e) => {
                if let Some(text) = texts.last_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(text) = texts.last_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if let Some(text) = texts.pop() {
                    on_text(&mut out, &stack, text);
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unclosed(open.clone()));
    }
    if !saw_element {
        return Err(XmlError::MissingElement("root element".to_string()));
    }
    for (found, path) in seen.iter().zip(T::REQUIRED) {
        if !found {
            return Err(XmlError::MissingElement(path.to_string()));
        }
    }
    Ok(out)
}
