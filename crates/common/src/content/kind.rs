use std::fmt;
use std::str::FromStr;

use mime::Mime;

/// Classification of a content type, computed once per item.
///
/// Both the remote request shape and the local file extension are read off
/// the kind, so the two can never disagree about what an item is.
///
/// Exact essences (`type/subtype` without parameters) are matched first.
/// Types with no exact match fall back to substring rules: anything
/// mentioning `json` is fetched as JSON, anything mentioning `text/` is
/// fetched as text, everything else is raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Json,
    Jpeg,
    Png,
    Icon,
    Css,
    Html,
    PlainText,
    /// A JSON flavoured type without a canonical extension,
    /// e.g. `application/ld+json`
    OtherJson,
    /// A text type without a canonical extension, e.g. `text/csv`
    OtherText,
    Binary,
}

const IMAGE_X_ICON: &str = "image/x-icon";

impl ContentKind {
    pub fn classify(content_type: &str) -> Self {
        let essence = essence(content_type);

        match essence.as_str() {
            e if e == mime::APPLICATION_JSON.essence_str() => Self::Json,
            e if e == mime::IMAGE_JPEG.essence_str() => Self::Jpeg,
            e if e == mime::IMAGE_PNG.essence_str() => Self::Png,
            IMAGE_X_ICON => Self::Icon,
            e if e == mime::TEXT_CSS.essence_str() => Self::Css,
            e if e == mime::TEXT_HTML.essence_str() => Self::Html,
            e if e == mime::TEXT_PLAIN.essence_str() => Self::PlainText,
            _ => {
                let lowered = content_type.to_ascii_lowercase();
                if lowered.contains("json") {
                    Self::OtherJson
                } else if lowered.contains("text/") {
                    Self::OtherText
                } else {
                    Self::Binary
                }
            }
        }
    }

    /// Suffix appended to the id when fetching the item from the remote store.
    ///
    /// The remote renders JSON and text items differently depending on the
    /// suffix; raw bytes are requested without one.
    pub fn remote_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Json | Self::OtherJson => Some(".json"),
            Self::Css | Self::Html | Self::PlainText | Self::OtherText => Some(".text"),
            Self::Jpeg | Self::Png | Self::Icon | Self::Binary => None,
        }
    }

    /// Extension of the local file holding the item.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Json => Some(".json"),
            Self::Jpeg => Some(".jpg"),
            Self::Png => Some(".png"),
            Self::Css => Some(".css"),
            Self::Html => Some(".html"),
            Self::PlainText => Some(".txt"),
            Self::Icon | Self::OtherJson | Self::OtherText | Self::Binary => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Icon => "icon",
            Self::Css => "css",
            Self::Html => "html",
            Self::PlainText => "plain-text",
            Self::OtherJson => "other-json",
            Self::OtherText => "other-text",
            Self::Binary => "binary",
        };
        write!(f, "{}", name)
    }
}

/// Lower-cased `type/subtype` with parameters stripped.
///
/// Free-form types that do not parse as a MIME type are cut at the first `;`.
fn essence(content_type: &str) -> String {
    match Mime::from_str(content_type.trim()) {
        Ok(mime) => mime.essence_str().to_ascii_lowercase(),
        Err(_) => content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase(),
    }
}
