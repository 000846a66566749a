//! Chat message model.
//!
//! Messages are created once (on send for the user, on response arrival for the
//! bot) and never mutated afterwards. Sources keep whatever the service sent;
//! the display cap is applied when links are resolved for rendering.

use serde::{Deserialize, Serialize};

/// Maximum number of source links rendered under a bot message.
pub const MAX_SOURCE_LINKS: usize = 5;

/// Display text used when a source has neither a title nor a url.
const SOURCE_FALLBACK_LABEL: &str = "source";
const SOURCE_FALLBACK_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A document the service used to build its answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A source resolved into something an `<a>` can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub label: String,
    pub href: String,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl Source {
    pub fn label(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.url))
            .unwrap_or(SOURCE_FALLBACK_LABEL)
    }

    pub fn href(&self) -> &str {
        non_empty(&self.url).unwrap_or(SOURCE_FALLBACK_HREF)
    }

    pub fn to_link(&self) -> SourceLink {
        SourceLink {
            label: self.label().to_string(),
            href: self.href().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sources: vec![],
        }
    }

    pub fn bot(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            sources,
        }
    }

    /// Links to render under the message, capped at [`MAX_SOURCE_LINKS`].
    pub fn source_links(&self) -> Vec<SourceLink> {
        self.sources
            .iter()
            .take(MAX_SOURCE_LINKS)
            .map(Source::to_link)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(title: Option<&str>, url: Option<&str>) -> Source {
        Source {
            title: title.map(String::from),
            url: url.map(String::from),
        }
    }

    #[test]
    fn test_source_label_fallbacks() {
        assert_eq!(src(Some("Geo"), Some("https://x")).label(), "Geo");
        assert_eq!(src(None, Some("https://x")).label(), "https://x");
        assert_eq!(src(Some(""), Some("https://x")).label(), "https://x");
        assert_eq!(src(None, None).label(), "source");
    }

    #[test]
    fn test_source_href_fallback() {
        assert_eq!(src(Some("Geo"), Some("https://x")).href(), "https://x");
        assert_eq!(src(Some("Geo"), None).href(), "#");
        assert_eq!(src(Some("Geo"), Some("")).href(), "#");
    }

    #[test]
    fn test_source_links_capped() {
        let sources: Vec<Source> = (0..7)
            .map(|i| src(Some(&format!("doc {i}")), None))
            .collect();
        let msg = Message::bot("answer", sources);
        let links = msg.source_links();
        assert_eq!(links.len(), MAX_SOURCE_LINKS);
        assert_eq!(links[0].label, "doc 0");
        assert_eq!(links[4].label, "doc 4");
        // the message itself keeps everything it was given
        assert_eq!(msg.sources.len(), 7);
    }

    #[test]
    fn test_user_message_has_no_sources() {
        let msg = Message::user("hello");
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.source_links().is_empty());
    }

    #[test]
    fn test_source_ignores_extra_fields() {
        let s: Source = serde_json::from_str(
            r#"{"title": "Geo", "url": "https://x", "content": "...", "distance": 0.12, "chunk_id": null}"#,
        )
        .unwrap();
        assert_eq!(s, src(Some("Geo"), Some("https://x")));
    }
}
