use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// One entry in the story strip: what to show and who posted it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorySummary {
    pub media_url: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl StorySummary {
    pub fn new(media_url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            username: username.into(),
            caption: None,
        }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::classify(&self.media_url)
    }

    /// Short badge shown on the story button.
    pub fn badge(&self) -> &'static str {
        match self.kind() {
            MediaKind::Image => "IMG",
            MediaKind::Video => "VID",
            MediaKind::Unsupported => "???",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Feed {
    pub stories: Vec<StorySummary>,
}

impl Feed {
    /// Parse a feed embedded by the server. Entries with an empty media url
    /// can't be opened and are dropped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut feed: Feed = serde_json::from_str(json)?;
        feed.stories.retain(|s| !s.media_url.trim().is_empty());
        Ok(feed)
    }

    pub fn demo() -> Self {
        Self {
            stories: vec![
                StorySummary::new("stories/sunrise.jpg", "alice"),
                StorySummary::new("stories/skate.MP4", "bob"),
                StorySummary::new("stories/menu.pdf", "carol"),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod story_tests {
        use super::*;

        #[test]
        fn badge_follows_media_kind() {
            assert_eq!(StorySummary::new("a.png", "x").badge(), "IMG");
            assert_eq!(StorySummary::new("a.AVI", "x").badge(), "VID");
            assert_eq!(StorySummary::new("a.txt", "x").badge(), "???");
        }

        #[test]
        fn caption_is_optional_in_json() {
            let story: StorySummary =
                serde_json::from_str(r#"{"media_url": "a.gif", "username": "dana"}"#).unwrap();
            assert_eq!(story, StorySummary::new("a.gif", "dana"));
        }

        #[test]
        fn caption_omitted_when_serializing_none() {
            let json = serde_json::to_string(&StorySummary::new("a.gif", "dana")).unwrap();
            assert!(!json.contains("caption"));
        }
    }

    mod feed_tests {
        use super::*;

        #[test]
        fn parses_embedded_feed() {
            let feed = Feed::from_json(
                r#"{"stories": [
                    {"media_url": "a.png", "username": "alice", "caption": "hi"},
                    {"media_url": "b.mov", "username": "bob"}
                ]}"#,
            )
            .unwrap();
            assert_eq!(feed.stories.len(), 2);
            assert_eq!(feed.stories[0].caption.as_deref(), Some("hi"));
            assert_eq!(feed.stories[1].kind(), MediaKind::Video);
        }

        #[test]
        fn drops_entries_without_media() {
            let feed = Feed::from_json(
                r#"{"stories": [{"media_url": " ", "username": "ghost"}, {"media_url": "a.png", "username": "alice"}]}"#,
            )
            .unwrap();
            assert_eq!(feed.stories, vec![StorySummary::new("a.png", "alice")]);
        }

        #[test]
        fn rejects_malformed_feed() {
            assert!(Feed::from_json("[]").is_err());
        }

        #[test]
        fn demo_covers_every_kind() {
            let kinds: Vec<MediaKind> = Feed::demo().stories.iter().map(|s| s.kind()).collect();
            assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Video, MediaKind::Unsupported]);
        }

        #[test]
        fn default_is_empty() {
            assert!(Feed::default().is_empty());
        }
    }
}
