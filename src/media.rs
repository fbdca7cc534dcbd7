/// Suffixes rendered as `<img>`.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];
/// Suffixes rendered as `<video controls>`.
pub const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".mov", ".avi"];
/// Text shown in place of media we can't play.
pub const UNSUPPORTED_MESSAGE: &str = "Unsupported format.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Unsupported,
}

impl MediaKind {
    /// Classify by suffix, ignoring case. The whole string is matched, so a
    /// trailing query or fragment makes the url unsupported.
    pub fn classify(url: &str) -> Self {
        let lower = url.to_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Unsupported
        }
    }

    /// Tag name of the node mounted for this kind.
    pub fn tag_name(&self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
            MediaKind::Unsupported => "p",
        }
    }
}

/// The single node mounted for a story, before it touches the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan<'a> {
    pub tag: &'static str,
    pub src: Option<&'a str>,
    pub controls: bool,
    pub text: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaReference {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaReference {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::classify(&url);
        Self { url, kind }
    }

    pub fn render_plan(&self) -> RenderPlan<'_> {
        let tag = self.kind.tag_name();
        match self.kind {
            MediaKind::Image => RenderPlan { tag, src: Some(&self.url), controls: false, text: None },
            MediaKind::Video => RenderPlan { tag, src: Some(&self.url), controls: true, text: None },
            MediaKind::Unsupported => RenderPlan {
                tag,
                src: None,
                controls: false,
                text: Some(UNSUPPORTED_MESSAGE),
            },
        }
    }
}
