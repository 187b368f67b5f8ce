use crate::InputMode;

/// One accepted upload type: a MIME type and the extensions that map to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedType {
    pub mime: &'static str,
    pub extensions: &'static [&'static str],
}

const AUDIO_TYPES: &[AcceptedType] = &[
    AcceptedType { mime: "audio/wav", extensions: &["wav"] },
    AcceptedType { mime: "audio/mpeg", extensions: &["mp3"] },
    AcceptedType { mime: "audio/mp4", extensions: &["m4a"] },
    AcceptedType { mime: "audio/ogg", extensions: &["ogg"] },
    AcceptedType { mime: "audio/flac", extensions: &["flac"] },
];

const IMAGE_TYPES: &[AcceptedType] = &[
    AcceptedType { mime: "image/png", extensions: &["png"] },
    AcceptedType { mime: "image/jpeg", extensions: &["jpg", "jpeg"] },
    AcceptedType { mime: "image/gif", extensions: &["gif"] },
    AcceptedType { mime: "image/bmp", extensions: &["bmp"] },
    AcceptedType { mime: "image/webp", extensions: &["webp"] },
];

const DOCUMENT_TYPES: &[AcceptedType] = &[
    AcceptedType { mime: "application/pdf", extensions: &["pdf"] },
    AcceptedType { mime: "application/msword", extensions: &["doc"] },
    AcceptedType {
        mime: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        extensions: &["docx"],
    },
    AcceptedType { mime: "text/plain", extensions: &["txt"] },
];

/// The three analysis workflows offered on the dashboard.
///
/// Everything that differs between the skill screens lives here so the
/// workflow itself stays generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Skill {
    Conversation,
    Image,
    Summarization,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::Conversation, Skill::Image, Skill::Summarization];

    /// Endpoint segment appended to the API base.
    pub fn endpoint(self) -> &'static str {
        match self {
            Skill::Conversation => "conversation",
            Skill::Image => "image",
            Skill::Summarization => "summarize",
        }
    }

    /// Multipart form field carrying the uploaded file.
    pub fn field_name(self) -> &'static str {
        match self {
            Skill::Conversation => "audio",
            Skill::Image => "image",
            Skill::Summarization => "document",
        }
    }

    pub fn route_path(self) -> &'static str {
        match self {
            Skill::Conversation => "/conversation",
            Skill::Image => "/image",
            Skill::Summarization => "/summarize",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Skill::Conversation => "Conversation Analysis",
            Skill::Image => "Image Analysis",
            Skill::Summarization => "Document Summarization",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Skill::Conversation => {
                "Upload audio files to convert speech to text with speaker diarization for up to 2 speakers"
            }
            Skill::Image => {
                "Upload images to generate detailed AI-powered descriptions and extract text"
            }
            Skill::Summarization => {
                "Upload documents (PDF, DOC) or provide URLs to get concise summaries"
            }
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            Skill::Conversation => &["Speech-to-Text", "Speaker Diarization", "Conversation Timeline"],
            Skill::Image => &["Detailed Descriptions", "Object Detection", "Text Extraction"],
            Skill::Summarization => &["PDF/DOC Support", "URL Summarization", "Key Entity Extraction"],
        }
    }

    pub fn accepted_types(self) -> &'static [AcceptedType] {
        match self {
            Skill::Conversation => AUDIO_TYPES,
            Skill::Image => IMAGE_TYPES,
            Skill::Summarization => DOCUMENT_TYPES,
        }
    }

    /// Human readable list of accepted formats, e.g. `WAV, MP3`.
    pub fn formats_hint(self) -> String {
        self.accepted_types()
            .iter()
            .flat_map(|accepted| accepted.extensions.iter())
            .map(|ext| ext.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Client-side allow-list check on the file name's extension.
    pub fn accepts(self, file_name: &str) -> bool {
        match extension_of(file_name) {
            Some(ext) => self
                .accepted_types()
                .iter()
                .any(|accepted| accepted.extensions.contains(&ext.as_str())),
            None => false,
        }
    }

    /// Only the summarization screen takes a URL instead of a file.
    pub fn supports_url(self) -> bool {
        matches!(self, Skill::Summarization)
    }

    pub fn empty_input_message(self, mode: InputMode) -> &'static str {
        match (self, mode) {
            (Skill::Summarization, InputMode::Url) => "Please enter a URL first",
            (Skill::Summarization, InputMode::File) => "Please upload a document first",
            (Skill::Image, _) => "Please upload an image first",
            (Skill::Conversation, _) => "Please upload an audio file first",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Skill::Conversation => "Audio analysis completed successfully!",
            Skill::Image => "Image analysis completed successfully!",
            Skill::Summarization => "Content summarized successfully!",
        }
    }

    /// Message shown when the backend does not provide one.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Skill::Conversation => "Failed to analyze audio",
            Skill::Image => "Failed to analyze image",
            Skill::Summarization => "Failed to summarize content",
        }
    }

    /// Looks up the declared MIME type for a file name across every skill.
    pub fn mime_for(file_name: &str) -> Option<&'static str> {
        let ext = extension_of(file_name)?;
        Skill::ALL
            .iter()
            .flat_map(|skill| skill.accepted_types().iter())
            .find(|accepted| accepted.extensions.contains(&ext.as_str()))
            .map(|accepted| accepted.mime)
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_lists_match_extensions_case_insensitively() {
        assert!(Skill::Conversation.accepts("call.MP3"));
        assert!(Skill::Conversation.accepts("call.flac"));
        assert!(!Skill::Conversation.accepts("call.mp4"));
        assert!(Skill::Image.accepts("photo.JPeG"));
        assert!(!Skill::Image.accepts("photo.tiff"));
        assert!(Skill::Summarization.accepts("report.final.docx"));
        assert!(!Skill::Summarization.accepts("report"));
        assert!(!Skill::Summarization.accepts("report."));
    }

    #[test]
    fn mime_lookup_spans_all_skills() {
        assert_eq!(Skill::mime_for("a.m4a"), Some("audio/mp4"));
        assert_eq!(Skill::mime_for("a.jpg"), Some("image/jpeg"));
        assert_eq!(Skill::mime_for("a.txt"), Some("text/plain"));
        assert_eq!(Skill::mime_for("a.exe"), None);
    }

    #[test]
    fn formats_hint_lists_every_extension() {
        assert_eq!(Skill::Conversation.formats_hint(), "WAV, MP3, M4A, OGG, FLAC");
        assert_eq!(Skill::Summarization.formats_hint(), "PDF, DOC, DOCX, TXT");
    }
}
