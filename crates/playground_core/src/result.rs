use serde::Deserialize;

use crate::Skill;

/// Structured payload returned by a skill endpoint.
///
/// Every field is optional; the renderer substitutes placeholders for
/// anything the backend leaves out.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Conversation(ConversationResult),
    Image(ImageResult),
    Summary(SummaryResult),
}

impl AnalysisResult {
    /// Interprets the `result` member of a success response for `skill`.
    pub fn from_payload(skill: Skill, payload: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match skill {
            Skill::Conversation => AnalysisResult::Conversation(serde_json::from_value(payload)?),
            Skill::Image => AnalysisResult::Image(serde_json::from_value(payload)?),
            Skill::Summarization => AnalysisResult::Summary(serde_json::from_value(payload)?),
        })
    }

    pub fn skill(&self) -> Skill {
        match self {
            AnalysisResult::Conversation(_) => Skill::Conversation,
            AnalysisResult::Image(_) => Skill::Image,
            AnalysisResult::Summary(_) => Skill::Summarization,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ConversationResult {
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub memory_context: Option<Vec<String>>,
    #[serde(default)]
    pub speaker_diarization: Option<Vec<SpeakerTrack>>,
    #[serde(default)]
    pub audio_duration: Option<f64>,
    #[serde(default)]
    pub num_speakers: Option<u32>,
}

/// All diarized segments attributed to one speaker, in time order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SpeakerTrack {
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub segments: Vec<SpeechSegment>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SpeechSegment {
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub end_time: f64,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ImageResult {
    #[serde(default)]
    pub image_properties: Option<ImageProperties>,
    #[serde(default)]
    pub brief_summary: Option<String>,
    #[serde(default)]
    pub detailed_analysis: Option<String>,
    #[serde(default)]
    pub extracted_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageProperties {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SummaryResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default)]
    pub word_count: Option<u64>,
    #[serde(default)]
    pub brief_summary: Option<String>,
    #[serde(default)]
    pub detailed_summary: Option<String>,
    #[serde(default)]
    pub key_entities: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub pages: Option<u64>,
}
