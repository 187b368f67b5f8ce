use playground_core::{
    render, AnalysisResult, ConversationResult, DocumentMetadata, EntityCategory, ImagePane,
    ImageProperties, ImageResult, ResultBody, ResultPane, SpeakerTrack, SpeechSegment,
    SummaryContent, SummaryPane, SummaryResult,
};
use pretty_assertions::assert_eq;

#[test]
fn conversation_segments_are_time_formatted() {
    let result = AnalysisResult::Conversation(ConversationResult {
        transcription: Some("hello there".to_string()),
        memory_context: Some(vec!["earlier call".to_string()]),
        speaker_diarization: Some(vec![
            SpeakerTrack {
                speaker: Some("Speaker 1".to_string()),
                segments: vec![SpeechSegment {
                    start_time: 0.0,
                    end_time: 125.4,
                    text: Some("hello".to_string()),
                }],
            },
            SpeakerTrack {
                speaker: None,
                segments: vec![SpeechSegment {
                    start_time: 125.4,
                    end_time: 130.0,
                    text: None,
                }],
            },
        ]),
        ..ConversationResult::default()
    });

    let view = render(&result, ResultPane::Transcript);
    assert!(view.tabs.is_empty());
    let ResultBody::Conversation(conversation) = view.body else {
        panic!("expected conversation body");
    };
    assert_eq!(conversation.transcription, "hello there");
    assert_eq!(conversation.memory_context, vec!["earlier call".to_string()]);
    assert_eq!(
        conversation.speaker_header.as_deref(),
        Some("Identified 2 speaker(s) in the conversation")
    );
    assert_eq!(conversation.speakers[0].segments[0].time_range, "0:00 - 2:05");
    assert_eq!(conversation.speakers[0].segment_count, "1 segment(s)");
    assert_eq!(conversation.speakers[1].label, "Speaker 2");
    assert_eq!(conversation.speakers[1].segments[0].text, "[No speech detected]");
}

#[test]
fn empty_conversation_uses_placeholders() {
    let view = render(
        &AnalysisResult::Conversation(ConversationResult::default()),
        ResultPane::Transcript,
    );
    let ResultBody::Conversation(conversation) = view.body else {
        panic!("expected conversation body");
    };
    assert_eq!(conversation.transcription, "No transcription available");
    assert!(conversation.speaker_header.is_none());
    assert!(conversation.speakers.is_empty());
}

#[test]
fn image_tabs_select_the_matching_text() {
    let result = AnalysisResult::Image(ImageResult {
        image_properties: Some(ImageProperties {
            size: Some("640x480".to_string()),
            format: Some("PNG".to_string()),
            mode: None,
        }),
        brief_summary: Some("A cat".to_string()),
        detailed_analysis: None,
        extracted_text: Some(String::new()),
    });

    let summary = render(&result, ResultPane::Image(ImagePane::Summary));
    assert_eq!(summary.tabs.len(), 3);
    assert!(summary.tabs[0].selected);
    let ResultBody::Image(image) = summary.body else {
        panic!("expected image body");
    };
    assert_eq!(image.properties, vec!["Size: 640x480", "Format: PNG"]);
    assert_eq!(image.text, "A cat");

    let ResultBody::Image(detailed) = render(&result, ResultPane::Image(ImagePane::Detailed)).body
    else {
        panic!("expected image body");
    };
    assert_eq!(detailed.text, "No detailed analysis available");

    let ResultBody::Image(text) =
        render(&result, ResultPane::Image(ImagePane::TextExtraction)).body
    else {
        panic!("expected image body");
    };
    assert_eq!(text.text, "No text found in the image");
}

#[test]
fn mismatched_pane_falls_back_to_the_first_tab() {
    let result = AnalysisResult::Image(ImageResult::default());
    let view = render(&result, ResultPane::Summary(SummaryPane::KeyEntities));
    assert!(view.tabs[0].selected);
    assert!(matches!(view.body, ResultBody::Image(ref image) if image.pane == ImagePane::Summary));
}

#[test]
fn summary_chips_and_entities() {
    let result = AnalysisResult::Summary(SummaryResult {
        title: Some("Quarterly report".to_string()),
        url: Some("https://example.com/q".to_string()),
        metadata: Some(DocumentMetadata {
            kind: Some("PDF".to_string()),
            pages: Some(12),
        }),
        word_count: Some(15234),
        brief_summary: None,
        detailed_summary: Some("Long form".to_string()),
        key_entities: Some("People:\nAlice\nBob\nOrganizations: Acme".to_string()),
    });

    let brief = render(&result, ResultPane::Summary(SummaryPane::Brief));
    let ResultBody::Summary(brief) = brief.body else {
        panic!("expected summary body");
    };
    assert_eq!(
        brief.chips,
        vec![
            "Title: Quarterly report",
            "https://example.com/q",
            "Type: PDF",
            "Pages: 12",
            "Words: 15,234",
        ]
    );
    assert_eq!(
        brief.content,
        SummaryContent::Text("No brief summary available".to_string())
    );

    let entities = render(&result, ResultPane::Summary(SummaryPane::KeyEntities));
    assert!(entities.tabs[2].selected);
    let ResultBody::Summary(entities) = entities.body else {
        panic!("expected summary body");
    };
    assert_eq!(
        entities.content,
        SummaryContent::Entities(vec![
            EntityCategory {
                name: "People".to_string(),
                items: vec!["Alice".to_string(), "Bob".to_string()],
            },
            EntityCategory {
                name: "Organizations".to_string(),
                items: vec!["Acme".to_string()],
            },
        ])
    );
}

#[test]
fn missing_entities_render_placeholder() {
    let result = AnalysisResult::Summary(SummaryResult::default());
    let ResultBody::Summary(view) =
        render(&result, ResultPane::Summary(SummaryPane::KeyEntities)).body
    else {
        panic!("expected summary body");
    };
    assert!(view.chips.is_empty());
    assert_eq!(
        view.content,
        SummaryContent::Text("No key entities extracted".to_string())
    );
}
