//! Catalog model tests: JSON shapes as supplied by the content CRUD layer.

use medlearn_access::models::{Course, SectionBody, Video};

#[test]
fn video_deserializes_from_catalog_json() {
    let video: Video = serde_json::from_str(
        r#"{
            "id": "v1",
            "title": "Cardiac cycle",
            "sourceUrl": "https://cdn.test/v1.m3u8",
            "locked": true,
            "price": 9900
        }"#,
    )
    .unwrap();

    assert_eq!(video.id, "v1");
    assert!(video.locked);
    assert_eq!(video.price, 9900);
}

#[test]
fn missing_lock_flag_defaults_to_unlocked() {
    // Content is open unless explicitly marked premium; no randomized
    // placeholder behavior.
    let video: Video = serde_json::from_str(
        r#"{"id": "v1", "title": "t", "sourceUrl": "u"}"#,
    )
    .unwrap();

    assert!(!video.locked);
    assert_eq!(video.price, 0);
}

#[test]
fn course_sections_deserialize_with_section_type_tag() {
    let course: Course = serde_json::from_str(
        r#"{
            "id": "c1",
            "title": "Cardiology basics",
            "locked": true,
            "price": 49900,
            "sections": [
                {
                    "id": "c1-intro",
                    "title": "The cardiac cycle",
                    "locked": true,
                    "price": 9900,
                    "sectionType": "video",
                    "video": {"id": "c1-v1", "title": "t", "sourceUrl": "u"}
                },
                {
                    "id": "c1-quiz",
                    "title": "Checkpoint quiz",
                    "sectionType": "quiz",
                    "questions": [
                        {"prompt": "?", "options": ["a", "b"], "correctOption": 1}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(course.sections.len(), 2);
    match &course.sections[0].body {
        SectionBody::Video { video } => assert_eq!(video.id, "c1-v1"),
        SectionBody::Quiz { .. } => panic!("expected a video section"),
    }
    match &course.sections[1].body {
        SectionBody::Quiz { questions } => {
            assert_eq!(questions.len(), 1);
            assert_eq!(questions[0].correct_option, 1);
        }
        SectionBody::Video { .. } => panic!("expected a quiz section"),
    }
    // The quiz section omitted the lock flag: deterministic default.
    assert!(!course.sections[1].locked);
}

#[test]
fn verification_request_serializes_with_camel_case_keys() {
    use medlearn_access::models::{ContentKind, VerificationRequest};

    let request = VerificationRequest {
        order_id: "o1".to_string(),
        payment_id: "p1".to_string(),
        signature: "s1".to_string(),
        item_type: ContentKind::Video,
        item_id: "v1".to_string(),
        amount: 99,
    };
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["orderId"], "o1");
    assert_eq!(json["paymentId"], "p1");
    assert_eq!(json["signature"], "s1");
    assert_eq!(json["itemType"], "video");
    assert_eq!(json["itemId"], "v1");
    assert_eq!(json["amount"], 99);
}
