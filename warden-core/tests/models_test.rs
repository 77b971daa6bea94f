use std::collections::BTreeSet;

use serde_json::json;
use warden_core::models::*;

#[test]
fn severity_tier_serializes_lowercase() {
    assert_eq!(serde_json::to_value(SeverityTier::Zero).unwrap(), json!("zero"));
    assert_eq!(serde_json::to_value(SeverityTier::Low).unwrap(), json!("low"));
    assert_eq!(serde_json::to_value(SeverityTier::High).unwrap(), json!("high"));
    let parsed: SeverityTier = serde_json::from_value(json!("high")).unwrap();
    assert_eq!(parsed, SeverityTier::High);
}

#[test]
fn severity_tier_orders_by_escalation() {
    assert!(SeverityTier::Zero < SeverityTier::Low);
    assert!(SeverityTier::Low < SeverityTier::High);
    assert!(!SeverityTier::Zero.is_actionable());
    assert!(SeverityTier::High.is_actionable());
    assert_eq!("LOW".parse::<SeverityTier>().unwrap(), SeverityTier::Low);
    assert!("medium".parse::<SeverityTier>().is_err());
}

#[test]
fn part_of_speech_uses_universal_tags() {
    let token: Token = serde_json::from_value(json!({"text": "ugly", "pos": "ADJ"})).unwrap();
    assert_eq!(token.pos, PartOfSpeech::Adj);
    assert_eq!(
        serde_json::to_value(&token).unwrap(),
        json!({"text": "ugly", "pos": "ADJ"})
    );

    let unknown: Token = serde_json::from_value(json!({"text": "?", "pos": "WHAT"})).unwrap();
    assert_eq!(unknown.pos, PartOfSpeech::X);
}

#[test]
fn entity_label_keeps_unknown_labels() {
    let entity: Entity =
        serde_json::from_value(json!({"text": "Friday", "label": "EVENT"})).unwrap();
    assert_eq!(entity.label, EntityLabel::Other("EVENT".into()));
    assert_eq!(serde_json::to_value(&entity.label).unwrap(), json!("EVENT"));
    assert!(Entity::person("Alex").is_person());
}

#[test]
fn incident_report_uses_camel_case_fields() {
    let report = IncidentReport {
        content_id: "p1".into(),
        incident_id: "i10000".into(),
        author_id: "u1".into(),
        content_type: ContentType::Post,
        severity_level: SeverityTier::High,
        status: IncidentStatus::PendingReview,
    };
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "contentId": "p1",
            "incidentId": "i10000",
            "authorId": "u1",
            "contentType": "post",
            "severityLevel": "high",
            "status": "pending review"
        })
    );
}

#[test]
fn unspecified_content_type_serializes_as_sentinel() {
    assert_eq!(
        serde_json::to_value(ContentType::Unspecified).unwrap(),
        json!("Unspecified")
    );
    assert_eq!(ContentType::parse("comment"), Some(ContentType::Comment));
    assert_eq!(ContentType::parse("tweet"), None);
    assert_eq!(ContentType::Message.id_field(), Some("message_id"));
}

#[test]
fn empty_validation_record_is_maximally_neutral() {
    let record = ValidationRecord::empty();
    assert_eq!(record.sentiment_summary, SentimentSummary::new(0.0, 0.0, 1.0));
    assert_eq!(record.total_negative, 0.0);
    assert_eq!(record.sentiment_balance(), 0.0);
    assert!(record.is_signal_free());
}

#[test]
fn flagged_entities_are_a_set() {
    let mut record = ValidationRecord::empty();
    record.flagged_entities = BTreeSet::from(["Alex".to_string(), "Alex".to_string()]);
    assert_eq!(record.flagged_count(), 1);
    assert!(!record.is_signal_free());
}

#[test]
fn annotation_joins_token_texts() {
    let annotation = Annotation::new(
        vec![
            Token::new("you", PartOfSpeech::Pron),
            Token::new("are", PartOfSpeech::Aux),
            Token::new("kind", PartOfSpeech::Adj),
        ],
        vec![],
    );
    assert_eq!(annotation.joined_text(), "you are kind");
}

// ── Properties ──

mod properties {
    use proptest::prelude::*;
    use warden_core::models::*;

    fn content_type() -> impl Strategy<Value = ContentType> {
        prop_oneof![
            Just(ContentType::Post),
            Just(ContentType::Message),
            Just(ContentType::Comment),
            Just(ContentType::Unspecified),
        ]
    }

    fn status() -> impl Strategy<Value = IncidentStatus> {
        prop_oneof![
            Just(IncidentStatus::PendingReview),
            Just(IncidentStatus::UnderReview),
            Just(IncidentStatus::Resolved),
            Just(IncidentStatus::Dismissed),
        ]
    }

    fn tier() -> impl Strategy<Value = SeverityTier> {
        prop_oneof![
            Just(SeverityTier::Zero),
            Just(SeverityTier::Low),
            Just(SeverityTier::High),
        ]
    }

    proptest! {
        #[test]
        fn incident_report_json_has_exactly_the_wire_fields(
            content_id in "\\PC{0,16}",
            incident_id in "i[0-9]{5,8}",
            author_id in "\\PC{0,16}",
            content_type in content_type(),
            severity_level in tier(),
            status in status(),
        ) {
            let report = IncidentReport {
                content_id,
                incident_id,
                author_id,
                content_type,
                severity_level,
                status,
            };
            let value = serde_json::to_value(&report).unwrap();
            let object = value.as_object().unwrap();

            let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
            keys.sort_unstable();
            let expected = [
                "authorId",
                "contentId",
                "contentType",
                "incidentId",
                "severityLevel",
                "status",
            ];
            prop_assert_eq!(keys, expected.to_vec());
            prop_assert_eq!(object["severityLevel"].as_str(), Some(severity_level.as_str()));
            prop_assert_eq!(object["status"].as_str(), Some(status.as_str()));
            prop_assert_eq!(object["contentType"].as_str(), Some(content_type.as_str()));

            let back: IncidentReport = serde_json::from_value(value).unwrap();
            prop_assert_eq!(back, report);
        }

        #[test]
        fn content_meta_survives_json(
            content_id in proptest::option::of("\\PC{1,12}"),
            author_id in proptest::option::of("[0-9]{1,6}"),
            content_type in proptest::option::of(content_type()),
        ) {
            let meta = ContentMeta { content_id, author_id, content_type };
            let json = serde_json::to_string(&meta).unwrap();
            let back: ContentMeta = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, meta);
        }

        #[test]
        fn known_content_types_parse_from_their_names(content_type in content_type()) {
            let parsed = ContentType::parse(content_type.as_str());
            if content_type == ContentType::Unspecified {
                prop_assert_eq!(parsed, None);
            } else {
                prop_assert_eq!(parsed, Some(content_type));
            }
        }
    }
}
