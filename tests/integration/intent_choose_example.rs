use serde_json::{json, Map};
use ssmlbase::chat::{IntentOutcome, IntentRequest, ELEMENT_PARAM};
use ssmlbase::ResponseCatalog;

use crate::run_intent;

#[test]
fn chosen_topic_is_introduced_then_spoken() {
    let request = IntentRequest::with_params("Choose Example", [(ELEMENT_PARAM, "audio")]);
    let (outcome, turns) = run_intent(&request);
    assert_eq!(outcome, IntentOutcome::Answered);
    assert_eq!(turns.len(), 2, "Expected lead-in and document: {turns:?}");
    assert_eq!(turns[0], "Ok, here's an SSML example of audio.");
    assert_eq!(Some(turns[1].as_str()), ResponseCatalog::shared().get("audio"));
    assert!(turns[1].starts_with("<speak>\n  <audio src="));
}

#[test]
fn missing_topic_matches_fallback() {
    let (_, fallback) = run_intent(&IntentRequest::new("Fallback", Map::new()));

    let (outcome, absent) = run_intent(&IntentRequest::new("Choose Example", Map::new()));
    assert_eq!(outcome, IntentOutcome::FellBack);
    assert_eq!(absent, fallback);

    let mut parameters = Map::new();
    parameters.insert(ELEMENT_PARAM.into(), json!(null));
    let (_, null_topic) = run_intent(&IntentRequest::new("Choose Example", parameters));
    assert_eq!(null_topic, fallback);

    let (_, empty_topic) =
        run_intent(&IntentRequest::with_params("Choose Example", [(ELEMENT_PARAM, "")]));
    assert_eq!(empty_topic, fallback);
}

#[test]
fn unknown_topic_degrades_to_fallback() {
    let (_, fallback) = run_intent(&IntentRequest::new("Fallback", Map::new()));
    let request = IntentRequest::with_params("Choose Example", [(ELEMENT_PARAM, "whisper")]);
    let (outcome, turns) = run_intent(&request);
    assert_eq!(outcome, IntentOutcome::FellBack);
    assert_eq!(turns, fallback);
}

#[test]
fn every_topic_can_be_chosen() {
    let catalog = ResponseCatalog::shared();
    for name in catalog.names() {
        let request = IntentRequest::with_params("Choose Example", [(ELEMENT_PARAM, name)]);
        let (outcome, turns) = run_intent(&request);
        assert_eq!(outcome, IntentOutcome::Answered, "{name}");
        assert_eq!(turns[0], format!("Ok, here's an SSML example of {name}."));
        assert_eq!(Some(turns[1].as_str()), catalog.get(name));
    }
}
