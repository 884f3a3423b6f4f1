use ssmlbase::chat::{IntentOutcome, IntentRequest};
use ssmlbase::ResponseCatalog;

use crate::run_intent;

#[test]
fn welcome_greets_then_lists_examples() {
    let (outcome, turns) = run_intent(&IntentRequest::new("Welcome", Default::default()));
    assert_eq!(outcome, IntentOutcome::Answered);
    assert_eq!(turns.len(), 2, "Expected greeting and examples list: {turns:?}");
    assert_eq!(
        turns[0],
        "Welcome! Ask me for an example of a SSML element. You can say \"give me an example of the prosody element\"."
    );
    assert_eq!(
        turns[1],
        "You can ask me about break, say-as, audio, paragraph, sub, prosody, emphasis, speed, volume, pitch, and layered."
    );
}

#[test]
fn fallback_apologizes_then_lists_examples() {
    let (outcome, turns) = run_intent(&IntentRequest::new("Fallback", Default::default()));
    assert_eq!(outcome, IntentOutcome::FellBack);
    let responses = ResponseCatalog::shared().responses();
    assert_eq!(
        turns,
        vec![
            responses.did_not_understand.clone(),
            responses.examples_list.clone()
        ]
    );
}

#[test]
fn examples_list_names_every_catalog_topic() {
    let catalog = ResponseCatalog::shared();
    let list = &catalog.responses().examples_list;
    for name in catalog.names() {
        assert!(list.contains(name), "{name} missing from {list}");
    }
    assert_eq!(list.matches(", and ").count(), 1);
}
