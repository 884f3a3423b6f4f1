use super::payload::{IntentRequest, ELEMENT_PARAM};
use super::IntentOutcome;
use crate::catalog::ResponseCatalog;
use crate::chat::Conversation;

pub fn welcome(
    catalog: &ResponseCatalog,
    _request: &IntentRequest,
    conv: &mut dyn Conversation,
) -> IntentOutcome {
    let responses = catalog.responses();
    conv.ask(responses.welcome.clone());
    conv.ask(responses.examples_list.clone());
    IntentOutcome::Answered
}

pub fn fallback(
    catalog: &ResponseCatalog,
    _request: &IntentRequest,
    conv: &mut dyn Conversation,
) -> IntentOutcome {
    let responses = catalog.responses();
    conv.ask(responses.did_not_understand.clone());
    conv.ask(responses.examples_list.clone());
    IntentOutcome::FellBack
}

/// Speaks the requested demo, or falls back when the topic is unset or unknown.
pub fn choose_example(
    catalog: &ResponseCatalog,
    request: &IntentRequest,
    conv: &mut dyn Conversation,
) -> IntentOutcome {
    let selected = request
        .text_param(ELEMENT_PARAM)
        .and_then(|topic| catalog.get(topic).map(|document| (topic, document)));
    let Some((topic, document)) = selected else {
        return fallback(catalog, request, conv);
    };
    conv.ask(catalog.responses().lead_to_example(topic));
    conv.ask(document.to_string());
    IntentOutcome::Answered
}
