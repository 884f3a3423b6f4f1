//! Plain-text responses spoken around the markup demos.

const ASK_EXAMPLE: &str = "Ask me for an example of a SSML element.";

/// Text responses derived from the catalog's topic set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteResponses {
    pub examples_list: String,
    pub did_not_understand: String,
    pub welcome: String,
}

impl CompleteResponses {
    pub fn for_topics<S: AsRef<str>>(topics: &[S]) -> Self {
        Self {
            examples_list: examples_list(topics),
            did_not_understand: format!("Sorry, I didn't understand you. {ASK_EXAMPLE}"),
            welcome: format!(
                "Welcome! {ASK_EXAMPLE} You can say \"give me an example of the prosody element\"."
            ),
        }
    }

    pub fn lead_to_example(&self, topic: &str) -> String {
        lead_to_example(topic)
    }
}

pub fn lead_to_example(topic: &str) -> String {
    format!("Ok, here's an SSML example of {topic}.")
}

/// Enumerates topics as `A, B, and C`; two topics read `A, and B`.
pub fn examples_list<S: AsRef<str>>(topics: &[S]) -> String {
    match topics {
        [] => "There are no examples to ask about yet.".into(),
        [only] => format!("You can ask me about {}.", only.as_ref()),
        [head @ .., last] => {
            let leading: Vec<&str> = head.iter().map(|topic| topic.as_ref()).collect();
            format!(
                "You can ask me about {}, and {}.",
                leading.join(", "),
                last.as_ref()
            )
        }
    }
}
