/// Prompt assembly for notional machine evaluation.
///
/// The prompt embeds three documents verbatim, each between literal start/end markers, so
/// the model can tell the machine description, the marking criteria and the form apart.
use nm_common::openai::Message;

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant specialized in evaluating educational tools for computer science.";

pub const NM_START: &str = "--- NM START ---";
pub const NM_END: &str = "--- NM END ---";
pub const CRITERIA_START: &str = "--- CRITERIA START ---";
pub const CRITERIA_END: &str = "--- CRITERIA END ---";
pub const TEMPLATE_START: &str = "--- EVALUATION FORM TEMPLATE START ---";
pub const TEMPLATE_END: &str = "--- EVALUATION FORM TEMPLATE END ---";

pub fn build_prompt(nm_content: &str, criteria: &str, template: &str) -> String {
    format!(
        r#"
You are an expert in computer science education. Your task is to evaluate a "notional machine" (an analogy or representation for a programming concept) based on a given set of criteria.

Here is the notional machine description:
{NM_START}
{nm_content}
{NM_END}

Here is the marking criteria:
{CRITERIA_START}
{criteria}
{CRITERIA_END}

And here is the evaluation form you need to fill out. Please provide a mark and a reason for each section based on the criteria.
{TEMPLATE_START}
{template}
{TEMPLATE_END}

Please fill out the evaluation form with your assessment.
"#
    )
}

/// System persona followed by the user prompt.
pub fn build_messages(prompt: String) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in prompt"))
    }

    #[test]
    fn documents_are_framed_in_order() {
        let prompt = build_prompt(
            "Array as Clothesline",
            "Part A - teaching goal achieved",
            "# Mark of A(i):",
        );

        let order = [
            "You are an expert in computer science education.",
            NM_START,
            "Array as Clothesline",
            NM_END,
            CRITERIA_START,
            "Part A - teaching goal achieved",
            CRITERIA_END,
            "Please provide a mark and a reason for each section",
            TEMPLATE_START,
            "# Mark of A(i):",
            TEMPLATE_END,
            "Please fill out the evaluation form with your assessment.",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&prompt, n)).collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "prompt sections out of order: {positions:?}"
        );
    }

    #[test]
    fn content_is_embedded_verbatim() {
        let nm = "line one\n  indented {braces} stay\nline three";
        let prompt = build_prompt(nm, "", "");
        assert!(prompt.contains(&format!("{NM_START}\n{nm}\n{NM_END}")));
        assert!(prompt.contains(&format!("{CRITERIA_START}\n\n{CRITERIA_END}")));
    }

    #[test]
    fn messages_are_system_then_user() {
        let messages = build_messages("the prompt".to_string());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "the prompt");
    }
}
