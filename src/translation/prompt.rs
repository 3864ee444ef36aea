use super::client::ChatMessage;

/// The fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "Translate the following from English into Italian";

/// Builds the two-message conversation: the fixed instruction followed by
/// the caller's message, verbatim.
pub fn build_conversation(message: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(message),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_has_two_messages_in_order() {
        let messages = build_conversation("Good morning");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Good morning");
    }

    #[test]
    fn test_user_message_is_not_modified() {
        let messages = build_conversation("  spaced   input\n");
        assert_eq!(messages[1].content, "  spaced   input\n");
    }

    #[test]
    fn test_system_prompt_names_target_language() {
        assert!(SYSTEM_PROMPT.contains("Italian"));
    }
}
