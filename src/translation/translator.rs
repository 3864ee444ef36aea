use crate::error::TranslateError;
use crate::settings::Settings;

use super::client::{ChatCompletion, ChatRequest};
use super::prompt::build_conversation;

/// Requests are sent with deterministic sampling.
pub const TEMPERATURE: f32 = 0.0;

/// Translates `message` from English into Italian.
///
/// Fails with [`TranslateError::MissingCredential`] before any collaborator
/// call if `settings` carries no API key, and with
/// [`TranslateError::UnexpectedResponseShape`] if the reply content is not
/// text. The returned text is the reply verbatim, with no post-processing.
pub async fn translate<C: ChatCompletion>(
    chat: &C,
    settings: &Settings,
    message: &str,
) -> Result<String, TranslateError> {
    if !settings.has_credential() {
        return Err(TranslateError::MissingCredential);
    }

    let request = ChatRequest {
        model: settings.model.clone(),
        messages: build_conversation(message),
        temperature: TEMPERATURE,
        stop: None,
    };

    let reply = chat.complete(&request).await?;

    reply
        .content
        .as_str()
        .map(str::to_owned)
        .ok_or(TranslateError::UnexpectedResponseShape)
}
