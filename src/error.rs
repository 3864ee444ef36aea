//! Typed failure values for the translation pipeline.
//!
//! The two local failure kinds (missing credential, non-textual reply) get
//! their own variants so callers can tell them apart; everything the remote
//! side reports is propagated as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(
        "Missing API credential\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or add it to a .env file in the working directory.",
        env_var = crate::settings::API_KEY_ENV
    )]
    MissingCredential,

    #[error("Unexpected response shape: reply content is not text")]
    UnexpectedResponseShape,

    #[error("API request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
