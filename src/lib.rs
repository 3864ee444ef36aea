//! # grokit - English to Italian translation CLI
//!
//! `grokit` sends a single message to the xAI chat-completion API with a
//! fixed translation instruction and prints the reply.
//!
//! ## Quick Start
//!
//! ```bash
//! export XAI_API_KEY="your-api-key"
//! grokit "Good morning"
//! ```
//!
//! The API key can also live in a `.env` file in the working directory.
//!
//! There is deliberately no configuration surface beyond the credential and
//! the one positional argument: the model, endpoint, and target language are
//! fixed.

/// CLI argument definitions.
pub mod cli;

/// Typed failure values for the translation pipeline.
pub mod error;

/// Explicit runtime configuration (credential, endpoint, model).
pub mod settings;

/// Translation client and conversation construction.
pub mod translation;
