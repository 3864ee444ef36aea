use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "grokit")]
#[command(about = "Translate English text into Italian using the xAI API")]
#[command(version)]
pub struct Args {
    /// The English text to translate
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_message() {
        let args = Args::parse_from(["grokit", "Good morning"]);
        assert_eq!(args.msg, "Good morning");
    }

    #[test]
    fn test_message_is_required() {
        let result = Args::try_parse_from(["grokit"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_message_is_accepted() {
        // No constraints are enforced on the message content
        let args = Args::parse_from(["grokit", ""]);
        assert_eq!(args.msg, "");
    }
}
