use owghat_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_start_command_parsing() {
        let input = "/start";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Start);
    }

    #[test]
    fn test_start_command_with_bot_name() {
        let input = "/start@testbot";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Start);
    }

    #[test]
    fn test_unknown_command_does_not_parse() {
        let result = Command::parse("/weather", "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_city_text_does_not_parse() {
        let result = Command::parse("تهران", "testbot");
        assert!(result.is_err());
    }
}
