use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Owghat bot commands:")]
pub enum Command {
    #[command(description = "Show how to ask for prayer times")]
    Start,
}
