pub mod message;

use std::sync::Arc;

use teloxide::{
    dispatching::{UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::bot::router::MessageRouter;
use crate::services::owghat::OwghatClient;

/// Result type shared by all dispatch endpoints.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

pub struct BotHandler {
    pub router: Arc<MessageRouter<OwghatClient>>,
}

impl BotHandler {
    pub fn new(router: MessageRouter<OwghatClient>) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        let router = self.router.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(message::command_handler),
            )
            // Unknown commands fail to parse above and land here, where the
            // router ignores them.
            .branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let router = router.clone();
                async move { message::city_handler(bot, msg, router).await }
            }))
    }
}
