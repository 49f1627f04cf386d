//! The message-to-response pipeline.
//!
//! Turns one inbound chat message into at most one reply: commands get a
//! static answer, anything else is treated as a city name and looked up
//! against the prayer-times provider. Each call is self-contained; no state
//! survives between messages and chats never share anything.

use tracing::{info, warn};

use crate::bot::response::compose_schedule;
use crate::services::owghat::{PrayerTimesProvider, ProviderResult};
use crate::utils::calendar::month_name;
use crate::utils::datetime::format_clock;
use crate::utils::numerals::to_ascii_digits;

/// Static reply to /start.
pub const GREETING: &str = "🌙 برای دریافت اوقات شرعی شهر خود لطفا نام شهر را وارد کنید.";
/// Reply when the provider does not recognize the city.
pub const CITY_NOT_FOUND: &str = "❌ شهر مورد نظر وجود ندارد!";
/// Generic reply for any provider failure; the cause is only logged.
pub const LOOKUP_FAILED: &str = "⚠️ مشکلی در دریافت اطلاعات پیش آمد!";

/// A chat message as delivered by the transport.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub text: String,
    /// Epoch seconds at which the transport received the message.
    pub received_at: i64,
}

/// A reply addressed back to the originating chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Routes inbound messages through the lookup pipeline.
///
/// The provider is injected so the router can be exercised in tests without
/// a live network.
pub struct MessageRouter<P> {
    provider: P,
}

impl<P: PrayerTimesProvider> MessageRouter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Produces the reply for one inbound message, or `None` when the
    /// message should be ignored.
    ///
    /// Command-prefixed text other than /start is deliberately left
    /// unanswered; that silence is existing behavior users rely on not to
    /// get error spam for stray slashes.
    pub async fn route(&self, msg: &InboundMessage) -> Option<OutboundMessage> {
        let text = msg.text.trim();

        if let Some(command) = text.strip_prefix('/') {
            if is_start_command(command) {
                return Some(OutboundMessage {
                    chat_id: msg.chat_id,
                    text: GREETING.to_string(),
                });
            }
            info!("Ignoring unknown command in chat {}", msg.chat_id);
            return None;
        }

        // Receipt time comes from the message itself, not the provider call.
        let clock = format_clock(msg.received_at);

        let reply = match self.provider.daily_times(text).await {
            Ok(ProviderResult::Found(record)) => {
                let day = to_ascii_digits(&record.day);
                match month_name(&record.month) {
                    Ok(month) => compose_schedule(&record, month, &day, &clock),
                    Err(e) => {
                        warn!(
                            "Bad provider record for city '{}' in chat {}: {}",
                            text, msg.chat_id, e
                        );
                        LOOKUP_FAILED.to_string()
                    }
                }
            }
            Ok(ProviderResult::NotFound) => CITY_NOT_FOUND.to_string(),
            Err(e) => {
                warn!(
                    "Provider lookup failed for city '{}' in chat {}: {}",
                    text, msg.chat_id, e
                );
                LOOKUP_FAILED.to_string()
            }
        };

        Some(OutboundMessage {
            chat_id: msg.chat_id,
            text: reply,
        })
    }
}

// Accepts "/start", "/start@botname", and "/start <anything>".
fn is_start_command(command: &str) -> bool {
    let name = command.split_whitespace().next().unwrap_or("");
    let name = name.split('@').next().unwrap_or(name);
    name == "start"
}
