use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use owghat_bot::bot::response::compose_schedule;
use owghat_bot::bot::router::{
    InboundMessage, MessageRouter, CITY_NOT_FOUND, GREETING, LOOKUP_FAILED,
};
use owghat_bot::error::ProviderError;
use owghat_bot::services::owghat::{CityRecord, PrayerTimesProvider, ProviderResult};
use owghat_bot::utils::datetime::format_clock;

enum StubBehavior {
    Found(CityRecord),
    NotFound,
    Fail,
}

/// Provider double that records how often it was called.
struct StubProvider {
    behavior: StubBehavior,
    calls: AtomicUsize,
}

impl StubProvider {
    fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrayerTimesProvider for StubProvider {
    async fn daily_times(&self, _city: &str) -> Result<ProviderResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Found(record) => Ok(ProviderResult::Found(record.clone())),
            StubBehavior::NotFound => Ok(ProviderResult::NotFound),
            StubBehavior::Fail => Err(ProviderError::Status(reqwest::StatusCode::BAD_GATEWAY)),
        }
    }
}

/// Router over a shared stub, so tests can inspect the stub afterwards.
fn router_with(behavior: StubBehavior) -> (MessageRouter<Arc<StubProvider>>, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider::new(behavior));
    (MessageRouter::new(provider.clone()), provider)
}

fn tehran_record() -> CityRecord {
    CityRecord {
        city: "تهران".to_string(),
        day: "۱۵".to_string(),
        month: "۶".to_string(),
        azan_sobh: "۰۵:۱۲".to_string(),
        toloe_aftab: "۰۶:۳۸".to_string(),
        azan_zohre: "۱۳:۰۴".to_string(),
        ghorob_aftab: "۱۹:۲۹".to_string(),
        azan_maghreb: "۱۹:۴۷".to_string(),
        nime_shabe_sharie: "۰۰:۲۱".to_string(),
    }
}

fn inbound(chat_id: i64, text: &str) -> InboundMessage {
    InboundMessage {
        chat_id,
        text: text.to_string(),
        received_at: 1_700_000_000,
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;

    #[tokio::test]
    async fn test_city_lookup_composes_full_schedule() {
        let (router, _) = router_with(StubBehavior::Found(tehran_record()));
        let msg = inbound(42, "تهران");

        let reply = router.route(&msg).await.unwrap();

        let expected_clock = format_clock(msg.received_at);
        let expected = compose_schedule(&tehran_record(), "شهریور", "15", &expected_clock);
        assert_eq!(reply.chat_id, 42);
        assert_eq!(reply.text, expected);
    }

    #[tokio::test]
    async fn test_city_lookup_calls_provider_exactly_once() {
        let (router, provider) = router_with(StubBehavior::Found(tehran_record()));

        let _ = router.route(&inbound(1, "تهران")).await;

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_city_gets_not_found_message() {
        let (router, _) = router_with(StubBehavior::NotFound);

        let reply = router.route(&inbound(7, "آتلانتیس")).await.unwrap();

        assert_eq!(reply.text, CITY_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_provider_failure_gets_generic_message_without_detail() {
        let (router, _) = router_with(StubBehavior::Fail);

        let reply = router.route(&inbound(7, "تهران")).await.unwrap();

        assert_eq!(reply.text, LOOKUP_FAILED);
        // The HTTP status must never leak to the chat
        assert!(!reply.text.contains("502"));
    }

    #[tokio::test]
    async fn test_out_of_range_month_gets_generic_message() {
        let mut record = tehran_record();
        record.month = "۱۳".to_string();
        let (router, _) = router_with(StubBehavior::Found(record));

        let reply = router.route(&inbound(7, "تهران")).await.unwrap();

        assert_eq!(reply.text, LOOKUP_FAILED);
    }

    #[tokio::test]
    async fn test_start_command_yields_greeting_without_provider_call() {
        let (router, provider) = router_with(StubBehavior::Fail);

        let reply = router.route(&inbound(3, "/start")).await.unwrap();

        assert_eq!(reply.text, GREETING);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_start_with_bot_suffix_also_greets() {
        let (router, _) = router_with(StubBehavior::Fail);

        let reply = router.route(&inbound(3, "/start@owghat_bot")).await.unwrap();

        assert_eq!(reply.text, GREETING);
    }

    #[tokio::test]
    async fn test_consecutive_starts_from_different_chats_are_independent() {
        let (router, _) = router_with(StubBehavior::NotFound);

        let first = router.route(&inbound(100, "/start")).await.unwrap();
        let second = router.route(&inbound(200, "/start")).await.unwrap();

        assert_eq!(first.chat_id, 100);
        assert_eq!(second.chat_id, 200);
        assert_eq!(first.text, GREETING);
        assert_eq!(second.text, GREETING);
    }

    #[tokio::test]
    async fn test_unknown_command_is_silently_ignored() {
        let (router, provider) = router_with(StubBehavior::Found(tehran_record()));

        let reply = router.route(&inbound(3, "/weather تهران")).await;

        assert!(reply.is_none());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed_before_routing() {
        let (router, _) = router_with(StubBehavior::NotFound);

        let reply = router.route(&inbound(3, "  /start  ")).await.unwrap();

        assert_eq!(reply.text, GREETING);
    }
}
