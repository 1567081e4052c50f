//! Canned-reply chat through `App`.

mod common;

use common::{test_config, Harness, UNREACHABLE_URL};
use ragdesk::ui::chat::{Author, FixedPicker, REPLIES};
use ragdesk::ui::events::AppEvent;
use std::time::Duration;

fn harness(delay_ms: u64, pick: usize) -> Harness {
    let mut config = test_config(UNREACHABLE_URL);
    config.chat.reply_delay_ms = delay_ms;
    let mut h = Harness::with_config(&config);
    h.app = h.app.with_picker(Box::new(FixedPicker(pick)));
    h
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reply_arrives_after_delay() {
    let mut h = harness(20, 3);

    h.app.edit_chat_draft("  The cat planned the picnic.  ".to_string());
    h.app.send_chat();
    assert!(h.app.chat().is_typing());
    assert_eq!(h.app.chat().draft(), "");
    let sent = h.app.chat().messages().last().unwrap();
    assert_eq!(sent.from, Author::You);
    assert_eq!(sent.text, "The cat planned the picnic.");

    assert!(h.pump_until(Duration::from_secs(2), |app| !app.chat().is_typing()));
    let reply = h.app.chat().messages().last().unwrap();
    assert_eq!(reply.from, Author::Bot);
    assert_eq!(reply.text, REPLIES[3]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blank_message_is_not_sent() {
    let mut h = harness(20, 0);

    h.app.edit_chat_draft("   ".to_string());
    h.app.send_chat();
    assert_eq!(h.app.chat().messages().len(), 1);
    assert!(!h.app.chat().is_typing());
    assert_eq!(h.pump_for(Duration::from_millis(100)), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn every_message_gets_a_reply() {
    let mut h = harness(20, 1);

    for text in ["one", "two"] {
        h.app.edit_chat_draft(text.to_string());
        h.app.send_chat();
    }
    assert_eq!(h.app.chat().pending_replies(), 2);

    assert!(h.pump_until(Duration::from_secs(2), |app| !app.chat().is_typing()));
    let bot_replies = h
        .app
        .chat()
        .messages()
        .iter()
        .filter(|m| m.from == Author::Bot)
        .count();
    // Greeting plus two replies.
    assert_eq!(bot_replies, 3);

    let ids: Vec<u64> = h.app.chat().messages().iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn teardown_cancels_pending_replies() {
    let mut h = harness(100, 0);

    h.app.edit_chat_draft("hello?".to_string());
    h.app.send_chat();
    h.app.teardown();
    assert!(!h.app.chat().is_typing());

    tokio::time::sleep(Duration::from_millis(300)).await;
    let late: Vec<AppEvent> = h.events.try_iter().collect();
    assert!(late
        .iter()
        .all(|event| !matches!(event, AppEvent::ChatReply { .. })));
    assert_eq!(h.app.chat().messages().len(), 2);
}
