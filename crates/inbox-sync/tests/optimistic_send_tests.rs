//! End-to-end optimistic send flow: dispatch, append, poll confirmation.

use chat_core::{Direction, Message, MessageKind, PhoneKey, TemplateVars};
use chrono::{TimeZone, Utc};
use dispatcher::{send_one, NoOpSender};
use inbox_sync::InboxState;

fn server_message(id: &str, phone: &str, body: &str, direction: Direction) -> Message {
    Message {
        id: id.to_string(),
        phone_key: PhoneKey::normalize(phone),
        contact_name: None,
        body: body.to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
        direction,
        kind: MessageKind::derive(direction, None),
        avatar_url: None,
    }
}

fn vars() -> TemplateVars {
    TemplateVars {
        greeting: "Boa tarde".into(),
        name: "Maria".into(),
        date: "10/05/2024".into(),
        time: "14:00".into(),
    }
}

#[tokio::test]
async fn sent_message_lands_in_thread_and_survives_unconfirmed_polls() {
    let mut state = InboxState::new();
    state.adopt(
        vec![server_message("s1", "11999999999", "oi", Direction::Inbound)],
        &[],
    );
    state.select(Some(PhoneKey::normalize("11999999999")));

    let sent = send_one(&NoOpSender, "(11) 99999-9999", "{{greeting}} {{name}}!", &vars())
        .await
        .unwrap();
    assert!(sent.is_local());
    state.append_local(sent);

    // The optimistic message is visible in the open thread right away.
    let thread = state.thread();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[1].body, "Boa tarde Maria!");

    // A poll that does not yet carry the echo keeps the local twin.
    state.adopt(
        vec![server_message("s1", "11999999999", "oi", Direction::Inbound)],
        &[],
    );
    assert_eq!(state.thread().len(), 2);
    assert_eq!(state.pending().len(), 1);

    // The server echo arrives under its own id: confirmed, not duplicated.
    state.adopt(
        vec![
            server_message("s1", "11999999999", "oi", Direction::Inbound),
            server_message("s2", "11999999999", "Boa tarde Maria!", Direction::Outbound),
        ],
        &[],
    );
    assert_eq!(state.pending().len(), 0);
    let thread = state.thread();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[1].id, "s2");
}
