//! Single-recipient send.

use chat_core::{apply_vars, Direction, Message, MessageKind, PhoneKey, TemplateVars,
    LOCAL_ID_PREFIX};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::DispatchError;
use crate::sender::MessageSender;

/// Send one message: normalize the recipient, substitute template
/// variables, send, and on declared success return the locally
/// synthesized `Sent` message for the caller to append optimistically.
///
/// The returned message carries a client-generated id; it stays in the
/// caller's pending set until a poll confirms the server recorded it.
pub async fn send_one<S>(
    sender: &S,
    phone_raw: &str,
    template: &str,
    vars: &TemplateVars,
) -> Result<Message, DispatchError>
where
    S: MessageSender + ?Sized,
{
    let recipient = PhoneKey::normalize(phone_raw);
    let body = apply_vars(template, vars);

    sender.send(&recipient, &body).await?;
    info!("Sent message to {}", recipient);

    Ok(local_message(recipient, body))
}

/// Synthesize the optimistic local twin of a just-sent message.
pub(crate) fn local_message(recipient: PhoneKey, body: String) -> Message {
    Message {
        id: format!("{LOCAL_ID_PREFIX}{}", Uuid::new_v4()),
        phone_key: recipient,
        contact_name: None,
        body,
        timestamp: Utc::now(),
        direction: Direction::Outbound,
        kind: MessageKind::Sent,
        avatar_url: None,
    }
}
