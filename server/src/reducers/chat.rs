//! Room chat. One reducer; history retention is enforced on write.

use crate::authority::require_player;
use crate::schema::*;
use crate::utils::now_micros;
use shared::constants::CHAT_MAX_LEN;
use spacetimedb::{ReducerContext, Table};

#[spacetimedb::reducer]
pub fn send_chat(ctx: &ReducerContext, text: String) -> Result<(), String> {
    let player = require_player(ctx)?;

    let text = text.trim();
    if text.is_empty() {
        return Err("Message is empty".into());
    }
    if text.len() > CHAT_MAX_LEN {
        return Err("Message is too long".into());
    }

    let sender_name = if player.name.is_empty() {
        "Anonymous".to_string()
    } else {
        player.name.clone()
    };

    ctx.db.chat_message().insert(ChatMessage {
        id: 0,
        sender: ctx.sender,
        sender_name,
        text: text.to_string(),
        sent_at: now_micros(ctx),
    });

    trim_history(ctx);
    Ok(())
}

/// Drops the oldest messages beyond the configured cap.
fn trim_history(ctx: &ReducerContext) {
    let cap = ctx
        .db
        .game_config()
        .id()
        .find(1)
        .map(|config| config.chat_history_cap)
        .unwrap_or(shared::constants::CHAT_HISTORY_CAP);

    let count = ctx.db.chat_message().count();
    if count <= cap {
        return;
    }

    let mut messages: Vec<ChatMessage> = ctx.db.chat_message().iter().collect();
    messages.sort_by_key(|m| m.id);

    for message in messages.into_iter().take((count - cap) as usize) {
        ctx.db.chat_message().delete(message);
    }
}
