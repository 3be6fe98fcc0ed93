use spacetimedb::*;

/// Room chat history, trimmed to the configured cap oldest-first.
#[table(name = chat_message, public)]
pub struct ChatMessage {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub sender: Identity,

    /// Name snapshot at send time, so renames don't rewrite history.
    pub sender_name: String,

    pub text: String,

    /// Micros since the Unix epoch.
    pub sent_at: i64,
}
