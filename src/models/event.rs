use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    #[serde(default)]
    pub event: String,

    #[serde(default)]
    pub payload: Option<EventPayload>,

    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub id: Option<String>,
}

impl InboundEvent {
    /// The match identifier, when the event carries one.
    pub fn match_id(&self) -> Option<&str> {
        self.payload.as_ref()?.id.as_deref()
    }
}
