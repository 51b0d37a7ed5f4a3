// Envelope of the events other services publish on Kafka. The topic is the event type.
//
// {"data": {"event_id": "...", "type": "auth.user.verified", "occurred_on": "...",
//           "attributes": {"aggregate_id": "...", "user_id": "...", ...}}}

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntegrationEnvelope<TAttributes> {
    pub data: IntegrationEvent<TAttributes>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntegrationEvent<TAttributes> {
    pub event_id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub occurred_on: Option<String>,
    pub attributes: TAttributes,
}

impl<TAttributes> IntegrationEnvelope<TAttributes>
where
    TAttributes: for<'de> Deserialize<'de>,
{
    pub fn parse(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}
