//! MQTT sink for price records.
//!
//! Two messages per run, both QoS 1 and not retained:
//!
//! | Topic | Payload |
//! |-------|---------|
//! | `<prefix>/<domain>/day-ahead` | JSON array of every record |
//! | `<prefix>/<domain>/current` | JSON object of the first record |
//!
//! `current` is skipped when there are no records. `<domain>` is the EIC
//! code of the zone.

use std::time::Duration;

use dayahead_core::{DomainCode, PriceRecord};
use rumqttc::{AsyncClient, Event, MqttOptions, Outgoing, Packet, QoS};
use thiserror::Error;

const CLIENT_ID_PREFIX: &str = "dayahead";
const CHANNEL_CAPACITY: usize = 10;
const KEEP_ALIVE_SECS: u64 = 5;
const MAX_PACKET_BYTES: usize = 1 << 20;

/// Failure while delivering messages to the broker.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to encode MQTT payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("MQTT client error: {0}")]
    Client(#[from] rumqttc::ClientError),

    #[error("MQTT connection error: {0}")]
    Connection(#[from] rumqttc::ConnectionError),

    #[error("broker did not acknowledge within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}

/// Where to connect and how long to wait for acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub timeout_ms: u64,
}

/// A topic and its JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MqttMessage {
    pub topic: String,
    pub payload: String,
}

/// Topic root for a zone; an empty prefix publishes directly under the code.
pub fn topic_root(prefix: &str, domain: &DomainCode) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        domain.as_str().to_owned()
    } else {
        format!("{prefix}/{domain}")
    }
}

/// Build the messages for one run.
pub fn build_messages(
    prefix: &str,
    domain: &DomainCode,
    records: &[PriceRecord],
) -> Result<Vec<MqttMessage>, PublishError> {
    let root = topic_root(prefix, domain);
    let mut messages = vec![MqttMessage {
        topic: format!("{root}/day-ahead"),
        payload: serde_json::to_string(records)?,
    }];

    if let Some(current) = records.first() {
        messages.push(MqttMessage {
            topic: format!("{root}/current"),
            payload: serde_json::to_string(current)?,
        });
    }

    Ok(messages)
}

/// Publish `messages` and wait until the broker has acknowledged all of them.
pub async fn publish(config: &BrokerConfig, messages: Vec<MqttMessage>) -> Result<(), PublishError> {
    let timeout_ms = config.timeout_ms;
    tokio::time::timeout(Duration::from_millis(timeout_ms), deliver(config, messages))
        .await
        .map_err(|_| PublishError::Timeout { timeout_ms })?
}

async fn deliver(config: &BrokerConfig, messages: Vec<MqttMessage>) -> Result<(), PublishError> {
    let client_id = format!("{CLIENT_ID_PREFIX}-{}", uuid::Uuid::new_v4().simple());
    let mut options = MqttOptions::new(client_id, config.host.as_str(), config.port);
    options
        .set_keep_alive(Duration::from_secs(KEEP_ALIVE_SECS))
        .set_max_packet_size(MAX_PACKET_BYTES, MAX_PACKET_BYTES);

    let (client, mut event_loop) = AsyncClient::new(options, CHANNEL_CAPACITY.max(messages.len()));

    let expected = messages.len();
    for message in messages {
        tracing::debug!(topic = %message.topic, bytes = message.payload.len(), "queueing MQTT message");
        client
            .publish(message.topic, QoS::AtLeastOnce, false, message.payload)
            .await?;
    }

    let mut acknowledged = 0;
    while acknowledged < expected {
        if let Event::Incoming(Packet::PubAck(_)) = event_loop.poll().await? {
            acknowledged += 1;
        }
    }

    client.disconnect().await?;
    loop {
        if let Event::Outgoing(Outgoing::Disconnect) = event_loop.poll().await? {
            break;
        }
    }

    tracing::info!(
        broker = %config.host,
        port = config.port,
        messages = expected,
        "published prices"
    );
    Ok(())
}
