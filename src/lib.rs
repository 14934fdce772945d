/// Runtime configuration loading.
pub mod config;
/// Common error types: wiring and pipeline failures.
pub mod error;
/// Flexible logging (filters, console sink).
pub mod logging;
/// End-to-end wiring facade for the text-analysis topology.
pub mod pipeline;
/// Pub/Sub core: Broker, Subscriber, Notification.
pub mod pubsub;
/// Pipeline stages: source, sanitizer, counters, aggregator.
pub mod stages;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use self::config::Settings;
/// Operation errors.
pub use error::{PipelineError, WiringError};
/// Wiring facade.
pub use pipeline::Pipeline;
/// Pub/Sub API.
pub use pubsub::{Broker, FnSubscriber, Notification, Payload, RunId, Subscriber, TextSummary};
/// Stages and topic names.
pub use stages::{
    count_chars, count_words, sanitize, Aggregator, CharCountSink, FileSource, Sanitizer,
    WordCountSink, TOPIC_CHARS, TOPIC_CLEAN, TOPIC_RAW, TOPIC_SUMMARY, TOPIC_WORDS,
};
