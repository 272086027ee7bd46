use super::*;

/// What the contact form hands over once every field passed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact transport failed: {}", self.reason)
    }
}

impl StdError for TransportError {}

/// Reply of a transport: the outcome is delivered `latency_ms` after the
/// submit, on the page clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub latency_ms: i64,
    pub outcome: std::result::Result<(), TransportError>,
}

impl TransportReply {
    pub fn success() -> Self {
        Self {
            latency_ms: 0,
            outcome: Ok(()),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            latency_ms: 0,
            outcome: Err(TransportError::new(reason)),
        }
    }

    pub fn after(mut self, latency_ms: i64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

/// Delivery channel for contact submissions.
pub trait ContactTransport {
    fn send(&mut self, submission: &ContactSubmission) -> TransportReply;
}

impl<F> ContactTransport for F
where
    F: FnMut(&ContactSubmission) -> TransportReply,
{
    fn send(&mut self, submission: &ContactSubmission) -> TransportReply {
        self(submission)
    }
}

/// Transport that answers every submission with a fixed reply.
///
/// The default resolves immediately with success, which is how the site
/// behaves while no endpoint is wired in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTransport {
    reply: TransportReply,
}

impl SimulatedTransport {
    pub fn new(reply: TransportReply) -> Self {
        Self { reply }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(TransportReply::failure(reason))
    }

    pub fn with_latency(mut self, latency_ms: i64) -> Self {
        self.reply.latency_ms = latency_ms;
        self
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(TransportReply::success())
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&mut self, _submission: &ContactSubmission) -> TransportReply {
        self.reply.clone()
    }
}
