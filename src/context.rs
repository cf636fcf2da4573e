//! Request-scoped run context.
//!
//! Every log line emitted while processing a batch of activities carries the
//! batch's correlation id. The context is passed by reference into the drivers
//! instead of living in a global logger filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Correlation data for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    pub correlation_id: Uuid,
}

impl RunContext {
    /// Create a context with a fresh random correlation id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Create a context with a caller-provided correlation id, e.g. one
    /// received from an upstream request.
    pub fn with_id(correlation_id: Uuid) -> Self {
        Self { correlation_id }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Correlation ID: {}", self.correlation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contexts_are_distinct() {
        assert_ne!(RunContext::new(), RunContext::new());
    }

    #[test]
    fn test_context_serializes_as_json() {
        let ctx = RunContext::with_id(Uuid::nil());
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, r#"{"correlation_id":"00000000-0000-0000-0000-000000000000"}"#);

        let back: RunContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }

    #[test]
    fn test_display_includes_id() {
        let id = Uuid::nil();
        let ctx = RunContext::with_id(id);
        assert_eq!(
            ctx.to_string(),
            "Correlation ID: 00000000-0000-0000-0000-000000000000"
        );
    }
}
