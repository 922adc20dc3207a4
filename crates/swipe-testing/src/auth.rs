//! Mock gateway identity for router-level tests.
//!
//! Services behind the gateway receive an `x-swipe-user-id` header injected
//! after authentication. In tests, `MockAuth` produces that header directly
//! so no real gateway or session is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use swipe_auth_types::identity::USER_ID_HEADER;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// Header name/value pair as the gateway would inject it.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        )
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let (name, value) = self.header();
        let mut map = HeaderMap::new();
        map.insert(name, value);
        map
    }
}
