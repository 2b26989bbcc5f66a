//! # Customer Identifiers
//!
//! Anonymous customer-id synthesis for checkout without an account.
//!
//! Identifiers combine a millisecond timestamp with a random suffix:
//! `anon_<unix-millis>_<alphanumeric>`. Uniqueness is probabilistic, not
//! coordinated: two concurrent requests get distinct random suffixes, so
//! no central registry is needed.

use chrono::Utc;
use uuid::Uuid;

/// Length of the random suffix appended to anonymous ids.
const SUFFIX_LEN: usize = 12;

/// Synthesize an anonymous customer identifier.
///
/// The suffix is the leading hex of a v4 UUID, which keeps the id within
/// the `anon_<digits>_<alphanumeric>` shape the success page expects.
pub fn anonymous_customer_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("anon_{}_{}", millis, &suffix[..SUFFIX_LEN])
}
