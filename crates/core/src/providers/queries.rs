//! GraphQL documents sent to the platform API.
//!
//! The event id is always passed as the `$eventId` variable.

/// Profile of the signed-in user.
pub const USER: &str = r#"
query {
  user {
    id
    firstName
    lastName
    login
    campus
    auditRatio
    totalUp
    totalDown
  }
}"#;

/// Platform-side XP total for one event.
pub const XP_SUM: &str = r#"
query XpSum($eventId: Int!) {
  transaction_aggregate(
    where: { _and: [{ type: { _eq: "xp" } }, { eventId: { _eq: $eventId } }] }
  ) {
    aggregate {
      sum {
        amount
      }
    }
  }
}"#;

/// XP transactions of one event, newest first.
pub const XP_TRANSACTIONS: &str = r#"
query XpTransactions($eventId: Int!) {
  transaction(
    order_by: [{ createdAt: desc }]
    where: { type: { _eq: "xp" }, eventId: { _eq: $eventId } }
  ) {
    path
    type
    createdAt
    amount
  }
}"#;

/// Every transaction of one event, any type.
pub const TYPED_TRANSACTIONS: &str = r#"
query TypedTransactions($eventId: Int!) {
  transaction(where: { eventId: { _eq: $eventId } }) {
    path
    type
    createdAt
    amount
  }
}"#;

/// Most recent audit performed by `$login`.
pub const LAST_AUDIT: &str = r#"
query LastAudit($login: String!) {
  audit(
    where: { auditorLogin: { _eq: $login } }
    order_by: [{ updatedAt: desc }]
    limit: 1
  ) {
    group {
      captainLogin
      path
    }
    auditorLogin
    updatedAt
  }
}"#;
