//! Well-known Anchor namespaces.

/// Namespace for instruction handlers.
pub const GLOBAL: &str = "global";

/// Namespace for account types.
pub const ACCOUNT: &str = "account";

/// Namespace for emitted events.
pub const EVENT: &str = "event";

/// Namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = GLOBAL;
