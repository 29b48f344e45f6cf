//! Opaque, caller-supplied string identifiers for design entities.
//!
//! These wrap the stable identifier strings the caller's design snapshot
//! already assigns — the engine never mints its own ids, so there is no
//! arena or interner here, just a thin newtype per entity kind.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(
    /// Stable identifier for a [`Module`](crate::module::Module).
    ModuleId
);

define_id!(
    /// Stable identifier for a [`Pin`](crate::pin::Pin).
    PinId
);

define_id!(
    /// Stable identifier for a [`Connection`](crate::connection::Connection).
    ConnectionId
);
