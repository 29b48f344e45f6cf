//! Undirected electrical links between two pins.

use crate::ids::{ConnectionId, PinId};
use serde::{Deserialize, Serialize};

/// The kind of electrical link a [`Connection`] represents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    /// A power-rail connection.
    Power,
    /// A ground connection.
    Ground,
    /// A single-ended signal connection.
    Signal,
    /// A multi-wire bus connection.
    Bus,
}

/// An undirected electrical link between two pins.
///
/// Order of `from`/`to` is retained for message phrasing only — it has
/// no semantic meaning except where a rule is explicitly documented as
/// direction-sensitive (the pin-type-mismatch rule).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Connection {
    /// The stable identifier of this connection.
    pub id: ConnectionId,
    /// One endpoint pin identifier.
    pub from: PinId,
    /// The other endpoint pin identifier.
    pub to: PinId,
    /// The kind of electrical link this connection represents.
    pub kind: ConnectionKind,
    /// The net name grouping this connection with others, if any.
    ///
    /// Connections with no net name are singletons — they never group
    /// with another connection during net derivation.
    #[serde(default)]
    pub net_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_kind_wire_format() {
        for (variant, wire) in [
            (ConnectionKind::Power, "\"power\""),
            (ConnectionKind::Ground, "\"ground\""),
            (ConnectionKind::Signal, "\"signal\""),
            (ConnectionKind::Bus, "\"bus\""),
        ] {
            assert_eq!(serde_json::to_string(&variant).unwrap(), wire);
        }
    }

    #[test]
    fn net_name_defaults_to_none() {
        let json = r#"{"id":"C1","from":"U1.1","to":"U2.1","kind":"signal"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.net_name, None);
    }
}
