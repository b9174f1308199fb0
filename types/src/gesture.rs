//! Typed gesture messages.
//!
//! Drag transports hand over bare identifiers. They are parsed into these
//! types at the boundary so nothing downstream trusts a raw string.

use serde::{Deserialize, Serialize};

use crate::{CardId, EmptyCardIdError};

/// Payload carried by one drag gesture from drag start to drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub card_id: CardId,
}

impl DragPayload {
    #[must_use]
    pub fn new(card_id: CardId) -> Self {
        Self { card_id }
    }

    /// Parses an untyped transport payload. Blank payloads are rejected.
    pub fn parse(raw: &str) -> Result<Self, EmptyCardIdError> {
        CardId::new(raw).map(Self::new)
    }
}

/// Region under the pointer during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropTarget {
    DropZone,
    #[default]
    Elsewhere,
}

impl DropTarget {
    pub const DROP_ZONE_ID: &'static str = "drop-zone";

    /// Maps a host target id to a target. Anything but the drop zone id,
    /// including no target at all, is `Elsewhere`.
    #[must_use]
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            Some(Self::DROP_ZONE_ID) => Self::DropZone,
            _ => Self::Elsewhere,
        }
    }

    #[must_use]
    pub fn is_drop_zone(self) -> bool {
        matches!(self, Self::DropZone)
    }
}
