//! Drag payload validation and drop targets.

use thiserror::Error;

/// MIME type carrying the device id.
pub const DRAG_MIME: &str = "text/plain";

/// List a device was dropped on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// The unassigned list (no group id on the element).
    Unassigned,
    /// A group member list carrying `data-group-id`.
    Group(String),
}

impl DropTarget {
    /// Target for an element's optional `data-group-id`.
    #[must_use]
    pub fn from_group_attr(group_id: Option<&str>) -> Self {
        match group_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::Group(id.to_string()),
            _ => Self::Unassigned,
        }
    }
}

/// Rejected drag payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// No payload was attached to the drag.
    #[error("drop carried no device id")]
    Missing,
    /// Payload was empty or whitespace.
    #[error("drop carried an empty device id")]
    Empty,
    /// Payload was the literal string `undefined`.
    #[error("drop carried an undefined device id")]
    Undefined,
}

/// Device id carried by a drop, validated.
///
/// # Errors
///
/// Returns [`DragError`] for missing, blank or `undefined` payloads.
pub fn parse_drag_payload(payload: Option<&str>) -> Result<String, DragError> {
    let raw = payload.ok_or(DragError::Missing)?;
    if raw.trim().is_empty() {
        return Err(DragError::Empty);
    }
    if raw == "undefined" {
        return Err(DragError::Undefined);
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_payloads() {
        assert_eq!(parse_drag_payload(None), Err(DragError::Missing));
        assert_eq!(parse_drag_payload(Some("")), Err(DragError::Empty));
        assert_eq!(parse_drag_payload(Some("  ")), Err(DragError::Empty));
        assert_eq!(
            parse_drag_payload(Some("undefined")),
            Err(DragError::Undefined)
        );
        assert_eq!(parse_drag_payload(Some("dev42")), Ok("dev42".to_string()));
    }

    #[test]
    fn payload_is_passed_through_verbatim() {
        assert_eq!(parse_drag_payload(Some(" dev42 ")), Ok(" dev42 ".to_string()));
    }

    #[test]
    fn target_follows_group_attribute() {
        assert_eq!(DropTarget::from_group_attr(None), DropTarget::Unassigned);
        assert_eq!(DropTarget::from_group_attr(Some("")), DropTarget::Unassigned);
        assert_eq!(
            DropTarget::from_group_attr(Some("g7")),
            DropTarget::Group("g7".into())
        );
    }
}
