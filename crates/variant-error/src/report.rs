//! Plain snapshots of a variant error

use std::fmt;

/// The active kind of a [`VariantError`](crate::VariantError), detached from
/// its type.
///
/// With the `serde` feature this serializes as
/// `{"kind": "...", "discriminant": 0, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorReport {
    /// Type name of the active kind
    pub kind: &'static str,
    /// Position of the active kind in its kind set
    pub discriminant: usize,
    /// Message of the payload
    pub message: String,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.discriminant, self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = ErrorReport {
            kind: "std::io::error::Error",
            discriminant: 2,
            message: "broken pipe".to_string(),
        };
        assert_eq!(report.to_string(), "[2] std::io::error::Error: broken pipe");
    }
}
