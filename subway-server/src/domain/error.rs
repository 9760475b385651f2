//! Path query error types.
//!
//! These are the three failure kinds a path query can produce. All are
//! terminal, expected outcomes of a single query against real network
//! data; none is transient or retryable.

use std::fmt;

use super::StationId;

/// Failures of a path query, distinguishable from success and from
/// each other.
//
// `Display`/`Error` are implemented by hand rather than derived via
// `thiserror` because the `NoPathFound` variant carries a field literally
// named `source`, which `thiserror` unconditionally treats as the error
// source (requiring `StationId: std::error::Error`). The messages below
// reproduce the intended `#[error(...)]` strings exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A queried station id is unknown to the registry
    StationNotFound(StationId),

    /// Source and target resolve to the same station
    DuplicateStation(StationId),

    /// No route connects the source to the target
    NoPathFound {
        source: StationId,
        target: StationId,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::StationNotFound(id) => write!(f, "station {id} not found"),
            PathError::DuplicateStation(id) => {
                write!(f, "source and target are the same station: {id}")
            }
            PathError::NoPathFound { source, target } => {
                write!(f, "no route from station {source} to station {target}")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(raw: u64) -> StationId {
        StationId::new(raw).unwrap()
    }

    #[test]
    fn error_display() {
        let err = PathError::StationNotFound(sid(99));
        assert_eq!(err.to_string(), "station 99 not found");

        let err = PathError::DuplicateStation(sid(2));
        assert_eq!(err.to_string(), "source and target are the same station: 2");

        let err = PathError::NoPathFound {
            source: sid(1),
            target: sid(3),
        };
        assert_eq!(err.to_string(), "no route from station 1 to station 3");
    }

    #[test]
    fn kinds_are_distinguishable() {
        let not_found = PathError::StationNotFound(sid(1));
        let duplicate = PathError::DuplicateStation(sid(1));
        let no_path = PathError::NoPathFound {
            source: sid(1),
            target: sid(2),
        };

        assert_ne!(not_found, duplicate);
        assert_ne!(duplicate, no_path);
        assert_ne!(not_found, no_path);
    }
}
