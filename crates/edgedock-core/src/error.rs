use std::fmt;

/// A boxed error type for platform (Win32) operations.
///
/// Used by plumbing outside the dock state machine, where any OS error
/// is simply reported and the caller gives up.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Failures the dock controller and sampler know how to degrade from.
///
/// Neither is fatal: the panel just stops auto-hiding or auto-showing
/// until the next event gives it a chance to recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// The OS refused to report the cursor position.
    PointerQuery(String),
    /// The window has no geometry yet (queried before first layout).
    GeometryUnavailable,
}

impl fmt::Display for DockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointerQuery(reason) => write!(f, "pointer position query failed: {reason}"),
            Self::GeometryUnavailable => f.write_str("window geometry is not available yet"),
        }
    }
}

impl std::error::Error for DockError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = DockError::PointerQuery("access denied".into());
        assert_eq!(
            err.to_string(),
            "pointer position query failed: access denied"
        );
    }

    #[test]
    fn converts_into_boxed_window_error() {
        // Arrange
        fn fails() -> WindowResult<()> {
            let geometry: Result<(), DockError> = Err(DockError::GeometryUnavailable);
            geometry?;
            Ok(())
        }

        // Act
        let err = fails().unwrap_err();

        // Assert
        assert!(err.to_string().contains("geometry"));
    }
}
