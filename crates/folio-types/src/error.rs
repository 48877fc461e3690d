//! Error types for FOLIO_DESK.

use std::io;

/// Errors produced by the FOLIO_DESK framework.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A render target the operation needs is not present on the surface.
    #[error("missing surface: {0}")]
    MissingSurface(String),

    /// A platform capability (microphone, tone output) was refused or is absent.
    #[error("capability denied: {0}")]
    CapabilityDenied(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_surface_display() {
        let e = FolioError::MissingSurface("modal_image".into());
        assert_eq!(format!("{e}"), "missing surface: modal_image");
    }

    #[test]
    fn capability_denied_display() {
        let e = FolioError::CapabilityDenied("Permission denied".into());
        assert_eq!(format!("{e}"), "capability denied: Permission denied");
    }

    #[test]
    fn navigation_error_display() {
        let e = FolioError::Navigation("popup blocked".into());
        assert_eq!(format!("{e}"), "navigation error: popup blocked");
    }

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn script_error_display() {
        let e = FolioError::Script("line 3: unknown element".into());
        assert_eq!(format!("{e}"), "script error: line 3: unknown element");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FolioError::Platform("oops".into()));
        assert!(r.is_err());
    }
}
