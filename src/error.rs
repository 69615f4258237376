use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {source}", .path.display())]
    ConfigMalformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("missing '{section}' section")]
    MissingSection { section: &'static str },

    #[error("missing field '{field}' in '{section}' section")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    /// A required field holds a mapping or sequence instead of a scalar.
    #[error("field '{field}' in '{section}' section must be a scalar, found {found}")]
    InvalidField {
        section: &'static str,
        field: &'static str,
        found: &'static str,
    },

    #[error("cannot write {}: {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_section_display() {
        let err = GenerationError::MissingSection { section: "tfstate" };
        assert_eq!(err.to_string(), "missing 'tfstate' section");
    }

    #[test]
    fn test_missing_field_display() {
        let err = GenerationError::MissingField {
            section: "tfstate",
            field: "container",
        };
        assert_eq!(
            err.to_string(),
            "missing field 'container' in 'tfstate' section"
        );
    }

    #[test]
    fn test_invalid_field_display() {
        let err = GenerationError::InvalidField {
            section: "tfstate",
            field: "resource_group",
            found: "a mapping",
        };
        assert_eq!(
            err.to_string(),
            "field 'resource_group' in 'tfstate' section must be a scalar, found a mapping"
        );
    }

    #[test]
    fn test_config_unreadable_includes_path_and_cause() {
        let err = GenerationError::ConfigUnreadable {
            path: PathBuf::from("../../configs/bootstrap.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("../../configs/bootstrap.yaml"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_output_write_failed_includes_path() {
        let err = GenerationError::OutputWriteFailed {
            path: PathBuf::from("backend.hcl"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "cannot write backend.hcl: permission denied"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = GenerationError::OutputWriteFailed {
            path: PathBuf::from("backend.hcl"),
            source: io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
    }
}
