//! Configuration for conversion runs
//!
//! Resolves CLI arguments into a validated configuration: where to read the
//! archive, where to put the XML, and whether an existing output file may be
//! replaced.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::XML_OUTPUT_EXTENSION;
use crate::{Error, Result};

/// Settings for one CSV-to-XML conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Cable archive file to read
    pub input_path: PathBuf,

    /// XML file to write
    pub output_path: PathBuf,

    /// Replace an existing output file instead of refusing
    pub overwrite: bool,
}

impl ConversionConfig {
    /// Build a configuration, deriving the output path from the input when
    /// none is given (same location, `.xml` extension).
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>, overwrite: bool) -> Self {
        let output_path =
            output_path.unwrap_or_else(|| input_path.with_extension(XML_OUTPUT_EXTENSION));

        Self {
            input_path,
            output_path,
            overwrite,
        }
    }

    /// Validate the configuration against the filesystem
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if self.input_path == self.output_path {
            return Err(Error::configuration(
                "input and output paths are the same file".to_string(),
            ));
        }

        if self.output_path.exists() && !self.overwrite {
            return Err(Error::configuration(format!(
                "output file already exists (pass --overwrite to replace): {}",
                self.output_path.display()
            )));
        }

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Output path as a displayable reference
    pub fn output(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_derived_from_input() {
        let config = ConversionConfig::new(PathBuf::from("archive/cables.csv"), None, false);
        assert_eq!(config.output_path, PathBuf::from("archive/cables.xml"));
    }

    #[test]
    fn test_explicit_output_path_kept() {
        let config = ConversionConfig::new(
            PathBuf::from("cables.csv"),
            Some(PathBuf::from("out/result.xml")),
            false,
        );
        assert_eq!(config.output_path, PathBuf::from("out/result.xml"));
    }

    #[test]
    fn test_missing_input_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConversionConfig::new(dir.path().join("absent.csv"), None, false);
        assert!(matches!(config.validate(), Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_existing_output_requires_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cables.csv");
        let output = dir.path().join("cables.xml");
        std::fs::write(&input, "id\n").unwrap();
        std::fs::write(&output, "<root/>").unwrap();

        let refused = ConversionConfig::new(input.clone(), Some(output.clone()), false);
        assert!(matches!(
            refused.validate(),
            Err(Error::Configuration { .. })
        ));

        let allowed = ConversionConfig::new(input, Some(output), true);
        assert!(allowed.validate().is_ok());
    }
}
