//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: image error (channel precondition, bad dimensions)
//! - 11: I/O error (file read/write, decode, encode)
//! - 12: input error (bad --ops JSON)
//! - 13: serialization error

use pixelops_core::ImageError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// An operation rejected the image (wrong channel count, missing channel).
    Image(ImageError),
    /// A file could not be loaded or saved.
    Io(String),
    /// A user input error (bad operation list).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Image(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Image(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CliError({}): {self}", self.exit_code())
    }
}

impl From<ImageError> for CliError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::Io(msg) => CliError::Io(msg),
            ImageError::InvalidOps(msg) => CliError::Input(msg),
            other => CliError::Image(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelops_core::{Image, Op};

    #[test]
    fn missing_input_file_exits_with_io_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        let err: CliError = pixelops_io::load_image(&path).unwrap_err().into();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn malformed_ops_json_exits_with_input_code() {
        let err: CliError = Op::parse_list(r#"[{"op": "blur"}]"#).unwrap_err().into();
        assert!(matches!(err, CliError::Input(_)));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("blur"), "{err}");
    }

    #[test]
    fn channel_preconditions_exit_with_image_code() {
        let gray = Image::new(1, 2, 2).unwrap();
        let rejected = [
            Op::RgbToHsv.apply(gray.clone()).unwrap_err(),
            Op::Shift {
                channel: 1,
                delta: 0.5,
            }
            .apply(gray)
            .unwrap_err(),
            Image::from_data(3, 2, 2, vec![0.0; 5]).unwrap_err(),
        ];
        for e in rejected {
            let err = CliError::from(e);
            assert!(matches!(err, CliError::Image(_)), "{err:?}");
            assert_eq!(err.exit_code(), 10);
        }
    }

    #[test]
    fn unencodable_channel_count_is_an_image_error_not_io() {
        let dir = tempfile::tempdir().unwrap();
        let two = Image::new(2, 1, 1).unwrap();
        let err: CliError = pixelops_io::save_png(&two, &dir.path().join("two.png"))
            .unwrap_err()
            .into();
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.to_string(), "unsupported channel count: 2");
    }

    #[test]
    fn image_variant_displays_the_wrapped_message() {
        let err = CliError::from(ImageError::ChannelOutOfRange {
            channel: 4,
            channels: 3,
        });
        assert_eq!(
            err.to_string(),
            "channel 4 out of range for image with 3 channels"
        );
    }

    #[test]
    fn debug_prefixes_exit_code() {
        let err = CliError::Input("invalid --ops JSON: eof".into());
        assert_eq!(format!("{err:?}"), "CliError(12): invalid --ops JSON: eof");
    }

    #[test]
    fn json_failures_exit_with_serialization_code() {
        let e = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let err = CliError::from(e);
        assert!(matches!(err, CliError::Serialization(_)));
        assert_eq!(err.exit_code(), 13);
    }
}
