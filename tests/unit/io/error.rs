//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tessellate::MosaicError;
    use tessellate::io::error::{WithPath, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("shift", &"0,4", &"must both be positive");

        let message = error.to_string();
        assert!(message.contains("shift"));
        assert!(message.contains("0,4"));
        assert!(message.contains("must both be positive"));
        assert!(error.source().is_none());
    }

    // Tests NoTiles names the searched path
    // Verified by formatting without the path
    #[test]
    fn test_no_tiles_error() {
        let error = MosaicError::NoTiles {
            path: PathBuf::from("empty_dir"),
        };

        assert!(error.to_string().contains("empty_dir"));
        assert!(error.source().is_none());
    }

    // Tests InvalidSourceData carries its reason
    // Verified by dropping the reason
    #[test]
    fn test_invalid_source_data_error() {
        let error = MosaicError::InvalidSourceData {
            reason: "no tiles to match against".to_string(),
        };

        assert!(error.to_string().contains("no tiles to match against"));
    }

    // Tests decoding failures keep the file path
    // Verified by mapping decode errors to FileSystem
    #[test]
    fn test_image_error_with_path() {
        let result: image::ImageResult<()> = Err(image::ImageError::Unsupported(
            image::error::UnsupportedError::from_format_and_kind(
                image::error::ImageFormatHint::Unknown,
                image::error::UnsupportedErrorKind::Format(image::error::ImageFormatHint::Unknown),
            ),
        ));

        let error = result.with_path(Path::new("tile.xyz"), "decode image").err();
        assert!(matches!(
            error,
            Some(MosaicError::ImageLoad { ref path, .. }) if path == Path::new("tile.xyz")
        ));
    }

    // Tests I/O failures inside the image crate are reported as file system errors
    // Verified by mapping every image error to ImageLoad
    #[test]
    fn test_image_io_error_with_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let result: image::ImageResult<()> = Err(image::ImageError::IoError(io_error));

        let error = result.with_path(Path::new("locked.png"), "decode image").err();
        assert!(matches!(
            error,
            Some(MosaicError::FileSystem {
                operation: "decode image",
                ..
            })
        ));
    }
}
