//! Upload acceptance rules.
//!
//! Validation is pure and side-effect free: a rejected file returns an
//! error without touching any state, which is what lets the pages keep
//! the previously selected file and any displayed result intact.

use crate::error::ResumeLensError;

/// The only accepted media type.
pub const PDF_MIME: &str = "application/pdf";

/// Advertised and enforced upload ceiling.
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Metadata of an accepted upload. The analysis services only ever see
/// this, never the browser `File` handle.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedResume {
    pub file_name: String,
    pub size_bytes: f64,
}

/// Accept a user-selected file or say exactly why not.
pub fn validate_upload(
    file_name: &str,
    media_type: &str,
    size_bytes: f64,
) -> Result<UploadedResume, ResumeLensError> {
    if media_type != PDF_MIME {
        let shown = if media_type.is_empty() {
            "unknown".to_string()
        } else {
            media_type.to_string()
        };
        return Err(ResumeLensError::InvalidFileType(shown));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ResumeLensError::FileTooLarge(size_bytes / 1024.0 / 1024.0));
    }
    Ok(UploadedResume {
        file_name: file_name.to_string(),
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_within_limit() {
        let upload = validate_upload("cv.pdf", PDF_MIME, 512.0 * 1024.0).unwrap();
        assert_eq!(upload.file_name, "cv.pdf");
        assert_eq!(upload.size_bytes, 512.0 * 1024.0);
    }

    #[test]
    fn test_rejects_non_pdf_media_type() {
        let err = validate_upload("cv.docx", "application/msword", 1024.0).unwrap_err();
        assert_eq!(
            err,
            ResumeLensError::InvalidFileType("application/msword".to_string())
        );
    }

    #[test]
    fn test_rejects_missing_media_type() {
        let err = validate_upload("cv", "", 1024.0).unwrap_err();
        assert_eq!(err, ResumeLensError::InvalidFileType("unknown".to_string()));
    }

    #[test]
    fn test_pdf_extension_alone_is_not_enough() {
        // The declared media type is the contract, not the file name.
        assert!(validate_upload("cv.pdf", "text/plain", 1024.0).is_err());
    }

    #[test]
    fn test_rejects_oversize_file() {
        let err = validate_upload("cv.pdf", PDF_MIME, MAX_UPLOAD_BYTES + 1.0).unwrap_err();
        assert!(matches!(err, ResumeLensError::FileTooLarge(_)));
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(validate_upload("cv.pdf", PDF_MIME, MAX_UPLOAD_BYTES).is_ok());
    }
}
