//! Minimal `multipart/form-data` encoder
//!
//! ureq v3 does not bundle multipart support, so the body is built by hand.
//! Only file parts are needed: the upload endpoint takes a single `file` field.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// A file part waiting to be encoded
#[derive(Debug, Clone)]
struct FilePart {
    field: String,
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

/// Parts collected for one request
///
/// The boundary is only picked in [`MultipartForm::encode`], once every
/// part's bytes are known, so it can be checked against them.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<FilePart>,
}

/// Encoded body plus the header value that names its boundary
#[derive(Debug, Clone)]
pub struct EncodedForm {
    pub content_type: String,
    pub body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file part
    pub fn file(mut self, field: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.parts.push(FilePart {
            field: field.to_string(),
            // Quotes would terminate the header parameter early
            filename: filename.replace('"', "'"),
            content_type: content_type.to_string(),
            data: data.to_vec(),
        });
        self
    }

    /// Encode with a boundary derived from the process id and the clock
    pub fn encode(self) -> EncodedForm {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        self.encode_with_seed((u64::from(std::process::id()) << 32) ^ nanos)
    }

    fn encode_with_seed(self, seed: u64) -> EncodedForm {
        let boundary = (0u32..)
            .map(|attempt| candidate_boundary(seed, attempt))
            .find(|b| !self.parts.iter().any(|p| contains(&p.data, b.as_bytes())))
            .unwrap_or_default();

        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    part.field, part.filename, part.content_type
                )
                .as_bytes(),
            );
            body.extend_from_slice(&part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        EncodedForm {
            content_type: format!("multipart/form-data; boundary={boundary}"),
            body,
        }
    }
}

fn candidate_boundary(seed: u64, attempt: u32) -> String {
    format!("----ixtampa-form-{seed:016x}-{attempt}")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Guess a part's content type from the file extension
///
/// Unknown or missing extensions fall back to `application/octet-stream`;
/// the bytes themselves are passed through untouched.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_part_layout() {
        let encoded = MultipartForm::new()
            .file("file", "logo.png", "image/png", b"\x89PNG")
            .encode_with_seed(7);
        let boundary = candidate_boundary(7, 0);

        assert_eq!(
            encoded.content_type,
            format!("multipart/form-data; boundary={boundary}")
        );

        let mut expected = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"logo.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .into_bytes();
        expected.extend_from_slice(b"\x89PNG\r\n");
        expected.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        assert_eq!(encoded.body, expected);
    }

    #[test]
    fn test_boundary_skips_candidates_found_in_data() {
        let first = candidate_boundary(42, 0);
        let data = format!("header {first} trailer").into_bytes();

        let encoded = MultipartForm::new()
            .file("file", "tricky.bin", "application/octet-stream", &data)
            .encode_with_seed(42);

        let second = candidate_boundary(42, 1);
        assert!(encoded.content_type.ends_with(&format!("boundary={second}")));
        assert!(!contains(&data, second.as_bytes()));
        assert!(encoded.body.ends_with(format!("--{second}--\r\n").as_bytes()));
    }

    #[test]
    fn test_boundaries_differ_between_seeds() {
        let form = MultipartForm::new().file("file", "a.png", "image/png", b"x");
        let a = form.clone().encode_with_seed(1);
        let b = form.encode_with_seed(2);
        assert_ne!(a.content_type, b.content_type);
    }

    #[test]
    fn test_quotes_in_filename_are_neutralized() {
        let encoded = MultipartForm::new()
            .file("file", "my \"best\" logo.png", "image/png", b"")
            .encode();
        let text = String::from_utf8(encoded.body).unwrap();
        assert!(text.contains("filename=\"my 'best' logo.png\""));
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type_for(Path::new("a/logo.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("logo.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(
            content_type_for(Path::new("logo")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("logo.psd")),
            "application/octet-stream"
        );
    }
}
