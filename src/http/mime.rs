//! MIME type detection module
//!
//! Maps file extensions to Content-Type values. The table leans toward the
//! media formats this server is pointed at; anything unrecognized falls
//! back to `application/octet-stream`.

use std::path::Path;

const FALLBACK: &str = "application/octet-stream";

/// Content-Type for a file path, matched on its extension.
///
/// Extensions are matched case-insensitively, so `FRAME.JPG` and
/// `frame.jpg` resolve the same way.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use acidserve::http::mime::content_type_for;
/// assert_eq!(content_type_for(Path::new("clip.mp4")), "video/mp4");
/// assert_eq!(content_type_for(Path::new("frame.JPG")), "image/jpeg");
/// assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK;
    };
    from_extension(&ext.to_ascii_lowercase())
}

/// Content-Type for an already-lowercased extension.
pub fn from_extension(extension: &str) -> &'static str {
    match extension {
        // Video - the primary payload
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "ts" => "video/mp2t",

        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "opus" => "audio/opus",

        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "txt" | "md" | "log" => "text/plain; charset=utf-8",
        "xml" => "application/xml",

        // Scripts and data
        "js" | "mjs" => "application/javascript",
        "json" => "application/json",
        "wasm" => "application/wasm",

        // Archives and documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",

        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_types() {
        assert_eq!(content_type_for(Path::new("a.mp4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("a.webm")), "video/webm");
        assert_eq!(content_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.png")), "image/png");
        assert_eq!(content_type_for(Path::new("a.mp3")), "audio/mpeg");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(content_type_for(Path::new("CLIP.MP4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("Frame.Jpeg")), "image/jpeg");
    }

    #[test]
    fn test_text_types() {
        assert_eq!(
            content_type_for(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("notes.txt")),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(content_type_for(Path::new("a.xyz")), FALLBACK);
        assert_eq!(content_type_for(Path::new("noext")), FALLBACK);
        assert_eq!(from_extension("unknown"), FALLBACK);
    }
}
