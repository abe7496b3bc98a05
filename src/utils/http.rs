//! The http module helper functions useful for serving http content
use actix_web::http::header::ContentType;
use std::path::Path;

/// `guess_contenttype` uses the file extension of the path component of
/// `url` to return a `ContentType` for the resource it points at. Used by
/// the image proxy as a fallback when the upstream response carries no
/// `Content-Type` header. If the extension is missing or unknown we
/// return octet stream.
#[must_use]
pub fn guess_contenttype(url: &str) -> ContentType {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mime = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext_str| mime_guess::from_ext(ext_str).first())
        .unwrap_or(mime::APPLICATION_OCTET_STREAM);
    ContentType(mime)
}

#[cfg(test)]
mod test {
    use crate::utils::http::guess_contenttype;

    #[test]
    fn test_guess_contenttype_when_jpg_ext_expect_jpeg() {
        let cut = guess_contenttype;
        let actual = cut("https://uploads.example.org/covers/1.jpg").to_string();
        let expected = String::from("image/jpeg");
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_guess_contenttype_when_png_ext_expect_png() {
        let cut = guess_contenttype;
        let actual = cut("https://uploads.example.org/covers/1.png").to_string();
        let expected = String::from("image/png");
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_guess_contenttype_when_no_ext_expect_octet_stream() {
        let cut = guess_contenttype;
        let actual = cut("https://uploads.example.org/covers/1").to_string();
        let expected = String::from("application/octet-stream");
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_guess_contenttype_when_query_string_expect_ext_from_path() {
        let cut = guess_contenttype;
        let actual = cut("https://uploads.example.org/covers/1.jpg?size=512").to_string();
        let expected = String::from("image/jpeg");
        assert_eq!(expected, actual);
    }
}
