//! File ids and derived urls for the external media hosts (Google Drive and YouTube).

use dbdcare_model::document::FileType;
use regex::Regex;
use std::sync::LazyLock;

const DRIVE_HOST: &str = "drive.google.com";
const YOUTUBE_ID_LEN: usize = 11;

static DRIVE_PATH_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/d/([\w-]+)").expect("invalid drive path regex"));
static DRIVE_QUERY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([\w-]+)").expect("invalid drive query regex"));
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu\.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("invalid youtube regex")
});

/// Extracts the file id from `.../d/<ID>/...` or `...?id=<ID>` drive urls.
#[must_use]
pub fn drive_file_id(url: &str) -> Option<String> {
    if !url.contains(DRIVE_HOST) {
        return None;
    }
    DRIVE_PATH_ID
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_owned())
}

#[must_use]
pub fn drive_preview_url(url: &str, file_type: FileType) -> String {
    match (drive_file_id(url), file_type) {
        (Some(id), FileType::Image) => format!("https://drive.google.com/uc?export=view&id={id}"),
        (Some(id), FileType::Pdf) => format!("https://drive.google.com/file/d/{id}/preview"),
        (None, _) => url.to_owned(),
    }
}

#[must_use]
pub fn drive_thumbnail_url(url: &str) -> String {
    drive_file_id(url).map_or_else(
        || url.to_owned(),
        |id| format!("https://drive.google.com/thumbnail?id={id}&sz=w1000"),
    )
}

#[must_use]
pub fn drive_download_url(url: &str) -> String {
    drive_file_id(url).map_or_else(
        || url.to_owned(),
        |id| format!("https://drive.google.com/uc?export=download&id={id}"),
    )
}

/// Extracts the 11 character video id from the usual YouTube url shapes.
#[must_use]
pub fn youtube_id(url: &str) -> Option<String> {
    let id = YOUTUBE_ID.captures(url)?.get(7)?.as_str();
    (id.chars().count() == YOUTUBE_ID_LEN).then(|| id.to_owned())
}

#[must_use]
pub fn youtube_thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg")
}

#[must_use]
pub fn youtube_embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "1AbC-dEf_ghIJ";

    #[test]
    fn test_drive_path_shape() {
        let url = format!("https://drive.google.com/file/d/{ID}/view?usp=sharing");
        assert_eq!(drive_file_id(&url).as_deref(), Some(ID));
    }

    #[test]
    fn test_drive_query_shape() {
        let open = format!("https://drive.google.com/open?id={ID}");
        let uc = format!("https://drive.google.com/uc?export=download&id={ID}");
        assert_eq!(drive_file_id(&open).as_deref(), Some(ID));
        assert_eq!(drive_file_id(&uc).as_deref(), Some(ID));
    }

    #[test]
    fn test_drive_shapes_agree() {
        let path = format!("https://drive.google.com/file/d/{ID}/view");
        let query = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(drive_file_id(&path), drive_file_id(&query));
    }

    #[test]
    fn test_non_drive_urls() {
        let url = "https://images.unsplash.com/d/photo-1?id=abc";
        assert_eq!(drive_file_id(url), None);
        assert_eq!(drive_thumbnail_url(url), url);
        assert_eq!(drive_download_url(url), url);
        assert_eq!(drive_preview_url(url, FileType::Pdf), url);
        assert_eq!(drive_file_id("https://drive.google.com/drive/folders"), None);
    }

    #[test]
    fn test_drive_derived_urls() {
        let url = format!("https://drive.google.com/file/d/{ID}/view");
        assert_eq!(
            drive_preview_url(&url, FileType::Image),
            format!("https://drive.google.com/uc?export=view&id={ID}")
        );
        assert_eq!(
            drive_preview_url(&url, FileType::Pdf),
            format!("https://drive.google.com/file/d/{ID}/preview")
        );
        assert_eq!(
            drive_thumbnail_url(&url),
            format!("https://drive.google.com/thumbnail?id={ID}&sz=w1000")
        );
        assert_eq!(
            drive_download_url(&url),
            format!("https://drive.google.com/uc?export=download&id={ID}")
        );
    }

    #[test]
    fn test_youtube_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=4tpY7eGSF4s",
            "https://www.youtube.com/watch?v=4tpY7eGSF4s&t=42s",
            "https://youtu.be/4tpY7eGSF4s",
            "https://www.youtube.com/embed/4tpY7eGSF4s",
            "https://www.youtube.com/v/4tpY7eGSF4s?version=3",
            "https://www.youtube.com/user/dbd#p/u/1/4tpY7eGSF4s",
        ] {
            assert_eq!(youtube_id(url).as_deref(), Some("4tpY7eGSF4s"), "{url}");
        }
    }

    #[test]
    fn test_youtube_rejects_bad_ids() {
        assert_eq!(youtube_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(youtube_id("https://example.com/video.mp4"), None);
        assert_eq!(youtube_id(""), None);
    }

    #[test]
    fn test_youtube_urls() {
        assert_eq!(
            youtube_thumbnail_url("4tpY7eGSF4s"),
            "https://img.youtube.com/vi/4tpY7eGSF4s/maxresdefault.jpg"
        );
        assert_eq!(youtube_embed_url("4tpY7eGSF4s"), "https://www.youtube.com/embed/4tpY7eGSF4s");
    }
}
