#![allow(unused)]
//! File upload integration harness.
//!
//! # What this covers
//!
//! The upload pipeline from path to decoded text:
//!
//! - **Media-type gate**: only `.txt` / `.text` files (declared media type
//!   `text/plain`) pass; everything else is rejected *before* any read —
//!   a rejected path that does not exist still reports `NotPlainText`,
//!   never an I/O error.
//! - **Decode outcomes**: full UTF-8 text on success; `Unreadable` for
//!   missing files; `InvalidUtf8` for non-UTF-8 bytes.
//! - **Preview cap**: the preview is the first 500 *characters*, cut on a
//!   character boundary so multibyte text never splits mid-codepoint.
//!
//! # Running
//!
//! ```sh
//! cargo test --test upload_harness
//! ```

mod common;
use common::*;

use munpul_core::upload::{self, UploadError, PREVIEW_CAP};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

// ---------------------------------------------------------------------------
// Media-type gate
// ---------------------------------------------------------------------------

#[rstest]
#[case("notes.txt", "text/plain")]
#[case("notes.TXT", "text/plain")]
#[case("notes.text", "text/plain")]
#[case("slides.pdf", "application/pdf")]
#[case("readme.md", "text/markdown")]
#[case("data.json", "application/json")]
#[case("photo.png", "application/octet-stream")]
#[case("no_extension", "application/octet-stream")]
fn extension_maps_to_declared_media_type(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(upload::declared_media_type(Path::new(name)), expected);
}

#[tokio::test]
async fn rejection_happens_before_any_read() {
    // The file does not exist. A reader-first implementation would report an
    // I/O error; the gate must fire first and report the media type instead.
    let err = upload::load_file(Path::new("/no/such/slides.pdf"))
        .await
        .unwrap_err();
    match err {
        UploadError::NotPlainText { media_type } => assert_eq!(media_type, "application/pdf"),
        other => panic!("expected NotPlainText, got {other:?}"),
    }
}

#[tokio::test]
async fn rejection_message_names_the_media_type() {
    let err = upload::load_file(Path::new("slides.pdf")).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("텍스트 파일(.txt)만 업로드 가능합니다"), "{message}");
    assert!(message.contains("application/pdf"), "{message}");
}

// ---------------------------------------------------------------------------
// Decode outcomes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn plain_text_decodes_in_full() {
    let file = upload_file(".txt", "영어 회화 기초\n두 번째 줄".as_bytes());
    let uploaded = upload::load_file(file.path()).await.unwrap();
    assert_eq!(uploaded.text, "영어 회화 기초\n두 번째 줄");
    assert_eq!(uploaded.preview, uploaded.text);
}

#[tokio::test]
async fn missing_txt_file_is_unreadable() {
    let err = upload::load_file(Path::new("/no/such/notes.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Unreadable(_)), "{err:?}");
}

#[tokio::test]
async fn non_utf8_bytes_are_a_decode_error() {
    let file = upload_file(".txt", &[0xFF, 0xFE, 0x00, 0x41]);
    let err = upload::load_file(file.path()).await.unwrap_err();
    assert!(matches!(err, UploadError::InvalidUtf8), "{err:?}");
}

// ---------------------------------------------------------------------------
// Preview cap
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preview_caps_at_500_characters_not_bytes() {
    // 700 Hangul syllables, 3 bytes each
    let text: String = std::iter::repeat('학').take(700).collect();
    let file = upload_file(".txt", text.as_bytes());

    let uploaded = upload::load_file(file.path()).await.unwrap();
    assert_eq!(uploaded.text.chars().count(), 700);
    assert_eq!(uploaded.preview.chars().count(), PREVIEW_CAP);
    assert_eq!(uploaded.preview.len(), PREVIEW_CAP * 3);
}

#[test]
fn short_text_previews_whole() {
    assert_eq!(upload::preview_of("짧은 글"), "짧은 글");
}
