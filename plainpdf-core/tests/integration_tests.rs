//! Integration tests for end-to-end text to PDF conversion
//!
//! These tests drive the public API from raw lines to serialized bytes and
//! check the document structure a reader relies on.

use plainpdf::error::{PdfError, Result, Stage};
use plainpdf::objects::{Dictionary, Object, ObjectId, Stream};
use plainpdf::{Document, DocumentInfo, LayoutConfig, TextConverter};
use std::fs;
use tempfile::TempDir;

fn converter() -> TextConverter {
    TextConverter::new(LayoutConfig::default()).unwrap()
}

/// Content stream payload of every page, in page order.
fn page_contents(document: &Document) -> Vec<String> {
    document
        .page_ids()
        .unwrap()
        .into_iter()
        .map(|page_id| {
            let page = document.object(page_id).and_then(Object::as_dict).unwrap();
            let content_id = page.get("Contents").and_then(Object::as_reference).unwrap();
            let data = document.object(content_id).and_then(Object::stream_data).unwrap();
            String::from_utf8(data.to_vec()).unwrap()
        })
        .collect()
}

fn shown_text(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix('(')?.strip_suffix(") Tj"))
        .collect()
}

#[test]
fn test_53_lines_fill_two_pages() -> Result<()> {
    let lines: Vec<String> = (1..=53).map(|n| format!("{n:>4} {}", "x".repeat(35))).collect();
    assert!(lines.iter().all(|line| line.len() == 40));

    let document = converter().convert_lines(&lines)?;
    let contents = page_contents(&document);
    assert_eq!(contents.len(), 2);

    let first = shown_text(&contents[0]);
    let second = shown_text(&contents[1]);
    assert_eq!(first.len(), 52);
    assert_eq!(first[0], lines[0]);
    assert_eq!(first[51], lines[51]);
    assert_eq!(second, vec![lines[52].as_str()]);

    let tree = document.object(ObjectId::new(2, 0)).and_then(Object::as_dict).unwrap();
    assert_eq!(tree.get("Count"), Some(&Object::Integer(2)));
    Ok(())
}

#[test]
fn test_single_empty_line_gives_one_blank_page() -> Result<()> {
    let document = converter().convert_lines(&[""])?;
    let contents = page_contents(&document);

    assert_eq!(contents.len(), 1);
    assert!(shown_text(&contents[0]).iter().all(|text| text.is_empty()));

    let tree = document.object(ObjectId::new(2, 0)).and_then(Object::as_dict).unwrap();
    assert_eq!(tree.get("Count"), Some(&Object::Integer(1)));
    Ok(())
}

#[test]
fn test_no_lines_still_gives_one_page() -> Result<()> {
    let lines: [&str; 0] = [];
    let document = converter().convert_lines(&lines)?;
    let contents = page_contents(&document);

    assert_eq!(contents, vec!["BT\n/F1 10 Tf\n50 790 Td\n14 TL\nET\n".to_string()]);
    Ok(())
}

#[test]
fn test_delimiters_are_escaped_in_output() -> Result<()> {
    let bytes = converter()
        .convert_lines(&["cost (was $5)\\x"])?
        .to_bytes()?;
    let text = String::from_utf8_lossy(&bytes);

    assert!(text.contains("(cost \\(was $5\\)\\\\x) Tj"));
    assert!(!text.contains("(was $5)"));
    Ok(())
}

#[test]
fn test_long_line_wraps_at_word_boundary() -> Result<()> {
    let words = vec!["word"; 30].join(" ");
    let document = converter().convert_lines(&[words.as_str()])?;
    let contents = page_contents(&document);
    let shown = shown_text(&contents[0]);

    // 19 words take 94 columns, 18 words take 89
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].len(), 89);
    assert_eq!(shown[1], vec!["word"; 12].join(" "));
    Ok(())
}

#[test]
fn test_unencodable_character_is_located() {
    let mut lines = vec!["plain".to_string(); 60];
    lines[55] = "arrow → here".to_string();

    match converter().convert_lines(&lines) {
        Err(PdfError::EncodingError {
            page,
            line,
            character,
        }) => {
            assert_eq!(page, 2);
            assert_eq!(line, 4);
            assert_eq!(character, '→');
        }
        other => panic!("Expected EncodingError, got {other:?}"),
    }
}

#[test]
fn test_malformed_stream_length_is_rejected() {
    let mut document = converter().convert_lines(&["hello"]).unwrap();
    let content_id = ObjectId::new(3, 0);
    let data = document
        .object(content_id)
        .and_then(Object::stream_data)
        .unwrap()
        .to_vec();

    let mut dict = Dictionary::new();
    dict.set("Length", data.len() as i64 + 1);
    document
        .set_object(content_id, Object::Stream(dict, data))
        .unwrap();

    match document.to_bytes() {
        Err(PdfError::InvariantViolation { stage, .. }) => {
            assert_eq!(stage, Stage::Serialization)
        }
        other => panic!("Expected InvariantViolation, got {other:?}"),
    }
}

#[test]
fn test_save_and_reload() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("notes.pdf");

    let document = converter().convert_str("first\nsecond\n")?;
    document.save(&file_path)?;

    let saved = fs::read(&file_path)?;
    assert_eq!(saved, document.to_bytes()?);
    assert!(saved.starts_with(b"%PDF-1.4\n"));
    assert!(saved.ends_with(b"%%EOF\n"));
    Ok(())
}

#[test]
fn test_save_failure_reports_io() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("missing-dir").join("out.pdf");

    let error = converter().convert_str("x").unwrap().save(&file_path).unwrap_err();
    assert!(matches!(error, PdfError::Io(_)));
    assert!(!file_path.exists());
}

#[test]
fn test_info_dictionary_is_referenced_from_trailer() -> Result<()> {
    let converter = converter().with_info(DocumentInfo {
        title: Some("Portfolio guide".to_string()),
        author: Some("Ana Müller".to_string()),
        ..DocumentInfo::default()
    });
    let serialized = converter.convert_str("body")?.serialize()?;
    let text = String::from_utf8_lossy(&serialized.bytes);

    assert_eq!(serialized.trailer.info, Some(ObjectId::new(6, 0)));
    assert!(text.contains("trailer\n<< /Size 7 /Root 1 0 R /Info 6 0 R >>"));
    assert!(text.contains("/Title (Portfolio guide)"));
    // Non-ASCII metadata goes out as UTF-16BE
    assert!(text.contains("/Author <FEFF0041006E00610020004D00FC006C006C00650072>"));
    Ok(())
}

#[test]
fn test_hand_built_document_serializes() -> Result<()> {
    let mut document = Document::new();
    let catalog = document.reserve();
    let tree = document.reserve();
    let content = document.add_object(Stream::new(b"BT\nET\n".to_vec()));

    let mut page = Dictionary::new();
    page.set("Type", Object::name("Page"));
    page.set("Parent", tree);
    page.set("Contents", content);
    let page = document.add_object(page);

    let mut pages = Dictionary::new();
    pages.set("Type", Object::name("Pages"));
    pages.set("Kids", vec![Object::from(page)]);
    pages.set("Count", 1);
    document.set_object(tree, pages)?;

    let mut root = Dictionary::new();
    root.set("Type", Object::name("Catalog"));
    root.set("Pages", tree);
    document.set_object(catalog, root)?;
    document.set_root(catalog);

    let serialized = document.serialize()?;
    assert_eq!(serialized.xref.len(), 5);
    assert_eq!(serialized.trailer.size, 5);
    Ok(())
}
