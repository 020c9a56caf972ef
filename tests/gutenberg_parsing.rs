use std::fs;
use std::path::Path;
use tempfile::tempdir;

use distant_reading::{
    BoundaryDetector, GutenbergMarkers, extract_title_author, read_text, strip_metadata,
};

fn write_text(target: &Path, body: &str) {
    fs::write(target, body).expect("write text file");
}

#[test]
fn modern_header_with_crlf_line_endings() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("pg2264.txt");
    let body = "The Project Gutenberg eBook of Macbeth\r\n\r\nTitle: Macbeth\r\n\r\nAuthor: William Shakespeare\r\n\r\n\
                *** START OF THE PROJECT GUTENBERG EBOOK MACBETH ***\r\n\r\nACT I\r\n\r\nSCENE I. An open Place.\r\n\r\n\
                *** END OF THE PROJECT GUTENBERG EBOOK MACBETH ***\r\n\r\nUpdated editions will replace the previous one.\r\n";
    write_text(&p, body);

    let raw = read_text(&p).expect("read text");
    assert_eq!(raw.filename, "pg2264.txt");
    assert_eq!(strip_metadata(&raw.content), "ACT I SCENE I. An open Place.");
    let (title, author) = extract_title_author(&raw.content, 30);
    assert_eq!(title, "Macbeth");
    assert_eq!(author, "William Shakespeare");
}

#[test]
fn older_header_without_space_after_asterisks() {
    let raw = "Project Gutenberg's Hamlet\n\n***START OF THIS PROJECT GUTENBERG EBOOK HAMLET***\n\n\
               Who's there?\n\n***END OF THIS PROJECT GUTENBERG EBOOK HAMLET***\n\nEnd of license";
    assert_eq!(strip_metadata(raw), "Who's there?");
}

#[test]
fn marker_spanning_lines_is_matched() {
    let raw = "*** START OF THE PROJECT GUTENBERG EBOOK\nTHE TEMPEST ***\nFull fathom five\n*** END OF THE PROJECT GUTENBERG EBOOK\nTHE TEMPEST ***";
    assert_eq!(strip_metadata(raw), "Full fathom five");
}

#[test]
fn boundaries_are_byte_offsets_into_raw_text() {
    let raw = "head *** START OF THIS PROJECT GUTENBERG EBOOK *** body *** END OF THIS PROJECT GUTENBERG EBOOK *** tail";
    let b = GutenbergMarkers.detect_boundaries(raw);
    assert!(b.start_found && b.end_found);
    assert_eq!(raw[b.start..b.end].trim(), "body");
}

#[test]
fn text_without_markers_is_kept_whole() {
    let raw = "A plain\ttext file\n\nwith no boilerplate.";
    let b = GutenbergMarkers.detect_boundaries(raw);
    assert!(!b.start_found && !b.end_found);
    assert_eq!(strip_metadata(raw), "A plain text file with no boilerplate.");
}

#[test]
fn title_after_scan_window_is_ignored() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("pg1.txt");
    let mut body = String::from("Author: Early Author\n");
    body.push_str(&"filler\n".repeat(40));
    body.push_str("Title: Late Title\n");
    write_text(&p, &body);
    let raw = read_text(&p).unwrap();
    let (title, author) = extract_title_author(&raw.content, 30);
    assert_eq!(title, "Unknown");
    assert_eq!(author, "Early Author");
}
