#![allow(clippy::expect_used, reason = "Fine in tests")]
use mdtoc_core::{Header, extract_headers, slugify};

fn anchors(headers: &[Header]) -> Vec<&str> {
  headers.iter().map(|h| h.anchor.as_str()).collect()
}

#[test]
fn test_extract_headers_from_document() {
  let md = r"# Main Title
Some content here.

## Section One
Content for section one.

### Subsection A
More content.

## Section Two
Content for section two.";

  let headers = extract_headers(md);

  let expected = vec![
    Header {
      level:       1,
      text:        "Main Title".to_string(),
      anchor:      "main-title".to_string(),
      line_number: 1,
    },
    Header {
      level:       2,
      text:        "Section One".to_string(),
      anchor:      "section-one".to_string(),
      line_number: 4,
    },
    Header {
      level:       3,
      text:        "Subsection A".to_string(),
      anchor:      "subsection-a".to_string(),
      line_number: 7,
    },
    Header {
      level:       2,
      text:        "Section Two".to_string(),
      anchor:      "section-two".to_string(),
      line_number: 10,
    },
  ];
  assert_eq!(headers, expected);
}

#[test]
fn test_empty_and_blank_documents() {
  assert!(extract_headers("").is_empty());
  assert!(extract_headers("   \n\t\n  ").is_empty());
}

#[test]
fn test_document_without_headers() {
  let md = "Just some regular text without any headers.\n#hashtag\n- list";
  assert!(extract_headers(md).is_empty());
}

#[test]
fn test_duplicate_headers_get_unique_anchors() {
  let headers = extract_headers("# Introduction\n## Setup\n# Introduction");
  assert_eq!(anchors(&headers), vec![
    "introduction",
    "setup",
    "introduction-1"
  ]);
}

#[test]
fn test_repeated_base_slug_counts_up() {
  let md = "## FAQ\n## FAQ?\n### faq\n# F.A.Q.\n## Faq!";
  let headers = extract_headers(md);
  assert_eq!(anchors(&headers), vec!["faq", "faq-1", "faq-2", "faq-3", "faq-4"]);
}

#[test]
fn test_anchors_do_not_leak_between_documents() {
  let first = extract_headers("# Overview\n# Overview");
  let second = extract_headers("# Overview");
  assert_eq!(anchors(&first), vec!["overview", "overview-1"]);
  assert_eq!(anchors(&second), vec!["overview"]);
}

#[test]
fn test_header_like_lines_in_code_blocks_are_headers() {
  let md = "# Title\n\n```sh\n# install deps\nmake\n```\n";
  let headers = extract_headers(md);
  assert_eq!(headers.len(), 2);
  assert_eq!(headers[1].text, "install deps");
  assert_eq!(headers[1].line_number, 4);
}

#[test]
fn test_uppercase_and_punctuation_anchors() {
  let cases = [
    (
      "What do we mean when we say TRANSPARENCY",
      "what-do-we-mean-when-we-say-transparency",
    ),
    ("ALL CAPS HEADER", "all-caps-header"),
    ("Mixed CASE Header", "mixed-case-header"),
    ("HTML & CSS Basics", "html-css-basics"),
    ("API/REST Endpoints", "apirest-endpoints"),
  ];

  for (input, expected) in cases {
    assert_eq!(slugify(input), expected, "slug for {input:?}");
  }
}

#[test]
fn test_headers_serialize_for_hosts() {
  let headers = extract_headers("## Setup");
  let json = serde_json::to_value(&headers).expect("headers serialize");
  assert_eq!(
    json,
    serde_json::json!([{
      "level": 2,
      "text": "Setup",
      "anchor": "setup",
      "line_number": 1
    }])
  );
}

#[test]
fn test_title_after_byte_order_mark_is_extracted() {
  let headers = extract_headers("\u{feff}# Title\n\n## Part");
  assert_eq!(headers.len(), 2);
  assert_eq!(headers[0].level, 1);
  assert_eq!(headers[0].text, "Title");
  assert_eq!(headers[0].line_number, 1);
  assert_eq!(anchors(&headers), vec!["title", "part"]);
}
