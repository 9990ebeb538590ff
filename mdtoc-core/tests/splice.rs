use mdtoc_core::{InsertionMethod, splice_outline_into_document};

fn at_beginning(content: &str, outline: &str) -> String {
  splice_outline_into_document(content, outline, InsertionMethod::Beginning)
}

#[test]
fn test_document_without_title_gets_outline_first() {
  let content = r"This is some content.

## First Header
Some content here.

### Subheader
More content.";

  let outline = "- [[#First Header]]\n  - [[#Subheader]]";

  let expected = r"## Table of Contents
- [[#First Header]]
  - [[#Subheader]]

This is some content.

## First Header
Some content here.

### Subheader
More content.";

  assert_eq!(at_beginning(content, outline), expected);
}

#[test]
fn test_outline_goes_after_title_and_before_content() {
  let content = r"# Document Title

This is the introduction paragraph.

## First Section
Content for first section.

## Second Section
Content for second section.";

  let outline = "- [[#First Section]]\n- [[#Second Section]]";

  let expected = r"# Document Title

## Table of Contents
- [[#First Section]]
- [[#Second Section]]

This is the introduction paragraph.

## First Section
Content for first section.

## Second Section
Content for second section.";

  assert_eq!(at_beginning(content, outline), expected);
}

#[test]
fn test_outline_directly_after_title_without_intro() {
  let content = r"# My Document

## Section One
Content here.

## Section Two
More content.";

  let outline = "- [[#Section One]]\n- [[#Section Two]]";

  let expected = r"# My Document

## Table of Contents
- [[#Section One]]
- [[#Section Two]]

## Section One
Content here.

## Section Two
More content.";

  assert_eq!(at_beginning(content, outline), expected);
}

#[test]
fn test_frontmatter_is_skipped() {
  let content = r"---
title: My Document
tags: [example]
---

# Document Title

Some introduction text.

## First Header
Content here.";

  let outline = "- [[#First Header]]";

  let expected = r"---
title: My Document
tags: [example]
---

# Document Title

## Table of Contents
- [[#First Header]]

Some introduction text.

## First Header
Content here.";

  assert_eq!(at_beginning(content, outline), expected);
}

#[test]
fn test_frontmatter_without_title() {
  let content = "---\ndraft: true\n---\nBody text.\n";
  let expected =
    "---\ndraft: true\n---\n## Table of Contents\n- [[#Body]]\n\nBody text.\n";
  assert_eq!(at_beginning(content, "- [[#Body]]"), expected);
}

#[test]
fn test_frontmatter_delimiter_lines_are_trimmed() {
  let content = "--- \nkey: value\n  ---\n# Title\nBody";
  let expected =
    "--- \nkey: value\n  ---\n# Title\n## Table of Contents\n- x\n\nBody";
  assert_eq!(at_beginning(content, "- x"), expected);
}

#[test]
fn test_insertion_point_is_stable_across_runs() {
  let content = "---\na: 1\n---\n\n# Title\n\nBody";
  let once = at_beginning(content, "- [[#Title]]");
  let twice = at_beginning(&once, "- [[#Title]]");

  let first_block = once.find("## Table of Contents").expect("outline present");
  let second_block =
    twice.find("## Table of Contents").expect("outline present");
  assert_eq!(first_block, second_block);
  assert!(twice.starts_with("---\na: 1\n---\n\n# Title\n\n## Table of Contents"));
}

#[test]
fn test_outline_appended_at_end() {
  let content = "# Title\n\nBody";
  let result =
    splice_outline_into_document(content, "- [[#Title]]", InsertionMethod::End);
  assert_eq!(result, "# Title\n\nBody\n\n## Table of Contents\n- [[#Title]]");
}

#[test]
fn test_cursor_method_is_left_to_the_caller() {
  let content = "# Title\n\nBody";
  let result = splice_outline_into_document(
    content,
    "- [[#Title]]",
    InsertionMethod::Cursor,
  );
  assert_eq!(result, content);
}

#[test]
fn test_frontmatter_after_byte_order_mark_stays_first() {
  let content = "\u{feff}---\ntitle: x\n---\n# Title\nBody";
  assert_eq!(
    at_beginning(content, "- x"),
    "\u{feff}---\ntitle: x\n---\n# Title\n## Table of Contents\n- x\n\nBody"
  );
}
