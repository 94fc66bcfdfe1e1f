//! # Header Metadata Updater
//!
//! This module extracts the documentation header comment from the top of a
//! source file and refreshes the metadata fields embedded in it: the
//! "last updated" date and the version number.
//!
//! Field rewrites are targeted substring replacements of the exact matched
//! text within the full file content, not a structural rewrite of the header.

use std::sync::LazyLock;

use regex::Regex;

/// Marker a header-comment line starts with.
pub const HEADER_MARKER: &str = "//!";

/// The version number every header is normalized to.
pub const TARGET_VERSION: &str = "1.0";

/// Date format used in the header and throughout the log: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// `//! \date       DD.MM.YYYY (last updated)`
static DATE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"//! \\date       (\d\d\.\d\d\.\d\d\d\d) \(last updated\)").expect("date field regex must compile")
});

/// `//! \version    <digits-and-dots>`
static VERSION_FIELD: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"//! \\version    ((?:\d|\.)*)").expect("version field regex must compile"));

/// Outcome of one metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
  /// The field is present and already carries the target value.
  Current,
  /// The field was present with a stale value and has been rewritten.
  Rewritten,
  /// The field is absent from the header comment.
  Missing,
}

/// Outcome of a metadata update on a file that has a header comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataOutcome {
  pub date: FieldStatus,
  pub version: FieldStatus,
}

/// Extracts the header comment from the top of `content`.
///
/// The header is the maximal prefix of lines, starting at line 1, where every
/// line begins with [`HEADER_MARKER`]; scanning stops at (and includes) the
/// first line that does not. Returns `None` when line 1 already lacks the
/// marker, i.e. the file has no header comment.
pub fn extract_header(content: &str) -> Option<String> {
  let mut header = String::new();
  let mut found_marker = false;

  for line in content.split('\n') {
    header.push_str(line);
    header.push('\n');
    if line.starts_with(HEADER_MARKER) {
      found_marker = true;
    } else {
      break;
    }
  }

  found_marker.then_some(header)
}

/// Refreshes the date and version fields of the header comment.
///
/// `effective_date` is the date the header should carry after this run: the
/// file's on-disk modification date, unless a whitespace edit already made
/// the working copy fresher than the disk timestamp.
///
/// Returns the (possibly rewritten) content and `Some(outcome)` describing
/// each field, or `None` when the file has no header comment at all.
pub fn update_metadata(content: &str, effective_date: &str) -> (String, Option<MetadataOutcome>) {
  let Some(header) = extract_header(content) else {
    return (content.to_string(), None);
  };

  let mut updated = content.to_string();

  let date = match DATE_FIELD.captures(&header) {
    Some(captures) => {
      if &captures[1] == effective_date {
        FieldStatus::Current
      } else {
        let stale_line = &captures[0];
        let fresh_line = format!(r"//! \date       {} (last updated)", effective_date);
        updated = updated.replace(stale_line, &fresh_line);
        FieldStatus::Rewritten
      }
    }
    None => FieldStatus::Missing,
  };

  let version = match VERSION_FIELD.captures(&header) {
    Some(captures) => {
      if &captures[1] == TARGET_VERSION {
        FieldStatus::Current
      } else {
        let stale_line = &captures[0];
        let fresh_line = format!(r"//! \version    {}", TARGET_VERSION);
        updated = updated.replace(stale_line, &fresh_line);
        FieldStatus::Rewritten
      }
    }
    None => FieldStatus::Missing,
  };

  (updated, Some(MetadataOutcome { date, version }))
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "//!\n\
    //! \\file       widget.cpp\n\
    //! \\author     Jane Doe <jane@example.com>\n\
    //! \\version    0.9\n\
    //! \\date       31.12.2019 (last updated)\n\
    //!\n\
    \n\
    #include \"widget.h\"\n";

  #[test]
  fn test_extract_header_includes_first_non_marker_line() {
    let header = extract_header(HEADER).unwrap();
    // The blank line after the marker block terminates scanning and is part
    // of the extracted text.
    assert!(header.ends_with("//!\n\n"));
    assert!(!header.contains("#include"));
  }

  #[test]
  fn test_extract_header_absent() {
    assert!(extract_header("#include \"widget.h\"\n//! too late\n").is_none());
    assert!(extract_header("").is_none());
  }

  #[test]
  fn test_extract_header_whole_file_is_header() {
    let content = "//! line one\n//! line two";
    let header = extract_header(content).unwrap();
    assert_eq!(header, "//! line one\n//! line two\n");
  }

  #[test]
  fn test_date_rewritten_when_stale() {
    let (updated, outcome) = update_metadata(HEADER, "01.01.2020");
    let outcome = outcome.unwrap();
    assert_eq!(outcome.date, FieldStatus::Rewritten);
    assert!(updated.contains(r"//! \date       01.01.2020 (last updated)"));
    assert!(!updated.contains("31.12.2019"));
  }

  #[test]
  fn test_date_current_left_alone() {
    let (updated, outcome) = update_metadata(HEADER, "31.12.2019");
    assert_eq!(outcome.unwrap().date, FieldStatus::Current);
    assert!(updated.contains(r"//! \date       31.12.2019 (last updated)"));
  }

  #[test]
  fn test_version_rewritten_to_target() {
    let (updated, outcome) = update_metadata(HEADER, "31.12.2019");
    assert_eq!(outcome.unwrap().version, FieldStatus::Rewritten);
    assert!(updated.contains(r"//! \version    1.0"));
    assert!(!updated.contains("0.9"));
  }

  #[test]
  fn test_version_already_current() {
    let content = HEADER.replace("0.9", "1.0");
    let (updated, outcome) = update_metadata(&content, "31.12.2019");
    assert_eq!(outcome.unwrap().version, FieldStatus::Current);
    assert_eq!(updated, content);
  }

  #[test]
  fn test_missing_fields_reported() {
    let content = "//! \\file       widget.cpp\n\nint x;\n";
    let (updated, outcome) = update_metadata(content, "01.01.2020");
    let outcome = outcome.unwrap();
    assert_eq!(outcome.date, FieldStatus::Missing);
    assert_eq!(outcome.version, FieldStatus::Missing);
    assert_eq!(updated, content);
  }

  #[test]
  fn test_no_header_returns_none() {
    let content = "int main() { return 0; }\n";
    let (updated, outcome) = update_metadata(content, "01.01.2020");
    assert!(outcome.is_none());
    assert_eq!(updated, content);
  }

  #[test]
  fn test_date_suffix_preserved() {
    let (updated, _) = update_metadata(HEADER, "15.06.2025");
    assert!(updated.contains("(last updated)"));
  }

  #[test]
  fn test_fields_outside_header_not_touched() {
    // A version line below the header boundary must not be rewritten.
    let content = "//! \\file       a.cpp\n\
      \n\
      // note: //! \\version    0.2 lives in code, not in the header\n";
    let (updated, outcome) = update_metadata(content, "01.01.2020");
    assert_eq!(outcome.unwrap().version, FieldStatus::Missing);
    assert!(updated.contains("0.2"));
  }
}
