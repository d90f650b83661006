/// Integration tests for the page inspector
///
/// These tests write pages into a temporary directory and check the verdict
/// and the rendered output through the public library API.

use std::path::Path;

use check_pages::utils::output_formatter::format_verdict;
use check_pages::{inspect_file, FileAccessError, Verdict};

fn write_page(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("Worksheets.jsx");
    std::fs::write(&path, text).expect("Failed to write page");
    path
}

#[test]
fn test_page_with_mock_data() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let page = format!(
        "import {{ useState }} from 'react'\n\nexport default function Worksheets() {{\n  const [worksheets, setWorksheets] = useState([\n    {{ id: 1, title: 'Quarterly review' }},\n  ])\n{}\n}}\n",
        "  // filler\n".repeat(100)
    );
    let path = write_page(temp_dir.path(), &page);

    let verdict = inspect_file(&path).expect("Failed to inspect page");
    assert_eq!(
        verdict,
        Verdict::NeedsUpdate {
            length: page.chars().count()
        }
    );

    let output = format_verdict(&verdict);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "Worksheets.jsx needs updating - has mock data");
    assert_eq!(lines[1], format!("File size: {} characters", page.chars().count()));
}

#[test]
fn test_page_connected_to_api() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let page = format!(
        "const [worksheets, setWorksheets] = useState(null)\nuseEffect(() => {{ api.get('/worksheets') }}, [])\n{}",
        "// filler\n".repeat(200)
    );
    let path = write_page(temp_dir.path(), &page);

    let verdict = inspect_file(&path).expect("Failed to inspect page");
    assert_eq!(verdict, Verdict::MaybeUpdated);
    assert_eq!(
        format_verdict(&verdict),
        "Worksheets.jsx may already be updated or has issues\n"
    );
}

#[test]
fn test_crlf_page_counts_single_newlines() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    // 501 CRLF lines: 2016 bytes but 15 + 1500 characters after normalization
    let page = format!("useState([{{}}])\r\n{}", "ab\r\n".repeat(500));
    let path = write_page(temp_dir.path(), &page);

    let verdict = inspect_file(&path).expect("Failed to inspect page");
    assert_eq!(verdict, Verdict::NeedsUpdate { length: 15 + 1500 });
}

#[test]
fn test_empty_page() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_page(temp_dir.path(), "");

    assert_eq!(
        inspect_file(&path).expect("Failed to inspect page"),
        Verdict::MaybeUpdated
    );
}

#[test]
fn test_missing_page() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = inspect_file(temp_dir.path().join("Worksheets.jsx"));

    match result {
        Err(e @ FileAccessError::NotFound { .. }) => {
            assert!(e.to_string().starts_with("File not found:"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}
