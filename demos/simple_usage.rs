/// Simple example demonstrating how to use the Check Pages library

use anyhow::Result;
use check_pages::inspect_file;
use check_pages::utils::output_formatter::format_verdict;

fn main() -> Result<()> {
    let dir = std::env::temp_dir().join("check_pages_demo");
    std::fs::create_dir_all(&dir)?;
    let file_path = dir.join("Worksheets.jsx");

    // Create a page that still seeds its state from an inline array
    std::fs::write(
        &file_path,
        format!(
            r#"import {{ useState }} from 'react'

export default function Worksheets() {{
  const [worksheets, setWorksheets] = useState([
    {{ id: 1, title: 'Daily standup notes', status: 'completed' }},
    {{ id: 2, title: 'Client onboarding', status: 'in_progress' }},
  ])
{}
}}
"#,
            "  // layout\n".repeat(80)
        ),
    )?;

    println!("Inspecting file: {}", file_path.display());

    let verdict = inspect_file(&file_path)?;
    print!("{}", format_verdict(&verdict));

    Ok(())
}
