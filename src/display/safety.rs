//! Safety checklist display formatting

use std::collections::BTreeSet;

use crate::models::SafetyItem;

/// Format the checklist with completion marks and overall progress
///
/// With `verbose`, each step also shows its risk, where the setting lives
/// and what to do.
pub fn format_checklist(
    items: &[SafetyItem],
    completed: &BTreeSet<String>,
    progress: u8,
    verbose: bool,
) -> String {
    let mut output = format!("Phone safety: {}% done\n", progress);
    output.push_str(&format!("{}\n", "=".repeat(40)));

    for item in items {
        let mark = if completed.contains(item.id) { "x" } else { " " };
        output.push_str(&format!(
            "[{}] {:<40} {:<7} ({})\n",
            mark, item.title, item.priority, item.id
        ));

        if verbose {
            output.push_str(&format!("      Risk:   {}\n", item.risk));
            output.push_str(&format!("      Where:  {}\n", item.action));
            output.push_str(&format!("      What:   {}\n", item.details));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SAFETY_ITEMS;

    #[test]
    fn test_marks_completed_items() {
        let completed: BTreeSet<String> = ["faceid".to_string()].into_iter().collect();
        let output = format_checklist(SAFETY_ITEMS, &completed, 13, false);

        assert!(output.contains("13% done"));
        let faceid = output.lines().find(|l| l.contains("(faceid)")).unwrap();
        assert!(faceid.starts_with("[x]"));
        let other = output.lines().find(|l| l.contains("(safety-check)")).unwrap();
        assert!(other.starts_with("[ ]"));
        assert!(!output.contains("Risk:"));
    }

    #[test]
    fn test_verbose_shows_details() {
        let output = format_checklist(SAFETY_ITEMS, &BTreeSet::new(), 0, true);
        assert!(output.contains("Settings > Privacy & Security > Safety Check"));
    }
}
