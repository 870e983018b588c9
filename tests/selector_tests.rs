use repotext::scan::ScanResult;
use repotext::selector::{
    collect_exclusions, preset_excludes, select_exclusions, ExclusionSelector,
    InteractiveSelector, INVALID_INPUT_WARNING,
};
use std::io::Cursor;
use tracing_test::traced_test;

fn items() -> Vec<String> {
    vec!["one".to_string(), "two".to_string(), "three".to_string()]
}

#[test]
fn test_empty_input_returns_presets_in_order() {
    let presets = preset_excludes();
    assert_eq!(select_exclusions("", &items(), &presets), presets);
    assert_eq!(select_exclusions("   \n", &items(), &presets), presets);
}

#[test]
fn test_indices_select_items_after_presets() {
    let presets = vec!["node_modules".to_string()];
    let excluded = select_exclusions("1 3", &items(), &presets);
    assert_eq!(excluded, vec!["node_modules", "one", "three"]);
}

#[test]
fn test_out_of_range_indices_are_dropped() {
    let excluded = select_exclusions("0 2 4 99", &items(), &[]);
    assert_eq!(excluded, vec!["two"]);
}

#[test]
#[traced_test]
fn test_malformed_input_falls_back_to_presets() {
    let presets = preset_excludes();
    let excluded = select_exclusions("abc", &items(), &presets);
    assert_eq!(excluded, presets);
    assert!(logs_contain("Ignoring selection"));
}

#[test]
fn test_presets_are_not_shared_between_calls() {
    let presets = vec![".git".to_string()];
    let first = select_exclusions("1", &items(), &presets);
    let second = select_exclusions("", &items(), &presets);
    assert_eq!(first, vec![".git", "one"]);
    assert_eq!(second, vec![".git"]);
    assert_eq!(presets, vec![".git"]);
}

#[test]
fn test_interactive_selector_prints_numbered_list() {
    let presets = vec!["dist".to_string(), ".git".to_string()];
    let mut selector = InteractiveSelector::new(Cursor::new("2\n"), Vec::new());

    let excluded = selector
        .select("\nSelect files to exclude:", &items(), &presets)
        .unwrap();
    assert_eq!(excluded, vec!["dist", ".git", "two"]);

    let (_, output) = selector.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("\nSelect files to exclude:\nPreset excludes: dist .git\n"));
    assert!(output.contains("1. one\n2. two\n3. three\n"));
    assert!(!output.contains(INVALID_INPUT_WARNING));
}

#[test]
fn test_interactive_selector_warns_on_invalid_input() {
    let mut selector = InteractiveSelector::new(Cursor::new("1 x\n"), Vec::new());
    let excluded = selector.select("prompt", &items(), &[]).unwrap();
    assert!(excluded.is_empty());

    let (_, output) = selector.into_inner();
    assert!(String::from_utf8(output).unwrap().contains(INVALID_INPUT_WARNING));
}

#[test]
fn test_collect_exclusions_prompts_files_then_dirs() {
    let scan = ScanResult {
        files: vec!["./a.txt".to_string(), "./sub/b.txt".to_string()],
        dirs: vec!["./sub".to_string()],
    };
    let presets = vec![".git".to_string()];
    let mut selector = InteractiveSelector::new(Cursor::new("1\n1\n"), Vec::new());

    let (files, dirs) = collect_exclusions(&scan, &presets, &mut selector).unwrap();

    assert_eq!(files, vec![".git", "./a.txt"]);
    assert_eq!(dirs, vec![".git", "./sub"]);
    let (_, output) = selector.into_inner();
    let output = String::from_utf8(output).unwrap();
    let files_prompt = output.find("Select files to exclude:").unwrap();
    let dirs_prompt = output.find("Select directories to exclude:").unwrap();
    assert!(files_prompt < dirs_prompt);
}

#[test]
fn test_collect_exclusions_skips_empty_lists() {
    let scan = ScanResult {
        files: vec!["./a.txt".to_string()],
        dirs: Vec::new(),
    };
    let presets = preset_excludes();
    // EOF on the only prompt shown
    let mut selector = InteractiveSelector::new(Cursor::new(""), Vec::new());

    let (files, dirs) = collect_exclusions(&scan, &presets, &mut selector).unwrap();

    assert_eq!(files, presets);
    assert_eq!(dirs, presets);
    let (_, output) = selector.into_inner();
    assert!(!String::from_utf8(output).unwrap().contains("directories"));
}

#[test]
fn test_oversized_integers_are_dropped_not_rejected() {
    let items = vec!["one".to_string(), "two".to_string()];
    let presets = vec![".git".to_string()];

    let excluded = select_exclusions("1 99999999999999999999", &items, &presets);
    assert_eq!(excluded, vec![".git", "one"]);

    let excluded = select_exclusions("-99999999999999999999 2", &items, &presets);
    assert_eq!(excluded, vec![".git", "two"]);
}

#[test]
fn test_oversized_integer_does_not_print_warning() {
    let mut selector =
        InteractiveSelector::new(Cursor::new("3 99999999999999999999\n"), Vec::new());
    let excluded = selector.select("prompt", &items(), &[]).unwrap();
    assert_eq!(excluded, vec!["three"]);

    let (_, output) = selector.into_inner();
    assert!(!String::from_utf8(output).unwrap().contains(INVALID_INPUT_WARNING));
}
