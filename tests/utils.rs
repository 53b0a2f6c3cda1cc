use generoo::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Writes each `(relative path, content)` pair under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Arguments of `generoo generate project <name> -t <template>`.
pub fn generate_args(name: PathBuf, template: &Path) -> Args {
    Args {
        goal: "generate".to_string(),
        scope: "project".to_string(),
        name,
        no_config: false,
        auto_config: false,
        template_config: None,
        template: Some(template.to_path_buf()),
        run_configuration: None,
        archetypes: None,
        verbose: 2,
    }
}

fn relative_files(dir: &Path) -> std::collections::BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints the files present in only one of the two directories and the
/// content of the files that differ.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }
    for file in actual_files.intersection(&expected_files) {
        let left = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let right = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if left != right {
            println!("\n  File: {file:?}\n  --- Actual:\n{left}\n  --- Expected:\n{right}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that both directories hold the same files with the same content.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
