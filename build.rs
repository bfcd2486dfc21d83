use std::path::{Path, PathBuf};
use std::process::Command;

const CHECKED_DIRS: &[&str] = &["src"];

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/main");
    println!("cargo:rerun-if-changed=.git/packed-refs");

    let sha = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=NOTIFYPIPE_CONSOLE_GIT_SHA={}", sha);

    enforce_serial_for_env_mutations();
}

fn collect_rust_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in CHECKED_DIRS {
        walk_directory(&root.join(dir), &mut files);
    }
    files
}

fn walk_directory(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_directory(&path, files);
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            println!("cargo:rerun-if-changed={}", path.display());
            files.push(path);
        }
    }
}

/// Requires #[serial] for tests that mutate environment variables.
///
/// Environment variables are global state. Tests that modify them without
/// #[serial] cause flaky failures when running in parallel.
fn enforce_serial_for_env_mutations() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let root = PathBuf::from(&manifest_dir);

    let mut violations: Vec<(PathBuf, Vec<(usize, String)>)> = Vec::new();

    for file in &collect_rust_files(&root) {
        let Ok(content) = std::fs::read_to_string(file) else {
            continue;
        };
        let lines: Vec<&str> = content.lines().collect();
        let mut file_violations = Vec::new();

        let mut in_test_fn = false;
        let mut test_fn_start = 0;
        let mut test_fn_name = String::new();
        let mut has_serial = false;
        let mut brace_depth = 0i32;

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();

            if trimmed == "#[serial]" || trimmed == "#[serial_test::serial]" {
                has_serial = true;
            }

            if trimmed == "#[test]" || trimmed.starts_with("#[tokio::test") {
                for (j, candidate) in lines.iter().enumerate().take(lines.len().min(i + 5)).skip(i + 1) {
                    if let Some((_, after_fn)) = candidate.split_once("fn ") {
                        test_fn_start = j;
                        test_fn_name = after_fn
                            .split('(')
                            .next()
                            .unwrap_or_default()
                            .trim()
                            .to_string();
                        in_test_fn = true;
                        brace_depth = 0;
                        break;
                    }
                }
            }

            if in_test_fn {
                for c in line.chars() {
                    if c == '{' {
                        brace_depth += 1;
                    } else if c == '}' {
                        brace_depth -= 1;
                        if brace_depth == 0 {
                            in_test_fn = false;
                            has_serial = false;
                        }
                    }
                }

                let mutates_env = !trimmed.starts_with("//")
                    && (trimmed.contains("env::set_var") || trimmed.contains("env::remove_var"));
                if !has_serial && mutates_env {
                    file_violations.push((
                        test_fn_start,
                        format!("test `{}` mutates env without #[serial]", test_fn_name),
                    ));
                    in_test_fn = false;
                }
            }
        }

        if !file_violations.is_empty() {
            let rel_path = file.strip_prefix(&root).unwrap_or(file).to_path_buf();
            violations.push((rel_path, file_violations));
        }
    }

    if !violations.is_empty() {
        let total_count: usize = violations.iter().map(|(_, v)| v.len()).sum();

        eprintln!("\n========================================");
        eprintln!("ENV MUTATIONS REQUIRE #[serial]");
        eprintln!("========================================");
        for (path, issues) in &violations {
            for (line_num, msg) in issues {
                eprintln!("  {}:{}", path.display(), line_num);
                eprintln!("    {}", msg);
            }
        }
        eprintln!("========================================\n");
        panic!(
            "Build failed: {} test(s) mutate env vars without #[serial].",
            total_count
        );
    }
}
