use std::{fs, path::PathBuf};

use tempfile::tempdir;

use techradar::Config;

/// Collects all .toml radar definitions from a directory
fn collect_definitions(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

#[test]
fn e2e_smoke_test_valid_definitions() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_definitions = collect_definitions(PathBuf::from("demos"));

    assert!(
        !valid_definitions.is_empty(),
        "No valid definitions found in demos/"
    );

    let mut failed = Vec::new();

    for definition_path in &valid_definitions {
        let output_filename = format!(
            "{}.svg",
            definition_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let cfg = Config {
            log_level: "off".to_string(),
            file: definition_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
        };

        if let Err(e) = techradar::run(&cfg) {
            failed.push((definition_path.clone(), e.to_string()));
            continue;
        }

        let svg = fs::read_to_string(&output_path).expect("Output SVG missing");
        assert!(svg.contains("<svg"), "{}: no <svg> root", definition_path.display());
    }

    if !failed.is_empty() {
        eprintln!("\nValid definitions that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid definition(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_definitions() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_definitions = collect_definitions(PathBuf::from("demos/errors"));

    assert!(
        !error_definitions.is_empty(),
        "No error definitions found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for definition_path in &error_definitions {
        let output_filename = format!(
            "error_{}.svg",
            definition_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let cfg = Config {
            log_level: "off".to_string(),
            file: definition_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
        };

        if techradar::run(&cfg).is_ok() {
            unexpectedly_succeeded.push(definition_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError definitions that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error definition(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_same_definition_renders_identically() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let definition = "demos/ai_tools.toml";
    let mut outputs = Vec::new();

    for run in 0..2 {
        let output_path = temp_dir.path().join(format!("run_{run}.svg"));
        let cfg = Config {
            log_level: "off".to_string(),
            file: definition.to_string(),
            output: output_path.to_string_lossy().to_string(),
        };

        techradar::run(&cfg).expect("Render failed");
        outputs.push(fs::read_to_string(&output_path).expect("Output SVG missing"));
    }

    assert_eq!(outputs[0], outputs[1], "Seeded renders must be identical");
}
