//! Command-line tests: exit codes, stdout and written reports.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_log(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn scenario() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        "mpa_graphiti/5_PC/100000/agregate_stat.log",
        "Online time: 500\nOnline comm: 2097152\n",
    );
    write_log(
        dir.path(),
        "mpa_emgraph/5_PC/100000/agregate_stat.log",
        "Online time: 700\nOnline comm: 1048576\n",
    );
    dir
}

#[test]
fn help_mentions_results_dir() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--results-dir"));
    Ok(())
}

#[test]
fn missing_results_dir_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("Results");
    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("--results-dir").arg(&missing);
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Results directory not found"));
    Ok(())
}

#[test]
fn default_results_dir_follows_executable_not_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    fs::create_dir_all(cwd.path().join("Results/mpa_graphiti/5_PC/100000"))?;
    fs::write(
        cwd.path().join("Results/mpa_graphiti/5_PC/100000/agregate_stat.log"),
        "Online time: 500\n",
    )?;

    let bin = fs::canonicalize(assert_cmd::cargo::cargo_bin("bench-compare"))?;
    let expected = bin.parent().and_then(Path::parent).unwrap().join("Results");

    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.current_dir(cwd.path()).arg("--no-csv");
    let assert = cmd.assert();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains(&cwd.path().display().to_string()));
    assert!(!cwd.path().join("Results/table1_mpa_comparison.csv").exists());
    if !expected.exists() {
        assert_eq!(output.status.code(), Some(2));
        assert!(stdout.contains(&format!(
            "Results directory not found: {}",
            expected.display()
        )));
    }
    Ok(())
}

#[test]
fn empty_results_dir_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("mpa_graphiti/5_PC"))?;
    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("-r").arg(dir.path());
    cmd.assert().code(1).stdout(predicate::str::contains(
        "No agregate_stat.log files found under Results directory.",
    ));
    Ok(())
}

#[test]
fn report_prints_tables_and_writes_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scenario();
    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("-r").arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Table 1: Comparison of mpa_graphiti and mpa_emgraph (vec_size=100000)",
        ))
        .stdout(predicate::str::contains("5        | mpa_graphiti |       0.50"))
        .stdout(predicate::str::contains("|  mpa_emgraph |       0.70"))
        .stdout(predicate::str::contains("Saved: "))
        .stdout(predicate::str::contains("table3_e2e_comparison_vecsize.csv"));

    let csv = fs::read_to_string(dir.path().join("table1_mpa_comparison.csv"))?;
    assert!(csv.contains("5,mpa_graphiti,0.50,2.00"));
    assert!(csv.contains("5,mpa_emgraph,0.70,1.00"));
    assert!(dir.path().join("table2_e2e_comparison_parties.csv").exists());
    assert!(dir.path().join("table3_e2e_comparison_vecsize.csv").exists());
    Ok(())
}

#[test]
fn no_csv_skips_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scenario();
    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("-r").arg(dir.path()).arg("--no-csv");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved:").not());
    assert!(!dir.path().join("table1_mpa_comparison.csv").exists());
    Ok(())
}

#[test]
fn quiet_prints_only_tables() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scenario();
    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("-r").arg(dir.path()).arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Comm (MB):     2.00"))
        .stdout(predicate::str::contains("Saved:").not())
        .stderr(predicate::str::is_empty());
    assert!(dir.path().join("table1_mpa_comparison.csv").exists());
    Ok(())
}

#[test]
fn custom_config_replaces_tables() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scenario();
    let config = dir.path().join("tables.json");
    fs::write(
        &config,
        r#"{"tables": [{
            "title": "Graphiti only",
            "csv_title": "graphiti",
            "csv_file_name": "graphiti.csv",
            "benchmarks": ["mpa_graphiti"],
            "group_by": "vec_size",
            "fixed": 5
        }]}"#,
    )?;

    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("-r").arg(dir.path()).arg("--config").arg(&config);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Graphiti only"))
        .stdout(predicate::str::contains("Table 1:").not());

    let csv = fs::read_to_string(dir.path().join("graphiti.csv"))?;
    assert!(csv.contains("100000,mpa_graphiti,0.50,2.00"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scenario();
    let config = dir.path().join("tables.json");
    fs::write(&config, r#"{"tables": []}"#)?;

    let mut cmd = Command::cargo_bin("bench-compare")?;
    cmd.arg("-r").arg(dir.path()).arg("-c").arg(&config);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config file"));
    Ok(())
}
