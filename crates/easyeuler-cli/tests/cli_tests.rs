//! Integration tests for the `easyeuler` binary.
//!
//! Every test runs in its own temporary directory with
//! `EASYEULER_CONFIG_DIR` pointed inside it, so no user configuration leaks
//! in.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `sh` runs the solution; the file itself prints the answer.
const SH_LANGUAGES: &str = r#"
[languages.sh]
extension = "sh"
execute = "sh {path}"

[languages.broken]
extension = "broken"
build = "echo 'syntax error near line 1' >&2; exit 1"
execute = "sh {path}"
"#;

fn workspace() -> TempDir {
    TempDir::new().unwrap()
}

fn easyeuler(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("easyeuler").unwrap();
    cmd.current_dir(dir)
        .env("EASYEULER_CONFIG_DIR", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn with_sh_languages(dir: &Path) {
    fs::write(dir.join(".easyeuler.toml"), SH_LANGUAGES).unwrap();
}

// ── general ───────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let dir = workspace();
    easyeuler(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("generate-resources"));
}

#[test]
fn version_flag() {
    let dir = workspace();
    easyeuler(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn create_writes_default_paths() {
    let dir = workspace();
    easyeuler(dir.path()).args(["create", "1"]).assert().success();
    easyeuler(dir.path()).args(["create", "1", "c"]).assert().success();

    let python = fs::read_to_string(dir.path().join("euler_001.py")).unwrap();
    assert!(python.contains("Problem 1: Multiples of 3 and 5"));
    assert!(dir.path().join("euler_001.c").exists());
}

#[test]
fn create_with_explicit_path() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["create", "7", "ruby", "--path", "seven.rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Written to seven.rb"));
    assert!(dir.path().join("seven.rb").exists());
}

#[test]
fn create_unknown_problem_is_usage_error() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["create", "9999"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("A problem with ID 9999 does not exist"));
}

#[test]
fn create_non_integer_problem() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["create", "one"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'one' is not a valid integer"));
}

#[test]
fn create_unknown_language() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["create", "1", "cobol"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown language 'cobol'"));
}

#[test]
fn create_refuses_existing_file_without_force() {
    let dir = workspace();
    let path = dir.path().join("euler_001.py");
    fs::write(&path, "mine").unwrap();

    easyeuler(dir.path())
        .args(["create", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("euler_001.py already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "mine");

    easyeuler(dir.path())
        .args(["create", "1", "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&path).unwrap(), "mine");
}

#[test]
fn create_uses_user_template() {
    let dir = workspace();
    let templates = dir.path().join(".config/templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("python"), "# {{ID_PADDED}} {{NAME}}\n").unwrap();

    easyeuler(dir.path()).args(["create", "2"]).assert().success();
    assert_eq!(
        fs::read_to_string(dir.path().join("euler_002.py")).unwrap(),
        "# 002 Even Fibonacci numbers\n"
    );
}

// ── list / show ───────────────────────────────────────────────────────────────

#[test]
fn list_prints_every_problem() {
    let dir = workspace();
    easyeuler(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Problem 1: Multiples of 3 and 5"))
        .stdout(predicate::str::contains("Problem 10: Summation of primes"));
}

#[test]
fn list_long_frames_descriptions() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["list", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Problem 3: Largest prime factor\n=========================================\n\nThe prime factors",
        ));
}

#[test]
fn list_csv_never_shows_answers() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,difficulty,name\n1,5,Multiples of 3 and 5\n"))
        .stdout(predicate::str::contains("233168").not());
}

#[test]
fn show_renders_description() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Problem 1: Multiples of 3 and 5"))
        .stdout(predicate::str::contains("Difficulty: 5%"));
}

#[test]
fn show_unknown_problem() {
    let dir = workspace();
    easyeuler(dir.path()).args(["show", "0"]).assert().code(2);
}

// ── generate-resources ────────────────────────────────────────────────────────

#[test]
fn problem_without_resources_fails() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["generate-resources", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Problem 1 has no resource files"));
}

#[test]
fn bundled_resource_needs_no_setup() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["generate-resources", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created p008_number.txt at path ."));

    let series = fs::read_to_string(dir.path().join("p008_number.txt")).unwrap();
    assert!(series.starts_with("73167176531330624919"));
    assert_eq!(series.lines().map(str::len).sum::<usize>(), 1000);
}

#[test]
fn all_resources_copied_into_new_directory() {
    let dir = workspace();
    let resources = dir.path().join(".config/resources");
    fs::create_dir_all(&resources).unwrap();
    fs::write(resources.join("names.txt"), "\"MARY\",\"PATRICIA\"").unwrap();
    fs::write(resources.join("keylog.txt"), "319\n680\n").unwrap();

    easyeuler(dir.path())
        .args(["generate-resources", "--path", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created keylog.txt at path data"))
        .stdout(predicate::str::contains("Created names.txt at path data"))
        .stdout(predicate::str::contains("Created p008_number.txt at path data"));

    assert_eq!(
        fs::read_to_string(dir.path().join("data/keylog.txt")).unwrap(),
        "319\n680\n"
    );
}

#[test]
fn several_resources_need_a_directory() {
    let dir = workspace();
    let resources = dir.path().join(".config/resources");
    fs::create_dir_all(&resources).unwrap();
    fs::write(resources.join("a.txt"), "a").unwrap();
    fs::write(resources.join("b.txt"), "b").unwrap();
    fs::write(dir.path().join("taken"), "").unwrap();

    easyeuler(dir.path())
        .args(["generate-resources", "--path", "taken"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "needs to be a directory to create multiple resource files",
        ));
}

// ── verify ────────────────────────────────────────────────────────────────────

#[cfg(unix)]
mod verify {
    use super::*;

    #[test]
    fn correct_answer() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.sh"), "echo 233168\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "euler_001.sh"])
            .assert()
            .success()
            .stdout("Checking output of euler_001.sh: 233168\n");
    }

    #[test]
    fn wrong_answer_still_exits_zero() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.sh"), "echo 42\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "euler_001.sh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checking output of euler_001.sh: 42"));
    }

    #[test]
    fn empty_output_is_marked() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_002.sh"), "true\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "euler_002.sh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[no output]"));
    }

    #[test]
    fn execute_failure_reports_stage() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.sh"), "echo boom >&2\nexit 3\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "euler_001.sh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[error during execute]"))
            .stdout(predicate::str::contains("boom").not());

        easyeuler(dir.path())
            .args(["verify", "-e", "euler_001.sh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("boom"));
    }

    #[test]
    fn build_failure_stops_pipeline() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.broken"), "echo 233168\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "euler_001.broken"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[error during build]"))
            .stdout(predicate::str::contains("233168").not());
    }

    #[test]
    fn explicit_language_overrides_extension() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.txt"), "echo 233168\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "--language", "sh", "euler_001.txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("euler_001.txt: 233168"));
    }

    #[test]
    fn timing_is_printed() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.sh"), "echo 233168\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "--time", "euler_001.sh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("CPU times - user: "))
            .stdout(predicate::str::contains("Wall time: "));
    }

    #[test]
    fn directory_needs_recursive() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::create_dir(dir.path().join("solutions")).unwrap();
        fs::write(dir.path().join("solutions/euler_001.sh"), "echo 233168\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "solutions"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains(
                "Skipping solutions because it is a directory and --recursive was not specified",
            ))
            .stderr(predicate::str::contains("No files were verified"));
    }

    #[test]
    fn recursive_verifies_nested_files() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::create_dir_all(dir.path().join("solutions/nested")).unwrap();
        fs::write(dir.path().join("solutions/euler_001.sh"), "echo 233168\n").unwrap();
        fs::write(
            dir.path().join("solutions/nested/euler_002.sh"),
            "echo 4613732\n",
        )
        .unwrap();
        fs::write(dir.path().join("solutions/README"), "notes\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "-r", "solutions"])
            .assert()
            .success()
            .stdout(predicate::str::contains("euler_001.sh: 233168"))
            .stdout(predicate::str::contains("euler_002.sh: 4613732"))
            .stdout(predicate::str::contains(
                "because it does not contain a valid problem ID",
            ));
    }

    #[test]
    fn file_without_problem_id_is_skipped() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("notes.sh"), "echo hi\n").unwrap();

        easyeuler(dir.path())
            .args(["verify", "notes.sh"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains(
                "Skipping notes.sh because it does not contain a valid problem ID",
            ));
    }

    #[test]
    fn missing_path_is_rejected_up_front() {
        let dir = workspace();
        easyeuler(dir.path())
            .args(["verify", "euler_404.py"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Path 'euler_404.py' does not exist"));
    }

    #[test]
    fn json_output_one_document_per_file() {
        let dir = workspace();
        with_sh_languages(dir.path());
        fs::write(dir.path().join("euler_001.sh"), "echo 233168\n").unwrap();
        fs::write(dir.path().join("euler_002.sh"), "echo 1\n").unwrap();

        let assert = easyeuler(dir.path())
            .args([
                "--output-format",
                "json",
                "verify",
                "euler_001.sh",
                "euler_002.sh",
            ])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let reports: Vec<serde_json::Value> = stdout
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["verdict"], "correct");
        assert_eq!(reports[0]["result"]["execute"]["output"], "233168");
        assert_eq!(reports[1]["problem"], 2);
        assert_eq!(reports[1]["verdict"], "incorrect");
    }
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_default() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .success()
        .stdout("python\n");
}

#[test]
fn environment_overrides_files() {
    let dir = workspace();
    fs::write(
        dir.path().join(".easyeuler.toml"),
        "[defaults]\nlanguage = \"c\"\n",
    )
    .unwrap();

    easyeuler(dir.path())
        .env("EASYEULER__DEFAULTS__LANGUAGE", "ruby")
        .args(["config", "get", "defaults.language"])
        .assert()
        .success()
        .stdout("ruby\n");
}

#[test]
fn missing_config_file_is_configuration_error() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["--config", "nope.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_config() {
    let dir = workspace();
    easyeuler(dir.path()).arg("init").assert().success();

    let written = fs::read_to_string(dir.path().join(".config/config.toml")).unwrap();
    assert!(written.contains("[languages.python]"));

    easyeuler(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_for_bash() {
    let dir = workspace();
    easyeuler(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("easyeuler"));
}
