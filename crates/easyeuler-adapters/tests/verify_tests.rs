//! End-to-end pipeline runs through the real shell.
#![cfg(unix)]

use std::path::Path;

use easyeuler_adapters::{InMemoryProblemStore, ShellRunner};
use easyeuler_core::{
    application::VerifyService,
    domain::{Language, LanguageRegistry, Stage, VerificationResult, Verdict},
};

fn service(languages: Vec<Language>) -> VerifyService {
    VerifyService::new(
        Box::new(InMemoryProblemStore::builtin().unwrap()),
        LanguageRegistry::new(languages),
        Box::new(ShellRunner::new()),
    )
}

fn run(service: &VerifyService, path: &str, measure_time: bool) -> VerificationResult {
    let job = service
        .prepare(Path::new(path), None)
        .unwrap_or_else(|| panic!("{path} did not resolve to a problem"));
    service.run(&job, measure_time)
}

fn verdict(service: &VerifyService, path: &str) -> Verdict {
    run(service, path, false).verdict()
}

#[test]
fn correct_answer_via_echo() {
    let lang = Language::new("echo", "txt").with_execute("echo 233168");
    assert_eq!(verdict(&service(vec![lang]), "euler_001.txt"), Verdict::Correct);
}

#[test]
fn wrong_answer_is_incorrect() {
    let lang = Language::new("echo", "txt").with_execute("echo 1");
    assert_eq!(verdict(&service(vec![lang]), "euler_001.txt"), Verdict::Incorrect);
}

#[test]
fn failing_build_stops_pipeline() {
    let lang = Language::new("broken", "b")
        .with_build("echo compile error >&2; exit 1")
        .with_execute("echo 233168");
    let result = run(&service(vec![lang]), "euler_001.b", false);

    assert_eq!(result.verdict(), Verdict::Error(Stage::Build));
    assert_eq!(result.error_output(), Some("compile error\n"));
    assert!(result.stage(Stage::Execute).is_none());
}

#[test]
fn path_token_is_substituted() {
    let lang = Language::new("cat", "ans").with_execute("printf 4613732 # {path}");
    assert_eq!(verdict(&service(vec![lang]), "dir/euler_002.ans"), Verdict::Correct);
}

#[test]
fn timed_execute_has_timing() {
    let lang = Language::new("echo", "txt").with_execute("echo 233168");
    let result = run(&service(vec![lang]), "euler_001.txt", true);
    assert!(result.execution_time().is_some());
}
