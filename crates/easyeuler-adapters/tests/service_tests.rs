//! Core services wired to real adapters.

use std::path::{Path, PathBuf};

use easyeuler_adapters::{LayeredTemplateStore, MemoryFilesystem, SimpleRenderer};
use easyeuler_core::{
    application::{CreateService, ResourceService, ports::Filesystem},
    application::services::ResourceOutcome,
    domain::{Difficulty, Language, Problem},
};

fn problem(resources: &[&str]) -> Problem {
    Problem {
        id: 22,
        name: "Names scores".into(),
        description: "Using names.txt...".into(),
        difficulty: Difficulty::new(5).unwrap(),
        answer: "871198282".into(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}

fn create_service(fs: &MemoryFilesystem) -> CreateService {
    CreateService::new(
        Box::new(LayeredTemplateStore::builtin()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    )
}

#[test]
fn create_renders_language_template() {
    let fs = MemoryFilesystem::new();
    let python = Language::new("python", "py");
    let path = CreateService::default_path(&problem(&[]), &python);
    assert_eq!(path, PathBuf::from("euler_022.py"));

    create_service(&fs)
        .create(&problem(&[]), &python, &path, false)
        .unwrap();

    let content = fs.read_file(&path).unwrap();
    assert!(content.contains("Problem 22: Names scores"));
    assert!(!content.contains("871198282"));
}

#[test]
fn create_refuses_existing_file_without_overwrite() {
    let fs = MemoryFilesystem::new();
    fs.add_file("euler_022.py", "mine").unwrap();
    let python = Language::new("python", "py");
    let service = create_service(&fs);

    let err = service
        .create(&problem(&[]), &python, Path::new("euler_022.py"), false)
        .unwrap_err();
    assert_eq!(err.to_string(), "euler_022.py already exists");
    assert_eq!(fs.read_file(Path::new("euler_022.py")).unwrap(), "mine");

    service
        .create(&problem(&[]), &python, Path::new("euler_022.py"), true)
        .unwrap();
    assert_ne!(fs.read_file(Path::new("euler_022.py")).unwrap(), "mine");
}

#[test]
fn create_uses_template_override() {
    let fs = MemoryFilesystem::new();
    let cpp = Language::new("c++", "cpp").with_template("cpp");

    create_service(&fs)
        .create(&problem(&[]), &cpp, Path::new("euler_022.cpp"), false)
        .unwrap();
    assert!(
        fs.read_file(Path::new("euler_022.cpp"))
            .unwrap()
            .contains("#include <iostream>")
    );
}

fn resources_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_file("res/names.txt", "ANNA").unwrap();
    fs.add_file("res/keys.txt", "319").unwrap();
    fs
}

#[test]
fn problem_without_resources_is_an_error() {
    let service = ResourceService::new(Box::new(resources_fs()), "res");
    let err = service.resources_for(Some(&problem(&[]))).unwrap_err();
    assert_eq!(err.to_string(), "Problem 22 has no resource files");
}

#[test]
fn all_resources_listed_without_problem() {
    let service = ResourceService::new(Box::new(resources_fs()), "res");
    assert_eq!(
        service.resources_for(None).unwrap(),
        vec!["keys.txt".to_string(), "names.txt".to_string()]
    );
}

#[test]
fn single_resource_copies_to_path() {
    let fs = resources_fs();
    let service = ResourceService::new(Box::new(fs.clone()), "res");

    let outcomes = service
        .generate(&["names.txt".into()], Path::new("out.txt"), &mut |_| false)
        .unwrap();

    assert_eq!(fs.read_file(Path::new("out.txt")).unwrap(), "ANNA");
    assert!(matches!(outcomes[0], ResourceOutcome::Created { .. }));
}

#[test]
fn several_resources_create_directory() {
    let fs = resources_fs();
    let service = ResourceService::new(Box::new(fs.clone()), "res");
    let resources = vec!["names.txt".to_string(), "keys.txt".to_string()];

    service
        .generate(&resources, Path::new("data"), &mut |_| false)
        .unwrap();

    assert!(fs.is_dir(Path::new("data")));
    assert_eq!(fs.read_file(Path::new("data/keys.txt")).unwrap(), "319");
    assert_eq!(fs.read_file(Path::new("data/names.txt")).unwrap(), "ANNA");
}

#[test]
fn several_resources_into_existing_file_fails() {
    let fs = resources_fs();
    fs.add_file("taken", "").unwrap();
    let service = ResourceService::new(Box::new(fs.clone()), "res");
    let resources = vec!["names.txt".to_string(), "keys.txt".to_string()];

    let err = service
        .generate(&resources, Path::new("taken"), &mut |_| true)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "taken needs to be a directory to create multiple resource files"
    );
}

#[test]
fn existing_target_is_skipped_unless_confirmed() {
    let fs = resources_fs();
    fs.add_file("data/names.txt", "OLD").unwrap();
    let service = ResourceService::new(Box::new(fs.clone()), "res");

    let mut asked = Vec::new();
    let outcomes = service
        .generate(&["names.txt".into()], Path::new("data"), &mut |p| {
            asked.push(p.to_path_buf());
            false
        })
        .unwrap();

    assert_eq!(asked, vec![PathBuf::from("data/names.txt")]);
    assert!(matches!(outcomes[0], ResourceOutcome::Skipped { .. }));
    assert_eq!(fs.read_file(Path::new("data/names.txt")).unwrap(), "OLD");

    service
        .generate(&["names.txt".into()], Path::new("data"), &mut |_| true)
        .unwrap();
    assert_eq!(fs.read_file(Path::new("data/names.txt")).unwrap(), "ANNA");
}

#[test]
fn bundled_resource_fills_empty_directory() {
    let fs = MemoryFilesystem::new();
    let service =
        ResourceService::new(Box::new(fs.clone()), "res").with_bundled([("p008.txt", "7316\n")]);

    assert_eq!(service.resources_for(None).unwrap(), vec!["p008.txt".to_string()]);

    service
        .generate(&["p008.txt".into()], Path::new("p008.txt"), &mut |_| false)
        .unwrap();
    assert_eq!(fs.read_file(Path::new("p008.txt")).unwrap(), "7316\n");
}

#[test]
fn directory_resource_shadows_bundled() {
    let fs = resources_fs();
    let service = ResourceService::new(Box::new(fs.clone()), "res")
        .with_bundled([("names.txt", "BUNDLED"), ("p008.txt", "7316\n")]);

    assert_eq!(
        service.resources_for(None).unwrap(),
        vec![
            "keys.txt".to_string(),
            "names.txt".to_string(),
            "p008.txt".to_string()
        ]
    );

    service
        .generate(&["names.txt".into()], Path::new("out.txt"), &mut |_| false)
        .unwrap();
    assert_eq!(fs.read_file(Path::new("out.txt")).unwrap(), "ANNA");
}
