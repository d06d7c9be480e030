//! Integration tests for the args pipeline module.

mod common;

use common::{registry, strings, target, workspace};
use compile::args::{build_invocation, classify, flag_registry, ClassifiedArg};
use compile::target::{FsLister, TargetError};

// =============================================================================
// CLASSIFIER TESTS
// =============================================================================

#[test]
fn classify_mixed_command_line() {
    let args = strings(&["main", "-Wall", "--config", "my.targets", "---std=c11", "util"]);
    let result = classify(&args, &flag_registry());

    assert_eq!(
        result.args,
        vec![
            ClassifiedArg::Target("main".into()),
            ClassifiedArg::CompilerOption("-Wall".into()),
            ClassifiedArg::Own {
                flag: "--config".into(),
                value: Some("my.targets".into()),
            },
            ClassifiedArg::CompilerOption("--std=c11".into()),
            ClassifiedArg::Target("util".into()),
        ]
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn classify_keeps_option_order() {
    let args = strings(&["-O0", "a.c", "-O2", "-g"]);
    let result = classify(&args, &flag_registry());
    assert_eq!(result.compiler_options(), vec!["-O0", "-O2", "-g"]);
    assert_eq!(result.targets(), vec!["a.c"]);
}

// =============================================================================
// PIPELINE TESTS
// =============================================================================

#[test]
fn extensionless_target_starts_with_program_and_file() {
    let dir = workspace(&["main.c"]);
    let reg = registry(".c gcc -Wall -o$project\n");

    let cmd = build_invocation(&[target(dir.path(), "main")], &[], &reg, &FsLister).unwrap();
    assert_eq!(
        cmd.argv,
        vec![
            "gcc".to_string(),
            target(dir.path(), "main.c"),
            "-Wall".to_string(),
            "-omain".to_string(),
        ]
    );
    assert!(cmd.redirect.is_none());
    assert!(cmd.warnings.is_empty());
}

#[test]
fn user_options_follow_template_options() {
    let dir = workspace(&["app.c"]);
    let reg = registry(".c gcc -O2 -o$project\n");

    let cmd = build_invocation(
        &[target(dir.path(), "app.c")],
        &strings(&["-O0", "-o$project.bin"]),
        &reg,
        &FsLister,
    )
    .unwrap();
    assert_eq!(cmd.args()[1..], ["-O2", "-oapp", "-O0", "-oapp.bin"]);
}

#[test]
fn redirect_template_is_expanded() {
    let dir = workspace(&["app.cpp"]);
    let reg = registry(".cpp g++ -std=c++17 >$project.log\n");

    let cmd = build_invocation(&[target(dir.path(), "app")], &[], &reg, &FsLister).unwrap();
    assert_eq!(cmd.program(), "g++");
    assert_eq!(cmd.redirect.as_deref(), Some("app.log"));
    assert_eq!(cmd.args().last().map(String::as_str), Some("-std=c++17"));
}

#[test]
fn unknown_tokens_warn_but_do_not_fail() {
    let dir = workspace(&["app.c"]);
    let reg = registry(".c gcc -I$include\n");

    let cmd = build_invocation(
        &[target(dir.path(), "app.c")],
        &strings(&["-D$NAME=1"]),
        &reg,
        &FsLister,
    )
    .unwrap();
    assert_eq!(cmd.args()[1..], ["-I", "-D=1"]);
    assert_eq!(cmd.warnings.len(), 2);
    assert!(cmd.warnings[0].contains("include"));
    assert!(cmd.warnings[1].contains("name"));
}

#[test]
fn all_targets_are_passed_in_order() {
    let dir = workspace(&["a.c", "b.c", "c.c"]);
    let reg = registry(".c cc\n");

    let targets = vec![
        target(dir.path(), "b"),
        target(dir.path(), "a.c"),
        target(dir.path(), "c"),
    ];
    let cmd = build_invocation(&targets, &[], &reg, &FsLister).unwrap();
    assert_eq!(
        cmd.argv,
        vec![
            "cc".to_string(),
            target(dir.path(), "b.c"),
            target(dir.path(), "a.c"),
            target(dir.path(), "c.c"),
        ]
    );
}

#[test]
fn mismatched_second_target_fails_before_assembly() {
    let dir = workspace(&["a.c", "b.cpp"]);
    let reg = registry(".c gcc\n.cpp g++\n");

    let targets = vec![target(dir.path(), "a.c"), target(dir.path(), "b.cpp")];
    let err = build_invocation(&targets, &[], &reg, &FsLister).unwrap_err();
    assert!(matches!(err, TargetError::MismatchedExtension { .. }));
    assert!(err.to_string().contains("does not have '.c' extension"));
}

#[test]
fn empty_target_list_fails() {
    let reg = registry(".c gcc\n");
    let err = build_invocation(&[], &strings(&["-g"]), &reg, &FsLister).unwrap_err();
    assert!(matches!(err, TargetError::NoTargets));
}
