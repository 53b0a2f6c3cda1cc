use generoo::cli::Runner;
use generoo::config::ConfigFormat;
use generoo::error::Error;
use generoo::persistence;
use generoo::prompt::automatic_impl::AutomaticPrompter;
use serde_json::json;
use std::fs;
use std::path::Path;

mod utils;
use utils::{assert_same_tree, generate_args, write_tree};

const SERVICE_CONFIG: &str = r#"{
  "variables": [{"name": "version", "value": "0.0.1"}],
  "prompts": [
    {
      "name": "artifact_id",
      "text": "Artifact id",
      "validations": [{"evaluation": "REGEX", "value": "[a-z]"}],
      "transformations": [
        {"name": "artifact_id_cap", "transformation": "CAPITALIZED"},
        {"name": "artifact_id_snake", "transformation": "snake"}
      ]
    },
    {
      "name": "group_id",
      "text": "Group id",
      "default": "com.example",
      "transformations": [{"name": "group_id_slashes", "transformation": "SLASHES"}]
    },
    {
      "name": "include_db",
      "text": "Include a database?",
      "type": "BOOL",
      "default": "n",
      "follow_ups": [
        {
          "name": "db_name",
          "text": "Database name",
          "default": "app",
          "conditions": [{"evaluation": "BOOL", "value": true}]
        }
      ]
    }
  ]
}"#;

fn service_template(root: &Path) {
    write_tree(
        root,
        &[
            ("project-template-config.json", SERVICE_CONFIG),
            ("{{artifact_id}}/README.md", "# {{artifact_id_cap}} {{version}}\n"),
            (
                "{{artifact_id}}/src/{{group_id_slashes}}/{{artifact_id_cap}}.java",
                "package {{group_id}};\n\npublic class {{artifact_id_cap}} {}\n",
            ),
            ("{{artifact_id}}/{{#include_db}}db/schema.sql", "CREATE DATABASE {{db_name}};\n"),
        ],
    );
}

fn strip_generoo_dir(project: &Path) {
    assert!(project.join(".generoo").is_dir());
    fs::remove_dir_all(project.join(".generoo")).unwrap();
}

#[test_log::test]
fn generates_service_with_follow_up() {
    let template = tempfile::tempdir().unwrap();
    service_template(template.path());
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("my-service");

    let provider = AutomaticPrompter::new()
        .with_text_response("Artifact id", "my-service")
        .with_text_response("Group id", "")
        .with_text_response("Include a database?", "yes")
        .with_text_response("Database name", "orders");

    let run_config =
        Runner::new(generate_args(project.clone(), template.path()), &provider).run().unwrap();

    assert_eq!(run_config["artifact_id_cap"], json!("MyService"));
    assert_eq!(run_config["artifact_id_snake"], json!("my_service"));
    assert_eq!(run_config["group_id_slashes"], json!("com/example"));
    assert_eq!(run_config["db_name"], json!("orders"));
    assert_eq!(run_config["version"], json!("0.0.1"));

    let expected = tempfile::tempdir().unwrap();
    write_tree(
        expected.path(),
        &[
            ("my-service/README.md", "# MyService 0.0.1\n"),
            (
                "my-service/src/com/example/MyService.java",
                "package com.example;\n\npublic class MyService {}\n",
            ),
            ("my-service/db/schema.sql", "CREATE DATABASE orders;\n"),
        ],
    );

    strip_generoo_dir(&project);
    assert_same_tree(&project, expected.path());
}

#[test_log::test]
fn skips_conditional_paths_and_follow_ups() {
    let template = tempfile::tempdir().unwrap();
    service_template(template.path());
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("lean");

    let provider = AutomaticPrompter::new()
        .with_text_response("Artifact id", "lean")
        .with_text_response("Group id", "org.acme")
        .with_text_response("Include a database?", "");

    let run_config =
        Runner::new(generate_args(project.clone(), template.path()), &provider).run().unwrap();

    assert_eq!(run_config["include_db"], json!("n"));
    assert!(!run_config.contains_key("db_name"));
    assert_eq!(provider.times_asked("Database name"), 0);

    let expected = tempfile::tempdir().unwrap();
    write_tree(
        expected.path(),
        &[
            ("lean/README.md", "# Lean 0.0.1\n"),
            ("lean/src/org/acme/Lean.java", "package org.acme;\n\npublic class Lean {}\n"),
        ],
    );

    strip_generoo_dir(&project);
    assert_same_tree(&project, expected.path());
}

#[test_log::test]
fn retries_until_answer_validates() {
    let template = tempfile::tempdir().unwrap();
    service_template(template.path());
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("retry");

    let provider = AutomaticPrompter::new()
        .with_text_response("Artifact id", "9lives")
        .with_text_response("Artifact id", "retry")
        .with_fallback("");

    let run_config =
        Runner::new(generate_args(project.clone(), template.path()), &provider).run().unwrap();

    assert_eq!(run_config["artifact_id"], json!("retry"));
    assert_eq!(provider.times_asked("Artifact id"), 2);
    let second = &provider.asked()[1];
    assert!(second.hint.as_deref().unwrap().contains("Must match regular expression: [a-z]."));
}

#[test_log::test]
fn regenerates_from_saved_configuration() {
    let template = tempfile::tempdir().unwrap();
    service_template(template.path());
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("my-service");

    let first = AutomaticPrompter::new()
        .with_text_response("Artifact id", "my-service")
        .with_text_response("Group id", "io.demo")
        .with_text_response("Include a database?", "y")
        .with_text_response("Database name", "orders");
    let initial =
        Runner::new(generate_args(project.clone(), template.path()), &first).run().unwrap();

    let saved = persistence::load_prior(&project, None).unwrap();
    assert_eq!(saved.len(), initial.len());
    assert_eq!(saved["group_id"], json!("io.demo"));

    // Every prompt was answered before, so auto-configuration asks nothing.
    let replay = AutomaticPrompter::new();
    let mut args = generate_args(project.clone(), template.path());
    args.auto_config = true;
    let regenerated = Runner::new(args, &replay).run().unwrap();

    assert!(replay.asked().is_empty());
    assert_eq!(regenerated, initial);
    assert_eq!(
        fs::read_to_string(project.join("my-service/db/schema.sql")).unwrap(),
        "CREATE DATABASE orders;\n"
    );
}

#[test_log::test]
fn prior_answers_become_defaults_without_auto_config() {
    let template = tempfile::tempdir().unwrap();
    service_template(template.path());
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("svc");

    let mut prior = generoo::config::RunConfiguration::new();
    prior.insert("artifact_id".to_string(), json!("svc"));
    prior.insert("group_id".to_string(), json!("net.prior"));
    persistence::save(&project, &prior, ConfigFormat::Json).unwrap();

    let provider = AutomaticPrompter::new().with_fallback("");
    let run_config =
        Runner::new(generate_args(project.clone(), template.path()), &provider).run().unwrap();

    assert_eq!(run_config["group_id"], json!("net.prior"));
    assert_eq!(provider.asked()[1].default.as_deref(), Some("net.prior"));
    assert!(project.join("svc/src/net/prior/Svc.java").is_file());
}

#[test_log::test]
fn no_config_ignores_prior_answers() {
    let template = tempfile::tempdir().unwrap();
    service_template(template.path());
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("svc");

    let mut prior = generoo::config::RunConfiguration::new();
    prior.insert("group_id".to_string(), json!("net.prior"));
    persistence::save(&project, &prior, ConfigFormat::Yaml).unwrap();

    let provider = AutomaticPrompter::new()
        .with_text_response("Artifact id", "svc")
        .with_fallback("");
    let mut args = generate_args(project.clone(), template.path());
    args.no_config = true;
    let run_config = Runner::new(args, &provider).run().unwrap();

    assert_eq!(run_config["group_id"], json!("com.example"));
}

#[test]
fn malformed_configuration_aborts_before_writing() {
    let template = tempfile::tempdir().unwrap();
    write_tree(
        template.path(),
        &[
            (
                "project-template-config.yml",
                "variables:\n  - name: ''\n    value: 1\nprompts: []\n",
            ),
            ("file.txt", "content"),
        ],
    );
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("broken");

    let provider = AutomaticPrompter::new();
    let err = Runner::new(generate_args(project.clone(), template.path()), &provider)
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::MalformedConfig(_)));
    assert!(!project.exists());
}

#[test]
fn mappings_restrict_generated_files() {
    let template = tempfile::tempdir().unwrap();
    write_tree(
        template.path(),
        &[
            (
                "project-template-config.yml",
                concat!(
                    "prompts:\n",
                    "  - name: name\n",
                    "    text: Name\n",
                    "mappings:\n",
                    "  - template: api\n",
                    "    destination: '{{name}}-api'\n",
                    "  - template: shared/LICENSE\n",
                    "    destination: LICENSE\n",
                ),
            ),
            ("api/Main.txt", "api for {{name}}\n"),
            ("shared/LICENSE", "MIT\n"),
            ("unmapped/ignored.txt", "never generated\n"),
        ],
    );
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("mapped");

    let provider = AutomaticPrompter::new().with_text_response("Name", "orders");
    Runner::new(generate_args(project.clone(), template.path()), &provider).run().unwrap();

    let expected = tempfile::tempdir().unwrap();
    write_tree(
        expected.path(),
        &[("orders-api/Main.txt", "api for orders\n"), ("LICENSE", "MIT\n")],
    );
    strip_generoo_dir(&project);
    assert_same_tree(&project, expected.path());
}
