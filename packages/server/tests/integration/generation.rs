use std::io::{Cursor, Read};

use generator::{ArchiveBuilder, CommandSpec, GenerateRequest};
use serde_json::json;
use zip::ZipArchive;

use crate::common::{TestApp, routes};

fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("Download should be a valid ZIP");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    text
}

mod generate {
    use super::*;

    #[tokio::test]
    async fn valid_request_returns_id_and_download_url() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::GENERATE,
                &json!({
                    "plugin_name": "My Plugin",
                    "package_name": "com.example.myplugin",
                    "description": "A friendly plugin",
                    "commands": [{"name": "hello", "description": "Say hello"}],
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        let id = res.id();
        assert_eq!(res.body["download_url"], format!("/api/download/{id}"));
        assert_eq!(res.body["message"], "Plugin generated successfully");
        assert!(res.body["archive_size"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn each_call_creates_a_new_record() {
        let app = TestApp::spawn().await;

        let first = app.generate("Demo", "com.example.demo").await;
        let second = app.generate("Demo", "com.example.demo").await;

        assert_ne!(first, second);
        let history = app.get(routes::HISTORY).await;
        assert_eq!(history.body["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn package_without_separator_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::GENERATE,
                &json!({"plugin_name": "Demo", "package_name": "noseparator"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
        assert!(
            res.body["message"]
                .as_str()
                .unwrap()
                .contains("com.example.plugin")
        );
    }

    #[tokio::test]
    async fn empty_package_is_rejected_and_nothing_is_stored() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::GENERATE,
                &json!({"plugin_name": "Demo", "package_name": ""}),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");

        let history = app.get(routes::HISTORY).await;
        assert_eq!(history.status, 200);
        assert!(history.body["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_required_field_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::GENERATE, &json!({"plugin_name": "Demo"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::GENERATE, "{not json").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
    }
}

mod download {
    use super::*;

    #[tokio::test]
    async fn returns_the_generated_archive() {
        let app = TestApp::spawn().await;
        let id = app.generate("My Plugin", "com.example.myplugin").await;

        let res = app.get_bytes(&routes::download(&id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header("content-type"), Some("application/zip"));
        assert!(
            res.header("content-disposition")
                .unwrap()
                .starts_with("attachment; filename=\"my-plugin.zip\"")
        );

        let expected = ArchiveBuilder::new()
            .unwrap()
            .build(
                &GenerateRequest::new("My Plugin", "com.example.myplugin")
                    .with_command(CommandSpec::new("hello").with_description("Say hello")),
            )
            .unwrap();
        assert_eq!(res.bytes, expected.bytes);
    }

    #[tokio::test]
    async fn archive_holds_the_project_files() {
        let app = TestApp::spawn().await;
        let res = app
            .post(
                routes::GENERATE,
                &json!({
                    "plugin_name": "Spawner",
                    "package_name": "com.example.spawner",
                    "commands": [
                        {"name": "spawn", "description": "Spawn a mob"},
                        {"name": "   "},
                        {"name": "heal"},
                    ],
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let download = app.get_bytes(&routes::download(&res.id())).await;
        assert_eq!(download.status, 200);

        assert_eq!(
            entry_names(&download.bytes),
            vec![
                ".gitignore",
                "plugin.yml",
                "pom.xml",
                "src/main/java/com/example/spawner/Main.java",
                "src/main/java/com/example/spawner/commands/HealCommand.java",
                "src/main/java/com/example/spawner/commands/SpawnCommand.java",
            ]
        );

        let manifest = read_entry(&download.bytes, "plugin.yml");
        assert!(manifest.contains("name: Spawner"));
        assert!(manifest.contains("main: com.example.spawner.Main"));
        assert!(manifest.contains("  spawn:"));
        assert!(manifest.contains("  heal:"));

        let handler = read_entry(
            &download.bytes,
            "src/main/java/com/example/spawner/commands/SpawnCommand.java",
        );
        assert!(handler.contains("package com.example.spawner.commands;"));
        assert!(handler.contains("sender.sendMessage(\"Spawn a mob\");"));
    }

    #[tokio::test]
    async fn case_distinct_commands_share_one_handler() {
        let app = TestApp::spawn().await;
        let res = app
            .post(
                routes::GENERATE,
                &json!({
                    "plugin_name": "Greeter",
                    "package_name": "com.example.greeter",
                    "commands": [{"name": "hello"}, {"name": "Hello", "description": "Hi!"}],
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let download = app.get_bytes(&routes::download(&res.id())).await;
        let manifest = read_entry(&download.bytes, "plugin.yml");
        assert!(manifest.contains("  hello:\n"));
        assert!(manifest.contains("  Hello:\n"));

        let handler = read_entry(
            &download.bytes,
            "src/main/java/com/example/greeter/commands/HelloCommand.java",
        );
        assert!(handler.contains("sender.sendMessage(\"Hi!\");"));

        let history = app.get(routes::HISTORY).await;
        assert_eq!(history.body["items"][0]["files"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::download("0192f3a4-0000-7000-8000-000000000000"))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.code(), "NOT_FOUND");
        assert_eq!(res.body["message"], "Archive not found");
    }

    #[tokio::test]
    async fn malformed_id_is_distinct_from_missing() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::download("not-a-valid-id")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "INVALID_ID");
    }
}

mod history {
    use super::*;

    #[tokio::test]
    async fn lists_newest_first_up_to_limit() {
        let app = TestApp::spawn().await;
        app.generate("First", "com.example.first").await;
        let second = app.generate("Second", "com.example.second").await;
        let third = app.generate("Third", "com.example.third").await;

        let res = app.get(&routes::history_with_limit(2)).await;

        assert_eq!(res.status, 200);
        let items = res.body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], third.as_str());
        assert_eq!(items[1]["id"], second.as_str());
        assert_eq!(items[0]["plugin_name"], "Third");
    }

    #[tokio::test]
    async fn entries_carry_metadata_without_archive() {
        let app = TestApp::spawn().await;
        app.generate("Demo", "com.example.demo").await;

        let res = app.get(routes::HISTORY).await;

        let item = &res.body["items"][0];
        assert_eq!(item["package_name"], "com.example.demo");
        assert_eq!(item["api"], "spigot");
        assert_eq!(item["commands"][0]["name"], "hello");
        assert_eq!(
            item["files"],
            json!([
                "plugin.yml",
                "src/main/java/com/example/demo/Main.java",
                "src/main/java/com/example/demo/commands/HelloCommand.java",
            ])
        );
        assert!(item["archive_size"].as_u64().unwrap() > 0);
        assert!(item["created_at"].is_string());
        assert!(item.get("archive").is_none());
    }

    #[tokio::test]
    async fn empty_store_returns_empty_list() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::HISTORY).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({"items": []}));
    }
}

mod storage_unavailable {
    use super::*;

    #[tokio::test]
    async fn generate_reports_storage_unavailable() {
        let app = TestApp::spawn_unavailable().await;

        let res = app
            .post(
                routes::GENERATE,
                &json!({"plugin_name": "Demo", "package_name": "com.example.demo"}),
            )
            .await;

        assert_eq!(res.status, 500);
        assert_eq!(res.code(), "STORAGE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn validation_still_runs_first() {
        let app = TestApp::spawn_unavailable().await;

        let res = app
            .post(
                routes::GENERATE,
                &json!({"plugin_name": "Demo", "package_name": "flat"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn download_and_history_report_storage_unavailable() {
        let app = TestApp::spawn_unavailable().await;

        let download = app
            .get(&routes::download("0192f3a4-0000-7000-8000-000000000000"))
            .await;
        assert_eq!(download.status, 500);
        assert_eq!(download.code(), "STORAGE_UNAVAILABLE");

        let malformed = app.get(&routes::download("nope")).await;
        assert_eq!(malformed.status, 400);
        assert_eq!(malformed.code(), "INVALID_ID");

        let history = app.get(routes::HISTORY).await;
        assert_eq!(history.status, 500);
        assert_eq!(history.code(), "STORAGE_UNAVAILABLE");
    }
}
