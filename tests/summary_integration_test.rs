use httpmock::prelude::*;
use roster_summary::core::SummaryRecord;
use roster_summary::{
    CliConfig, LocalStorage, OllamaClient, SummaryEngine, SummaryPipeline, SummaryError,
};
use tempfile::TempDir;

struct TestSetup {
    _input_dir: TempDir,
    _output_dir: TempDir,
    config: CliConfig,
}

fn ollama_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "llama3.2-vision",
        "message": {"role": "assistant", "content": content},
        "done": true
    })
}

fn setup(server: &MockServer, notes_text: &str) -> TestSetup {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let roster_image = input_dir.path().join("team.png");
    std::fs::write(&roster_image, [0x89, 0x50, 0x4e, 0x47]).unwrap();

    let notes_file = input_dir.path().join("notes.txt");
    std::fs::write(&notes_file, notes_text).unwrap();

    let config = CliConfig {
        roster_image: Some(roster_image.to_str().unwrap().to_string()),
        notes_file: Some(notes_file.to_str().unwrap().to_string()),
        endpoint: server.url("/api/chat"),
        model: "llama3.2-vision".to_string(),
        team_name: None,
        team_color: None,
        output_path: output_dir.path().to_str().unwrap().to_string(),
        ignore_case: false,
        whole_token: false,
        output_formats: vec!["json".to_string()],
        bundle: false,
        config: None,
        verbose: false,
        monitor: false,
    };

    TestSetup {
        _input_dir: input_dir,
        _output_dir: output_dir,
        config,
    }
}

fn engine_for(
    config: CliConfig,
) -> SummaryEngine<SummaryPipeline<LocalStorage, CliConfig, OllamaClient>> {
    let storage = LocalStorage::new(config.output_path.clone());
    let model = OllamaClient::new(config.endpoint.clone(), config.model.clone());
    let pipeline = SummaryPipeline::new(storage, config, model);
    SummaryEngine::new(pipeline)
}

#[tokio::test]
async fn test_end_to_end_summary_generation() {
    let server = MockServer::start();

    // The roster prompt asks for a JSON object; the notes prompt asks for
    // one note per line. That difference routes each call to its mock.
    let roster_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("JSON object");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply(
                "Here is the team list:\n{\"7\": \"Smith\", \"10\": \"Jones\"}",
            ));
    });

    let notes_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("one note per line");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("Great game from Smith\n10 was injured"));
    });

    let setup = setup(&server, "scribbled match notes");
    let engine = engine_for(setup.config);

    let output_path = engine.run().await.unwrap();

    roster_mock.assert();
    notes_mock.assert();

    let summary_path = std::path::Path::new(&output_path).join("summary.json");
    assert!(summary_path.exists());

    let json = std::fs::read_to_string(&summary_path).unwrap();
    let records: Vec<SummaryRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].number, "7");
    assert_eq!(records[0].name, "Smith");
    assert_eq!(records[0].comments, "Great game from Smith");
    assert_eq!(records[1].number, "10");
    assert_eq!(records[1].name, "Jones");
    assert_eq!(records[1].comments, "10 was injured");
}

#[tokio::test]
async fn test_notes_call_carries_uploaded_text() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("JSON object");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("{\"7\": \"Smith\"}"));
    });

    let notes_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("one note per line")
            .body_contains("scribbled match notes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("Smith scored twice"));
    });

    let setup = setup(&server, "scribbled match notes");
    let engine = engine_for(setup.config);

    engine.run().await.unwrap();
    notes_mock.assert();
}

#[tokio::test]
async fn test_unparsable_roster_halts_pipeline() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("JSON object");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("Sorry, I cannot read this image."));
    });

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("one note per line");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("Smith scored twice"));
    });

    let setup = setup(&server, "notes");
    let output_path = setup.config.output_path.clone();
    let engine = engine_for(setup.config);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, SummaryError::ExtractionError { .. }));

    // Pipeline halted before load: no artifacts written
    let entries: Vec<_> = std::fs::read_dir(&output_path).unwrap().collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_missing_input_fails_validation_before_any_call() {
    let server = MockServer::start();

    let chat_mock = server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("{}"));
    });

    let setup = setup(&server, "notes");
    let mut config = setup.config;
    config.roster_image = Some("/nonexistent/team.png".to_string());

    use roster_summary::utils::validation::Validate;
    assert!(config.validate().is_err());

    chat_mock.assert_hits(0);
}

#[tokio::test]
async fn test_bundle_artifact_contents() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("JSON object");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("{\"7\": \"Smith\"}"));
    });

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("one note per line");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("Great game from Smith"));
    });

    let setup = setup(&server, "notes");
    let mut config = setup.config;
    config.bundle = true;
    config.output_formats = vec!["json".to_string(), "csv".to_string()];
    let engine = engine_for(config);

    let output_path = engine.run().await.unwrap();
    let run_dir = std::path::Path::new(&output_path);

    assert!(run_dir.join("summary.json").exists());
    assert!(run_dir.join("summary.csv").exists());

    let zip_data = std::fs::read(run_dir.join("summary_bundle.zip")).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    let mut file_names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    file_names.sort();

    assert_eq!(
        file_names,
        vec!["manifest.json", "notes.txt", "roster.json", "summary.json"]
    );

    let mut notes_file = archive.by_name("notes.txt").unwrap();
    let mut notes_content = String::new();
    std::io::Read::read_to_string(&mut notes_file, &mut notes_content).unwrap();
    assert_eq!(notes_content, "Great game from Smith");
}

#[tokio::test]
async fn test_case_insensitive_matching_end_to_end() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("JSON object");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("{\"7\": \"Smith\"}"));
    });

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .body_contains("one note per line");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ollama_reply("SMITH had a great match"));
    });

    let setup = setup(&server, "notes");
    let mut config = setup.config;
    config.ignore_case = true;
    let engine = engine_for(config);

    let output_path = engine.run().await.unwrap();
    let json = std::fs::read_to_string(
        std::path::Path::new(&output_path).join("summary.json"),
    )
    .unwrap();
    let records: Vec<SummaryRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(records[0].comments, "SMITH had a great match");
}
