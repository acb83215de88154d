use httpmock::prelude::*;
use landscape_gen::{CliConfig, Engine, Landscape, LandscapePipeline, LocalStorage, LogoResolver};
use tempfile::TempDir;

fn config(api_endpoint: String, output: String) -> CliConfig {
    CliConfig {
        input: None,
        output,
        api_endpoint,
        logo_dir: None,
        verbose: false,
    }
}

fn sample_projects() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "Project A",
            "summary": "First project",
            "url": "https://a.example",
            "category": "Runtime / Core",
            "state": "Mature",
            "github_repos": [{"url": "https://github.com/a/a"}],
            "logo": "https://a.example/logo.svg"
        },
        {
            "name": "Project B",
            "summary": "Second project",
            "category": "Runtime / Tooling",
            "state": "",
            "github_repos": []
        },
        {
            "name": "Project C",
            "category": "Simulation"
        },
        {
            "name": "Project D"
        }
    ])
}

#[tokio::test]
async fn test_end_to_end_generation_from_api() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("data.yml");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/projects");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_projects());
    });

    let config = config(
        server.url("/projects"),
        output.to_str().unwrap().to_string(),
    );

    let pipeline = LandscapePipeline::new(LocalStorage::new(), config, LogoResolver::keep_urls());
    let result = Engine::new(pipeline).run().await;

    assert!(result.is_ok());
    api_mock.assert();
    assert!(output.exists());

    let yaml = std::fs::read_to_string(&output).unwrap();
    let landscape: Landscape = serde_yaml::from_str(&yaml).unwrap();

    // Four records in, four items out.
    let total: usize = landscape
        .categories
        .iter()
        .flat_map(|c| &c.subcategories)
        .map(|s| s.items.len())
        .sum();
    assert_eq!(total, 4);

    // First-seen category order, with the defaults for C and D.
    let names: Vec<&str> = landscape
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Runtime", "Simulation", "Unknown"]);

    let runtime = &landscape.categories[0];
    assert_eq!(runtime.subcategories[0].name, "Core");
    assert_eq!(runtime.subcategories[1].name, "Tooling");

    let item_a = &runtime.subcategories[0].items[0];
    assert_eq!(item_a.name.as_deref(), Some("Project A"));
    assert_eq!(item_a.description.as_deref(), Some("First project"));
    assert_eq!(item_a.homepage_url.as_deref(), Some("https://a.example"));
    assert_eq!(item_a.project.as_deref(), Some("Mature"));
    assert_eq!(item_a.repo_url.as_deref(), Some("https://github.com/a/a"));
    assert_eq!(item_a.logo, "https://a.example/logo.svg");

    // Empty state and empty repo list are omitted, never null.
    let item_b = &runtime.subcategories[1].items[0];
    assert_eq!(item_b.project, None);
    assert_eq!(item_b.repo_url, None);
    assert_eq!(item_b.logo, "placeholder.svg");
    assert!(!yaml.contains("project: null"));
    assert!(!yaml.contains("repo_url: null"));

    assert_eq!(landscape.categories[1].subcategories[0].name, "Misc");
    assert_eq!(landscape.categories[2].name, "Unknown");
}

#[tokio::test]
async fn test_api_failure_produces_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("data.yml");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/projects");
        then.status(503);
    });

    let config = config(
        server.url("/projects"),
        output.to_str().unwrap().to_string(),
    );

    let pipeline = LandscapePipeline::new(LocalStorage::new(), config, LogoResolver::keep_urls());
    let result = Engine::new(pipeline).run().await;

    api_mock.assert();
    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_local_input_file_skips_network() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("data.yml");
    let input = temp_dir.path().join("projects.json");
    std::fs::write(&input, sample_projects().to_string()).unwrap();

    let mut config = config(
        "http://unused.invalid".to_string(),
        output.to_str().unwrap().to_string(),
    );
    config.input = Some(input.to_str().unwrap().to_string());

    let pipeline = LandscapePipeline::new(LocalStorage::new(), config, LogoResolver::keep_urls());
    let result = Engine::new(pipeline).run().await;

    assert!(result.is_ok());
    assert!(output.exists());
}

#[tokio::test]
async fn test_rerun_with_identical_input_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projects.json");
    std::fs::write(&input, sample_projects().to_string()).unwrap();

    let mut outputs = Vec::new();
    for name in ["first.yml", "second.yml"] {
        let output = temp_dir.path().join(name);
        let mut config = config(
            "http://unused.invalid".to_string(),
            output.to_str().unwrap().to_string(),
        );
        config.input = Some(input.to_str().unwrap().to_string());

        let pipeline =
            LandscapePipeline::new(LocalStorage::new(), config, LogoResolver::keep_urls());
        Engine::new(pipeline).run().await.unwrap();
        outputs.push(std::fs::read_to_string(&output).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}
