use bizplan_ai::{sample_pitch, PitchService};
use bizplan_core::{BizPlanError, LLMConfig, PitchField, PitchGeneratorPage, PitchRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> PitchRequest {
    PitchRequest {
        project_name: "Harvest Hub".to_string(),
        industry: "Agriculture".to_string(),
        problem: "Small farms lose produce before it reaches buyers".to_string(),
        solution: "A cold-chain marketplace".to_string(),
        target: "Regional grocers".to_string(),
        budget: "$100K - $500K".to_string(),
        timeline: "1-2 years".to_string(),
    }
}

fn config_for(server: &MockServer, api_key: Option<&str>) -> LLMConfig {
    LLMConfig {
        api_key: api_key.map(str::to_string),
        base_url: format!("{}/v1", server.uri()),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 300, "total_tokens": 420 }
    })
}

#[tokio::test]
async fn online_pitch_posts_chat_completion_and_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 1500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("# Harvest Hub pitch")))
        .expect(1)
        .mount(&server)
        .await;

    let service = PitchService::from_config(&config_for(&server, Some("sk-test"))).unwrap();
    assert!(service.is_online());

    let text = service.generate_pitch(&request()).await.unwrap();
    assert_eq!(text, "# Harvest Hub pitch");
}

#[tokio::test]
async fn request_carries_system_and_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let service = PitchService::from_config(&config_for(&server, Some("sk-test"))).unwrap();
    service.generate_pitch(&request()).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    let user = messages[1]["content"].as_str().unwrap();
    assert!(user.contains("Project Name: Harvest Hub"));
    assert!(user.contains("Timeline: 1-2 years"));
}

#[tokio::test]
async fn server_error_surfaces_generic_failure_and_page_keeps_no_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let service = PitchService::from_config(&config_for(&server, Some("sk-test"))).unwrap();
    let mut page = PitchGeneratorPage::with_form(request());

    let err = page.submit(&service).await.unwrap_err();
    assert!(matches!(err, BizPlanError::PitchGeneration));
    assert_eq!(
        err.to_string(),
        "Failed to generate pitch. Please check your API key and try again."
    );
    assert!(!page.is_busy());
    assert!(page.generated_pitch().is_none());
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = PitchService::from_config(&config_for(&server, Some("sk-test"))).unwrap();
    let err = service.generate_pitch(&request()).await.unwrap_err();
    assert!(matches!(err, BizPlanError::PitchGeneration));
}

#[tokio::test]
async fn empty_choices_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let service = PitchService::from_config(&config_for(&server, Some("sk-test"))).unwrap();
    assert!(service.generate_pitch(&request()).await.is_err());
}

#[tokio::test]
async fn missing_or_placeholder_key_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    for key in [None, Some(""), Some("YOUR_API_KEY")] {
        let service = PitchService::from_config(&config_for(&server, key)).unwrap();
        assert!(!service.is_online());

        let mut page = PitchGeneratorPage::with_form(request());
        page.submit(&service).await.unwrap();

        let text = page.generated_pitch().unwrap();
        assert_eq!(text, sample_pitch(&request()));
        for field in PitchField::ALL {
            assert!(text.contains(request().get(field)));
        }
    }
}
