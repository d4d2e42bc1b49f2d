use serde_json::json;
use vignette_core::ChatMessage;
use vignette_models::{
    ChatCompletionResponse, ImageGenerationResponse, api_error_message, image_url_from_response,
    reply_from_response, to_chat_request,
};

#[test]
fn chat_request_keeps_turn_order_and_roles() {
    let messages = vec![
        ChatMessage::user("Write a story"),
        ChatMessage::assistant("Once upon a time"),
        ChatMessage::user("Make it sadder"),
    ];

    let request = to_chat_request(&messages, "gpt-4", 0.7).unwrap();
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][1]["role"], "assistant");
    assert_eq!(body["messages"][2]["content"], "Make it sadder");
    let temperature = body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[test]
fn reply_is_first_choice_content() {
    let response: ChatCompletionResponse = serde_json::from_value(json!({
        "id": "chatcmpl-1",
        "model": "gpt-4",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "A robot"}, "finish_reason": "stop"}
        ]
    }))
    .unwrap();

    assert_eq!(reply_from_response(response).unwrap(), "A robot");
}

#[test]
fn null_or_blank_content_is_an_empty_reply() {
    let null_content: ChatCompletionResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": null}}]
    }))
    .unwrap();
    let err = reply_from_response(null_content).unwrap_err();
    assert!(err.is_upstream());

    let no_choices: ChatCompletionResponse =
        serde_json::from_value(json!({"choices": []})).unwrap();
    assert!(reply_from_response(no_choices).is_err());

    let blank: ChatCompletionResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": "   "}}]
    }))
    .unwrap();
    assert!(reply_from_response(blank).is_err());
}

#[test]
fn image_url_is_first_data_entry() {
    let response: ImageGenerationResponse = serde_json::from_value(json!({
        "created": 1700000000,
        "data": [{"url": "https://img.example/1.png", "revised_prompt": "a robot"}]
    }))
    .unwrap();
    assert_eq!(
        image_url_from_response(response).unwrap(),
        "https://img.example/1.png"
    );

    let missing: ImageGenerationResponse =
        serde_json::from_value(json!({"created": 1, "data": [{"b64_json": "AAAA"}]})).unwrap();
    assert!(image_url_from_response(missing).is_err());
}

#[test]
fn api_error_message_prefers_provider_message() {
    let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
    assert_eq!(api_error_message(body), "Incorrect API key provided");
    assert_eq!(api_error_message("Bad Gateway\n"), "Bad Gateway");
}
