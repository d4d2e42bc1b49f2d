//! Tests for conversation threading and image fan-out in the model gateway.

mod test_utils;

use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockImageModel, MockResponse, MockTextModel};
use vignette_core::{ConversationId, Role};
use vignette_error::{GenerationErrorKind, VignetteErrorKind};
use vignette_interface::ConversationStore;
use vignette_workflow::{InMemoryConversationStore, ModelGateway};

fn gateway(
    text: MockTextModel,
    images: MockImageModel,
) -> (ModelGateway, Arc<MockTextModel>, Arc<MockImageModel>, InMemoryConversationStore) {
    let text = Arc::new(text);
    let images = Arc::new(images);
    let store = InMemoryConversationStore::new();
    let gateway = ModelGateway::new(text.clone(), images.clone(), Arc::new(store.clone()));
    (gateway, text, images, store)
}

#[tokio::test]
async fn test_threaded_calls_accumulate_two_turns_each() -> anyhow::Result<()> {
    let (gateway, text, _, store) = gateway(MockTextModel::storyteller(), MockImageModel::new());
    let id = ConversationId::generate();

    for round in 0..4 {
        gateway.generate_text(&format!("prompt {round}"), Some(&id)).await?;
    }

    let messages = store.messages(&id).await;
    assert_eq!(messages.len(), 8);
    for (position, message) in messages.iter().enumerate() {
        let expected = if position % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(message.role, expected);
    }
    assert!(messages.windows(2).all(|w| w[0].created_at <= w[1].created_at));

    // The last call saw the whole thread, ending with its own prompt
    let sent = text.sent(3);
    assert_eq!(sent.len(), 7);
    assert_eq!(sent[6].content, "prompt 3");
    assert_eq!(sent[6].role, Role::User);
    Ok(())
}

#[tokio::test]
async fn test_stateless_call_leaves_existing_threads_alone() -> anyhow::Result<()> {
    let (gateway, text, _, store) = gateway(MockTextModel::storyteller(), MockImageModel::new());
    let id = ConversationId::generate();
    gateway.generate_text("first", Some(&id)).await?;
    let before = store.history(&id).await?;

    gateway.generate_text("one-off", None).await?;

    assert_eq!(store.history(&id).await?, before);
    // The stateless call saw only its own prompt but was still recorded
    assert_eq!(text.sent(1).len(), 1);
    assert_eq!(store.thread_count().await, 2);
    assert_eq!(store.len().await, 4);
    Ok(())
}

#[tokio::test]
async fn test_failed_call_keeps_only_user_turn() -> anyhow::Result<()> {
    let text = MockTextModel::new_sequence(vec![MockResponse::Error(GenerationErrorKind::Api {
        status: 429,
        message: "rate limited".to_string(),
    })]);
    let (gateway, _, _, store) = gateway(text, MockImageModel::new());
    let id = ConversationId::generate();

    let err = gateway.generate_text("write", Some(&id)).await.unwrap_err();
    assert!(err.is_upstream());

    let messages = store.messages(&id).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::User);

    // A retry continues the thread with both prompts visible
    gateway.generate_text("write again", Some(&id)).await?;
    assert_eq!(store.messages(&id).await.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_blank_reply_is_a_generation_failure() {
    let (gateway, _, _, store) = gateway(MockTextModel::new_success("   "), MockImageModel::new());
    let id = ConversationId::generate();

    let err = gateway.generate_text("write", Some(&id)).await.unwrap_err();
    match err.kind() {
        VignetteErrorKind::Generation(err) => assert_eq!(err.kind, GenerationErrorKind::EmptyReply),
        other => panic!("expected generation error, got {other}"),
    }
    assert_eq!(store.messages(&id).await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_provider_timeout() {
    let (gateway, _, _, store) =
        gateway(MockTextModel::new_slow(Duration::from_secs(30)), MockImageModel::new());
    let gateway = gateway.with_timeout(Duration::from_secs(5));
    let id = ConversationId::generate();

    let err = gateway.generate_text("write", Some(&id)).await.unwrap_err();
    match err.kind() {
        VignetteErrorKind::Generation(err) => assert_eq!(err.kind, GenerationErrorKind::Timeout(5_000)),
        other => panic!("expected generation error, got {other}"),
    }
    assert_eq!(store.messages(&id).await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sub_second_timeout_is_reported_in_milliseconds() {
    let (gateway, _, _, _) =
        gateway(MockTextModel::new_slow(Duration::from_secs(2)), MockImageModel::new());
    let gateway = gateway.with_timeout(Duration::from_millis(500));

    let err = gateway.generate_text("write", None).await.unwrap_err();
    match err.kind() {
        VignetteErrorKind::Generation(inner) => {
            assert_eq!(inner.kind, GenerationErrorKind::Timeout(500));
        }
        other => panic!("expected generation error, got {other}"),
    }
    assert!(err.to_string().contains("500 ms"));
}

#[tokio::test(start_paused = true)]
async fn test_image_candidates_run_concurrently() -> anyhow::Result<()> {
    let (gateway, _, images, _) = gateway(
        MockTextModel::storyteller(),
        MockImageModel::new().with_delay(Duration::from_secs(2)),
    );

    let started = tokio::time::Instant::now();
    let urls = gateway.generate_image_candidates("a robot", 3).await?;

    assert_eq!(urls.len(), 3);
    assert_eq!(images.call_count(), 3);
    assert!(started.elapsed() < Duration::from_secs(4));
    Ok(())
}

#[tokio::test]
async fn test_one_failed_image_fails_the_batch() {
    let (gateway, _, images, _) =
        gateway(MockTextModel::storyteller(), MockImageModel::new().failing_on(1));

    let err = gateway.generate_image_candidates("a robot", 3).await.unwrap_err();
    assert!(err.is_upstream());
    assert!(images.call_count() >= 2);
}

#[tokio::test]
async fn test_preview_parts_is_keyed_and_stateless() -> anyhow::Result<()> {
    let (gateway, _, _, store) = gateway(MockTextModel::storyteller(), MockImageModel::new());

    let preview = gateway.preview_parts("The robot found a flower.", 4).await?;

    assert_eq!(preview.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(preview[&1].title, "Part 1");
    assert_eq!(store.thread_count().await, 1);
    Ok(())
}
