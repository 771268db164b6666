use mentorlink::client::{api::request::MultipartForm, error::Error};
use mentorlink_test_utils::prelude::*;
use mockito::Matcher;
use serde::{Deserialize, Serialize};

use crate::TestSetupExt;

#[derive(Serialize)]
struct FeedbackDto {
    rating: u8,
    comment: String,
}

#[derive(Deserialize, Debug)]
struct CreatedDto {
    id: String,
}

#[tokio::test]
/// Expect POST to serialize the structured body as JSON
async fn post_sends_json_body() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let api = test.api_client();
    let mock = test
        .server
        .mock("POST", "/api/feedback")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            serde_json::json!({"rating": 5, "comment": "great session"}),
        ))
        .with_status(201)
        .with_body(r#"{"id":"f1"}"#)
        .create_async()
        .await;

    let feedback = FeedbackDto {
        rating: 5,
        comment: "great session".to_string(),
    };
    let created: CreatedDto = api.post("/feedback", &feedback).await?;

    assert_eq!(created.id, "f1");
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect a multipart form to carry the transport's boundary, not the JSON default
async fn post_form_leaves_content_type_to_transport() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let api = test.api_client();
    let mock = test
        .server
        .mock("POST", "/api/uploads")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"id":"up1"}"#)
        .create_async()
        .await;

    let form = MultipartForm::new().text("title", "Week 1").file(
        "file",
        "recording.webm",
        "video/webm",
        vec![0, 1, 2, 3],
    );
    let created: CreatedDto = api.post_form("/uploads", form).await?;

    assert_eq!(created.id, "up1");
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect PUT to send its body with the PUT method
async fn put_sends_json_body() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .api()
        .create_json_endpoint("PUT", "/feedback/f1", 200, serde_json::json!({"id": "f1"}))
        .await;
    let api = test.api_client();

    let feedback = FeedbackDto {
        rating: 4,
        comment: "updated".to_string(),
    };
    let updated: CreatedDto = api.put("/feedback/f1", &feedback).await?;

    assert_eq!(updated.id, "f1");
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect a multipart PUT to carry the transport's boundary content type
async fn put_form_leaves_content_type_to_transport() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let api = test.api_client();
    let mock = test
        .server
        .mock("PUT", "/api/uploads/up1")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"id":"up1"}"#)
        .create_async()
        .await;

    let form = MultipartForm::new().text("title", "Week 1, revised").file(
        "file",
        "notes.txt",
        "text/plain",
        b"agenda".to_vec(),
    );
    let updated: CreatedDto = api.put_form("/uploads/up1", form).await?;

    assert_eq!(updated.id, "up1");
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect DELETE with a 204 response to decode into unit
async fn delete_accepts_empty_response() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .api()
        .create_raw_endpoint("DELETE", "/feedback/f1", 204, "")
        .await;
    let api = test.api_client();

    let _: () = api.delete("/feedback/f1").await?;

    mock.assert_async().await;

    Ok(())
}
