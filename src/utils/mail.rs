use reqwest::{Client, ClientBuilder};
use tracing::warn;

use crate::config::config;
use crate::types::mail::SendEmail;

pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let mail_config = &config().mail;

    let payload = serde_json::to_string(&email)
        .map_err(|e| format!("serialize email failed: {e}"))?;

    let client: Client = ClientBuilder::new()
        .user_agent("mentor-match/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let res = client
        .post(&mail_config.endpoint)
        .bearer_auth(&mail_config.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res.text().await.map_err(|e| format!("read body failed: {e}"))?;

    if status.is_success() {
        Ok(body)
    } else {
        warn!("mail API error: HTTP {status}: {body}");
        Err(format!("mail API error: HTTP {status}: {body}"))
    }
}

pub async fn mail_mentorship_request(
    to: &str,
    mentee_name: &str,
    message: Option<&str>,
) -> Result<String, String> {
    let extra = message
        .map(|m| format!("\n\nTheir message:\n{m}"))
        .unwrap_or_default();
    send_email(SendEmail {
        to: vec![to.to_string()],
        subject: format!("{mentee_name} requested your mentorship"),
        text: Some(format!(
            "{mentee_name} is a new speaker looking for a mentor and asked for you.{extra}\n\nSign in to accept or decline the request."
        )),
        ..Default::default()
    })
    .await
}

pub async fn mail_request_accepted(to: &str, mentor_name: &str) -> Result<String, String> {
    send_email(SendEmail {
        to: vec![to.to_string()],
        subject: format!("{mentor_name} accepted your mentorship request"),
        text: Some(format!(
            "Good news! {mentor_name} accepted your mentorship request. Your mentorship is now active."
        )),
        ..Default::default()
    })
    .await
}

pub async fn mail_request_declined(
    to: &str,
    mentor_name: &str,
    message: Option<&str>,
) -> Result<String, String> {
    let extra = message
        .map(|m| format!("\n\nTheir message:\n{m}"))
        .unwrap_or_default();
    send_email(SendEmail {
        to: vec![to.to_string()],
        subject: format!("{mentor_name} declined your mentorship request"),
        text: Some(format!(
            "{mentor_name} declined your mentorship request.{extra}\n\nYou can browse other experienced speakers and try again."
        )),
        ..Default::default()
    })
    .await
}

pub async fn mail_mentorship_cancelled(to: &str, counterpart_name: &str) -> Result<String, String> {
    send_email(SendEmail {
        to: vec![to.to_string()],
        subject: "Your mentorship was cancelled".to_string(),
        text: Some(format!(
            "{counterpart_name} cancelled your mentorship. You can reach out to other speakers any time."
        )),
        ..Default::default()
    })
    .await
}
