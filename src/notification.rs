use serde;

/// One outbound notification, as handed over by the host framework.
/// The destination address and body parts are passed through as-is; the
/// adapter does not enforce that a body part is present.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NotificationRequest {
    pub to: String,
    #[serde(default)]
    pub content: NotificationContent,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct NotificationContent {
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
}

/// The provider-assigned message identifier. SES has historically omitted it
/// on some response shapes, so it stays an `Option` rather than defaulting.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NotificationResult {
    pub id: Option<String>,
}
