use aws_sdk_sesv2::error::{SendEmailError, SendEmailErrorKind};
use aws_sdk_sesv2::SdkError;

/// A required provider option was missing, or the sender address could not be
/// parsed. Fatal to adapter construction.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("access_key_id is required in the provider's options.")]
    MissingAccessKeyId,
    #[error("secret_access_key is required in the provider's options.")]
    MissingSecretAccessKey,
    #[error("region is required in the provider's options.")]
    MissingRegion,
    #[error("mail_from is required in the provider's options.")]
    MissingMailFrom,
    #[error("mail_from is not a valid email address: {0}")]
    InvalidMailFrom(String),
}

/// Whether a failed send is worth retrying. The adapter never retries on its
/// own; the tag is advisory for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transient,
    Permanent,
    Unknown,
}

/// A failed `SendEmail` call, normalized. The original SES error's message is
/// embedded in the Display output and the error itself is kept as the source.
#[derive(thiserror::Error)]
#[error("Failed to send notification: {message}")]
pub struct SendError {
    message: String,
    kind: FailureKind,
    #[source]
    source: anyhow::Error,
}

impl SendError {
    fn new(message: String, kind: FailureKind, source: anyhow::Error) -> Self {
        Self {
            message,
            kind,
            source,
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl From<SdkError<SendEmailError>> for SendError {
    fn from(error: SdkError<SendEmailError>) -> Self {
        let (message, kind) = match &error {
            SdkError::ServiceError { err, .. } => (err.to_string(), classify(&err.kind)),
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
                (error.to_string(), FailureKind::Transient)
            }
            _ => (error.to_string(), FailureKind::Unknown),
        };
        Self::new(message, kind, anyhow::Error::new(error))
    }
}

impl std::fmt::Debug for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn classify(kind: &SendEmailErrorKind) -> FailureKind {
    match kind {
        SendEmailErrorKind::TooManyRequestsException(_)
        | SendEmailErrorKind::LimitExceededException(_)
        | SendEmailErrorKind::SendingPausedException(_) => FailureKind::Transient,
        SendEmailErrorKind::AccountSuspendedException(_)
        | SendEmailErrorKind::BadRequestException(_)
        | SendEmailErrorKind::MailFromDomainNotVerifiedException(_)
        | SendEmailErrorKind::MessageRejected(_)
        | SendEmailErrorKind::NotFoundException(_) => FailureKind::Permanent,
        _ => FailureKind::Unknown,
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{classify, FailureKind, SendError};
    use aws_sdk_sesv2::error::{
        BadRequestException, MessageRejected, SendEmailErrorKind, SendingPausedException,
        TooManyRequestsException,
    };

    #[test]
    fn send_error_message_embeds_the_original_text() {
        let error = SendError::new(
            "Throttling".into(),
            FailureKind::Transient,
            anyhow::anyhow!("Throttling"),
        );
        assert!(error.to_string().contains("Throttling"));
        assert_eq!(FailureKind::Transient, error.kind());
    }

    #[test]
    fn debug_output_walks_the_cause_chain() {
        let source = anyhow::anyhow!("connection reset").context("request dispatch failed");
        let error = SendError::new("request dispatch failed".into(), FailureKind::Unknown, source);
        let rendered = format!("{:?}", error);
        assert!(rendered.contains("Caused by"));
        assert!(rendered.contains("connection reset"));
    }

    #[test]
    fn throttling_style_errors_classify_as_transient() {
        let throttled = SendEmailErrorKind::TooManyRequestsException(
            TooManyRequestsException::builder()
                .message("Throttling")
                .build(),
        );
        assert_eq!(FailureKind::Transient, classify(&throttled));

        let paused = SendEmailErrorKind::SendingPausedException(
            SendingPausedException::builder().build(),
        );
        assert_eq!(FailureKind::Transient, classify(&paused));
    }

    #[test]
    fn rejection_style_errors_classify_as_permanent() {
        let rejected = SendEmailErrorKind::MessageRejected(
            MessageRejected::builder()
                .message("Email address is not verified.")
                .build(),
        );
        assert_eq!(FailureKind::Permanent, classify(&rejected));

        let bad_request = SendEmailErrorKind::BadRequestException(
            BadRequestException::builder().build(),
        );
        assert_eq!(FailureKind::Permanent, classify(&bad_request));
    }
}
