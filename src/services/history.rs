use crate::dto::chatbot::{HistoryResponse, MessageDto};
use crate::repository::MessageReader;

use super::{ServiceError, ServiceResult};

/// The `limit` most recent messages, newest first.
pub fn message_history<R>(limit: usize, repo: &R) -> ServiceResult<HistoryResponse>
where
    R: MessageReader,
{
    match repo.list_recent_messages(limit) {
        Ok(messages) => Ok(HistoryResponse {
            messages: messages.into_iter().map(MessageDto::from).collect(),
        }),
        Err(e) => {
            log::error!("Failed to list messages: {e}");
            Err(ServiceError::DataUnavailable(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::chatbot::{ChatMessagePayload, MessageForm};
    use crate::nlp::NullExtractor;
    use crate::repository::test::TestRepository;
    use crate::services::chatbot::process_message;

    fn send(repo: &TestRepository, text: &str) {
        let payload = ChatMessagePayload::try_from(MessageForm::new(text)).unwrap();
        process_message(payload, repo, &NullExtractor).unwrap();
    }

    #[test]
    fn newest_message_comes_first() {
        let repo = TestRepository::default();
        send(&repo, "hello");
        send(&repo, "help");

        let history = message_history(50, &repo).unwrap();
        assert_eq!(history.messages.len(), 4);
        assert!(!history.messages[0].is_user);
        assert_eq!(history.messages[1].content, "help");
        assert_eq!(history.messages[3].content, "hello");
    }

    #[test]
    fn history_respects_limit() {
        let repo = TestRepository::default();
        send(&repo, "hello");
        send(&repo, "help");
        assert_eq!(message_history(3, &repo).unwrap().messages.len(), 3);
    }
}
