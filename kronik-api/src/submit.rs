use crate::{Comment, CommentId, Reply, VideoKey};

/// Form body of `POST /api/add-comment/`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub text: String,
    pub video_id: VideoKey,
}

/// Form body of `POST /api/add-reply/`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewReply {
    pub text: String,
    pub comment_id: CommentId,
    pub video_id: VideoKey,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AddCommentResponse {
    pub success: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AddReplyResponse {
    pub success: bool,
    #[serde(default)]
    pub reply: Option<Reply>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the server decided about a submission it received
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict<T> {
    Accepted(T),
    /// The server may or may not explain why
    Rejected(Option<String>),
    /// Claimed success without sending the record back
    Malformed,
}

fn verdict<T>(success: bool, record: Option<T>, error: Option<String>) -> Verdict<T> {
    match (success, record) {
        (true, Some(r)) => Verdict::Accepted(r),
        (true, None) => Verdict::Malformed,
        (false, _) => Verdict::Rejected(error.filter(|e| !e.is_empty())),
    }
}

impl AddCommentResponse {
    pub fn verdict(self) -> Verdict<Comment> {
        verdict(self.success, self.comment, self.error)
    }
}

impl AddReplyResponse {
    pub fn verdict(self) -> Verdict<Reply> {
        verdict(self.success, self.reply, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts() {
        let r: AddCommentResponse =
            serde_json::from_str(r#"{"success": false, "error": "Too long"}"#).unwrap();
        assert_eq!(r.verdict(), Verdict::Rejected(Some(String::from("Too long"))));

        let r: AddCommentResponse =
            serde_json::from_str(r#"{"success": false, "error": ""}"#).unwrap();
        assert_eq!(r.verdict(), Verdict::Rejected(None));

        let r: AddReplyResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(r.verdict(), Verdict::Malformed);

        let r: AddReplyResponse = serde_json::from_str(
            r#"{"success": true, "reply": {"id": "r9", "user_id": "anna", "text": "ok"}}"#,
        )
        .unwrap();
        match r.verdict() {
            Verdict::Accepted(reply) => assert_eq!(reply.text, "ok"),
            v => panic!("unexpected verdict {v:?}"),
        }
    }
}
