use crate::{
    article::ArticleId,
    vote::Votable,
};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

/// A comment on an article. The `article_id` is validated when the comment
/// is created and not re-checked afterwards.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub username: String,
    pub article_id: ArticleId,
    pub upvoted_by: Vec<String>,
    pub downvoted_by: Vec<String>,
}

impl Votable for Comment {
    fn votes_mut(&mut self) -> (&mut Vec<String>, &mut Vec<String>) {
        (&mut self.upvoted_by, &mut self.downvoted_by)
    }
}

/// Body of `POST /comments` and `PUT /comments/:id`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentPayload {
    pub comment: Option<NewComment>,
}

/// The client-controlled fields of a comment. Invalid submissions are
/// echoed back to the client, so absent fields stay absent on the wire.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<ArticleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
