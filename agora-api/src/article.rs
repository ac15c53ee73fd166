use crate::{
    comment::CommentId,
    vote::Votable,
};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ArticleId(pub u64);

/// A submitted link. Ids come from a monotonic counter and are never
/// reused, even after the article is deleted.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub url: String,
    pub username: String,
    pub comment_ids: Vec<CommentId>,
    pub upvoted_by: Vec<String>,
    pub downvoted_by: Vec<String>,
}

impl Article {
    pub fn new(id: ArticleId, title: String, url: String, username: String) -> Article {
        Article {
            id,
            title,
            url,
            username,
            comment_ids: Vec::new(),
            upvoted_by: Vec::new(),
            downvoted_by: Vec::new(),
        }
    }
}

impl Votable for Article {
    fn votes_mut(&mut self) -> (&mut Vec<String>, &mut Vec<String>) {
        (&mut self.upvoted_by, &mut self.downvoted_by)
    }
}

/// Body of `POST /articles` and `PUT /articles/:id`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArticlePayload {
    pub article: Option<NewArticle>,
}

/// The client-controlled fields of an article. On update, a missing or
/// empty field leaves the saved value unchanged, and the username is
/// immutable.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
