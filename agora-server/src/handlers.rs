use anyhow::Context;
use axum::http::StatusCode;
use serde_json::{json, Value};

use agora_api::{
    Article, ArticleId, ArticlePayload, Comment, CommentId, CommentPayload, Error as ApiError,
    NewComment, User, UserPayload, Vote,
};

use crate::{error::Error, store::Store};

/// Status and optional JSON body produced by an entity operation, the
/// `{status, body}` pair the request handler serializes.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    fn ok(body: Value) -> Reply {
        Reply {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    fn created(body: Value) -> Reply {
        Reply {
            status: StatusCode::CREATED,
            body: Some(body),
        }
    }

    fn no_content(body: Option<Value>) -> Reply {
        Reply {
            status: StatusCode::NO_CONTENT,
            body,
        }
    }
}

impl axum::response::IntoResponse for Reply {
    fn into_response(self) -> axum::response::Response {
        // 204 replies carry no body on the wire; the deleted-comment echo
        // is dropped here, exactly as the transport would drop it.
        match self.body {
            Some(body) if self.status != StatusCode::NO_CONTENT => {
                (self.status, axum::Json(body)).into_response()
            }
            _ => self.status.into_response(),
        }
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, Error> {
    serde_json::from_value(body).map_err(|_| Error::bad_request())
}

fn parse_article_id(segment: &str) -> Result<ArticleId, Error> {
    // zero is rejected alongside non-numeric input
    match segment.parse::<u64>() {
        Ok(id) if id != 0 => Ok(ArticleId(id)),
        _ => Err(Error::bad_request()),
    }
}

// Comment routes address the store by raw path segment: an unparseable id
// behaves like a missing comment rather than a malformed request.
fn parse_comment_id(segment: &str) -> Option<CommentId> {
    segment.parse::<u64>().ok().map(CommentId)
}

/// `POST /users`: 200 with the existing user, or 201 with a fresh one.
pub fn get_or_create_user(store: &mut Store, body: Value) -> Result<Reply, Error> {
    let payload: UserPayload = parse_body(body)?;
    let username = match payload.username {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::bad_request()),
    };

    if let Some(user) = store.users.get(&username) {
        return Ok(Reply::ok(json!({ "user": user })));
    }

    let user = User::new(username.clone());
    store.users.insert(username, user.clone());
    Ok(Reply::created(json!({ "user": user })))
}

/// `GET /users/:username`, resolving the user's article and comment ids.
/// Dead ids resolve to `null` rather than being filtered.
pub fn get_user(store: &Store, username: &str) -> Result<Reply, Error> {
    if username.is_empty() {
        return Err(Error::bad_request());
    }
    let user = store.users.get(username).ok_or_else(Error::not_found)?;

    let user_articles: Vec<Option<&Article>> = user
        .article_ids
        .iter()
        .map(|id| store.articles.get(id))
        .collect();
    let user_comments: Vec<Option<&Comment>> = user
        .comment_ids
        .iter()
        .map(|id| store.comments.get(id))
        .collect();

    Ok(Reply::ok(json!({
        "user": user,
        "userArticles": user_articles,
        "userComments": user_comments,
    })))
}

/// `GET /articles`: every live article, newest first.
pub fn list_articles(store: &Store) -> Result<Reply, Error> {
    let articles: Vec<&Article> = store.articles.values().rev().collect();
    Ok(Reply::ok(json!({ "articles": articles })))
}

/// `GET /articles/:id`, with the article's comments resolved in place.
pub fn get_article(store: &Store, id: &str) -> Result<Reply, Error> {
    let id = parse_article_id(id)?;
    let article = store.articles.get(&id).ok_or_else(Error::not_found)?;

    let comments: Vec<Option<&Comment>> = article
        .comment_ids
        .iter()
        .map(|id| store.comments.get(id))
        .collect();
    let mut body = serde_json::to_value(article).context("serializing article")?;
    body.as_object_mut()
        .context("article did not serialize to an object")?
        .insert(
            "comments".to_owned(),
            serde_json::to_value(&comments).context("serializing resolved comments")?,
        );

    Ok(Reply::ok(json!({ "article": body })))
}

/// `POST /articles`: requires title, url and an existing author.
pub fn create_article(store: &mut Store, body: Value) -> Result<Reply, Error> {
    let payload: ArticlePayload = parse_body(body)?;
    let request = payload.article.ok_or_else(Error::bad_request)?;

    let (title, url, username) = match (request.title, request.url, request.username) {
        (Some(title), Some(url), Some(username)) if !title.is_empty() && !url.is_empty() => {
            (title, url, username)
        }
        _ => return Err(Error::bad_request()),
    };
    if !store.users.contains_key(&username) {
        return Err(Error::bad_request());
    }

    let id = store.allocate_article_id();
    let article = Article::new(id, title, url, username);
    if let Some(author) = store.users.get_mut(&article.username) {
        author.article_ids.push(id);
    }
    store.articles.insert(id, article.clone());

    Ok(Reply::created(json!({ "article": article })))
}

/// `PUT /articles/:id`: partial update by field presence. A missing or
/// blank field leaves the saved value alone; the username never changes.
pub fn update_article(store: &mut Store, id: &str, body: Value) -> Result<Reply, Error> {
    let id = parse_article_id(id)?;
    let payload: ArticlePayload = parse_body(body)?;
    let request = payload.article.ok_or_else(Error::bad_request)?;

    let article = store.articles.get_mut(&id).ok_or_else(Error::not_found)?;
    if let Some(title) = request.title.filter(|t| !t.is_empty()) {
        article.title = title;
    }
    if let Some(url) = request.url.filter(|u| !u.is_empty()) {
        article.url = url;
    }

    Ok(Reply::ok(json!({ "article": &*article })))
}

/// `DELETE /articles/:id`: cascades to the article's comments and prunes
/// the author index lists. A missing article is a 400 here, not a 404,
/// unlike the other article item routes.
pub fn delete_article(store: &mut Store, id: &str) -> Result<Reply, Error> {
    let id = parse_article_id(id)?;
    let article = store.articles.remove(&id).ok_or_else(Error::bad_request)?;

    for comment_id in &article.comment_ids {
        let Some(comment) = store.comments.remove(comment_id) else {
            continue;
        };
        if let Some(author) = store.users.get_mut(&comment.username) {
            author.comment_ids.retain(|c| c != comment_id);
        }
    }
    if let Some(author) = store.users.get_mut(&article.username) {
        author.article_ids.retain(|a| *a != id);
    }

    Ok(Reply::no_content(None))
}

/// `PUT /articles/:id/{upvote,downvote}`: requires an existing user and an
/// existing article, else 400.
pub fn vote_article(store: &mut Store, id: &str, vote: Vote, body: Value) -> Result<Reply, Error> {
    let id = parse_article_id(id)?;
    let payload: UserPayload = parse_body(body)?;
    let username = match payload.username {
        Some(name) if store.users.contains_key(&name) => name,
        _ => return Err(Error::bad_request()),
    };

    let article = store.articles.get_mut(&id).ok_or_else(Error::bad_request)?;
    vote.cast(article, &username);

    Ok(Reply::ok(json!({ "article": &*article })))
}

/// `POST /comments`: the referenced article is checked first, then author
/// and body text; every validation failure echoes the submitted comment.
pub fn create_comment(store: &mut Store, body: Value) -> Result<Reply, Error> {
    let payload: CommentPayload = parse_body(body)?;
    let request = payload.comment.ok_or_else(Error::bad_request)?;

    if !request
        .article_id
        .map_or(false, |id| store.articles.contains_key(&id))
    {
        return Err(ApiError::BadComment(request).into());
    }

    match (request.body, request.article_id, request.username) {
        (Some(text), Some(article_id), Some(username))
            if !text.is_empty() && store.users.contains_key(&username) =>
        {
            let id = store.allocate_comment_id();
            let comment = Comment {
                id,
                body: text,
                username,
                article_id,
                upvoted_by: Vec::new(),
                downvoted_by: Vec::new(),
            };
            if let Some(author) = store.users.get_mut(&comment.username) {
                author.comment_ids.push(id);
            }
            if let Some(article) = store.articles.get_mut(&article_id) {
                article.comment_ids.push(id);
            }
            store.comments.insert(id, comment.clone());

            Ok(Reply::created(json!({ "comment": comment })))
        }
        (body, article_id, username) => Err(ApiError::BadComment(NewComment {
            body,
            article_id,
            username,
        })
        .into()),
    }
}

/// `PUT /comments/:id`: only the body text is mutable. The missing-comment
/// check runs before payload validation, and the reply echoes the request
/// body whole.
pub fn update_comment(store: &mut Store, id: &str, body: Value) -> Result<Reply, Error> {
    let id = parse_comment_id(id).ok_or_else(Error::not_found)?;
    if !store.comments.contains_key(&id) {
        return Err(Error::not_found());
    }

    let payload: CommentPayload = parse_body(body.clone())?;
    let text = payload
        .comment
        .and_then(|c| c.body)
        .filter(|b| !b.is_empty())
        .ok_or_else(Error::bad_request)?;
    if let Some(comment) = store.comments.get_mut(&id) {
        comment.body = text;
    }

    Ok(Reply::ok(body))
}

/// `DELETE /comments/:id`: prunes the comment from its author's and its
/// article's id lists. The deleted comment rides on the 204 reply and is
/// dropped at the transport.
pub fn delete_comment(store: &mut Store, id: &str) -> Result<Reply, Error> {
    let id = match parse_comment_id(id) {
        Some(id) => id,
        None => return Err(Error::not_found()),
    };
    let comment = store.comments.remove(&id).ok_or_else(Error::not_found)?;

    if let Some(author) = store.users.get_mut(&comment.username) {
        author.comment_ids.retain(|c| *c != id);
    }
    if let Some(article) = store.articles.get_mut(&comment.article_id) {
        article.comment_ids.retain(|c| *c != id);
    }

    Ok(Reply::no_content(Some(json!({ "comment": comment }))))
}

/// `PUT /comments/:id/{upvote,downvote}`: same contract as the article
/// vote routes, including an idempotent 200 on a repeated vote.
pub fn vote_comment(store: &mut Store, id: &str, vote: Vote, body: Value) -> Result<Reply, Error> {
    let payload: UserPayload = parse_body(body)?;
    let username = match payload.username {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::bad_request()),
    };
    let id = parse_comment_id(id).ok_or_else(Error::bad_request)?;
    if !store.users.contains_key(&username) {
        return Err(Error::bad_request());
    }

    let comment = store.comments.get_mut(&id).ok_or_else(Error::bad_request)?;
    vote.cast(comment, &username);

    Ok(Reply::ok(json!({ "comment": &*comment })))
}
