use axum::http::Method;
use serde_json::Value;

use agora_api::Vote;

use crate::{error::Error, handlers, handlers::Reply, store::Store};

/// Shape classification of a request path. The checks run in a fixed
/// order: one segment is a collection route, a third segment of `upvote`
/// or `downvote` is a vote route, a leading `users` segment is a
/// user-by-name route, anything else with two or more segments is an item
/// route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteKey {
    /// `/{collection}`
    Collection(String),
    /// `/{collection}/:id/{upvote|downvote}`
    Vote {
        collection: String,
        id: String,
        vote: Vote,
    },
    /// `/users/:username`
    User { username: String },
    /// `/{collection}/:id`
    Item { collection: String, id: String },
    /// Nothing the table could ever match, e.g. the bare root path.
    Unroutable,
}

pub fn classify(path: &str) -> RouteKey {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => RouteKey::Unroutable,
        [collection] => RouteKey::Collection((*collection).to_owned()),
        [collection, id, dir, ..] if *dir == "upvote" || *dir == "downvote" => RouteKey::Vote {
            collection: (*collection).to_owned(),
            id: (*id).to_owned(),
            vote: if *dir == "upvote" {
                Vote::Up
            } else {
                Vote::Down
            },
        },
        ["users", username, ..] => RouteKey::User {
            username: (*username).to_owned(),
        },
        [collection, id, ..] => RouteKey::Item {
            collection: (*collection).to_owned(),
            id: (*id).to_owned(),
        },
    }
}

/// The route table. Anything outside it is a 400, not a 404 — a deliberate
/// quirk of this API surface.
pub fn dispatch(
    store: &mut Store,
    method: &Method,
    path: &str,
    body: Value,
) -> Result<Reply, Error> {
    match classify(path) {
        RouteKey::Collection(collection) => match (collection.as_str(), method.as_str()) {
            ("users", "POST") => handlers::get_or_create_user(store, body),
            ("articles", "GET") => handlers::list_articles(store),
            ("articles", "POST") => handlers::create_article(store, body),
            ("comments", "POST") => handlers::create_comment(store, body),
            _ => Err(Error::bad_request()),
        },
        RouteKey::User { username } => match method.as_str() {
            "GET" => handlers::get_user(store, &username),
            _ => Err(Error::bad_request()),
        },
        RouteKey::Vote {
            collection,
            id,
            vote,
        } => match (collection.as_str(), method.as_str()) {
            ("articles", "PUT") => handlers::vote_article(store, &id, vote, body),
            ("comments", "PUT") => handlers::vote_comment(store, &id, vote, body),
            _ => Err(Error::bad_request()),
        },
        RouteKey::Item { collection, id } => match (collection.as_str(), method.as_str()) {
            ("articles", "GET") => handlers::get_article(store, &id),
            ("articles", "PUT") => handlers::update_article(store, &id, body),
            ("articles", "DELETE") => handlers::delete_article(store, &id),
            ("comments", "PUT") => handlers::update_comment(store, &id, body),
            ("comments", "DELETE") => handlers::delete_comment(store, &id),
            _ => Err(Error::bad_request()),
        },
        RouteKey::Unroutable => Err(Error::bad_request()),
    }
}
