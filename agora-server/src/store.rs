use std::collections::{BTreeMap, HashMap};

use agora_api::{Article, ArticleId, Comment, CommentId, User};

/// The process-resident forum state. `AppState` owns the single shared
/// instance; entity operations receive it explicitly and tests build their
/// own.
///
/// Deleting an article or comment removes it from its map while the id
/// counters keep advancing, so ids are never reused and a dead id resolves
/// to `None` (serialized as `null` wherever the API resolves child-id
/// lists).
///
/// The whole struct is serializable and doubles as the snapshot exchanged
/// with the persistence hooks.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub users: HashMap<String, User>,
    pub articles: BTreeMap<ArticleId, Article>,
    pub comments: BTreeMap<CommentId, Comment>,
    pub next_article_id: ArticleId,
    pub next_comment_id: CommentId,
}

impl Store {
    pub fn new() -> Store {
        Store {
            users: HashMap::new(),
            articles: BTreeMap::new(),
            comments: BTreeMap::new(),
            next_article_id: ArticleId(1),
            next_comment_id: CommentId(1),
        }
    }

    pub fn allocate_article_id(&mut self) -> ArticleId {
        let id = self.next_article_id;
        self.next_article_id = ArticleId(id.0 + 1);
        id
    }

    pub fn allocate_comment_id(&mut self) -> CommentId {
        let id = self.next_comment_id;
        self.next_comment_id = CommentId(id.0 + 1);
        id
    }
}

impl Default for Store {
    fn default() -> Store {
        Store::new()
    }
}
