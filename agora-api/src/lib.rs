pub mod article;
pub mod comment;
pub mod error;
pub mod user;
pub mod vote;

pub use article::{Article, ArticleId, ArticlePayload, NewArticle};
pub use comment::{Comment, CommentId, CommentPayload, NewComment};
pub use error::Error;
pub use user::{User, UserPayload};
pub use vote::{Votable, Vote};
