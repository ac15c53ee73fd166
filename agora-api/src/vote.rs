/// Items that carry the two vote membership lists.
pub trait Votable {
    /// Returns `(upvoted_by, downvoted_by)`.
    fn votes_mut(&mut self) -> (&mut Vec<String>, &mut Vec<String>);
}

/// Direction of a vote request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Moves `username`'s vote state on `item` directly to this direction:
    /// any opposite vote is cleared first, and casting the same vote twice
    /// is a no-op. The two lists stay disjoint.
    pub fn cast<T: Votable>(self, item: &mut T, username: &str) {
        let (upvoted, downvoted) = item.votes_mut();
        match self {
            Vote::Up => move_vote(downvoted, upvoted, username),
            Vote::Down => move_vote(upvoted, downvoted, username),
        }
    }
}

fn move_vote(from: &mut Vec<String>, to: &mut Vec<String>, username: &str) {
    from.retain(|u| u != username);
    if !to.iter().any(|u| u == username) {
        to.push(username.to_owned());
    }
}
