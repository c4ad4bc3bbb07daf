use crate::api::{self, CommentId, ReplyId, Time, User, UserId};

/// Identifies one entry of a `ThreadStore`. Server ids may repeat within a
/// thread, these never do.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntryKey(pub u64);

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Author {
    pub id: UserId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl Author {
    fn new(id: UserId, display_name: Option<String>, avatar_url: Option<String>) -> Author {
        Author {
            id,
            display_name: display_name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| String::from("User")),
            avatar_url,
        }
    }
}

impl From<&User> for Author {
    fn from(u: &User) -> Author {
        Author::new(
            u.id.clone(),
            Some(u.display_name.clone()),
            u.avatar_url.clone(),
        )
    }
}

/// Like counter as shown to the current visitor. `liked` is never sent
/// anywhere and starts out false for every record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Likes {
    pub count: u32,
    pub liked: bool,
}

impl Likes {
    pub fn toggle(&mut self) {
        if self.liked {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count = self.count.saturating_add(1);
        }
        self.liked = !self.liked;
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reply {
    pub id: ReplyId,
    pub author: Author,
    pub text: String,
    pub date: Option<Time>,
    pub likes: Likes,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    /// Assigned when the comment enters a `ThreadStore`
    pub(crate) key: EntryKey,
    pub id: CommentId,
    pub author: Author,
    pub text: String,
    pub date: Option<Time>,
    pub likes: Likes,

    /// Replies in arrival order, never reordered nor removed
    pub replies: Vec<Reply>,
}

impl From<api::Reply> for Reply {
    fn from(r: api::Reply) -> Reply {
        Reply {
            id: r.id,
            author: Author::new(r.user_id, r.display_name, r.avatar_url),
            text: r.text,
            date: r.date,
            likes: Likes {
                count: r.likes,
                liked: false,
            },
        }
    }
}

impl From<api::Comment> for Comment {
    fn from(c: api::Comment) -> Comment {
        Comment {
            key: EntryKey::default(),
            id: c.id,
            author: Author::new(c.user_id, c.display_name, c.avatar_url),
            text: c.text,
            date: c.date,
            likes: Likes {
                count: c.likes,
                liked: false,
            },
            replies: c.replies.into_iter().map(Reply::from).collect(),
        }
    }
}

impl Comment {
    pub fn key(&self) -> EntryKey {
        self.key
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LikeTarget {
    Comment(EntryKey),
    /// Replies are addressed by their position under the comment, as they
    /// are never reordered nor removed
    Reply(EntryKey, usize),
}

/// Comments of the video currently shown, newest insertions first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ThreadStore {
    next_key: u64,
    comments: Vec<Comment>,
}

impl ThreadStore {
    pub fn new(initial: Vec<api::Comment>) -> ThreadStore {
        let mut t = ThreadStore::default();
        t.comments = initial
            .into_iter()
            .map(|c| {
                let mut c = Comment::from(c);
                c.key = t.issue_key();
                c
            })
            .collect();
        t
    }

    fn issue_key(&mut self) -> EntryKey {
        let key = EntryKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn entry_mut(&mut self, key: EntryKey) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.key == key)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// When true, the view shows the "no comments yet" placeholder instead
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn get(&self, key: EntryKey) -> Option<&Comment> {
        self.comments.iter().find(|c| c.key == key)
    }

    /// First entry, in display order, carrying this server id
    pub fn key_of(&self, id: &CommentId) -> Option<EntryKey> {
        self.comments.iter().find(|c| c.id == *id).map(|c| c.key)
    }

    /// Ids are not checked for duplicates: records never get edited nor
    /// deleted, so two entries with the same id are simply both shown, each
    /// under its own key.
    pub fn insert_top(&mut self, mut c: Comment) -> EntryKey {
        c.key = self.issue_key();
        tracing::debug!(id = %c.id, key = %c.key, "inserting comment at top of thread");
        let key = c.key;
        self.comments.insert(0, c);
        key
    }

    /// Returns false, leaving the thread untouched, if there is no such parent
    pub fn append_reply(&mut self, parent: EntryKey, r: Reply) -> bool {
        match self.entry_mut(parent) {
            None => {
                tracing::debug!(%parent, reply = %r.id, "dropping reply to unknown comment");
                false
            }
            Some(c) => {
                c.replies.push(r);
                true
            }
        }
    }

    /// Returns the new like state, or None if the target is not in the thread
    pub fn toggle_like(&mut self, target: &LikeTarget) -> Option<Likes> {
        let likes = match target {
            LikeTarget::Comment(key) => &mut self.entry_mut(*key)?.likes,
            LikeTarget::Reply(parent, i) => {
                &mut self.entry_mut(*parent)?.replies.get_mut(*i)?.likes
            }
        };
        likes.toggle();
        tracing::debug!(like = ?target, count = likes.count, liked = likes.liked, "like toggled");
        Some(*likes)
    }
}
