//! Community feed: newest first, seeded with sample posts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, PostIdGenerator};

/// A post in the community feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: PostId,
    pub author: String,
    pub content: String,
    pub date: String,
    pub likes: u32,
}

/// A post before the feed assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommunityPost {
    pub author: String,
    pub content: String,
    pub date: String,
    pub likes: u32,
}

impl NewCommunityPost {
    /// Builds the post the composer submits for the current user.
    ///
    /// Returns `None` when the text is blank.
    pub fn from_composer(text: &str) -> Option<Self> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            author: "You".to_string(),
            content: content.to_string(),
            date: "Just now".to_string(),
            likes: 0,
        })
    }
}

/// Community guidelines shown above the feed.
pub const COMMUNITY_GUIDELINES: [&str; 4] = [
    "Be kind and supportive to fellow members",
    "Share experiences, not medical advice",
    "Respect privacy - no personal health details of others",
    "Report any harmful content to moderators",
];

fn seed_post(id: &str, author: &str, content: &str, date: &str, likes: u32) -> CommunityPost {
    CommunityPost {
        id: PostId::new(id).expect("seed post ids are non-empty"),
        author: author.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        likes,
    }
}

/// The four sample posts every feed starts with.
pub fn seed_posts() -> Vec<CommunityPost> {
    vec![
        seed_post(
            "1",
            "Sarah M.",
            "Just started my PCOS-friendly diet journey! The meal plans here have been so helpful. Feeling more energetic already after 2 weeks.",
            "2 hours ago",
            24,
        ),
        seed_post(
            "2",
            "Priya K.",
            "Yoga has been a game-changer for my symptoms. Started with the gentle routines suggested here and now I do it daily!",
            "5 hours ago",
            18,
        ),
        seed_post(
            "3",
            "Emma L.",
            "Finally got my test results explained in a way I could understand. The medical analyzer feature is amazing for breaking down complex reports.",
            "1 day ago",
            42,
        ),
        seed_post(
            "4",
            "Aisha R.",
            "The mental health support section helped me realize I'm not alone in this journey. Thank you, PCOSync community!",
            "2 days ago",
            56,
        ),
    ]
}

/// Ordered community posts, newest first.
#[derive(Debug, Clone)]
pub struct CommunityFeed {
    posts: Vec<CommunityPost>,
    ids: PostIdGenerator,
}

impl CommunityFeed {
    /// Feed holding the sample posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: Vec<CommunityPost>) -> Self {
        Self {
            posts,
            ids: PostIdGenerator::new(),
        }
    }

    /// Assigns a fresh time-based id and prepends the post.
    ///
    /// Ids already present in the feed are skipped so a generated id can
    /// never shadow an existing post.
    pub fn add(&mut self, post: NewCommunityPost) -> &CommunityPost {
        let mut id = self.ids.next_id();
        while self.posts.iter().any(|p| p.id == id) {
            id = self.ids.next_id();
        }
        self.posts.insert(
            0,
            CommunityPost {
                id,
                author: post.author,
                content: post.content,
                date: post.date,
                likes: post.likes,
            },
        );
        &self.posts[0]
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_post(content: &str) -> NewCommunityPost {
        NewCommunityPost::from_composer(content).unwrap()
    }

    #[test]
    fn seeded_feed_has_four_posts_in_order() {
        let feed = CommunityFeed::seeded();
        let ids: Vec<&str> = feed.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(feed.posts()[0].author, "Sarah M.");
        assert_eq!(feed.posts()[3].likes, 56);
    }

    #[test]
    fn composer_trims_and_rejects_blank_text() {
        assert!(NewCommunityPost::from_composer("   ").is_none());
        let post = new_post("  hello  ");
        assert_eq!(post.content, "hello");
        assert_eq!(post.author, "You");
        assert_eq!(post.date, "Just now");
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn add_prepends_and_grows_by_one() {
        let mut feed = CommunityFeed::seeded();
        let before = feed.len();

        let added = feed.add(new_post("My first post")).clone();

        assert_eq!(feed.len(), before + 1);
        assert_eq!(feed.posts()[0], added);
        assert_eq!(added.content, "My first post");
    }

    #[test]
    fn rapid_adds_get_unique_ids() {
        let mut feed = CommunityFeed::seeded();
        for i in 0..20 {
            feed.add(new_post(&format!("post {}", i)));
        }
        let ids: HashSet<&PostId> = feed.posts().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), feed.len());
        assert_eq!(feed.posts()[0].content, "post 19");
    }
}
