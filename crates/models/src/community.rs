//! Community feed: posts, group challenges, and voted eco tips.
//!
//! Everything on this page lives in a single [`CommunityFeed`] resource
//! seeded with mock data. Mutations are counter increments (like, vote,
//! join) plus prepending a new post; nothing is ever deleted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Difficulty;

// =============================================================================
// Posts
// =============================================================================

/// A recipe shared inside a post, with the CO2 saved by cooking it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub co2_saved_kg: f32,
}

/// Optional structured payload attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PostAttachment {
    /// An ordered list of quick tips.
    Tips(Vec<String>),
    /// A shared recipe.
    Recipe(Recipe),
}

/// A single feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    /// Relative timestamp as displayed ("2 hours ago", "Just now").
    pub time: String,
    pub content: String,
    pub attachment: Option<PostAttachment>,
    pub location: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub tags: Vec<String>,
}

// =============================================================================
// Group challenges and tips
// =============================================================================

/// A community-organized group challenge. `participants` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityChallenge {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub participants: u32,
    pub date: String,
    pub location: String,
    pub organizer: String,
    pub tags: Vec<String>,
}

/// Estimated savings attached to a community tip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TipSavings {
    DollarsPerYear(u32),
    DollarsPerMonth(u32),
    Co2KgPerYear(u32),
}

impl TipSavings {
    /// Display label, e.g. "$50/year" or "300 kg CO2/year".
    pub fn label(self) -> String {
        match self {
            TipSavings::DollarsPerYear(d) => format!("${d}/year"),
            TipSavings::DollarsPerMonth(d) => format!("${d}/month"),
            TipSavings::Co2KgPerYear(kg) => format!("{kg} kg CO2/year"),
        }
    }
}

/// A voted community eco tip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoTip {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub votes: u32,
    pub difficulty: Difficulty,
    pub savings: TipSavings,
}

// =============================================================================
// Sidebar data
// =============================================================================

/// Community-wide headline counters shown in the stats bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommunityStats {
    pub active_members: u32,
    pub posts_today: u32,
    pub active_challenges: u32,
    pub tips_shared: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    pub posts: u32,
}

/// A weekly champion entry in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champion {
    pub name: String,
    pub action: String,
    pub avatar: String,
}

// =============================================================================
// Feed resource
// =============================================================================

/// The whole community page state: feed, group challenges, tips, and the
/// static sidebar data.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct CommunityFeed {
    pub posts: Vec<Post>,
    pub challenges: Vec<CommunityChallenge>,
    pub tips: Vec<EcoTip>,
    pub stats: CommunityStats,
    pub trending: Vec<TrendingTopic>,
    pub champions: Vec<Champion>,
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self {
            posts: seed_posts(),
            challenges: seed_challenges(),
            tips: seed_tips(),
            stats: CommunityStats {
                active_members: 12_500,
                posts_today: 3_200,
                active_challenges: 89,
                tips_shared: 456,
            },
            trending: [
                "#ZeroWaste",
                "#PlantBased",
                "#SolarPower",
                "#CarbonNeutral",
                "#SustainableFashion",
            ]
            .iter()
            .map(|t| TrendingTopic {
                topic: (*t).to_string(),
                posts: 2_300,
            })
            .collect(),
            champions: vec![
                Champion {
                    name: "EcoWarrior_2025".to_string(),
                    action: "Most posts shared".to_string(),
                    avatar: "🌱".to_string(),
                },
                Champion {
                    name: "GreenGuru".to_string(),
                    action: "Most tips voted".to_string(),
                    avatar: "🌿".to_string(),
                },
                Champion {
                    name: "PlantBased_Pro".to_string(),
                    action: "Challenge leader".to_string(),
                    avatar: "🌳".to_string(),
                },
            ],
        }
    }
}

impl CommunityFeed {
    /// Adds one like to the matching post. Unknown ids are ignored, and
    /// there is no per-user limit: the same caller may like a post any
    /// number of times.
    pub fn like_post(&mut self, id: u32) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.likes += 1;
        }
    }

    /// Prepends a new post authored by the local user. Declines (returns
    /// `false`) when the text is blank after trimming; the raw text is kept
    /// as written otherwise.
    pub fn create_post(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let post = Post {
            id: self.posts.len() as u32 + 1,
            author: "Alex (You)".to_string(),
            avatar: "🌟".to_string(),
            time: "Just now".to_string(),
            content: text.to_string(),
            attachment: None,
            location: None,
            likes: 0,
            comments: 0,
            shares: 0,
            tags: vec!["Personal".to_string()],
        };
        self.posts.insert(0, post);
        true
    }

    /// Adds the local user to a group challenge's participant count.
    pub fn join_challenge(&mut self, id: u32) {
        if let Some(challenge) = self.challenges.iter_mut().find(|c| c.id == id) {
            challenge.participants += 1;
        }
    }

    /// Upvotes a tip. Votes only ever increase.
    pub fn vote_tip(&mut self, id: u32) {
        if let Some(tip) = self.tips.iter_mut().find(|t| t.id == id) {
            tip.votes += 1;
        }
    }
}

// =============================================================================
// Seed data
// =============================================================================

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            author: "GreenGuru".to_string(),
            avatar: "🌿".to_string(),
            time: "2 hours ago".to_string(),
            content: "Just completed my first zero-waste week! Here are my top 5 tips that \
                      actually worked:"
                .to_string(),
            attachment: Some(PostAttachment::Tips(
                [
                    "Bring your own containers to bulk stores",
                    "Make your own cleaning products",
                    "Start composting immediately",
                    "Buy secondhand first",
                    "Plan meals to avoid food waste",
                ]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            )),
            location: None,
            likes: 142,
            comments: 28,
            shares: 15,
            tags: vec![
                "ZeroWaste".to_string(),
                "Tips".to_string(),
                "Beginner".to_string(),
            ],
        },
        Post {
            id: 2,
            author: "EcoWarrior_2025".to_string(),
            avatar: "🌱".to_string(),
            time: "4 hours ago".to_string(),
            content: "Amazing discovery! Found a local farmer's market that's completely \
                      plastic-free. Supporting local AND reducing packaging waste! 🎉"
                .to_string(),
            attachment: None,
            location: Some("Portland, OR".to_string()),
            likes: 89,
            comments: 12,
            shares: 23,
            tags: vec![
                "LocalFood".to_string(),
                "PlasticFree".to_string(),
                "Discovery".to_string(),
            ],
        },
        Post {
            id: 3,
            author: "PlantBased_Pro".to_string(),
            avatar: "🌳".to_string(),
            time: "6 hours ago".to_string(),
            content: "Week 3 of my plant-based journey. Energy levels are through the roof and \
                      my carbon footprint has decreased by 35%! Here's what I'm eating:"
                .to_string(),
            attachment: Some(PostAttachment::Recipe(Recipe {
                name: "Ultimate Green Buddha Bowl".to_string(),
                ingredients: [
                    "Quinoa",
                    "Roasted chickpeas",
                    "Avocado",
                    "Spinach",
                    "Hemp seeds",
                ]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
                co2_saved_kg: 2.3,
            })),
            location: None,
            likes: 234,
            comments: 45,
            shares: 67,
            tags: vec![
                "PlantBased".to_string(),
                "Recipe".to_string(),
                "CarbonFootprint".to_string(),
            ],
        },
    ]
}

fn seed_challenges() -> Vec<CommunityChallenge> {
    vec![
        CommunityChallenge {
            id: 1,
            title: "Community Plastic Cleanup".to_string(),
            description: "Join 500+ members cleaning up our neighborhoods this weekend!"
                .to_string(),
            participants: 547,
            date: "This Saturday".to_string(),
            location: "Multiple Cities".to_string(),
            organizer: "EcoCleanup Team".to_string(),
            tags: vec![
                "Cleanup".to_string(),
                "Community".to_string(),
                "Action".to_string(),
            ],
        },
        CommunityChallenge {
            id: 2,
            title: "30-Day Local Food Challenge".to_string(),
            description: "Eat only locally sourced food for the entire month of January"
                .to_string(),
            participants: 1_203,
            date: "January 1-31".to_string(),
            location: "Global".to_string(),
            organizer: "LocalFoodie Network".to_string(),
            tags: vec![
                "Food".to_string(),
                "Local".to_string(),
                "Challenge".to_string(),
            ],
        },
        CommunityChallenge {
            id: 3,
            title: "Zero-Waste Workshop Series".to_string(),
            description: "Learn practical zero-waste techniques from community experts"
                .to_string(),
            participants: 89,
            date: "Every Tuesday".to_string(),
            location: "Online".to_string(),
            organizer: "WasteNot Community".to_string(),
            tags: vec![
                "Education".to_string(),
                "ZeroWaste".to_string(),
                "Workshop".to_string(),
            ],
        },
    ]
}

fn seed_tips() -> Vec<EcoTip> {
    vec![
        EcoTip {
            id: 1,
            category: "Energy".to_string(),
            title: "LED Light Hack".to_string(),
            body: "Replace just your 5 most-used bulbs with LEDs. You'll save 80% energy on \
                   lighting costs immediately!"
                .to_string(),
            author: "ElectricEco".to_string(),
            votes: 156,
            difficulty: Difficulty::Easy,
            savings: TipSavings::DollarsPerYear(50),
        },
        EcoTip {
            id: 2,
            category: "Transport".to_string(),
            title: "Bike Route Planning".to_string(),
            body: "Use apps like Komoot or Strava to find the safest, most scenic bike routes. \
                   Makes eco-commuting actually enjoyable!"
                .to_string(),
            author: "CycleCity".to_string(),
            votes: 203,
            difficulty: Difficulty::Easy,
            savings: TipSavings::Co2KgPerYear(300),
        },
        EcoTip {
            id: 3,
            category: "Food".to_string(),
            title: "Meal Prep Revolution".to_string(),
            body: "Batch cook grains and legumes on Sunday. Reduces food waste, saves time, and \
                   makes plant-based eating effortless!"
                .to_string(),
            author: "BatchCookBoss".to_string(),
            votes: 187,
            difficulty: Difficulty::Medium,
            savings: TipSavings::DollarsPerMonth(200),
        },
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // like_post
    // -------------------------------------------------------------------------

    #[test]
    fn test_like_increments_exactly_one_post() {
        let mut feed = CommunityFeed::default();
        let before: Vec<u32> = feed.posts.iter().map(|p| p.likes).collect();

        feed.like_post(2);

        assert_eq!(feed.posts[0].likes, before[0]);
        assert_eq!(feed.posts[1].likes, before[1] + 1);
        assert_eq!(feed.posts[2].likes, before[2]);
        // Other counters untouched
        assert_eq!(feed.posts[1].comments, 12);
        assert_eq!(feed.posts[1].shares, 23);
    }

    #[test]
    fn test_like_unknown_id_is_noop() {
        let mut feed = CommunityFeed::default();
        let before = feed.posts.clone();
        feed.like_post(999);
        assert_eq!(feed.posts.len(), before.len());
        for (a, b) in feed.posts.iter().zip(before.iter()) {
            assert_eq!(a.likes, b.likes);
        }
    }

    #[test]
    fn test_like_is_unbounded() {
        let mut feed = CommunityFeed::default();
        for _ in 0..10 {
            feed.like_post(1);
        }
        assert_eq!(feed.posts[0].likes, 142 + 10);
    }

    // -------------------------------------------------------------------------
    // create_post
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_post_rejects_blank_text() {
        let mut feed = CommunityFeed::default();
        assert!(!feed.create_post(""));
        assert!(!feed.create_post("   "));
        assert!(!feed.create_post("\n\t"));
        assert_eq!(feed.posts.len(), 3);
    }

    #[test]
    fn test_create_post_prepends_with_zeroed_counters() {
        let mut feed = CommunityFeed::default();
        assert!(feed.create_post("hello"));

        assert_eq!(feed.posts.len(), 4);
        let post = &feed.posts[0];
        assert_eq!(post.content, "hello");
        assert_eq!(post.author, "Alex (You)");
        assert_eq!(post.avatar, "🌟");
        assert_eq!(post.time, "Just now");
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert_eq!(post.shares, 0);
        assert_eq!(post.tags, vec!["Personal".to_string()]);
        assert!(post.attachment.is_none());
    }

    #[test]
    fn test_create_post_id_is_list_length_plus_one() {
        let mut feed = CommunityFeed::default();
        feed.create_post("first");
        assert_eq!(feed.posts[0].id, 4);
        feed.create_post("second");
        assert_eq!(feed.posts[0].id, 5);
    }

    // -------------------------------------------------------------------------
    // join_challenge / vote_tip
    // -------------------------------------------------------------------------

    #[test]
    fn test_join_challenge_increments_participants() {
        let mut feed = CommunityFeed::default();
        feed.join_challenge(1);
        assert_eq!(feed.challenges[0].participants, 548);
        // participant counts never decrease; joining again adds again
        feed.join_challenge(1);
        assert_eq!(feed.challenges[0].participants, 549);
    }

    #[test]
    fn test_join_unknown_challenge_is_noop() {
        let mut feed = CommunityFeed::default();
        feed.join_challenge(42);
        assert_eq!(feed.challenges[0].participants, 547);
        assert_eq!(feed.challenges[1].participants, 1_203);
        assert_eq!(feed.challenges[2].participants, 89);
    }

    #[test]
    fn test_vote_tip_increments_votes() {
        let mut feed = CommunityFeed::default();
        feed.vote_tip(3);
        assert_eq!(feed.tips[2].votes, 188);
        feed.vote_tip(999);
        assert_eq!(feed.tips[2].votes, 188);
    }

    // -------------------------------------------------------------------------
    // Seed data shape
    // -------------------------------------------------------------------------

    #[test]
    fn test_seed_attachments() {
        let feed = CommunityFeed::default();
        match &feed.posts[0].attachment {
            Some(PostAttachment::Tips(tips)) => assert_eq!(tips.len(), 5),
            other => panic!("expected tips attachment, got {other:?}"),
        }
        match &feed.posts[2].attachment {
            Some(PostAttachment::Recipe(recipe)) => {
                assert_eq!(recipe.ingredients.len(), 5);
                assert!((recipe.co2_saved_kg - 2.3).abs() < 0.001);
            }
            other => panic!("expected recipe attachment, got {other:?}"),
        }
        assert_eq!(feed.posts[1].location.as_deref(), Some("Portland, OR"));
    }

    #[test]
    fn test_tip_savings_labels() {
        assert_eq!(TipSavings::DollarsPerYear(50).label(), "$50/year");
        assert_eq!(TipSavings::DollarsPerMonth(200).label(), "$200/month");
        assert_eq!(TipSavings::Co2KgPerYear(300).label(), "300 kg CO2/year");
    }
}

pub struct CommunityPlugin;

impl Plugin for CommunityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommunityFeed>();
    }
}
