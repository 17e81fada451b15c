//! Community hub panel: post feed, group challenges, and voted eco tips,
//! with a composer for new posts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use models::community::{CommunityFeed, PostAttachment};

use crate::panel_toggles::CommunityPanelVisible;
use crate::theme;
use crate::widgets;

// =============================================================================
// Panel state
// =============================================================================

/// Which feed tab is showing. Pure UI state.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunityTab {
    #[default]
    Posts,
    Challenges,
    Tips,
}

/// Draft state for the new-post composer.
#[derive(Resource, Default)]
pub struct PostComposer {
    pub open: bool,
    pub draft: String,
}

// =============================================================================
// Panel
// =============================================================================

pub fn community_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<CommunityPanelVisible>,
    mut feed: ResMut<CommunityFeed>,
    mut tab: ResMut<CommunityTab>,
    mut composer: ResMut<PostComposer>,
) {
    if !visible.0 {
        return;
    }

    egui::Window::new("🌍 Community Hub")
        .default_width(420.0)
        .show(contexts.ctx_mut(), |ui| {
            // Stats bar
            ui.horizontal(|ui| {
                ui.label(format!("{} members", feed.stats.active_members));
                ui.separator();
                ui.label(format!("{} posts today", feed.stats.posts_today));
                ui.separator();
                ui.label(format!("{} challenges", feed.stats.active_challenges));
                ui.separator();
                ui.label(format!("{} tips", feed.stats.tips_shared));
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut *tab, CommunityTab::Posts, "💬 Posts");
                ui.selectable_value(&mut *tab, CommunityTab::Challenges, "🎯 Challenges");
                ui.selectable_value(&mut *tab, CommunityTab::Tips, "💡 Tips");
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui| match *tab {
                    CommunityTab::Posts => posts_tab(ui, &mut feed, &mut composer),
                    CommunityTab::Challenges => challenges_tab(ui, &mut feed),
                    CommunityTab::Tips => tips_tab(ui, &mut feed),
                });

            ui.separator();
            sidebar(ui, &feed);
        });
}

fn posts_tab(ui: &mut egui::Ui, feed: &mut CommunityFeed, composer: &mut PostComposer) {
    // Composer
    if composer.open {
        ui.add(
            egui::TextEdit::multiline(&mut composer.draft)
                .hint_text("Share your eco tips, experiences, or questions...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui| {
            if ui.button("Post").clicked() && feed.create_post(&composer.draft) {
                composer.draft.clear();
                composer.open = false;
            }
            if ui.button("Cancel").clicked() {
                composer.draft.clear();
                composer.open = false;
            }
        });
    } else if ui.button("🌟 Share your eco journey...").clicked() {
        composer.open = true;
    }
    ui.separator();

    // Feed
    let mut liked = None;
    for post in &feed.posts {
        ui.horizontal(|ui| {
            ui.label(&post.avatar);
            ui.strong(&post.author);
            ui.label(egui::RichText::new(&post.time).small().color(theme::MUTED));
            for tag in &post.tags {
                widgets::tag_badge(ui, tag);
            }
        });
        ui.label(&post.content);

        match &post.attachment {
            Some(PostAttachment::Tips(tips)) => {
                ui.label(egui::RichText::new("💡 Quick Tips:").color(theme::PRIMARY));
                for tip in tips {
                    ui.label(format!("  • {tip}"));
                }
            }
            Some(PostAttachment::Recipe(recipe)) => {
                ui.label(egui::RichText::new(format!("🍽️ {}", recipe.name)).strong());
                ui.label(format!("Ingredients: {}", recipe.ingredients.join(", ")));
                ui.label(
                    egui::RichText::new(format!(
                        "Impact: Saved {} CO2 this week!",
                        widgets::fmt_kg(recipe.co2_saved_kg)
                    ))
                    .color(theme::PRIMARY),
                );
            }
            None => {}
        }
        if let Some(location) = &post.location {
            ui.label(egui::RichText::new(format!("📍 {location}")).small());
        }

        ui.horizontal(|ui| {
            if ui.button(format!("❤️ {}", post.likes)).clicked() {
                liked = Some(post.id);
            }
            ui.label(format!("💬 {}", post.comments));
            ui.label(format!("🔄 {}", post.shares));
        });
        ui.separator();
    }
    if let Some(id) = liked {
        feed.like_post(id);
    }
}

fn challenges_tab(ui: &mut egui::Ui, feed: &mut CommunityFeed) {
    let mut joined = None;
    for challenge in &feed.challenges {
        ui.strong(&challenge.title);
        ui.label(&challenge.description);
        ui.label(
            egui::RichText::new(format!(
                "📅 {}  📍 {}  👥 {} participants  by {}",
                challenge.date, challenge.location, challenge.participants, challenge.organizer
            ))
            .small()
            .color(theme::MUTED),
        );
        ui.horizontal(|ui| {
            for tag in &challenge.tags {
                widgets::tag_badge(ui, tag);
            }
            if ui.button("Join Challenge").clicked() {
                joined = Some(challenge.id);
            }
        });
        ui.separator();
    }
    if let Some(id) = joined {
        feed.join_challenge(id);
    }
}

fn tips_tab(ui: &mut egui::Ui, feed: &mut CommunityFeed) {
    let mut voted = None;
    for tip in &feed.tips {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&tip.category).small().color(theme::ACCENT));
            widgets::difficulty_badge(ui, tip.difficulty);
        });
        ui.strong(&tip.title);
        ui.label(&tip.body);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "By {}  💰 Saves: {}",
                    tip.author,
                    tip.savings.label()
                ))
                .small()
                .color(theme::MUTED),
            );
            if ui.button(format!("👍 {}", tip.votes)).clicked() {
                voted = Some(tip.id);
            }
        });
        ui.separator();
    }
    if let Some(id) = voted {
        feed.vote_tip(id);
    }
}

fn sidebar(ui: &mut egui::Ui, feed: &CommunityFeed) {
    ui.collapsing("🔥 Trending Topics", |ui| {
        for topic in &feed.trending {
            widgets::stat_line(ui, &topic.topic, &format!("{} posts", topic.posts));
        }
    });
    ui.collapsing("🏆 Weekly Champions", |ui| {
        for champion in &feed.champions {
            ui.horizontal(|ui| {
                ui.label(&champion.avatar);
                ui.strong(&champion.name);
                ui.label(egui::RichText::new(&champion.action).small().color(theme::MUTED));
            });
        }
    });
}

pub struct CommunityPanelPlugin;

impl Plugin for CommunityPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommunityTab>()
            .init_resource::<PostComposer>()
            .add_systems(Update, community_panel_ui);
    }
}
