//! Maps a stress result and the raw signals to a short, prioritised list of suggestions.

mod rules;

use std::sync::Arc;

use serde::Serialize;

use super::messages::{EnglishCatalog, MessageCatalog};
use super::stress::{RawSignals, StressResult};

/// Upper bound on suggestions returned for a single check.
pub const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    BreathingExercise,
    TalkToAstra,
    RestReminder,
    StressReliefGame,
    RelaxationExercise,
    PhysicalActivity,
    GreatWork,
    ConnectWithCrew,
}

struct KindTemplate {
    icon: &'static str,
    title_key: &'static str,
    description_key: &'static str,
    action_key: Option<&'static str>,
    target_link: Option<&'static str>,
    triggers_chat: bool,
}

impl RecommendationKind {
    const fn template(self) -> KindTemplate {
        match self {
            Self::BreathingExercise => KindTemplate {
                icon: "🫁",
                title_key: "rec_breath_title",
                description_key: "rec_breath_desc",
                action_key: Some("btn_start_now"),
                target_link: Some("games.html#breathing"),
                triggers_chat: false,
            },
            Self::TalkToAstra => KindTemplate {
                icon: "💬",
                title_key: "rec_chat_title",
                description_key: "rec_chat_desc",
                action_key: Some("btn_open_chat"),
                target_link: None,
                triggers_chat: true,
            },
            Self::RestReminder => KindTemplate {
                icon: "😴",
                title_key: "rec_rest_title",
                description_key: "rec_rest_desc",
                action_key: Some("btn_set_reminder"),
                target_link: None,
                triggers_chat: false,
            },
            Self::StressReliefGame => KindTemplate {
                icon: "🎮",
                title_key: "rec_game_title",
                description_key: "rec_game_desc",
                action_key: Some("btn_play_now"),
                target_link: Some("games.html"),
                triggers_chat: false,
            },
            Self::RelaxationExercise => KindTemplate {
                icon: "🧘",
                title_key: "rec_relax_title",
                description_key: "rec_relax_desc",
                action_key: Some("btn_learn_more"),
                target_link: None,
                triggers_chat: false,
            },
            Self::PhysicalActivity => KindTemplate {
                icon: "🏃",
                title_key: "rec_activity_title",
                description_key: "rec_activity_desc",
                action_key: Some("btn_view_exercises"),
                target_link: None,
                triggers_chat: false,
            },
            Self::GreatWork => KindTemplate {
                icon: "⭐",
                title_key: "rec_great_title",
                description_key: "rec_great_desc",
                action_key: None,
                target_link: None,
                triggers_chat: false,
            },
            Self::ConnectWithCrew => KindTemplate {
                icon: "👥",
                title_key: "rec_crew_title",
                description_key: "rec_crew_desc",
                action_key: Some("btn_view_crew"),
                target_link: Some("crew.html"),
                triggers_chat: false,
            },
        }
    }

    fn render(self, signals: &RawSignals, catalog: &dyn MessageCatalog) -> Recommendation {
        let template = self.template();
        let params = match self {
            Self::RestReminder => vec![("hours", signals.sleep_hours.to_string())],
            _ => Vec::new(),
        };

        Recommendation {
            kind: self,
            icon: template.icon,
            title: catalog.format(template.title_key, &[]),
            description: catalog.format(template.description_key, &params),
            action_label: template.action_key.map(|key| catalog.format(key, &[])),
            target_link: template.target_link,
            triggers_chat: template.triggers_chat,
        }
    }
}

/// Actionable suggestion shown after a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_link: Option<&'static str>,
    pub triggers_chat: bool,
}

#[derive(Clone)]
pub struct RecommendationSelector {
    catalog: Arc<dyn MessageCatalog>,
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self::new(Arc::new(EnglishCatalog))
    }
}

impl RecommendationSelector {
    pub fn new(catalog: Arc<dyn MessageCatalog>) -> Self {
        Self { catalog }
    }

    /// Evaluate every rule in priority order, then keep the first
    /// [`MAX_RECOMMENDATIONS`] entries. Later entries are dropped, never reordered.
    pub fn select(&self, result: &StressResult, signals: &RawSignals) -> Vec<Recommendation> {
        rules::matching_kinds(result, signals)
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|kind| kind.render(signals, self.catalog.as_ref()))
            .collect()
    }
}

/// Select with the English catalog.
pub fn select_recommendations(
    result: &StressResult,
    signals: &RawSignals,
) -> Vec<Recommendation> {
    RecommendationSelector::default().select(result, signals)
}
