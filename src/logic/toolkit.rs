use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    models::chat::{ChatLog, ChatMessage},
};

pub const QUICK_TIPS: [&str; 3] = [
    "Water early morning",
    "Use neem spray for leaf pests",
    "Rotate crops yearly",
];

/// Rural-mode shortcuts that start a fresh conversation from a preset question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
    PestSolutions,
    FertilizerAdvice,
    SeasonalCrops,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::PestSolutions,
        QuickAction::FertilizerAdvice,
        QuickAction::SeasonalCrops,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            QuickAction::PestSolutions => "pest-solutions",
            QuickAction::FertilizerAdvice => "fertilizer-advice",
            QuickAction::SeasonalCrops => "seasonal-crops",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            QuickAction::PestSolutions => "Pest issue: describe symptoms",
            QuickAction::FertilizerAdvice => "Fertilizer schedule for small farm",
            QuickAction::SeasonalCrops => "Best crops for this season",
        }
    }

    /// Replaces the conversation with the preset question. No reply is added.
    pub fn apply(self, log: &mut ChatLog) {
        log.restart_with(ChatMessage::user(self.prompt()));
    }
}

impl FromStr for QuickAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickAction::ALL
            .into_iter()
            .find(|a| a.slug() == s)
            .ok_or_else(|| ApiError::QuickActionNotFound(s.to_string()))
    }
}

pub fn featured_tip() -> &'static str {
    QUICK_TIPS[0]
}
