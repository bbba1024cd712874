use chrono::DateTime;
use serde::Serialize;

use crate::models::{
    badge::skill_badge,
    embed::{DiscordMessage, Embed, EmbedField},
    event::InboundEvent,
    match_detail::{Faction, MatchDetail},
};

const EMBED_COLOR: u32 = 0xFF0000;
const MISSING_FIELD: &str = "N/A";

/// Per-request projection of an event plus its fetched match detail.
/// Exists only to be turned into a Discord message.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub event: String,
    pub entity_name: String,
    pub teams: [TeamSummary; 2],
    pub map_pick: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub nickname: String,
    pub skill_level: i64,
    pub player_id: String,
}

impl TeamSummary {
    fn from_faction(faction: &Faction) -> Self {
        Self {
            name: faction.name.clone(),
            players: faction
                .roster
                .iter()
                .map(|player| PlayerSummary {
                    nickname: player.nickname.clone(),
                    skill_level: player.game_skill_level,
                    player_id: player.player_id.clone(),
                })
                .collect(),
        }
    }

    /// One line per player: nickname plus the skill badge, badge omitted
    /// for levels with no mapping.
    fn player_lines(&self) -> String {
        self.players
            .iter()
            .map(|player| match skill_badge(player.skill_level) {
                Some(badge) => format!("{}  {}", player.nickname, badge),
                None => player.nickname.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MatchSummary {
    pub fn new(event: &InboundEvent, detail: &MatchDetail) -> Self {
        Self {
            event: event.event.clone(),
            entity_name: detail
                .entity
                .as_ref()
                .map(|entity| entity.name.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            teams: [
                TeamSummary::from_faction(&detail.teams.faction1),
                TeamSummary::from_faction(&detail.teams.faction2),
            ],
            map_pick: detail.map_pick().unwrap_or(MISSING_FIELD).to_string(),
        }
    }

    pub fn to_discord_message(&self, match_id: &str, event_timestamp: &str) -> DiscordMessage {
        let match_url = format!("https://www.faceit.com/en/cs2/room/{match_id}");

        let embed = Embed {
            title: format!("Match {}", self.event.replace("match_status_", "")),
            description: format!("[Match Link]({match_url})"),
            color: EMBED_COLOR,
            fields: vec![
                EmbedField::new("**Entity**", format!("**__{}__**", self.entity_name), false),
                EmbedField::new("**Team 1**", self.teams[0].name.as_str(), true),
                EmbedField::new("**Team 2**", self.teams[1].name.as_str(), true),
                // Blank field for spacing
                EmbedField::new("\u{200B}", "\u{200B}", true),
                EmbedField::new("Players", self.teams[0].player_lines(), true),
                EmbedField::new("Players", self.teams[1].player_lines(), true),
                EmbedField::new("Map Picked", self.map_pick.as_str(), false),
            ],
            timestamp: DateTime::parse_from_rfc3339(event_timestamp)
                .ok()
                .map(|ts| ts.to_rfc3339()),
        };

        DiscordMessage {
            content: String::new(),
            embeds: vec![embed],
        }
    }
}
