use serde::Deserialize;

/// Subset of the FACEIT Data API match response that the relay reads.
/// Unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDetail {
    #[serde(default)]
    pub entity: Option<MatchEntity>,

    pub teams: MatchTeams,

    #[serde(default)]
    pub voting: Option<Voting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchEntity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchTeams {
    pub faction1: Faction,
    pub faction2: Faction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Faction {
    pub name: String,
    pub roster: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterPlayer {
    pub nickname: String,
    pub game_skill_level: i64,
    pub player_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Voting {
    #[serde(default)]
    pub map: Option<MapVote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapVote {
    #[serde(default)]
    pub pick: Vec<String>,
}

impl MatchDetail {
    pub fn map_pick(&self) -> Option<&str> {
        self.voting
            .as_ref()?
            .map
            .as_ref()?
            .pick
            .first()
            .map(String::as_str)
    }
}
