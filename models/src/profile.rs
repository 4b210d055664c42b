use serde::{Deserialize, Serialize};

/// Competitive profile of one player.
///
/// The GC uses the same shape for our own account data (sent right after the
/// session starts) and for profiles fetched on request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub account_id: u32,
    pub player_level: Option<i32>,
    pub player_cur_xp: Option<i32>,
    pub vac_banned: Option<i32>,
    pub penalty_seconds: Option<u32>,
    pub penalty_reason: Option<u32>,
    pub ranking: Option<PlayerRanking>,
    pub commendation: Option<Commendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub rank_id: Option<u32>,
    pub wins: Option<u32>,
    pub rank_type_id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commendation {
    pub friendly: Option<u32>,
    pub teaching: Option<u32>,
    pub leader: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchList {
    pub request_id: Option<u32>,
    pub account_id: Option<u32>,
    pub server_time: Option<u32>,
    pub matches: Vec<MatchSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: Option<String>,
    pub match_time: Option<u32>,
    pub watchable_match_id: Option<String>,
    pub server_ip: Option<u32>,
    pub tv_port: Option<u32>,
}
