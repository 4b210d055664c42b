// Counter-Strike specific queries: inspection, profiles, match lists, logon errors.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PreviewSticker {
    #[prost(uint32, optional, tag = "1")]
    pub slot: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub sticker_id: Option<u32>,
    #[prost(float, optional, tag = "3")]
    pub wear: Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub scale: Option<f32>,
    #[prost(float, optional, tag = "5")]
    pub rotation: Option<f32>,
    #[prost(uint32, optional, tag = "6")]
    pub tint_id: Option<u32>,
    #[prost(float, optional, tag = "7")]
    pub offset_x: Option<f32>,
    #[prost(float, optional, tag = "8")]
    pub offset_y: Option<f32>,
    #[prost(float, optional, tag = "9")]
    pub offset_z: Option<f32>,
    #[prost(uint32, optional, tag = "10")]
    pub pattern: Option<u32>,
    #[prost(uint32, optional, tag = "11")]
    pub highlight_reel: Option<u32>,
    #[prost(uint32, optional, tag = "12")]
    pub wrapped_sticker: Option<u32>,
}

/// `CEconItemPreviewDataBlock`: what an inspection (or share token) reveals.
///
/// `paintwear` travels as the raw IEEE-754 bit pattern of an `f32`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PreviewDataBlock {
    #[prost(uint32, optional, tag = "1")]
    pub accountid: Option<u32>,
    #[prost(uint64, optional, tag = "2")]
    pub itemid: Option<u64>,
    #[prost(uint32, optional, tag = "3")]
    pub defindex: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub paintindex: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub rarity: Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    pub quality: Option<u32>,
    #[prost(uint32, optional, tag = "7")]
    pub paintwear: Option<u32>,
    #[prost(uint32, optional, tag = "8")]
    pub paintseed: Option<u32>,
    #[prost(uint32, optional, tag = "9")]
    pub killeaterscoretype: Option<u32>,
    #[prost(uint32, optional, tag = "10")]
    pub killeatervalue: Option<u32>,
    #[prost(string, optional, tag = "11")]
    pub customname: Option<String>,
    #[prost(message, repeated, tag = "12")]
    pub stickers: Vec<PreviewSticker>,
    #[prost(uint32, optional, tag = "13")]
    pub inventory: Option<u32>,
    #[prost(uint32, optional, tag = "14")]
    pub origin: Option<u32>,
    #[prost(uint32, optional, tag = "15")]
    pub questid: Option<u32>,
    #[prost(uint32, optional, tag = "16")]
    pub dropreason: Option<u32>,
    #[prost(uint32, optional, tag = "17")]
    pub musicindex: Option<u32>,
    #[prost(int32, optional, tag = "18")]
    pub entindex: Option<i32>,
    #[prost(uint32, optional, tag = "19")]
    pub petindex: Option<u32>,
    #[prost(message, repeated, tag = "20")]
    pub keychains: Vec<PreviewSticker>,
    #[prost(uint32, optional, tag = "21")]
    pub style: Option<u32>,
    #[prost(message, repeated, tag = "22")]
    pub variations: Vec<PreviewSticker>,
    #[prost(uint32, optional, tag = "23")]
    pub upgrade_level: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PreviewDataBlockRequest {
    #[prost(uint64, optional, tag = "1")]
    pub param_s: Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub param_a: Option<u64>,
    #[prost(uint64, optional, tag = "3")]
    pub param_d: Option<u64>,
    #[prost(uint64, optional, tag = "4")]
    pub param_m: Option<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PreviewDataBlockResponse {
    #[prost(message, optional, tag = "1")]
    pub iteminfo: Option<PreviewDataBlock>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientRequestPlayersProfile {
    #[prost(uint32, optional, tag = "3")]
    pub account_id: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub request_level: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlayerRankingInfo {
    #[prost(uint32, optional, tag = "1")]
    pub account_id: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub rank_id: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub wins: Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    pub rank_type_id: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlayerCommendationInfo {
    #[prost(uint32, optional, tag = "1")]
    pub cmd_friendly: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub cmd_teaching: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub cmd_leader: Option<u32>,
}

/// Asks the GC for our account data; answered by [`MatchmakingGc2ClientHello`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchmakingClient2GcHello {}

/// Account data pushed after the session starts; also the per-player shape
/// inside [`PlayersProfile`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchmakingGc2ClientHello {
    #[prost(uint32, optional, tag = "1")]
    pub account_id: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub penalty_seconds: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub penalty_reason: Option<u32>,
    #[prost(int32, optional, tag = "6")]
    pub vac_banned: Option<i32>,
    #[prost(message, optional, tag = "7")]
    pub ranking: Option<PlayerRankingInfo>,
    #[prost(message, optional, tag = "8")]
    pub commendation: Option<PlayerCommendationInfo>,
    #[prost(int32, optional, tag = "17")]
    pub player_level: Option<i32>,
    #[prost(int32, optional, tag = "18")]
    pub player_cur_xp: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlayersProfile {
    #[prost(uint32, optional, tag = "1")]
    pub request_id: Option<u32>,
    #[prost(message, repeated, tag = "2")]
    pub account_profiles: Vec<MatchmakingGc2ClientHello>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchListRequestRecentUserGames {
    #[prost(uint32, optional, tag = "1")]
    pub accountid: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchListRequestLiveGameForUser {
    #[prost(uint32, optional, tag = "1")]
    pub accountid: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchListRequestCurrentLiveGames {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WatchableMatchInfo {
    #[prost(uint32, optional, tag = "1")]
    pub server_ip: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub tv_port: Option<u32>,
    #[prost(uint64, optional, tag = "12")]
    pub match_id: Option<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchInfo {
    #[prost(uint64, optional, tag = "1")]
    pub matchid: Option<u64>,
    #[prost(uint32, optional, tag = "2")]
    pub matchtime: Option<u32>,
    #[prost(message, optional, tag = "3")]
    pub watchablematchinfo: Option<WatchableMatchInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchList {
    #[prost(uint32, optional, tag = "1")]
    pub msgrequestid: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub accountid: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub servertime: Option<u32>,
    #[prost(message, repeated, tag = "4")]
    pub matches: Vec<MatchInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientLogonFatalError {
    #[prost(uint32, optional, tag = "1")]
    pub errorcode: Option<u32>,
    #[prost(string, optional, tag = "2")]
    pub message: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub country: Option<String>,
}
