use std::fmt::{Display, Formatter, Result as FormatResult};

/// Every GC message type this client sends or understands.
///
/// `code()` is the wire value; `name()` is only used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GcMsgType {
    SoCreate,
    SoUpdate,
    SoDestroy,
    SoCacheSubscribed,
    SoUpdateMultiple,
    Craft,
    CraftResponse,
    Delete,
    NameItem,
    CasketItemAdd,
    CasketItemExtract,
    ItemCustomizationNotification,
    CasketItemLoadContents,
    ClientWelcome,
    ClientHello,
    ClientConnectionStatus,
    MatchmakingClient2GcHello,
    MatchmakingGc2ClientHello,
    ClientRequestPlayersProfile,
    PlayersProfile,
    MatchList,
    MatchListRequestRecentUserGames,
    MatchListRequestCurrentLiveGames,
    MatchListRequestLiveGameForUser,
    EconPreviewDataBlockRequest,
    EconPreviewDataBlockResponse,
    ClientLogonFatalError,
}

impl GcMsgType {
    pub const fn code(self) -> u32 {
        match self {
            Self::SoCreate => 21,
            Self::SoUpdate => 22,
            Self::SoDestroy => 23,
            Self::SoCacheSubscribed => 24,
            Self::SoUpdateMultiple => 26,
            Self::Craft => 1002,
            Self::CraftResponse => 1003,
            Self::Delete => 1004,
            Self::NameItem => 1006,
            Self::CasketItemAdd => 1087,
            Self::CasketItemExtract => 1088,
            Self::ItemCustomizationNotification => 1090,
            Self::CasketItemLoadContents => 1094,
            Self::ClientWelcome => 4004,
            Self::ClientHello => 4006,
            Self::ClientConnectionStatus => 4009,
            Self::MatchmakingClient2GcHello => 9109,
            Self::MatchmakingGc2ClientHello => 9110,
            Self::ClientRequestPlayersProfile => 9127,
            Self::PlayersProfile => 9128,
            Self::MatchList => 9139,
            Self::MatchListRequestRecentUserGames => 9141,
            Self::MatchListRequestCurrentLiveGames => 9146,
            Self::MatchListRequestLiveGameForUser => 9147,
            Self::EconPreviewDataBlockRequest => 9156,
            Self::EconPreviewDataBlockResponse => 9157,
            Self::ClientLogonFatalError => 9187,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        let msg_type = match code {
            21 => Self::SoCreate,
            22 => Self::SoUpdate,
            23 => Self::SoDestroy,
            24 => Self::SoCacheSubscribed,
            26 => Self::SoUpdateMultiple,
            1002 => Self::Craft,
            1003 => Self::CraftResponse,
            1004 => Self::Delete,
            1006 => Self::NameItem,
            1087 => Self::CasketItemAdd,
            1088 => Self::CasketItemExtract,
            1090 => Self::ItemCustomizationNotification,
            1094 => Self::CasketItemLoadContents,
            4004 => Self::ClientWelcome,
            4006 => Self::ClientHello,
            4009 => Self::ClientConnectionStatus,
            9109 => Self::MatchmakingClient2GcHello,
            9110 => Self::MatchmakingGc2ClientHello,
            9127 => Self::ClientRequestPlayersProfile,
            9128 => Self::PlayersProfile,
            9139 => Self::MatchList,
            9141 => Self::MatchListRequestRecentUserGames,
            9146 => Self::MatchListRequestCurrentLiveGames,
            9147 => Self::MatchListRequestLiveGameForUser,
            9156 => Self::EconPreviewDataBlockRequest,
            9157 => Self::EconPreviewDataBlockResponse,
            9187 => Self::ClientLogonFatalError,
            _ => return None,
        };
        Some(msg_type)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SoCreate => "k_ESOMsg_Create",
            Self::SoUpdate => "k_ESOMsg_Update",
            Self::SoDestroy => "k_ESOMsg_Destroy",
            Self::SoCacheSubscribed => "k_ESOMsg_CacheSubscribed",
            Self::SoUpdateMultiple => "k_ESOMsg_UpdateMultiple",
            Self::Craft => "k_EMsgGCCraft",
            Self::CraftResponse => "k_EMsgGCCraftResponse",
            Self::Delete => "k_EMsgGCDelete",
            Self::NameItem => "k_EMsgGCNameItem",
            Self::CasketItemAdd => "k_EMsgGCCasketItemAdd",
            Self::CasketItemExtract => "k_EMsgGCCasketItemExtract",
            Self::ItemCustomizationNotification => "k_EMsgGCItemCustomizationNotification",
            Self::CasketItemLoadContents => "k_EMsgGCCasketItemLoadContents",
            Self::ClientWelcome => "k_EMsgGCClientWelcome",
            Self::ClientHello => "k_EMsgGCClientHello",
            Self::ClientConnectionStatus => "k_EMsgGCClientConnectionStatus",
            Self::MatchmakingClient2GcHello => "k_EMsgGCCStrike15_v2_MatchmakingClient2GCHello",
            Self::MatchmakingGc2ClientHello => "k_EMsgGCCStrike15_v2_MatchmakingGC2ClientHello",
            Self::ClientRequestPlayersProfile => "k_EMsgGCCStrike15_v2_ClientRequestPlayersProfile",
            Self::PlayersProfile => "k_EMsgGCCStrike15_v2_PlayersProfile",
            Self::MatchList => "k_EMsgGCCStrike15_v2_MatchList",
            Self::MatchListRequestRecentUserGames => {
                "k_EMsgGCCStrike15_v2_MatchListRequestRecentUserGames"
            }
            Self::MatchListRequestCurrentLiveGames => {
                "k_EMsgGCCStrike15_v2_MatchListRequestCurrentLiveGames"
            }
            Self::MatchListRequestLiveGameForUser => {
                "k_EMsgGCCStrike15_v2_MatchListRequestLiveGameForUser"
            }
            Self::EconPreviewDataBlockRequest => {
                "k_EMsgGCCStrike15_v2_Client2GCEconPreviewDataBlockRequest"
            }
            Self::EconPreviewDataBlockResponse => {
                "k_EMsgGCCStrike15_v2_Client2GCEconPreviewDataBlockResponse"
            }
            Self::ClientLogonFatalError => "k_EMsgGCCStrike15_v2_ClientLogonFatalError",
        }
    }
}

impl Display for GcMsgType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{} ({})", self.name(), self.code())
    }
}
