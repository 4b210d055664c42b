// Item economy messages shared by every Source game coordinator.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EconItemAttribute {
    #[prost(uint32, optional, tag = "1")]
    pub def_index: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub value: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub value_bytes: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EconItemEquipped {
    #[prost(uint32, optional, tag = "1")]
    pub new_class: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub new_slot: Option<u32>,
}

/// `CSOEconItem`: one inventory item as stored in the shared-object cache.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EconItem {
    #[prost(uint64, optional, tag = "1")]
    pub id: Option<u64>,
    #[prost(uint32, optional, tag = "2")]
    pub account_id: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub inventory: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub def_index: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub quantity: Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    pub level: Option<u32>,
    #[prost(uint32, optional, tag = "7")]
    pub quality: Option<u32>,
    #[prost(uint32, optional, tag = "8")]
    pub flags: Option<u32>,
    #[prost(uint32, optional, tag = "9")]
    pub origin: Option<u32>,
    #[prost(string, optional, tag = "10")]
    pub custom_name: Option<String>,
    #[prost(string, optional, tag = "11")]
    pub custom_desc: Option<String>,
    #[prost(message, repeated, tag = "12")]
    pub attribute: Vec<EconItemAttribute>,
    #[prost(bool, optional, tag = "14")]
    pub in_use: Option<bool>,
    #[prost(uint32, optional, tag = "15")]
    pub style: Option<u32>,
    #[prost(uint64, optional, tag = "16")]
    pub original_id: Option<u64>,
    #[prost(message, repeated, tag = "18")]
    pub equipped_state: Vec<EconItemEquipped>,
    #[prost(uint32, optional, tag = "19")]
    pub rarity: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ItemCustomizationNotification {
    #[prost(uint64, repeated, packed = "false", tag = "1")]
    pub item_id: Vec<u64>,
    #[prost(uint32, optional, tag = "2")]
    pub request: Option<u32>,
}

/// Body of casket add / extract / load-contents requests.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CasketItem {
    #[prost(uint64, optional, tag = "1")]
    pub casket_item_id: Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub item_item_id: Option<u64>,
}
