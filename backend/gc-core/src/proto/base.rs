// Session handshake and shared-object cache messages.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientHello {
    #[prost(uint32, optional, tag = "1")]
    pub version: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub client_session_need: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub client_launcher: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoIdOwner {
    #[prost(uint32, optional, tag = "1")]
    pub r#type: Option<u32>,
    #[prost(uint64, optional, tag = "2")]
    pub id: Option<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoCacheSubscribedType {
    #[prost(int32, optional, tag = "1")]
    pub type_id: Option<i32>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub object_data: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoCacheSubscribed {
    #[prost(message, repeated, tag = "2")]
    pub objects: Vec<SoCacheSubscribedType>,
    #[prost(fixed64, optional, tag = "3")]
    pub version: Option<u64>,
    #[prost(message, optional, tag = "4")]
    pub owner_soid: Option<SoIdOwner>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoCacheSubscriptionCheck {
    #[prost(fixed64, optional, tag = "2")]
    pub version: Option<u64>,
    #[prost(message, optional, tag = "3")]
    pub owner_soid: Option<SoIdOwner>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientWelcomeLocation {
    #[prost(float, optional, tag = "1")]
    pub latitude: Option<f32>,
    #[prost(float, optional, tag = "2")]
    pub longitude: Option<f32>,
    #[prost(string, optional, tag = "3")]
    pub country: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientWelcome {
    #[prost(uint32, optional, tag = "1")]
    pub version: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub game_data: Option<Vec<u8>>,
    #[prost(message, repeated, tag = "3")]
    pub outofdate_subscribed_caches: Vec<SoCacheSubscribed>,
    #[prost(message, repeated, tag = "4")]
    pub uptodate_subscribed_caches: Vec<SoCacheSubscriptionCheck>,
    #[prost(message, optional, tag = "5")]
    pub location: Option<ClientWelcomeLocation>,
    #[prost(string, optional, tag = "10")]
    pub txn_country_code: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionStatus {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(uint32, optional, tag = "2")]
    pub client_session_need: Option<u32>,
    #[prost(int32, optional, tag = "3")]
    pub queue_position: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub queue_size: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub wait_seconds: Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub estimated_wait_seconds_remaining: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoSingleObject {
    #[prost(int32, optional, tag = "2")]
    pub type_id: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub object_data: Option<Vec<u8>>,
    #[prost(fixed64, optional, tag = "4")]
    pub version: Option<u64>,
    #[prost(message, optional, tag = "5")]
    pub owner_soid: Option<SoIdOwner>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoMultipleObject {
    #[prost(int32, optional, tag = "1")]
    pub type_id: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub object_data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoMultipleObjects {
    #[prost(message, repeated, tag = "2")]
    pub objects_modified: Vec<SoMultipleObject>,
    #[prost(fixed64, optional, tag = "3")]
    pub version: Option<u64>,
    #[prost(message, repeated, tag = "4")]
    pub objects_added: Vec<SoMultipleObject>,
    #[prost(message, repeated, tag = "5")]
    pub objects_removed: Vec<SoMultipleObject>,
    #[prost(message, optional, tag = "6")]
    pub owner_soid: Option<SoIdOwner>,
}
