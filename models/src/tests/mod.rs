mod inspect_request;
mod item;
mod status;
mod steam_id;
