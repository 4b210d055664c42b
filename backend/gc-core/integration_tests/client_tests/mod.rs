mod caskets;
mod helpers;
mod requests;
mod session;
