mod decode;
mod request;
