// Chat panel: keyword dispatcher, canned replies, and the conversation log.

pub mod dispatcher;
pub mod models;
pub mod responder;
pub mod responses;
