pub mod badge;
pub mod embed;
pub mod event;
pub mod match_detail;
pub mod notification;
