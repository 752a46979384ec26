pub mod email_service;
pub mod redemption_service;

pub use email_service::EmailService;
pub use redemption_service::{ConsumeRedemption, RpcRedemptionClient};
