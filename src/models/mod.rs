pub mod contact;
pub mod redemption;
