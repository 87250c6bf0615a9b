pub mod donation_request;

pub use donation_request::{DonationRequest, DonationStatus};
