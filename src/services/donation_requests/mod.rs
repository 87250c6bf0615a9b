pub mod donation_request_service;

pub use donation_request_service::DonationRequestService;
