pub mod donation_request_repo;

pub use donation_request_repo::DonationRequestRepository;
