pub mod mailbox;
pub mod payout;
