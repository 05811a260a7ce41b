pub mod cancel_wager;
pub mod create_wager;
pub mod fulfill_reading;
pub mod fund_pool;
pub mod get_admin_stuff;
pub mod get_wagers;
pub mod initialize;
pub mod open_ledger;
pub mod retry_reading;
pub mod set_reward_multiplier;
pub mod set_stopped;
pub mod update_config;
pub mod verify_wager;
pub mod verify_wagers;

pub use cancel_wager::*;
pub use create_wager::*;
pub use fulfill_reading::*;
pub use fund_pool::*;
pub use get_admin_stuff::*;
pub use get_wagers::*;
pub use initialize::*;
pub use open_ledger::*;
pub use retry_reading::*;
pub use set_reward_multiplier::*;
pub use set_stopped::*;
pub use update_config::*;
pub use verify_wager::*;
pub use verify_wagers::*;
