//! Command handlers for the `fivedraw` CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: input and output streams passed as parameters
//! - Error propagation: all errors propagated via `CliError`

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rank;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{handle_play_command, PlayOptions};
pub use rank::handle_rank_command;
pub use sim::{handle_sim_command, SimOptions};
pub use stats::handle_stats_command;
