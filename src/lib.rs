mod ai;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
pub mod prelude;
pub mod session;
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level};
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use session::{MoveRecord, Session};
pub use ui::{ConsolePresenter, Presenter};
