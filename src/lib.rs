// Library interface for codebreaker
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod logging;
pub mod roundbank;
pub mod rounds;
pub mod session;
pub mod share;
pub mod target;
pub mod tui;

// Re-export commonly used items for easier testing
pub use error::{CatalogError, EvaluationError, GameError, RoundsError, SessionError, TargetError};
pub use evaluator::{Feedback, evaluate, is_win};
pub use game_state::{GameSettings, Scoreboard, TargetMode, UserAction, game_loop};
pub use roundbank::{load_rounds_from_file, load_rounds_from_str};
pub use rounds::{Round, RoundCatalog, RoundInfo};
pub use session::{GameSession, GuessReport, Outcome};
pub use share::{format_share, share_intent_url};
pub use target::{Target, check_code, generate_code};
