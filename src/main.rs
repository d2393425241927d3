use codebreaker::cli::{Cli, CliInterface, parse_cli};
use codebreaker::game_state::game_loop;
use codebreaker::logging::init_logging;
use codebreaker::roundbank::{get_rounds_path, load_rounds_from_file};
use codebreaker::rounds::RoundCatalog;
use codebreaker::target::check_code;
use codebreaker::tui::TuiInterface;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose, cli.tui);

    if let (Some(submitted), Some(winning)) = (&cli.check, &cli.winning_code) {
        let correct = check_code(submitted, winning);
        println!("{}", if correct { "correct" } else { "incorrect" });
        return if correct { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let catalog = match load_catalog(&cli) {
        Ok(catalog) => catalog,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let settings = match cli.game_settings() {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let scoreboard = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&catalog, &settings, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&catalog, &settings, &mut interface)
    };
    log::info!("Session over: {} won, {} lost", scoreboard.won, scoreboard.lost);

    ExitCode::SUCCESS
}

fn load_catalog(cli: &Cli) -> Result<RoundCatalog, String> {
    let path = cli
        .rounds_path
        .clone()
        .map(PathBuf::from)
        .or_else(|| get_rounds_path().filter(|p| p.exists()));

    let catalog = match path {
        Some(path) => {
            log::info!("Loading rounds from {}", path.display());
            let rounds = load_rounds_from_file(&path)
                .map_err(|e| format!("Failed to load rounds from '{}': {e}", path.display()))?;
            RoundCatalog::new(rounds).map_err(|e| format!("Invalid round list: {e}"))?
        }
        None => RoundCatalog::default_rounds().map_err(|e| e.to_string())?,
    };

    if catalog.bonus_count() > 1 {
        log::warn!("{} rounds are flagged as bonus rounds", catalog.bonus_count());
    }
    if let Some(round) = cli.round {
        catalog.set_current_round(round).map_err(|e| e.to_string())?;
    }
    Ok(catalog)
}
