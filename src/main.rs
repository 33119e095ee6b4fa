use playerdle::cli::{CliInterface, parse_cli};
use playerdle::config::{Config, UiMode};
use playerdle::logging::init_logger;
use playerdle::tui::TuiInterface;
use playerdle::{GameController, cached_pool, game_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    let config = Config::from_cli(&cli);
    if let Err(e) = init_logger(config.log_level, &config.log_target) {
        eprintln!("Failed to open log file: {e}");
    }
    log::debug!("configuration: {config:?}");

    let provider = config.name_provider();
    let pool = cached_pool(provider.as_ref());

    let controller = match config.seed {
        Some(seed) => GameController::with_seed(pool, seed),
        None => GameController::start_round(pool),
    };
    let mut controller = match controller {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let tally = match config.ui {
        UiMode::Cli => {
            let mut interface = CliInterface::new(io::stdin().lock());
            game_loop(&mut controller, &mut interface)
        }
        UiMode::Tui => match TuiInterface::new() {
            Ok(mut interface) => game_loop(&mut controller, &mut interface),
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    log::info!(
        "session finished: {} won, {} lost, {} abandoned",
        tally.won,
        tally.lost,
        tally.abandoned
    );
    ExitCode::SUCCESS
}
