use std::process::ExitCode;
use std::sync::Arc;
use wordle_env::batch::VecWordle;
use wordle_env::cli::{Cli, Command, parse_cli};
use wordle_env::game::WordleGame;
use wordle_env::simulate::run_random_agent;
use wordle_env::tui::{PlaySession, Tui};
use wordle_env::{Alphabet, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = Alphabet::english();
    let vocabulary = Arc::new(cli.load_vocabulary(&alphabet)?);
    let config = cli.game_config();
    log::info!(
        "Loaded {} words, {} tries, {:?} duplicates",
        vocabulary.len(),
        config.max_tries,
        config.duplicates
    );

    match cli.command {
        Command::Play { seed } => {
            let game = WordleGame::new(vocabulary, config, seed)?;
            let mut session = PlaySession::new(game, alphabet);
            let mut tui = Tui::new()?;
            tui.run(&mut session)?;
        }
        Command::Simulate {
            envs,
            episodes,
            seed,
        } => {
            let mut batch = VecWordle::new(vocabulary, config, envs, seed)?;
            println!("Simulating {episodes} episodes over {envs} games...");
            let report = run_random_agent(&mut batch, episodes, seed)?;
            println!("{report}");
        }
    }
    Ok(())
}
