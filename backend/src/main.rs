use anyhow::Context;
use backend::{Game, GameStatus, TouchOutcome};
use clap::Parser;
use monke::MonkePlayer;
use terminal_ui::{Command, TerminalUI};
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal against an opponent that moves at random
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the opponent's choices, for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Draw without colors, using letters for pieces
    #[arg(long)]
    plain: bool,
    /// Log filter, such as `debug` or `backend=info`; defaults to `RUST_LOG`, else `warn`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter `{directives}`"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let opponent = match args.seed {
        Some(seed) => MonkePlayer::with_seed(seed),
        None => MonkePlayer::new(),
    };
    let mut game = Game::new(opponent);
    let mut ui = TerminalUI::stdio(args.plain);

    loop {
        ui.draw(game.board(), game.selected(), game.highlights())
            .context("failed to draw the board")?;
        if let GameStatus::Stuck(color) = game.status() {
            ui.message(format!("{color} has no moves left, game over"))
                .context("failed to write to the terminal")?;
            break;
        }
        let Some(command) = ui.next_command().context("failed to read input")? else {
            break;
        };
        let square = match command {
            Command::Touch(square) => square,
            Command::Quit => break,
        };
        if let TouchOutcome::Moved {
            played,
            reply: Some(reply),
        } = game.touch(square)
        {
            let opponent = game.turn().other();
            ui.message(format!("You played {played}, {opponent} replied {reply}"))
                .context("failed to write to the terminal")?;
        }
    }
    Ok(())
}
