#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, run_session, simulate, AiPlayer, CliPlayer, Mark};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum MarkArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = MarkArg::X, help = "Your mark; the AI takes the other one")]
        mark: MarkArg,
        #[arg(long, help = "Let the AI make the first move of every round")]
        ai_first: bool,
        #[arg(long, help = "Show the AI's recommended move as the default answer")]
        hints: bool,
    },
    /// Pit the AI against a random opponent and print a JSON summary.
    Sim {
        #[arg(long, default_value_t = 0, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        games: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mark,
            ai_first,
            hints,
        } => {
            let human_mark = Mark::from(mark);
            let mut human = CliPlayer::stdio(human_mark);
            if hints {
                human = human.with_hints();
            }
            let mut ai = AiPlayer::new(human_mark.opponent());
            run_session(&mut human, &mut ai, !ai_first)?;
        }
        Commands::Sim { seed, games } => {
            let summary = simulate(seed, games)?;
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
