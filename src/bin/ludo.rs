//! Terminal Ludo table.
//!
//! Run with: `cargo run --bin ludo`
//!
//! Reads one command per line from stdin. Set `RUST_LOG=rust_ludo=debug`
//! to see rejected actions.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rust_ludo::core::PIECES_PER_PLAYER;
use rust_ludo::rules::{is_legal, legal_pieces};
use rust_ludo::{
    Action, Color, GameConfig, GameState, Phase, PieceId, PieceRef, Role, Table, TableHandle, User,
};

const HELP: &str = "\
commands:
  login <user> <password>   log in (admin, or player1..player4)
  logout                    log out
  whoami                    show the logged-in user
  roll                      roll the dice
  move <id>                 move piece <id> (0-3) by the pending roll
  legal                     list pieces that can use the pending roll
  state                     show the board
  help                      show this text
  quit                      leave";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("rust_ludo=info".parse()?))
        .init();

    let config = GameConfig::from_entropy();
    tracing::info!(seed = config.seed, "table starting");
    let table = Table::spawn(&config);

    println!("{}", HELP);
    println!("{}", table.state().status_message());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{}", HELP),
            ["login", username, password] => {
                if table.login(*username, *password).await {
                    println!("Logged in as {}.", username);
                } else {
                    println!("Login failed.");
                }
            }
            ["logout"] => {
                table.logout();
                println!("Logged out.");
            }
            ["whoami"] => match table.current_user().await {
                Some(user) => println!("{}", describe_user(&user)),
                None => println!("Not logged in."),
            },
            ["roll"] => roll(&table).await?,
            ["move", id] => match id.parse::<u8>() {
                Ok(id) => move_piece(&table, PieceId::new(id)).await?,
                Err(_) => println!("Piece id must be a number 0-3."),
            },
            ["legal"] => print_legal(&table.state()),
            ["state"] => {
                let state = table.state();
                print_state(&state);
                if table.current_user().await.is_some_and(|u| u.role == Role::Admin) {
                    print_scores(&state);
                }
            }
            _ => println!("Unknown command. Type `help`."),
        }
    }

    tracing::info!("table closing");
    Ok(())
}

fn describe_user(user: &User) -> String {
    match (user.role, user.color) {
        (Role::Player, Some(color)) => format!("{} (playing {})", user.username, color),
        _ => format!("{} (admin)", user.username),
    }
}

/// Color the logged-in user may act for right now.
///
/// Only a seat player on their own turn may act. The admin only watches.
async fn acting_color(table: &TableHandle, state: &GameState) -> Option<Color> {
    let Some(user) = table.current_user().await else {
        println!("Log in first.");
        return None;
    };
    let turn = state.current_turn();
    if user.may_play(turn) {
        return Some(turn);
    }
    match user.role {
        Role::Admin => println!("The admin monitors the table and cannot play."),
        Role::Player => println!("It is {}'s turn.", turn),
    }
    None
}

async fn roll(table: &TableHandle) -> anyhow::Result<()> {
    let state = table.state();
    if acting_color(table, &state).await.is_none() {
        return Ok(());
    }
    if state.phase() != Phase::AwaitingRoll {
        println!("{}", state.status_message());
        return Ok(());
    }

    let seen = state.action_history().len();
    let mut updates = table.subscribe();
    table.roll_dice();
    println!("Rolling...");

    // Settled once the roll has landed and any forfeited turn has passed.
    let settled = updates
        .wait_for(|s| {
            s.action_history().len() > seen
                && !matches!(s.phase(), Phase::Rolling | Phase::Passing { .. })
        })
        .await
        .context("table stopped")?
        .clone();

    match settled.pending_roll() {
        Some(roll) => println!("Rolled {}.", roll),
        None => println!("No legal move."),
    }
    println!("{}", settled.status_message());
    Ok(())
}

async fn move_piece(table: &TableHandle, id: PieceId) -> anyhow::Result<()> {
    let state = table.state();
    let Some(color) = acting_color(table, &state).await else {
        return Ok(());
    };
    let Some(roll) = state.pending_roll() else {
        println!("Roll first.");
        return Ok(());
    };
    if !is_legal(&state, PieceRef::new(color, id), roll) {
        println!("{} cannot move {}.", PieceRef::new(color, id), roll);
        return Ok(());
    }

    let seen = state.action_history().len();
    let mut updates = table.subscribe();
    table.move_piece(color, id);

    let after = updates
        .wait_for(|s| s.action_history().len() > seen)
        .await
        .context("table stopped")?
        .clone();

    if let Some(piece) = after.piece(PieceRef::new(color, id)) {
        println!("{} is now at {}.", piece.piece_ref(), piece.position);
    }
    println!("{}", after.status_message());
    Ok(())
}

fn print_legal(state: &GameState) {
    match state.pending_roll() {
        Some(roll) => {
            let legal = legal_pieces(state, state.current_turn(), roll);
            if legal.is_empty() {
                println!("No piece can move {}.", roll);
            } else {
                let ids: Vec<String> = legal.iter().map(|id| id.0.to_string()).collect();
                println!("Can move {}: {}", roll, ids.join(", "));
            }
        }
        None => println!("No roll pending."),
    }
}

fn print_state(state: &GameState) {
    for (color, player) in state.players().iter() {
        let marker = if color == state.current_turn() { ">" } else { " " };
        let positions: Vec<String> = player
            .pieces
            .iter()
            .map(|p| format!("{}:{}", p.id.0, p.position))
            .collect();
        println!("{} {:<14} {}", marker, player.name, positions.join("  "));
    }
    println!("{}", state.status_message());
}

/// Dashboard block shown to the admin: dice, winner and finished pieces.
fn print_scores(state: &GameState) {
    let last_roll = state.action_history().iter().rev().find_map(|r| match r.action {
        Action::Roll { value } => Some(value),
        _ => None,
    });
    match last_roll {
        Some(value) => println!("Dice: {}", value),
        None => println!("Dice: -"),
    }
    match state.winner() {
        Some(winner) => println!("Winner: {}", winner),
        None => println!("Winner: none yet"),
    }
    println!("Scores:");
    for (_, player) in state.players().iter() {
        println!("  {:<14} {}/{}", player.name, player.finished_count(), PIECES_PER_PLAYER);
    }
}
