//! Behavioural tests for the perfect-play engine.

use perfect_tictactoe::{Board, Engine, Outcome, Player, Position, Seat, classify, legal_moves};

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

/// Plays every player line against the engine from `board`, counting
/// finished games as (engine wins, draws, player wins).
fn play_out(board: &mut Board, engine: Engine, to_move: Seat, tally: &mut (u32, u32, u32)) {
    match engine.classify(board) {
        Outcome::EngineWin => tally.0 += 1,
        Outcome::Draw => tally.1 += 1,
        Outcome::PlayerWin => tally.2 += 1,
        Outcome::Ongoing => match to_move {
            Seat::Engine => {
                let choice = engine.find_best_move(board).expect("board is not full");
                board.place(choice, engine.mark());
                play_out(board, engine, Seat::Player, tally);
                board.unplace(choice);
            }
            Seat::Player => {
                for position in legal_moves(board) {
                    board.place(position, engine.opponent());
                    play_out(board, engine, Seat::Engine, tally);
                    board.unplace(position);
                }
            }
        },
    }
}

#[test]
fn test_empty_board_engine_to_move() {
    let engine = Engine::default();
    let mut board = Board::new();
    // Every opening is a draw, so the lowest index wins the tie.
    assert_eq!(engine.find_best_move(&mut board), Some(Position::TopLeft));
}

#[test]
fn test_blocks_immediate_threat() {
    let engine = Engine::default();
    let mut board = board("XX__O____");
    assert_eq!(engine.find_best_move(&mut board), Some(Position::TopRight));
}

#[test]
fn test_prefers_immediate_win() {
    let engine = Engine::default();
    let mut board = board("OX__O____");
    assert_eq!(engine.find_best_move(&mut board), Some(Position::BottomRight));
}

#[test]
fn test_win_over_block() {
    let engine = Engine::default();
    // X threatens the top row, but O completes the middle row first.
    let mut board = board("XX_OO_X__");
    assert_eq!(engine.find_best_move(&mut board), Some(Position::MiddleRight));
}

#[test]
fn test_last_empty_square_then_draw() {
    let mut board = board("OXOXXO_OX");
    assert_eq!(classify(&board, Player::O), Outcome::Ongoing);
    board.place(Position::BottomLeft, Player::X);
    assert_eq!(classify(&board, Player::O), Outcome::Draw);
}

#[test]
fn test_diagonal_already_complete() {
    // O holds 0-4-8 before the last square is filled.
    let mut board = board("OXOXOX_XO");
    assert_eq!(classify(&board, Player::O), Outcome::EngineWin);
    board.place(Position::BottomLeft, Player::X);
    assert_eq!(classify(&board, Player::O), Outcome::EngineWin);
}

#[test]
fn test_full_board_sentinel() {
    let engine = Engine::default();
    let mut board = board("XOXOXXOXO");
    assert_eq!(engine.find_best_move(&mut board), None);
}

#[test]
fn test_board_unchanged_after_search() {
    let engine = Engine::default();
    for text in ["_________", "X________", "XX__O____", "OX__O____", "XOX_O_X__"] {
        let mut board = board(text);
        let before = board.clone();
        engine.find_best_move(&mut board);
        assert_eq!(board, before, "{text}");
    }
}

#[test]
fn test_deterministic() {
    let engine = Engine::new(Player::X);
    for text in ["_________", "O___X____", "X_O_O____"] {
        let mut first = board(text);
        let mut second = board(text);
        assert_eq!(engine.find_best_move(&mut first), engine.find_best_move(&mut second));
    }
}

#[test]
fn test_analysis_agrees_with_best_move() {
    let engine = Engine::default();
    let mut board = board("X___O___X");
    let analysis = engine.analyze(&mut board);
    assert_eq!(*analysis.best_move(), engine.find_best_move(&mut board));
    assert_eq!(analysis.scores().len(), 6);
    assert!(*analysis.nodes() > 0);

    let best = analysis.best_move().expect("moves remain");
    let best_score = analysis
        .scores()
        .iter()
        .find(|s| *s.position() == best)
        .map(|s| *s.score())
        .expect("best move is scored");
    assert!(analysis.scores().iter().all(|s| *s.score() <= best_score));
}

#[test]
fn test_analysis_serializes() {
    let engine = Engine::default();
    let mut board = board("XX__O____");
    let json = serde_json::to_value(engine.analyze(&mut board)).unwrap();
    assert_eq!(json["best_move"], "TopRight");
    assert_eq!(json["engine"], "O");
}

#[test]
fn test_never_loses_as_second_player() {
    let engine = Engine::default();
    let mut tally = (0, 0, 0);
    play_out(&mut Board::new(), engine, Seat::Player, &mut tally);
    assert_eq!(tally.2, 0, "engine lost a game: {tally:?}");
    assert!(tally.0 > 0 && tally.1 > 0);
}

#[test]
fn test_never_loses_as_first_player() {
    let engine = Engine::new(Player::X);
    let mut tally = (0, 0, 0);
    play_out(&mut Board::new(), engine, Seat::Engine, &mut tally);
    assert_eq!(tally.2, 0, "engine lost a game: {tally:?}");
}

#[test]
fn test_classify_is_total_over_reachable_boards() {
    fn walk(board: &mut Board, to_move: Player) {
        let outcome = classify(board, Player::O);
        let o_wins = perfect_tictactoe::is_win(board, Player::O);
        let x_wins = perfect_tictactoe::is_win(board, Player::X);
        assert!(!(perfect_tictactoe::is_draw(board) && (o_wins || x_wins)));
        assert!(!(o_wins && x_wins));
        if outcome.is_terminal() {
            return;
        }
        for position in legal_moves(board) {
            board.place(position, to_move);
            walk(board, to_move.opponent());
            board.unplace(position);
        }
    }

    walk(&mut Board::new(), Player::X);
}
