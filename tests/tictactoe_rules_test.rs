//! Tests for board state and win/draw detection.

use pomopets_games::{Board, Cell, LINES, Mark, Outcome, UniformRandom};

fn board_with(xs: &[usize], os: &[usize]) -> Board {
    let mut board = Board::new();
    for &i in xs {
        board.set(i, Cell::Occupied(Mark::X));
    }
    for &i in os {
        board.set(i, Cell::Occupied(Mark::O));
    }
    board
}

#[test]
fn test_empty_board_has_no_outcome() {
    let board = Board::new();
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.empty_cells().len(), 9);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        let board = board_with(&line, &[]);
        assert_eq!(board.winner(), Some(Mark::X), "line {line:?} for X");
        assert_eq!(board.outcome(), Some(Outcome::Won(Mark::X)));

        let board = board_with(&[], &line);
        assert_eq!(board.winner(), Some(Mark::O), "line {line:?} for O");
        assert_eq!(board.outcome(), Some(Outcome::Won(Mark::O)));
    }
}

#[test]
fn test_partial_game_is_not_terminal() {
    // X X _ / O O _ / _ _ _
    let board = board_with(&[0, 1], &[3, 4]);
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), None);
}

#[test]
fn test_completing_the_top_row_wins() {
    let mut board = board_with(&[0, 1], &[3, 4]);
    board.set(2, Cell::Occupied(Mark::X));
    assert_eq!(board.outcome(), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let board = board_with(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_win_on_full_board_beats_draw() {
    // X X X / O O X / O X O - full, but X holds the top row
    let board = board_with(&[0, 1, 2, 5, 7], &[3, 4, 6, 8]);
    assert!(board.is_full());
    assert_eq!(board.outcome(), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_out_of_range_set_is_ignored() {
    let mut board = Board::new();
    board.set(9, Cell::Occupied(Mark::X));
    assert_eq!(board, Board::new());
    assert_eq!(board.get(9), None);
}

#[test]
fn test_alternating_play_never_stacks_marks() {
    use pomopets_games::BotStrategy;

    // Drive full random games and check each placement lands on a cell
    // that was empty the instant before.
    for seed in 0..20 {
        let mut picker = UniformRandom::seeded(seed);
        let mut board = Board::new();
        let mut turn = Mark::X;
        let mut placed = 0;

        while board.outcome().is_none() {
            let index = picker.choose(&board).expect("non-terminal board has room");
            assert!(board.is_empty(index), "seed {seed}: cell {index} reused");
            board.set(index, Cell::Occupied(turn));
            turn = turn.opponent();
            placed += 1;
        }

        let occupied = 9 - board.empty_cells().len();
        assert_eq!(occupied, placed, "seed {seed}: marks overwrote each other");
    }
}

#[test]
fn test_display_renders_marks_and_indices() {
    let board = board_with(&[0], &[4]);
    let text = board.display();
    assert!(text.starts_with("X|1|2"));
    assert!(text.contains("3|O|5"));
}
