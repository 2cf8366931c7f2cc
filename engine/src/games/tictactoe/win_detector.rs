use super::board::Board;
use super::types::{Mark, Outcome, WINNING_LINES};

pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Outcome::Win { mark, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_partial_board_without_line_is_in_progress() {
        let board = Board::from_cells([X, O, X, E, O, E, E, E, X]);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_detects_each_winning_line() {
        for line in WINNING_LINES {
            let mut cells = [E; 9];
            for index in line {
                cells[index] = O;
            }
            let board = Board::from_cells(cells);

            assert_eq!(evaluate(&board), Outcome::Win { mark: O, line });
        }
    }

    #[test]
    fn test_reports_winning_mark() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_scan_order_rows_before_columns_before_diagonals() {
        // Artificial board where a row, a column and a diagonal are all
        // complete. The row must win the scan.
        let board = Board::from_cells([X, X, X, X, X, E, X, E, X]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: X,
                line: [0, 1, 2]
            }
        );

        // Column versus diagonal: the column is scanned first.
        let board = Board::from_cells([O, E, E, O, O, E, O, E, O]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: O,
                line: [0, 3, 6]
            }
        );
    }

    #[test]
    fn test_evaluate_does_not_mutate_board() {
        let board = Board::from_cells([X, O, X, E, O, E, E, E, X]);
        let snapshot = board.clone();
        let _ = evaluate(&board);
        assert_eq!(board, snapshot);
    }
}
