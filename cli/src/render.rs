use core::fmt::Write;

use mineboard_core::{Board, CellView, Marker, Visible, iter_coords};

fn glyph(view: CellView) -> char {
    match (view.content, view.marker) {
        (_, Marker::Flagged) => 'F',
        (_, Marker::Questioned) => '?',
        (Visible::Mine, _) => '*',
        (Visible::Number(0), _) => '.',
        (Visible::Number(count), _) => char::from(b'0' + count),
        (Visible::Hidden, _) => '#',
    }
}

/// Board as text, with column and row labels.
pub fn board(board: &Board) -> String {
    let (width, _) = board.size();
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..width {
        let _ = write!(out, "{:>3}", x);
    }

    for (x, y) in iter_coords(board.size()) {
        if x == 0 {
            let _ = write!(out, "\n{:>3} ", y);
        }
        // coords come from the board's own size
        let view = board.cell_view((x, y)).ok();
        out.push_str("  ");
        out.push(view.map_or(' ', glyph));
    }
    out.push('\n');
    out
}

pub fn status(board: &Board, elapsed_secs: u64) -> String {
    format!(
        "{:?} | mines left: {} | 3BV: {} | time: {}s",
        board.state(),
        board.mines_left(),
        board.difficulty(),
        elapsed_secs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineboard_core::Minefield;

    #[test]
    fn renders_labels_and_cells() {
        let field = Minefield::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        let mut game = Board::from_minefield(field, false);
        game.toggle_marker((2, 1)).unwrap();
        game.reveal((0, 0)).unwrap();

        let text = board(&game);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      0  1  2");
        assert_eq!(lines[1], "  0   .  1  #");
        assert_eq!(lines[2], "  1   .  1  F");
    }
}
