use super::*;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::config::Settings;

fn draw_default_window(width: u16, height: u16) -> Vec<String> {
    let window = MainWindow::new(&Settings::default());
    let theme = UiTheme::dark();
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| draw(frame, &window, &theme))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol())
                .collect()
        })
        .collect()
}

#[test]
fn menubar_row_lists_the_menus() {
    let rows = draw_default_window(80, 24);
    assert!(rows[0].contains("File"));
    assert!(rows[0].contains("Edit"));
    assert!(rows[0].contains("Help"));
}

#[test]
fn main_area_sits_directly_under_the_menubar() {
    let rows = draw_default_window(80, 24);

    // Toolbar row comes right after the menu bar.
    assert!(rows[1].contains("[ New ]"), "toolbar missing: {:?}", rows[1]);
    assert!(rows[1].contains("[ Save ]"));

    // The paned frames start within the next couple of rows; menu widgets
    // must not occupy packed space above them.
    let nav_row = rows
        .iter()
        .position(|row| row.contains("Navigation"))
        .expect("Navigation frame not rendered");
    assert!(nav_row <= 4, "Navigation frame displaced to row {nav_row}");
    assert!(rows[nav_row].contains("Content"));

    let welcome_row = rows
        .iter()
        .position(|row| row.contains("Welcome to Cowriter!"))
        .expect("welcome text not rendered");
    assert!(welcome_row <= nav_row + 2);
}

#[test]
fn status_row_sits_at_the_bottom() {
    let rows = draw_default_window(80, 24);
    assert!(rows[23].contains("Ready"), "status missing: {:?}", rows[23]);
}

#[test]
fn fit_tail_keeps_the_suffix_that_fits() {
    assert_eq!(fit_tail("hello", 10), "hello");
    assert_eq!(fit_tail("abcdef", 3), "def");
    assert_eq!(fit_tail("", 5), "");
}

#[test]
fn fit_tail_counts_wide_characters_by_columns() {
    // Each CJK character takes two columns.
    assert_eq!(fit_tail("\u{6c49}\u{5b57}abc", 4), "abc");
    assert_eq!(fit_tail("\u{6c49}\u{5b57}abc", 5), "\u{5b57}abc");
    assert_eq!(fit_tail("\u{6c49}\u{5b57}", 3), "\u{5b57}");
}

#[test]
fn inset_collapses_pixel_pads_to_one_cell() {
    let area = Rect::new(0, 0, 80, 20);
    let padded = inset(area, 5, 5);
    assert_eq!(padded, Rect::new(1, 1, 78, 18));

    let unpadded = inset(area, 0, 0);
    assert_eq!(unpadded, area);
}
