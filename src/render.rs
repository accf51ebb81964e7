//! 渲染：每帧遍历控件树并用 ratatui 画出来
//!
//! 摆放提示的翻译规则：side 决定从剩余区域的哪条边切分，expand 的控件
//! 分掉剩余空间，分栏容器按子项权重切分。菜单项只画顶层菜单栏一行，
//! 下拉内容由原生弹层概念保留给后续交互层。

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Gauge, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    Wrap as LineWrap,
};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::theme::UiTheme;
use crate::config::layout::{ProgressMode, Side, Wrap};
use crate::config::Orientation;
use crate::shell::{MainWindow, ModalDialog, PathPrompt};
use crate::ui::widget::{Attach, TreeItem, WidgetKey, WidgetKind};

pub fn draw(frame: &mut Frame, window: &MainWindow, theme: &UiTheme) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_menubar(frame, chunks[0], window, theme);
    if let Some(root) = window.tree().root() {
        render_widget(frame, chunks[1], window, root, theme);
    }

    if let Some(prompt) = window.prompt() {
        render_prompt(frame, area, prompt, theme);
    }
    if let Some(modal) = window.modal() {
        render_modal(frame, area, modal, theme);
    }
}

fn render_menubar(frame: &mut Frame, area: Rect, window: &MainWindow, theme: &UiTheme) {
    let Some(menubar) = window.menubar() else {
        return;
    };
    let mut spans = Vec::new();
    for &child in window.tree().children(menubar) {
        if let Some(WidgetKind::Menu { label }) = window.tree().get(child).map(|w| &w.kind) {
            spans.push(Span::styled(
                format!("  {label}"),
                Style::default().fg(theme.menubar_fg),
            ));
        }
    }
    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.menubar_bg));
    frame.render_widget(bar, area);
}

fn render_widget(frame: &mut Frame, area: Rect, window: &MainWindow, key: WidgetKey, theme: &UiTheme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some(widget) = window.tree().get(key) else {
        return;
    };

    let area = match widget.attach {
        Attach::Packed(placement) => inset(area, placement.padding.x, placement.padding.y),
        Attach::PanedChild { .. } => area,
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    match &widget.kind {
        WidgetKind::Frame | WidgetKind::Notebook => {
            pack_children(frame, area, window, key, theme);
        }
        WidgetKind::LabelFrame { title } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    title.clone(),
                    Style::default().fg(theme.accent_fg),
                ));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            pack_children(frame, inner, window, key, theme);
        }
        WidgetKind::Toolbar { orient } => {
            render_toolbar(frame, area, window, key, *orient, theme);
        }
        WidgetKind::Paned { orient } => {
            render_paned(frame, area, window, key, *orient, theme);
        }
        WidgetKind::Text(state) => {
            let base = Style::default().fg(theme.text_fg);
            let style = if state.has_selection() {
                base.bg(theme.selection_bg)
            } else {
                base
            };
            let mut paragraph = Paragraph::new(state.text())
                .style(style)
                .scroll((state.scroll as u16, 0));
            if state.wrap != Wrap::None {
                paragraph = paragraph.wrap(LineWrap { trim: false });
            }
            frame.render_widget(paragraph, area);
        }
        WidgetKind::TreeView { items } => {
            let mut lines = Vec::new();
            tree_lines(items, 0, theme, &mut lines);
            frame.render_widget(Paragraph::new(lines), area);
        }
        WidgetKind::Scrollbar { orient, thumb, .. } => {
            let orientation = match orient {
                Orientation::Vertical => ScrollbarOrientation::VerticalRight,
                Orientation::Horizontal => ScrollbarOrientation::HorizontalBottom,
            };
            let mut state = ScrollbarState::new(thumb.total.max(1)).position(thumb.position);
            frame.render_stateful_widget(Scrollbar::new(orientation), area, &mut state);
        }
        WidgetKind::Label { text } => {
            frame.render_widget(
                Paragraph::new(text.clone()).style(Style::default().fg(theme.status_fg)),
                area,
            );
        }
        WidgetKind::Button { text } => {
            let style = if widget.enabled {
                Style::default().fg(theme.button_fg)
            } else {
                Style::default()
                    .fg(theme.button_disabled_fg)
                    .add_modifier(Modifier::DIM)
            };
            frame.render_widget(Paragraph::new(format!("[ {text} ]")).style(style), area);
        }
        WidgetKind::Entry { text } => {
            let width = area.width as usize;
            let mut content = fit_tail(text, width);
            let pad = width.saturating_sub(content.width());
            content.push_str(&" ".repeat(pad));
            frame.render_widget(
                Paragraph::new(content).style(
                    Style::default()
                        .fg(theme.muted_fg)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                area,
            );
        }
        WidgetKind::Combobox { values, selected } => {
            let current = selected
                .and_then(|i| values.get(i))
                .map(String::as_str)
                .unwrap_or("");
            frame.render_widget(
                Paragraph::new(format!("{current} \u{25be}"))
                    .style(Style::default().fg(theme.muted_fg)),
                area,
            );
        }
        WidgetKind::Progressbar {
            mode,
            running,
            value,
            ..
        } => {
            if !*running {
                return;
            }
            let ratio = match mode {
                ProgressMode::Determinate => f64::from(*value.min(&100)) / 100.0,
                ProgressMode::Indeterminate => 0.5,
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(theme.progress_fg))
                .ratio(ratio)
                .label("");
            frame.render_widget(gauge, area);
        }
        WidgetKind::Separator { orient } => {
            let glyph = match orient {
                Orientation::Vertical => "\u{2502}",
                Orientation::Horizontal => "\u{2500}",
            };
            let lines: Vec<Line> = (0..area.height)
                .map(|_| {
                    Line::from(Span::styled(
                        glyph.repeat(area.width as usize),
                        Style::default().fg(theme.separator),
                    ))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), area);
        }
        // Menu entries are painted by the menubar row.
        WidgetKind::MenuBar
        | WidgetKind::Menu { .. }
        | WidgetKind::MenuItem { .. }
        | WidgetKind::MenuSeparator => {}
    }
}

/// A small pack-geometry pass: non-expanding children carve space off the
/// side they ask for, expanding children share what is left.
fn pack_children(frame: &mut Frame, area: Rect, window: &MainWindow, key: WidgetKey, theme: &UiTheme) {
    let mut remaining = area;
    let mut expanding: Vec<WidgetKey> = Vec::new();

    let children: Vec<WidgetKey> = window.tree().children(key).to_vec();
    for child in &children {
        let Some(widget) = window.tree().get(*child) else {
            continue;
        };
        // Menu widgets are painted by the dedicated menubar row and take
        // no space in the packed flow.
        if matches!(
            widget.kind,
            WidgetKind::MenuBar
                | WidgetKind::Menu { .. }
                | WidgetKind::MenuItem { .. }
                | WidgetKind::MenuSeparator
        ) {
            continue;
        }
        let Attach::Packed(placement) = widget.attach else {
            continue;
        };
        if placement.expand {
            expanding.push(*child);
            continue;
        }
        let size = preferred_size(window, *child);
        let rect = carve(&mut remaining, placement.side, size);
        render_widget(frame, rect, window, *child, theme);
    }

    match expanding.len() {
        0 => {}
        1 => render_widget(frame, remaining, window, expanding[0], theme),
        n => {
            let constraints = vec![Constraint::Ratio(1, n as u32); n];
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(remaining);
            for (chunk, child) in chunks.iter().zip(expanding) {
                render_widget(frame, *chunk, window, child, theme);
            }
        }
    }
}

fn render_paned(
    frame: &mut Frame,
    area: Rect,
    window: &MainWindow,
    key: WidgetKey,
    orient: Orientation,
    theme: &UiTheme,
) {
    let children: Vec<(WidgetKey, u16)> = window
        .tree()
        .children(key)
        .iter()
        .filter_map(|&child| match window.tree().get(child)?.attach {
            Attach::PanedChild { weight } => Some((child, weight.max(1))),
            Attach::Packed(_) => Some((child, 1)),
        })
        .collect();
    if children.is_empty() {
        return;
    }

    let total: u32 = children.iter().map(|(_, w)| u32::from(*w)).sum();
    let direction = match orient {
        Orientation::Horizontal => Direction::Horizontal,
        Orientation::Vertical => Direction::Vertical,
    };
    let constraints: Vec<Constraint> = children
        .iter()
        .map(|(_, weight)| Constraint::Ratio(u32::from(*weight), total))
        .collect();
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    for (chunk, (child, _)) in chunks.iter().zip(children) {
        render_widget(frame, *chunk, window, child, theme);
    }
}

fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    window: &MainWindow,
    key: WidgetKey,
    orient: Orientation,
    theme: &UiTheme,
) {
    let mut cursor = area;
    let children: Vec<WidgetKey> = window.tree().children(key).to_vec();
    for child in children {
        let (w, h) = preferred_size(window, child);
        let rect = match orient {
            Orientation::Horizontal => carve(&mut cursor, Side::Left, (w.saturating_add(1), h)),
            Orientation::Vertical => carve(&mut cursor, Side::Top, (w, h)),
        };
        let rect = Rect {
            width: rect.width.min(w),
            ..rect
        };
        render_widget(frame, rect, window, child, theme);
    }
}

fn tree_lines(items: &[TreeItem], depth: usize, theme: &UiTheme, out: &mut Vec<Line<'static>>) {
    for item in items {
        let symbol = if item.open { "\u{25be}" } else { "\u{25b8}" };
        out.push(Line::from(Span::styled(
            format!("{}{} {}", "  ".repeat(depth), symbol, item.text),
            Style::default().fg(theme.text_fg),
        )));
        if item.open {
            tree_lines(&item.children, depth + 1, theme, out);
        }
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &PathPrompt, theme: &UiTheme) {
    let popup = centered_rect(area, 60, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_fg))
        .title(prompt.title());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(format!("Path: {}\u{2588}", prompt.input)),
        Line::from(Span::styled(
            "Enter: confirm   Esc: cancel",
            Style::default().fg(theme.muted_fg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(LineWrap { trim: true }), inner);
}

fn render_modal(frame: &mut Frame, area: Rect, modal: &ModalDialog, theme: &UiTheme) {
    let popup = centered_rect(area, 60, 6);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.modal_border))
        .title(modal.title.clone());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            modal.message.clone(),
            Style::default().fg(theme.modal_fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(theme.muted_fg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(LineWrap { trim: true }), inner);
}

fn preferred_size(window: &MainWindow, key: WidgetKey) -> (u16, u16) {
    let Some(widget) = window.tree().get(key) else {
        return (0, 0);
    };
    let (mut w, mut h) = match &widget.kind {
        WidgetKind::Label { text } => (text.width() as u16, 1),
        WidgetKind::Button { text } => (text.width() as u16 + 4, 1),
        WidgetKind::Entry { .. } => (16, 1),
        WidgetKind::Combobox { .. } => (16, 1),
        WidgetKind::Separator { orient } => match orient {
            Orientation::Vertical => (1, 1),
            Orientation::Horizontal => (3, 1),
        },
        WidgetKind::Scrollbar { orient, .. } => match orient {
            Orientation::Vertical => (1, 1),
            Orientation::Horizontal => (1, 1),
        },
        WidgetKind::Progressbar { .. } => (20, 1),
        WidgetKind::Frame | WidgetKind::Toolbar { .. } => (0, 1),
        _ => (10, 3),
    };
    if let Some(fixed) = widget.width {
        w = fixed;
    }
    if let Some(fixed) = widget.height {
        h = fixed;
    }
    (w, h)
}

fn carve(remaining: &mut Rect, side: Side, size: (u16, u16)) -> Rect {
    let (w, h) = size;
    match side {
        Side::Top => {
            let h = h.min(remaining.height);
            let rect = Rect::new(remaining.x, remaining.y, remaining.width, h);
            remaining.y += h;
            remaining.height -= h;
            rect
        }
        Side::Bottom => {
            let h = h.min(remaining.height);
            let rect = Rect::new(
                remaining.x,
                remaining.y + remaining.height - h,
                remaining.width,
                h,
            );
            remaining.height -= h;
            rect
        }
        Side::Left => {
            let w = w.min(remaining.width);
            let rect = Rect::new(remaining.x, remaining.y, w, remaining.height);
            remaining.x += w;
            remaining.width -= w;
            rect
        }
        Side::Right => {
            let w = w.min(remaining.width);
            let rect = Rect::new(
                remaining.x + remaining.width - w,
                remaining.y,
                w,
                remaining.height,
            );
            remaining.width -= w;
            rect
        }
    }
}

fn inset(area: Rect, x: u16, y: u16) -> Rect {
    // Pad hints are pixel-scale; a terminal cell is far coarser, so any
    // non-zero pad collapses to a single cell.
    let dx = x.min(1).min(area.width / 2);
    let dy = y.min(1).min(area.height / 2);
    Rect::new(
        area.x + dx,
        area.y + dy,
        area.width - dx * 2,
        area.height - dy * 2,
    )
}

/// Keeps the longest suffix of `text` that fits in `width` display columns.
fn fit_tail(text: &str, width: usize) -> String {
    let mut cols = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if cols + w > width {
            break;
        }
        cols += w;
        kept.push(c);
    }
    kept.iter().rev().collect()
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
