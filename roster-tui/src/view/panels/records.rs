//! 记录列表面板视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use roster_core::{ActionKind, ListEntry, RenderedList};
use unicode_width::UnicodeWidthStr;

use super::tail_fit;
use crate::i18n::{field_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染列表面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_list() && !app.modal.is_open();
    let list = app.visible_records();

    let title = if app.records.query.is_blank() {
        format!(" {} ({}) ", texts.records.title, list.len())
    } else {
        format!(
            " {} ({}/{}) ",
            texts.records.title,
            list.len(),
            app.controller.store().len()
        )
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_filter_bar = app.records.is_filtering() || !app.records.query.is_blank();
    let list_area = if show_filter_bar {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        render_filter_bar(app, frame, rows[0]);
        rows[1]
    } else {
        inner
    };

    if list.is_empty() {
        render_empty(app, frame, list_area);
    } else {
        render_list(app, &list, frame, list_area, focused);
    }
}

/// 渲染过滤栏
fn render_filter_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let label = format!("{}: ", t().records.filter);

    let (text, editing) = match &app.records.filter_input {
        Some(input) => (input.as_str(), true),
        None => (app.records.query.as_str(), false),
    };

    let width = usize::from(area.width).saturating_sub(label.width() + 1);
    let visible = tail_fit(text, width);

    let text_style = if editing {
        Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(c.warning)
    };

    let line = Line::from(vec![
        Span::styled(label.clone(), Styles::muted()),
        Span::styled(visible.to_string(), text_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if editing && !app.modal.is_open() {
        let offset = u16::try_from(label.width() + visible.width()).unwrap_or(area.width);
        frame.set_cursor_position(Position::new(area.x + offset, area.y));
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if app.controller.store().is_empty() {
        texts.records.empty
    } else {
        texts.records.no_match
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染记录列表
fn render_list(app: &App, list: &RenderedList, frame: &mut Frame, area: Rect, focused: bool) {
    let items: Vec<ListItem> = list
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = focused && i == app.records.selected;
            entry_item(entry, is_selected)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.records.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 单个条目：每个字段一行，操作按钮单独一行，末尾留一行空白分隔
fn entry_item(entry: &ListEntry, is_selected: bool) -> ListItem<'static> {
    let c = colors();
    let texts = t();

    let (label_style, value_style) = if is_selected {
        (Styles::selected(), Styles::selected())
    } else {
        (Styles::muted(), Style::default().fg(c.fg))
    };

    let mut lines: Vec<Line<'static>> = entry
        .fields()
        .into_iter()
        .map(|(field, value)| {
            Line::from(vec![
                Span::styled(format!(" {}: ", field_label(field)), label_style),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect();

    let mut actions = vec![Span::styled(" ", value_style)];
    for action in &entry.actions {
        let (label, color) = match action.kind {
            ActionKind::Edit => (texts.records.edit, c.highlight),
            ActionKind::Delete => (texts.records.delete, c.error),
        };
        let style = if is_selected {
            Styles::selected().fg(color)
        } else {
            Style::default().fg(color)
        };
        actions.push(Span::styled(format!("[{label}]"), style));
        actions.push(Span::styled(" ", value_style));
    }
    lines.push(Line::from(actions));
    lines.push(Line::from(""));

    ListItem::new(lines)
}
