//! 表单面板视图

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use roster_core::{FormField, FormMode};
use unicode_width::UnicodeWidthStr;

use super::tail_fit;
use crate::i18n::{field_label, submit_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染表单面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_form() && !app.modal.is_open() && !app.records.is_filtering();

    let title = match app.controller.mode() {
        FormMode::Creating => format!(" {} ", texts.form.title),
        FormMode::Editing(_) => format!(" {} · {} ", texts.form.title, texts.form.editing),
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 三个输入框 + 提交按钮
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
        let is_active = focused && app.form.focused == field;
        render_input(app, frame, *row, field, is_active);
    }

    render_submit_button(app, frame, rows[3], focused);
}

/// 渲染单个输入框
fn render_input(app: &App, frame: &mut Frame, area: Rect, field: FormField, is_active: bool) {
    let block = Block::default()
        .title(format!(" {} ", field_label(field)))
        .borders(Borders::ALL)
        .border_style(Styles::border(is_active));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 预留一列给光标
    let width = usize::from(inner.width).saturating_sub(1);
    let visible = tail_fit(app.controller.form().value(field), width);

    let paragraph = Paragraph::new(visible).style(Style::default().fg(colors().fg));
    frame.render_widget(paragraph, inner);

    if is_active {
        let offset = u16::try_from(visible.width()).unwrap_or(inner.width);
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

/// 渲染提交按钮（文本随模式变化）
fn render_submit_button(app: &App, frame: &mut Frame, area: Rect, focused: bool) {
    let c = colors();
    let label = submit_label(app.controller.submit_label());

    let style = if focused {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let line = Line::from(vec![
        Span::styled(format!("[ {label} ]"), style),
        Span::styled(
            format!("  {}", t().hints.keys.enter),
            Styles::muted(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
