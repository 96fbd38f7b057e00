//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染当前弹窗（如有）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete {
            record_name, focus, ..
        } => render_confirm_delete(frame, record_name, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距后的内容区域
fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, record_name: &str, focus: usize) {
    let texts = &t().modal.confirm_delete;
    let c = colors();

    let area = centered_rect(46, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(c.bg).bg(c.fg)
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.message, Style::default().fg(c.fg)),
        Line::styled(format!("\"{record_name}\""), Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.confirm_button), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, padded(area));
}

/// 帮助弹窗中的一行快捷键说明
fn shortcut(keys: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(colors().fg)),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD),
    )
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let area = centered_rect(52, 21, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let lines = vec![
        section(texts.help.global_shortcuts),
        shortcut(keys.tab, actions.switch_panel),
        shortcut("Alt+h", texts.help.title),
        shortcut("Ctrl+C / Alt+q", texts.common.quit),
        Line::from(""),
        section(texts.help.form_shortcuts),
        shortcut(keys.arrows_ud, actions.next_field),
        shortcut(keys.enter, actions.submit),
        Line::from(""),
        section(texts.help.list_shortcuts),
        shortcut("↑↓ / jk", actions.select),
        shortcut("e / Alt+e", texts.records.edit),
        shortcut("d / Alt+d", texts.records.delete),
        shortcut(keys.filter, texts.records.filter),
        shortcut(keys.help, texts.help.title),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), padded(area));
}
