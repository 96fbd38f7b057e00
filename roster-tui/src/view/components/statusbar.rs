//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => {
            hints.push((keys.arrows_lr, actions.switch_option));
            hints.push((keys.enter, actions.submit));
            hints.push((keys.esc, texts.common.cancel));
            return hints;
        }
        Some(Modal::Help) => {
            hints.push((keys.esc, texts.common.cancel));
            return hints;
        }
        None => {}
    }

    if app.records.is_filtering() {
        hints.push((keys.enter, actions.apply));
        hints.push((keys.esc, actions.clear));
        return hints;
    }

    hints.push((keys.tab, actions.switch_panel));

    match app.focus {
        FocusPanel::Form => {
            hints.push((keys.arrows_ud, actions.next_field));
            hints.push((keys.enter, actions.submit));
        }
        FocusPanel::List => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push((keys.edit, texts.records.edit));
            hints.push((keys.delete, texts.records.delete));
            hints.push((keys.filter, texts.records.filter));
            hints.push((keys.help, texts.help.title));
        }
    }

    hints.push((keys.quit, texts.common.quit));

    hints
}
