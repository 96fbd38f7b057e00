//! 界面文本模块
//!
//! 沿用前端的文本结构，使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 只提供一套 pt-BR 文本，不做运行时语言切换。

pub mod keys;
mod pt_br;

pub use keys::*;

use roster_core::{FormField, SubmitLabel};

/// 获取界面文本
///
/// # Example
///
/// ```ignore
/// let text = t().form.create; // "Adicionar"
/// ```
pub fn t() -> &'static Translations {
    &pt_br::TRANSLATIONS
}

/// 表单字段标签
pub fn field_label(field: FormField) -> &'static str {
    let texts = &t().form;
    match field {
        FormField::Name => texts.name,
        FormField::Email => texts.email,
        FormField::Phone => texts.phone,
    }
}

/// 提交按钮文本
pub fn submit_label(label: SubmitLabel) -> &'static str {
    let texts = &t().form;
    match label {
        SubmitLabel::Create => texts.create,
        SubmitLabel::Update => texts.update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_labels_follow_mode() {
        assert_eq!(submit_label(SubmitLabel::Create), "Adicionar");
        assert_eq!(submit_label(SubmitLabel::Update), "Atualizar");
    }

    #[test]
    fn field_labels() {
        assert_eq!(field_label(FormField::Name), "Nome");
        assert_eq!(field_label(FormField::Email), "Email");
        assert_eq!(field_label(FormField::Phone), "Telefone");
    }

    #[test]
    fn delete_prompt_message_is_fixed() {
        assert_eq!(
            t().modal.confirm_delete.message,
            "Deseja realmente excluir este usuário?"
        );
    }
}
