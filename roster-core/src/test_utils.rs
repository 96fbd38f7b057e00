//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use crate::services::FormController;
use crate::store::RecordStore;
use crate::traits::ConfirmPrompt;
use crate::types::{FormField, RecordId, UserRecord};

// ===== ScriptedPrompt =====

/// 固定回答的确认框，并记录被询问过的记录名称
pub struct ScriptedPrompt {
    answer: bool,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, record: &UserRecord) -> bool {
        self.asked.push(record.name.clone());
        self.answer
    }
}

// ===== 工厂方法 =====

/// 三条示例记录：Ana / Bia / Caio
pub fn sample_records() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Ana", "a@x.com", "111"),
        UserRecord::new("Bia", "b@x.com", "222"),
        UserRecord::new("Caio", "c@x.com", "333"),
    ]
}

/// 预置示例记录的控制器，以及记录 ID（按顺序）
pub fn controller_with_samples() -> (FormController, Vec<RecordId>) {
    let store: RecordStore = sample_records().into_iter().collect();
    let ids = store.ids();
    (FormController::with_store(store), ids)
}

/// 填写表单
pub fn fill_form(controller: &mut FormController, name: &str, email: &str, phone: &str) {
    let form = controller.form_mut();
    form.set(FormField::Name, name);
    form.set(FormField::Email, email);
    form.set(FormField::Phone, phone);
}
