//! 表单类型定义

use std::fmt;

use crate::error::{CoreError, CoreResult};

use super::UserRecord;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Phone,
}

impl FormField {
    /// 表单中的字段顺序
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Phone];

    /// 字段键名
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// 下一个字段（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Name,
        }
    }

    /// 上一个字段（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 表单输入
///
/// 保存用户输入的原始文本（未 trim），提交时才校验。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用已有记录填充表单
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// 清空全部字段
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
    }

    /// 所有字段都为空
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// 校验并生成记录
    ///
    /// 三个字段都先 trim；第一个为空的字段作为错误返回。
    pub fn validate(&self) -> CoreResult<UserRecord> {
        let [name, email, phone] = FormField::ALL.map(|f| self.value(f).trim());

        for (field, value) in [
            (FormField::Name, name),
            (FormField::Email, email),
            (FormField::Phone, phone),
        ] {
            if value.is_empty() {
                return Err(CoreError::EmptyField(field));
            }
        }

        Ok(UserRecord::new(name, email, phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, phone: &str) -> RecordForm {
        RecordForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn validate_trims_every_field() {
        let form = filled("  Ana ", "\ta@x.com", "111\n");
        assert_eq!(
            form.validate(),
            Ok(UserRecord::new("Ana", "a@x.com", "111"))
        );
    }

    #[test]
    fn validate_reports_first_blank_field() {
        assert_eq!(
            filled("", "a@x.com", "   ").validate(),
            Err(CoreError::EmptyField(FormField::Name))
        );
        assert_eq!(
            filled("Ana", "a@x.com", "   ").validate(),
            Err(CoreError::EmptyField(FormField::Phone))
        );
        assert_eq!(
            filled("Ana", " \t ", "111").validate(),
            Err(CoreError::EmptyField(FormField::Email))
        );
    }

    #[test]
    fn validate_does_not_touch_the_inputs() {
        let form = filled(" Ana ", "", "111");
        let _ = form.validate();
        assert_eq!(form.name, " Ana ");
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(FormField::Phone.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Phone);
        assert_eq!(FormField::Email.next().prev(), FormField::Email);
    }

    #[test]
    fn from_record_and_clear() {
        let record = UserRecord::new("Ana", "a@x.com", "111");
        let mut form = RecordForm::from_record(&record);
        assert_eq!(form.value(FormField::Email), "a@x.com");

        form.clear();
        assert!(form.is_empty());
    }
}
