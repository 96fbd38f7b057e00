//! 用户记录相关类型定义

use std::fmt;

use uuid::Uuid;

use super::FormField;

/// 记录 ID
///
/// 在记录创建时生成，之后不再改变。编辑和删除都以它为键，而不是列表位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// 生成新的记录 ID (UUID v4)
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 前 8 位十六进制字符（用于紧凑显示和日志）
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// 用户记录
///
/// 没有任何字段唯一性约束：两个记录可以完全相同。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserRecord {
    /// 姓名
    pub name: String,
    /// 邮箱
    pub email: String,
    /// 电话
    pub phone: String,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// 按字段取值
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    /// 按表单顺序返回三个字段
    pub fn fields(&self) -> [(FormField, &str); 3] {
        FormField::ALL.map(|field| (field, self.field(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn short_id_is_a_prefix_of_the_full_id() {
        let id = RecordId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().starts_with(&short));
    }

    #[test]
    fn fields_follow_form_order() {
        let record = UserRecord::new("Ana", "a@x.com", "111");
        assert_eq!(
            record.fields(),
            [
                (FormField::Name, "Ana"),
                (FormField::Email, "a@x.com"),
                (FormField::Phone, "111"),
            ]
        );
    }
}
