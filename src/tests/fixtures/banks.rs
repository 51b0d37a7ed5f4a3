use crate::modules::content_banks::core::bank::ContentBank;

pub struct ContentBankBuilder {
    inner: ContentBank,
}

impl Default for ContentBankBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ContentBankBuilder {
    pub fn new() -> Self {
        Self {
            inner: ContentBank {
                id: "bank-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                name: "Rust Book".to_string(),
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_000,
                version: 1,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    /// Also stamps `updated_at`.
    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> ContentBank {
        self.inner
    }
}
