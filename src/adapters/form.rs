use crate::domain::ports::FormSource;
use std::collections::HashMap;

/// 記憶體中的表單：元素 id 對應目前的文字值
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(id.into(), value.into());
    }
}

impl FormSource for FieldMap {
    fn element_value(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FieldMap::new();
        for (id, value) in iter {
            form.set(id, value);
        }
        form
    }
}
