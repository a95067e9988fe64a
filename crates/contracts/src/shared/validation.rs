use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Накопитель ошибок валидации, сгруппированных по полям формы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    /// Ok(()) если ошибок нет, иначе Err(self)
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        FormErrors {
            message: "Validation failed".to_string(),
            details: errors.fields,
        }
    }
}

/// Структура ответа сервера при ошибке валидации/конфликте.
///
/// Клиент раскладывает `details` по полям активной формы; если совпадений
/// нет (или `details` пуст) — показывает `message` как toast.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormErrors {
    pub message: String,
    #[serde(default)]
    pub details: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_turn_into_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn messages_accumulate_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Наименование не может быть пустым");
        errors.add("name", "Слишком короткое наименование");
        errors.add("symbol", "Обязательное поле");

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.fields()["name"].len(), 2);
        assert_eq!(err.fields()["symbol"].len(), 1);
    }

    #[test]
    fn form_errors_envelope_shape() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "too short");
        let form: FormErrors = errors.into();

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["details"]["name"][0], "too short");

        // details может отсутствовать в теле — поле имеет default
        let parsed: FormErrors = serde_json::from_str(r#"{"message":"Unit in use"}"#).unwrap();
        assert!(parsed.details.is_empty());
        assert_eq!(parsed.message, "Unit in use");
    }
}
