//! The form model collaborator: where field values, labels and validation
//! errors come from.

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Data source behind an [`crate::ActiveField`].
pub trait FormModel {
    /// Prefix of input names (`LoginForm[username]`). Empty means bare
    /// attribute names.
    fn form_name(&self) -> &str;

    fn value(&self, attribute: &str) -> Option<String>;

    fn attribute_label(&self, attribute: &str) -> String {
        humanize(attribute)
    }

    fn attribute_hint(&self, _attribute: &str) -> Option<String> {
        None
    }

    fn first_error(&self, attribute: &str) -> Option<String>;

    fn is_required(&self, _attribute: &str) -> bool {
        false
    }

    fn has_error(&self, attribute: &str) -> bool {
        self.first_error(attribute).is_some()
    }
}

/// Name attribute of the input bound to `attribute`.
pub fn input_name(model: &dyn FormModel, attribute: &str) -> String {
    let form = model.form_name();
    if form.is_empty() {
        attribute.to_string()
    } else {
        format!("{}[{}]", form, attribute)
    }
}

/// Id of the input bound to `attribute`: `loginform-username`.
pub fn input_id(model: &dyn FormModel, attribute: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[\[\]\s.]+").unwrap());
    re.replace_all(&input_name(model, attribute), "-")
        .trim_matches('-')
        .to_lowercase()
}

/// `first_name` and `firstName` both become `First Name`.
pub fn humanize(attribute: &str) -> String {
    static CAMEL: OnceLock<Regex> = OnceLock::new();
    let re = CAMEL.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
    re.replace_all(attribute, "$1 $2")
        .split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Plain-data [`FormModel`], convenient for tests and YAML fixtures.
///
/// ```yaml
/// formName: LoginForm
/// values: { username: admin }
/// errors: { password: [Password cannot be blank.] }
/// required: [username, password]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelState {
    pub form_name: String,
    pub values: HashMap<String, String>,
    pub labels: HashMap<String, String>,
    pub hints: HashMap<String, String>,
    pub errors: HashMap<String, Vec<String>>,
    pub required: Vec<String>,
}

impl ModelState {
    pub fn new(form_name: &str) -> Self {
        ModelState {
            form_name: form_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, attribute: &str, value: &str) -> Self {
        self.values.insert(attribute.to_string(), value.to_string());
        self
    }

    pub fn with_label(mut self, attribute: &str, label: &str) -> Self {
        self.labels.insert(attribute.to_string(), label.to_string());
        self
    }

    pub fn with_hint(mut self, attribute: &str, hint: &str) -> Self {
        self.hints.insert(attribute.to_string(), hint.to_string());
        self
    }

    pub fn with_error(mut self, attribute: &str, message: &str) -> Self {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.to_string());
        self
    }

    pub fn with_required(mut self, attribute: &str) -> Self {
        self.required.push(attribute.to_string());
        self
    }
}

impl FormModel for ModelState {
    fn form_name(&self) -> &str {
        &self.form_name
    }

    fn value(&self, attribute: &str) -> Option<String> {
        self.values.get(attribute).cloned()
    }

    fn attribute_label(&self, attribute: &str) -> String {
        self.labels
            .get(attribute)
            .cloned()
            .unwrap_or_else(|| humanize(attribute))
    }

    fn attribute_hint(&self, attribute: &str) -> Option<String> {
        self.hints.get(attribute).cloned()
    }

    fn first_error(&self, attribute: &str) -> Option<String> {
        self.errors.get(attribute).and_then(|e| e.first()).cloned()
    }

    fn is_required(&self, attribute: &str) -> bool {
        self.required.iter().any(|a| a == attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_name_and_id() {
        let model = ModelState::new("LoginForm");
        assert_eq!(input_name(&model, "username"), "LoginForm[username]");
        assert_eq!(input_id(&model, "username"), "loginform-username");
        assert_eq!(input_id(&model, "items[0]"), "loginform-items-0");

        let bare = ModelState::default();
        assert_eq!(input_name(&bare, "q"), "q");
        assert_eq!(input_id(&bare, "q"), "q");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("first_name"), "First Name");
        assert_eq!(humanize("firstName"), "First Name");
        assert_eq!(humanize("email"), "Email");
    }

    #[test]
    fn test_model_state_from_yaml() {
        let model: ModelState = serde_yaml::from_str(
            "formName: Post\nvalues: { title: Hi }\nerrors: { body: [Too short., Spam.] }\nrequired: [title]\n",
        )
        .unwrap();
        assert_eq!(model.value("title").as_deref(), Some("Hi"));
        assert_eq!(model.first_error("body").as_deref(), Some("Too short."));
        assert!(model.is_required("title"));
        assert!(!model.has_error("title"));
        assert_eq!(model.attribute_label("body"), "Body");
    }
}
