use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::error::MaterializeResult;
use crate::html;
use crate::model::FormModel;
use crate::page::{ScriptPosition, View};
use crate::widget::WidgetBase;
use crate::widgets::ActiveField;

/// Which element receives the `valid`/`invalid` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStateOn {
    #[default]
    Input,
    Container,
}

/// Model-bound form.
///
/// Fields are collected between [`ActiveForm::begin`] and [`OpenForm::end`];
/// the `<form>` tag itself is written at the end so that a file input can
/// still switch the encoding to `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActiveForm {
    pub action: String,
    pub method: String,
    pub options: Attributes,
    pub enable_client_validation: bool,
    pub error_css_class: String,
    pub success_css_class: String,
    pub required_css_class: String,
    pub validation_state_on: ValidationStateOn,
}

impl Default for ActiveForm {
    fn default() -> Self {
        ActiveForm {
            action: String::new(),
            method: "post".to_string(),
            options: Attributes::new(),
            enable_client_validation: true,
            error_css_class: "invalid".to_string(),
            success_css_class: "valid".to_string(),
            required_css_class: "required".to_string(),
            validation_state_on: ValidationStateOn::default(),
        }
    }
}

/// Settings a field inherits from its form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldContext {
    pub enable_client_validation: bool,
    pub error_css_class: String,
    pub success_css_class: String,
    pub required_css_class: String,
    pub validation_state_on: ValidationStateOn,
}

impl Default for FieldContext {
    fn default() -> Self {
        ActiveForm::default().field_context()
    }
}

impl ActiveForm {
    pub fn new(action: &str) -> Self {
        ActiveForm {
            action: action.to_string(),
            ..Default::default()
        }
    }

    fn field_context(&self) -> FieldContext {
        FieldContext {
            enable_client_validation: self.enable_client_validation,
            error_css_class: self.error_css_class.clone(),
            success_css_class: self.success_css_class.clone(),
            required_css_class: self.required_css_class.clone(),
            validation_state_on: self.validation_state_on,
        }
    }

    pub fn begin(&self, view: &mut dyn View) -> MaterializeResult<OpenForm<'_>> {
        let base = WidgetBase::init("ActiveForm", &self.options, view)?;
        if self.enable_client_validation {
            base.register_assets(view)?;
            view.register_js(
                &self.after_validate_script(base.id())?,
                ScriptPosition::Ready,
                Some(format!("active-form-{}", base.id()).as_str()),
            );
        }
        Ok(OpenForm {
            form: self,
            base,
            content: Vec::new(),
            multipart: false,
        })
    }

    /// Mirrors server-side state on the client after each attribute is
    /// validated: toggles the error/success classes, moves the first
    /// message into `data-error` and otherwise shows the success or hint
    /// text.
    fn after_validate_script(&self, id: &str) -> MaterializeResult<String> {
        Ok(format!(
            r#"jQuery({selector}).on('afterValidateAttribute', function (event, attribute, messages) {{
    var helper = jQuery(attribute.container + ' ' + attribute.error);
    var helperText = helper.attr('data-success') || helper.attr('data-hint');
    if (messages.length > 0) {{
        jQuery(attribute.input).addClass({error}).removeClass({success});
        helper.attr('data-error', messages[0]);
    }} else {{
        jQuery(attribute.input).addClass({success}).removeClass({error});
        helper.html(helperText || '');
    }}
}});"#,
            selector = serde_json::to_string(&format!("#{}", id))?,
            error = serde_json::to_string(&self.error_css_class)?,
            success = serde_json::to_string(&self.success_css_class)?,
        ))
    }
}

/// A form between `begin` and `end`.
pub struct OpenForm<'f> {
    form: &'f ActiveForm,
    base: WidgetBase,
    content: Vec<String>,
    multipart: bool,
}

impl<'f> OpenForm<'f> {
    pub fn id(&self) -> &str {
        self.base.id()
    }

    /// Starts a field for `attribute` with this form's validation settings.
    pub fn field<'m>(&self, model: &'m dyn FormModel, attribute: &str) -> ActiveField<'m> {
        ActiveField::new(model, attribute, self.form.field_context())
    }

    /// Renders `field` into the form body.
    pub fn add_field(&mut self, field: ActiveField<'_>, view: &mut dyn View) -> MaterializeResult<()> {
        self.multipart |= field.is_multipart();
        let html = field.render(view)?;
        self.content.push(html);
        Ok(())
    }

    /// Appends trusted markup (buttons, fieldsets, ...) to the form body.
    pub fn add_html(&mut self, html: &str) {
        self.content.push(html.to_string());
    }

    pub fn end(self) -> MaterializeResult<String> {
        let mut attrs = self.base.options().clone();
        attrs.set("action", self.form.action.as_str());
        attrs.set("method", self.form.method.as_str());
        if self.multipart {
            attrs.set_default("enctype", "multipart/form-data");
        }
        let mut lines = vec![html::begin_tag("form", &attrs)];
        lines.extend(self.content);
        lines.push(html::end_tag("form"));
        Ok(lines.join("\n"))
    }
}
