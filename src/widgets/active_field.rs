use crate::assets::PLUGIN_BUNDLE;
use crate::attributes::{AttrValue, Attributes};
use crate::error::{MaterializeError, MaterializeResult};
use crate::html;
use crate::model::{input_id, input_name, FormModel};
use crate::page::{ScriptPosition, View};
use crate::widget::{plugin_script, ClientEvents, ClientOptions, IconSpec};
use crate::widgets::{Autocomplete, FieldContext, ValidationStateOn};

pub const DEFAULT_TEMPLATE: &str = "{icon}\n{label}\n{input}\n{hint}\n{error}";

/// Computes the error shown for a field instead of the model's first error.
pub type ErrorSource<'m> = Box<dyn Fn(&dyn FormModel, &str) -> Option<String> + 'm>;

#[derive(Debug, Clone, PartialEq)]
enum Part {
    Default,
    Hidden,
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Input {
    Text { input_type: String, options: Attributes },
    Textarea(Attributes),
    File(FileInput),
    Checkbox(Attributes),
    Dropdown {
        items: Vec<(String, String)>,
        prompt: Option<String>,
        options: Attributes,
    },
    Autocomplete(Autocomplete),
    Html(String),
}

/// Markup options of a Materialize file field. The `btn`,
/// `file-path-wrapper` and `file-path validate` classes are always added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileInput {
    pub options: Attributes,
    pub button_container_options: Attributes,
    pub button_options: Attributes,
    pub file_label: Option<String>,
    pub path_container_options: Attributes,
    pub path_options: Attributes,
}

/// One model attribute rendered as a Materialize `input-field`.
///
/// Parts are chosen through the builder methods; whatever is left unset
/// falls back to a text input with label, hint and error. The public
/// option fields hold caller attributes only: `input-field`,
/// `help-block helper-text` and `hint-block helper-text` are unioned in
/// at render time.
pub struct ActiveField<'m> {
    model: &'m dyn FormModel,
    attribute: String,
    context: FieldContext,
    pub options: Attributes,
    pub input_options: Attributes,
    pub label_options: Attributes,
    pub error_options: Attributes,
    pub hint_options: Attributes,
    pub template: String,
    pub file_label: String,
    inline: bool,
    disabled: bool,
    character_limit: Option<usize>,
    icon: Option<String>,
    label: Part,
    hint: Part,
    show_error: bool,
    input: Option<Input>,
    error_source: Option<ErrorSource<'m>>,
}

impl<'m> ActiveField<'m> {
    pub fn new(model: &'m dyn FormModel, attribute: &str, context: FieldContext) -> Self {
        ActiveField {
            model,
            attribute: attribute.to_string(),
            context,
            options: Attributes::new(),
            input_options: Attributes::new(),
            label_options: Attributes::new(),
            error_options: Attributes::new(),
            hint_options: Attributes::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            file_label: "File".to_string(),
            inline: false,
            disabled: false,
            character_limit: None,
            icon: None,
            label: Part::Default,
            hint: Part::Default,
            show_error: true,
            input: None,
            error_source: None,
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Whether the form must be submitted as `multipart/form-data`.
    pub fn is_multipart(&self) -> bool {
        matches!(self.input, Some(Input::File(_)))
    }

    pub fn options(mut self, options: Attributes) -> Self {
        self.options = self.options.merged(&options);
        self
    }

    pub fn template(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Adds `data-length` to text inputs and textareas and a character counter.
    pub fn character_limit(mut self, limit: usize) -> Self {
        self.character_limit = Some(limit);
        self
    }

    // ─── Parts ───────────────────────────────────────────────────────────────

    /// Icon prefix: `"name"` gets the `prefix` class, `"name cls1 cls2"`
    /// gets the listed classes instead.
    pub fn icon(mut self, icon: &str) -> MaterializeResult<Self> {
        let mut words = icon.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| MaterializeError::missing("ActiveField", "icon.name"))?;
        let classes: Vec<&str> = words.collect();
        let attrs = if classes.is_empty() {
            Attributes::class("prefix")
        } else {
            Attributes::class(&classes.join(" "))
        };
        self.icon = Some(html::icon(name, &attrs));
        Ok(self)
    }

    /// Icon from a full configuration; always carries `prefix`.
    pub fn icon_spec(mut self, icon: &IconSpec) -> MaterializeResult<Self> {
        self.icon = Some(icon.render("ActiveField", &Attributes::class("prefix"))?);
        Ok(self)
    }

    /// Replaces the attribute label. The text is encoded.
    pub fn label(mut self, text: &str) -> Self {
        self.label = Part::Text(text.to_string());
        self
    }

    pub fn label_options(mut self, options: Attributes) -> Self {
        self.label_options = self.label_options.merged(&options);
        self
    }

    pub fn no_label(mut self) -> Self {
        self.label = Part::Hidden;
        self
    }

    /// Replaces the model's hint. The text is encoded.
    pub fn hint(mut self, text: &str) -> Self {
        self.hint = Part::Text(text.to_string());
        self
    }

    pub fn no_hint(mut self) -> Self {
        self.hint = Part::Hidden;
        self
    }

    pub fn no_error(mut self) -> Self {
        self.show_error = false;
        self
    }

    pub fn error_options(mut self, options: Attributes) -> Self {
        self.error_options = self.error_options.merged(&options);
        self
    }

    /// Takes the displayed error from `source` instead of the model.
    pub fn error_source<F>(mut self, source: F) -> Self
    where
        F: Fn(&dyn FormModel, &str) -> Option<String> + 'm,
    {
        self.error_source = Some(Box::new(source));
        self
    }

    // ─── Inputs ──────────────────────────────────────────────────────────────

    pub fn input(mut self, input_type: &str, options: Attributes) -> Self {
        self.input = Some(Input::Text {
            input_type: input_type.to_string(),
            options,
        });
        self
    }

    pub fn text_input(self, options: Attributes) -> Self {
        self.input("text", options)
    }

    pub fn password_input(self, options: Attributes) -> Self {
        self.input("password", options)
    }

    pub fn textarea(mut self, options: Attributes) -> Self {
        self.input = Some(Input::Textarea(options));
        self
    }

    pub fn file_input(self, options: Attributes) -> Self {
        self.file_input_with(FileInput {
            options,
            ..Default::default()
        })
    }

    pub fn file_input_with(mut self, file: FileInput) -> Self {
        self.options.add_class("file-field");
        self.label = Part::Hidden;
        self.input = Some(Input::File(file));
        self
    }

    /// Materialize checkbox; the label moves inside the input's `<label>`.
    pub fn checkbox(mut self, options: Attributes) -> Self {
        self.input = Some(Input::Checkbox(options));
        self
    }

    /// `<select>` initialized with `M.FormSelect`. `items` are value/label
    /// pairs.
    pub fn dropdown_list(
        mut self,
        items: &[(&str, &str)],
        prompt: Option<&str>,
        options: Attributes,
    ) -> Self {
        self.input = Some(Input::Dropdown {
            items: items
                .iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect(),
            prompt: prompt.map(str::to_string),
            options,
        });
        self
    }

    /// Input rendered by an autocomplete widget bound to this attribute.
    pub fn widget(mut self, widget: Autocomplete) -> Self {
        self.input = Some(Input::Autocomplete(widget));
        self
    }

    /// Trusted markup used verbatim as the input part.
    pub fn input_html(mut self, html: &str) -> Self {
        self.input = Some(Input::Html(html.to_string()));
        self
    }

    // ─── Rendering ───────────────────────────────────────────────────────────

    fn input_id(&self) -> String {
        self.input_options
            .get_str("id")
            .map(str::to_string)
            .unwrap_or_else(|| input_id(self.model, &self.attribute))
    }

    fn error_text(&self) -> Option<String> {
        match &self.error_source {
            Some(source) => source(self.model, &self.attribute),
            None => self.model.first_error(&self.attribute),
        }
    }

    /// Shared options of every bound input: name, id, state classes and
    /// aria flags.
    fn bound_options(&self, options: &Attributes) -> MaterializeResult<Attributes> {
        self.input_options.validate()?;
        options.validate()?;
        let mut attrs = Attributes::new();
        if self.context.enable_client_validation {
            attrs.add_class("validate");
        }
        let mut attrs = attrs.merged(&self.input_options).merged(options);
        attrs.set_default("id", self.input_id());
        attrs.set("name", input_name(self.model, &self.attribute));
        if self.disabled {
            attrs.set("disabled", true);
        }
        let has_error = self.error_text().is_some();
        if has_error && self.context.validation_state_on == ValidationStateOn::Input {
            attrs.add_class(&self.context.error_css_class);
        }
        if self.model.is_required(&self.attribute) {
            attrs.set_default("aria-required", "true");
        }
        if has_error {
            attrs.set_default("aria-invalid", "true");
        }
        Ok(attrs)
    }

    fn register_counter(&self, attrs: &mut Attributes, view: &mut dyn View) -> MaterializeResult<()> {
        if let Some(limit) = self.character_limit {
            attrs.set("data-length", limit);
            let id = attrs.get_str("id").map(str::to_string).unwrap_or_else(|| self.input_id());
            let script = plugin_script("CharacterCounter", &id, &ClientOptions::new(), &ClientEvents::new())?;
            view.register_bundle(PLUGIN_BUNDLE)?;
            view.register_js(&script, ScriptPosition::Ready, None);
        }
        Ok(())
    }

    fn render_input(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let value = self.model.value(&self.attribute);
        let default_input = Input::Text {
            input_type: "text".to_string(),
            options: Attributes::new(),
        };
        match self.input.as_ref().unwrap_or(&default_input) {
            Input::Text { input_type, options } => {
                let mut attrs = self.bound_options(options)?;
                attrs.set("type", input_type.as_str());
                attrs.set_default("value", value);
                self.register_counter(&mut attrs, view)?;
                Ok(html::tag("input", "", &attrs))
            }
            Input::Textarea(options) => {
                let mut attrs = self.bound_options(options)?;
                attrs.add_class("materialize-textarea");
                self.register_counter(&mut attrs, view)?;
                Ok(html::text_tag("textarea", value.as_deref().unwrap_or_default(), &attrs))
            }
            Input::File(file) => self.render_file_input(file),
            Input::Checkbox(options) => {
                let mut attrs = self.bound_options(options)?;
                attrs.set("type", "checkbox");
                attrs.set_default("value", "1");
                let checked = matches!(value.as_deref(), Some("1") | Some("true"));
                attrs.set("checked", checked);
                let hidden = Attributes::new()
                    .with("type", "hidden")
                    .with("name", input_name(self.model, &self.attribute))
                    .with("value", "0");
                let label = format!(
                    "{}{}",
                    html::tag("input", "", &attrs),
                    html::text_tag("span", &self.label_text(), &Attributes::new())
                );
                Ok(format!(
                    "{}\n{}",
                    html::tag("input", "", &hidden),
                    html::tag("label", &label, &self.label_options)
                ))
            }
            Input::Dropdown {
                items,
                prompt,
                options,
            } => {
                let attrs = self.bound_options(options)?;
                let mut lines = Vec::with_capacity(items.len() + 1);
                if let Some(prompt) = prompt {
                    lines.push(html::text_tag("option", prompt, &Attributes::new().with("value", "")));
                }
                for (item_value, item_label) in items {
                    let selected = value.as_deref() == Some(item_value.as_str());
                    let option = Attributes::new()
                        .with("value", item_value.as_str())
                        .with("selected", selected);
                    lines.push(html::text_tag("option", item_label, &option));
                }
                let id = attrs.get_str("id").map(str::to_string).unwrap_or_else(|| self.input_id());
                view.register_bundle(PLUGIN_BUNDLE)?;
                view.register_js(
                    &plugin_script("FormSelect", &id, &ClientOptions::new(), &ClientEvents::new())?,
                    ScriptPosition::Ready,
                    None,
                );
                Ok(html::tag("select", &format!("\n{}\n", lines.join("\n")), &attrs))
            }
            Input::Autocomplete(widget) => {
                let defaults = self.bound_options(&Attributes::new())?;
                widget.render_for_model(self.model, &self.attribute, &defaults, view)
            }
            Input::Html(html) => Ok(html.clone()),
        }
    }

    fn render_file_input(&self, file: &FileInput) -> MaterializeResult<String> {
        file.button_container_options.validate()?;
        file.button_options.validate()?;
        file.path_container_options.validate()?;
        file.path_options.validate()?;

        let mut input = self.bound_options(&file.options)?;
        input.set("type", "file");
        let label = file.file_label.as_deref().unwrap_or(&self.file_label);
        let button_container = Attributes::class("btn").merged(&file.button_container_options);
        let path_container =
            Attributes::class("file-path-wrapper").merged(&file.path_container_options);
        let mut path = Attributes::class("file-path validate").merged(&file.path_options);
        path.set("type", "text");

        let lines = [
            html::begin_tag("div", &button_container),
            html::text_tag("span", label, &file.button_options),
            html::tag("input", "", &input),
            html::end_tag("div"),
            html::begin_tag("div", &path_container),
            html::tag("input", "", &path),
            html::end_tag("div"),
        ];
        Ok(lines.join("\n"))
    }

    fn label_text(&self) -> String {
        match &self.label {
            Part::Text(text) => text.clone(),
            _ => self.model.attribute_label(&self.attribute),
        }
    }

    fn render_label(&self) -> MaterializeResult<String> {
        if self.label == Part::Hidden || matches!(self.input, Some(Input::Checkbox(_))) {
            return Ok(String::new());
        }
        self.label_options.validate()?;
        let mut attrs = self.label_options.clone();
        attrs.set_default("for", self.input_id());
        let has_value = self
            .model
            .value(&self.attribute)
            .is_some_and(|v| !v.is_empty());
        if has_value {
            attrs.add_class("active");
        }
        Ok(html::text_tag("label", &self.label_text(), &attrs))
    }

    fn render_hint(&self) -> MaterializeResult<String> {
        let hint = match &self.hint {
            Part::Hidden => None,
            Part::Text(text) => Some(text.clone()),
            Part::Default => self.model.attribute_hint(&self.attribute),
        };
        match hint {
            Some(hint) if !hint.is_empty() => {
                self.hint_options.validate()?;
                let attrs = Attributes::class("hint-block helper-text").merged(&self.hint_options);
                Ok(html::text_tag("span", &hint, &attrs))
            }
            _ => Ok(String::new()),
        }
    }

    fn render_error(&self) -> MaterializeResult<String> {
        if !self.show_error {
            return Ok(String::new());
        }
        self.error_options.validate()?;
        let error = self.error_text();
        let mut attrs = Attributes::class("help-block helper-text").merged(&self.error_options);
        attrs.set("data-error", AttrValue::from(error.as_deref()));
        Ok(html::text_tag("span", error.as_deref().unwrap_or_default(), &attrs))
    }

    fn container_options(&self) -> MaterializeResult<Attributes> {
        self.options.validate()?;
        let mut attrs = Attributes::class("input-field").merged(&self.options);
        attrs.add_class(&format!("field-{}", self.input_id()));
        if self.inline {
            attrs.add_class("inline");
        }
        if self.model.is_required(&self.attribute) {
            attrs.add_class(&self.context.required_css_class);
        }
        if self.context.validation_state_on == ValidationStateOn::Container
            && self.error_text().is_some()
        {
            attrs.add_class(&self.context.error_css_class);
        }
        Ok(attrs)
    }

    /// Renders the container around the template filled with the parts.
    pub fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let input = self.render_input(view)?;
        let parts = [
            ("{icon}", self.icon.clone().unwrap_or_default()),
            ("{label}", self.render_label()?),
            ("{input}", input),
            ("{hint}", self.render_hint()?),
            ("{error}", self.render_error()?),
        ];
        let content = fill_template(&self.template, &parts);
        self.render_with(&content)
    }

    /// Renders the container around caller-supplied content.
    pub fn render_with(&self, content: &str) -> MaterializeResult<String> {
        let attrs = self.container_options()?;
        Ok(format!(
            "{}\n{}\n{}",
            html::begin_tag("div", &attrs),
            content,
            html::end_tag("div")
        ))
    }
}

/// Replaces each placeholder once, left to right; replaced text is never
/// scanned again.
fn fill_template(template: &str, parts: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while !rest.is_empty() {
        for (placeholder, value) in parts {
            if let Some(tail) = rest.strip_prefix(placeholder) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelState;
    use crate::page::Page;
    use pretty_assertions::assert_eq;

    fn field<'m>(model: &'m ModelState, attribute: &str) -> ActiveField<'m> {
        ActiveField::new(model, attribute, FieldContext::default())
    }

    #[test]
    fn test_default_text_field() {
        let mut page = Page::default();
        let model = ModelState::new("LoginForm");
        assert_eq!(
            field(&model, "username").render(&mut page).unwrap(),
            "<div class=\"input-field field-loginform-username\">\n\
             \n\
             <label for=\"loginform-username\">Username</label>\n\
             <input type=\"text\" id=\"loginform-username\" class=\"validate\" name=\"LoginForm[username]\">\n\
             \n\
             <span class=\"help-block helper-text\"></span>\n\
             </div>"
        );
    }

    #[test]
    fn test_error_state_on_input() {
        let mut page = Page::default();
        let model = ModelState::new("LoginForm")
            .with_value("email", "x")
            .with_error("email", "Email is not valid.")
            .with_required("email");
        let html = field(&model, "email").render(&mut page).unwrap();
        assert!(html.starts_with("<div class=\"input-field field-loginform-email required\">"));
        assert!(html.contains("<label class=\"active\" for=\"loginform-email\">Email</label>"));
        assert!(html.contains(
            "<input type=\"text\" id=\"loginform-email\" class=\"validate invalid\" name=\"LoginForm[email]\" value=\"x\" aria-required=\"true\" aria-invalid=\"true\">"
        ));
        assert!(html.contains(
            "<span class=\"help-block helper-text\" data-error=\"Email is not valid.\">Email is not valid.</span>"
        ));
    }

    #[test]
    fn test_error_state_on_container() {
        let mut page = Page::default();
        let model = ModelState::new("F").with_error("name", "Required.");
        let context = FieldContext {
            validation_state_on: ValidationStateOn::Container,
            ..Default::default()
        };
        let html = ActiveField::new(&model, "name", context).render(&mut page).unwrap();
        assert!(html.starts_with("<div class=\"input-field field-f-name invalid\">"));
        assert!(html.contains("class=\"validate\" name=\"F[name]\""));
    }

    #[test]
    fn test_icon_and_hint() {
        let mut page = Page::default();
        let model = ModelState::new("F").with_hint("phone", "Digits only");
        let html = field(&model, "phone")
            .icon("phone")
            .unwrap()
            .render(&mut page)
            .unwrap();
        assert!(html.starts_with(
            "<div class=\"input-field field-f-phone\">\n<i class=\"material-icons prefix\">phone</i>\n<label"
        ));
        assert!(html.contains("<span class=\"hint-block helper-text\">Digits only</span>"));

        let custom = field(&model, "phone")
            .icon("phone suffix red-text")
            .unwrap()
            .no_hint()
            .render(&mut page)
            .unwrap();
        assert!(custom.contains("<i class=\"material-icons suffix red-text\">phone</i>"));
        assert!(!custom.contains("Digits only"));
    }

    #[test]
    fn test_character_counter() {
        let mut page = Page::default();
        let model = ModelState::new("Post");
        let html = field(&model, "body")
            .character_limit(120)
            .textarea(Attributes::new())
            .render(&mut page)
            .unwrap();
        assert!(html.contains(
            "<textarea id=\"post-body\" class=\"validate materialize-textarea\" name=\"Post[body]\" data-length=\"120\"></textarea>"
        ));
        assert_eq!(
            page.scripts(ScriptPosition::Ready),
            vec!["M.CharacterCounter.init(document.getElementById(\"post-body\"), {});"]
        );
    }

    #[test]
    fn test_file_input_markup() {
        let mut page = Page::default();
        let model = ModelState::new("Upload");
        let field = field(&model, "doc").file_input(Attributes::new());
        assert!(field.is_multipart());
        assert_eq!(
            field.render(&mut page).unwrap(),
            "<div class=\"input-field file-field field-upload-doc\">\n\
             \n\
             \n\
             <div class=\"btn\">\n\
             <span>File</span>\n\
             <input type=\"file\" id=\"upload-doc\" class=\"validate\" name=\"Upload[doc]\">\n\
             </div>\n\
             <div class=\"file-path-wrapper\">\n\
             <input type=\"text\" class=\"file-path validate\">\n\
             </div>\n\
             \n\
             <span class=\"help-block helper-text\"></span>\n\
             </div>"
        );
    }

    #[test]
    fn test_custom_classes_keep_structural_ones() {
        let mut page = Page::default();
        let model = ModelState::new("U")
            .with_hint("name", "Your name")
            .with_error("name", "Too short.");
        let mut name = field(&model, "name");
        name.options = Attributes::class("col s6");
        name.hint_options = Attributes::class("grey-text");
        name.error_options = Attributes::class("red-text");
        let html = name.render(&mut page).unwrap();
        assert!(html.starts_with("<div class=\"input-field col s6 field-u-name\">"));
        assert!(html.contains("<span class=\"hint-block helper-text grey-text\">Your name</span>"));
        assert!(html.contains(
            "<span class=\"help-block helper-text red-text\" data-error=\"Too short.\">Too short.</span>"
        ));
    }

    #[test]
    fn test_file_input_keeps_structural_classes() {
        let mut page = Page::default();
        let model = ModelState::new("Upload");
        let html = field(&model, "doc")
            .file_input_with(FileInput {
                button_container_options: Attributes::class("red"),
                path_container_options: Attributes::class("wide"),
                path_options: Attributes::class("grey-text")
                    .with("type", "hidden")
                    .with("placeholder", "Choose"),
                ..Default::default()
            })
            .render(&mut page)
            .unwrap();
        assert!(html.contains("<div class=\"btn red\">\n<span>File</span>"));
        assert!(html.contains(
            "<div class=\"file-path-wrapper wide\">\n\
             <input type=\"text\" class=\"file-path validate grey-text\" placeholder=\"Choose\">\n\
             </div>"
        ));
    }

    #[test]
    fn test_checkbox() {
        let mut page = Page::default();
        let model = ModelState::new("F").with_value("remember", "1");
        let html = field(&model, "remember")
            .checkbox(Attributes::new())
            .no_error()
            .render(&mut page)
            .unwrap();
        assert!(html.contains(
            "<input type=\"hidden\" name=\"F[remember]\" value=\"0\">\n\
             <label><input type=\"checkbox\" id=\"f-remember\" class=\"validate\" name=\"F[remember]\" value=\"1\" checked><span>Remember</span></label>"
        ));
        assert!(!html.contains("for="));
    }

    #[test]
    fn test_dropdown_list() {
        let mut page = Page::default();
        let model = ModelState::new("F").with_value("color", "b");
        let html = field(&model, "color")
            .dropdown_list(&[("r", "Red"), ("b", "Blue")], Some("Pick one"), Attributes::new())
            .render(&mut page)
            .unwrap();
        assert!(html.contains(
            "<select id=\"f-color\" class=\"validate\" name=\"F[color]\">\n\
             <option value=\"\">Pick one</option>\n\
             <option value=\"r\">Red</option>\n\
             <option value=\"b\" selected>Blue</option>\n\
             </select>"
        ));
        assert_eq!(
            page.scripts(ScriptPosition::Ready),
            vec!["M.FormSelect.init(document.getElementById(\"f-color\"), {});"]
        );
    }

    #[test]
    fn test_error_source_overrides_model() {
        let mut page = Page::default();
        let model = ModelState::new("F").with_error("a", "model error");
        let html = field(&model, "a")
            .error_source(|_, attribute| Some(format!("custom {}", attribute)))
            .render(&mut page)
            .unwrap();
        assert!(html.contains("data-error=\"custom a\">custom a</span>"));
    }

    #[test]
    fn test_autocomplete_widget_input() {
        let mut page = Page::default();
        let model = ModelState::new("F");
        let html = field(&model, "city")
            .widget(Autocomplete::default())
            .render(&mut page)
            .unwrap();
        assert!(html.contains(
            "<input type=\"text\" id=\"f-city\" class=\"validate autocomplete\" name=\"F[city]\">"
        ));
        assert_eq!(page.scripts(ScriptPosition::Ready).len(), 1);
    }

    #[test]
    fn test_render_with_custom_content() {
        let model = ModelState::new("F");
        let html = field(&model, "x").inline(true).render_with("<p>custom</p>").unwrap();
        assert_eq!(
            html,
            "<div class=\"input-field field-f-x inline\">\n<p>custom</p>\n</div>"
        );
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let parts = [("{a}", "{b}".to_string()), ("{b}", "B".to_string())];
        assert_eq!(fill_template("{a}-{b}-{c}", &parts), "{b}-B-{c}");
    }
}
