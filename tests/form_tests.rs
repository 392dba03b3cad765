use materialize_ui::{
    ActiveForm, Attributes, Autocomplete, FormModel, ModelState, Page, ScriptPosition,
    SubmitButton, ValidationStateOn, Widget,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn load_login_model() -> ModelState {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push("login-model.yaml");
    let yaml = fs::read_to_string(&path).unwrap();
    serde_yaml::from_str(&yaml).unwrap()
}

#[test]
fn test_login_form() {
    let model = load_login_model();
    let mut page = Page::default();
    let form = ActiveForm::new("/login");

    let mut open = form.begin(&mut page).unwrap();
    let username = open.field(&model, "username").icon("person").unwrap();
    open.add_field(username, &mut page).unwrap();
    let password = open
        .field(&model, "password")
        .password_input(Attributes::new());
    open.add_field(password, &mut page).unwrap();
    let remember = open
        .field(&model, "rememberMe")
        .checkbox(Attributes::new())
        .no_error();
    open.add_field(remember, &mut page).unwrap();
    let submit = SubmitButton::new("Sign in").render(&mut page).unwrap();
    open.add_html(&submit);
    let html = open.end().unwrap();

    assert_eq!(
        html,
        "<form id=\"w0\" action=\"/login\" method=\"post\">\n\
         <div class=\"input-field field-loginform-username required\">\n\
         <i class=\"material-icons prefix\">person</i>\n\
         <label class=\"active\" for=\"loginform-username\">Username</label>\n\
         <input type=\"text\" id=\"loginform-username\" class=\"validate\" name=\"LoginForm[username]\" value=\"ada\" aria-required=\"true\">\n\
         \n\
         <span class=\"help-block helper-text\"></span>\n\
         </div>\n\
         <div class=\"input-field field-loginform-password required\">\n\
         \n\
         <label for=\"loginform-password\">Password</label>\n\
         <input type=\"password\" id=\"loginform-password\" class=\"validate invalid\" name=\"LoginForm[password]\" aria-required=\"true\" aria-invalid=\"true\">\n\
         <span class=\"hint-block helper-text\">At least 8 characters</span>\n\
         <span class=\"help-block helper-text\" data-error=\"Password is too short.\">Password is too short.</span>\n\
         </div>\n\
         <div class=\"input-field field-loginform-rememberme\">\n\
         \n\
         \n\
         <input type=\"hidden\" name=\"LoginForm[rememberMe]\" value=\"0\">\n\
         <label><input type=\"checkbox\" id=\"loginform-rememberme\" class=\"validate\" name=\"LoginForm[rememberMe]\" value=\"1\"><span>Keep me signed in</span></label>\n\
         \n\
         \n\
         </div>\n\
         <button type=\"submit\" id=\"w1\" class=\"btn\">Sign in</button>\n\
         </form>"
    );

    let ready = page.scripts(ScriptPosition::Ready);
    assert_eq!(ready.len(), 1);
    assert!(ready[0].contains("jQuery(\"#w0\").on('afterValidateAttribute'"));
}

#[test]
fn test_container_validation_state() {
    let model = load_login_model();
    let mut page = Page::default();
    let form = ActiveForm {
        validation_state_on: ValidationStateOn::Container,
        error_css_class: "has-error".to_string(),
        ..Default::default()
    };
    let open = form.begin(&mut page).unwrap();
    let html = open.field(&model, "password").render(&mut page).unwrap();
    assert!(html.starts_with(
        "<div class=\"input-field field-loginform-password required has-error\">"
    ));
    assert!(!html.contains("class=\"validate has-error\""));
    assert!(page.scripts(ScriptPosition::Ready)[0].contains("addClass(\"has-error\")"));
}

#[test]
fn test_disabled_and_custom_label() {
    let model = load_login_model();
    let mut page = Page::default();
    let form = ActiveForm {
        enable_client_validation: false,
        ..Default::default()
    };
    let open = form.begin(&mut page).unwrap();
    let html = open
        .field(&model, "username")
        .disabled(true)
        .label("Login <name>")
        .render(&mut page)
        .unwrap();
    assert!(html.contains("<label class=\"active\" for=\"loginform-username\">Login &lt;name&gt;</label>"));
    assert!(html.contains(
        "<input type=\"text\" id=\"loginform-username\" name=\"LoginForm[username]\" value=\"ada\" disabled aria-required=\"true\">"
    ));
    assert!(page.scripts(ScriptPosition::Ready).is_empty());
}

#[test]
fn test_autocomplete_field_with_custom_template() {
    let model = ModelState::new("Search").with_value("city", "Lisbon");
    let mut page = Page::default();
    let form = ActiveForm::default();
    let mut open = form.begin(&mut page).unwrap();
    let field = open
        .field(&model, "city")
        .template("{input}\n{label}")
        .widget(Autocomplete::default().suggestions(&["Lisbon", "Porto"]));
    open.add_field(field, &mut page).unwrap();
    let html = open.end().unwrap();

    assert!(html.contains(
        "<div class=\"input-field field-search-city\">\n\
         <input type=\"text\" id=\"search-city\" class=\"validate autocomplete\" name=\"Search[city]\" value=\"Lisbon\">\n\
         <label class=\"active\" for=\"search-city\">City</label>\n\
         </div>"
    ));
    assert!(page
        .scripts(ScriptPosition::Ready)
        .contains(&"M.Autocomplete.init(document.getElementById(\"search-city\"), {\"data\":{\"Lisbon\":null,\"Porto\":null}});"));
}

#[test]
fn test_custom_model_implementation() {
    struct Profile;

    impl FormModel for Profile {
        fn form_name(&self) -> &str {
            ""
        }

        fn value(&self, attribute: &str) -> Option<String> {
            (attribute == "bio").then(|| "Hello & welcome".to_string())
        }

        fn first_error(&self, _attribute: &str) -> Option<String> {
            None
        }
    }

    let mut page = Page::default();
    let form = ActiveForm::default();
    let open = form.begin(&mut page).unwrap();
    let html = open
        .field(&Profile, "bio")
        .textarea(Attributes::new().with("rows", 3_i64))
        .render(&mut page)
        .unwrap();
    assert!(html.contains(
        "<textarea id=\"bio\" class=\"validate materialize-textarea\" name=\"bio\" rows=\"3\">Hello &amp; welcome</textarea>"
    ));
}

#[test]
fn test_field_parts_keep_structural_classes() {
    let model = load_login_model();
    let mut page = Page::default();
    let form = ActiveForm::default();
    let open = form.begin(&mut page).unwrap();
    let html = open
        .field(&model, "password")
        .options(Attributes::class("col s6"))
        .error_options(Attributes::class("red-text"))
        .password_input(Attributes::class("browser-default"))
        .render(&mut page)
        .unwrap();
    assert!(html.starts_with(
        "<div class=\"input-field col s6 field-loginform-password required\">"
    ));
    assert!(html.contains(
        "<input type=\"password\" id=\"loginform-password\" class=\"validate browser-default invalid\""
    ));
    assert!(html.contains("<span class=\"hint-block helper-text\">At least 8 characters</span>"));
    assert!(html.contains("<span class=\"help-block helper-text red-text\" data-error="));
}
