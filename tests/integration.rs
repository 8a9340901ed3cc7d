//! Integration tests for tailkit.
//!
//! These exercise the public API from outside the crate: provider wiring,
//! the end-to-end select / checkbox / toast flows, and the properties every
//! component must hold.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use tailkit::components::*;
use tailkit::config::UiConfig;
use tailkit::event::{FieldUpdated, ToastHidden};
use tailkit::prelude::*;
use tailkit::state::{ComponentState, Field};
use tailkit::style::{compose, AlertVariant, BadgeVariant, ButtonVariant, Control, Token};
use tailkit::testing::{self, Pilot};
use tailkit::validation::Validator;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ctx() -> UiContext {
    init_tracing();
    testing::context().unwrap()
}

/// Accepts everything, to prove which messages come from the components.
struct AlwaysValid;

impl Validator for AlwaysValid {
    fn validate_field(&self, _field: &str, _value: &str, _rules: &str) -> Option<String> {
        None
    }
}

fn languages(multiple: bool) -> Props {
    Props::from_json(
        r#"{"options": [{"value": "fr", "label": "Français"}, {"value": "en", "label": "English"}]}"#,
    )
    .unwrap()
    .set("multiple", multiple)
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

#[test]
fn provider_requires_services() {
    let err = UiProvider::new().boot().err().unwrap();
    assert!(matches!(err, UiError::MissingService("translator")));

    let translator = tailkit::i18n::CatalogTranslator::with_builtin("en", "en").unwrap();
    let err = UiProvider::new().with_translator(translator).boot().err().unwrap();
    assert!(matches!(err, UiError::MissingService("validator")));
}

#[test]
fn config_from_toml_reaches_components() {
    let config = UiConfig::from_toml_str("locale = \"fr\"\ninput_debounce_ms = 750\ntoast_duration_ms = 2000\n").unwrap();
    let ctx = UiProvider::new().with_config(config).with_builtin_services().unwrap().boot().unwrap();

    let input = Input::new(&ctx, "q", Props::new().set("rules", "required")).unwrap();
    assert!(input.render().contains("data-action-debounce=\"750\""));
    let toast = Toast::new(&ctx, "t", Props::new()).unwrap();
    assert_eq!(toast.duration(), 2000);

    assert!(UiConfig::from_toml_str("colour = 1").is_err());
}

// ---------------------------------------------------------------------------
// End-to-end flows
// ---------------------------------------------------------------------------

#[test]
fn single_select_picks_and_closes() {
    let mut select = Select::new(&ctx(), "lang", languages(false)).unwrap();
    select.toggle_dropdown().unwrap();
    assert!(select.is_open());

    select.select_option("en").unwrap();
    assert_eq!(select.state().str("value"), "en");
    assert!(!select.is_open());

    let events = select.take_events();
    assert_eq!(events.len(), 1);
    let event = events[0].downcast_ref::<FieldUpdated>().unwrap();
    assert_eq!(event.value, serde_json::json!("en"));
    assert!(event.is_valid);
}

#[test]
fn single_select_through_rendered_markup() {
    let mut pilot = Pilot::new(Select::new(&ctx(), "lang", languages(false)).unwrap());
    pilot.perform("toggleDropdown()").unwrap();
    pilot.click("[data-action-click=\"selectOption('en')\"]").unwrap();
    assert_eq!(pilot.component().selected_values(), vec!["en"]);
    assert!(!pilot.component().is_open());
}

#[test]
fn checkbox_group_selection_clears_error() {
    let props = Props::from_json(r#"{"options": {"a": "A", "b": "B"}, "value": []}"#)
        .unwrap()
        .set("rules", "required")
        .set("errorMessage", "This field is required");
    let mut group = CheckboxRadio::new(&ctx(), "g", props).unwrap();

    group.update_value("a").unwrap();
    assert_eq!(group.checked(), vec!["a"]);
    assert_eq!(group.state().str("errorMessage"), "");
}

#[test]
fn toast_times_out() {
    let mut toast = Toast::new(&ctx(), "n", Props::new()).unwrap();
    toast.show("Saved", "", "green").unwrap();
    toast.take_events();

    toast.update_timer(0).unwrap();
    assert!(!toast.is_visible());
    let events = toast.take_events();
    let hidden = events[0].downcast_ref::<ToastHidden>().unwrap();
    assert_eq!(hidden.color, "green");
    assert_eq!(hidden.message, "Saved");
    assert_eq!(toast.render(), "");
}

#[tokio::test(start_paused = true)]
async fn toast_countdown_driver() {
    let mut toast = Toast::new(&ctx(), "n", Props::new().set("duration", 300)).unwrap();
    toast.show("Bye", "", "red").unwrap();
    tailkit::timer::run_countdown(&mut toast, std::time::Duration::from_millis(100)).await.unwrap();
    assert!(!toast.is_visible());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn defaults_outside_allowed_set_are_rejected() {
    let mut state = ComponentState::new("demo");
    let err = state
        .declare("size", Field::new("huge").allowed(["small", "normal", "large"]))
        .unwrap_err();
    assert!(matches!(err, UiError::Configuration { .. }));

    let err = Button::new(&ctx(), "b", Props::new().set("variant", "neon")).err().unwrap();
    assert!(err.to_string().contains("neon"));
}

#[test]
fn composition_is_pure_and_total() {
    for &color in Color::ALL {
        for &variant in ButtonVariant::ALL {
            assert_eq!(compose::button(color, variant), compose::button(color, variant));
        }
        for &variant in BadgeVariant::ALL {
            assert!(!compose::badge(color, variant).is_empty());
        }
        for &variant in AlertVariant::ALL {
            assert!(!compose::alert(color, variant).is_empty());
        }
        for &size in Size::ALL {
            assert_eq!(compose::size(size, Control::Input), compose::size(size, Control::Input));
        }
    }
}

#[test]
fn rendering_is_repeatable() {
    let ctx = ctx();
    let components: Vec<Box<dyn Component>> = vec![
        Box::new(Select::new(&ctx, "s", languages(true).set("value", vec!["en"])).unwrap()),
        Box::new(Toggle::new(&ctx, "t", Props::new()).unwrap()),
        Box::new(Tabs::new(&ctx, "tb", Props::new().set("tabs", vec!["A", "B"])).unwrap()),
        Box::new(Card::new(&ctx, "c", Props::new().set("title", "x")).unwrap()),
    ];
    for component in &components {
        assert_eq!(component.render(), component.render(), "{}", component.kind());
    }
}

#[test]
fn empty_search_restores_all_options() {
    let mut select = Select::new(&ctx(), "lang", languages(false)).unwrap();
    let all = select.options();
    select.update_search("ENG").unwrap();
    assert_eq!(select.filtered_options(), vec![SelectOption::new("en", "English")]);
    select.update_search("").unwrap();
    assert_eq!(select.filtered_options(), all);
}

#[test]
fn multi_select_toggle_is_an_involution() {
    let mut select = Select::new(&ctx(), "lang", languages(true).set("value", vec!["fr"])).unwrap();
    let before = select.selected_values();
    select.select_option("en").unwrap();
    assert_eq!(select.selected_values(), vec!["fr", "en"]);
    select.select_option("en").unwrap();
    assert_eq!(select.selected_values(), before);
}

#[test]
fn nested_values_collapse() {
    let nested = StateValue::List(vec![StateValue::List(vec!["x".into()])]);
    assert_eq!(normalize_value(&nested, false), StateValue::from("x"));

    let select = Select::new(&ctx(), "s", languages(false).set("value", nested)).unwrap();
    assert_eq!(select.selected_values(), vec!["x"]);
}

#[test]
fn required_checkbox_short_circuits_validator() {
    let ctx = UiProvider::new()
        .with_validator(AlwaysValid)
        .with_builtin_services()
        .unwrap()
        .boot()
        .unwrap();
    let props = Props::from_json(r#"{"options": {"a": "A", "b": "B"}}"#)
        .unwrap()
        .set("rules", "required|min:1");
    let mut group = CheckboxRadio::new(&ctx, "g", props).unwrap();

    group.update_value("a").unwrap();
    assert_eq!(group.state().str("errorMessage"), "");
    group.update_value("a").unwrap();
    assert_eq!(group.state().str("errorMessage"), "This field is required");
}

#[test]
fn protected_rules_stay_private() {
    let input = Input::new(&ctx(), "pw", Props::new().set("rules", "required|min:8")).unwrap();
    let exposed = input.exposed_state();
    assert!(exposed.get("rules").is_none());
    assert!(exposed.get("value").is_some());
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn badge_snapshot() {
    let badge = Badge::new(&ctx(), "b", Props::new().set("label", "<beta>").set("color", "green")).unwrap();
    assert_snapshot!(testing::render_to_string(&badge), @r#"<span class="ui-badge inline-flex items-center gap-1.5 whitespace-nowrap text-xs py-1 px-2 rounded-md bg-green-100 text-green-800 border-green-200" id="b"><span>&lt;beta&gt;</span></span>"#);
}

#[test]
fn avatar_snapshot() {
    let avatar = Avatar::new(&ctx(), "a", Props::new().set("name", "Ada Lovelace").set("size", "tiny").set("shape", "rounded")).unwrap();
    assert_snapshot!(testing::render_to_string(&avatar), @r#"<div class="ui-avatar inline-block relative"><div class="inline-flex items-center justify-center font-semibold relative overflow-hidden w-6 h-6 text-xs rounded-lg bg-indigo-600 text-white"><span class="text-current select-none">AL</span></div></div>"#);
}
