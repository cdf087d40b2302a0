mod support;

use motionforge_core::{
    generate_css, generate_react, parse_animation_config_json, AnimationConfig, Backend,
    BindingState, CopyStatus, EngineError, ExportCoordinator, Settings,
};
use support::RecordingElement;

fn fixture(name: &str) -> AnimationConfig {
    let json = motionforge_test_fixtures::configs::json(name).expect("load config fixture");
    parse_animation_config_json(&json).expect("parse config fixture")
}

fn coordinator(name: &str) -> ExportCoordinator<RecordingElement> {
    ExportCoordinator::new(Settings::default(), fixture(name))
}

/// it should regenerate when the backend changes without touching the config
#[test]
fn switching_backend_regenerates() {
    let mut c = coordinator("bounce");
    let before = c.config().clone();
    assert_eq!(c.generated().unwrap(), generate_react(&before).unwrap());

    c.set_backend(Backend::Css);
    assert_eq!(c.active_backend(), Backend::Css);
    assert_eq!(c.generated().unwrap(), generate_css(&before).unwrap());
    assert_eq!(c.config(), &before);
}

/// it should regenerate and rebind when the config changes
#[test]
fn config_change_updates_preview_and_export() {
    let el = RecordingElement::new();
    let mut c = coordinator("fade-default");
    assert_eq!(c.attach(el.clone()), BindingState::Running);
    assert_eq!(el.animation_classes(), ["mf-fade"]);

    c.set_config(fixture("slide-left"));
    assert_eq!(el.animation_classes(), ["mf-slide-from-left"]);
    assert!(c.generated_text().unwrap().contains("type: \"slide\""));

    c.preview_mut().pause();
    assert_eq!(c.preview().state(), BindingState::Paused);
    assert!(c.preview_mut().replay());
    assert_eq!(c.preview().state(), BindingState::Running);

    let detached = c.detach().expect("element returned");
    assert!(detached.is_clean());
}

/// it should report an unsupported type instead of generated source
#[test]
fn unsupported_type_surfaces_error() {
    let el = RecordingElement::new();
    let unknown: AnimationConfig =
        motionforge_test_fixtures::invalid::load("unknown-type").unwrap();
    let mut c = coordinator("fade-default");

    assert_eq!(c.bind(unknown, Some(el.clone())), BindingState::Bound);
    assert_eq!(
        c.generated(),
        Err(&EngineError::UnsupportedType {
            kind: "spin".into()
        })
    );
    assert_eq!(c.generated_text(), None);
    assert!(c.begin_copy().is_none());
    assert!(el.is_clean());
}

/// it should flag a successful copy for the feedback window only
#[test]
fn copy_success_is_transient() {
    let mut c = coordinator("scale-pop");
    let text_before = c.generated_text().unwrap().to_string();

    let req = c.begin_copy().expect("copy request");
    assert_eq!(req.text, text_before);
    assert!(c.copy_pending());
    assert_eq!(c.copy_status(0.0), CopyStatus::Idle);

    assert!(c.finish_copy(req.id, Ok(()), 1_000.0));
    assert_eq!(c.copy_status(1_500.0), CopyStatus::Copied);
    assert_eq!(c.copy_status(3_000.0), CopyStatus::Idle);
    assert_eq!(c.generated_text().unwrap(), text_before);
}

/// it should surface a dismissible failure without touching generation
#[test]
fn copy_failure_is_reported_and_dismissible() {
    let mut c = coordinator("rotate-half-turn");
    let req = c.begin_copy().unwrap();
    c.finish_copy(req.id, Err("permission denied".into()), 10.0);

    assert_eq!(
        c.copy_status(20.0),
        CopyStatus::Failed {
            message: "permission denied".into()
        }
    );
    c.dismiss_copy_error();
    assert_eq!(c.copy_status(20.0), CopyStatus::Idle);
    assert!(c.generated_text().unwrap().contains("rotate"));
}

/// it should let the newest config win over a copy that resolves late
#[test]
fn late_copy_does_not_revert_view() {
    let el = RecordingElement::new();
    let mut c = coordinator("fade-default");
    c.attach(el.clone());

    let stale = c.begin_copy().unwrap();
    c.set_config(fixture("bounce"));
    let fresh = c.begin_copy().unwrap();

    // The superseded request completes after the newer one was issued.
    assert!(!c.finish_copy(stale.id, Err("late".into()), 5.0));
    assert_eq!(c.copy_status(5.0), CopyStatus::Idle);
    assert!(c.generated_text().unwrap().contains("bounce"));
    assert_eq!(el.animation_classes(), ["mf-bounce"]);

    assert!(c.finish_copy(fresh.id, Ok(()), 6.0));
    assert!(fresh.text.contains("bounce"));
    assert_eq!(c.copy_status(7.0), CopyStatus::Copied);
}

/// it should honour settings for the initial backend, feedback window and component name
#[test]
fn settings_drive_export() {
    let settings: Settings = serde_json::from_str(
        r#"{"default_backend":"react","copy_feedback_ms":100,"component_name":"HeroEntrance"}"#,
    )
    .unwrap();
    let mut c: ExportCoordinator<RecordingElement> =
        ExportCoordinator::new(settings, fixture("slide-right"));
    assert!(c
        .generated_text()
        .unwrap()
        .contains("export function HeroEntrance({ children })"));

    let req = c.begin_copy().unwrap();
    c.finish_copy(req.id, Ok(()), 0.0);
    assert_eq!(c.copy_status(99.0), CopyStatus::Copied);
    assert_eq!(c.copy_status(100.0), CopyStatus::Idle);
}
