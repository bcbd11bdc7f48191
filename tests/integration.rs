// SPDX-License-Identifier: MPL-2.0
use newsdesk::config::{self, Config, DEFAULT_FEEDBACK_DURATION_MS, DEFAULT_TOAST_DURATION_MS};
use newsdesk::draft;
use newsdesk::export;
use newsdesk::ui::feedback::{Appearance, ButtonClass, FeedbackKind, FeedbackManager};
use newsdesk::ui::notifications::{
    Manager, Notification, NotificationMessage, DEFAULT_DURATION, FADE_GRACE,
};
use newsdesk::ui::overlay;
use newsdesk::ui::scroll::{Animator, SectionRegistry, SCROLL_DURATION};
use newsdesk::util::{format_file_size, validate_file_type, Debouncer};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_durations_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: defaults
    let initial_config = Config {
        tooltips: Some(true),
        toast_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        feedback_duration_ms: Some(DEFAULT_FEEDBACK_DURATION_MS),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.toast_duration_ms, Some(DEFAULT_TOAST_DURATION_MS));

    // 2. Shorten the windows and disable tooltips
    let quick_config = Config {
        tooltips: Some(false),
        toast_duration_ms: Some(1500),
        feedback_duration_ms: Some(500),
    };
    config::save_to_path(&quick_config, &temp_config_file_path)
        .expect("Failed to write quick config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load quick config from path");
    assert_eq!(reloaded.tooltips, Some(false));
    assert_eq!(reloaded.toast_duration_ms, Some(1500));
    assert_eq!(reloaded.feedback_duration_ms, Some(500));

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_toast_lifecycle_over_simulated_ticks() {
    let mut manager = Manager::new();
    let notification = Notification::success("Draft exported");
    let born = notification.created_at();
    manager.push(notification);

    // The 100ms tick loop, compressed: visible, fading, then removed.
    let mut now = born;
    let step = Duration::from_millis(100);
    while now < born + DEFAULT_DURATION + FADE_GRACE {
        manager.tick_at(now);
        assert_eq!(manager.live_count(), 1, "removed before the grace elapsed");
        now += step;
    }
    manager.tick_at(born + DEFAULT_DURATION + FADE_GRACE);
    assert_eq!(manager.live_count(), 0);
}

#[test]
fn test_manual_dismiss_beats_the_expiry_timer() {
    let mut manager = Manager::new();
    let notification = Notification::error("upload failed");
    let id = notification.id();
    let born = notification.created_at();
    manager.push(notification);

    manager.handle_message(&NotificationMessage::Dismiss(id));
    assert!(!manager.has_notifications());

    // The timer pass for the dismissed toast must find nothing.
    manager.tick_at(born + DEFAULT_DURATION + FADE_GRACE);
    assert!(!manager.has_notifications());
}

#[test]
fn test_copy_feedback_disables_then_restores_the_button() {
    const BUTTON: &str = "copy-draft";
    let resting = Appearance::new("Copy draft", ButtonClass::Primary);
    let window = Duration::from_millis(2000);
    let now = Instant::now();

    let mut feedback = FeedbackManager::new();
    feedback.show(BUTTON, resting.clone(), "Copied", FeedbackKind::Success, window, now);

    let active = feedback.face(BUTTON, &resting);
    assert_eq!(active.label, "Copied");
    assert!(active.disabled);

    feedback.tick_at(now + window);
    let restored = feedback.face(BUTTON, &resting);
    assert_eq!(restored.label, "Copy draft");
    assert!(!restored.disabled);
    assert!(!feedback.has_active());
}

#[test]
fn test_overlay_show_hide_round_trip() {
    let mut state = overlay::State::new();
    assert!(!state.is_visible());

    state.show("Building preview...");
    assert!(state.is_visible());
    assert_eq!(state.message(), Some("Building preview..."));

    // A second show replaces rather than stacks; one hide clears it.
    state.show(overlay::DEFAULT_MESSAGE);
    state.hide();
    assert!(!state.is_visible());

    state.hide();
    assert!(!state.is_visible());
}

#[test]
fn test_debounced_filter_applies_only_the_final_query() {
    let start = Instant::now();
    let mut debouncer: Debouncer<String> = Debouncer::new(Duration::from_millis(300));

    for (i, query) in ["m", "ma", "mar", "mark"].iter().enumerate() {
        let at = start + Duration::from_millis(80 * i as u64);
        assert_eq!(debouncer.poll(at), None);
        debouncer.push((*query).to_string(), at);
    }

    let last_push = start + Duration::from_millis(240);
    assert_eq!(debouncer.poll(last_push + Duration::from_millis(299)), None);
    assert_eq!(
        debouncer.poll(last_push + Duration::from_millis(300)),
        Some("mark".to_string())
    );
}

#[test]
fn test_jump_to_section_animates_to_the_registered_offset() {
    let mut registry = SectionRegistry::new();
    let sections = draft::sample_sections();
    for (index, section) in sections.iter().enumerate() {
        registry.register(section.title.clone(), index as f32 * 188.0);
    }

    let target = registry.resolve("Credit").expect("Credit is registered");
    assert!(registry.resolve("Classifieds").is_none());

    let now = Instant::now();
    let mut animator = Animator::new();
    animator.start(0.0, target, 16.0, now);

    let midway = animator
        .offset_at(now + SCROLL_DURATION / 2)
        .expect("still animating");
    assert!(midway > 0.0 && midway < target);

    let landing = animator
        .offset_at(now + SCROLL_DURATION)
        .expect("final frame lands on the target");
    assert!((landing - (target - 16.0)).abs() < 1e-4);
    assert!(!animator.is_animating());
}

#[test]
fn test_export_writes_the_composed_draft() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join(export::generate_default_filename());

    let sections = draft::sample_sections();
    let content = draft::compose_text(&sections);
    export::write_text_to_path(&path, &content).expect("Failed to write export");

    let read_back = std::fs::read_to_string(&path).expect("Failed to read export");
    assert_eq!(draft::parse_sections(&read_back), sections);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_upload_helpers_agree_with_the_form_rules() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(1_048_576), "1 MB");

    let allowed = ["csv", "txt"];
    assert!(validate_file_type("subscribers.CSV", &allowed));
    assert!(!validate_file_type("subscribers.xlsx", &allowed));
}
