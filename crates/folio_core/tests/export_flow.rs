use folio_core::{
    ClipboardError, Clock, CopyFeedback, DirectoryDownloads, ExportService, ExportSettings,
    HostExport, InMemoryExport, ManualClock, SystemClipboard, ToolkitBoard, WidgetKind,
    WidgetRegistry, PLAIN_TEXT_MIME,
};
use std::time::Duration;

const RISK_CSV: &str = "Asset,Threat/Scenario,Impact (H/M/L)\nLaptops,Ransomware,H";

#[test]
fn copy_turns_indicator_on_then_reverts_after_window() {
    let clock = ManualClock::new();
    let mut feedback = CopyFeedback::new(ExportSettings::default().copied_window());
    let mut service = ExportService::new(InMemoryExport::new(), ExportSettings::default());

    service
        .copy_with_feedback(RISK_CSV, &mut feedback, clock.now())
        .expect("copy succeeds on capable host");
    assert!(feedback.is_copied());
    assert_eq!(service.capability().clipboard(), Some(RISK_CSV));

    clock.advance(Duration::from_millis(1_499));
    feedback.poll(clock.now());
    assert!(feedback.is_copied());

    clock.advance(Duration::from_millis(1));
    assert!(feedback.poll(clock.now()));
    assert!(!feedback.is_copied());
}

#[test]
fn denied_clipboard_records_error_without_panicking() {
    let clock = ManualClock::new();
    let mut feedback = CopyFeedback::default();
    let mut service = ExportService::new(
        InMemoryExport::denying(ClipboardError::Unavailable("insecure context".to_string())),
        ExportSettings::default(),
    );

    let result = service.copy_with_feedback(RISK_CSV, &mut feedback, clock.now());
    assert_eq!(
        result,
        Err(ClipboardError::Unavailable("insecure context".to_string()))
    );
    assert!(!feedback.is_copied());
    assert_eq!(service.capability().copy_attempts(), 1);

    clock.advance(Duration::from_secs(5));
    assert!(!feedback.poll(clock.now()));
    assert!(!feedback.is_copied());
}

#[test]
fn recovery_after_denial_works() {
    let clock = ManualClock::new();
    let mut feedback = CopyFeedback::default();
    let mut double =
        InMemoryExport::denying(ClipboardError::Denied("permission prompt".to_string()));
    {
        let mut service = ExportService::new(&mut double, ExportSettings::default());
        assert!(service
            .copy_with_feedback("a", &mut feedback, clock.now())
            .is_err());
    }

    double.set_clipboard_denial(None);
    let mut service = ExportService::new(&mut double, ExportSettings::default());
    service
        .copy_with_feedback("b", &mut feedback, clock.now())
        .expect("copy succeeds after permission granted");
    assert!(feedback.is_copied());
    assert_eq!(double.clipboard(), Some("b"));
    assert_eq!(double.copy_attempts(), 2);
}

#[test]
fn repeated_copy_keeps_single_revert() {
    let clock = ManualClock::new();
    let mut feedback = CopyFeedback::default();
    let mut service = ExportService::new(InMemoryExport::new(), ExportSettings::default());

    service.copy_with_feedback("one", &mut feedback, clock.now()).unwrap();
    let first_deadline = feedback.revert_deadline().unwrap();
    clock.advance(Duration::from_millis(700));
    service.copy_with_feedback("two", &mut feedback, clock.now()).unwrap();
    let second_deadline = feedback.revert_deadline().unwrap();
    assert!(second_deadline > first_deadline);

    clock.advance(Duration::from_millis(800));
    assert!(!feedback.poll(clock.now()));
    assert!(feedback.is_copied());

    clock.advance(Duration::from_millis(700));
    assert!(feedback.poll(clock.now()));
    assert!(!feedback.is_copied());
    assert_eq!(service.capability().clipboard(), Some("two"));
}

#[test]
fn download_produces_exact_bytes_and_name() {
    let mut service = ExportService::new(InMemoryExport::new(), ExportSettings::default());
    let requested = service.download_as_file("line1\nline2", Some("risk-register.csv"));
    assert_eq!(requested, "risk-register.csv");

    let downloads = service.capability().downloads();
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].bytes, b"line1\nline2".to_vec());
    assert_eq!(downloads[0].filename, "risk-register.csv");
    assert_eq!(downloads[0].mime_type, PLAIN_TEXT_MIME);
}

#[test]
fn download_to_directory_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let host = HostExport::new(
        SystemClipboard::new(),
        DirectoryDownloads::new(dir.path()),
    );
    let mut service = ExportService::new(host, ExportSettings::default());

    service.download_as_file("line1\nline2", Some("risk-register.csv"));
    let saved = std::fs::read(dir.path().join("risk-register.csv")).unwrap();
    assert_eq!(saved, b"line1\nline2");

    service.download_as_file("fallback", None);
    let fallback = std::fs::read_to_string(dir.path().join("template.txt")).unwrap();
    assert_eq!(fallback, "fallback");
}

#[test]
fn download_failure_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let host = HostExport::new(
        SystemClipboard::new(),
        DirectoryDownloads::new(dir.path()),
    );
    let mut service = ExportService::new(host, ExportSettings::default());

    let requested = service.download_as_file("x", Some("../escape.txt"));
    assert_eq!(requested, "../escape.txt");
    assert!(!dir.path().join("../escape.txt").exists());
}

#[test]
fn toolkit_item_copy_drives_only_that_item() {
    let clock = ManualClock::new();
    let mut board = ToolkitBoard::new(Duration::from_millis(1_500));
    let mut service = ExportService::new(InMemoryExport::new(), ExportSettings::default());

    board.toggle_item("Mini Risk Register (CSV)");
    let feedback = board
        .item_state_mut("Mini Risk Register (CSV)")
        .copy_feedback_mut();
    service.copy_with_feedback(RISK_CSV, feedback, clock.now()).unwrap();

    assert!(board
        .item_state("Mini Risk Register (CSV)")
        .unwrap()
        .copy_feedback()
        .is_copied());
    assert!(board.item_state("Vendor Questionnaire").is_none());

    clock.advance(Duration::from_millis(1_500));
    assert_eq!(board.poll(clock.now()), 1);
    assert!(board.is_item_open("Mini Risk Register (CSV)"));
}

#[test]
fn registry_reverts_only_due_widgets() {
    let clock = ManualClock::new();
    let mut registry = WidgetRegistry::new(Duration::from_millis(100));
    let early = registry.mount(WidgetKind::CopyButton);
    let late = registry.mount(WidgetKind::CopyButton);

    registry
        .state_mut(early)
        .unwrap()
        .copy_feedback_mut()
        .mark_copied(clock.now());
    clock.advance(Duration::from_millis(50));
    registry
        .state_mut(late)
        .unwrap()
        .copy_feedback_mut()
        .mark_copied(clock.now());

    clock.advance(Duration::from_millis(50));
    assert_eq!(registry.poll(clock.now()), vec![early]);
    clock.advance(Duration::from_millis(50));
    assert_eq!(registry.poll(clock.now()), vec![late]);
}
