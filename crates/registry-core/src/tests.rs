use std::cell::RefCell;

use chrono::NaiveDate;
use registry_domain::{Cell, GridPos, Page, Transcript};

use crate::{
    app::RegistryApp,
    parser_service::ParserService,
    print_service::{PageRenderer, PrintService, LINES_PER_PAGE},
    storage::{has_content_to_save, TranscriptLog},
    submission_service::SubmissionService,
    CoreError,
};

fn raw(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 12, 2).unwrap()
}

#[derive(Default)]
struct RecordingLog {
    appended: RefCell<Vec<Vec<String>>>,
}

impl TranscriptLog for RecordingLog {
    fn append(&self, transcript: &Transcript) -> Result<(), CoreError> {
        self.appended.borrow_mut().push(transcript.lines());
        Ok(())
    }
}

struct FailingLog;

impl TranscriptLog for FailingLog {
    fn append(&self, _transcript: &Transcript) -> Result<(), CoreError> {
        Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }
}

#[derive(Default)]
struct CollectingRenderer {
    pages: Vec<Page>,
}

impl PageRenderer for CollectingRenderer {
    fn render(&mut self, page: &Page) -> Result<(), CoreError> {
        self.pages.push(page.clone());
        Ok(())
    }
}

#[test]
fn parse_takes_first_non_blank_line_as_title() {
    let registry = ParserService::parse(&raw(&["", "   ", "Wedding Registry", "", "8 Plates"]))
        .expect("parse registry");

    assert_eq!(registry.title, "Wedding Registry");
    assert_eq!(registry.layout.item_count(), 1);
}

#[test]
fn parse_fails_when_no_usable_title_exists() {
    assert!(matches!(
        ParserService::parse(&raw(&["", "   ", ""])),
        Err(CoreError::EmptyInput)
    ));
    assert!(matches!(
        ParserService::parse(&[]),
        Err(CoreError::EmptyInput)
    ));
}

#[test]
fn parse_splits_columns_on_marker() {
    let registry = ParserService::parse(&raw(&["Title", "", "A", "B", "NEW COLUMN", "C"]))
        .expect("parse registry");

    let placed: Vec<(u32, u32, &str)> = registry
        .layout
        .items()
        .map(|item| (item.pos.column, item.pos.row, item.label.as_str()))
        .collect();
    assert_eq!(placed, vec![(0, 0, "A"), (0, 1, "B"), (1, 0, "C")]);
    assert_eq!(registry.layout.column_count(), 2);
}

#[test]
fn parse_does_not_skip_first_item_when_title_is_on_line_one() {
    // Fencepost: no leading blanks and no blank after the title.
    let registry = ParserService::parse(&raw(&["Title", "A", "B"])).expect("parse registry");

    let labels: Vec<&str> = registry
        .layout
        .items()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels, vec!["A", "B"]);
    assert_eq!(
        registry.layout.item_at(GridPos::new(0, 0)).map(|i| i.label.as_str()),
        Some("A")
    );
}

#[test]
fn parse_matches_marker_case_insensitively_after_trimming() {
    let registry = ParserService::parse(&raw(&["Title", "", "A", "  new Column  ", "B"]))
        .expect("parse registry");

    assert_eq!(
        registry.layout.item_at(GridPos::new(1, 0)).map(|i| i.label.as_str()),
        Some("B")
    );
}

#[test]
fn parse_honors_consecutive_column_markers() {
    let registry =
        ParserService::parse(&raw(&["Title", "", "A", "NEW COLUMN", "NEW COLUMN", "B"]))
            .expect("parse registry");

    assert_eq!(
        registry.layout.item_at(GridPos::new(2, 0)).map(|i| i.label.as_str()),
        Some("B")
    );
}

#[test]
fn parse_accepts_title_only_file() {
    let registry = ParserService::parse(&raw(&["Title"])).expect("parse registry");

    assert_eq!(registry.title, "Title");
    assert!(registry.layout.is_empty());
}

#[test]
fn parse_keeps_blank_separator_rows() {
    let registry =
        ParserService::parse(&raw(&["Title", "", "A", "   ", "B"])).expect("parse registry");

    let cells = registry.layout.cells();
    assert_eq!(cells.len(), 3);
    assert!(matches!(cells[1], Cell::Separator(pos) if pos == GridPos::new(0, 1)));
    assert_eq!(
        registry.layout.item_at(GridPos::new(0, 2)).map(|i| i.label.as_str()),
        Some("B")
    );
}

#[test]
fn parse_trims_item_labels() {
    let registry =
        ParserService::parse(&raw(&["Title", "", "  8 Plates  "])).expect("parse registry");

    assert_eq!(
        registry.layout.item_at(GridPos::new(0, 0)).map(|i| i.label.as_str()),
        Some("8 Plates")
    );
}

#[test]
fn submit_records_claimable_items_in_layout_order_and_locks_them() {
    let mut registry = ParserService::parse(&raw(&["Title", "", "A", "B", "C"]))
        .expect("parse registry");
    registry.layout.item_at_mut(GridPos::new(0, 2)).unwrap().selected = true;
    registry.layout.item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;

    let submission = SubmissionService::submit("Alice", &mut registry.layout);

    assert_eq!(submission.guest_name, "Alice");
    assert_eq!(submission.labels, vec!["A", "C"]);
    assert!(registry.layout.item_at(GridPos::new(0, 0)).unwrap().locked);
    assert!(registry.layout.item_at(GridPos::new(0, 2)).unwrap().locked);
    assert!(!registry.layout.item_at(GridPos::new(0, 1)).unwrap().locked);
}

#[test]
fn submit_excludes_items_locked_by_an_earlier_guest() {
    let mut registry =
        ParserService::parse(&raw(&["Title", "", "A", "B"])).expect("parse registry");
    registry.layout.item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    SubmissionService::submit("Alice", &mut registry.layout);

    // The UI may still show A selected; it stays locked and unclaimable.
    registry.layout.item_at_mut(GridPos::new(0, 1)).unwrap().selected = true;
    let submission = SubmissionService::submit("Bob", &mut registry.layout);

    assert_eq!(submission.labels, vec!["B"]);
}

#[test]
fn submit_keeps_guest_name_verbatim_including_empty() {
    let mut registry = ParserService::parse(&raw(&["Title"])).expect("parse registry");

    let submission = SubmissionService::submit("", &mut registry.layout);

    assert_eq!(submission.guest_name, "");
    assert!(submission.labels.is_empty());
}

#[test]
fn reset_all_is_idempotent() {
    let mut registry =
        ParserService::parse(&raw(&["Title", "", "A", "B"])).expect("parse registry");
    registry.layout.item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    SubmissionService::submit("Alice", &mut registry.layout);

    SubmissionService::reset_all(&mut registry.layout);
    SubmissionService::reset_all(&mut registry.layout);

    assert!(registry.layout.items().all(|item| !item.selected && !item.locked));
}

#[test]
fn paginate_splits_95_lines_into_three_pages() {
    let lines: Vec<String> = (0..95).map(|n| format!("line {}", n)).collect();

    let pages: Vec<Page> =
        PrintService::paginate("Title", test_date(), &lines, LINES_PER_PAGE).collect();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].lines.len(), 40);
    assert_eq!(pages[1].lines.len(), 40);
    assert_eq!(pages[2].lines.len(), 15);
    assert_eq!(
        pages.iter().map(|page| page.number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(pages[1].lines[0], "line 40");
}

#[test]
fn paginate_empty_input_yields_no_pages() {
    let pages: Vec<Page> =
        PrintService::paginate("Title", test_date(), &[], LINES_PER_PAGE).collect();

    assert!(pages.is_empty());
}

#[test]
fn paginate_is_restartable() {
    let lines = raw(&["a", "b", "c"]);

    let first: Vec<Page> = PrintService::paginate("Title", test_date(), &lines, 2).collect();
    let second: Vec<Page> = PrintService::paginate("Title", test_date(), &lines, 2).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn page_header_carries_title_date_and_number() {
    assert_eq!(
        Page::header_for("Event Registry", test_date(), 3),
        "Event Registry   12/02/2019   Page 3"
    );
}

#[test]
fn transcript_flattens_newest_first_with_blank_separators() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate", "2 Spoons"]))
        .expect("load registry");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    app.submit("Alice");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 1)).unwrap().selected = true;
    app.submit("Bob");

    assert_eq!(
        app.transcript().lines(),
        vec!["Bob", "2 Spoons", "", "Alice", "1 Plate"]
    );
}

#[test]
fn end_to_end_guests_cannot_reclaim_taken_items() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate", "2 Spoons"]))
        .expect("load registry");

    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    let alice = app.submit("Alice");
    assert_eq!(alice.labels, vec!["1 Plate"]);
    assert!(app.layout().unwrap().item_at(GridPos::new(0, 0)).unwrap().locked);
    assert_eq!(app.transcript().newest().unwrap().guest_name, "Alice");

    // Bob marks both items; the plate is already taken.
    {
        let layout = app.layout_mut().unwrap();
        layout.item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
        layout.item_at_mut(GridPos::new(0, 1)).unwrap().selected = true;
    }
    let bob = app.submit("Bob");
    assert_eq!(bob.labels, vec!["2 Spoons"]);
}

#[test]
fn save_is_a_noop_without_guest_name_or_selection() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate"]))
        .expect("load registry");
    let log = RecordingLog::default();

    app.save_and_clear("", &log).expect("save/clear");

    assert!(log.appended.borrow().is_empty());
}

#[test]
fn save_and_clear_appends_then_resets_everything() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate"]))
        .expect("load registry");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    app.submit("Alice");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    let log = RecordingLog::default();

    app.save_and_clear("Alice", &log).expect("save/clear");

    assert_eq!(log.appended.borrow().len(), 1);
    assert_eq!(log.appended.borrow()[0], vec!["Alice", "1 Plate"]);
    assert!(app.transcript().is_empty());
    assert!(app.layout().unwrap().items().all(|item| !item.selected && !item.locked));
}

#[test]
fn save_and_clear_resets_items_even_when_append_fails() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate"]))
        .expect("load registry");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    app.submit("Alice");

    let result = app.save_and_clear("Alice", &FailingLog);

    assert!(matches!(result, Err(CoreError::Io(_))));
    assert!(app.transcript().is_empty());
    assert!(app.layout().unwrap().items().all(|item| !item.selected && !item.locked));
}

#[test]
fn save_on_exit_appends_without_clearing() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate"]))
        .expect("load registry");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    app.submit("Alice");
    let log = RecordingLog::default();

    app.save_on_exit("Alice", &log).expect("save on exit");

    assert_eq!(log.appended.borrow().len(), 1);
    assert_eq!(app.transcript().len(), 1);
}

#[test]
fn degraded_app_still_accepts_guest_only_submissions() {
    let mut app = RegistryApp::without_items();

    let submission = app.submit("Alice");

    assert!(app.title().is_none());
    assert_eq!(submission.guest_name, "Alice");
    assert!(submission.labels.is_empty());
    assert_eq!(app.transcript().lines(), vec!["Alice"]);
}

#[test]
fn content_gate_considers_guest_name_and_selection() {
    let registry =
        ParserService::parse(&raw(&["Title", "", "A"])).expect("parse registry");

    assert!(!has_content_to_save("", Some(&registry.layout)));
    assert!(!has_content_to_save("", None));
    assert!(has_content_to_save("Alice", None));

    let mut selected = registry;
    selected.layout.item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    assert!(has_content_to_save("", Some(&selected.layout)));
}

#[test]
fn print_to_renders_transcript_pages() {
    let mut app = RegistryApp::from_lines(&raw(&["Registry", "", "1 Plate"]))
        .expect("load registry");
    app.layout_mut().unwrap().item_at_mut(GridPos::new(0, 0)).unwrap().selected = true;
    app.submit("Alice");
    let mut renderer = CollectingRenderer::default();

    let rendered = app.print_to(&mut renderer, test_date()).expect("print");

    assert_eq!(rendered, 1);
    assert_eq!(renderer.pages[0].header, "Registry   12/02/2019   Page 1");
    assert_eq!(renderer.pages[0].lines, vec!["Alice", "1 Plate"]);
}
