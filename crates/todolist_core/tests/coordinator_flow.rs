use std::cell::RefCell;
use std::rc::Rc;
use todolist_core::{
    Coordinator, EventBus, Filter, InputSignal, ItemCollection, ListSnapshot, PresentationSurface,
    TextSurface, Topic, View,
};

struct Harness {
    bus: EventBus,
    collection: Rc<ItemCollection>,
    surface: Rc<RefCell<TextSurface>>,
    view: View,
    coordinator: Coordinator,
}

impl Harness {
    fn new() -> Self {
        let bus = EventBus::new();
        let collection = Rc::new(ItemCollection::new(bus.clone()));
        let surface = Rc::new(RefCell::new(TextSurface::new()));
        let coordinator = Coordinator::attach(bus.clone(), Rc::clone(&collection), surface.clone());
        let view = View::new(bus.clone());
        Self {
            bus,
            collection,
            surface,
            view,
            coordinator,
        }
    }

    fn submit(&self, text: &str) -> bool {
        self.view.dispatch_input(InputSignal::NewItemKey {
            key: "Enter".to_string(),
            value: text.to_string(),
        })
    }

    fn click_item(&self, tag: &str, id: u64) {
        self.view.dispatch_input(InputSignal::ListClicked {
            tag: tag.to_string(),
            item_id: id.to_string(),
        });
    }

    fn click_bulk(&self, checked: bool) {
        self.surface.borrow_mut().set_bulk_checked(checked);
        self.view
            .dispatch_input(InputSignal::BulkCheckboxClicked { checked });
    }

    fn navigate(&self, href: &str) -> bool {
        self.view.dispatch_input(InputSignal::FooterClicked {
            tag: "a".to_string(),
            href: Some(href.to_string()),
        })
    }

    fn bulk_checked(&self) -> bool {
        self.surface.borrow().bulk_checked()
    }

    fn snapshot(&self) -> ListSnapshot {
        self.surface
            .borrow()
            .last_snapshot()
            .cloned()
            .expect("surface should have rendered")
    }
}

#[test]
fn new_item_request_adds_and_renders() {
    let harness = Harness::new();
    assert!(harness.submit("  buy milk  "));

    let snapshot = harness.snapshot();
    assert_eq!(snapshot.count, 1);
    assert_eq!(snapshot.items[0].id, 0);
    assert_eq!(snapshot.items[0].text, "buy milk");
    assert!(!harness.bulk_checked());
}

#[test]
fn blank_submission_never_reaches_collection() {
    let harness = Harness::new();
    assert!(!harness.submit("   "));
    assert!(harness.collection.is_empty());
    assert_eq!(harness.surface.borrow().render_count(), 0);
}

#[test]
fn adding_resets_bulk_checkbox() {
    let harness = Harness::new();
    harness.submit("a");
    harness.click_item("input", 0);
    assert!(harness.bulk_checked());

    harness.submit("b");
    assert!(!harness.bulk_checked());
}

#[test]
fn toggling_every_item_checks_bulk_checkbox_under_all() {
    let harness = Harness::new();
    harness.submit("a");
    harness.submit("b");

    harness.click_item("input", 0);
    assert!(!harness.bulk_checked());
    harness.click_item("input", 1);
    assert!(harness.bulk_checked());

    harness.click_item("input", 1);
    assert!(!harness.bulk_checked());
}

#[test]
fn toggle_then_filter_shows_partitioned_lists() {
    let harness = Harness::new();
    harness.submit("a");
    harness.submit("b");
    harness.click_item("input", 0);

    assert!(harness.navigate("#/active"));
    let active = harness.snapshot();
    assert_eq!(active.active_filter, Filter::Active);
    assert_eq!(active.items.len(), 1);
    assert_eq!(active.items[0].id, 1);
    assert_eq!(active.count, 1);

    assert!(harness.navigate("#/completed"));
    let completed = harness.snapshot();
    assert_eq!(completed.items.len(), 1);
    assert_eq!(completed.items[0].id, 0);
}

#[test]
fn bulk_toggle_then_completed_filter_checks_bulk_checkbox() {
    let harness = Harness::new();
    harness.submit("a");
    harness.submit("b");
    harness.click_bulk(true);
    assert_eq!(harness.collection.count_completed(), 2);

    harness.surface.borrow_mut().set_bulk_checked(false);
    harness.navigate("#/completed");
    assert_eq!(harness.snapshot().count, 2);
    assert!(harness.bulk_checked());
}

#[test]
fn empty_completed_view_forces_bulk_checkbox_unchecked() {
    let harness = Harness::new();
    harness.submit("a");
    harness.surface.borrow_mut().set_bulk_checked(true);

    harness.navigate("#/completed");
    assert_eq!(harness.snapshot().count, 0);
    assert!(!harness.bulk_checked());
}

#[test]
fn active_filter_leaves_bulk_checkbox_unchecked() {
    let harness = Harness::new();
    harness.submit("a");
    harness.surface.borrow_mut().set_bulk_checked(true);

    harness.navigate("#/active");
    assert!(!harness.bulk_checked());
}

#[test]
fn deleting_last_item_unchecks_bulk_checkbox() {
    let harness = Harness::new();
    harness.submit("a");
    harness.click_item("input", 0);
    assert!(harness.bulk_checked());

    harness.click_item("button", 0);
    assert!(harness.collection.is_empty());
    assert_eq!(harness.snapshot().count, 0);
    assert!(!harness.bulk_checked());
}

#[test]
fn unknown_ids_are_ignored_but_still_safe() {
    let harness = Harness::new();
    harness.submit("a");
    let renders = harness.surface.borrow().render_count();

    harness.click_item("input", 99);
    harness.click_item("button", 99);
    assert_eq!(harness.collection.len(), 1);
    assert_eq!(harness.surface.borrow().render_count(), renders);
}

#[test]
fn unknown_route_emits_no_filter_change() {
    let harness = Harness::new();
    harness.submit("a");
    let renders = harness.surface.borrow().render_count();

    assert!(!harness.navigate("#/archived"));
    assert_eq!(harness.collection.active_filter(), Filter::All);
    assert_eq!(harness.surface.borrow().render_count(), renders);
}

#[test]
fn navigation_marks_exactly_one_selected_link() {
    let harness = Harness::new();
    harness.navigate("#/completed");
    let selected: Vec<Filter> = harness
        .snapshot()
        .links
        .iter()
        .filter(|link| link.selected)
        .map(|link| link.filter)
        .collect();
    assert_eq!(selected, vec![Filter::Completed]);
}

#[test]
fn refresh_renders_initial_frame() {
    let harness = Harness::new();
    harness.coordinator.refresh();
    let frame = harness.surface.borrow().frame();
    assert!(frame.contains("0 items left"));
    assert!(frame.contains("[All]"));
}

#[test]
fn detach_unsubscribes_every_topic() {
    let mut harness = Harness::new();
    for topic in Topic::ALL {
        assert_eq!(harness.bus.subscriber_count(topic), 1);
    }

    assert_eq!(harness.coordinator.detach(), Topic::ALL.len());
    assert!(!harness.coordinator.is_attached());
    assert_eq!(harness.coordinator.detach(), 0);
    for topic in Topic::ALL {
        assert!(!harness.bus.has_subscribers(topic));
    }

    harness.submit("ignored");
    assert!(harness.collection.is_empty());
}

#[test]
fn dropping_coordinator_detaches_it() {
    let bus = EventBus::new();
    let collection = Rc::new(ItemCollection::new(bus.clone()));
    let surface = Rc::new(RefCell::new(TextSurface::new()));
    {
        let _coordinator =
            Coordinator::attach(bus.clone(), Rc::clone(&collection), surface.clone());
        assert!(bus.has_subscribers(Topic::NewItemRequest));
    }
    assert!(!bus.has_subscribers(Topic::NewItemRequest));
}

struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl PresentationSurface for CallLog {
    fn render(&mut self, snapshot: &ListSnapshot) {
        self.calls
            .borrow_mut()
            .push(format!("render:{}", snapshot.count));
    }

    fn set_bulk_checked(&mut self, checked: bool) {
        self.calls.borrow_mut().push(format!("bulk:{checked}"));
    }
}

#[test]
fn surface_calls_follow_wiring_order() {
    let bus = EventBus::new();
    let collection = Rc::new(ItemCollection::new(bus.clone()));
    let calls = Rc::new(RefCell::new(Vec::new()));
    let surface = Rc::new(RefCell::new(CallLog {
        calls: Rc::clone(&calls),
    }));
    let _coordinator = Coordinator::attach(bus.clone(), Rc::clone(&collection), surface);
    let view = View::new(bus);

    view.dispatch_input(InputSignal::NewItemKey {
        key: "Enter".to_string(),
        value: "a".to_string(),
    });
    view.dispatch_input(InputSignal::FooterClicked {
        tag: "a".to_string(),
        href: Some("#/completed".to_string()),
    });
    view.dispatch_input(InputSignal::ListClicked {
        tag: "button".to_string(),
        item_id: "0".to_string(),
    });

    assert_eq!(
        *calls.borrow(),
        vec![
            "render:1",
            "bulk:false",
            "render:0",
            "bulk:false",
            "render:0",
            "bulk:false",
            "bulk:false",
        ]
    );
}
