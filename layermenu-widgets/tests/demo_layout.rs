// SPDX-License-Identifier: MIT OR Apache-2.0

//! Three application layers, two of them grouped without a menu of their
//! own, each contributing to the window's context menu.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use layermenu_core::event::PointerEvent;
use layermenu_core::layer::{LayerGroup, MenuRegion};
use layermenu_core::menu::MenuEntry;
use layermenu_core::update::Update;
use layermenu_core::vg::kurbo::{Point, Rect};
use layermenu_core::vgi::recording::RecordingGraphics;
use layermenu_widgets::menu_view::{ClickOutcome, MenuView};
use layermenu_widgets::multilayer::MultilayerWithContext;

use common::{config, left, right, RecordingText};

fn demo(clicks: Arc<AtomicUsize>) -> MultilayerWithContext {
    let layer_1 = MenuRegion::new("Layer 1").on_context_menu(|request| {
        request.add_entry(MenuEntry::button("Layer 1 Button", || Update::empty()));
    });

    let layer_2 = MenuRegion::new("Layer 2")
        .with_bounds(Rect::new(0.0, 0.0, 500.0, 800.0))
        .on_context_menu(|request| {
            request.add_entry(MenuEntry::submenu(
                "Layer 2 Submenu",
                [
                    MenuEntry::label("Layer 2 Submenu Label"),
                    MenuEntry::spacer(),
                    MenuEntry::button("Layer 2 Submenu Button", Update::empty),
                ],
            ));
        });

    let layer_3 = MenuRegion::new("Layer 3")
        .with_bounds(Rect::new(0.0, 0.0, 500.0, 400.0))
        .on_context_menu(move |request| {
            let clicks = clicks.clone();
            let nested = MenuEntry::submenu(
                "Layer 3 Submenu Submenu",
                [MenuEntry::label("Layer 3 Submenu Submenu Label"), MenuEntry::spacer()],
            )
            .with_child(MenuEntry::button("Layer 3 Submenu Submenu Button", move || {
                clicks.fetch_add(1, Ordering::SeqCst);
                Update::DRAW
            }));

            request.add_entry(
                MenuEntry::submenu("Layer 3 Submenu", [MenuEntry::label("Layer 3 Submenu Label")])
                    .with_child(MenuEntry::spacer())
                    .with_child(nested),
            );
        });

    MultilayerWithContext::new("MultilayerWithContext", config(1000.0, 800.0))
        .with_layer(layer_1)
        .with_layer(
            LayerGroup::new("MultilayerWithoutContext")
                .with_layer(layer_2)
                .with_layer(layer_3),
        )
}

fn labels(root: &MultilayerWithContext) -> Vec<String> {
    root.root()
        .map(|node| {
            node.entries()
                .iter()
                .filter_map(MenuEntry::text)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_entries_follow_layer_order_and_bounds() {
    let mut root = demo(Arc::default());
    let mut text = RecordingText::new();

    root.handle_pointer(&right(100.0, 100.0), &mut text);
    assert_eq!(
        labels(&root),
        vec!["Layer 1 Button", "Layer 2 Submenu", "Layer 3 Submenu"]
    );

    root.handle_pointer(&right(100.0, 600.0), &mut text);
    assert_eq!(labels(&root), vec!["Layer 1 Button", "Layer 2 Submenu"]);

    root.handle_pointer(&right(700.0, 100.0), &mut text);
    assert_eq!(labels(&root), vec!["Layer 1 Button"]);
}

#[test]
fn test_nested_submenu_flips_left_of_its_parent() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let mut root = demo(clicks.clone());
    let mut text = RecordingText::new();

    root.handle_pointer(&right(400.0, 100.0), &mut text);
    let panel = root.menu_view().and_then(MenuView::rect).unwrap();
    assert_eq!(panel, Rect::new(400.0, 100.0, 560.0, 178.0));

    // "Layer 3 Submenu" row, then across into its submenu and down to the
    // nested submenu row.
    for (x, y) in [(410.0, 160.0), (570.0, 160.0), (570.0, 200.0)] {
        root.handle_pointer(&PointerEvent::moved(x, y), &mut text);
    }

    let child = root.menu_view().and_then(MenuView::expanded).unwrap();
    assert_eq!(child.rect(), Some(Rect::new(560.0, 151.0, 800.0, 217.0)));

    // Too wide for the space on the right: opens left of the first submenu.
    let grandchild = child.expanded().unwrap();
    assert_eq!(grandchild.rect(), Some(Rect::new(250.0, 190.0, 560.0, 256.0)));

    let mut graphics = RecordingGraphics::new();
    root.render(&mut graphics, &mut text);
    assert_eq!(
        text.texts(),
        vec![
            "Layer 1 Button",
            "Layer 2 Submenu",
            "Layer 3 Submenu",
            "Layer 3 Submenu Label",
            "Layer 3 Submenu Submenu",
            "Layer 3 Submenu Submenu Label",
            "Layer 3 Submenu Submenu Button",
        ]
    );

    root.handle_pointer(&PointerEvent::moved(300.0, 240.0), &mut text);
    root.handle_pointer(&left(300.0, 240.0), &mut text);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(!root.is_menu_visible());
}

#[test]
fn test_flipped_grandchild_covers_root_rows() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let mut root = demo(clicks.clone());
    let mut text = RecordingText::new();

    // Near the bottom edge every panel opens upwards.
    root.handle_pointer(&right(400.0, 700.0), &mut text);
    for (x, y) in [(410.0, 760.0), (570.0, 760.0)] {
        root.handle_pointer(&PointerEvent::moved(x, y), &mut text);
    }

    let view = root.menu_view().unwrap();
    let child = view.expanded().unwrap();
    assert_eq!(child.rect(), Some(Rect::new(560.0, 709.0, 800.0, 775.0)));
    let grandchild = child.expanded().unwrap();
    assert_eq!(grandchild.rect(), Some(Rect::new(250.0, 706.0, 560.0, 772.0)));

    // Inside the grandchild and above the "Layer 2 Submenu" row of the root.
    root.handle_pointer(&PointerEvent::moved(450.0, 740.0), &mut text);
    let view = root.menu_view().unwrap();
    assert!(!view.rows()[1].is_hovered());
    assert!(view.rows()[2].is_hovered());
    assert_eq!(view.expanded().and_then(MenuView::rect), Some(Rect::new(560.0, 709.0, 800.0, 775.0)));

    // The first submenu is drawn over the root panel here, and its row is
    // not a button.
    root.handle_pointer(&PointerEvent::moved(570.0, 770.0), &mut text);
    let view = root.menu_view().unwrap();
    assert!(matches!(view.click(Point::new(570.0, 770.0)), ClickOutcome::Inside));

    // "Layer 3 Submenu Submenu Button" spans 745..769 of the grandchild.
    root.handle_pointer(&PointerEvent::moved(450.0, 760.0), &mut text);
    root.handle_pointer(&left(450.0, 760.0), &mut text);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(!root.is_menu_visible());
}
