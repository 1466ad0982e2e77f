// File: crates/tidemark-core/tests/ticks.rs
// Purpose: Tick generation, niceing, label formatting and axis layouts.

use tidemark_core::axis::{AxisLayout, AxisOrient, TICK_SIZE};
use tidemark_core::format::{
    format_grouped, format_grouped_shortest, format_measure, format_tick, group_thousands, tick_precision,
};
use tidemark_core::grid::{nice, tick_increment, ticks, Step};
use tidemark_core::scene::{Anchor, Mark};
use tidemark_core::{BandScale, Categories, Extent, LinearScale};

#[test]
fn year_ticks_step_by_ten() {
    let t = ticks(1880.0, 2021.0, 10);
    assert_eq!(t.first(), Some(&1880.0));
    assert_eq!(t.last(), Some(&2020.0));
    assert_eq!(t.len(), 15);
    assert!(t.windows(2).all(|w| w[1] - w[0] == 10.0));
}

#[test]
fn sub_unit_steps_are_exact() {
    assert_eq!(tick_increment(0.0, 1.0, 10), Some(Step::Inverse(10.0)));
    assert_eq!(ticks(0.0, 0.3, 3), [0.0, 0.1, 0.2, 0.3]);
}

#[test]
fn tick_edge_cases() {
    assert_eq!(ticks(5.0, 5.0, 10), [5.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert_eq!(ticks(4.0, 0.0, 4), [4.0, 3.0, 2.0, 1.0, 0.0]);
    assert_eq!(tick_increment(1.0, 1.0, 10), None);
}

#[test]
fn nice_rounds_outward() {
    assert_eq!(nice(0.0, 3.5823, 10), (0.0, 4.0));
    assert_eq!(nice(0.13, 0.96, 10), (0.1, 1.0));
    assert_eq!(nice(1883.0, 2019.0, 10), (1880.0, 2020.0));
}

#[test]
fn grouped_formatting() {
    assert_eq!(group_thousands("1234567"), "1,234,567");
    assert_eq!(group_thousands("123"), "123");
    assert_eq!(format_grouped(2021.0, 0), "2,021");
    assert_eq!(format_grouped(-1234.5, 2), "-1,234.50");
    assert_eq!(format_grouped(-0.001, 1), "0.0");
    assert_eq!(format_grouped(999.96, 1), "1,000.0");
}

#[test]
fn shortest_grouping_keeps_every_digit() {
    assert_eq!(format_grouped_shortest(2021.0), "2,021");
    assert_eq!(format_grouped_shortest(1950.5), "1,950.5");
    assert_eq!(format_grouped_shortest(-12345.678), "-12,345.678");
    assert_eq!(format_grouped_shortest(0.25), "0.25");
    assert_eq!(format_grouped_shortest(-0.0), "0");
}

#[test]
fn tick_labels_use_step_precision() {
    assert_eq!(tick_precision(10.0), 0);
    assert_eq!(tick_precision(0.5), 1);
    assert_eq!(tick_precision(0.02), 2);
    assert_eq!(format_tick(1880.0, 10.0), "1,880");
    assert_eq!(format_tick(0.0, 0.5), "0.0");
    assert_eq!(format_tick(2.5, 0.5), "2.5");
    assert_eq!(format_measure(0.1606547619), "0.1606547619");
    assert_eq!(format_measure(3.0), "3");
}

#[test]
fn linear_axis_places_labelled_ticks() {
    let y = LinearScale::new(Extent::new(0.0, 4.0).expect("extent"), (500.0, 100.0));
    let axis = AxisLayout::linear(&y, AxisOrient::Left, 250.0, 10);
    let labels: Vec<_> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0.0", "0.5", "1.0", "1.5", "2.0", "2.5", "3.0", "3.5", "4.0"]);
    assert_eq!(axis.ticks[0].offset, 500.0);
    assert_eq!(axis.ticks[8].offset, 100.0);

    // domain line then one rule per tick, extending left of the axis
    let rules = axis.rules();
    assert_eq!(rules.len(), 10);
    match &rules[1] {
        Mark::Rule { from, to, .. } => {
            assert_eq!((from.x, from.y), (250.0, 500.0));
            assert_eq!((to.x, to.y), (250.0 - TICK_SIZE, 500.0));
        }
        other => panic!("expected a rule, got {other:?}"),
    }
    assert!(axis.labels().iter().all(|l| l.anchor == Anchor::End));
}

#[test]
fn band_axis_ticks_sit_at_band_centers() {
    let cats = Categories::from_values(["Estonia", "Latvia"]).expect("categories");
    let x = BandScale::new(cats, (0.0, 200.0), 0.5).expect("band");
    let axis = AxisLayout::band(&x, AxisOrient::Bottom, 400.0).rotate_labels(-45.0);
    assert_eq!(axis.ticks.len(), 2);
    assert_eq!(axis.ticks[0].offset, 50.0);
    assert_eq!(axis.ticks[1].label, "Latvia");

    let labels = axis.labels();
    assert_eq!(labels[0].rotation, -45.0);
    assert_eq!(labels[0].anchor, Anchor::End);
    assert!(labels[0].position.y > 400.0);
}
