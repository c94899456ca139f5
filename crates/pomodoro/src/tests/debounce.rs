use crate::debounce::Debouncer;

const WINDOW: u64 = 200_000;

#[test]
fn first_edge_is_accepted() {
    let mut debouncer = Debouncer::new(WINDOW);
    assert!(debouncer.accept(0));
}

#[test]
fn bounces_inside_the_window_are_discarded() {
    let mut debouncer = Debouncer::new(WINDOW);
    assert!(debouncer.accept(1_000_000));
    assert!(!debouncer.accept(1_050_000));
    assert!(!debouncer.accept(1_199_999));
}

#[test]
fn edges_at_or_past_the_window_are_accepted() {
    let mut debouncer = Debouncer::new(WINDOW);
    assert!(debouncer.accept(1_000_000));
    assert!(debouncer.accept(1_200_000));
    assert!(debouncer.accept(1_400_000));
}

#[test]
fn discarded_edges_do_not_move_the_reference() {
    let mut debouncer = Debouncer::new(WINDOW);
    assert!(debouncer.accept(0));
    assert!(!debouncer.accept(150_000));
    // Measured from the accepted edge, not the discarded bounce.
    assert!(debouncer.accept(200_000));
}
