use super::*;

#[test]
fn classify_uses_inclusive_upper_bounds() {
    let bp = Breakpoints::default();
    assert_eq!(bp.classify(Viewport::new(0)), Breakpoint::Mobile);
    assert_eq!(bp.classify(Viewport::new(767)), Breakpoint::Mobile);
    assert_eq!(bp.classify(Viewport::new(768)), Breakpoint::Tablet);
    assert_eq!(bp.classify(Viewport::new(1023)), Breakpoint::Tablet);
    assert_eq!(bp.classify(Viewport::new(1024)), Breakpoint::Desktop);
}

#[test]
fn overlapping_tiers_are_rejected() {
    assert!(Breakpoints::new(800, 800).is_err());
    assert!(Breakpoints::new(800, 700).is_err());
    assert!(Breakpoints::new(600, 900).is_ok());
}

#[test]
fn cascade_runs_broadest_first() {
    assert_eq!(Breakpoint::CASCADE[0], Breakpoint::Desktop);
    assert_eq!(Breakpoint::CASCADE[2], Breakpoint::Mobile);
}
