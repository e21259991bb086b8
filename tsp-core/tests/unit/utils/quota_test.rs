use super::*;

#[test]
fn can_detect_time_quota() {
    assert!(!TimeQuota::new(1000.).is_reached());
    assert!(TimeQuota::new(-1.).is_reached());
}
