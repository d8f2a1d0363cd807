// ABOUTME: Read-only summary of the chosen legacy alerts for the review step

use super::fields::FormState;
use crate::alerts::AlertFlag;

/// One line of the review summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewItem {
    pub label: &'static str,
    pub satisfied: bool,
}

/// Project the form into review rows, one per reviewed alert flag.
///
/// The iterator borrows the form, so cloning it restarts the projection
/// against the same snapshot.
pub fn review_items(form: &FormState) -> impl ExactSizeIterator<Item = ReviewItem> + Clone + '_ {
    AlertFlag::reviewed().iter().map(move |flag| ReviewItem {
        label: flag.review_label().unwrap_or_else(|| flag.label()),
        satisfied: form.alert(*flag),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_fixed() {
        let empty = FormState::new();
        assert_eq!(review_items(&empty).len(), 14);

        let mut all_set = FormState::new();
        for flag in AlertFlag::all() {
            all_set.set(flag.key(), true);
        }
        assert_eq!(review_items(&all_set).count(), 14);
        assert!(review_items(&all_set).all(|item| item.satisfied));
    }

    #[test]
    fn test_absent_fields_render_false() {
        let mut form = FormState::new();
        form.set("MFAAlertUsers", true);

        let items: Vec<ReviewItem> = review_items(&form).collect();
        assert_eq!(
            items[0],
            ReviewItem {
                label: "Alert on users without any form of MFA",
                satisfied: true
            }
        );
        assert!(items[1..].iter().all(|item| !item.satisfied));
    }

    #[test]
    fn test_projection_is_restartable() {
        let mut form = FormState::new();
        form.set("NoCAConfig", true);

        let projection = review_items(&form);
        let first: Vec<_> = projection.clone().collect();
        let second: Vec<_> = projection.collect();
        assert_eq!(first, second);
        assert_eq!(first[12].label, "Alert on no CA policies");
        assert!(first[12].satisfied);
    }
}
