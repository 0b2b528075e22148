//! Recording guest submissions against the shared item layout.

use registry_domain::{Layout, Submission};

pub struct SubmissionService;

impl SubmissionService {
    /// Builds a submission for `guest_name` from the layout's current
    /// selection state and locks every recorded item so the next guest
    /// cannot re-claim it. Labels are recorded in layout creation order.
    ///
    /// Items that are already locked are excluded even if the UI still
    /// shows them selected. The guest name is taken verbatim; empty is
    /// allowed.
    pub fn submit(guest_name: &str, layout: &mut Layout) -> Submission {
        let mut labels = Vec::new();
        for item in layout.items_mut() {
            if item.selected && !item.locked {
                labels.push(item.label.clone());
                item.locked = true;
            }
        }
        Submission::new(guest_name, labels)
    }

    /// Unselects and unlocks every item, making the full list claimable
    /// again. Idempotent.
    pub fn reset_all(layout: &mut Layout) {
        for item in layout.items_mut() {
            item.selected = false;
            item.locked = false;
        }
    }
}
