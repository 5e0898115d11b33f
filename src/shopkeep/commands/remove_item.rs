use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{title_case, InventoryItem};
use crate::store::TabularStore;

/// Drops every stock line named `name` with a single table rewrite.
pub fn run<S: TabularStore<InventoryItem>>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = title_case(name);
    let (removed, kept): (Vec<InventoryItem>, Vec<InventoryItem>) = store
        .rows()
        .iter()
        .cloned()
        .partition(|item| item.name == name);

    store.overwrite(kept)?;

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No item named {} in the inventory.",
            name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} ({} line{})",
            name,
            removed.len(),
            if removed.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_affected_items(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::inventory;

    #[test]
    fn removes_every_duplicate_in_one_rewrite() {
        let mut store = inventory(&[("Apple", 10, 150), ("Pear", 3, 200), ("Apple", 2, 125)]);

        let result = run(&mut store, "apple").unwrap();

        assert_eq!(store.overwrites(), 1);
        assert_eq!(result.affected_items.len(), 2);
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0].name, "Pear");
        assert_eq!(result.messages[0].content, "Removed Apple (2 lines)");
    }

    #[test]
    fn missing_name_still_rewrites_and_warns() {
        let mut store = inventory(&[("Pear", 3, 200)]);

        let result = run(&mut store, "banana").unwrap();

        assert_eq!(store.overwrites(), 1);
        assert!(result.affected_items.is_empty());
        assert_eq!(store.rows().len(), 1);
        assert_eq!(
            result.messages[0].content,
            "No item named Banana in the inventory."
        );
    }

    #[test]
    fn matching_is_exact_after_title_casing() {
        let mut store = inventory(&[("Green Apple", 1, 100), ("Apple", 1, 100)]);

        run(&mut store, "APPLE").unwrap();

        let names: Vec<_> = store.rows().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Green Apple"]);
    }
}
