//! The in-memory expense collection and its durability rules.

use time::OffsetDateTime;

use crate::{
    Error,
    expense::core::{Expense, ExpenseFields, ExpenseId},
    store::ExpenseStore,
};

/// The ordered, in-memory expense collection.
///
/// This is the single source of truth the rest of the app reads from.
/// New expenses are prepended so the collection is newest first, and
/// every mutation writes the whole collection through to the durable
/// slot after the in-memory state has been updated.
#[derive(Debug)]
pub struct ExpenseRepository {
    expenses: Vec<Expense>,
    last_id: ExpenseId,
    store: ExpenseStore,
}

impl ExpenseRepository {
    /// Load the repository from the durable slot behind `store`.
    ///
    /// # Errors
    /// Returns [Error::MalformedStoredData] or [Error::StoreIo] if the
    /// slot cannot be read, see [ExpenseStore::load].
    pub fn load(store: ExpenseStore) -> Result<Self, Error> {
        let expenses = store.load()?;
        let last_id = expenses.iter().map(|expense| expense.id).max().unwrap_or(0);

        Ok(Self {
            expenses,
            last_id,
            store,
        })
    }

    /// The current collection, newest first.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by its ID.
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Create a new expense with a fresh ID, prepend it to the collection
    /// and sync the durable slot.
    ///
    /// # Errors
    /// Returns an error if the save fails. The in-memory insert stands
    /// either way; the slot catches up on the next successful save.
    pub fn insert(&mut self, fields: ExpenseFields) -> Result<Expense, Error> {
        let expense = Expense::from_fields(self.next_id(), fields);
        self.expenses.insert(0, expense.clone());

        self.store.save(&self.expenses)?;

        Ok(expense)
    }

    /// Replace every field of the expense with the given ID, keeping its
    /// ID and its position in the collection, and sync the durable slot.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingExpense] if no expense has the given
    /// ID; the collection is left untouched and nothing is saved.
    pub fn replace(&mut self, id: ExpenseId, fields: ExpenseFields) -> Result<Expense, Error> {
        let Some(existing) = self.expenses.iter_mut().find(|expense| expense.id == id) else {
            return Err(Error::UpdateMissingExpense);
        };

        *existing = Expense::from_fields(id, fields);
        let expense = existing.clone();

        self.store.save(&self.expenses)?;

        Ok(expense)
    }

    /// Delete the expense with the given ID and sync the durable slot.
    ///
    /// Removing an absent ID is a no-op that reports `Ok(false)` and does
    /// not touch the slot.
    ///
    /// # Errors
    /// Returns an error if the save fails.
    pub fn remove(&mut self, id: ExpenseId) -> Result<bool, Error> {
        let count_before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);

        if self.expenses.len() == count_before {
            return Ok(false);
        }

        self.store.save(&self.expenses)?;

        Ok(true)
    }

    /// The next expense ID: the current time in milliseconds, bumped past
    /// the last issued ID so rapid inserts within the same millisecond
    /// still get strictly increasing IDs.
    fn next_id(&mut self) -> ExpenseId {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as ExpenseId;
        self.last_id = now_ms.max(self.last_id + 1);

        self.last_id
    }
}

#[cfg(test)]
mod expense_repository_tests {
    use std::collections::HashSet;

    use tempfile::TempDir;
    use time::macros::date;

    use crate::{Error, expense::core::ExpenseFields, store::ExpenseStore};

    use super::ExpenseRepository;

    fn get_test_repository() -> (ExpenseRepository, TempDir) {
        let data_dir = tempfile::tempdir().unwrap();
        let store = ExpenseStore::open(data_dir.path()).unwrap();
        let repository = ExpenseRepository::load(store).unwrap();

        (repository, data_dir)
    }

    fn lunch() -> ExpenseFields {
        ExpenseFields {
            amount: 12.5,
            category: "food".to_owned(),
            description: "lunch".to_owned(),
            date: date!(2024 - 03 - 01),
        }
    }

    fn bus_fare() -> ExpenseFields {
        ExpenseFields {
            amount: 40.0,
            category: "transport".to_owned(),
            description: String::new(),
            date: date!(2024 - 03 - 15),
        }
    }

    #[test]
    fn insert_prepends_and_assigns_unique_ids() {
        let (mut repository, _data_dir) = get_test_repository();

        for i in 0..20 {
            repository
                .insert(ExpenseFields {
                    amount: i as f64,
                    ..lunch()
                })
                .unwrap();
        }

        let ids: HashSet<_> = repository.list().iter().map(|expense| expense.id).collect();
        assert_eq!(ids.len(), 20, "want 20 unique IDs");
        assert_eq!(
            repository.list()[0].amount,
            19.0,
            "want the newest expense first"
        );
    }

    #[test]
    fn replace_keeps_length_and_position() {
        let (mut repository, _data_dir) = get_test_repository();
        repository.insert(lunch()).unwrap();
        let target = repository.insert(bus_fare()).unwrap();
        repository.insert(lunch()).unwrap();

        let updated = repository
            .replace(
                target.id,
                ExpenseFields {
                    amount: 20.0,
                    ..bus_fare()
                },
            )
            .unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(repository.list().len(), 3);
        assert_eq!(
            repository.list()[1].id,
            target.id,
            "want the updated expense to keep its position"
        );
        assert_eq!(repository.list()[1].amount, 20.0);
    }

    #[test]
    fn replace_of_missing_id_leaves_collection_unchanged() {
        let (mut repository, _data_dir) = get_test_repository();
        repository.insert(lunch()).unwrap();
        let want = repository.list().to_vec();

        let result = repository.replace(42, bus_fare());

        assert_eq!(result, Err(Error::UpdateMissingExpense));
        assert_eq!(repository.list(), want);
    }

    #[test]
    fn remove_deletes_by_id() {
        let (mut repository, _data_dir) = get_test_repository();
        let first = repository.insert(lunch()).unwrap();
        repository.insert(bus_fare()).unwrap();

        let removed = repository.remove(first.id).unwrap();

        assert!(removed);
        assert_eq!(repository.list().len(), 1);
        assert!(repository.get(first.id).is_none());
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let (mut repository, _data_dir) = get_test_repository();
        repository.insert(lunch()).unwrap();
        let want = repository.list().to_vec();

        let removed = repository.remove(42).unwrap();

        assert!(!removed, "want remove of an absent ID to report false");
        assert_eq!(repository.list(), want);
    }

    #[test]
    fn mutations_write_through_to_the_slot() {
        let data_dir = tempfile::tempdir().unwrap();
        let store = ExpenseStore::open(data_dir.path()).unwrap();
        let mut repository = ExpenseRepository::load(store.clone()).unwrap();

        let first = repository.insert(lunch()).unwrap();
        repository.insert(bus_fare()).unwrap();
        repository.remove(first.id).unwrap();

        let reloaded = ExpenseRepository::load(store).unwrap();
        assert_eq!(reloaded.list(), repository.list());
    }

    #[test]
    fn load_resumes_ids_after_the_stored_maximum() {
        let data_dir = tempfile::tempdir().unwrap();
        let store = ExpenseStore::open(data_dir.path()).unwrap();
        let mut repository = ExpenseRepository::load(store.clone()).unwrap();
        let existing = repository.insert(lunch()).unwrap();

        let mut reloaded = ExpenseRepository::load(store).unwrap();
        let fresh = reloaded.insert(bus_fare()).unwrap();

        assert!(
            fresh.id > existing.id,
            "want fresh ID {} to be greater than stored ID {}",
            fresh.id,
            existing.id
        );
    }
}
