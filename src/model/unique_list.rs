use super::address_book::AddressBookError;
use super::interview::Interview;
use super::person::Person;
use super::task::Task;

/// Identity notion used by [`UniqueList`] to reject duplicates.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
    fn duplicate_error(&self) -> AddressBookError;
}

impl Identity for Person {
    fn is_same(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }

    fn duplicate_error(&self) -> AddressBookError {
        AddressBookError::DuplicatePerson(self.name().clone())
    }
}

impl Identity for Interview {
    fn is_same(&self, other: &Self) -> bool {
        self.is_same_interview(other)
    }

    fn duplicate_error(&self) -> AddressBookError {
        AddressBookError::DuplicateInterview(self.to_string())
    }
}

impl Identity for Task {
    fn is_same(&self, other: &Self) -> bool {
        self.is_same_task(other)
    }

    fn duplicate_error(&self) -> AddressBookError {
        AddressBookError::DuplicateTask(self.description().to_string())
    }
}

/// Insertion-ordered list in which no two elements share an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity> UniqueList<T> {
    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.is_same(candidate))
    }

    pub fn add(&mut self, item: T) -> Result<(), AddressBookError> {
        if self.contains(&item) {
            return Err(item.duplicate_error());
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces the element equal to `target`. `None` when `target` is not stored.
    pub fn replace(&mut self, target: &T, edited: T) -> Option<Result<(), AddressBookError>>
    where
        T: PartialEq,
    {
        let index = self.items.iter().position(|item| item == target)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(other, item)| other != index && item.is_same(&edited));
        if collides {
            return Some(Err(edited.duplicate_error()));
        }
        self.items[index] = edited;
        Some(Ok(()))
    }

    /// Removes the element equal to `target`, returning whether it was present.
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|item| item == target) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    /// Rewrites every element in place. `rewrite` must not merge two identities.
    pub fn rewrite(&mut self, mut rewrite: impl FnMut(&T) -> Option<T>) {
        for item in &mut self.items {
            if let Some(updated) = rewrite(item) {
                *item = updated;
            }
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Description;

    fn task(description: &str, done: bool) -> Task {
        Task::new(Description::parse(description).expect("valid"), None, done)
    }

    #[test]
    fn add_rejects_same_identity() {
        let mut list = UniqueList::default();
        list.add(task("Call referees", false)).expect("first add");
        let err = list.add(task("Call referees", true)).unwrap_err();
        assert_eq!(err, AddressBookError::DuplicateTask("Call referees".to_string()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn replace_allows_keeping_identity_but_not_colliding() {
        let mut list = UniqueList::default();
        list.add(task("Call referees", false)).expect("add");
        list.add(task("Book rooms", false)).expect("add");

        let outcome = list.replace(&task("Call referees", false), task("Call referees", true));
        assert_eq!(outcome, Some(Ok(())));
        assert!(list.as_slice()[0].is_done());

        let outcome = list.replace(&task("Book rooms", false), task("Call referees", false));
        assert!(matches!(outcome, Some(Err(AddressBookError::DuplicateTask(_)))));

        assert_eq!(list.replace(&task("Missing", false), task("Other", false)), None);
    }

    #[test]
    fn remove_requires_exact_match() {
        let mut list = UniqueList::default();
        list.add(task("Call referees", false)).expect("add");
        assert!(!list.remove(&task("Call referees", true)));
        assert!(list.remove(&task("Call referees", false)));
        assert!(list.is_empty());
    }
}
