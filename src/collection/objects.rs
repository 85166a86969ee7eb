//! Collection that never hands out references to its storage.

/// An ordered collection whose storage is only reachable through its methods.
///
/// Reads return an independent deep copy, so callers can never mutate the
/// internal sequence or observe later changes through an earlier result.
///
/// # Examples
///
/// ```rust
/// use signal_hub::collection::ObjectCollection;
///
/// let mut collection = ObjectCollection::new();
/// collection.add_object("Bob".to_string());
/// collection.add_object("Alice".to_string());
/// collection.add_object("Franck".to_string());
///
/// let before = collection.get_objects();
/// collection.remove_object(&"Alice".to_string());
///
/// assert_eq!(collection.get_objects(), vec!["Bob", "Franck"]);
/// assert_eq!(before, vec!["Bob", "Alice", "Franck"]);
/// ```
#[derive(Debug)]
pub struct ObjectCollection<T> {
    objects: Vec<T>,
}

impl<T> ObjectCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Append an object.
    pub fn add_object(&mut self, object: T) {
        self.objects.push(object);
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T: PartialEq> ObjectCollection<T> {
    /// Remove the first object equal to `object`.
    ///
    /// Returns whether anything was removed; a missing object is not an
    /// error.
    pub fn remove_object(&mut self, object: &T) -> bool {
        match self.objects.iter().position(|o| o == object) {
            Some(index) => {
                self.objects.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an equal object is stored.
    pub fn contains(&self, object: &T) -> bool {
        self.objects.contains(object)
    }
}

impl<T: Clone> ObjectCollection<T> {
    /// Copy of the current objects, in insertion order.
    ///
    /// `T: Clone` must produce an owned copy for the result to be
    /// independent; shared handles such as `Arc` or `Rc` would still alias.
    pub fn get_objects(&self) -> Vec<T> {
        self.objects.clone()
    }
}

impl<T> Default for ObjectCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ObjectCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ObjectCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}
