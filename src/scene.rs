//! Name ordering for scene objects.

use std::cmp::Ordering;

/// Anything with an optional display name.
pub trait Named {
    fn name(&self) -> Option<&str>;
}

impl Named for str {
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl Named for String {
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

impl<T: Named> Named for Option<T> {
    fn name(&self) -> Option<&str> {
        self.as_ref().and_then(Named::name)
    }
}

/// Compare two objects by name, ignoring case.
///
/// A missing object or a missing name sorts before any name; two missing
/// names are equal.
///
/// # Example
///
/// ```rust
/// use animguard::scene::compare_by_name;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_by_name("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare_by_name("TALK", "talk"), Ordering::Equal);
/// assert_eq!(compare_by_name(None::<&str>, "a"), Ordering::Less);
/// ```
pub fn compare_by_name<A, B>(a: A, b: B) -> Ordering
where
    A: Named,
    B: Named,
{
    match (a.name(), b.name()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    }
}

/// Stable sort by [`compare_by_name`].
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| compare_by_name(a, b));
}
