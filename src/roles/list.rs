//! Role-list helpers

/// Check whether `name` occurs anywhere in `roles`
pub fn contains_role<S: AsRef<str>>(roles: &[S], name: &str) -> bool {
    roles.iter().any(|r| r.as_ref() == name)
}

/// Copy of `items` with every element equal to `item` removed.
///
/// Order is preserved and `items` is left untouched.
pub fn remove_all<T, Q>(items: &[T], item: &Q) -> Vec<T>
where
    T: PartialEq<Q> + Clone,
    Q: ?Sized,
{
    items.iter().filter(|i| *i != item).cloned().collect()
}

/// Copy of `roles` without any occurrence of `name`
pub fn without_role(roles: &[String], name: &str) -> Vec<String> {
    remove_all(roles, name)
}
