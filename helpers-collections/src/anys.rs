//! Fallbacks for absent and zero values.

/// Returns the contained value, or `default` when there is none.
pub fn or_default<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Returns `value`, or `default` when `value` is the type's zero value.
pub fn zero_default<T: Default + PartialEq>(value: T, default: T) -> T {
    if is_zero(&value) {
        default
    } else {
        value
    }
}

/// Returns true if `value` equals `T::default()`.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
