// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`!] macro. Prints a colored diff of the two
/// sides when they don't match, which is much easier to read for display strings.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Fire an optional boxed callback with the given args. Does nothing if no callback is
/// registered.
///
/// ```
/// use formkit::fire_callback;
///
/// let mut seen = vec![];
/// {
///     let mut on_change: Option<Box<dyn FnMut(&str)>> =
///         Some(Box::new(|it: &str| seen.push(it.to_string())));
///     fire_callback!(on_change, "123");
///     let mut on_blur: Option<Box<dyn FnMut()>> = None;
///     fire_callback!(on_blur);
/// }
/// assert_eq!(seen, vec!["123".to_string()]);
/// ```
#[macro_export]
macro_rules! fire_callback {
    ($callback:expr $(, $arg:expr)* $(,)?) => {
        if let Some(callback) = $callback.as_mut() {
            callback($($arg),*);
        }
    };
}
