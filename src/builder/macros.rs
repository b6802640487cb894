//! Macros for ergonomic automaton construction.

/// Declare an automaton's candidate lists in one block.
///
/// State names are written as bare identifiers; symbols as `char` literals.
/// The macro expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder),
/// so finish with `.build()`, `.build_with_report()` or `.build_strict()`.
///
/// # Example
///
/// ```
/// use dfsm::automaton;
///
/// let automaton = automaton! {
///     states: [even, odd],
///     alphabet: ['0', '1'],
///     transitions: [
///         (even, '0', even),
///         (even, '1', odd),
///         (odd, '0', odd),
///         (odd, '1', even),
///     ],
///     start: even,
///     accepting: [even],
/// }
/// .build();
///
/// assert!(automaton.accepts("1001".chars()));
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [$($state:ident),* $(,)?],
        alphabet: [$($symbol:literal),* $(,)?],
        transitions: [$(($from:ident, $on:literal, $to:ident)),* $(,)?],
        $(start: $start:ident,)?
        accepting: [$($accept:ident),* $(,)?] $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state(stringify!($state)))*
            $(.symbol($symbol))*
            $(.transition(stringify!($from), $on, stringify!($to)))*
            $(.start(stringify!($start)))?
            $(.accepting(stringify!($accept)))*
    };
}
