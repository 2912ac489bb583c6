/// Builds a [`Document`](crate::Document) in memory.
///
/// Each `"Name" => { ... }` block appends a new section, so repeating a name
/// produces duplicate sections exactly as repeating a header in a file does.
/// Inside a block, assignments use the same three operators as the file
/// format.
///
/// ```rust
/// use launcher_ini::{ini, Operator};
///
/// let doc = ini! {
///     "Server" => {
///         "Name" = "Arena",
///         "Map" += "DM-Deck",
///         "Map" -= "DM-Old",
///     },
///     "Server" => {
///         "Port" = "7777",
///     },
/// };
///
/// assert_eq!(doc.sections().len(), 2);
/// assert_eq!(doc.sections()[0].get_all("map")[1].operator(), Operator::Remove);
/// assert_eq!(doc.section("Server").unwrap().get_int("port", 0), 7777);
/// ```
#[macro_export]
macro_rules! ini {
    (@op =) => {
        $crate::Operator::Assign
    };
    (@op +=) => {
        $crate::Operator::Append
    };
    (@op -=) => {
        $crate::Operator::Remove
    };

    ($( $section:literal => { $( $key:literal $op:tt $value:expr ),* $(,)? } ),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut doc = $crate::Document::new();
        $(
            let section = doc.append_section($section);
            $(
                section.add($key, $value, $crate::ini!(@op $op));
            )*
            let _ = section;
        )*
        doc
    }};
}
