// ABOUTME: Declarative macros that keep the SMPP status table in a single place
// ABOUTME: Generates the CommandStatus constants and their description lookup together

/// Declares the table of known `command_status` values.
///
/// Each entry produces an associated constant on `CommandStatus`, an arm in
/// the `known_description` lookup and a slot in `CommandStatus::KNOWN`. The
/// values are literals so that the lookup compiles down to a plain `match`,
/// which needs no initialisation at runtime and can be read from any thread.
///
/// # Arguments
/// * `$name` - The constant name (e.g., `INVALID_MSG_LENGTH`)
/// * `$value` - The wire value as a `u32` literal
/// * `$description` - Lowercase diagnostic text returned by `description`
macro_rules! command_statuses {
    ($( $(#[$meta:meta])* $name:ident = $value:literal => $description:literal; )*) => {
        impl $crate::datatypes::CommandStatus {
            $(
                $(#[$meta])*
                pub const $name: Self = Self($value);
            )*

            /// Every status value with an entry in the table, in wire order.
            pub const KNOWN: &'static [Self] = &[$(Self::$name),*];

            /// Returns the table description, or `None` for values the table
            /// does not list.
            pub const fn known_description(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some($description), )*
                    _ => None,
                }
            }
        }
    };
}
