mod message;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Message)] derive macro
// ============================================================================

/// Derive macro that implements `courier::Message` for a struct or enum.
///
/// The message kind name defaults to the type's identifier. It can be
/// overridden with `#[message(name = "...")]`.
///
/// # Usage
///
/// ```ignore
/// use courier::Message;
///
/// #[derive(Debug, Message)]
/// struct Ping;
///
/// #[derive(Debug, Message)]
/// #[message(name = "player.moved")]
/// struct PlayerMoved {
///     x: f32,
///     y: f32,
/// }
/// ```
///
/// Generic type parameters receive a `'static` bound, since message kinds
/// are keyed by `TypeId`.
#[proc_macro_derive(Message, attributes(message))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    message::derive_message(input)
}
