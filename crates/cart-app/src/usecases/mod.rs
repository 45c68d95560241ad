//! Use cases exposed to the UI layer.

mod add_to_cart;
mod decrement_item;
mod get_cart;
mod increment_item;

pub use add_to_cart::AddToCart;
pub use decrement_item::DecrementItem;
pub use get_cart::GetCart;
pub use increment_item::IncrementItem;
