/// User-facing, fire-and-forget message produced by cart operations.
///
/// At most one notification is fired per failed operation; successful
/// operations fire none. The `Display` text is what a storefront UI
/// would show in a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The requested quantity exceeds the available stock
    OutOfStock,
    /// Adding a product failed (network, API, or storage)
    AddFailed,
    /// Removing a product failed (not in cart, or storage)
    RemoveFailed,
    /// Changing a quantity failed (network, API, or storage)
    UpdateFailed,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::OutOfStock => write!(f, "Requested quantity is out of stock"),
            Notification::AddFailed => write!(f, "Failed to add product"),
            Notification::RemoveFailed => write!(f, "Failed to remove product"),
            Notification::UpdateFailed => write!(f, "Failed to update product quantity"),
        }
    }
}
